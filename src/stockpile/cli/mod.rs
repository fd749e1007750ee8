pub mod input;
pub mod menu;
pub mod print;
