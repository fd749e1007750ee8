//! The interactive menu loop.
//!
//! Reads one line per prompt from any `BufRead` and writes to any `Write`, so
//! the whole loop can be driven by a script in tests. End of input behaves
//! like choosing quit: the catalog is saved and the loop ends.

use super::input;
use super::print::{print_messages, print_product, print_rows};
use colored::*;
use console::Term;
use std::fmt::Display;
use std::io::{BufRead, Write};
use stockpile::api::{CmdMessage, InventoryApi};
use stockpile::error::Result;
use stockpile::model::ProductDraft;
use stockpile::store::CatalogStore;

pub struct MenuOptions<'a> {
    pub currency: &'a str,
    /// Clear the terminal before each menu and pause after each action.
    pub interactive: bool,
}

enum Flow {
    Continue,
    Quit,
}

struct Menu<'a, S: CatalogStore, R, W> {
    api: &'a mut InventoryApi<S>,
    input: R,
    out: W,
    currency: &'a str,
    interactive: bool,
}

/// Runs the menu until the operator quits, then saves the catalog.
pub fn run<S, R, W>(
    api: &mut InventoryApi<S>,
    input: R,
    out: W,
    options: MenuOptions<'_>,
) -> Result<()>
where
    S: CatalogStore,
    R: BufRead,
    W: Write,
{
    let mut menu = Menu {
        api,
        input,
        out,
        currency: options.currency,
        interactive: options.interactive,
    };
    menu.run()
}

impl<S: CatalogStore, R: BufRead, W: Write> Menu<'_, S, R, W> {
    fn run(&mut self) -> Result<()> {
        loop {
            if self.interactive {
                Term::stdout().clear_screen()?;
            }
            self.show_menu()?;

            let Some(choice) = self.read_line("Your choice: ")? else {
                break;
            };
            let flow = match choice.trim().to_lowercase().as_str() {
                "l" => self.list()?,
                "v" => self.view()?,
                "a" => self.add()?,
                "e" => self.edit()?,
                "d" => self.delete()?,
                "s" => self.save()?,
                "q" => Flow::Quit,
                _ => {
                    let msg = format!("Invalid choice \"{}\", try again.", choice.trim());
                    self.messages(&[CmdMessage::error(msg)])?;
                    Flow::Continue
                }
            };

            match flow {
                Flow::Quit => break,
                Flow::Continue if self.interactive => {
                    if self.read_line("\nPress Enter to return to the menu.")?.is_none() {
                        break;
                    }
                }
                Flow::Continue => {}
            }
        }

        let result = self.api.save()?;
        self.messages(&result.messages)
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "{}",
            "Welcome to the inventory manager!".magenta().bold()
        )?;
        if self.api.is_dirty() {
            writeln!(self.out, "{}", "(unsaved changes)".yellow())?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "{}", "Choose an option:".cyan())?;
        for option in [
            "(L)ist products",
            "(V)iew a product",
            "(A)dd a product",
            "(E)dit a product",
            "(D)elete a product",
            "(S)ave",
            "(Q)uit and save",
        ] {
            writeln!(self.out, "{}", option)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn list(&mut self) -> Result<Flow> {
        print_rows(&mut self.out, self.api.rows(), self.currency)?;
        Ok(Flow::Continue)
    }

    fn view(&mut self) -> Result<Flow> {
        self.list()?;
        let Some(id) = self.ask("Product id to view: ", input::parse_id)? else {
            return Ok(Flow::Quit);
        };
        let result = self.api.view(id);
        for product in &result.affected_products {
            print_product(&mut self.out, product, self.currency)?;
        }
        self.messages(&result.messages)?;
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> Result<Flow> {
        self.list()?;
        let Some(draft) = self.ask_draft(None)? else {
            return Ok(Flow::Quit);
        };
        let result = self.api.add(draft);
        self.messages(&result.messages)?;
        Ok(Flow::Continue)
    }

    fn edit(&mut self) -> Result<Flow> {
        self.list()?;
        let Some(id) = self.ask("Product id to edit: ", input::parse_id)? else {
            return Ok(Flow::Quit);
        };
        let found = self.api.view(id);
        let Some(current) = found.affected_products.into_iter().next() else {
            self.messages(&found.messages)?;
            return Ok(Flow::Continue);
        };

        writeln!(
            self.out,
            "Editing product #{}: {} {}",
            current.id,
            current.name,
            "(press Enter to keep a value)".dimmed()
        )?;
        let Some(draft) = self.ask_draft(Some(ProductDraft {
            name: current.name,
            description: current.description,
            price: current.price,
            quantity: current.quantity,
        }))?
        else {
            return Ok(Flow::Quit);
        };
        let result = self.api.edit(id, draft);
        self.messages(&result.messages)?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        self.list()?;
        let Some(id) = self.ask("Product id to delete: ", input::parse_id)? else {
            return Ok(Flow::Quit);
        };
        let result = self.api.remove(id);
        self.messages(&result.messages)?;
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> Result<Flow> {
        let result = self.api.save()?;
        self.messages(&result.messages)?;
        Ok(Flow::Continue)
    }

    /// Asks for all four fields. With `current`, a blank answer keeps the old value.
    fn ask_draft(&mut self, current: Option<ProductDraft>) -> Result<Option<ProductDraft>> {
        let (name, description, price, quantity) = match current {
            None => (
                self.ask("Name: ", input::parse_name)?,
                self.ask("Description: ", input::parse_text)?,
                self.ask("Price: ", input::parse_price)?,
                self.ask("Quantity: ", input::parse_quantity)?,
            ),
            Some(c) => (
                self.ask_or_keep("New name", c.name, input::parse_name)?,
                self.ask_or_keep("New description", c.description, input::parse_text)?,
                self.ask_or_keep("New price", c.price, input::parse_price)?,
                self.ask_or_keep("New quantity", c.quantity, input::parse_quantity)?,
            ),
        };
        match (name, description, price, quantity) {
            (Some(name), Some(description), Some(price), Some(quantity)) => Ok(Some(
                ProductDraft::new(name, description, price, quantity),
            )),
            _ => Ok(None),
        }
    }

    /// Prompts until `parse` accepts the answer. `None` on end of input.
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> std::result::Result<T, String>,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.messages(&[CmdMessage::error(format!("Invalid input: {}", e))])?,
            }
        }
    }

    fn ask_or_keep<T: Display>(
        &mut self,
        label: &str,
        current: T,
        parse: fn(&str) -> std::result::Result<T, String>,
    ) -> Result<Option<T>> {
        loop {
            let prompt = format!("{} [{}]: ", label, current);
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                return Ok(Some(current));
            }
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.messages(&[CmdMessage::error(format!("Invalid input: {}", e))])?,
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        print_messages(&mut self.out, messages)?;
        Ok(())
    }
}
