//! Parsing of operator input, shared by clap value parsers and the menu.
//!
//! The library only checks types; the range and character rules live here.

use stockpile::model::ProductId;
use stockpile::store::format;

pub fn parse_id(s: &str) -> Result<ProductId, String> {
    match s.parse::<ProductId>() {
        Ok(id) if id.get() > 0 => Ok(id),
        _ => Err(format!("\"{}\" is not a product id", s.trim())),
    }
}

pub fn parse_price(s: &str) -> Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        Ok(_) => Err("price must be zero or more".to_string()),
        Err(_) => Err(format!("\"{}\" is not a valid price", s.trim())),
    }
}

pub fn parse_quantity(s: &str) -> Result<u32, String> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| format!("\"{}\" is not a valid quantity", s.trim()))
}

pub fn parse_text(s: &str) -> Result<String, String> {
    let text = s.trim();
    if !format::is_representable(text) {
        return Err(format!(
            "text cannot contain \"{}\" or line breaks",
            format::DELIMITER
        ));
    }
    Ok(text.to_string())
}

pub fn parse_name(s: &str) -> Result<String, String> {
    let name = parse_text(s)?;
    if name.is_empty() {
        return Err("name cannot be empty".to_string());
    }
    Ok(name)
}
