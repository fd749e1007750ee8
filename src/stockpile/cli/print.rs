use colored::*;
use std::io::{self, Write};
use stockpile::api::{CmdMessage, MessageLevel};
use stockpile::index::DisplayRow;
use stockpile::model::Product;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 20;
const DESC_WIDTH: usize = 32;

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub fn print_rows<'a, W, I>(out: &mut W, rows: I, currency: &str) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = DisplayRow<'a>>,
{
    let mut any = false;
    for row in rows {
        any = true;
        let position = format!("{:>3})", row.position);
        let id = format!("#{:<4}", row.id);
        writeln!(
            out,
            "{} {} {} {} {:>10.2} {}",
            position,
            id.yellow(),
            fit(row.name, NAME_WIDTH).bold(),
            fit(row.description, DESC_WIDTH),
            row.price,
            currency
        )?;
    }
    if !any {
        writeln!(out, "{}", "No products found.".dimmed())?;
    }
    Ok(())
}

pub fn print_product<W: Write>(out: &mut W, product: &Product, currency: &str) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        format!("#{}", product.id).yellow(),
        product.name.bold()
    )?;
    writeln!(out, "--------------------------------")?;
    writeln!(out, "Description: {}", product.description)?;
    writeln!(out, "Price:       {:.2} {}", product.price, currency)?;
    writeln!(out, "Quantity:    {}", product.quantity)?;
    Ok(())
}

/// Truncates to `width` columns (with an ellipsis) or pads with spaces.
fn fit(s: &str, width: usize) -> String {
    let mut result = String::new();
    let mut current = 0;

    if s.width() > width {
        for c in s.chars() {
            let w = c.width().unwrap_or(0);
            if current + w > width.saturating_sub(1) {
                break;
            }
            result.push(c);
            current += w;
        }
        result.push('…');
        current += 1;
    } else {
        result.push_str(s);
        current = s.width();
    }

    result.push_str(&" ".repeat(width.saturating_sub(current)));
    result
}
