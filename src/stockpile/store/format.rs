//! The on-disk catalog format.
//!
//! ```text
//! id,name,desc,price,quantity
//! 1,Mouse,Wireless,19.99,10
//! 2,Keyboard,Mechanical,49.5,3
//! ```
//!
//! Fields are split on every comma; there is no quoting or escaping, so text
//! fields must not contain commas or line breaks. Use [`is_representable`] to
//! check input before it reaches the catalog.

use crate::error::{Result, RowProblem, StockError};
use crate::model::{Catalog, Product, ProductId};
use std::collections::HashSet;
use std::fmt::Write;

pub const HEADER: &str = "id,name,desc,price,quantity";
pub const DELIMITER: char = ',';
const COLUMNS: usize = 5;

/// Parses a whole catalog file. Row order is preserved.
pub fn parse(text: &str) -> Result<Catalog> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((header_line, header)) = lines.next() else {
        return Ok(Catalog::new());
    };
    if header.trim() != HEADER {
        return Err(StockError::format(
            header_line,
            RowProblem::BadHeader {
                expected: HEADER,
                found: header.to_string(),
            },
        ));
    }

    let mut products = Vec::new();
    let mut seen = HashSet::new();
    for (line_no, line) in lines {
        let product = parse_row(line_no, line)?;
        if !seen.insert(product.id) {
            return Err(StockError::format(
                line_no,
                RowProblem::DuplicateId(product.id),
            ));
        }
        products.push(product);
    }

    Ok(Catalog { products })
}

fn parse_row(line_no: usize, line: &str) -> Result<Product> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let [id, name, desc, price, quantity] = fields.as_slice() else {
        return Err(StockError::format(
            line_no,
            RowProblem::FieldCount {
                expected: COLUMNS,
                found: fields.len(),
            },
        ));
    };

    let id: u64 = parse_number(line_no, "id", id)?;
    if id == 0 {
        return Err(StockError::format(line_no, RowProblem::ZeroId));
    }
    let price: f64 = parse_number(line_no, "price", price)?;
    if !price.is_finite() {
        return Err(invalid(line_no, "price", &price.to_string()));
    }
    let quantity: u32 = parse_number(line_no, "quantity", quantity)?;

    Ok(Product {
        id: ProductId(id),
        name: name.to_string(),
        description: desc.to_string(),
        price,
        quantity,
    })
}

fn parse_number<T: std::str::FromStr>(
    line_no: usize,
    field: &'static str,
    raw: &str,
) -> Result<T> {
    raw.trim().parse().map_err(|_| invalid(line_no, field, raw))
}

fn invalid(line_no: usize, field: &'static str, raw: &str) -> StockError {
    StockError::format(
        line_no,
        RowProblem::InvalidNumber {
            field,
            value: raw.to_string(),
        },
    )
}

/// Renders the header followed by one line per product.
///
/// Prices use the shortest representation that parses back to the same
/// value, so `19.99` stays `19.99` and `10.0` becomes `10`.
pub fn render(catalog: &Catalog) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + catalog.len() * 32);
    out.push_str(HEADER);
    out.push('\n');
    for p in catalog {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{}{d}{}{d}{}{d}{}{d}{}",
            p.id,
            p.name,
            p.description,
            p.price,
            p.quantity,
            d = DELIMITER
        );
    }
    out
}

/// True when the text can be stored in a field without breaking the row.
pub fn is_representable(text: &str) -> bool {
    !text.contains([DELIMITER, '\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::ProductDraft;

    fn problem(err: StockError) -> (usize, RowProblem) {
        match err {
            StockError::Format { line, problem } => (line, problem),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn parses_rows_in_order() {
        let text = "id,name,desc,price,quantity\n5,Cable,USB-C,9.5,100\n2,Mouse,Wireless,19.99,10\n";
        let catalog = parse(text).unwrap();
        let ids: Vec<_> = catalog.ids().collect();
        assert_eq!(ids, vec![ProductId(5), ProductId(2)]);
        assert_eq!(catalog.products()[1].description, "Wireless");
        assert_eq!(catalog.products()[1].price, 19.99);
        assert_eq!(catalog.products()[0].quantity, 100);
    }

    #[test]
    fn accepts_crlf_and_blank_lines() {
        let text = "id,name,desc,price,quantity\r\n1,Mouse,Wireless,19.99,10\r\n\r\n";
        let catalog = parse(text).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].quantity, 10);
    }

    #[test]
    fn empty_text_is_empty_catalog() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse(&format!("{HEADER}\n")).unwrap().is_empty());
    }

    #[test]
    fn rejects_wrong_header() {
        let (line, p) = problem(parse("id,name,price\n").unwrap_err());
        assert_eq!(line, 1);
        assert!(matches!(p, RowProblem::BadHeader { .. }));
    }

    #[test]
    fn non_numeric_price_fails_with_line() {
        let text = "id,name,desc,price,quantity\n1,A,a,1.0,1\n2,B,b,cheap,1\n";
        let (line, p) = problem(parse(text).unwrap_err());
        assert_eq!(line, 3);
        assert_eq!(
            p,
            RowProblem::InvalidNumber {
                field: "price",
                value: "cheap".into()
            }
        );
    }

    #[test]
    fn negative_quantity_is_not_an_integer_we_accept() {
        let text = "id,name,desc,price,quantity\n1,A,a,1.0,-2\n";
        let (_, p) = problem(parse(text).unwrap_err());
        assert!(matches!(p, RowProblem::InvalidNumber { field: "quantity", .. }));
    }

    #[test]
    fn rejects_nan_price() {
        let text = "id,name,desc,price,quantity\n1,A,a,NaN,2\n";
        let (_, p) = problem(parse(text).unwrap_err());
        assert!(matches!(p, RowProblem::InvalidNumber { field: "price", .. }));
    }

    #[test]
    fn rejects_extra_fields() {
        let text = "id,name,desc,price,quantity\n1,A,has, a comma,1.0,2\n";
        let (line, p) = problem(parse(text).unwrap_err());
        assert_eq!(line, 2);
        assert_eq!(p, RowProblem::FieldCount { expected: 5, found: 6 });
    }

    #[test]
    fn rejects_zero_and_duplicate_ids() {
        let zero = "id,name,desc,price,quantity\n0,A,a,1,1\n";
        assert_eq!(problem(parse(zero).unwrap_err()).1, RowProblem::ZeroId);

        let dup = "id,name,desc,price,quantity\n1,A,a,1,1\n1,B,b,2,2\n";
        let (line, p) = problem(parse(dup).unwrap_err());
        assert_eq!(line, 3);
        assert_eq!(p, RowProblem::DuplicateId(ProductId(1)));
    }

    #[test]
    fn renders_header_and_rows() {
        let mut catalog = Catalog::new();
        add::run(&mut catalog, ProductDraft::new("Mouse", "Wireless", 19.99, 10)).unwrap();
        add::run(&mut catalog, ProductDraft::new("Hub", "4 ports", 10.0, 0)).unwrap();
        assert_eq!(
            render(&catalog),
            "id,name,desc,price,quantity\n1,Mouse,Wireless,19.99,10\n2,Hub,4 ports,10,0\n"
        );
    }

    #[test]
    fn rendered_text_parses_back() {
        let mut catalog = Catalog::new();
        add::run(&mut catalog, ProductDraft::new("Mouse", "Wireless", 19.99, 10)).unwrap();
        add::run(&mut catalog, ProductDraft::new("Screen", "", 0.1 + 0.2, 1)).unwrap();
        assert_eq!(parse(&render(&catalog)).unwrap(), catalog);
    }

    #[test]
    fn representable_text() {
        assert!(is_representable("Wireless mouse"));
        assert!(!is_representable("red, blue"));
        assert!(!is_representable("two\nlines"));
    }
}
