//! Component order text assembly
//!
//! Builds the plain-text order an operator hands to purchasing: a header
//! line, a blank line, then one pipe-separated line per selected component
//! with the requested quantity.

use crate::app::models::DisplayRow;
use crate::constants::ORDER_HEADER;

/// One line of a component order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub designator: String,
    pub value: String,
    pub tolerance: String,
    pub footprint: String,
    pub comment: String,
    pub quantity: u32,
}

impl OrderLine {
    /// Build an order line from a component's display row and a quantity
    pub fn from_display_row(row: &DisplayRow, quantity: u32) -> Self {
        Self {
            designator: row.designator.clone(),
            value: row.value.clone(),
            tolerance: row.tolerance.clone(),
            footprint: row.footprint.clone(),
            comment: row.comment.clone(),
            quantity,
        }
    }
}

/// Assemble the order text
///
/// Format per line:
/// `{designator} | {value} | {tolerance} | {footprint} | {comment} | QTD: {quantity}`
pub fn generate_order(lines: &[OrderLine]) -> String {
    let mut text = format!("{}\n\n", ORDER_HEADER);

    for line in lines {
        text.push_str(&format!(
            "{} | {} | {} | {} | {} | QTD: {}\n",
            line.designator,
            line.value,
            line.tolerance,
            line.footprint,
            line.comment,
            line.quantity
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_line(designator: &str, quantity: u32) -> OrderLine {
        OrderLine {
            designator: designator.to_string(),
            value: "100R".to_string(),
            tolerance: "±1%".to_string(),
            footprint: "0402".to_string(),
            comment: "R1 100R".to_string(),
            quantity,
        }
    }

    #[test]
    fn test_order_header_and_blank_line() {
        let text = generate_order(&[sample_line("R1", 100)]);
        assert!(text.starts_with("PEDIDO DE COMPONENTES\n\n"));
    }

    #[test]
    fn test_order_line_format() {
        let text = generate_order(&[sample_line("R1", 100)]);
        assert_eq!(
            text,
            "PEDIDO DE COMPONENTES\n\nR1 | 100R | ±1% | 0402 | R1 100R | QTD: 100\n"
        );
    }

    #[test]
    fn test_order_multiple_lines_keep_order_and_trailing_newline() {
        let text = generate_order(&[sample_line("R1", 50), sample_line("C3", 50)]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("R1 | "));
        assert!(lines[3].starts_with("C3 | "));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_order_from_display_row_with_placeholders() {
        let row = DisplayRow {
            designator: "R9".to_string(),
            value: "—".to_string(),
            tolerance: "—".to_string(),
            footprint: "0402".to_string(),
            feeder_id: "F9".to_string(),
            comment: "—".to_string(),
        };
        let line = OrderLine::from_display_row(&row, 10);

        let text = generate_order(&[line]);
        assert!(text.contains("R9 | — | — | 0402 | — | QTD: 10"));
    }
}
