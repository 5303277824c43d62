use super::{SignClass, format};
use crate::model::result::SimulationResult;
use prettytable::{Cell, Row, Table};
use serde::Serialize;

pub trait TablePrinter {
    fn table(&self) -> Table;

    fn print(&self) {
        self.table().printstd();
    }
}

/// One labelled line of rendered output.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ResultRow {
    pub label: &'static str,
    pub text: String,
    /// `None` for non-numeric rows (eg/ order type).
    pub class: Option<SignClass>,
}

impl ResultRow {
    fn text(label: &'static str, text: String) -> Self {
        Self {
            label,
            text,
            class: None,
        }
    }

    fn number(label: &'static str, value: f64, is_percentage: bool) -> Self {
        let display = format(value, is_percentage);
        Self {
            label,
            text: display.text,
            class: Some(display.class),
        }
    }
}

/// Display-ready projection of a [`SimulationResult`], in fixed row order.
///
/// Every number is taken verbatim from the result, nothing is derived.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ResultView {
    pub rows: Vec<ResultRow>,
}

impl From<&SimulationResult> for ResultView {
    fn from(result: &SimulationResult) -> Self {
        let fees = format(result.fees.fee_amount, false);

        Self {
            rows: vec![
                ResultRow::text("Order Type", result.order_type.to_uppercase()),
                ResultRow::number("Filled Quantity", result.filled_quantity, false),
                ResultRow::number("Average Price", result.avg_price, false),
                ResultRow::number("Slippage", result.slippage, true),
                ResultRow::number("Regression Slippage", result.reg_slippage, true),
                ResultRow::number("Mid Price", result.mid_price, false),
                ResultRow {
                    label: "Fees",
                    text: format!("{} ({})", fees.text, result.fees.fee_tier),
                    class: Some(fees.class),
                },
                ResultRow::number("Market Impact", result.market_impact, true),
                ResultRow::number("Net Cost", result.net_cost, false),
                ResultRow::number("Volatility", result.volatility, true),
                ResultRow::text(
                    "Processing Time",
                    format!("{} ms", result.processing_time_ms),
                ),
                ResultRow::number("Optimal Schedule", result.optimal_schedule, false),
                ResultRow::number("Maker Probability", result.maker_prob, true),
                ResultRow::number("Taker Probability", result.taker_prob, true),
            ],
        }
    }
}

impl ResultView {
    /// Find the rendered text of the row with the provided label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.text.as_str())
    }
}

impl TablePrinter for ResultView {
    fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_titles(Row::new(vec![
            Cell::new("Simulation Output"),
            Cell::new(""),
        ]));

        for row in &self.rows {
            let value = match row.class {
                Some(SignClass::Positive) => Cell::new(&row.text).style_spec("rFg"),
                Some(SignClass::Negative) => Cell::new(&row.text).style_spec("rFr"),
                None => Cell::new(&row.text).style_spec("r"),
            };
            table.add_row(Row::new(vec![Cell::new(row.label), value]));
        }

        table
    }
}
