//! Output formatting for VLSM plans.
//!
//! - `terminal` - result cards with colors
//! - `csv` - CSV rows
//! - `json` - machine readable report

mod csv;
mod json;
mod terminal;

pub use csv::{csv_row, render_csv, subnet_print, CSV_HEADER};
pub use json::{render_json, Report};
pub use terminal::{format_field, print_cards, render_card, render_cards};
