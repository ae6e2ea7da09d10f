//! Rule-based field extraction for Norwegian invoices.

pub mod patterns;
pub mod normalize;
mod parser;

pub use normalize::{clean_text, format_number};
pub use parser::{FieldParser, RecordParser};
