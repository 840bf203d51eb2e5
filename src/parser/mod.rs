//! Character-level CSV parsing: token classification and the state machine

mod classify;
mod machine;

pub use classify::{Classifier, Token};
pub use machine::{CsvParser, State};
