//! Text block (block 4)
//!
//! The body of an MT10x message: a sequence of `:TAG:value` fields in a
//! fixed catalog order. This module is organized into:
//! - `catalog`: accepted tags, their order and value shapes
//! - `tokenizer`: the left-to-right scanner
//! - `types`: `TextBlock` and its value types
//! - `parsing`: assembling a `TextBlock` from scanned tokens

mod catalog;
mod parsing;
mod tokenizer;
mod types;

pub use self::types::{Field, SettlementDate, TextBlock, TimeIndication};
