#![doc = include_str!("../README.md")]

mod config;
mod error;
/// Fixed-offset basic and application headers (blocks 1 and 2)
pub mod header;
/// MT10x message envelope
pub mod message;
/// Text block (block 4) fields
pub mod text;
/// User header (block 3)
pub mod user_header;
/// Character-class validation for user header sub-fields
pub mod validation;

pub use config::{ParseConfig, DEFAULT_CENTURY};
pub use error::{Level, Mt10xError, Result};
pub use header::{ApplicationHeader, BasicHeader};
pub use message::{parse_message, Message, Mt103};
pub use text::{Field, SettlementDate, TextBlock, TimeIndication};
pub use user_header::UserHeader;
pub use validation::{
    validate_bank_priority_code, validate_message_user_reference,
    validate_service_type_identifier, validate_uetr,
};
