//! User header (block 3)
//!
//! Block 3 carries up to four braced sub-tags, each optional, always in the
//! order `{113:}{108:}{111:}{121:}`. The header is all-or-nothing: if any
//! part of the payload fails to match, no sub-field is kept.

use std::fmt;

use tracing::debug;

use crate::error::{Level, Mt10xError, Result};
use crate::validation::{
    validate_bank_priority_code, validate_message_user_reference,
    validate_service_type_identifier, validate_uetr,
};

/// Sub-tags in canonical order with their value validators
const SUB_TAGS: [(&str, fn(&str) -> Result<()>); 4] = [
    ("113", validate_bank_priority_code),
    ("108", validate_message_user_reference),
    ("111", validate_service_type_identifier),
    ("121", validate_uetr),
];

/// User header (block 3)
///
/// # Example
///
/// ```
/// use mt10x_rs::UserHeader;
///
/// let header = UserHeader::parse("{113:SEPA}{111:001}{121:d2d62e74-4f7d-45dc-a230-85fa259e1694}");
/// assert!(header.is_valid());
/// assert_eq!(header.bank_priority_code(), Some("SEPA"));
/// assert_eq!(header.message_user_reference(), None);
/// assert_eq!(header.sti(), Some("001"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserHeader {
    raw: String,
    bank_priority_code: Option<String>,
    message_user_reference: Option<String>,
    service_type_identifier: Option<String>,
    unique_end_to_end_transaction_reference: Option<String>,
    error: Option<Mt10xError>,
}

impl UserHeader {
    /// Decode a user header payload (the text between `{3:` and the closing `}`)
    pub fn parse(raw: &str) -> Self {
        let mut header = UserHeader {
            raw: raw.to_string(),
            bank_priority_code: None,
            message_user_reference: None,
            service_type_identifier: None,
            unique_end_to_end_transaction_reference: None,
            error: None,
        };

        if raw.trim().is_empty() {
            header.error = Some(Mt10xError::EmptyInput);
            return header;
        }

        match match_sub_tags(raw) {
            Ok([bpc, mur, sti, uetr]) => {
                header.bank_priority_code = bpc.map(str::to_string);
                header.message_user_reference = mur.map(str::to_string);
                header.service_type_identifier = sti.map(str::to_string);
                header.unique_end_to_end_transaction_reference = uetr.map(str::to_string);
            }
            Err(e) => {
                debug!("User header rejected: {}", e);
                header.error = Some(e);
            }
        }

        header
    }

    /// Original payload text
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True when the whole payload matched the sub-tag grammar
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Why the payload was rejected, if it was
    pub fn error(&self) -> Option<&Mt10xError> {
        self.error.as_ref()
    }

    /// Bank priority code, `{113:}`
    pub fn bank_priority_code(&self) -> Option<&str> {
        self.bank_priority_code.as_deref()
    }

    /// Message user reference, `{108:}`
    pub fn message_user_reference(&self) -> Option<&str> {
        self.message_user_reference.as_deref()
    }

    /// Service type identifier, `{111:}`
    pub fn service_type_identifier(&self) -> Option<&str> {
        self.service_type_identifier.as_deref()
    }

    /// Unique end-to-end transaction reference, `{121:}`
    pub fn unique_end_to_end_transaction_reference(&self) -> Option<&str> {
        self.unique_end_to_end_transaction_reference.as_deref()
    }

    /// Alias for [`bank_priority_code`](Self::bank_priority_code)
    pub fn bpc(&self) -> Option<&str> {
        self.bank_priority_code()
    }

    /// Alias for [`message_user_reference`](Self::message_user_reference)
    pub fn mur(&self) -> Option<&str> {
        self.message_user_reference()
    }

    /// Alias for [`service_type_identifier`](Self::service_type_identifier)
    pub fn sti(&self) -> Option<&str> {
        self.service_type_identifier()
    }

    /// Alias for [`unique_end_to_end_transaction_reference`](Self::unique_end_to_end_transaction_reference)
    pub fn uetr(&self) -> Option<&str> {
        self.unique_end_to_end_transaction_reference()
    }
}

impl fmt::Display for UserHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Match the payload against `({113:..})?({108:..})?({111:..})?({121:..})?`
///
/// Returns the values in `SUB_TAGS` order.
fn match_sub_tags(raw: &str) -> Result<[Option<&str>; 4]> {
    let mut values = [None; 4];
    let mut rest = raw;

    for (slot, (tag, validate)) in values.iter_mut().zip(SUB_TAGS) {
        let Some(body) = rest
            .strip_prefix('{')
            .and_then(|r| r.strip_prefix(tag))
            .and_then(|r| r.strip_prefix(':'))
        else {
            continue;
        };

        let end = body.find('}').ok_or_else(|| {
            Mt10xError::mismatch(Level::UserHeader, format!("Unterminated {{{}:}} group", tag))
        })?;
        let value = &body[..end];
        validate(value)?;

        *slot = Some(value);
        rest = &body[end + 1..];
    }

    if !rest.is_empty() {
        return Err(Mt10xError::mismatch(
            Level::UserHeader,
            format!("Unexpected or out-of-order group: {:?}", rest),
        ));
    }

    Ok(values)
}
