//! Character-class validation for user header sub-fields
//!
//! These functions check syntactic shape only. A bank priority code of
//! `ZZZZ` or a UETR nobody ever issued is accepted as long as it has the
//! right characters in the right places.

use uuid::{Uuid, Variant};

use crate::error::{Level, Mt10xError, Result};

/// Maximum length of a message user reference (`{108:}`)
pub const MAX_MUR_LEN: usize = 16;

/// Length of a hyphenated UETR (`8-4-4-4-12`)
const UETR_LEN: usize = 36;

/// Byte offsets of the hyphens in a hyphenated UETR
const UETR_HYPHENS: [usize; 4] = [8, 13, 18, 23];

fn mismatch(reason: String) -> Mt10xError {
    Mt10xError::mismatch(Level::UserHeader, reason)
}

/// Validates a bank priority code (`{113:}`)
///
/// Exactly four uppercase ASCII letters.
///
/// # Examples
///
/// ```
/// use mt10x_rs::validation::validate_bank_priority_code;
///
/// assert!(validate_bank_priority_code("SEPA").is_ok());
/// assert!(validate_bank_priority_code("sepa").is_err());
/// assert!(validate_bank_priority_code("SEP").is_err());
/// ```
pub fn validate_bank_priority_code(value: &str) -> Result<()> {
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(mismatch(format!(
            "Bank priority code must be 4 uppercase letters, got {:?}",
            value
        )));
    }
    Ok(())
}

/// Validates a message user reference (`{108:}`)
///
/// Zero to sixteen uppercase ASCII letters or digits.
///
/// # Examples
///
/// ```
/// use mt10x_rs::validation::validate_message_user_reference;
///
/// assert!(validate_message_user_reference("MT103").is_ok());
/// assert!(validate_message_user_reference("").is_ok());
/// assert!(validate_message_user_reference("MT103 003").is_err()); // space
/// ```
pub fn validate_message_user_reference(value: &str) -> Result<()> {
    if value.len() > MAX_MUR_LEN {
        return Err(mismatch(format!(
            "Message user reference longer than {} characters: {:?}",
            MAX_MUR_LEN, value
        )));
    }

    for ch in value.chars() {
        if !(ch.is_ascii_uppercase() || ch.is_ascii_digit()) {
            return Err(mismatch(format!(
                "Invalid character '{}' in message user reference (only A-Z and 0-9 allowed)",
                ch
            )));
        }
    }

    Ok(())
}

/// Validates a service type identifier (`{111:}`)
///
/// Exactly three ASCII digits.
pub fn validate_service_type_identifier(value: &str) -> Result<()> {
    if value.len() != 3 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(mismatch(format!(
            "Service type identifier must be 3 digits, got {:?}",
            value
        )));
    }
    Ok(())
}

/// Validates a unique end-to-end transaction reference (`{121:}`)
///
/// The value must be a hyphenated UUID (`xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`)
/// with version nibble `4` and variant nibble `y` in `{8, 9, a, b}`. Hex
/// digits are accepted in either case. Simple, braced and URN forms are
/// rejected.
///
/// # Examples
///
/// ```
/// use mt10x_rs::validation::validate_uetr;
///
/// assert!(validate_uetr("d2d62e74-4f7d-45dc-a230-85fa259e1694").is_ok());
/// assert!(validate_uetr("d2d62e74-4f7d-15dc-a230-85fa259e1694").is_err()); // version 1
/// assert!(validate_uetr("d2d62e744f7d45dca23085fa259e1694").is_err());     // no hyphens
/// ```
pub fn validate_uetr(value: &str) -> Result<()> {
    // Uuid::try_parse also accepts the simple, braced and urn forms
    let hyphenated = value.len() == UETR_LEN
        && UETR_HYPHENS
            .iter()
            .all(|&pos| value.as_bytes()[pos] == b'-');
    if !hyphenated {
        return Err(mismatch(format!(
            "UETR must be grouped 8-4-4-4-12, got {:?}",
            value
        )));
    }

    let uuid = Uuid::try_parse(value)
        .map_err(|e| mismatch(format!("UETR is not a hex UUID: {} ({})", value, e)))?;

    if uuid.get_version_num() != 4 {
        return Err(mismatch(format!(
            "UETR version nibble must be 4, got {}",
            uuid.get_version_num()
        )));
    }

    // RFC 4122 variant is the 10xx bit pattern, i.e. nibble 8, 9, a or b
    if uuid.get_variant() != Variant::RFC4122 {
        return Err(mismatch(format!(
            "UETR variant nibble must be one of 8, 9, a, b: {}",
            value
        )));
    }

    Ok(())
}
