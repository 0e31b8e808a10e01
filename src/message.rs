//! MT10x message envelope
//!
//! A message is up to five braced blocks, each optional, always in this
//! order:
//!
//! ```text
//! {1:basic header}{2:application header}{3:{113:..}{108:..}}{4:
//! :20:...
//! -}{5:trailer}
//! ```
//!
//! The envelope is strict: if the trimmed input is not exactly a sequence of
//! well-formed blocks, the message is invalid and no block is decomposed.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::config::ParseConfig;
use crate::error::{Level, Mt10xError, Result};
use crate::header::{ApplicationHeader, BasicHeader};
use crate::text::TextBlock;
use crate::user_header::UserHeader;

/// Payloads of the five top-level blocks, as slices of the trimmed input
#[derive(Debug, Default, PartialEq, Eq)]
struct Blocks<'a> {
    basic: Option<&'a str>,
    application: Option<&'a str>,
    user: Option<&'a str>,
    text: Option<&'a str>,
    trailer: Option<&'a str>,
}

fn mismatch(reason: impl Into<String>) -> Mt10xError {
    Mt10xError::mismatch(Level::Message, reason)
}

/// Payload of a `{N:...}` block that ends at the first `}`
fn simple_block<'a>(rest: &mut &'a str, marker: &str) -> Result<Option<&'a str>> {
    let Some(body) = rest.strip_prefix(marker) else {
        return Ok(None);
    };
    let end = body
        .find('}')
        .ok_or_else(|| mismatch(format!("Unterminated {} block", marker)))?;
    *rest = &body[end + 1..];
    Ok(Some(&body[..end]))
}

/// Payload of block 3: zero or more `{...}` groups followed by `}`
fn user_block<'a>(rest: &mut &'a str) -> Result<Option<&'a str>> {
    let Some(body) = rest.strip_prefix("{3:") else {
        return Ok(None);
    };

    let mut end = 0;
    while body[end..].starts_with('{') {
        let group = &body[end + 1..];
        let close = group
            .find(['{', '}'])
            .filter(|&i| group.as_bytes()[i] == b'}')
            .ok_or_else(|| mismatch("Malformed group in {3: block"))?;
        end += close + 2;
    }
    if !body[end..].starts_with('}') {
        return Err(mismatch("Unterminated {3: block"));
    }

    *rest = &body[end + 1..];
    Ok(Some(&body[..end]))
}

/// True if `s` is exactly one `{5:...}` block with a non-empty payload
fn is_trailer_block(s: &str) -> bool {
    s.strip_prefix("{5:")
        .and_then(|r| r.strip_suffix('}'))
        .is_some_and(|payload| !payload.is_empty())
}

/// Payload of block 4, without the surrounding whitespace and `-}` sentinel
///
/// The body ends at the first `-}` after which only an optional trailer
/// block remains.
fn text_block<'a>(rest: &mut &'a str) -> Result<Option<&'a str>> {
    let Some(body) = rest.strip_prefix("{4:") else {
        return Ok(None);
    };

    let end = body
        .match_indices("-}")
        .map(|(i, _)| i)
        .find(|&i| {
            let after = &body[i + 2..];
            after.is_empty() || is_trailer_block(after)
        })
        .ok_or_else(|| mismatch("Block {4: is not closed by -}"))?;

    *rest = &body[end + 2..];
    Ok(Some(body[..end].trim()))
}

fn split_blocks(input: &str) -> Result<Blocks<'_>> {
    let mut rest = input;
    let mut blocks = Blocks {
        basic: simple_block(&mut rest, "{1:")?,
        ..Default::default()
    };
    if blocks.basic == Some("") {
        return Err(mismatch("Empty {1: block"));
    }

    blocks.application = simple_block(&mut rest, "{2:")?;
    if let Some(app) = blocks.application {
        let discriminator_ok = app.starts_with(['I', 'O']) && app.len() > 1;
        if !discriminator_ok {
            return Err(mismatch(format!(
                "Application header must start with I or O and carry a payload: {:?}",
                app
            )));
        }
    }

    blocks.user = user_block(&mut rest)?;
    blocks.text = text_block(&mut rest)?;

    if let Some(trailer) = rest.strip_prefix("{5:") {
        if !is_trailer_block(rest) {
            return Err(mismatch("Malformed {5: block"));
        }
        blocks.trailer = Some(&trailer[..trailer.len() - 1]);
        rest = "";
    }

    if !rest.is_empty() {
        let offset = input.len() - rest.len();
        return Err(mismatch(format!("Unexpected text at offset {}", offset)));
    }

    Ok(blocks)
}

/// Parsed MT10x message
///
/// Holds the raw input verbatim; [`Display`](fmt::Display) renders it back
/// unchanged whether or not it parsed.
///
/// # Example
///
/// ```
/// use mt10x_rs::Message;
///
/// let raw = "{1:F01ASDFJK20AXXX0987654321}{2:I103ASDFJK22XXXXN}\
///            {4:\n:20:REF1\n:23B:CRED\n:32A:180117CAD5432,1\n-}";
/// let message = Message::parse(raw);
///
/// assert!(message.is_valid());
/// assert_eq!(message.application_header().unwrap().message_type(), Some("103"));
/// assert_eq!(message.text().unwrap().interbank_settled_currency(), Some("CAD"));
/// assert_eq!(message.to_string(), raw);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    raw: String,
    basic_header: Option<BasicHeader>,
    application_header: Option<ApplicationHeader>,
    user_header: Option<UserHeader>,
    text: Option<TextBlock>,
    trailer: Option<String>,
    error: Option<Mt10xError>,
}

/// MT103 single customer credit transfer; same envelope as every MT10x
pub type Mt103 = Message;

impl Message {
    /// Parse a raw message with default settings
    pub fn parse(raw: &str) -> Self {
        Self::parse_with(raw, &ParseConfig::default())
    }

    /// Parse a raw message
    ///
    /// Never fails: structural problems are reported through
    /// [`is_valid`](Self::is_valid) and [`error`](Self::error), and each
    /// block carries its own validity.
    pub fn parse_with(raw: &str, config: &ParseConfig) -> Self {
        let mut message = Message {
            raw: raw.to_string(),
            basic_header: None,
            application_header: None,
            user_header: None,
            text: None,
            trailer: None,
            error: None,
        };

        if let Some(limit) = config.max_input_len
            && raw.len() > limit
        {
            debug!(len = raw.len(), limit, "Message exceeds size limit");
            message.error = Some(Mt10xError::InputTooLong {
                len: raw.len(),
                limit,
            });
            return message;
        }

        let input = raw.trim();
        if input.is_empty() {
            message.error = Some(Mt10xError::EmptyInput);
            return message;
        }

        let blocks = match split_blocks(input) {
            Ok(blocks) => blocks,
            Err(e) => {
                debug!("Message rejected: {}", e);
                message.error = Some(e);
                return message;
            }
        };
        trace!(?blocks, "Split message into blocks");

        message.basic_header = blocks.basic.map(BasicHeader::parse);
        message.application_header = blocks.application.map(ApplicationHeader::parse);
        message.user_header = blocks.user.map(UserHeader::parse);
        message.text = blocks.text.map(|body| TextBlock::parse_with(body, config));
        message.trailer = blocks.trailer.map(str::to_string);
        message
    }

    /// Original input, untrimmed
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True when the input matched the block structure
    ///
    /// Says nothing about the blocks themselves; check `is_valid()` on each.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Why the envelope was rejected, if it was
    pub fn error(&self) -> Option<&Mt10xError> {
        self.error.as_ref()
    }

    /// Block 1
    pub fn basic_header(&self) -> Option<&BasicHeader> {
        self.basic_header.as_ref()
    }

    /// Block 2
    pub fn application_header(&self) -> Option<&ApplicationHeader> {
        self.application_header.as_ref()
    }

    /// Block 3
    pub fn user_header(&self) -> Option<&UserHeader> {
        self.user_header.as_ref()
    }

    /// Block 4
    pub fn text(&self) -> Option<&TextBlock> {
        self.text.as_ref()
    }

    /// Block 5 payload, not decomposed
    pub fn trailer(&self) -> Option<&str> {
        self.trailer.as_deref()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Message {
    type Err = Mt10xError;

    fn from_str(s: &str) -> Result<Self> {
        parse_message(s)
    }
}

/// Parse a raw message, failing if its block structure is invalid
///
/// The blocks inside a successfully returned message may still be invalid
/// individually.
///
/// # Example
///
/// ```
/// use mt10x_rs::{parse_message, Mt10xError};
///
/// assert!(parse_message("{2:I103BANKDEFFXXXXN}").is_ok());
/// assert_eq!(parse_message("   ").unwrap_err(), Mt10xError::EmptyInput);
/// assert!(parse_message("not a message").is_err());
/// ```
pub fn parse_message(raw: &str) -> Result<Message> {
    let mut message = Message::parse(raw);
    match message.error.take() {
        Some(e) => Err(e),
        None => Ok(message),
    }
}
