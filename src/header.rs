//! Fixed-offset header blocks
//!
//! Blocks 1 and 2 are fixed-width records; fields are cut at constant
//! character offsets with no charset checks. Input shorter than the record
//! simply leaves the trailing fields unset.

use std::fmt;

/// Cut `raw[start..end]` by character position
///
/// Returns `None` when `start` is at or past the end of the input and the
/// available prefix when the input ends inside the field.
fn slice_chars(raw: &str, start: usize, end: usize) -> Option<String> {
    let mut chars = raw.chars().skip(start).peekable();
    chars.peek()?;
    Some(chars.take(end - start).collect())
}

/// Basic header (block 1)
///
/// Layout (25 characters):
///
/// | Offset | Width | Field |
/// |--------|-------|-------|
/// | 0 | 1 | application id (`F`) |
/// | 1 | 2 | service id (`01`) |
/// | 3 | 12 | logical terminal address |
/// | 15 | 4 | session number |
/// | 19 | 6 | sequence number |
///
/// # Example
///
/// ```
/// use mt10x_rs::BasicHeader;
///
/// let header = BasicHeader::parse("F01ASDFJK20AXXX0987654321");
/// assert!(header.is_valid());
/// assert_eq!(header.logical_terminal_address(), Some("ASDFJK20AXXX"));
/// assert_eq!(header.sequence_number(), Some("654321"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicHeader {
    raw: String,
    application_id: Option<String>,
    service_id: Option<String>,
    logical_terminal_address: Option<String>,
    session_number: Option<String>,
    sequence_number: Option<String>,
}

impl BasicHeader {
    /// Decode a basic header payload (the text between `{1:` and `}`)
    pub fn parse(raw: &str) -> Self {
        let mut header = BasicHeader {
            raw: raw.to_string(),
            ..Default::default()
        };

        if raw.trim().is_empty() {
            return header;
        }

        header.application_id = slice_chars(raw, 0, 1);
        header.service_id = slice_chars(raw, 1, 3);
        header.logical_terminal_address = slice_chars(raw, 3, 15);
        header.session_number = slice_chars(raw, 15, 19);
        header.sequence_number = slice_chars(raw, 19, 25);
        header
    }

    /// Original payload text
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// False for an empty or whitespace-only payload
    pub fn is_valid(&self) -> bool {
        !self.raw.trim().is_empty()
    }

    /// Application identifier, offset 0
    pub fn application_id(&self) -> Option<&str> {
        self.application_id.as_deref()
    }

    /// Service identifier, offsets 1..3
    pub fn service_id(&self) -> Option<&str> {
        self.service_id.as_deref()
    }

    /// Sender's logical terminal address, offsets 3..15
    pub fn logical_terminal_address(&self) -> Option<&str> {
        self.logical_terminal_address.as_deref()
    }

    /// Session number, offsets 15..19
    pub fn session_number(&self) -> Option<&str> {
        self.session_number.as_deref()
    }

    /// Input or output sequence number, offsets 19..25
    pub fn sequence_number(&self) -> Option<&str> {
        self.sequence_number.as_deref()
    }
}

impl fmt::Display for BasicHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Application header (block 2)
///
/// Layout (21 characters):
///
/// | Offset | Width | Field |
/// |--------|-------|-------|
/// | 0 | 1 | input/output flag (`I` or `O`) |
/// | 1 | 3 | message type (`103`) |
/// | 4 | 12 | destination address |
/// | 16 | 1 | priority |
/// | 17 | 1 | delivery monitoring |
/// | 18 | 3 | obsolescence period |
///
/// Output headers (`O`) use the same offsets; their longer payload is kept
/// in `raw()` but not decomposed further.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationHeader {
    raw: String,
    input_output: Option<String>,
    message_type: Option<String>,
    destination_address: Option<String>,
    priority: Option<String>,
    delivery_monitoring: Option<String>,
    obsolescence_period: Option<String>,
}

impl ApplicationHeader {
    /// Decode an application header payload (the text between `{2:` and `}`)
    pub fn parse(raw: &str) -> Self {
        let mut header = ApplicationHeader {
            raw: raw.to_string(),
            ..Default::default()
        };

        if raw.trim().is_empty() {
            return header;
        }

        header.input_output = slice_chars(raw, 0, 1);
        header.message_type = slice_chars(raw, 1, 4);
        header.destination_address = slice_chars(raw, 4, 16);
        header.priority = slice_chars(raw, 16, 17);
        header.delivery_monitoring = slice_chars(raw, 17, 18);
        header.obsolescence_period = slice_chars(raw, 18, 21);
        header
    }

    /// Original payload text
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// False for an empty or whitespace-only payload
    pub fn is_valid(&self) -> bool {
        !self.raw.trim().is_empty()
    }

    /// `I` for messages sent to the network, `O` for messages delivered from it
    pub fn input_output(&self) -> Option<&str> {
        self.input_output.as_deref()
    }

    /// True when the header describes an input (`I`) message
    pub fn is_input(&self) -> bool {
        self.input_output() == Some("I")
    }

    /// SWIFT message type, e.g. `103`
    pub fn message_type(&self) -> Option<&str> {
        self.message_type.as_deref()
    }

    /// Receiver's address, offsets 4..16
    pub fn destination_address(&self) -> Option<&str> {
        self.destination_address.as_deref()
    }

    /// Message priority (`S`, `N` or `U`), offset 16
    pub fn priority(&self) -> Option<&str> {
        self.priority.as_deref()
    }

    /// Delivery monitoring option, offset 17
    pub fn delivery_monitoring(&self) -> Option<&str> {
        self.delivery_monitoring.as_deref()
    }

    /// Obsolescence period, offsets 18..21
    pub fn obsolescence_period(&self) -> Option<&str> {
        self.obsolescence_period.as_deref()
    }
}

impl fmt::Display for ApplicationHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
