//! Parser configuration

/// Default century added to the two-digit year of the settlement date
pub const DEFAULT_CENTURY: i32 = 2000;

/// Parser configuration
///
/// Controls how two-digit years are expanded and how large an input the
/// parser is willing to look at.
///
/// # Example
///
/// ```
/// use mt10x_rs::ParseConfig;
///
/// // Defaults: years are 20YY, no size limit
/// let config = ParseConfig::default();
/// assert_eq!(config.century, 2000);
///
/// // Reject anything larger than 10 KiB
/// let config = ParseConfig::new().with_max_input_len(10 * 1024);
/// assert_eq!(config.max_input_len, Some(10 * 1024));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseConfig {
    /// Century added to the `YY` digits of field `:32A:`
    ///
    /// Default: `2000`
    #[cfg_attr(feature = "serde", serde(default = "default_century"))]
    pub century: i32,

    /// Maximum accepted message length in bytes
    ///
    /// Longer input is reported as an invalid message without being scanned.
    /// Default: `None` (no limit)
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_input_len: Option<usize>,
}

#[cfg(feature = "serde")]
fn default_century() -> i32 {
    DEFAULT_CENTURY
}

impl ParseConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            century: DEFAULT_CENTURY,
            max_input_len: None,
        }
    }

    /// Set the century used to expand two-digit settlement years
    pub fn with_century(mut self, century: i32) -> Self {
        self.century = century;
        self
    }

    /// Set the maximum accepted message length in bytes
    pub fn with_max_input_len(mut self, limit: usize) -> Self {
        self.max_input_len = Some(limit);
        self
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}
