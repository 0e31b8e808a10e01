//! Left-to-right scanner for block 4
//!
//! The body is a run of `:TAG:value` segments. Fixed-shape values are read
//! by character class; free-text values run until the next tag-shaped token
//! (`:NN:` or `:NNA:`) or the end of the body. Tags must follow catalog
//! order. Scanning stops at the first violation and keeps what was read
//! before it.

use tracing::trace;

use crate::error::{Level, Mt10xError, Result};

use super::catalog::{self, FieldKind, Shape};

/// Time indication classes accepted in `:13C:`
const TIME_CLASSES: [&str; 3] = ["CLSTIME", "RNCTIME", "SNDTIME"];

/// Structured content of a token value
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Value<'a> {
    Text(&'a str),
    TimeIndication {
        class: &'a str,
        time: &'a str,
        sign: char,
        offset: &'a str,
    },
    Settlement {
        year: &'a str,
        month: &'a str,
        day: &'a str,
        currency: &'a str,
        amount: &'a str,
    },
    CurrencyAmount {
        currency: &'a str,
        amount: &'a str,
    },
}

/// One `:TAG:value` segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub kind: FieldKind,
    pub tag: &'a str,
    /// Whole value with surrounding whitespace trimmed
    pub raw_value: &'a str,
    pub value: Value<'a>,
}

/// Tokens read before scanning stopped, plus the reason it stopped early
#[derive(Debug)]
pub(crate) struct Tokenized<'a> {
    pub tokens: Vec<Token<'a>>,
    pub error: Option<Mt10xError>,
}

/// If a tag-shaped token (`:NN:` or `:NNX:`, X an uppercase letter) starts
/// at `pos`, return the tag text and the offset just past its closing colon
fn tag_at(input: &str, pos: usize) -> Option<(&str, usize)> {
    let bytes = input.as_bytes();
    let at = |i: usize| bytes.get(pos + i).copied();

    if at(0)? != b':' || !at(1)?.is_ascii_digit() || !at(2)?.is_ascii_digit() {
        return None;
    }
    match at(3)? {
        b':' => Some((&input[pos + 1..pos + 3], pos + 4)),
        b'A'..=b'Z' if at(4) == Some(b':') => Some((&input[pos + 1..pos + 4], pos + 5)),
        _ => None,
    }
}

/// Offset of the next tag-shaped token at or after `from`, or end of input
fn next_tag_boundary(input: &str, from: usize) -> usize {
    input[from..]
        .match_indices(':')
        .map(|(i, _)| from + i)
        .find(|&i| tag_at(input, i).is_some())
        .unwrap_or(input.len())
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn error(&self, reason: String) -> Mt10xError {
        Mt10xError::mismatch(Level::Text, format!("{} at offset {}", reason, self.pos))
    }

    /// Consume `n` bytes matching `pred`, returning them
    fn take_exact(&mut self, n: usize, pred: fn(u8) -> bool, what: &str) -> Result<&'a str> {
        let rest = self.rest();
        if rest.len() < n || !rest.as_bytes()[..n].iter().all(|&b| pred(b)) {
            return Err(self.error(format!("Expected {}", what)));
        }
        self.pos += n;
        Ok(&rest[..n])
    }

    /// Consume one or more bytes matching `pred`
    fn take_while1(&mut self, pred: fn(u8) -> bool, what: &str) -> Result<&'a str> {
        let rest = self.rest();
        let len = rest.bytes().take_while(|&b| pred(b)).count();
        if len == 0 {
            return Err(self.error(format!("Expected {}", what)));
        }
        self.pos += len;
        Ok(&rest[..len])
    }

    /// Consume up to (not including) the next colon
    fn take_until_colon(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest.find(':').unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn read_tag(&mut self) -> Result<&'a str> {
        let (tag, end) = tag_at(self.input, self.pos)
            .ok_or_else(|| self.error("Expected a field tag".to_string()))?;
        self.pos = end;
        Ok(tag)
    }

    fn read_value(&mut self, tag: &str, shape: Shape) -> Result<(&'a str, Value<'a>)> {
        let start = self.pos;
        let value = match shape {
            Shape::Token { allow_empty } => {
                let rest = self.rest();
                let len = rest
                    .find(|c: char| c.is_whitespace() || c == ':')
                    .unwrap_or(rest.len());
                if len == 0 && !allow_empty {
                    return Err(self.error(format!("Empty value for :{}:", tag)));
                }
                self.pos += len;
                Value::Text(&rest[..len])
            }
            Shape::UntilColon => Value::Text(self.take_until_colon().trim()),
            Shape::FreeText => {
                let end = next_tag_boundary(self.input, self.pos);
                let text = &self.input[self.pos..end];
                self.pos = end;
                Value::Text(text.trim())
            }
            Shape::TimeIndication => {
                self.take_exact(1, |b| b == b'/', "'/' before time indication class")?;
                let class = self.take_while1(|b| b.is_ascii_uppercase(), "time indication class")?;
                if !TIME_CLASSES.iter().any(|c| *c == class) {
                    return Err(self.error(format!("Unknown time indication class {}", class)));
                }
                self.take_exact(1, |b| b == b'/', "'/' after time indication class")?;
                let time = self.take_exact(4, |b| b.is_ascii_digit(), "HHMM time")?;
                let sign = self.take_exact(1, |b| b == b'+' || b == b'-', "UTC offset sign")?;
                let offset = self.take_exact(4, |b| b.is_ascii_digit(), "HHMM UTC offset")?;
                self.take_until_colon();
                Value::TimeIndication {
                    class,
                    time,
                    sign: if sign == "+" { '+' } else { '-' },
                    offset,
                }
            }
            Shape::Settlement => {
                let year = self.take_exact(2, |b| b.is_ascii_digit(), "YY")?;
                let month = self.take_exact(2, |b| b.is_ascii_digit(), "MM")?;
                let day = self.take_exact(2, |b| b.is_ascii_digit(), "DD")?;
                let (currency, amount) = self.read_currency_amount()?;
                Value::Settlement {
                    year,
                    month,
                    day,
                    currency,
                    amount,
                }
            }
            Shape::CurrencyAmount => {
                let (currency, amount) = self.read_currency_amount()?;
                Value::CurrencyAmount { currency, amount }
            }
        };

        let raw_value = match &value {
            Value::Text(text) => *text,
            _ => self.input[start..self.pos].trim(),
        };
        Ok((raw_value, value))
    }

    fn read_currency_amount(&mut self) -> Result<(&'a str, &'a str)> {
        let currency = self.take_exact(3, |b| b.is_ascii_uppercase(), "currency code")?;
        let amount = self.take_while1(|b| b.is_ascii_digit() || b == b',', "amount")?;
        Ok((currency, amount))
    }
}

/// Tokenize a block 4 body
///
/// `body` must already have its surrounding whitespace and the `-}`
/// sentinel removed.
pub(crate) fn tokenize(body: &str) -> Tokenized<'_> {
    let mut scanner = Scanner::new(body);
    let mut tokens = Vec::new();
    let mut cursor = 0;

    scanner.skip_whitespace();
    while !scanner.at_end() {
        match next_token(&mut scanner, &mut cursor) {
            Ok(token) => {
                trace!(tag = token.tag, value = token.raw_value, "Tokenized field");
                tokens.push(token);
            }
            Err(e) => {
                return Tokenized {
                    tokens,
                    error: Some(e),
                };
            }
        }
        scanner.skip_whitespace();
    }

    Tokenized {
        tokens,
        error: None,
    }
}

fn next_token<'a>(scanner: &mut Scanner<'a>, cursor: &mut usize) -> Result<Token<'a>> {
    let tag_pos = scanner.pos;
    let tag = scanner.read_tag()?;

    let Some((index, entry)) = catalog::lookup(tag, *cursor) else {
        scanner.pos = tag_pos;
        let reason = if catalog::is_known(tag) {
            format!("Tag :{}: out of order or repeated", tag)
        } else {
            format!("Unknown tag :{}:", tag)
        };
        return Err(scanner.error(reason));
    };

    let (raw_value, value) = scanner.read_value(tag, entry.shape)?;
    *cursor = if entry.repeatable { index } else { index + 1 };

    Ok(Token {
        kind: entry.kind,
        tag,
        raw_value,
        value,
    })
}
