//! CSV-safe line encoding for full-row output

use std::borrow::Cow;

/// Separator used when none is configured
pub const DEFAULT_SEPARATOR: char = ',';

const COMMA: char = ',';
const DOUBLE_QUOTE: char = '"';
const NEWLINE: char = '\n';
const CARRIAGE_RETURN: char = '\r';

/// Encodes a sequence of text values as a single CSV line.
///
/// A field is quoted when it contains the configured separator, a comma, a
/// double quote, a newline or a carriage return. A literal comma always
/// forces quoting, even when the separator is something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvEncoder {
    separator: char,
}

impl Default for CsvEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl CsvEncoder {
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Join the encoded values with the separator, without a trailing separator
    pub fn encode<I, S>(&self, values: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut line = String::new();
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                line.push(self.separator);
            }
            line.push_str(&self.encode_field(value.as_ref()));
        }
        line
    }

    /// Escape a single field, wrapping it in quotes when required
    pub fn encode_field<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if !self.needs_quotes(value) {
            return Cow::Borrowed(value);
        }

        let escaped = value.replace(DOUBLE_QUOTE, "\"\"");
        Cow::Owned(format!("{DOUBLE_QUOTE}{escaped}{DOUBLE_QUOTE}"))
    }

    fn needs_quotes(&self, value: &str) -> bool {
        value.chars().any(|c| {
            c == self.separator
                || c == COMMA
                || c == DOUBLE_QUOTE
                || c == NEWLINE
                || c == CARRIAGE_RETURN
        })
    }
}
