//! Failure-code description tables.
//!
//! Each handler owns a distinct numeric failure-code namespace, carried in
//! the first payload byte of a FAILED response. A catalog maps those codes
//! to descriptive strings; codes outside the table never crash a lookup.

/// A static mapping from failure code to description, bound to an engine
/// instance at construction.
#[derive(Debug, Clone, Copy)]
pub struct ErrorCatalog {
    entries: &'static [(u8, &'static str)],
}

impl ErrorCatalog {
    /// A catalog with no entries; every code resolves as unknown.
    pub const EMPTY: ErrorCatalog = ErrorCatalog { entries: &[] };

    /// Create a catalog over a static table of `(code, description)` pairs.
    pub const fn new(entries: &'static [(u8, &'static str)]) -> Self {
        Self { entries }
    }

    /// Look up the description for a failure code.
    pub fn describe(&self, code: u8) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|&&(known, _)| known == code)
            .map(|&(_, description)| description)
    }

    /// Look up a failure code, formatting unmapped codes as a clearly
    /// marked unknown instead of failing.
    pub fn describe_or_unknown(&self, code: u8) -> String {
        match self.describe(code) {
            Some(description) => description.to_string(),
            None => format!("unknown error code 0x{code:02X}"),
        }
    }
}
