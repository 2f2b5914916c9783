//! Error taxonomy for the extraction layer
//!
//! Every failure that can cross the extraction boundary is reduced to
//! [`ExtractError`]. "Parsed fine but found nothing" is not an error: the
//! public entry points return [`ParseOutcome`] so callers can tell an empty
//! result apart from a parse failure.

use thiserror::Error;

/// Errors produced by the extraction layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The source identifier is not in the closed registry set
    #[error("unsupported source: {0}")]
    UnknownSource(String),

    /// The input could not be treated as markup at all
    #[error("document could not be parsed as markup")]
    MalformedMarkup,

    /// A JSON-API payload failed strict parsing
    #[error("malformed JSON payload: {0}")]
    MalformedJson(String),
}

/// Result type alias for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Outcome of a successful parse
///
/// `Empty` means the document was valid but matched zero items, which
/// callers surface as "no results" rather than "error occurred".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    /// One or more extracted records, in document order
    Items(Vec<T>),
    /// Valid parse, zero matching items
    Empty,
}

impl<T> ParseOutcome<T> {
    /// Wrap a freshly extracted batch, collapsing zero items to `Empty`
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            ParseOutcome::Empty
        } else {
            ParseOutcome::Items(items)
        }
    }

    /// Number of extracted records
    pub fn len(&self) -> usize {
        match self {
            ParseOutcome::Items(items) => items.len(),
            ParseOutcome::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ParseOutcome::Empty)
    }

    /// Borrow the records, an empty slice for `Empty`
    pub fn items(&self) -> &[T] {
        match self {
            ParseOutcome::Items(items) => items,
            ParseOutcome::Empty => &[],
        }
    }

    /// Consume the outcome, yielding the records
    pub fn into_items(self) -> Vec<T> {
        match self {
            ParseOutcome::Items(items) => items,
            ParseOutcome::Empty => Vec::new(),
        }
    }
}
