//! Documentation comments for generated source.
//!
//! Comment formatting is the one step of code emission that can fail on caller-supplied text.
//! [`BlockComment::write`] never lets such a failure escape: the comment degrades to an empty
//! string and the failure is logged.

mod javadoc;

pub use javadoc::JavadocFormatter;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("comment text contains a block terminator at byte {offset}")]
    Terminator { offset: usize },

    #[error("{formatter} failed: {message}")]
    Formatter {
        formatter: &'static str,
        message: String,
    },
}

/// Turns raw comment text into a complete documentation comment.
pub trait CommentFormatter {
    fn format(&self, text: &str) -> Result<String, FormatError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockComment {
    comment: String,
}

impl BlockComment {
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
        }
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Formats with the default [`JavadocFormatter`].
    pub fn write(&self) -> String {
        self.write_with(&JavadocFormatter::default())
    }

    pub fn write_with(&self, formatter: &dyn CommentFormatter) -> String {
        match formatter.format(&self.comment) {
            Ok(formatted) => formatted,
            Err(err) => {
                tracing::warn!(
                    target: "jgen.format",
                    error = %err,
                    len = self.comment.len(),
                    "documentation comment dropped"
                );
                String::new()
            }
        }
    }
}

impl From<&str> for BlockComment {
    fn from(comment: &str) -> Self {
        Self::new(comment)
    }
}

impl From<String> for BlockComment {
    fn from(comment: String) -> Self {
        Self::new(comment)
    }
}
