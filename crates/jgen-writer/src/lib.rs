//! Source emission passes over a `jgen-ast` tree.
//!
//! [`ImportWriterVisitor`] resolves which external names a tree needs imported, and
//! [`JavaFile`] stitches the package line, the import blocks and a [`SourceRenderer`]'s body
//! output into one compilation unit.

mod error;
mod file;
mod import;

pub use error::WriteError;
pub use file::{JavaFile, SourceRenderer};
pub use import::ImportWriterVisitor;
