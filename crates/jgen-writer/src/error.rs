use jgen_ast::AstError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Ast(#[from] AstError),

    #[error("class `{class}` is nested and cannot be written as its own file")]
    NotTopLevel { class: String },

    #[error("renderer failed on `{class}`: {message}")]
    Render { class: String, message: String },
}
