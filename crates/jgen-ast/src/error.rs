use thiserror::Error;

/// Failures raised while building or traversing the tree.
///
/// None of these are transient: they signal a programming error in the code that assembled
/// the tree (or invoked a traversal on a node it is not defined over).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AstError {
    #[error("{node} is missing required field `{field}`")]
    MissingRequiredField {
        node: &'static str,
        field: &'static str,
    },

    #[error("invalid {node}: {message}")]
    IllegalDeclarationState { node: &'static str, message: String },

    #[error("{traversal} cannot visit {node}: {message}")]
    MisuseOfTraversal {
        traversal: &'static str,
        node: &'static str,
        message: String,
    },
}

/// Fieldless view of [`AstError`], handy for matching on the failure category alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AstErrorKind {
    MissingRequiredField,
    IllegalDeclarationState,
    MisuseOfTraversal,
}

impl AstError {
    pub fn missing(node: &'static str, field: &'static str) -> Self {
        let err = Self::MissingRequiredField { node, field };
        log_rejection(&err);
        err
    }

    pub fn illegal(node: &'static str, message: impl Into<String>) -> Self {
        let err = Self::IllegalDeclarationState {
            node,
            message: message.into(),
        };
        log_rejection(&err);
        err
    }

    pub fn misuse(traversal: &'static str, node: &'static str, message: impl Into<String>) -> Self {
        Self::MisuseOfTraversal {
            traversal,
            node,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> AstErrorKind {
        match self {
            AstError::MissingRequiredField { .. } => AstErrorKind::MissingRequiredField,
            AstError::IllegalDeclarationState { .. } => AstErrorKind::IllegalDeclarationState,
            AstError::MisuseOfTraversal { .. } => AstErrorKind::MisuseOfTraversal,
        }
    }
}

fn log_rejection(err: &AstError) {
    tracing::debug!(
        target: "jgen.ast",
        kind = ?err.kind(),
        error = %err,
        "builder rejected node"
    );
}
