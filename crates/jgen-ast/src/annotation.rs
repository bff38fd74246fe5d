use once_cell::sync::Lazy;

use crate::{AstError, Reference, TypeNode};

/// A usage of an annotation type, e.g. `@Override` or `@SuppressWarnings("all")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationNode {
    ty: TypeNode,
    value: Option<String>,
}

static OVERRIDE: Lazy<AnnotationNode> = Lazy::new(|| AnnotationNode {
    ty: TypeNode::with_reference(Reference::java_lang("Override")),
    value: None,
});

static DEPRECATED: Lazy<AnnotationNode> = Lazy::new(|| AnnotationNode {
    ty: TypeNode::with_reference(Reference::java_lang("Deprecated")),
    value: None,
});

impl AnnotationNode {
    /// `@Override`.
    pub fn override_marker() -> &'static AnnotationNode {
        &OVERRIDE
    }

    /// `@Deprecated`.
    pub fn deprecated_marker() -> &'static AnnotationNode {
        &DEPRECATED
    }

    /// `@SuppressWarnings("<value>")`.
    pub fn with_suppress_warnings(value: impl Into<String>) -> AnnotationNode {
        AnnotationNode {
            ty: TypeNode::with_reference(Reference::java_lang("SuppressWarnings")),
            value: Some(value.into()),
        }
    }

    /// A marker annotation of an arbitrary annotation type.
    pub fn with_type(ty: TypeNode) -> Result<AnnotationNode, AstError> {
        Self::with_type_and_value(ty, None)
    }

    pub fn with_type_and_value(
        ty: TypeNode,
        value: Option<String>,
    ) -> Result<AnnotationNode, AstError> {
        if !ty.is_reference_type() {
            return Err(AstError::illegal(
                "AnnotationNode",
                "annotation type must be a reference type",
            ));
        }
        Ok(AnnotationNode { ty, value })
    }

    pub fn ty(&self) -> &TypeNode {
        &self.ty
    }

    /// The single literal element value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
