use std::cmp::Ordering;

use once_cell::sync::Lazy;

use crate::{AstError, Reference};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Boolean,
    Char,
    Object,
    Void,
}

impl TypeKind {
    #[must_use]
    pub fn is_primitive(self) -> bool {
        self != TypeKind::Object
    }

    /// The Java keyword for this kind; `None` for [`TypeKind::Object`].
    #[must_use]
    pub fn keyword(self) -> Option<&'static str> {
        Some(match self {
            TypeKind::Byte => "byte",
            TypeKind::Short => "short",
            TypeKind::Int => "int",
            TypeKind::Long => "long",
            TypeKind::Float => "float",
            TypeKind::Double => "double",
            TypeKind::Boolean => "boolean",
            TypeKind::Char => "char",
            TypeKind::Void => "void",
            TypeKind::Object => return None,
        })
    }
}

/// A type usage: a primitive, `void`, or a reference type, each optionally an array.
///
/// `reference` is present exactly when `kind` is [`TypeKind::Object`]; the constructors uphold
/// this, so it is not re-checked anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeNode {
    kind: TypeKind,
    is_array: bool,
    reference: Option<Reference>,
}

static STRING: Lazy<TypeNode> = Lazy::new(|| TypeNode::with_reference(Reference::java_lang("String")));
static STRING_ARRAY: Lazy<TypeNode> =
    Lazy::new(|| TypeNode::reference_array(Reference::java_lang("String")));

impl TypeNode {
    pub const VOID: TypeNode = TypeNode::primitive_unchecked(TypeKind::Void);
    pub const INT: TypeNode = TypeNode::primitive_unchecked(TypeKind::Int);
    pub const BOOLEAN: TypeNode = TypeNode::primitive_unchecked(TypeKind::Boolean);

    /// `java.lang.String`.
    pub fn string() -> &'static TypeNode {
        &STRING
    }

    /// `java.lang.String[]`.
    pub fn string_array() -> &'static TypeNode {
        &STRING_ARRAY
    }

    const fn primitive_unchecked(kind: TypeKind) -> TypeNode {
        TypeNode {
            kind,
            is_array: false,
            reference: None,
        }
    }

    /// A primitive (or `void`) type.
    pub fn primitive(kind: TypeKind) -> Result<TypeNode, AstError> {
        if !kind.is_primitive() {
            return Err(AstError::illegal(
                "TypeNode",
                "object is not a primitive type",
            ));
        }
        Ok(Self::primitive_unchecked(kind))
    }

    /// An array of a primitive type, e.g. `int[]`.
    pub fn primitive_array(kind: TypeKind) -> Result<TypeNode, AstError> {
        if !kind.is_primitive() {
            return Err(AstError::illegal(
                "TypeNode",
                "object is not a primitive type",
            ));
        }
        if kind == TypeKind::Void {
            return Err(AstError::illegal("TypeNode", "void cannot be an array type"));
        }
        Ok(TypeNode {
            kind,
            is_array: true,
            reference: None,
        })
    }

    pub fn with_reference(reference: Reference) -> TypeNode {
        TypeNode {
            kind: TypeKind::Object,
            is_array: false,
            reference: Some(reference),
        }
    }

    /// An array of a reference type, e.g. `String[]`.
    pub fn reference_array(reference: Reference) -> TypeNode {
        TypeNode {
            kind: TypeKind::Object,
            is_array: true,
            reference: Some(reference),
        }
    }

    /// A reference type that must denote an exception class.
    pub fn with_exception_reference(reference: Reference) -> Result<TypeNode, AstError> {
        if !reference.is_exception() {
            return Err(AstError::illegal(
                "TypeNode",
                format!("{} is not an exception type", reference.full_name()),
            ));
        }
        Ok(Self::with_reference(reference))
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_array(&self) -> bool {
        self.is_array
    }

    pub fn reference(&self) -> Option<&Reference> {
        self.reference.as_ref()
    }

    pub fn is_reference_type(&self) -> bool {
        self.kind == TypeKind::Object && self.reference.is_some()
    }

    pub fn is_exception_type(&self) -> bool {
        self.reference
            .as_ref()
            .is_some_and(|reference| self.kind == TypeKind::Object && reference.is_exception())
    }

    pub fn is_primitive_type(&self) -> bool {
        self.kind.is_primitive()
    }

    /// Ordering used only to iterate collections of types deterministically.
    ///
    /// Two reference types compare by their [`Reference`] order. Any comparison involving a
    /// primitive or `void` type reports [`Ordering::Equal`], so this is *not* a total order and
    /// must not be used as a general sort key.
    #[must_use]
    pub fn compare(&self, other: &TypeNode) -> Ordering {
        match (&self.reference, &other.reference) {
            (Some(lhs), Some(rhs)) if self.is_reference_type() && other.is_reference_type() => {
                lhs.cmp(rhs)
            }
            _ => Ordering::Equal,
        }
    }
}
