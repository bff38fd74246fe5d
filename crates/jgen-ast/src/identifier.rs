use std::fmt;

use crate::AstError;

/// Reserved words (including literals) that can never be used as identifiers.
const RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "_",
];

/// A bare name, derived by the node builders from their `name` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentifierNode {
    name: String,
}

impl IdentifierNode {
    pub(crate) fn derive(node: &'static str, name: &str) -> Result<IdentifierNode, AstError> {
        if name.is_empty() {
            return Err(AstError::missing(node, "name"));
        }

        let mut chars = name.chars();
        let starts_ok = chars
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$');
        if !starts_ok || !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
            return Err(AstError::illegal(
                node,
                format!("`{name}` is not a valid identifier"),
            ));
        }
        if RESERVED.contains(&name) {
            return Err(AstError::illegal(
                node,
                format!("`{name}` is a reserved keyword"),
            ));
        }

        Ok(IdentifierNode {
            name: name.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for IdentifierNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
