use std::fmt;

/// Visibility of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScopeNode {
    Public,
    Protected,
    PackagePrivate,
    Private,
    /// Variables declared inside a method body; never legal on class members.
    Local,
}

impl ScopeNode {
    /// The modifier keyword, if the scope is spelled out in source.
    #[must_use]
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            ScopeNode::Public => Some("public"),
            ScopeNode::Protected => Some("protected"),
            ScopeNode::Private => Some("private"),
            ScopeNode::PackagePrivate | ScopeNode::Local => None,
        }
    }
}

impl fmt::Display for ScopeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScopeNode::Public => "public",
            ScopeNode::Protected => "protected",
            ScopeNode::PackagePrivate => "package-private",
            ScopeNode::Private => "private",
            ScopeNode::Local => "local",
        };
        f.write_str(name)
    }
}
