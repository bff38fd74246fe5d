use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::hierarchy;

/// A named, possibly generic, external type.
///
/// Identity is the qualified name (package, enclosing types, simple name) plus the generic
/// arguments. The superclass is metadata used by exception checks; it never participates in
/// equality, hashing or ordering.
#[derive(Clone)]
pub struct Reference {
    package: String,
    name: String,
    enclosing_types: Vec<String>,
    generics: Vec<Reference>,
    superclass: Option<Box<Reference>>,
}

impl Reference {
    /// A top-level type `package.name`.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            enclosing_types: Vec::new(),
            generics: Vec::new(),
            superclass: None,
        }
    }

    /// A member type, e.g. `Reference::nested("java.util", ["Map"], "Entry")` for
    /// `java.util.Map.Entry`. `enclosing` lists the outer types from outermost to innermost.
    pub fn nested<I, S>(package: impl Into<String>, enclosing: I, name: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enclosing_types: enclosing.into_iter().map(Into::into).collect(),
            ..Self::new(package, name)
        }
    }

    /// A type in `java.lang`.
    pub fn java_lang(name: impl Into<String>) -> Self {
        Self::new(hierarchy::JAVA_LANG, name)
    }

    #[must_use]
    pub fn with_generics(mut self, generics: Vec<Reference>) -> Self {
        self.generics = generics;
        self
    }

    /// Records the direct superclass of a type the generator declares itself, so that
    /// exception checks work for types outside the well-known JDK table.
    #[must_use]
    pub fn with_superclass(mut self, superclass: Reference) -> Self {
        self.superclass = Some(Box::new(superclass));
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// The simple (unqualified) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn enclosing_types(&self) -> &[String] {
        &self.enclosing_types
    }

    /// Whether this is a member type of another type.
    pub fn has_enclosing_type(&self) -> bool {
        !self.enclosing_types.is_empty()
    }

    pub fn generics(&self) -> &[Reference] {
        &self.generics
    }

    /// The canonical name: `package.Outer.Inner`, without generic arguments.
    pub fn full_name(&self) -> String {
        let mut out = String::with_capacity(self.package.len() + self.name.len() + 1);
        for segment in std::iter::once(&self.package)
            .filter(|p| !p.is_empty())
            .chain(self.enclosing_types.iter())
            .chain(std::iter::once(&self.name))
        {
            if !out.is_empty() {
                out.push('.');
            }
            out.push_str(segment);
        }
        out
    }

    /// The direct superclass: the explicitly recorded one, else the well-known JDK one.
    pub fn superclass(&self) -> Option<Reference> {
        match &self.superclass {
            Some(superclass) => Some((**superclass).clone()),
            None => hierarchy::well_known_superclass(&self.full_name()),
        }
    }

    pub fn is_exception(&self) -> bool {
        hierarchy::is_subclass_of(self, hierarchy::EXCEPTION)
    }

    pub fn is_unchecked_exception(&self) -> bool {
        hierarchy::is_subclass_of(self, hierarchy::RUNTIME_EXCEPTION)
    }
}

impl PartialEq for Reference {
    fn eq(&self, other: &Self) -> bool {
        self.package == other.package
            && self.enclosing_types == other.enclosing_types
            && self.name == other.name
            && self.generics == other.generics
    }
}

impl Eq for Reference {}

impl Hash for Reference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.package.hash(state);
        self.enclosing_types.hash(state);
        self.name.hash(state);
        self.generics.hash(state);
    }
}

impl Ord for Reference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.full_name()
            .cmp(&other.full_name())
            .then_with(|| self.package.cmp(&other.package))
            .then_with(|| self.enclosing_types.cmp(&other.enclosing_types))
            .then_with(|| self.generics.cmp(&other.generics))
    }
}

impl PartialOrd for Reference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())?;
        if self.generics.is_empty() {
            return Ok(());
        }
        f.write_str("<")?;
        for (idx, generic) in self.generics.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{generic}")?;
        }
        f.write_str(">")
    }
}

impl fmt::Debug for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reference({self})")
    }
}
