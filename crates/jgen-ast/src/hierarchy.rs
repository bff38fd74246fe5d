//! Minimal knowledge of the JDK class hierarchy.
//!
//! Generated code only ever needs to answer two questions about a referenced type: "is this a
//! checked exception?" and "is this an unchecked (runtime) exception?". Types declared by the
//! generator itself carry their superclass explicitly (see [`Reference::with_superclass`]);
//! everything else falls back to the table below.

use crate::Reference;

/// The package whose types are always in scope without an import.
pub const JAVA_LANG: &str = "java.lang";

pub const THROWABLE: &str = "java.lang.Throwable";
pub const EXCEPTION: &str = "java.lang.Exception";
pub const RUNTIME_EXCEPTION: &str = "java.lang.RuntimeException";

/// `(class, direct superclass)` pairs, keyed by fully qualified name.
static WELL_KNOWN_SUPERCLASSES: &[(&str, &str)] = &[
    ("java.lang.Throwable", "java.lang.Object"),
    ("java.lang.Exception", "java.lang.Throwable"),
    ("java.lang.Error", "java.lang.Throwable"),
    ("java.lang.RuntimeException", "java.lang.Exception"),
    ("java.lang.ArithmeticException", "java.lang.RuntimeException"),
    ("java.lang.ClassCastException", "java.lang.RuntimeException"),
    ("java.lang.IllegalArgumentException", "java.lang.RuntimeException"),
    ("java.lang.IllegalStateException", "java.lang.RuntimeException"),
    ("java.lang.IndexOutOfBoundsException", "java.lang.RuntimeException"),
    ("java.lang.NullPointerException", "java.lang.RuntimeException"),
    ("java.lang.UnsupportedOperationException", "java.lang.RuntimeException"),
    ("java.lang.NumberFormatException", "java.lang.IllegalArgumentException"),
    ("java.lang.InterruptedException", "java.lang.Exception"),
    ("java.lang.CloneNotSupportedException", "java.lang.Exception"),
    ("java.lang.ReflectiveOperationException", "java.lang.Exception"),
    ("java.lang.ClassNotFoundException", "java.lang.ReflectiveOperationException"),
    ("java.lang.NoSuchMethodException", "java.lang.ReflectiveOperationException"),
    ("java.io.IOException", "java.lang.Exception"),
    ("java.io.FileNotFoundException", "java.io.IOException"),
    ("java.io.EOFException", "java.io.IOException"),
    ("java.io.UncheckedIOException", "java.lang.RuntimeException"),
    ("java.util.NoSuchElementException", "java.lang.RuntimeException"),
    ("java.util.ConcurrentModificationException", "java.lang.RuntimeException"),
    ("java.util.concurrent.ExecutionException", "java.lang.Exception"),
    ("java.util.concurrent.TimeoutException", "java.lang.Exception"),
    ("java.util.concurrent.CancellationException", "java.lang.IllegalStateException"),
    ("java.security.GeneralSecurityException", "java.lang.Exception"),
];

/// Upper bound on superclass hops; the table is acyclic, this only guards against
/// caller-supplied chains that are absurdly deep.
const MAX_HIERARCHY_DEPTH: usize = 64;

/// Returns the direct superclass of a well-known JDK class.
#[must_use]
pub fn well_known_superclass(qualified_name: &str) -> Option<Reference> {
    WELL_KNOWN_SUPERCLASSES
        .iter()
        .find(|(class, _)| *class == qualified_name)
        .map(|(_, superclass)| top_level_reference(superclass))
}

/// Whether `reference` is `qualified_name` or (transitively) extends it.
#[must_use]
pub fn is_subclass_of(reference: &Reference, qualified_name: &str) -> bool {
    let mut current = Some(reference.clone());
    for _ in 0..MAX_HIERARCHY_DEPTH {
        let Some(class) = current else {
            return false;
        };
        if class.full_name() == qualified_name {
            return true;
        }
        current = class.superclass();
    }
    false
}

/// Builds a reference to a top-level class from its fully qualified name.
fn top_level_reference(qualified_name: &str) -> Reference {
    match qualified_name.rsplit_once('.') {
        Some((package, name)) => Reference::new(package, name),
        None => Reference::new("", qualified_name),
    }
}
