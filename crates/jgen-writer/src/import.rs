use std::collections::BTreeSet;

use jgen_ast::visit::{walk_reference, walk_try_catch_statement, AstVisitor};
use jgen_ast::{AstError, Reference, TryCatchStatement};
use jgen_config::ImportsConfig;

const TRAVERSAL: &str = "ImportWriterVisitor";

/// Collects the external type names a tree refers to and renders them as import statements.
///
/// Names are kept in two sorted, duplicate-free sets: member types (those with an enclosing
/// type) become static imports, top-level types become normal imports. Types living in an
/// implicit package (`java.lang` by default), in the package being generated, or in the
/// default package are dropped.
///
/// A visitor accumulates across every node it is run on; call [`ImportWriterVisitor::clear`]
/// between independent files.
#[derive(Debug, Clone)]
pub struct ImportWriterVisitor {
    current_package: String,
    implicit_packages: Vec<String>,
    static_imports: BTreeSet<String>,
    imports: BTreeSet<String>,
}

impl ImportWriterVisitor {
    pub fn new(current_package: impl Into<String>) -> Self {
        Self::with_config(current_package, &ImportsConfig::default())
    }

    pub fn with_config(current_package: impl Into<String>, config: &ImportsConfig) -> Self {
        Self {
            current_package: current_package.into(),
            implicit_packages: config.implicit_packages.clone(),
            static_imports: BTreeSet::new(),
            imports: BTreeSet::new(),
        }
    }

    pub fn current_package(&self) -> &str {
        &self.current_package
    }

    pub fn static_imports(&self) -> &BTreeSet<String> {
        &self.static_imports
    }

    pub fn imports(&self) -> &BTreeSet<String> {
        &self.imports
    }

    pub fn is_empty(&self) -> bool {
        self.static_imports.is_empty() && self.imports.is_empty()
    }

    pub fn clear(&mut self) {
        tracing::debug!(
            target: "jgen.writer",
            package = %self.current_package,
            static_imports = self.static_imports.len(),
            imports = self.imports.len(),
            "clearing import sets"
        );
        self.static_imports.clear();
        self.imports.clear();
    }

    /// Render the collected names: the static block first, then the normal block, each
    /// followed by a blank line. Empty when nothing was collected.
    pub fn write(&self) -> String {
        let mut out = String::new();
        if !self.static_imports.is_empty() {
            for name in &self.static_imports {
                out.push_str("import static ");
                out.push_str(name);
                out.push_str(";\n");
            }
            out.push('\n');
        }
        if !self.imports.is_empty() {
            for name in &self.imports {
                out.push_str("import ");
                out.push_str(name);
                out.push_str(";\n");
            }
            out.push('\n');
        }
        out
    }

    fn needs_import(&self, reference: &Reference) -> bool {
        let package = reference.package();
        // Default-package types cannot be imported from a named package.
        !package.is_empty()
            && package != self.current_package
            && !self.implicit_packages.iter().any(|p| p == package)
    }

    fn classify(&mut self, reference: &Reference) {
        let name = reference.full_name();
        if !self.needs_import(reference) {
            tracing::trace!(target: "jgen.writer", name = %name, "implicitly visible, dropped");
            return;
        }
        if reference.has_enclosing_type() {
            tracing::trace!(target: "jgen.writer", name = %name, "static import");
            self.static_imports.insert(name);
        } else {
            tracing::trace!(target: "jgen.writer", name = %name, "import");
            self.imports.insert(name);
        }
    }
}

impl AstVisitor for ImportWriterVisitor {
    type Error = AstError;

    fn visit_reference(&mut self, reference: &Reference) -> Result<(), AstError> {
        self.classify(reference);
        // Generic arguments are resolved even when the outer type needs no import.
        walk_reference(self, reference)
    }

    fn visit_try_catch_statement(&mut self, stmt: &TryCatchStatement) -> Result<(), AstError> {
        let problem = if stmt.is_sample_code() {
            Some("sample code is not resolved for imports")
        } else if stmt.catch_variable_expr().is_none() {
            Some("catch variable is required")
        } else {
            None
        };
        if let Some(message) = problem {
            tracing::debug!(target: "jgen.writer", reason = message, "rejecting try/catch statement");
            return Err(AstError::misuse(TRAVERSAL, "TryCatchStatement", message));
        }
        walk_try_catch_statement(self, stmt)
    }
}
