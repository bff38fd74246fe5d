use jgen_ast::{AstError, AstNode, ClassDefinition};
use jgen_config::ImportsConfig;

use crate::{ImportWriterVisitor, WriteError};

/// Turns a class declaration into the body text of a source file.
///
/// Implementations must walk the same tree the import pass walks, so every external name
/// appearing in the rendered body has a matching import line.
pub trait SourceRenderer {
    fn render_class(&mut self, class: &ClassDefinition) -> Result<String, WriteError>;
}

/// A top-level class together with everything needed to emit it as one compilation unit.
#[derive(Debug, Clone, Copy)]
pub struct JavaFile<'a> {
    class: &'a ClassDefinition,
    package: &'a str,
}

impl<'a> JavaFile<'a> {
    pub fn new(class: &'a ClassDefinition) -> Result<Self, WriteError> {
        if class.is_nested() {
            return Err(WriteError::NotTopLevel {
                class: class.class_identifier().name().to_owned(),
            });
        }
        // Top-level classes always carry a package once built.
        let package = class
            .package()
            .ok_or_else(|| AstError::missing("ClassDefinition", "package"))?;
        Ok(Self { class, package })
    }

    pub fn class(&self) -> &'a ClassDefinition {
        self.class
    }

    pub fn package(&self) -> &'a str {
        self.package
    }

    /// Resolve the imports of the whole class tree.
    pub fn imports(&self, config: &ImportsConfig) -> Result<ImportWriterVisitor, WriteError> {
        let mut visitor = ImportWriterVisitor::with_config(self.package, config);
        self.class.accept(&mut visitor)?;
        Ok(visitor)
    }

    /// `package` line, import blocks, then the rendered class body.
    pub fn render<R: SourceRenderer>(
        &self,
        renderer: &mut R,
        config: &ImportsConfig,
    ) -> Result<String, WriteError> {
        let imports = self.imports(config)?;
        let body = renderer.render_class(self.class)?;

        let mut out = format!("package {};\n\n", self.package);
        out.push_str(&imports.write());
        out.push_str(&body);
        if !out.ends_with('\n') {
            out.push('\n');
        }
        tracing::debug!(
            target: "jgen.writer",
            package = %self.package,
            class = %self.class.class_identifier(),
            static_imports = imports.static_imports().len(),
            imports = imports.imports().len(),
            "rendered compilation unit"
        );
        Ok(out)
    }
}
