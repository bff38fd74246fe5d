//! Method and class declarations.
//!
//! Both are assembled through a builder whose `build` runs the full invariant check exactly once;
//! a rejected builder is consumed, so no partially validated node is ever observable.

use indexmap::IndexSet;

use crate::{
    AnnotationNode, AstError, Expr, IdentifierNode, ScopeNode, Statement, TypeNode, VariableExpr,
};

// ============================================================================
// Methods
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDefinition {
    scope: ScopeNode,
    return_type: TypeNode,
    method_identifier: IdentifierNode,
    annotations: IndexSet<AnnotationNode>,
    throws_exceptions: IndexSet<TypeNode>,
    arguments: Vec<VariableExpr>,
    is_static: bool,
    is_final: bool,
    is_abstract: bool,
    body: Vec<Statement>,
    return_expr: Option<Expr>,
    is_override: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MethodDefinitionBuilder {
    pub scope: Option<ScopeNode>,
    pub return_type: Option<TypeNode>,
    pub name: String,
    pub annotations: Vec<AnnotationNode>,
    pub throws_exceptions: Vec<TypeNode>,
    pub arguments: Vec<VariableExpr>,
    pub is_static: bool,
    pub is_final: bool,
    pub is_abstract: bool,
    pub body: Vec<Statement>,
    pub return_expr: Option<Expr>,
    /// Appends `@Override` as the last annotation.
    pub is_override: bool,
}

const METHOD: &str = "MethodDefinition";

impl MethodDefinitionBuilder {
    pub fn build(self) -> Result<MethodDefinition, AstError> {
        let method_identifier = IdentifierNode::derive(METHOD, &self.name)?;
        let scope = self.scope.ok_or_else(|| AstError::missing(METHOD, "scope"))?;
        let return_type = self
            .return_type
            .ok_or_else(|| AstError::missing(METHOD, "return_type"))?;

        if scope == ScopeNode::Local {
            return Err(AstError::illegal(
                METHOD,
                "methods cannot have a local scope",
            ));
        }

        if self.is_abstract
            && (self.is_final || self.is_static || scope == ScopeNode::Private)
        {
            return Err(AstError::illegal(
                METHOD,
                "abstract methods cannot be static, final, or private",
            ));
        }

        let mut annotations: IndexSet<AnnotationNode> = self.annotations.into_iter().collect();
        if self.is_override {
            let marker = AnnotationNode::override_marker();
            annotations.shift_remove(marker);
            annotations.insert(marker.clone());
        }

        if return_type != TypeNode::VOID && self.return_expr.is_none() {
            return Err(AstError::illegal(
                METHOD,
                "method with non-void return type must have a return expression",
            ));
        }

        if let Some(return_expr) = &self.return_expr {
            if return_expr.ty() != &return_type {
                return Err(AstError::illegal(
                    METHOD,
                    "method return type does not match the return expression type",
                ));
            }
        }

        for argument in &self.arguments {
            if !argument.is_decl() {
                return Err(AstError::illegal(
                    METHOD,
                    format!(
                        "argument `{}` must be a variable declaration",
                        argument.variable().name()
                    ),
                ));
            }
        }

        let throws_exceptions: IndexSet<TypeNode> = self.throws_exceptions.into_iter().collect();
        for exception_type in &throws_exceptions {
            let Some(reference) = exception_type.reference() else {
                return Err(AstError::illegal(
                    METHOD,
                    "thrown types must be reference types",
                ));
            };
            if !exception_type.is_exception_type() {
                return Err(AstError::illegal(
                    METHOD,
                    format!("type {} is not an exception type", reference.full_name()),
                ));
            }
            if reference.is_unchecked_exception() {
                return Err(AstError::illegal(
                    METHOD,
                    format!(
                        "runtime exception type {} does not need to be thrown",
                        reference.name()
                    ),
                ));
            }
        }

        Ok(MethodDefinition {
            scope,
            return_type,
            method_identifier,
            annotations,
            throws_exceptions,
            arguments: self.arguments,
            is_static: self.is_static,
            is_final: self.is_final,
            is_abstract: self.is_abstract,
            body: self.body,
            return_expr: self.return_expr,
            is_override: self.is_override,
        })
    }
}

impl MethodDefinition {
    pub fn scope(&self) -> ScopeNode {
        self.scope
    }

    pub fn return_type(&self) -> &TypeNode {
        &self.return_type
    }

    pub fn method_identifier(&self) -> &IdentifierNode {
        &self.method_identifier
    }

    /// Annotations in declaration order; `@Override` is always last when present.
    pub fn annotations(&self) -> &IndexSet<AnnotationNode> {
        &self.annotations
    }

    pub fn throws_exceptions(&self) -> &IndexSet<TypeNode> {
        &self.throws_exceptions
    }

    pub fn arguments(&self) -> &[VariableExpr] {
        &self.arguments
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn body(&self) -> &[Statement] {
        &self.body
    }

    pub fn return_expr(&self) -> Option<&Expr> {
        self.return_expr.as_ref()
    }

    /// Whether the builder requested `@Override`, which is then the last annotation.
    pub fn is_override(&self) -> bool {
        self.is_override
    }
}

// ============================================================================
// Classes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    scope: ScopeNode,
    class_identifier: IdentifierNode,
    package: Option<String>,
    is_nested: bool,
    annotations: IndexSet<AnnotationNode>,
    implements_types: IndexSet<TypeNode>,
    extends_type: Option<TypeNode>,
    is_static: bool,
    is_final: bool,
    is_abstract: bool,
    statements: Vec<Statement>,
    methods: Vec<MethodDefinition>,
    nested_classes: Vec<ClassDefinition>,
}

#[derive(Debug, Clone, Default)]
pub struct ClassDefinitionBuilder {
    pub scope: Option<ScopeNode>,
    pub name: String,
    /// Required unless `is_nested`.
    pub package: Option<String>,
    pub is_nested: bool,
    pub annotations: Vec<AnnotationNode>,
    pub implements_types: Vec<TypeNode>,
    pub extends_type: Option<TypeNode>,
    pub is_static: bool,
    pub is_final: bool,
    pub is_abstract: bool,
    /// Field declarations and field initializers only.
    pub statements: Vec<Statement>,
    pub methods: Vec<MethodDefinition>,
    pub nested_classes: Vec<ClassDefinition>,
}

const CLASS: &str = "ClassDefinition";

impl ClassDefinitionBuilder {
    pub fn build(self) -> Result<ClassDefinition, AstError> {
        let class_identifier = IdentifierNode::derive(CLASS, &self.name)?;
        let scope = self.scope.ok_or_else(|| AstError::missing(CLASS, "scope"))?;
        let package = self.package.filter(|pkg| !pkg.is_empty());

        if scope == ScopeNode::Local {
            return Err(AstError::illegal(CLASS, "classes cannot have a local scope"));
        }

        if !self.is_nested {
            if package.is_none() {
                return Err(AstError::missing(CLASS, "package"));
            }
            if self.is_static {
                return Err(AstError::illegal(CLASS, "outer classes cannot be static"));
            }
            if scope == ScopeNode::Private {
                return Err(AstError::illegal(CLASS, "outer classes cannot be private"));
            }
        }

        if self.is_abstract && self.is_final {
            return Err(AstError::illegal(
                CLASS,
                "abstract classes cannot be marked final",
            ));
        }

        let implements_types: IndexSet<TypeNode> = self.implements_types.into_iter().collect();

        if let Some(extends_type) = &self.extends_type {
            if !extends_type.is_reference_type() {
                return Err(AstError::illegal(
                    CLASS,
                    "classes cannot extend non-reference types",
                ));
            }
            if implements_types.contains(extends_type) {
                return Err(AstError::illegal(
                    CLASS,
                    "classes cannot extend and implement the same type",
                ));
            }
        }

        if implements_types.iter().any(|ty| !ty.is_reference_type()) {
            return Err(AstError::illegal(
                CLASS,
                "classes cannot implement non-reference types",
            ));
        }

        for statement in &self.statements {
            check_class_statement(statement)?;
        }

        Ok(ClassDefinition {
            scope,
            class_identifier,
            package,
            is_nested: self.is_nested,
            annotations: self.annotations.into_iter().collect(),
            implements_types,
            extends_type: self.extends_type,
            is_static: self.is_static,
            is_final: self.is_final,
            is_abstract: self.is_abstract,
            statements: self.statements,
            methods: self.methods,
            nested_classes: self.nested_classes,
        })
    }
}

/// Class bodies hold field declarations (`private int x;`) and field initializers
/// (`private int x = y;`), nothing else.
fn check_class_statement(statement: &Statement) -> Result<(), AstError> {
    let Statement::Expr(expr_statement) = statement else {
        return Err(AstError::illegal(
            CLASS,
            format!(
                "class statement must be an expression statement, found {}",
                statement.node_name()
            ),
        ));
    };

    match expr_statement.expression() {
        Expr::Variable(variable_expr) => {
            if !variable_expr.is_decl() {
                return Err(AstError::illegal(
                    CLASS,
                    "class variable statements must be declarations",
                ));
            }
            if variable_expr.scope() == ScopeNode::Local {
                return Err(AstError::illegal(
                    CLASS,
                    format!(
                        "class variable `{}` cannot have a local scope",
                        variable_expr.variable().name()
                    ),
                ));
            }
        }
        Expr::Assignment(assignment) => {
            if assignment.variable_expr().scope() == ScopeNode::Local {
                return Err(AstError::illegal(
                    CLASS,
                    format!(
                        "class variable `{}` in assignment cannot have a local scope",
                        assignment.variable_expr().variable().name()
                    ),
                ));
            }
        }
        other => {
            return Err(AstError::illegal(
                CLASS,
                format!(
                    "class expression statement must be an assignment or variable declaration, found {}",
                    other.node_name()
                ),
            ));
        }
    }
    Ok(())
}

impl ClassDefinition {
    pub fn scope(&self) -> ScopeNode {
        self.scope
    }

    pub fn class_identifier(&self) -> &IdentifierNode {
        &self.class_identifier
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn is_nested(&self) -> bool {
        self.is_nested
    }

    pub fn annotations(&self) -> &IndexSet<AnnotationNode> {
        &self.annotations
    }

    pub fn implements_types(&self) -> &IndexSet<TypeNode> {
        &self.implements_types
    }

    pub fn extends_type(&self) -> Option<&TypeNode> {
        self.extends_type.as_ref()
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn methods(&self) -> &[MethodDefinition] {
        &self.methods
    }

    pub fn nested_classes(&self) -> &[ClassDefinition] {
        &self.nested_classes
    }
}
