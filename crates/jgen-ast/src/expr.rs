//! Expression nodes: literals, variables, assignments and method invocations.

use crate::{AstError, IdentifierNode, Reference, ScopeNode, TypeNode};

/// Type of every expression that does not produce a value (declarations, assignments).
static VOID: TypeNode = TypeNode::VOID;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Value(ValueExpr),
    Variable(VariableExpr),
    Assignment(AssignmentExpr),
    MethodInvocation(MethodInvocationExpr),
}

impl Expr {
    /// The static type this expression evaluates to.
    pub fn ty(&self) -> &TypeNode {
        match self {
            Expr::Value(expr) => expr.ty(),
            Expr::Variable(expr) => expr.ty(),
            Expr::Assignment(_) => &VOID,
            Expr::MethodInvocation(expr) => expr.return_type(),
        }
    }

    pub(crate) fn node_name(&self) -> &'static str {
        match self {
            Expr::Value(_) => "ValueExpr",
            Expr::Variable(_) => "VariableExpr",
            Expr::Assignment(_) => "AssignmentExpr",
            Expr::MethodInvocation(_) => "MethodInvocationExpr",
        }
    }
}

impl From<ValueExpr> for Expr {
    fn from(expr: ValueExpr) -> Self {
        Expr::Value(expr)
    }
}

impl From<VariableExpr> for Expr {
    fn from(expr: VariableExpr) -> Self {
        Expr::Variable(expr)
    }
}

impl From<AssignmentExpr> for Expr {
    fn from(expr: AssignmentExpr) -> Self {
        Expr::Assignment(expr)
    }
}

impl From<MethodInvocationExpr> for Expr {
    fn from(expr: MethodInvocationExpr) -> Self {
        Expr::MethodInvocation(expr)
    }
}

// ============================================================================
// Values
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A primitive literal, kept in its source spelling (`42`, `true`, `'c'`, `1.5f`).
    Primitive { ty: TypeNode, literal: String },
    /// A string literal; the text is stored unescaped.
    String(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueExpr {
    value: Value,
}

impl ValueExpr {
    pub fn primitive(ty: TypeNode, literal: impl Into<String>) -> Result<ValueExpr, AstError> {
        if !ty.is_primitive_type() || ty == TypeNode::VOID || ty.is_array() {
            return Err(AstError::illegal(
                "ValueExpr",
                "primitive values must have a non-void, non-array primitive type",
            ));
        }
        let literal = literal.into();
        if literal.is_empty() {
            return Err(AstError::missing("ValueExpr", "literal"));
        }
        Ok(ValueExpr {
            value: Value::Primitive { ty, literal },
        })
    }

    pub fn string(text: impl Into<String>) -> ValueExpr {
        ValueExpr {
            value: Value::String(text.into()),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn ty(&self) -> &TypeNode {
        match &self.value {
            Value::Primitive { ty, .. } => ty,
            Value::String(_) => TypeNode::string(),
        }
    }
}

// ============================================================================
// Variables
// ============================================================================

/// A named, typed slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    identifier: IdentifierNode,
    ty: TypeNode,
}

impl Variable {
    pub fn new(name: &str, ty: TypeNode) -> Result<Variable, AstError> {
        let identifier = IdentifierNode::derive("Variable", name)?;
        if ty == TypeNode::VOID {
            return Err(AstError::illegal(
                "Variable",
                format!("variable `{name}` cannot have type void"),
            ));
        }
        Ok(Variable { identifier, ty })
    }

    pub fn identifier(&self) -> &IdentifierNode {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        self.identifier.name()
    }

    pub fn ty(&self) -> &TypeNode {
        &self.ty
    }
}

/// A use (`x`) or a declaration (`private int x`) of a [`Variable`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableExpr {
    variable: Variable,
    is_decl: bool,
    scope: ScopeNode,
}

#[derive(Debug, Clone, Default)]
pub struct VariableExprBuilder {
    pub variable: Option<Variable>,
    pub is_decl: bool,
    /// Defaults to [`ScopeNode::Local`].
    pub scope: Option<ScopeNode>,
}

impl VariableExprBuilder {
    pub fn build(self) -> Result<VariableExpr, AstError> {
        let variable = self
            .variable
            .ok_or_else(|| AstError::missing("VariableExpr", "variable"))?;
        let scope = self.scope.unwrap_or(ScopeNode::Local);
        if !self.is_decl && scope != ScopeNode::Local {
            return Err(AstError::illegal(
                "VariableExpr",
                format!(
                    "reference to `{}` cannot carry a {scope} scope",
                    variable.name()
                ),
            ));
        }
        Ok(VariableExpr {
            variable,
            is_decl: self.is_decl,
            scope,
        })
    }
}

impl VariableExpr {
    /// A bare reference to `variable`.
    pub fn reference(variable: Variable) -> VariableExpr {
        VariableExpr {
            variable,
            is_decl: false,
            scope: ScopeNode::Local,
        }
    }

    /// A declaration of `variable` with the given scope.
    pub fn declaration(variable: Variable, scope: ScopeNode) -> VariableExpr {
        VariableExpr {
            variable,
            is_decl: true,
            scope,
        }
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    pub fn is_decl(&self) -> bool {
        self.is_decl
    }

    pub fn scope(&self) -> ScopeNode {
        self.scope
    }

    /// Declarations are statements and have type `void`; references have the variable's type.
    pub fn ty(&self) -> &TypeNode {
        if self.is_decl {
            &VOID
        } else {
            self.variable.ty()
        }
    }
}

// ============================================================================
// Assignment
// ============================================================================

/// `lhs = rhs`, where `lhs` is a variable declaration or reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssignmentExpr {
    variable_expr: VariableExpr,
    value_expr: Box<Expr>,
}

#[derive(Debug, Clone, Default)]
pub struct AssignmentExprBuilder {
    pub variable_expr: Option<VariableExpr>,
    pub value_expr: Option<Expr>,
}

impl AssignmentExprBuilder {
    pub fn build(self) -> Result<AssignmentExpr, AstError> {
        let variable_expr = self
            .variable_expr
            .ok_or_else(|| AstError::missing("AssignmentExpr", "variable_expr"))?;
        let value_expr = self
            .value_expr
            .ok_or_else(|| AstError::missing("AssignmentExpr", "value_expr"))?;
        Ok(AssignmentExpr::new(variable_expr, value_expr))
    }
}

impl AssignmentExpr {
    pub fn new(variable_expr: VariableExpr, value_expr: impl Into<Expr>) -> AssignmentExpr {
        AssignmentExpr {
            variable_expr,
            value_expr: Box::new(value_expr.into()),
        }
    }

    pub fn variable_expr(&self) -> &VariableExpr {
        &self.variable_expr
    }

    pub fn value_expr(&self) -> &Expr {
        &self.value_expr
    }
}

// ============================================================================
// Method invocation
// ============================================================================

/// `receiver.method<G>(args)` or `Qualifier.method<G>(args)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodInvocationExpr {
    expr_reference_expr: Option<Box<Expr>>,
    static_reference_name: Option<String>,
    method_identifier: IdentifierNode,
    return_type: TypeNode,
    arguments: Vec<Expr>,
    generics: Vec<Reference>,
}

#[derive(Debug, Clone, Default)]
pub struct MethodInvocationExprBuilder {
    pub expr_reference_expr: Option<Expr>,
    pub static_reference_name: Option<String>,
    pub method_name: String,
    /// Defaults to `void`.
    pub return_type: Option<TypeNode>,
    pub arguments: Vec<Expr>,
    pub generics: Vec<Reference>,
}

impl MethodInvocationExprBuilder {
    pub fn build(self) -> Result<MethodInvocationExpr, AstError> {
        let method_identifier =
            IdentifierNode::derive("MethodInvocationExpr", &self.method_name)?;

        if self.expr_reference_expr.is_some() && self.static_reference_name.is_some() {
            return Err(AstError::illegal(
                "MethodInvocationExpr",
                "only one of the receiver expression or the static reference may be set",
            ));
        }
        if self
            .static_reference_name
            .as_deref()
            .is_some_and(str::is_empty)
        {
            return Err(AstError::illegal(
                "MethodInvocationExpr",
                "static reference name cannot be empty",
            ));
        }

        Ok(MethodInvocationExpr {
            expr_reference_expr: self.expr_reference_expr.map(Box::new),
            static_reference_name: self.static_reference_name,
            method_identifier,
            return_type: self.return_type.unwrap_or(TypeNode::VOID),
            arguments: self.arguments,
            generics: self.generics,
        })
    }
}

impl MethodInvocationExpr {
    pub fn expr_reference_expr(&self) -> Option<&Expr> {
        self.expr_reference_expr.as_deref()
    }

    pub fn static_reference_name(&self) -> Option<&str> {
        self.static_reference_name.as_deref()
    }

    pub fn method_identifier(&self) -> &IdentifierNode {
        &self.method_identifier
    }

    pub fn return_type(&self) -> &TypeNode {
        &self.return_type
    }

    pub fn arguments(&self) -> &[Expr] {
        &self.arguments
    }

    pub fn generics(&self) -> &[Reference] {
        &self.generics
    }
}
