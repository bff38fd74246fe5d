//! Statement nodes. Each variant may own further statement lists, forming a tree.

use crate::{AssignmentExpr, AstError, Expr, TypeNode, VariableExpr};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    Expr(ExprStatement),
    If(IfStatement),
    For(ForStatement),
    While(WhileStatement),
    TryCatch(TryCatchStatement),
}

impl Statement {
    pub(crate) fn node_name(&self) -> &'static str {
        match self {
            Statement::Expr(_) => "ExprStatement",
            Statement::If(_) => "IfStatement",
            Statement::For(_) => "ForStatement",
            Statement::While(_) => "WhileStatement",
            Statement::TryCatch(_) => "TryCatchStatement",
        }
    }
}

impl From<ExprStatement> for Statement {
    fn from(stmt: ExprStatement) -> Self {
        Statement::Expr(stmt)
    }
}

impl From<IfStatement> for Statement {
    fn from(stmt: IfStatement) -> Self {
        Statement::If(stmt)
    }
}

impl From<ForStatement> for Statement {
    fn from(stmt: ForStatement) -> Self {
        Statement::For(stmt)
    }
}

impl From<WhileStatement> for Statement {
    fn from(stmt: WhileStatement) -> Self {
        Statement::While(stmt)
    }
}

impl From<TryCatchStatement> for Statement {
    fn from(stmt: TryCatchStatement) -> Self {
        Statement::TryCatch(stmt)
    }
}

fn require_boolean(node: &'static str, condition: &Expr) -> Result<(), AstError> {
    if condition.ty() != &TypeNode::BOOLEAN {
        return Err(AstError::illegal(
            node,
            format!("condition {} must be of type boolean", condition.node_name()),
        ));
    }
    Ok(())
}

// ============================================================================
// Expression statement
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExprStatement {
    expression: Expr,
}

impl ExprStatement {
    pub fn with_expr(expression: impl Into<Expr>) -> ExprStatement {
        ExprStatement {
            expression: expression.into(),
        }
    }

    pub fn expression(&self) -> &Expr {
        &self.expression
    }
}

// ============================================================================
// If
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IfStatement {
    condition_expr: Expr,
    body: Vec<Statement>,
    else_ifs: Vec<(Expr, Vec<Statement>)>,
    else_body: Vec<Statement>,
}

#[derive(Debug, Clone, Default)]
pub struct IfStatementBuilder {
    pub condition_expr: Option<Expr>,
    pub body: Vec<Statement>,
    /// `else if` branches in source order.
    pub else_ifs: Vec<(Expr, Vec<Statement>)>,
    pub else_body: Vec<Statement>,
}

impl IfStatementBuilder {
    pub fn build(self) -> Result<IfStatement, AstError> {
        let condition_expr = self
            .condition_expr
            .ok_or_else(|| AstError::missing("IfStatement", "condition_expr"))?;
        require_boolean("IfStatement", &condition_expr)?;
        for (condition, _) in &self.else_ifs {
            require_boolean("IfStatement", condition)?;
        }
        Ok(IfStatement {
            condition_expr,
            body: self.body,
            else_ifs: self.else_ifs,
            else_body: self.else_body,
        })
    }
}

impl IfStatement {
    pub fn condition_expr(&self) -> &Expr {
        &self.condition_expr
    }

    pub fn body(&self) -> &[Statement] {
        &self.body
    }

    pub fn else_ifs(&self) -> &[(Expr, Vec<Statement>)] {
        &self.else_ifs
    }

    pub fn else_body(&self) -> &[Statement] {
        &self.else_body
    }
}

// ============================================================================
// For-each
// ============================================================================

/// `for (T x : collection) { ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForStatement {
    local_variable_expr: VariableExpr,
    collection_expr: Expr,
    body: Vec<Statement>,
}

#[derive(Debug, Clone, Default)]
pub struct ForStatementBuilder {
    pub local_variable_expr: Option<VariableExpr>,
    pub collection_expr: Option<Expr>,
    pub body: Vec<Statement>,
}

impl ForStatementBuilder {
    pub fn build(self) -> Result<ForStatement, AstError> {
        let local_variable_expr = self
            .local_variable_expr
            .ok_or_else(|| AstError::missing("ForStatement", "local_variable_expr"))?;
        let collection_expr = self
            .collection_expr
            .ok_or_else(|| AstError::missing("ForStatement", "collection_expr"))?;
        if !local_variable_expr.is_decl() {
            return Err(AstError::illegal(
                "ForStatement",
                format!(
                    "loop variable `{}` must be a declaration",
                    local_variable_expr.variable().name()
                ),
            ));
        }
        Ok(ForStatement {
            local_variable_expr,
            collection_expr,
            body: self.body,
        })
    }
}

impl ForStatement {
    pub fn local_variable_expr(&self) -> &VariableExpr {
        &self.local_variable_expr
    }

    pub fn collection_expr(&self) -> &Expr {
        &self.collection_expr
    }

    pub fn body(&self) -> &[Statement] {
        &self.body
    }
}

// ============================================================================
// While
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WhileStatement {
    condition_expr: Expr,
    body: Vec<Statement>,
}

#[derive(Debug, Clone, Default)]
pub struct WhileStatementBuilder {
    pub condition_expr: Option<Expr>,
    pub body: Vec<Statement>,
}

impl WhileStatementBuilder {
    pub fn build(self) -> Result<WhileStatement, AstError> {
        let condition_expr = self
            .condition_expr
            .ok_or_else(|| AstError::missing("WhileStatement", "condition_expr"))?;
        require_boolean("WhileStatement", &condition_expr)?;
        Ok(WhileStatement {
            condition_expr,
            body: self.body,
        })
    }
}

impl WhileStatement {
    pub fn condition_expr(&self) -> &Expr {
        &self.condition_expr
    }

    pub fn body(&self) -> &[Statement] {
        &self.body
    }
}

// ============================================================================
// Try/catch
// ============================================================================

/// `try (resource) { ... } catch (E e) { ... }`.
///
/// Sample-code blocks only appear in documentation snippets; they may omit the catch variable
/// and are rejected by passes that only operate on compilable code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TryCatchStatement {
    try_resource_expr: Option<AssignmentExpr>,
    try_body: Vec<Statement>,
    catch_variable_expr: Option<VariableExpr>,
    catch_body: Vec<Statement>,
    is_sample_code: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TryCatchStatementBuilder {
    pub try_resource_expr: Option<AssignmentExpr>,
    pub try_body: Vec<Statement>,
    pub catch_variable_expr: Option<VariableExpr>,
    pub catch_body: Vec<Statement>,
    pub is_sample_code: bool,
}

impl TryCatchStatementBuilder {
    pub fn build(self) -> Result<TryCatchStatement, AstError> {
        if let Some(resource) = &self.try_resource_expr {
            if !resource.variable_expr().is_decl() {
                return Err(AstError::illegal(
                    "TryCatchStatement",
                    "try-with-resources must declare its resource variable",
                ));
            }
        }

        match &self.catch_variable_expr {
            Some(catch_var) => {
                if !catch_var.is_decl() {
                    return Err(AstError::illegal(
                        "TryCatchStatement",
                        "catch variable must be a declaration",
                    ));
                }
                if !catch_var.variable().ty().is_exception_type() {
                    return Err(AstError::illegal(
                        "TryCatchStatement",
                        format!(
                            "catch variable `{}` must have an exception type",
                            catch_var.variable().name()
                        ),
                    ));
                }
            }
            None if !self.is_sample_code => {
                return Err(AstError::missing(
                    "TryCatchStatement",
                    "catch_variable_expr",
                ));
            }
            None => {}
        }

        Ok(TryCatchStatement {
            try_resource_expr: self.try_resource_expr,
            try_body: self.try_body,
            catch_variable_expr: self.catch_variable_expr,
            catch_body: self.catch_body,
            is_sample_code: self.is_sample_code,
        })
    }
}

impl TryCatchStatement {
    pub fn try_resource_expr(&self) -> Option<&AssignmentExpr> {
        self.try_resource_expr.as_ref()
    }

    pub fn try_body(&self) -> &[Statement] {
        &self.try_body
    }

    pub fn catch_variable_expr(&self) -> Option<&VariableExpr> {
        self.catch_variable_expr.as_ref()
    }

    pub fn catch_body(&self) -> &[Statement] {
        &self.catch_body
    }

    pub fn is_sample_code(&self) -> bool {
        self.is_sample_code
    }
}
