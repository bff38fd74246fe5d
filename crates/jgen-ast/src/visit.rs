//! Double-dispatch traversal over the tree.
//!
//! Every node implements [`AstNode::accept`], which calls the one [`AstVisitor`] method matching
//! the node's concrete type. The default visitor methods recurse through the corresponding
//! `walk_*` function, which forwards into every child in a fixed order: fields in declaration
//! order, then list elements in list order.
//!
//! Override the methods a pass cares about and call the matching `walk_*` function to keep
//! recursing; omit the call to prune the traversal at that node.
//!
//! ```
//! use jgen_ast::visit::{walk_reference, AstNode, AstVisitor};
//! use jgen_ast::{Reference, TypeNode};
//!
//! #[derive(Default)]
//! struct NameCollector {
//!     names: Vec<String>,
//! }
//!
//! impl AstVisitor for NameCollector {
//!     type Error = std::convert::Infallible;
//!
//!     fn visit_reference(&mut self, reference: &Reference) -> Result<(), Self::Error> {
//!         self.names.push(reference.full_name());
//!         walk_reference(self, reference)
//!     }
//! }
//!
//! let ty = TypeNode::with_reference(
//!     Reference::new("java.util", "List").with_generics(vec![Reference::java_lang("String")]),
//! );
//! let mut collector = NameCollector::default();
//! ty.accept(&mut collector).unwrap();
//! assert_eq!(collector.names, ["java.util.List", "java.lang.String"]);
//! ```

use crate::{
    AnnotationNode, AssignmentExpr, ClassDefinition, Expr, ExprStatement, ForStatement,
    IdentifierNode, IfStatement, MethodDefinition, MethodInvocationExpr, Reference, ScopeNode,
    Statement, TryCatchStatement, TypeNode, ValueExpr, VariableExpr, WhileStatement,
};

/// A traversal over the tree. A pass that cannot fail uses `std::convert::Infallible`.
pub trait AstVisitor: Sized {
    type Error;

    fn visit_identifier(&mut self, _identifier: &IdentifierNode) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_scope(&mut self, _scope: ScopeNode) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_reference(&mut self, reference: &Reference) -> Result<(), Self::Error> {
        walk_reference(self, reference)
    }

    fn visit_type(&mut self, ty: &TypeNode) -> Result<(), Self::Error> {
        walk_type(self, ty)
    }

    fn visit_annotation(&mut self, annotation: &AnnotationNode) -> Result<(), Self::Error> {
        walk_annotation(self, annotation)
    }

    // Expressions

    fn visit_value_expr(&mut self, expr: &ValueExpr) -> Result<(), Self::Error> {
        walk_value_expr(self, expr)
    }

    fn visit_variable_expr(&mut self, expr: &VariableExpr) -> Result<(), Self::Error> {
        walk_variable_expr(self, expr)
    }

    fn visit_assignment_expr(&mut self, expr: &AssignmentExpr) -> Result<(), Self::Error> {
        walk_assignment_expr(self, expr)
    }

    fn visit_method_invocation_expr(
        &mut self,
        expr: &MethodInvocationExpr,
    ) -> Result<(), Self::Error> {
        walk_method_invocation_expr(self, expr)
    }

    // Statements

    fn visit_expr_statement(&mut self, stmt: &ExprStatement) -> Result<(), Self::Error> {
        walk_expr_statement(self, stmt)
    }

    fn visit_if_statement(&mut self, stmt: &IfStatement) -> Result<(), Self::Error> {
        walk_if_statement(self, stmt)
    }

    fn visit_for_statement(&mut self, stmt: &ForStatement) -> Result<(), Self::Error> {
        walk_for_statement(self, stmt)
    }

    fn visit_while_statement(&mut self, stmt: &WhileStatement) -> Result<(), Self::Error> {
        walk_while_statement(self, stmt)
    }

    fn visit_try_catch_statement(&mut self, stmt: &TryCatchStatement) -> Result<(), Self::Error> {
        walk_try_catch_statement(self, stmt)
    }

    // Declarations

    fn visit_method_definition(&mut self, method: &MethodDefinition) -> Result<(), Self::Error> {
        walk_method_definition(self, method)
    }

    fn visit_class_definition(&mut self, class: &ClassDefinition) -> Result<(), Self::Error> {
        walk_class_definition(self, class)
    }
}

/// Implemented by every node: invoke the visitor method for this node's concrete type.
pub trait AstNode {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> Result<(), V::Error>;
}

// ============================================================================
// Dispatch
// ============================================================================

macro_rules! impl_ast_node {
    ($($node:ty => $method:ident),* $(,)?) => {
        $(
            impl AstNode for $node {
                fn accept<V: AstVisitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
                    visitor.$method(self)
                }
            }
        )*
    };
}

impl_ast_node! {
    IdentifierNode => visit_identifier,
    Reference => visit_reference,
    TypeNode => visit_type,
    AnnotationNode => visit_annotation,
    ValueExpr => visit_value_expr,
    VariableExpr => visit_variable_expr,
    AssignmentExpr => visit_assignment_expr,
    MethodInvocationExpr => visit_method_invocation_expr,
    ExprStatement => visit_expr_statement,
    IfStatement => visit_if_statement,
    ForStatement => visit_for_statement,
    WhileStatement => visit_while_statement,
    TryCatchStatement => visit_try_catch_statement,
    MethodDefinition => visit_method_definition,
    ClassDefinition => visit_class_definition,
}

impl AstNode for ScopeNode {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        visitor.visit_scope(*self)
    }
}

impl AstNode for Expr {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        match self {
            Expr::Value(expr) => visitor.visit_value_expr(expr),
            Expr::Variable(expr) => visitor.visit_variable_expr(expr),
            Expr::Assignment(expr) => visitor.visit_assignment_expr(expr),
            Expr::MethodInvocation(expr) => visitor.visit_method_invocation_expr(expr),
        }
    }
}

impl AstNode for Statement {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> Result<(), V::Error> {
        match self {
            Statement::Expr(stmt) => visitor.visit_expr_statement(stmt),
            Statement::If(stmt) => visitor.visit_if_statement(stmt),
            Statement::For(stmt) => visitor.visit_for_statement(stmt),
            Statement::While(stmt) => visitor.visit_while_statement(stmt),
            Statement::TryCatch(stmt) => visitor.visit_try_catch_statement(stmt),
        }
    }
}

// ============================================================================
// Walk functions
// ============================================================================

/// Accept every node of `nodes`, in order, stopping at the first error.
pub fn walk_all<'a, V, N, I>(visitor: &mut V, nodes: I) -> Result<(), V::Error>
where
    V: AstVisitor,
    N: AstNode + 'a,
    I: IntoIterator<Item = &'a N>,
{
    for node in nodes {
        node.accept(visitor)?;
    }
    Ok(())
}

pub fn walk_reference<V: AstVisitor>(v: &mut V, reference: &Reference) -> Result<(), V::Error> {
    walk_all(v, reference.generics())
}

pub fn walk_type<V: AstVisitor>(v: &mut V, ty: &TypeNode) -> Result<(), V::Error> {
    if !ty.is_reference_type() {
        return Ok(());
    }
    match ty.reference() {
        Some(reference) => v.visit_reference(reference),
        None => Ok(()),
    }
}

pub fn walk_annotation<V: AstVisitor>(
    v: &mut V,
    annotation: &AnnotationNode,
) -> Result<(), V::Error> {
    v.visit_type(annotation.ty())
}

pub fn walk_value_expr<V: AstVisitor>(v: &mut V, expr: &ValueExpr) -> Result<(), V::Error> {
    v.visit_type(expr.ty())
}

pub fn walk_variable_expr<V: AstVisitor>(v: &mut V, expr: &VariableExpr) -> Result<(), V::Error> {
    v.visit_type(expr.variable().ty())?;
    v.visit_identifier(expr.variable().identifier())?;
    v.visit_scope(expr.scope())
}

pub fn walk_assignment_expr<V: AstVisitor>(
    v: &mut V,
    expr: &AssignmentExpr,
) -> Result<(), V::Error> {
    v.visit_variable_expr(expr.variable_expr())?;
    expr.value_expr().accept(v)
}

pub fn walk_method_invocation_expr<V: AstVisitor>(
    v: &mut V,
    expr: &MethodInvocationExpr,
) -> Result<(), V::Error> {
    v.visit_type(expr.return_type())?;
    if let Some(receiver) = expr.expr_reference_expr() {
        receiver.accept(v)?;
    }
    v.visit_identifier(expr.method_identifier())?;
    walk_all(v, expr.generics())?;
    walk_all(v, expr.arguments())
}

pub fn walk_expr_statement<V: AstVisitor>(
    v: &mut V,
    stmt: &ExprStatement,
) -> Result<(), V::Error> {
    stmt.expression().accept(v)
}

pub fn walk_if_statement<V: AstVisitor>(v: &mut V, stmt: &IfStatement) -> Result<(), V::Error> {
    stmt.condition_expr().accept(v)?;
    walk_all(v, stmt.body())?;
    for (condition, body) in stmt.else_ifs() {
        condition.accept(v)?;
        walk_all(v, body)?;
    }
    walk_all(v, stmt.else_body())
}

pub fn walk_for_statement<V: AstVisitor>(v: &mut V, stmt: &ForStatement) -> Result<(), V::Error> {
    v.visit_variable_expr(stmt.local_variable_expr())?;
    stmt.collection_expr().accept(v)?;
    walk_all(v, stmt.body())
}

pub fn walk_while_statement<V: AstVisitor>(
    v: &mut V,
    stmt: &WhileStatement,
) -> Result<(), V::Error> {
    stmt.condition_expr().accept(v)?;
    walk_all(v, stmt.body())
}

pub fn walk_try_catch_statement<V: AstVisitor>(
    v: &mut V,
    stmt: &TryCatchStatement,
) -> Result<(), V::Error> {
    if let Some(resource) = stmt.try_resource_expr() {
        v.visit_assignment_expr(resource)?;
    }
    walk_all(v, stmt.try_body())?;
    if let Some(catch_variable) = stmt.catch_variable_expr() {
        v.visit_variable_expr(catch_variable)?;
    }
    walk_all(v, stmt.catch_body())
}

pub fn walk_method_definition<V: AstVisitor>(
    v: &mut V,
    method: &MethodDefinition,
) -> Result<(), V::Error> {
    v.visit_scope(method.scope())?;
    v.visit_type(method.return_type())?;
    v.visit_identifier(method.method_identifier())?;
    walk_all(v, method.annotations())?;
    walk_all(v, method.throws_exceptions())?;
    walk_all(v, method.arguments())?;
    walk_all(v, method.body())?;
    if let Some(return_expr) = method.return_expr() {
        return_expr.accept(v)?;
    }
    Ok(())
}

pub fn walk_class_definition<V: AstVisitor>(
    v: &mut V,
    class: &ClassDefinition,
) -> Result<(), V::Error> {
    v.visit_scope(class.scope())?;
    v.visit_identifier(class.class_identifier())?;
    walk_all(v, class.annotations())?;
    walk_all(v, class.implements_types())?;
    if let Some(extends_type) = class.extends_type() {
        v.visit_type(extends_type)?;
    }
    walk_all(v, class.statements())?;
    walk_all(v, class.methods())?;
    walk_all(v, class.nested_classes())
}
