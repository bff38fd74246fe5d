//! In-memory model of generated Java source.
//!
//! Nodes are immutable values assembled bottom-up through validating builders. Once a builder
//! returns `Ok`, the node and everything reachable from it upholds the structural invariants of
//! the target language (legal modifier combinations, field-only class bodies, matching return
//! types, checked-only `throws` clauses), so downstream passes can consume the tree without
//! re-checking it. Traversals are written against [`visit::AstVisitor`].

mod annotation;
mod decl;
mod error;
mod expr;
pub mod hierarchy;
mod identifier;
mod reference;
mod scope;
mod stmt;
mod types;
pub mod visit;

pub use annotation::AnnotationNode;
pub use decl::{ClassDefinition, ClassDefinitionBuilder, MethodDefinition, MethodDefinitionBuilder};
pub use error::{AstError, AstErrorKind};
pub use expr::{
    AssignmentExpr, AssignmentExprBuilder, Expr, MethodInvocationExpr,
    MethodInvocationExprBuilder, Value, ValueExpr, Variable, VariableExpr, VariableExprBuilder,
};
pub use identifier::IdentifierNode;
pub use reference::Reference;
pub use scope::ScopeNode;
pub use stmt::{
    ExprStatement, ForStatement, ForStatementBuilder, IfStatement, IfStatementBuilder, Statement,
    TryCatchStatement, TryCatchStatementBuilder, WhileStatement, WhileStatementBuilder,
};
pub use types::{TypeKind, TypeNode};
pub use visit::{AstNode, AstVisitor};
