use jgen_ast::{
    AnnotationNode, AssignmentExpr, AstErrorKind, AstNode, ClassDefinitionBuilder, Expr,
    ExprStatement, ForStatementBuilder, IfStatementBuilder, MethodDefinitionBuilder,
    MethodInvocationExprBuilder, Reference, ScopeNode, Statement, TryCatchStatementBuilder,
    TypeNode, Variable, VariableExpr,
};
use jgen_writer::ImportWriterVisitor;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const CURRENT_PACKAGE: &str = "com.google.api.generator.engine.foobar";
const AST_PACKAGE: &str = "com.google.api.generator.engine.ast";

fn ast_type(name: &str) -> TypeNode {
    TypeNode::with_reference(Reference::new(AST_PACKAGE, name))
}

fn declaration(name: &str, ty: TypeNode) -> VariableExpr {
    VariableExpr::declaration(Variable::new(name, ty).unwrap(), ScopeNode::Local)
}

#[test]
fn assignment_expr_imports() {
    let mut visitor = ImportWriterVisitor::new(CURRENT_PACKAGE);

    let value_expr = MethodInvocationExprBuilder {
        method_name: "createClass".into(),
        static_reference_name: Some("ClassDefinition".into()),
        return_type: Some(ast_type("ClassDefinition")),
        ..Default::default()
    }
    .build()
    .unwrap();
    let assign = AssignmentExpr::new(declaration("clazz", ast_type("AstNode")), value_expr);

    assign.accept(&mut visitor).unwrap();
    assert_eq!(
        visitor.write(),
        "import com.google.api.generator.engine.ast.AstNode;\n\
         import com.google.api.generator.engine.ast.ClassDefinition;\n\n"
    );
}

#[test]
fn assignment_expr_imports_static_and_nested_generics() {
    let mut visitor = ImportWriterVisitor::new(CURRENT_PACKAGE);

    let entry = |generics: Vec<Reference>| {
        Reference::nested("java.util", ["Map"], "Entry").with_generics(generics)
    };
    let nested_generic = entry(vec![
        Reference::new(AST_PACKAGE, "ClassDefinition"),
        Reference::new(AST_PACKAGE, "AstNode"),
    ]);
    let generic = entry(vec![Reference::new(AST_PACKAGE, "AssignmentExpr"), nested_generic]);

    let list = Reference::new("java.util", "List").with_generics(vec![generic.clone()]);
    let array_list = Reference::new("java.util", "ArrayList").with_generics(vec![generic]);

    let value_expr = MethodInvocationExprBuilder {
        method_name: "doSomething".into(),
        return_type: Some(TypeNode::with_reference(array_list)),
        ..Default::default()
    }
    .build()
    .unwrap();
    let assign = AssignmentExpr::new(
        declaration("clazz", TypeNode::with_reference(list)),
        value_expr,
    );

    assign.accept(&mut visitor).unwrap();
    assert_eq!(
        visitor.write(),
        "import static java.util.Map.Entry;\n\n\
         import com.google.api.generator.engine.ast.AssignmentExpr;\n\
         import com.google.api.generator.engine.ast.AstNode;\n\
         import com.google.api.generator.engine.ast.ClassDefinition;\n\
         import java.util.ArrayList;\n\
         import java.util.List;\n\n"
    );
}

#[test]
fn implicit_names_produce_no_output() {
    let mut visitor = ImportWriterVisitor::new(CURRENT_PACKAGE);
    let assign = AssignmentExpr::new(
        declaration(
            "local",
            TypeNode::with_reference(Reference::new(CURRENT_PACKAGE, "Local")),
        ),
        jgen_ast::ValueExpr::string("text"),
    );
    assign.accept(&mut visitor).unwrap();
    assert_eq!(visitor.write(), "");
}

#[test]
fn sample_try_catch_is_rejected() {
    let mut visitor = ImportWriterVisitor::new(CURRENT_PACKAGE);
    let sample = TryCatchStatementBuilder {
        try_body: vec![ExprStatement::with_expr(declaration("node", ast_type("AstNode"))).into()],
        is_sample_code: true,
        ..Default::default()
    }
    .build()
    .unwrap();

    let err = sample.accept(&mut visitor).unwrap_err();
    assert_eq!(err.kind(), AstErrorKind::MisuseOfTraversal);

    // The rejection surfaces from deep inside a class tree as well.
    let method = MethodDefinitionBuilder {
        scope: Some(ScopeNode::Public),
        return_type: Some(TypeNode::VOID),
        name: "run".into(),
        body: vec![sample.into()],
        ..Default::default()
    }
    .build()
    .unwrap();
    let class = ClassDefinitionBuilder {
        scope: Some(ScopeNode::Public),
        name: "Runner".into(),
        package: Some(CURRENT_PACKAGE.into()),
        methods: vec![method],
        ..Default::default()
    }
    .build()
    .unwrap();
    let err = class.accept(&mut visitor).unwrap_err();
    assert_eq!(err.kind(), AstErrorKind::MisuseOfTraversal);
}

#[test]
fn try_catch_resolves_resource_body_and_catch_variable() {
    let mut visitor = ImportWriterVisitor::new(CURRENT_PACKAGE);

    let reader = TypeNode::with_reference(Reference::new("java.io", "BufferedReader"));
    let open = MethodInvocationExprBuilder {
        method_name: "newBufferedReader".into(),
        static_reference_name: Some("Files".into()),
        return_type: Some(reader.clone()),
        ..Default::default()
    }
    .build()
    .unwrap();
    let stmt = TryCatchStatementBuilder {
        try_resource_expr: Some(AssignmentExpr::new(declaration("reader", reader), open)),
        try_body: vec![ExprStatement::with_expr(declaration(
            "path",
            TypeNode::with_reference(Reference::new("java.nio.file", "Path")),
        ))
        .into()],
        catch_variable_expr: Some(declaration(
            "e",
            TypeNode::with_reference(Reference::new("java.io", "IOException")),
        )),
        ..Default::default()
    }
    .build()
    .unwrap();

    stmt.accept(&mut visitor).unwrap();
    insta::assert_snapshot!(visitor.write(), @r###"
    import java.io.BufferedReader;
    import java.io.IOException;
    import java.nio.file.Path;
    "###);
}

fn acme(name: &str) -> TypeNode {
    TypeNode::with_reference(Reference::new("com.acme", name))
}

/// `gate.isOpen()` where `gate` has the given external type.
fn gate_condition(gate_type: &str) -> Expr {
    MethodInvocationExprBuilder {
        expr_reference_expr: Some(
            VariableExpr::reference(Variable::new("gate", acme(gate_type)).unwrap()).into(),
        ),
        method_name: "isOpen".into(),
        return_type: Some(TypeNode::BOOLEAN),
        ..Default::default()
    }
    .build()
    .unwrap()
    .into()
}

fn declare(name: &str, type_name: &str) -> Statement {
    ExprStatement::with_expr(declaration(name, acme(type_name))).into()
}

#[test]
fn if_statement_resolves_every_branch() {
    let mut visitor = ImportWriterVisitor::new(CURRENT_PACKAGE);
    let stmt = IfStatementBuilder {
        condition_expr: Some(gate_condition("FirstGate")),
        body: vec![declare("a", "FirstBody")],
        else_ifs: vec![
            (gate_condition("SecondGate"), vec![declare("b", "SecondBody")]),
            (gate_condition("ThirdGate"), vec![declare("c", "ThirdBody")]),
        ],
        else_body: vec![declare("d", "ElseBody")],
    }
    .build()
    .unwrap();

    stmt.accept(&mut visitor).unwrap();
    insta::assert_snapshot!(visitor.write(), @r###"
    import com.acme.ElseBody;
    import com.acme.FirstBody;
    import com.acme.FirstGate;
    import com.acme.SecondBody;
    import com.acme.SecondGate;
    import com.acme.ThirdBody;
    import com.acme.ThirdGate;
    "###);
}

#[test]
fn for_statement_resolves_variable_collection_and_body() {
    let mut visitor = ImportWriterVisitor::new(CURRENT_PACKAGE);
    let collection = TypeNode::with_reference(
        Reference::new("java.util", "Collection")
            .with_generics(vec![Reference::new("com.acme", "Element")]),
    );
    let stmt = ForStatementBuilder {
        local_variable_expr: Some(declaration("item", acme("Item"))),
        collection_expr: Some(
            VariableExpr::reference(Variable::new("items", collection).unwrap()).into(),
        ),
        body: vec![declare("seen", "Tally")],
    }
    .build()
    .unwrap();

    stmt.accept(&mut visitor).unwrap();
    insta::assert_snapshot!(visitor.write(), @r###"
    import com.acme.Element;
    import com.acme.Item;
    import com.acme.Tally;
    import java.util.Collection;
    "###);
}

#[test]
fn class_tree_collects_every_declared_name() {
    let mut visitor = ImportWriterVisitor::new(CURRENT_PACKAGE);

    let method = MethodDefinitionBuilder {
        scope: Some(ScopeNode::Public),
        return_type: Some(ast_type("AstNode")),
        name: "parse".into(),
        annotations: vec![AnnotationNode::with_type(TypeNode::with_reference(Reference::new(
            "javax.annotation",
            "Nullable",
        )))
        .unwrap()],
        throws_exceptions: vec![TypeNode::with_reference(Reference::new("java.io", "IOException"))],
        arguments: vec![declaration(
            "entry",
            TypeNode::with_reference(Reference::nested("java.util", ["Map"], "Entry")),
        )],
        return_expr: Some(
            VariableExpr::reference(Variable::new("node", ast_type("AstNode")).unwrap()).into(),
        ),
        is_override: true,
        ..Default::default()
    }
    .build()
    .unwrap();

    let nested = ClassDefinitionBuilder {
        scope: Some(ScopeNode::Private),
        name: "Cache".into(),
        is_nested: true,
        is_static: true,
        extends_type: Some(TypeNode::with_reference(Reference::new(
            "java.util",
            "LinkedHashMap",
        ))),
        ..Default::default()
    }
    .build()
    .unwrap();

    let field = VariableExpr::declaration(
        Variable::new(
            "registry",
            TypeNode::with_reference(Reference::new("com.google.common.collect", "ImmutableMap")),
        )
        .unwrap(),
        ScopeNode::Private,
    );

    let class = ClassDefinitionBuilder {
        scope: Some(ScopeNode::Public),
        name: "Parser".into(),
        package: Some(CURRENT_PACKAGE.into()),
        annotations: vec![AnnotationNode::deprecated_marker().clone()],
        implements_types: vec![TypeNode::with_reference(Reference::new(
            "java.util.function",
            "Supplier",
        ))],
        extends_type: Some(TypeNode::with_reference(Reference::new(CURRENT_PACKAGE, "BaseParser"))),
        statements: vec![ExprStatement::with_expr(field).into()],
        methods: vec![method],
        nested_classes: vec![nested],
        ..Default::default()
    }
    .build()
    .unwrap();

    class.accept(&mut visitor).unwrap();
    insta::assert_snapshot!(visitor.write(), @r###"
    import static java.util.Map.Entry;

    import com.google.api.generator.engine.ast.AstNode;
    import com.google.common.collect.ImmutableMap;
    import java.io.IOException;
    import java.util.LinkedHashMap;
    import java.util.function.Supplier;
    import javax.annotation.Nullable;
    "###);
}

#[test]
fn clear_allows_reuse_across_files() {
    let mut visitor = ImportWriterVisitor::new(CURRENT_PACKAGE);

    declaration("a", TypeNode::with_reference(Reference::new("java.util", "List")))
        .accept(&mut visitor)
        .unwrap();
    assert_eq!(visitor.write(), "import java.util.List;\n\n");

    visitor.clear();
    assert_eq!(visitor.write(), "");

    declaration("b", TypeNode::with_reference(Reference::new("java.util", "Set")))
        .accept(&mut visitor)
        .unwrap();
    assert_eq!(visitor.write(), "import java.util.Set;\n\n");
}

fn qualified_reference() -> impl Strategy<Value = Reference> {
    (
        prop::sample::select(vec!["java.util", "java.io", "com.example", "org.acme.core"]),
        prop::collection::vec("[A-Z][a-z]{0,3}", 0..2),
        "[A-Z][a-z]{0,4}",
    )
        .prop_map(|(package, enclosing, name)| Reference::nested(package, enclosing, name))
}

proptest! {
    #[test]
    fn rendered_names_are_sorted_and_unique(
        references in prop::collection::vec(qualified_reference(), 0..24),
    ) {
        let mut forward = ImportWriterVisitor::new(CURRENT_PACKAGE);
        let mut backward = ImportWriterVisitor::new(CURRENT_PACKAGE);
        for reference in &references {
            reference.accept(&mut forward).unwrap();
        }
        for reference in references.iter().rev() {
            reference.accept(&mut backward).unwrap();
        }
        prop_assert_eq!(forward.write(), backward.write());

        for set in [forward.static_imports(), forward.imports()] {
            let names: Vec<&String> = set.iter().collect();
            prop_assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
        }
        let expected_static = references
            .iter()
            .filter(|r| r.has_enclosing_type())
            .map(Reference::full_name)
            .collect::<std::collections::BTreeSet<_>>();
        prop_assert_eq!(forward.static_imports(), &expected_static);
    }
}
