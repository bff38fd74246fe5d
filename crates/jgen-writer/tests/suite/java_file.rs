use jgen_ast::{
    AstErrorKind, ClassDefinition, ClassDefinitionBuilder, MethodDefinitionBuilder, Reference,
    ScopeNode, TypeNode, Variable, VariableExpr,
};
use jgen_config::ImportsConfig;
use jgen_writer::{JavaFile, SourceRenderer, WriteError};
use pretty_assertions::assert_eq;

/// Emits only the class header and method signatures.
#[derive(Default)]
struct OutlineRenderer {
    rendered: Vec<String>,
}

impl SourceRenderer for OutlineRenderer {
    fn render_class(&mut self, class: &ClassDefinition) -> Result<String, WriteError> {
        let name = class.class_identifier().name();
        self.rendered.push(name.to_owned());
        let mut out = format!("{} class {name} {{\n", class.scope());
        for method in class.methods() {
            out.push_str(&format!(
                "  {} {}();\n",
                method.scope(),
                method.method_identifier()
            ));
        }
        out.push('}');
        Ok(out)
    }
}

struct FailingRenderer;

impl SourceRenderer for FailingRenderer {
    fn render_class(&mut self, class: &ClassDefinition) -> Result<String, WriteError> {
        Err(WriteError::Render {
            class: class.class_identifier().name().to_owned(),
            message: "out of ink".into(),
        })
    }
}

fn service_class() -> ClassDefinition {
    let method = MethodDefinitionBuilder {
        scope: Some(ScopeNode::Public),
        return_type: Some(TypeNode::VOID),
        name: "shutdown".into(),
        arguments: vec![VariableExpr::declaration(
            Variable::new(
                "timeout",
                TypeNode::with_reference(Reference::new("java.time", "Duration")),
            )
            .unwrap(),
            ScopeNode::Local,
        )],
        ..Default::default()
    }
    .build()
    .unwrap();

    ClassDefinitionBuilder {
        scope: Some(ScopeNode::Public),
        name: "EchoService".into(),
        package: Some("com.example.echo".into()),
        implements_types: vec![TypeNode::with_reference(Reference::java_lang("AutoCloseable"))],
        methods: vec![method],
        ..Default::default()
    }
    .build()
    .unwrap()
}

#[test]
fn renders_package_imports_and_body() {
    let class = service_class();
    let file = JavaFile::new(&class).unwrap();
    assert_eq!(file.package(), "com.example.echo");

    let mut renderer = OutlineRenderer::default();
    let text = file.render(&mut renderer, &ImportsConfig::default()).unwrap();
    insta::assert_snapshot!(text, @r###"
    package com.example.echo;

    import java.time.Duration;

    public class EchoService {
      public shutdown();
    }
    "###);
    assert_eq!(renderer.rendered, vec!["EchoService".to_owned()]);
}

#[test]
fn file_without_imports_goes_straight_to_body() {
    let class = ClassDefinitionBuilder {
        scope: Some(ScopeNode::Public),
        name: "Empty".into(),
        package: Some("com.example".into()),
        ..Default::default()
    }
    .build()
    .unwrap();
    let text = JavaFile::new(&class)
        .unwrap()
        .render(&mut OutlineRenderer::default(), &ImportsConfig::default())
        .unwrap();
    assert_eq!(text, "package com.example;\n\npublic class Empty {\n}\n");
}

#[test]
fn nested_class_is_not_a_file() {
    let nested = ClassDefinitionBuilder {
        scope: Some(ScopeNode::Private),
        name: "Inner".into(),
        is_nested: true,
        ..Default::default()
    }
    .build()
    .unwrap();
    assert!(matches!(
        JavaFile::new(&nested),
        Err(WriteError::NotTopLevel { class }) if class == "Inner"
    ));
}

#[test]
fn renderer_failure_propagates() {
    let class = service_class();
    let err = JavaFile::new(&class)
        .unwrap()
        .render(&mut FailingRenderer, &ImportsConfig::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "renderer failed on `EchoService`: out of ink");
}

#[test]
fn import_failure_is_reported_as_ast_error() {
    let sample = jgen_ast::TryCatchStatementBuilder {
        is_sample_code: true,
        ..Default::default()
    }
    .build()
    .unwrap();
    let method = MethodDefinitionBuilder {
        scope: Some(ScopeNode::Public),
        return_type: Some(TypeNode::VOID),
        name: "demo".into(),
        body: vec![sample.into()],
        ..Default::default()
    }
    .build()
    .unwrap();
    let class = ClassDefinitionBuilder {
        scope: Some(ScopeNode::Public),
        name: "Demo".into(),
        package: Some("com.example".into()),
        methods: vec![method],
        ..Default::default()
    }
    .build()
    .unwrap();

    let mut renderer = OutlineRenderer::default();
    let err = JavaFile::new(&class)
        .unwrap()
        .render(&mut renderer, &ImportsConfig::default())
        .unwrap_err();
    match err {
        WriteError::Ast(err) => assert_eq!(err.kind(), AstErrorKind::MisuseOfTraversal),
        other => panic!("unexpected error: {other}"),
    }
    assert!(renderer.rendered.is_empty(), "body must not render after import failure");
}
