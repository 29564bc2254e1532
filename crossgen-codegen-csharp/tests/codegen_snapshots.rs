//! Snapshot tests for C# code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use crossgen_codegen::testing::{render, render_in};
use crossgen_codegen_csharp::CSharpTarget;
use crossgen_ir::{
    Declaration, DeclarationTable, Field, FunctionTypeDecl, Method, PrimitiveType, TypeRef,
    Visibility,
};

#[test]
fn test_pair_class() {
    let pair = Declaration::class("a.b", "Pair")
        .field(Field::new("x", TypeRef::int()).initializer("1"))
        .method(Method::constructor().body(["super-call();"]));

    insta::assert_snapshot!("pair_class", render(&CSharpTarget::new(), &pair));
}

#[test]
fn test_top_level_empty_class() {
    let main = Declaration::class("", "Main");
    insta::assert_snapshot!("top_level_empty_class", render(&CSharpTarget::new(), &main));
}

#[test]
fn test_sealed_class_with_everything() {
    let mut table = DeclarationTable::new();
    let widget = table.insert(Declaration::class("game.core", "Widget")).unwrap();
    let clickable = table
        .insert(Declaration::interface("game.ui", "IClickable"))
        .unwrap();
    let rect = table.insert(Declaration::class("geom", "Rect")).unwrap();
    let button = table.next_id();

    let decl = Declaration::class("game.ui", "Button")
        .final_class()
        .extends(TypeRef::user_class("Widget", widget))
        .implements(TypeRef::user_class("IClickable", clickable))
        .function_type(
            FunctionTypeDecl::new("ClickHandler")
                .param("sender", TypeRef::user_class("Button", button)),
        )
        .field(
            Field::new("MAX_CLICKS", TypeRef::int())
                .as_const()
                .initializer("10"),
        )
        .field(
            Field::new("DEFAULT_BOUNDS", TypeRef::user_class("Rect", rect))
                .as_const()
                .initializer("new Rect(0, 0, 80, 20)"),
        )
        .field(
            Field::new("_label", TypeRef::class("String"))
                .visibility(Visibility::Private)
                .initializer("\"OK\""),
        )
        .field(
            Field::new("bounds", TypeRef::user_class("Rect", rect))
                .visibility(Visibility::Protected)
                .initializer("new Rect()"),
        )
        .field(Field::new(
            "handlers",
            TypeRef::vector(TypeRef::class("ClickHandler")),
        ))
        .method(
            Method::constructor()
                .param("label", TypeRef::class("String"))
                .body(["super-call(label);", "_label = label;"]),
        )
        .method(
            Method::new("label")
                .as_getter()
                .returns(TypeRef::class("String"))
                .body(["return _label;"]),
        )
        .method(Method::new("draw").as_override().body(["base.draw();"]))
        .method(
            Method::new("click")
                .returns(TypeRef::boolean())
                .body(["return handlers.length > 0;"]),
        )
        .method(
            Method::new("create")
                .as_static()
                .returns(TypeRef::user_class("Button", button))
                .body(["return new Button(\"OK\");"]),
        );
    assert_eq!(table.insert(decl.clone()).unwrap(), button);

    insta::assert_snapshot!(
        "sealed_class_with_everything",
        render_in(&table, &CSharpTarget::new(), &decl)
    );
}

#[test]
fn test_interface() {
    let decl = Declaration::interface("game.ui", "IClickable")
        .implements(TypeRef::class("IComparable"))
        .function_type(
            FunctionTypeDecl::new("Listener")
                .returns(TypeRef::boolean())
                .param("x", TypeRef::number()),
        )
        .method(Method::new("click").returns(TypeRef::boolean()))
        .method(
            Method::new("enabled")
                .as_setter()
                .param("value", TypeRef::boolean()),
        )
        .method(Method::new("event").param(
            "params",
            TypeRef::vector(TypeRef::primitive(PrimitiveType::Any)),
        ));

    insta::assert_snapshot!("interface", render(&CSharpTarget::new(), &decl));
}
