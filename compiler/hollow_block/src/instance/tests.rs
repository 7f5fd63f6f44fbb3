use hollow_host::Document;
use hollow_ir::{el, h, text, Callback, Fragment, Path, NO_CHILDREN, NO_PROPS};
use pretty_assertions::assert_eq;

use crate::{compile_block, BlockFactory};

use super::*;

fn button() -> BlockFactory {
    compile_block(["onClick", "number"], |[on_click, number]| {
        h("button", [("onClick", on_click)], [number])
    })
    .unwrap()
}

fn greeting() -> BlockFactory {
    compile_block(["name"], |[name]| {
        el("p", [text("Hello, "), Fragment::from(name), text("!")])
    })
    .unwrap()
}

fn emphasis() -> BlockFactory {
    compile_block(["t"], |[t]| h("em", NO_PROPS, [t])).unwrap()
}

fn card() -> BlockFactory {
    compile_block(["title", "body"], |[title, body]| {
        h("section", [("title", title)], [el("div", [body])])
    })
    .unwrap()
}

fn mount(factory: &BlockFactory, props: Props) -> (Document, BlockInstance) {
    let mut doc = Document::new();
    let mut instance = factory.instantiate(props);
    let target = doc.root();
    instance.mount(&mut doc, target).unwrap();
    (doc, instance)
}

// Mount

#[test]
fn test_mount_button() {
    let on_click = Callback::new(|| {});
    let factory = button();
    let mut doc = Document::new();
    let body = doc.root();
    let mut instance = factory.instantiate(
        Props::new()
            .with("onClick", on_click.clone())
            .with("number", 0),
    );

    let root = instance.mount(&mut doc, body).unwrap();

    assert_eq!(doc.inner_html(body), "<button onClick>0</button>");
    assert_eq!(instance.root(), Some(root));
    assert_eq!(instance.resolved_nodes(), &[root, root]);
    assert_eq!(
        doc.attribute(root, "onClick").and_then(Scalar::as_callback),
        Some(&on_click)
    );
}

#[test]
fn test_mount_replaces_target_children() {
    let mut doc = Document::new();
    let body = doc.root();
    let stale = doc.create_text("stale");
    doc.append_child(body, stale);

    let mut instance = greeting().instantiate(Props::new().with("name", "Ada"));
    instance.mount(&mut doc, body).unwrap();
    assert_eq!(doc.inner_html(body), "<p>Hello, Ada!</p>");
}

#[test]
fn test_mount_inserts_text_between_static_children() {
    let (doc, instance) = mount(&greeting(), Props::new().with("name", "Ada"));
    let p = instance.root().unwrap();
    assert_eq!(doc.children(p).len(), 3);
    assert_eq!(doc.text(doc.children(p)[1]), Some("Ada"));
}

#[test]
fn test_mount_nested_block() {
    let inner = emphasis().instantiate(Props::new().with("t", "hi"));
    let (doc, instance) = mount(
        &card(),
        Props::new().with("title", "Card").with("body", inner),
    );
    assert_eq!(
        doc.inner_html(doc.root()),
        "<section title=\"Card\"><div><em>hi</em></div></section>"
    );
    let nested = instance.props().get("body").and_then(Value::as_block).unwrap();
    assert!(nested.is_mounted());
    assert_eq!(nested.resolved_nodes().len(), 1);
}

#[test]
fn test_mount_twice_rejected() {
    let (mut doc, mut instance) = mount(&greeting(), Props::new().with("name", "Ada"));
    let body = doc.root();
    assert_eq!(
        instance.mount(&mut doc, body),
        Err(BlockError::AlreadyMounted)
    );
}

#[test]
fn test_mount_missing_prop() {
    let mut doc = Document::new();
    let body = doc.root();
    let mut instance = button().instantiate(Props::new().with("number", 1));
    assert_eq!(
        instance.mount(&mut doc, body),
        Err(BlockError::MissingProp {
            hole: Name::new("onClick")
        })
    );
    assert!(!instance.is_mounted());
}

#[test]
fn test_mount_block_in_attribute() {
    let mut doc = Document::new();
    let body = doc.root();
    let inner = emphasis().instantiate(Props::new().with("t", "x"));
    let mut instance = button().instantiate(Props::new().with("onClick", inner).with("number", 1));
    assert_eq!(
        instance.mount(&mut doc, body),
        Err(BlockError::BlockInAttribute {
            attribute: Name::new("onClick"),
            hole: Name::new("onClick"),
        })
    );
}

#[test]
fn test_mount_shared_nested_block() {
    let twice = compile_block(["inner"], |[inner]| {
        el("div", [el("p", [&inner]), el("p", [&inner])])
    })
    .unwrap();
    let mut doc = Document::new();
    let body = doc.root();
    let inner = emphasis().instantiate(Props::new().with("t", "x"));
    let mut instance = twice.instantiate(Props::new().with("inner", inner));
    assert_eq!(
        instance.mount(&mut doc, body),
        Err(BlockError::NestedBlockShared {
            hole: Name::new("inner"),
            count: 2,
        })
    );
}

#[test]
fn test_nested_block_replaces_siblings() {
    // The nested block takes over its parent element, so a later sibling
    // subtree is gone by the time its path is resolved.
    let factory = compile_block(["inner", "x"], |[inner, x]| {
        el("div", [Fragment::from(inner), el("span", [x])])
    })
    .unwrap();
    let mut doc = Document::new();
    let body = doc.root();
    let inner = emphasis().instantiate(Props::new().with("t", "x"));
    let mut instance = factory.instantiate(Props::new().with("inner", inner).with("x", 1));
    assert_eq!(
        instance.mount(&mut doc, body),
        Err(BlockError::PathUnresolved {
            edit: 1,
            path: Path::from([1]),
        })
    );
}

// Patch

#[test]
fn test_patch_button_touches_only_text() {
    let on_click = Callback::new(|| {});
    let factory = button();
    let (mut doc, mut instance) = mount(
        &factory,
        Props::new().with("onClick", on_click.clone()).with("number", 0),
    );
    let root = instance.root().unwrap();
    let text_node = doc.children(root)[0];
    let before = doc.mutation_count();

    let stats = instance
        .patch(
            &mut doc,
            factory.instantiate(Props::new().with("onClick", on_click).with("number", 1)),
        )
        .unwrap();

    assert_eq!(
        stats,
        PatchStats {
            edits: 2,
            changed: 1,
            skipped: 1,
        }
    );
    assert_eq!(doc.mutation_count() - before, 1);
    assert_eq!(doc.inner_html(doc.root()), "<button onClick>1</button>");
    assert_eq!(doc.children(root)[0], text_node);
    assert_eq!(instance.root(), Some(root));
}

#[test]
fn test_patch_with_equal_props_is_free() {
    let factory = greeting();
    let (mut doc, mut instance) = mount(&factory, Props::new().with("name", "Ada"));
    let before = doc.mutation_count();

    let stats = instance
        .patch(&mut doc, factory.instantiate(Props::new().with("name", "Ada")))
        .unwrap();

    assert_eq!(stats.changed, 0);
    assert_eq!(stats.skipped, 1);
    assert_eq!(doc.mutation_count(), before);
}

#[test]
fn test_patch_adopts_new_props() {
    let factory = greeting();
    let (mut doc, mut instance) = mount(&factory, Props::new().with("name", "Ada"));
    instance
        .patch(&mut doc, factory.instantiate(Props::new().with("name", "Grace")))
        .unwrap();
    assert_eq!(
        instance.props().get("name").and_then(Value::as_scalar),
        Some(&Scalar::from("Grace"))
    );

    // Patching back to the previous value is a change again.
    let stats = instance
        .patch(&mut doc, factory.instantiate(Props::new().with("name", "Ada")))
        .unwrap();
    assert_eq!(stats.changed, 1);
    assert_eq!(doc.inner_html(doc.root()), "<p>Hello, Ada!</p>");
}

#[test]
fn test_patch_nested_keeps_nodes() {
    let inner_factory = emphasis();
    let factory = card();
    let (mut doc, mut instance) = mount(
        &factory,
        Props::new()
            .with("title", "Card")
            .with("body", inner_factory.instantiate(Props::new().with("t", "old"))),
    );
    let nested_root = instance
        .props()
        .get("body")
        .and_then(Value::as_block)
        .and_then(BlockInstance::root)
        .unwrap();

    let stats = instance
        .patch(
            &mut doc,
            factory.instantiate(
                Props::new()
                    .with("title", Scalar::Null)
                    .with("body", inner_factory.instantiate(Props::new().with("t", "new"))),
            ),
        )
        .unwrap();

    assert_eq!(stats.changed, 2);
    assert_eq!(
        doc.inner_html(doc.root()),
        "<section><div><em>new</em></div></section>"
    );
    let nested = instance.props().get("body").and_then(Value::as_block).unwrap();
    assert_eq!(nested.root(), Some(nested_root));
    assert_eq!(
        nested.props().get("t").and_then(Value::as_scalar),
        Some(&Scalar::from("new"))
    );
}

#[test]
fn test_patch_nested_from_other_block_rejected() {
    let factory = card();
    let (mut doc, mut instance) = mount(
        &factory,
        Props::new()
            .with("title", "Card")
            .with("body", emphasis().instantiate(Props::new().with("t", "a"))),
    );
    let result = instance.patch(
        &mut doc,
        factory.instantiate(
            Props::new()
                .with("title", "Card")
                .with("body", emphasis().instantiate(Props::new().with("t", "b"))),
        ),
    );
    assert_eq!(result, Err(BlockError::BlockMismatch));
}

#[test]
fn test_patch_duplicate_hole_updates_every_position() {
    let factory = compile_block(["v"], |[v]| {
        h("input", [("value", &v), ("placeholder", &v)], NO_CHILDREN)
    })
    .unwrap();
    let (mut doc, mut instance) = mount(&factory, Props::new().with("v", "a"));
    let stats = instance
        .patch(&mut doc, factory.instantiate(Props::new().with("v", "b")))
        .unwrap();
    assert_eq!(stats.changed, 2);
    assert_eq!(
        doc.inner_html(doc.root()),
        "<input placeholder=\"b\" value=\"b\"></input>"
    );
}

#[test]
fn test_patch_kind_change_rejected() {
    let factory = card();
    let (mut doc, mut instance) = mount(
        &factory,
        Props::new().with("title", "Card").with("body", "plain"),
    );
    let result = instance.patch(
        &mut doc,
        factory.instantiate(
            Props::new()
                .with("title", "Card")
                .with("body", emphasis().instantiate(Props::new().with("t", "x"))),
        ),
    );
    assert_eq!(
        result,
        Err(BlockError::SlotKindChanged {
            hole: Name::new("body")
        })
    );
}

#[test]
fn test_patch_requires_mount() {
    let factory = greeting();
    let mut doc = Document::new();
    let mut instance = factory.instantiate(Props::new().with("name", "Ada"));
    assert_eq!(
        instance.patch(&mut doc, factory.instantiate(Props::new().with("name", "B"))),
        Err(BlockError::NotMounted)
    );
}

#[test]
fn test_patch_requires_same_block() {
    let (mut doc, mut instance) = mount(&greeting(), Props::new().with("name", "Ada"));
    let other = greeting().instantiate(Props::new().with("name", "Ada"));
    assert_eq!(
        instance.patch(&mut doc, other),
        Err(BlockError::BlockMismatch)
    );
}

#[test]
fn test_patch_missing_prop() {
    let factory = greeting();
    let (mut doc, mut instance) = mount(&factory, Props::new().with("name", "Ada"));
    assert_eq!(
        instance.patch(&mut doc, factory.instantiate(Props::new())),
        Err(BlockError::MissingProp {
            hole: Name::new("name")
        })
    );
}

#[test]
fn test_failed_patch_changes_nothing() {
    let factory = compile_block(["a", "b"], |[a, b]| el("p", [a, b])).unwrap();
    let (mut doc, mut instance) = mount(&factory, Props::new().with("a", "x").with("b", "y"));
    let before = doc.mutation_count();

    // `a` would change, but `b` is missing; nothing may be applied.
    let result = instance.patch(&mut doc, factory.instantiate(Props::new().with("a", "CHANGED")));
    assert_eq!(
        result,
        Err(BlockError::MissingProp {
            hole: Name::new("b")
        })
    );
    assert_eq!(doc.mutation_count(), before);
    assert_eq!(doc.inner_html(doc.root()), "<p>xy</p>");
    assert_eq!(
        instance.props().get("a").and_then(Value::as_scalar),
        Some(&Scalar::from("x"))
    );

    // The dirty check still matches the tree afterwards.
    let stats = instance
        .patch(
            &mut doc,
            factory.instantiate(Props::new().with("a", "z").with("b", "y")),
        )
        .unwrap();
    assert_eq!(stats.changed, 1);
    assert_eq!(doc.inner_html(doc.root()), "<p>zy</p>");
}

#[test]
fn test_failed_nested_patch_changes_nothing() {
    let factory = card();
    let inner = emphasis();
    let (mut doc, mut instance) = mount(
        &factory,
        Props::new()
            .with("title", "Card")
            .with("body", inner.instantiate(Props::new().with("t", "old"))),
    );
    let html = doc.inner_html(doc.root());
    let before = doc.mutation_count();

    // The title edit comes first; the nested block fails afterwards.
    let result = instance.patch(
        &mut doc,
        factory.instantiate(
            Props::new()
                .with("title", "Renamed")
                .with("body", inner.instantiate(Props::new())),
        ),
    );
    assert_eq!(
        result,
        Err(BlockError::MissingProp {
            hole: Name::new("t")
        })
    );
    assert_eq!(doc.mutation_count(), before);
    assert_eq!(doc.inner_html(doc.root()), html);
    assert_eq!(
        instance.props().get("title").and_then(Value::as_scalar),
        Some(&Scalar::from("Card"))
    );
}

#[test]
fn test_patch_detects_removed_text() {
    let factory = button();
    let (mut doc, mut instance) = mount(
        &factory,
        Props::new().with("onClick", Scalar::Null).with("number", 0),
    );
    let root = instance.root().unwrap();
    doc.clear_children(root);

    let result = instance.patch(
        &mut doc,
        factory.instantiate(Props::new().with("onClick", Scalar::Null).with("number", 1)),
    );
    assert_eq!(result, Err(BlockError::ChildMissing { edit: 1, index: 0 }));
    assert!(result.unwrap_err().is_structural());
}
