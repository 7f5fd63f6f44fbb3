use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_h_assembles_structure() {
    let frag = h(
        "div",
        [("id", PropValue::from("foo"))],
        [Fragment::from("hello"), el("span", ["world"])],
    );

    let el = frag.as_element().unwrap();
    assert_eq!(el.tag, "div");
    assert_eq!(el.props, vec![(Name::new("id"), PropValue::from("foo"))]);
    assert_eq!(el.children.len(), 2);
    assert_eq!(el.children[0], Fragment::Text(Scalar::from("hello")));
    assert_eq!(el.children[1].as_element().unwrap().tag, "span");
}

#[test]
fn test_h_accepts_holes_directly() {
    let on_click = Hole::new("onClick");
    let number = Hole::new("number");
    let frag = h("button", [("onClick", on_click.clone())], [number.clone()]);

    let el = frag.as_element().unwrap();
    assert_eq!(el.props[0].1, PropValue::Hole(on_click));
    assert_eq!(el.children, vec![Fragment::Hole(number)]);
}

#[test]
fn test_empty_props_and_children() {
    let frag = h("br", NO_PROPS, NO_CHILDREN);
    let el = frag.as_element().unwrap();
    assert!(el.props.is_empty());
    assert!(el.children.is_empty());
}

#[test]
fn test_prop_set_twice_keeps_position() {
    let el = Element::new("a")
        .prop("href", "/one")
        .prop("title", "t")
        .prop("href", "/two");
    assert_eq!(
        el.props,
        vec![
            (Name::new("href"), PropValue::from("/two")),
            (Name::new("title"), PropValue::from("t")),
        ]
    );
}

#[test]
fn test_has_holes() {
    assert!(!text("static").has_holes());
    assert!(!el("p", ["static"]).has_holes());
    assert!(el("p", [el("b", [Hole::new("x")])]).has_holes());
    let input = Element::new("input")
        .prop("value", Hole::new("v"))
        .child("label");
    assert!(Fragment::from(input).has_holes());
}
