use crate::assert_eq_pretty;
use crate::error::ErrorType;
use crate::xml_tree::{Declaration, Document, Element, Node};

use rstest::rstest;

fn element(name: &str, children: Vec<Node>) -> Element {
    let mut result = Element::new(name);
    result.children = children;
    result
}

fn text(t: &str) -> Node {
    Node::Text(t.to_string())
}

#[test]
fn parse_simple() {
    let doc = Document::parse(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<root a="1" b="x &amp; y">
  <child>hello</child>
  <empty/>
</root>"#,
    )
    .unwrap();

    assert_eq_pretty!(doc.declaration, Some(Declaration::default()));
    let mut expected = element(
        "root",
        vec![
            Node::Element(element("child", vec![text("hello")])),
            Node::Element(Element::new("empty")),
        ],
    );
    expected.attributes = vec![
        ("a".to_string(), "1".to_string()),
        ("b".to_string(), "x & y".to_string()),
    ];
    assert_eq_pretty!(doc.root, expected);
}

#[test]
fn comments_cdata_and_prolog_are_kept() {
    let doc = Document::parse(
        r#"<!-- before --><root><!-- inside --><![CDATA[<raw>]]><?pi data?></root>"#,
    )
    .unwrap();
    assert_eq!(doc.declaration, None);
    assert_eq_pretty!(doc.prolog, vec![Node::Comment(" before ".to_string())]);
    assert_eq_pretty!(
        doc.root.children,
        vec![
            Node::Comment(" inside ".to_string()),
            Node::CData("<raw>".to_string()),
            Node::Instruction("pi data".to_string()),
        ]
    );
}

#[test]
fn write_and_read_back() {
    let input = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx xmlns:ext="http://example.com/ext" version="1.1">
  <!-- recorded -->
  <metadata><name>A &lt;B&gt;</name><ext:color>red</ext:color></metadata>
  <extensions><![CDATA[keep me]]></extensions>
</gpx>"#;
    let doc = Document::parse(input).unwrap();
    let written = doc.to_xml().unwrap();
    assert_eq_pretty!(Document::parse(&written).unwrap(), doc);
    assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(written.contains("A &lt;B&gt;"));
    assert!(written.contains("<![CDATA[keep me]]>"));
}

#[rstest]
#[case("")]
#[case("<!-- only a comment -->")]
#[case("<a><b></a>")]
#[case("<a></a><b></b>")]
#[case("<a>")]
#[case("</a>")]
fn malformed(#[case] input: &str) {
    let err = Document::parse(input).unwrap_err();
    assert_eq!(err.get_type(), ErrorType::FormatError, "{}", err);
}

#[test]
fn names_match_without_prefix() {
    let doc = Document::parse(
        r#"<g:gpx xmlns:g="x"><g:trk g:id="7"/><trk/><other/></g:gpx>"#,
    )
    .unwrap();
    assert!(doc.root.is("gpx"));
    assert_eq!(doc.root.children_named("trk").count(), 2);
    let first = doc.root.child("trk").unwrap();
    assert_eq!(first.name, "g:trk");
    assert_eq!(first.attribute("id"), Some("7"));
    assert!(doc.root.child("missing").is_none());
}

#[test]
fn text_concatenates_cdata() {
    let doc =
        Document::parse("<name>Jour<![CDATA[ 1]]><!-- x --></name>").unwrap();
    assert_eq!(doc.root.text(), "Jour 1");
}

#[test]
fn set_text_replaces_content() {
    let mut e = element(
        "name",
        vec![text("old"), Node::Comment("c".to_string()), text("er")],
    );
    e.set_text("new".to_string());
    assert_eq_pretty!(
        e.children,
        vec![text("new"), Node::Comment("c".to_string())]
    );
}

#[test]
fn replace_children_in_place() {
    let mut e = element(
        "trk",
        vec![
            Node::Element(Element::new("name")),
            Node::Element(Element::new("trkseg")),
            Node::Element(Element::new("extensions")),
            Node::Element(Element::new("trkseg")),
        ],
    );
    e.replace_children(
        "trkseg",
        vec![Element::new("a"), Element::new("b")],
    );
    let names: Vec<&str> = e.elements().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["name", "a", "b", "extensions"]);
}

#[test]
fn replace_children_appends_when_missing() {
    let mut e = element("trk", vec![Node::Element(Element::new("name"))]);
    e.replace_children("trkseg", vec![Element::new("trkseg")]);
    let names: Vec<&str> = e.elements().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["name", "trkseg"]);
}

#[test]
fn remove_children_keeps_other_nodes() {
    let mut e = element(
        "gpx",
        vec![
            Node::Element(Element::new("wpt")),
            Node::Comment("c".to_string()),
            Node::Element(Element::new("trk")),
            Node::Element(Element::new("wpt")),
        ],
    );
    e.remove_children("wpt");
    assert_eq_pretty!(
        e.children,
        vec![
            Node::Comment("c".to_string()),
            Node::Element(Element::new("trk")),
        ]
    );
}
