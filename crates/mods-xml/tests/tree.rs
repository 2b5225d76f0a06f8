//! Parsing and serialization tests for mods-xml.

use mods_xml::{Document, Element, Node, XmlError};
use proptest::prelude::*;

const ORIGIN_INFO: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<mods xmlns="http://www.loc.gov/mods/v3" version="3.7">
  <!-- converted -->
  <originInfo eventType="publication">
    <place>
      <placeTerm type="text">Stanford &amp; Palo Alto</placeTerm>
    </place>
    <dateIssued keyDate="yes">1990.</dateIssued>
  </originInfo>
</mods>
"#;

#[test]
fn parses_elements_attributes_and_text() {
    let doc = Document::parse(ORIGIN_INFO).expect("parse");
    let root = doc.root();
    assert_eq!(root.name(), "mods");
    assert_eq!(root.attr("version"), Some("3.7"));
    assert_eq!(root.elements().count(), 1);

    let origin_info = root.child("originInfo").expect("originInfo");
    assert_eq!(origin_info.attr("eventType"), Some("publication"));
    let place_term = origin_info
        .child("place")
        .and_then(|place| place.child("placeTerm"))
        .expect("placeTerm");
    assert_eq!(place_term.text(), "Stanford & Palo Alto");
    assert_eq!(origin_info.child("dateIssued").expect("date").text(), "1990.");
}

#[test]
fn layout_whitespace_is_dropped() {
    let doc = Document::parse(ORIGIN_INFO).expect("parse");
    let origin_info = doc.root().child("originInfo").expect("originInfo");
    assert!(
        origin_info
            .children()
            .iter()
            .all(|node| matches!(node, Node::Element(_)))
    );
}

#[test]
fn prefixed_names_match_by_local_name() {
    let doc = Document::parse(
        r#"<mods:mods xmlns:mods="http://www.loc.gov/mods/v3"><mods:titleInfo><mods:title>Hi</mods:title></mods:titleInfo></mods:mods>"#,
    )
    .expect("parse");
    let title_info = doc.root().child("titleInfo").expect("titleInfo");
    assert_eq!(title_info.name(), "mods:titleInfo");
    assert_eq!(title_info.child("title").expect("title").text(), "Hi");
}

#[test]
fn character_references_are_resolved() {
    let doc = Document::parse("<note>caf&#233; &lt;draft&gt;</note>").expect("parse");
    assert_eq!(doc.root().text(), "café <draft>");
}

#[test]
fn compact_serialization_escapes_text() {
    let root = Element::new("mods")
        .with_attr("version", "3.7")
        .with_child(Element::new("note").with_text("a < b & c"))
        .with_child(Element::new("genre"));
    let xml = Document::new(root).to_xml_string(false).expect("serialize");
    insta::assert_snapshot!(xml, @r#"<?xml version="1.0" encoding="UTF-8"?><mods version="3.7"><note>a &lt; b &amp; c</note><genre/></mods>"#);
}

#[test]
fn reparsing_serialized_output_is_stable() {
    let doc = Document::parse(ORIGIN_INFO).expect("parse");
    let pretty = doc.to_xml_string(true).expect("serialize");
    let reparsed = Document::parse(&pretty).expect("reparse");
    assert_eq!(reparsed, doc);
}

#[test]
fn unclosed_document_is_an_error() {
    let error = Document::parse("<mods><titleInfo></mods>").expect_err("mismatched");
    assert!(matches!(error, XmlError::Syntax { .. }));
}

#[test]
fn empty_input_has_no_root() {
    let error = Document::parse("<?xml version=\"1.0\"?>").expect_err("no root");
    assert!(matches!(error, XmlError::NoRoot));
}

#[test]
fn fragment_has_no_declaration() {
    let element = Element::new("identifier")
        .with_attr("type", "isbn")
        .with_text("0123456789");
    assert_eq!(
        element.to_xml_fragment().expect("fragment"),
        r#"<identifier type="isbn">0123456789</identifier>"#
    );
}

proptest! {
    #[test]
    fn text_survives_a_round_trip(text in "[a-zA-Z0-9 <>&.,;:-]{1,40}") {
        prop_assume!(!text.trim().is_empty());
        let doc = Document::new(Element::new("note").with_text(text.clone()));
        let xml = doc.to_xml_string(false).expect("serialize");
        let reparsed = Document::parse(&xml).expect("reparse");
        prop_assert_eq!(reparsed.root().text(), text);
    }
}
