//! Tests for mods-model types.

use mods_model::{Content, Description, ModelError, RelatedResource};
use serde_json::json;

fn description(value: serde_json::Value) -> Description {
    serde_json::from_value(value).expect("deserialize description")
}

#[test]
fn deserializes_camel_case_record() {
    let record = description(json!({
        "title": [{"value": "Gaudy night", "status": "primary"}],
        "contributor": [{
            "name": [{"value": "Sayers, Dorothy L."}],
            "type": "person",
            "role": [{"value": "author", "code": "aut"}]
        }],
        "adminMetadata": {"note": [{"type": "record origin", "value": "Converted from MARCXML to MODS version 3.6"}]},
        "relatedResource": [{"type": "part of", "valueAt": "https://example.org/collection"}],
        "purl": "https://purl.example.org/bc123df4567"
    }));

    assert_eq!(record.title[0].text(), Some("Gaudy night"));
    assert!(record.title[0].has_status("primary"));
    assert_eq!(record.contributor[0].kind(), Some("person"));
    assert!(record.contributor[0].has_role("Author"));
    assert!(record.contributor[0].has_role("aut"));
    let admin = record.admin_metadata.as_ref().expect("admin metadata");
    assert!(admin.note[0].is_type("record origin"));
    assert_eq!(
        record.related_resource[0].reference(),
        Some("https://example.org/collection")
    );
    assert_eq!(record.purl(), Some("https://purl.example.org/bc123df4567"));
    assert!(record.validate().is_ok());
}

#[test]
fn absent_sequences_default_to_empty() {
    let record = description(json!({"title": [{"structuredValue": [
        {"value": "The", "type": "nonsorting characters"},
        {"value": "hound", "type": "main title"}
    ]}]}));
    let title = &record.title[0];
    assert!(title.parallel_value.is_empty());
    assert!(title.note.is_empty());
    assert!(matches!(title.content(), Content::Structured(parts) if parts.len() == 2));
    assert!(record.access.is_none());
}

#[test]
fn validation_rejects_value_with_structured_value() {
    let record = description(json!({"subject": [{
        "value": "Cats",
        "structuredValue": [{"value": "Cats", "type": "topic"}]
    }]}));
    assert_eq!(
        record.validate(),
        Err(ModelError::AmbiguousContent {
            path: "description.subject[0]".to_string()
        })
    );
}

#[test]
fn validation_reports_nested_path() {
    let record = description(json!({"title": [{"parallelValue": [
        {"value": "Kitab"},
        {"value": "Book", "groupedValue": [{"value": "x"}]}
    ]}]}));
    let error = record.validate().expect_err("ambiguous nested value");
    assert_eq!(
        error.to_string(),
        "description.title[0].parallelValue[1]: more than one of value, structuredValue, groupedValue, parallelValue is set"
    );
}

#[test]
fn blank_reference_is_rejected() {
    let record = Description {
        related_resource: vec![RelatedResource {
            value_at: Some("  ".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    };
    assert!(matches!(
        record.validate(),
        Err(ModelError::BlankReference { .. })
    ));
}

#[test]
fn related_resource_builds_nested_description() {
    let related: RelatedResource = serde_json::from_value(json!({
        "type": "has part",
        "title": [{"value": "Chapter 1"}],
        "note": [{"type": "other relation type", "value": "Excerpt"}]
    }))
    .expect("related resource");
    let nested = related.to_description(Vec::new());
    assert_eq!(nested.title.len(), 1);
    assert!(nested.note.is_empty());
    assert!(nested.related_resource.is_empty());
}

#[test]
fn serialization_omits_empty_fields() {
    let record = description(json!({"title": [{"value": "Only"}]}));
    let json = serde_json::to_value(&record).expect("serialize");
    assert_eq!(json, json!({"title": [{"value": "Only"}]}));
}
