//! Behavior of the normalization passes on concrete documents.

use mods_common::RecordingNotifier;
use mods_normalization::{
    NormalizationError, NormalizationOptions, NormalizationPass, geo, normalize, normalize_str,
    normalize_with, origin_info, title,
};
use mods_xml::{Document, Element};

fn parse(xml: &str) -> Document {
    Document::parse(xml).expect("well-formed test document")
}

fn first_origin_info(document: &Document) -> &Element {
    document.root().child("originInfo").expect("originInfo")
}

#[test]
fn full_pipeline() {
    let document = parse(
        r#"<mods xmlns="http://www.loc.gov/mods/v3">
  <titleInfo><title>Gaudy night</title><subTitle> </subTitle></titleInfo>
  <titleInfo><title/></titleInfo>
  <originInfo displayLabel="publisher">
    <place>
      <placeTerm>Oxford</placeTerm>
      <placeTerm type="code" authority="marcountry" authorityURI="http://id.loc.gov/vocabulary/countries" valueURI="http://id.loc.gov/vocabulary/countries/enk">enk</placeTerm>
    </place>
    <publisher>Gollancz</publisher>
    <dateIssued point="start" keyDate="yes">1935.</dateIssued>
    <dateIssued point="end" keyDate="yes">1936</dateIssued>
    <edition/>
  </originInfo>
  <originInfo><dateCreated/></originInfo>
</mods>"#,
    );
    let normalized = normalize(&document);
    insta::assert_snapshot!(
        normalized.root().to_xml_fragment().expect("serialize"),
        @r#"<mods xmlns="http://www.loc.gov/mods/v3"><titleInfo><title>Gaudy night</title></titleInfo><originInfo eventType="publication"><place><placeTerm type="text" valueURI="http://id.loc.gov/vocabulary/countries/enk" authority="marccountry" authorityURI="http://id.loc.gov/vocabulary/countries">Oxford</placeTerm><placeTerm type="code" authority="marccountry" authorityURI="http://id.loc.gov/vocabulary/countries" valueURI="http://id.loc.gov/vocabulary/countries/enk">enk</placeTerm></place><publisher>Gollancz</publisher><dateIssued point="start" keyDate="yes">1935</dateIssued><dateIssued point="end">1936</dateIssued></originInfo></mods>"#
    );
    assert_eq!(normalize(&normalized), normalized);
}

#[test]
fn input_document_is_not_modified() {
    let document = parse(r#"<mods><originInfo><publisher/></originInfo></mods>"#);
    let before = document.clone();
    let normalized = origin_info::normalize(&document);
    assert_eq!(document, before);
    assert!(normalized.root().child("originInfo").is_none());
}

#[test]
fn empty_child_removal_runs_once() {
    let mut document = parse(
        r#"<mods><originInfo><dateIssued> </dateIssued><place><placeTerm valueURI="http://id.loc.gov/x"/></place><edition/></originInfo></mods>"#,
    );
    let root = document.root_mut();
    assert_eq!(NormalizationPass::RemoveEmptyOriginInfoChildren.apply(root), 2);
    assert_eq!(NormalizationPass::RemoveEmptyOriginInfoChildren.apply(root), 0);
    let children: Vec<&str> = first_origin_info(&document).elements().map(Element::name).collect();
    assert_eq!(children, ["place"]);
}

#[test]
fn origin_info_with_attributes_and_text_survives() {
    let document = parse(
        r#"<mods><originInfo eventType="publication">1999</originInfo><originInfo eventType="publication"/><originInfo>loose text</originInfo></mods>"#,
    );
    let normalized = origin_info::normalize(&document);
    let kept: Vec<String> = normalized
        .root()
        .elements_named("originInfo")
        .map(Element::text)
        .collect();
    assert_eq!(kept, ["1999"]);
}

#[test]
fn legacy_event_type_backfill() {
    let document = parse(
        r#"<mods><originInfo eventType="" displayLabel="Producer"><publisher>A</publisher></originInfo><originInfo eventType="production" displayLabel="publisher"><publisher>B</publisher></originInfo><originInfo displayLabel="Place of creation"><publisher>C</publisher></originInfo></mods>"#,
    );
    let normalized = origin_info::normalize(&document);
    let events: Vec<(Option<&str>, Option<&str>)> = normalized
        .root()
        .elements_named("originInfo")
        .map(|info| (info.attr("eventType"), info.attr("displayLabel")))
        .collect();
    assert_eq!(
        events,
        [
            (Some("production"), None),
            (Some("production"), Some("publisher")),
            (None, Some("Place of creation")),
        ]
    );
}

#[test]
fn authority_copied_from_text_to_code() {
    let document = parse(
        r#"<mods><originInfo><place><placeTerm type="text" authority="naf" authorityURI="http://id.loc.gov/authorities/names/" valueURI="http://id.loc.gov/authorities/names/n79021164">Oxford</placeTerm><placeTerm type="code">enk</placeTerm></place></originInfo></mods>"#,
    );
    let normalized = origin_info::normalize(&document);
    let code = normalized
        .root()
        .descendants_named("placeTerm")
        .into_iter()
        .find(|term| term.attr("type") == Some("code"))
        .expect("code term");
    assert_eq!(code.attr("authority"), Some("naf"));
    assert_eq!(
        code.attr("valueURI"),
        Some("http://id.loc.gov/authorities/names/n79021164")
    );
}

#[test]
fn key_date_kept_on_start_only() {
    let document = parse(
        r#"<mods><originInfo><dateCreated point="start" keyDate="yes">1900</dateCreated><dateCreated point="end" keyDate="yes">1910</dateCreated><dateIssued keyDate="yes">1911</dateIssued></originInfo></mods>"#,
    );
    let normalized = origin_info::normalize(&document);
    let info = first_origin_info(&normalized);
    let created: Vec<Option<&str>> = info
        .elements_named("dateCreated")
        .map(|date| date.attr("keyDate"))
        .collect();
    assert_eq!(created, [Some("yes"), None]);
    assert_eq!(
        info.child("dateIssued").and_then(|date| date.attr("keyDate")),
        Some("yes")
    );
}

#[test]
fn key_date_pair_ignores_unpointed_dates() {
    let document = parse(
        r#"<mods><originInfo><dateIssued point="start" keyDate="yes">1900</dateIssued><dateIssued point="end" keyDate="yes">1910</dateIssued><dateIssued>1900-1910</dateIssued></originInfo></mods>"#,
    );
    let normalized = origin_info::normalize(&document);
    let key_dates: Vec<Option<&str>> = first_origin_info(&normalized)
        .elements_named("dateIssued")
        .map(|date| date.attr("keyDate"))
        .collect();
    assert_eq!(key_dates, [Some("yes"), None, None]);
}

#[test]
fn authority_spelling_fixed_outside_origin_info() {
    let document = parse(
        r#"<mods><subject><geographicCode authority="marcountry">enk</geographicCode></subject></mods>"#,
    );
    let normalized = normalize(&document);
    let code = normalized.root().descendants_named("geographicCode");
    assert_eq!(code[0].attr("authority"), Some("marccountry"));
}

#[test]
fn blank_title_parts_removed() {
    let document = parse(
        r#"<mods><titleInfo><nonSort>The </nonSort><title>Nine tailors</title><partName/></titleInfo><titleInfo type="alternative"><title> </title></titleInfo><titleInfo xlink:href="http://example.com/title"/></mods>"#,
    );
    let normalized = title::normalize(&document);
    let title_infos: Vec<&Element> = normalized.root().elements_named("titleInfo").collect();
    assert_eq!(title_infos.len(), 2);
    let parts: Vec<&str> = title_infos[0].elements().map(Element::name).collect();
    assert_eq!(parts, ["nonSort", "title"]);
    assert!(title_infos[1].has_attr("xlink:href"));
}

#[test]
fn geo_extension_cleanup() {
    let document = parse(
        r#"<mods><extension displayLabel="geo"><rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:gml="http://www.opengis.net/gml/3.2/"><rdf:Description rdf:about="https://purl.stanford.edu/bc123df4567"><dc:format>image/jpeg;
      format=Shapefile</dc:format><dc:type> Dataset#Polygon </dc:type><dc:coverage rdf:resource=" " dc:language="eng" dc:title="Oxford"/><dc:coverage rdf:resource=""/><dc:title/><gml:boundedBy gml:id="bbox"><gml:Envelope/></gml:boundedBy></rdf:Description></rdf:RDF></extension></mods>"#,
    );
    let normalized = geo::normalize(&document);
    let description = normalized.root().descendants_named("Description");
    let description = description.first().expect("rdf:Description");
    let tags: Vec<&str> = description.elements().map(Element::name).collect();
    assert_eq!(tags, ["dc:format", "dc:type", "dc:coverage", "gml:boundedBy"]);
    assert_eq!(
        description.child("format").map(Element::text).as_deref(),
        Some("image/jpeg; format=Shapefile")
    );
    assert_eq!(
        description.child("type").map(Element::text).as_deref(),
        Some("Dataset#Polygon")
    );
    let coverage = description.child("coverage").expect("coverage");
    assert!(!coverage.has_attr("rdf:resource"));
    assert_eq!(coverage.attr("dc:title"), Some("Oxford"));
    let bounded_by = description.child("boundedBy").expect("boundedBy");
    assert!(!bounded_by.has_attr("gml:id"));
}

#[test]
fn geo_passes_can_be_disabled() {
    let document = parse(
        r#"<mods xmlns:dc="http://purl.org/dc/elements/1.1/"><extension displayLabel="geo"><dc:title/></extension></mods>"#,
    );
    let notifier = RecordingNotifier::new();
    let untouched = normalize_with(&document, &NormalizationOptions::new().with_geo(false), &notifier);
    assert_eq!(untouched, document);
    let cleaned = normalize_with(&document, &NormalizationOptions::new(), &notifier);
    let extension = cleaned.root().child("extension").expect("extension");
    assert!(!extension.has_element_children());
}

#[test]
fn fallback_label_runs_after_the_pipeline() {
    let document = parse(r#"<mods><titleInfo><title> </title></titleInfo></mods>"#);
    let notifier = RecordingNotifier::new();
    let normalized = normalize_with(
        &document,
        &NormalizationOptions::new().with_fallback_label("Hydrus"),
        &notifier,
    );
    let titles: Vec<String> = normalized
        .root()
        .descendants_named("title")
        .into_iter()
        .map(Element::text)
        .collect();
    assert_eq!(titles, ["Hydrus"]);
    assert!(notifier.is_empty());
}

#[test]
fn normalize_str_rejects_other_roots() {
    let error = normalize_str(
        "<record/>",
        &NormalizationOptions::default(),
        &RecordingNotifier::new(),
    )
    .expect_err("not MODS");
    assert!(matches!(error, NormalizationError::UnexpectedRoot { name } if name == "record"));
}

#[test]
fn normalize_str_round_trip() {
    let xml = normalize_str(
        r#"<mods:mods xmlns:mods="http://www.loc.gov/mods/v3"><mods:originInfo><mods:dateIssued>1935.</mods:dateIssued></mods:originInfo></mods:mods>"#,
        &NormalizationOptions::default(),
        &RecordingNotifier::new(),
    )
    .expect("normalize");
    assert!(xml.contains("<mods:dateIssued>1935</mods:dateIssued>"));
}
