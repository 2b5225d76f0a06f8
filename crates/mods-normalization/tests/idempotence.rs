//! Property tests: every pass and every pipeline is idempotent.

use mods_normalization::{NormalizationPass, geo, normalize, origin_info, title};
use mods_xml::{Document, Element};
use proptest::prelude::*;

const DATE_TAGS: [&str; 4] = ["dateIssued", "dateCreated", "copyrightDate", "dateOther"];
const INFO_TAGS: [&str; 3] = ["publisher", "edition", "issuance"];
const TITLE_TAGS: [&str; 4] = ["title", "subTitle", "nonSort", "partName"];
const DC_TAGS: [&str; 4] = ["dc:format", "dc:type", "dc:coverage", "dc:title"];

const ALL_PASSES: [NormalizationPass; 14] = [
    NormalizationPass::RemoveEmptyOriginInfoChildren,
    NormalizationPass::RemoveEmptyOriginInfo,
    NormalizationPass::BackfillLegacyEventType,
    NormalizationPass::InferPlaceTermType,
    NormalizationPass::PropagatePlaceAuthority,
    NormalizationPass::FixAuthorityCodeSpelling,
    NormalizationPass::SingleKeyDate,
    NormalizationPass::StripDateTrailingPeriod,
    NormalizationPass::RemoveBlankTitleParts,
    NormalizationPass::RemoveEmptyTitleInfo,
    NormalizationPass::DropBlankRdfResource,
    NormalizationPass::DropGmlId,
    NormalizationPass::CollapseGeoWhitespace,
    NormalizationPass::RemoveEmptyDcElements,
];

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(""),
        Just("  "),
        Just("1935."),
        Just("1935 . ."),
        Just("ca. 1850"),
        Just("Oxford"),
        Just("image/jpeg;\n  format=Shapefile "),
    ]
    .prop_map(str::to_string)
}

fn attributes_strategy() -> impl Strategy<Value = Vec<(&'static str, &'static str)>> {
    let key = prop_oneof![
        Just("type"),
        Just("point"),
        Just("keyDate"),
        Just("authority"),
        Just("valueURI"),
        Just("xlink:href"),
        Just("displayLabel"),
        Just("eventType"),
        Just("gml:id"),
        Just("rdf:resource"),
    ];
    let value = prop_oneof![
        Just(""),
        Just("text"),
        Just("code"),
        Just("start"),
        Just("end"),
        Just("yes"),
        Just("marcountry"),
        Just("publisher"),
        Just("http://example.com/1"),
    ];
    prop::collection::vec((key, value), 0..3)
}

fn leaf_strategy(tags: &'static [&'static str]) -> impl Strategy<Value = Element> {
    (prop::sample::select(tags), text_strategy(), attributes_strategy()).prop_map(
        |(tag, text, attributes)| {
            let mut element = Element::new(tag);
            for (key, value) in attributes {
                element.set_attr(key, value);
            }
            if !text.is_empty() {
                element.push_text(text);
            }
            element
        },
    )
}

fn container(name: &'static str, attributes: Vec<(&str, &str)>, children: Vec<Element>) -> Element {
    let mut element = Element::new(name);
    for (key, value) in attributes {
        element.set_attr(key, value);
    }
    for child in children {
        element.push(child);
    }
    element
}

fn place_strategy() -> impl Strategy<Value = Element> {
    prop::collection::vec(leaf_strategy(&["placeTerm"]), 0..3)
        .prop_map(|terms| container("place", Vec::new(), terms))
}

fn origin_info_strategy() -> impl Strategy<Value = Element> {
    let child = prop_oneof![
        leaf_strategy(&DATE_TAGS),
        leaf_strategy(&INFO_TAGS),
        place_strategy(),
    ];
    (attributes_strategy(), prop::collection::vec(child, 0..5))
        .prop_map(|(attributes, children)| container("originInfo", attributes, children))
}

fn title_info_strategy() -> impl Strategy<Value = Element> {
    (
        attributes_strategy(),
        prop::collection::vec(leaf_strategy(&TITLE_TAGS), 0..3),
    )
        .prop_map(|(attributes, parts)| container("titleInfo", attributes, parts))
}

fn geo_strategy() -> impl Strategy<Value = Element> {
    prop::collection::vec(leaf_strategy(&DC_TAGS), 0..4).prop_map(|children| {
        let description = container("rdf:Description", Vec::new(), children);
        let rdf = container("rdf:RDF", Vec::new(), vec![description]);
        container("extension", vec![("displayLabel", "geo")], vec![rdf])
    })
}

fn document_strategy() -> impl Strategy<Value = Document> {
    let section = prop_oneof![origin_info_strategy(), title_info_strategy(), geo_strategy()];
    prop::collection::vec(section, 0..6)
        .prop_map(|sections| Document::new(container("mods", Vec::new(), sections)))
}

proptest! {
    #[test]
    fn every_pass_is_idempotent(document in document_strategy()) {
        for pass in ALL_PASSES {
            let mut once = document.clone();
            pass.apply(once.root_mut());
            let mut twice = once.clone();
            let changes = pass.apply(twice.root_mut());
            prop_assert_eq!(changes, 0, "{} changed its own output", pass.name());
            prop_assert_eq!(&twice, &once);
        }
    }

    #[test]
    fn category_pipelines_are_idempotent(document in document_strategy()) {
        for run in [origin_info::normalize, title::normalize, geo::normalize] {
            let once = run(&document);
            prop_assert_eq!(run(&once), once);
        }
    }

    #[test]
    fn full_pipeline_is_idempotent(document in document_strategy()) {
        let once = normalize(&document);
        prop_assert_eq!(normalize(&once), once);
    }
}
