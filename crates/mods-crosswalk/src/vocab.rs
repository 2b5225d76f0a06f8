//! Fixed vocabulary tables.
//!
//! These tables determine output and are part of the crosswalk's external
//! contract. Lookups on descriptive-model terms are case-insensitive.

use std::collections::HashMap;
use std::sync::LazyLock;

pub use mods_model::vocabulary::{LEGACY_EVENT_TYPES, legacy_event_type};

/// Relation type → `relatedItem/@type`.
///
/// "related to" is known but deliberately has no MODS type.
pub const RELATION_TYPES: [(&str, Option<&str>); 12] = [
    ("has original version", Some("original")),
    ("has other format", Some("otherFormat")),
    ("has part", Some("constituent")),
    ("has version", Some("otherVersion")),
    ("in series", Some("series")),
    ("part of", Some("host")),
    ("preceded by", Some("preceding")),
    ("referenced by", Some("isReferencedBy")),
    ("references", Some("references")),
    ("related to", None),
    ("reviewed by", Some("reviewOf")),
    ("succeeded by", Some("succeeding")),
];

/// Part "detail type" → `detail/@type`.
pub const DETAIL_TYPES: [(&str, &str); 8] = [
    ("part", "part"),
    ("volume", "volume"),
    ("issue", "issue"),
    ("chapter", "chapter"),
    ("section", "section"),
    ("paragraph", "paragraph"),
    ("track", "track"),
    ("marker", "marker"),
];

/// Structured title component type → `titleInfo` child, in schema order.
pub const TITLE_PARTS: [(&str, &str); 5] = [
    ("nonsorting characters", "nonSort"),
    ("main title", "title"),
    ("subtitle", "subTitle"),
    ("part number", "partNumber"),
    ("part name", "partName"),
];

/// Title types written through unchanged as `titleInfo/@type`.
pub const TITLE_TYPES: [&str; 4] = ["abbreviated", "alternative", "translated", "uniform"];

/// Contributor type → `name/@type`.
pub const NAME_TYPES: [(&str, &str); 4] = [
    ("person", "personal"),
    ("organization", "corporate"),
    ("family", "family"),
    ("conference", "conference"),
];

/// Structured name component type → `namePart/@type`. `None` means an
/// untyped `namePart`.
pub const NAME_PART_TYPES: [(&str, Option<&str>); 6] = [
    ("name", None),
    ("forename", Some("given")),
    ("surname", Some("family")),
    ("term of address", Some("termsOfAddress")),
    ("life dates", Some("date")),
    ("activity dates", Some("date")),
];

/// Event type → `originInfo/@eventType`.
pub const EVENT_TYPES: [(&str, &str); 11] = [
    ("capture", "capture"),
    ("copyright notice", "copyright"),
    ("creation", "creation"),
    ("degree conferral", "degree conferral"),
    ("distribution", "distribution"),
    ("manufacture", "manufacture"),
    ("modification", "modification"),
    ("presentation", "presentation"),
    ("production", "production"),
    ("publication", "publication"),
    ("validity", "validity"),
];

/// Event (or date) type → `originInfo` date element. Anything else is
/// written as `dateOther`.
pub const DATE_ELEMENTS: [(&str, &str); 6] = [
    ("creation", "dateCreated"),
    ("publication", "dateIssued"),
    ("copyright notice", "copyrightDate"),
    ("capture", "dateCaptured"),
    ("validity", "dateValid"),
    ("modification", "dateModified"),
];

/// Date qualifiers → `@qualifier`.
pub const DATE_QUALIFIERS: [(&str, &str); 3] = [
    ("approximate", "approximate"),
    ("inferred", "inferred"),
    ("questionable", "questionable"),
];

/// Simple subject type → child element of `subject`.
pub const SUBJECT_ELEMENTS: [(&str, &str); 5] = [
    ("topic", "topic"),
    ("place", "geographic"),
    ("time", "temporal"),
    ("genre", "genre"),
    ("occupation", "occupation"),
];

/// Access note type → `accessCondition/@type`.
pub const ACCESS_CONDITION_TYPES: [(&str, &str); 3] = [
    ("access restriction", "restriction on access"),
    ("license", "license"),
    ("use and reproduction", "use and reproduction"),
];

/// Note types that map to `abstract`, with the abstract's own type.
pub const ABSTRACT_TYPES: [(&str, Option<&str>); 3] = [
    ("abstract", None),
    ("scope and content", Some("scope and content")),
    ("summary", Some("summary")),
];

/// Note types written through as `note/@type`.
pub const NOTE_TYPES: [&str; 22] = [
    "acquisition",
    "action",
    "additional physical form",
    "bibliography",
    "biographical/historical",
    "citation/reference",
    "contact",
    "creation/production credits",
    "date/sequential designation",
    "funding",
    "language",
    "numbering",
    "original location",
    "ownership",
    "performers",
    "preferred citation",
    "publications",
    "reproduction",
    "source characteristics",
    "statement of responsibility",
    "thesis",
    "version identification",
];

/// Identifier type → `identifier/@type`. Keys are lower case.
static IDENTIFIER_TYPES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Persistent identifiers
    map.insert("ark", "ark");
    map.insert("doi", "doi");
    map.insert("handle", "hdl");
    map.insert("uri", "uri");
    map.insert("urn", "urn");
    map.insert("purl", "purl");

    // Bibliographic numbers
    map.insert("isbn", "isbn");
    map.insert("issn", "issn");
    map.insert("issn-l", "issn-l");
    map.insert("ismn", "ismn");
    map.insert("isrc", "isrc");
    map.insert("istc", "istc");
    map.insert("lccn", "lccn");
    map.insert("oclc", "oclc");
    map.insert("sici", "sici");
    map.insert("upc", "upc");
    map.insert("ean", "ean");
    map.insert("stock number", "stock number");

    // Music and recordings
    map.insert("music plate", "music plate");
    map.insert("music publisher", "music publisher");
    map.insert("issue number", "issue number");
    map.insert("matrix number", "matrix number");
    map.insert("videorecording identifier", "videorecording identifier");

    // Agents
    map.insert("orcid", "orcid");
    map.insert("isni", "isni");
    map.insert("viaf", "viaf");
    map.insert("wikidata", "wikidata");

    map.insert("local", "local");
    map
});

/// MODS spellings the identifier table produces, for pass-through.
static IDENTIFIER_LEGACY_TYPES: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    IDENTIFIER_TYPES
        .values()
        .map(|legacy| (legacy.to_lowercase(), *legacy))
        .collect()
});

/// Related-item type for a relation.
///
/// The outer `None` means the relation is unknown; `Some(None)` means it is
/// known and intentionally has no type attribute.
pub fn related_item_type(relation: &str) -> Option<Option<&'static str>> {
    lookup(&RELATION_TYPES, relation)
}

pub fn detail_type(value: &str) -> Option<&'static str> {
    lookup(&DETAIL_TYPES, value)
}

pub fn name_type(kind: &str) -> Option<&'static str> {
    lookup(&NAME_TYPES, kind)
}

pub fn name_part_type(kind: &str) -> Option<Option<&'static str>> {
    lookup(&NAME_PART_TYPES, kind)
}

pub fn event_type(kind: &str) -> Option<&'static str> {
    lookup(&EVENT_TYPES, kind)
}

pub fn date_element(kind: &str) -> Option<&'static str> {
    lookup(&DATE_ELEMENTS, kind)
}

pub fn date_qualifier(qualifier: &str) -> Option<&'static str> {
    lookup(&DATE_QUALIFIERS, qualifier)
}

pub fn subject_element(kind: &str) -> Option<&'static str> {
    lookup(&SUBJECT_ELEMENTS, kind)
}

pub fn access_condition_type(kind: &str) -> Option<&'static str> {
    lookup(&ACCESS_CONDITION_TYPES, kind)
}

pub fn abstract_type(kind: &str) -> Option<Option<&'static str>> {
    lookup(&ABSTRACT_TYPES, kind)
}

pub fn note_type(kind: &str) -> Option<&'static str> {
    NOTE_TYPES
        .iter()
        .find(|known| known.eq_ignore_ascii_case(kind.trim()))
        .copied()
}

pub fn title_type(kind: &str) -> Option<&'static str> {
    TITLE_TYPES
        .iter()
        .find(|known| known.eq_ignore_ascii_case(kind.trim()))
        .copied()
}

/// Identifier type, accepting either a model term or an existing MODS
/// spelling.
pub fn identifier_type(kind: &str) -> Option<&'static str> {
    let key = kind.trim().to_lowercase();
    IDENTIFIER_TYPES
        .get(key.as_str())
        .or_else(|| IDENTIFIER_LEGACY_TYPES.get(&key))
        .copied()
}

fn lookup<V: Copy>(table: &[(&str, V)], key: &str) -> Option<V> {
    let key = key.trim();
    table
        .iter()
        .find(|(term, _)| term.eq_ignore_ascii_case(key))
        .map(|(_, mapped)| *mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn related_to_is_known_without_a_type() {
        assert_eq!(related_item_type("related to"), Some(None));
        assert_eq!(related_item_type("part of"), Some(Some("host")));
        assert_eq!(related_item_type("Really bogus"), None);
    }

    #[test]
    fn identifier_types_accept_both_spellings() {
        assert_eq!(identifier_type("Handle"), Some("hdl"));
        assert_eq!(identifier_type("hdl"), Some("hdl"));
        assert_eq!(identifier_type("ISBN"), Some("isbn"));
        assert_eq!(identifier_type("shelfmark"), None);
    }

    #[test]
    fn detail_table_is_identity() {
        for (term, mapped) in DETAIL_TYPES {
            assert_eq!(term, mapped);
        }
        assert_eq!(detail_type("Volume"), Some("volume"));
        assert_eq!(detail_type("page"), None);
    }

    #[test]
    fn legacy_event_labels_are_shared() {
        assert_eq!(legacy_event_type("publisher"), Some("publication"));
        assert_eq!(LEGACY_EVENT_TYPES.len(), 4);
    }
}
