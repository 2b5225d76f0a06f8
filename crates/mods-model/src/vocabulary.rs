//! Vocabulary shared by both directions of the crosswalk.

/// Legacy agent-style event labels and the event type each one stands for.
///
/// Older records put the agent role ("publisher") in `displayLabel` on an
/// `originInfo` with no `eventType`.
pub const LEGACY_EVENT_TYPES: [(&str, &str); 4] = [
    ("distributor", "distribution"),
    ("manufacturer", "manufacture"),
    ("producer", "production"),
    ("publisher", "publication"),
];

/// Event type for a legacy agent label, matched case-insensitively.
pub fn legacy_event_type(label: &str) -> Option<&'static str> {
    let label = label.trim();
    LEGACY_EVENT_TYPES
        .iter()
        .find(|(legacy, _)| legacy.eq_ignore_ascii_case(label))
        .map(|(_, event_type)| *event_type)
}
