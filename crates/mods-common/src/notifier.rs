//! Diagnostic sink for soft anomalies.
//!
//! Writers and normalizers never halt because a diagnostic was raised. The
//! sink is observational: callers decide what to do with what it collected.

use std::sync::Mutex;

use serde::Serialize;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warn,
    Error,
}

/// Receives soft anomalies raised while mapping or normalizing.
///
/// `context` is a list of key/value pairs identifying the offending input,
/// e.g. `[("type", "Really bogus")]`.
pub trait Notifier {
    fn warn(&self, message: &str, context: &[(&str, &str)]);

    fn error(&self, message: &str, context: &[(&str, &str)]);
}

/// Notifier that forwards every diagnostic to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn warn(&self, message: &str, context: &[(&str, &str)]) {
        tracing::warn!(context = %format_context(context), "{message}");
    }

    fn error(&self, message: &str, context: &[(&str, &str)]) {
        tracing::error!(context = %format_context(context), "{message}");
    }
}

fn format_context(context: &[(&str, &str)]) -> String {
    context
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A single recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub context: Vec<(String, String)>,
}

impl Diagnostic {
    /// Look up a context value by key.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Notifier that keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, in call order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn warnings(&self) -> Vec<Diagnostic> {
        self.by_severity(Severity::Warn)
    }

    pub fn errors(&self) -> Vec<Diagnostic> {
        self.by_severity(Severity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .lock()
            .map(|entries| entries.is_empty())
            .unwrap_or(true)
    }

    fn by_severity(&self, severity: Severity) -> Vec<Diagnostic> {
        self.diagnostics()
            .into_iter()
            .filter(|diagnostic| diagnostic.severity == severity)
            .collect()
    }

    fn record(&self, severity: Severity, message: &str, context: &[(&str, &str)]) {
        let diagnostic = Diagnostic {
            severity,
            message: message.to_string(),
            context: context
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                .collect(),
        };
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(diagnostic);
        }
    }
}

impl Notifier for RecordingNotifier {
    fn warn(&self, message: &str, context: &[(&str, &str)]) {
        tracing::debug!(message, "recorded warning");
        self.record(Severity::Warn, message, context);
    }

    fn error(&self, message: &str, context: &[(&str, &str)]) {
        tracing::debug!(message, "recorded error");
        self.record(Severity::Error, message, context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_notifier_keeps_call_order() {
        let notifier = RecordingNotifier::new();
        notifier.warn("first", &[("type", "bogus")]);
        notifier.error("second", &[]);

        let diagnostics = notifier.diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].severity, Severity::Warn);
        assert_eq!(diagnostics[0].context_value("type"), Some("bogus"));
        assert_eq!(diagnostics[1].message, "second");
        assert_eq!(notifier.warnings().len(), 1);
        assert_eq!(notifier.errors().len(), 1);
    }

    #[test]
    fn context_formats_as_pairs() {
        assert_eq!(format_context(&[("a", "1"), ("b", "2")]), "a=1, b=2");
        assert_eq!(format_context(&[]), "");
    }
}
