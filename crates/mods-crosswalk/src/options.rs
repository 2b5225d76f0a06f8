//! Transform configuration.

/// MODS version declared when the record does not name one.
pub const DEFAULT_MODS_VERSION: &str = "3.7";

/// Options for [`transform_with`](crate::transform_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Version used when no "record origin" note declares one.
    pub default_mods_version: String,

    /// Indent serialized output. Only affects
    /// [`transform_to_string`](crate::transform_to_string).
    pub pretty: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            default_mods_version: DEFAULT_MODS_VERSION.to_string(),
            pretty: true,
        }
    }
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_default_mods_version(mut self, version: impl Into<String>) -> Self {
        self.default_mods_version = version.into();
        self
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
