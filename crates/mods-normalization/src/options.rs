/// Title synthesized for Hydrus deposits that arrive without one.
pub const HYDRUS_LABEL: &str = "Hydrus";

/// Options for a full normalization run.
#[derive(Debug, Clone)]
pub struct NormalizationOptions {
    /// Label handed to missing-title synthesis after the pipeline.
    /// `None` skips synthesis.
    pub fallback_label: Option<String>,

    /// Run the geo-extension passes.
    /// Default: true.
    pub geo: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            fallback_label: None,
            geo: true,
        }
    }
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback_label(mut self, label: impl Into<String>) -> Self {
        self.fallback_label = Some(label.into());
        self
    }

    pub fn with_geo(mut self, enable: bool) -> Self {
        self.geo = enable;
        self
    }
}
