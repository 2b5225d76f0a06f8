//! The recursive descriptive value.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Authority or vocabulary a value was taken from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Source {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A named standard (encoding, transliteration scheme, script).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Standard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Language and script a value is expressed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValueLanguage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_script: Option<Standard>,
}

/// A descriptive value.
///
/// At most one of `value`, `structured_value`, `grouped_value` and
/// `parallel_value` is the primary content; [`DescriptiveValue::validate`]
/// enforces this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescriptiveValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Standard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<Standard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_language: Option<ValueLanguage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub structured_value: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub grouped_value: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parallel_value: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub applies_to: Vec<DescriptiveValue>,
}

/// Tagged view of a value's primary content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
    Empty,
    Value(&'a str),
    Structured(&'a [DescriptiveValue]),
    Grouped(&'a [DescriptiveValue]),
    Parallel(&'a [DescriptiveValue]),
}

impl DescriptiveValue {
    /// A plain value.
    pub fn from_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// A plain value with a type.
    pub fn typed(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            r#type: Some(kind.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.r#type = Some(kind.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn content(&self) -> Content<'_> {
        if !self.parallel_value.is_empty() {
            Content::Parallel(&self.parallel_value)
        } else if !self.structured_value.is_empty() {
            Content::Structured(&self.structured_value)
        } else if !self.grouped_value.is_empty() {
            Content::Grouped(&self.grouped_value)
        } else if let Some(value) = self.value.as_deref() {
            Content::Value(value)
        } else {
            Content::Empty
        }
    }

    /// The type tag, if any.
    pub fn kind(&self) -> Option<&str> {
        non_blank(self.r#type.as_deref())
    }

    pub fn is_type(&self, kind: &str) -> bool {
        self.kind() == Some(kind)
    }

    pub fn has_status(&self, status: &str) -> bool {
        self.status.as_deref() == Some(status)
    }

    /// The value text when it is not blank.
    pub fn text(&self) -> Option<&str> {
        non_blank(self.value.as_deref())
    }

    pub fn uri(&self) -> Option<&str> {
        non_blank(self.uri.as_deref())
    }

    pub fn display_label(&self) -> Option<&str> {
        non_blank(self.display_label.as_deref())
    }

    pub fn code(&self) -> Option<&str> {
        non_blank(self.code.as_deref())
    }

    pub fn qualifier(&self) -> Option<&str> {
        non_blank(self.qualifier.as_deref())
    }

    pub fn value_at(&self) -> Option<&str> {
        non_blank(self.value_at.as_deref())
    }

    /// True when the value carries anything a writer could emit.
    pub fn has_content(&self) -> bool {
        self.text().is_some()
            || self.uri().is_some()
            || self.code().is_some()
            || self.structured_value.iter().any(Self::has_content)
            || self.grouped_value.iter().any(Self::has_content)
            || self.parallel_value.iter().any(Self::has_content)
    }

    /// Components of a structured or grouped value with the given type.
    pub fn components_of_type<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Self> {
        self.structured_value
            .iter()
            .chain(&self.grouped_value)
            .filter(move |component| component.is_type(kind))
    }

    pub fn validate(&self, path: &str) -> Result<()> {
        let primaries = [
            self.value.is_some(),
            !self.structured_value.is_empty(),
            !self.grouped_value.is_empty(),
            !self.parallel_value.is_empty(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count();
        if primaries > 1 {
            return Err(ModelError::AmbiguousContent {
                path: path.to_string(),
            });
        }
        if let Some(target) = self.value_at.as_deref()
            && target.trim().is_empty()
        {
            return Err(ModelError::BlankReference {
                path: path.to_string(),
            });
        }
        self.structured_value
            .validate_at(&format!("{path}.structuredValue"))?;
        self.grouped_value
            .validate_at(&format!("{path}.groupedValue"))?;
        self.parallel_value
            .validate_at(&format!("{path}.parallelValue"))?;
        self.note.validate_at(&format!("{path}.note"))?;
        self.applies_to.validate_at(&format!("{path}.appliesTo"))
    }
}

/// Structural validation over any part of a record.
pub trait Validate {
    fn validate_at(&self, path: &str) -> Result<()>;
}

impl Validate for DescriptiveValue {
    fn validate_at(&self, path: &str) -> Result<()> {
        self.validate(path)
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate_at(&self, path: &str) -> Result<()> {
        for (idx, item) in self.iter().enumerate() {
            item.validate_at(&format!("{path}[{idx}]"))?;
        }
        Ok(())
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate_at(&self, path: &str) -> Result<()> {
        match self {
            Some(inner) => inner.validate_at(path),
            None => Ok(()),
        }
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_prefers_sequences_over_value() {
        let value = DescriptiveValue {
            parallel_value: vec![DescriptiveValue::from_value("a")],
            ..Default::default()
        };
        assert!(matches!(value.content(), Content::Parallel(items) if items.len() == 1));
        assert_eq!(DescriptiveValue::default().content(), Content::Empty);
        assert_eq!(
            DescriptiveValue::from_value("x").content(),
            Content::Value("x")
        );
    }

    #[test]
    fn blank_type_is_no_type() {
        let value = DescriptiveValue::typed("  ", "x");
        assert_eq!(value.kind(), None);
        assert!(!value.is_type(""));
    }

    #[test]
    fn has_content_looks_through_components() {
        let empty_components = DescriptiveValue {
            structured_value: vec![DescriptiveValue::from_value(" ")],
            ..Default::default()
        };
        assert!(!empty_components.has_content());
        let with_uri = DescriptiveValue::default().with_uri("http://id.loc.gov/x");
        assert!(with_uri.has_content());
    }
}
