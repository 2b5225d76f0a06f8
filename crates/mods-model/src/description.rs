//! Descriptive record and its composite fields.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::value::{DescriptiveValue, Source, Validate, non_blank};

/// An agent responsible for the resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contributor {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub role: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_at: Option<String>,
}

impl Contributor {
    pub fn kind(&self) -> Option<&str> {
        non_blank(self.r#type.as_deref())
    }

    pub fn is_primary(&self) -> bool {
        self.status.as_deref() == Some("primary")
    }

    /// True when the contributor has a role with the given value or code.
    pub fn has_role(&self, role: &str) -> bool {
        self.role.iter().any(|value| {
            value
                .text()
                .is_some_and(|text| text.eq_ignore_ascii_case(role))
                || value.code() == Some(role)
        })
    }
}

/// Something that happened to the resource (creation, publication, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub date: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contributor: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parallel_event: Vec<Event>,
}

impl Event {
    pub fn kind(&self) -> Option<&str> {
        non_blank(self.r#type.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        !self.date.iter().any(DescriptiveValue::has_content)
            && self.contributor.is_empty()
            && !self.location.iter().any(DescriptiveValue::has_content)
            && !self.note.iter().any(DescriptiveValue::has_content)
            && self.parallel_event.iter().all(Event::is_empty)
    }
}

/// Language of the resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<DescriptiveValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_at: Option<String>,
}

/// Location and access conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Access {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub url: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub physical_location: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub digital_location: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub access_contact: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub digital_repository: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<DescriptiveValue>,
}

impl Access {
    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
            && self.physical_location.is_empty()
            && self.digital_location.is_empty()
            && self.access_contact.is_empty()
            && self.digital_repository.is_empty()
            && self.note.is_empty()
    }
}

/// Metadata about the metadata record itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminMetadata {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contributor: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<Event>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub language: Vec<Language>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata_standard: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<DescriptiveValue>,
}

impl AdminMetadata {
    pub fn is_empty(&self) -> bool {
        self.contributor.is_empty()
            && self.event.is_empty()
            && self.language.is_empty()
            && self.note.is_empty()
            && self.metadata_standard.is_empty()
            && self.identifier.is_empty()
    }
}

/// Geospatial description of the resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Geographic {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub form: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subject: Vec<DescriptiveValue>,
}

/// Another resource related to the described one.
///
/// Either inline content (the descriptive fields) or, when `value_at` is
/// set, a pure reference to an external description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelatedResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_at: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub title: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contributor: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<Event>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub form: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub language: Vec<Language>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subject: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<Access>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_metadata: Option<AdminMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
}

impl RelatedResource {
    pub fn kind(&self) -> Option<&str> {
        non_blank(self.r#type.as_deref())
    }

    /// The external reference target, when this entry is a link.
    pub fn reference(&self) -> Option<&str> {
        non_blank(self.value_at.as_deref())
    }

    /// The nested record described inline by this entry, with `note`
    /// replaced by the given notes.
    pub fn to_description(&self, note: Vec<DescriptiveValue>) -> Description {
        Description {
            title: self.title.clone(),
            contributor: self.contributor.clone(),
            event: self.event.clone(),
            form: self.form.clone(),
            language: self.language.clone(),
            note,
            identifier: self.identifier.clone(),
            subject: self.subject.clone(),
            access: self.access.clone(),
            admin_metadata: self.admin_metadata.clone(),
            purl: self.purl.clone(),
            related_resource: Vec::new(),
            geographic: Vec::new(),
        }
    }
}

/// A complete descriptive record for one repository object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Description {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub title: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contributor: Vec<Contributor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub form: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub language: Vec<Language>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subject: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<Event>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<DescriptiveValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<Access>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_metadata: Option<AdminMetadata>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_resource: Vec<RelatedResource>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub geographic: Vec<Geographic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
}

impl Description {
    /// Check the structural invariants of every value in the record.
    pub fn validate(&self) -> Result<()> {
        self.validate_at("description")
    }

    pub fn purl(&self) -> Option<&str> {
        non_blank(self.purl.as_deref())
    }
}

impl Validate for Contributor {
    fn validate_at(&self, path: &str) -> Result<()> {
        self.name.validate_at(&format!("{path}.name"))?;
        self.role.validate_at(&format!("{path}.role"))?;
        self.identifier.validate_at(&format!("{path}.identifier"))?;
        self.note.validate_at(&format!("{path}.note"))
    }
}

impl Validate for Event {
    fn validate_at(&self, path: &str) -> Result<()> {
        self.date.validate_at(&format!("{path}.date"))?;
        self.contributor.validate_at(&format!("{path}.contributor"))?;
        self.location.validate_at(&format!("{path}.location"))?;
        self.note.validate_at(&format!("{path}.note"))?;
        self.parallel_event
            .validate_at(&format!("{path}.parallelEvent"))
    }
}

impl Validate for Language {
    fn validate_at(&self, path: &str) -> Result<()> {
        self.script.validate_at(&format!("{path}.script"))
    }
}

impl Validate for Access {
    fn validate_at(&self, path: &str) -> Result<()> {
        self.url.validate_at(&format!("{path}.url"))?;
        self.physical_location
            .validate_at(&format!("{path}.physicalLocation"))?;
        self.digital_location
            .validate_at(&format!("{path}.digitalLocation"))?;
        self.access_contact
            .validate_at(&format!("{path}.accessContact"))?;
        self.digital_repository
            .validate_at(&format!("{path}.digitalRepository"))?;
        self.note.validate_at(&format!("{path}.note"))
    }
}

impl Validate for AdminMetadata {
    fn validate_at(&self, path: &str) -> Result<()> {
        self.contributor.validate_at(&format!("{path}.contributor"))?;
        self.event.validate_at(&format!("{path}.event"))?;
        self.language.validate_at(&format!("{path}.language"))?;
        self.note.validate_at(&format!("{path}.note"))?;
        self.metadata_standard
            .validate_at(&format!("{path}.metadataStandard"))?;
        self.identifier.validate_at(&format!("{path}.identifier"))
    }
}

impl Validate for Geographic {
    fn validate_at(&self, path: &str) -> Result<()> {
        self.form.validate_at(&format!("{path}.form"))?;
        self.subject.validate_at(&format!("{path}.subject"))
    }
}

impl Validate for RelatedResource {
    fn validate_at(&self, path: &str) -> Result<()> {
        if let Some(target) = self.value_at.as_deref()
            && target.trim().is_empty()
        {
            return Err(crate::ModelError::BlankReference {
                path: path.to_string(),
            });
        }
        self.to_description(self.note.clone()).validate_at(path)
    }
}

impl Validate for Description {
    fn validate_at(&self, path: &str) -> Result<()> {
        self.title.validate_at(&format!("{path}.title"))?;
        self.contributor.validate_at(&format!("{path}.contributor"))?;
        self.form.validate_at(&format!("{path}.form"))?;
        self.language.validate_at(&format!("{path}.language"))?;
        self.note.validate_at(&format!("{path}.note"))?;
        self.subject.validate_at(&format!("{path}.subject"))?;
        self.event.validate_at(&format!("{path}.event"))?;
        self.identifier.validate_at(&format!("{path}.identifier"))?;
        self.access.validate_at(&format!("{path}.access"))?;
        self.admin_metadata
            .validate_at(&format!("{path}.adminMetadata"))?;
        self.related_resource
            .validate_at(&format!("{path}.relatedResource"))?;
        self.geographic.validate_at(&format!("{path}.geographic"))
    }
}
