//! Orchestrates the field writers over one descriptive record.

use mods_model::Description;
use mods_xml::Element;

use crate::context::WriterContext;
use crate::error::Result;
use crate::writers::{
    access, admin_metadata, contributor, event, form, geographic, identifier, language, note,
    related_resource, subject, title,
};

/// A top-level field of a descriptive record, in writing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Contributor,
    Form,
    Language,
    Note,
    Subject,
    Event,
    Identifier,
    Access,
    AdminMetadata,
    RelatedResource,
    Geographic,
}

impl Field {
    /// Writing order. Titles come before contributors so names can pick up
    /// their `nameTitleGroup`.
    pub const ORDER: [Field; 12] = [
        Field::Title,
        Field::Contributor,
        Field::Form,
        Field::Language,
        Field::Note,
        Field::Subject,
        Field::Event,
        Field::Identifier,
        Field::Access,
        Field::AdminMetadata,
        Field::RelatedResource,
        Field::Geographic,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Contributor => "contributor",
            Field::Form => "form",
            Field::Language => "language",
            Field::Note => "note",
            Field::Subject => "subject",
            Field::Event => "event",
            Field::Identifier => "identifier",
            Field::Access => "access",
            Field::AdminMetadata => "adminMetadata",
            Field::RelatedResource => "relatedResource",
            Field::Geographic => "geographic",
        }
    }
}

/// Append the MODS elements for `description` to `parent`.
///
/// Elements are appended field by field in [`Field::ORDER`]; nothing already
/// in `parent` is touched.
pub fn write_description(
    parent: &mut Element,
    description: &Description,
    ctx: &mut WriterContext<'_>,
) -> Result<()> {
    for field in Field::ORDER {
        let before = parent.children().len();
        write_field(field, parent, description, ctx)?;
        tracing::trace!(
            field = field.name(),
            written = parent.children().len() - before,
            "wrote field"
        );
    }
    Ok(())
}

fn write_field(
    field: Field,
    parent: &mut Element,
    description: &Description,
    ctx: &mut WriterContext<'_>,
) -> Result<()> {
    match field {
        Field::Title => title::write(parent, &description.title, ctx),
        Field::Contributor => contributor::write(parent, &description.contributor, ctx),
        Field::Form => form::write(parent, &description.form, ctx),
        Field::Language => language::write(parent, &description.language, ctx),
        Field::Note => note::write(parent, &description.note, ctx),
        Field::Subject => subject::write(parent, &description.subject, ctx),
        Field::Event => event::write(parent, &description.event, ctx),
        Field::Identifier => identifier::write(parent, &description.identifier, ctx),
        Field::Access => access::write(
            parent,
            description.access.as_ref(),
            description.purl(),
            ctx,
        ),
        Field::AdminMetadata => {
            admin_metadata::write(parent, description.admin_metadata.as_ref(), ctx)
        }
        Field::RelatedResource => {
            related_resource::write(parent, &description.related_resource, ctx)
        }
        Field::Geographic => {
            geographic::write(parent, &description.geographic, description.purl(), ctx)
        }
    }
}
