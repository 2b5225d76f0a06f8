//! Pass and pipeline types.

use mods_xml::Element;

use crate::options::NormalizationOptions;
use crate::{geo, origin_info, title};

/// Which part of a MODS document a pass rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassCategory {
    OriginInfo,
    Title,
    Geo,
}

/// A single rewrite pass.
///
/// Every pass is idempotent: applying it to its own output changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NormalizationPass {
    /// Drop `originInfo` children with no text and no `valueURI` or
    /// `xlink:href` anywhere inside them.
    RemoveEmptyOriginInfoChildren,

    /// Drop `originInfo` elements left without element children.
    RemoveEmptyOriginInfo,

    /// Promote a legacy `displayLabel` ("publisher", ...) to `eventType`
    /// when `eventType` is blank.
    BackfillLegacyEventType,

    /// Type untyped `placeTerm`s with text as `type="text"`.
    /// Must run before [`NormalizationPass::PropagatePlaceAuthority`].
    InferPlaceTermType,

    /// Copy authority attributes between the text and code `placeTerm` of
    /// one `place`.
    PropagatePlaceAuthority,

    /// `marcountry` → `marccountry` on any `authority` attribute.
    FixAuthorityCodeSpelling,

    /// Keep `keyDate` on the start of a start/end pair only.
    SingleKeyDate,

    /// Strip trailing periods from date text.
    StripDateTrailingPeriod,

    /// Drop blank `title`, `subTitle`, `nonSort`, `partNumber` and
    /// `partName`.
    RemoveBlankTitleParts,

    /// Drop `titleInfo` left with no parts and no `xlink:href`.
    RemoveEmptyTitleInfo,

    /// Drop blank `rdf:resource` attributes in the geo extension.
    DropBlankRdfResource,

    /// Drop `gml:id` attributes in the geo extension.
    DropGmlId,

    /// Collapse runs of whitespace in `dc:format` and `dc:type`.
    CollapseGeoWhitespace,

    /// Drop `dc:*` elements with no text and no attributes.
    RemoveEmptyDcElements,
}

impl NormalizationPass {
    /// Origin-info passes in dependency order.
    pub const ORIGIN_INFO: [Self; 8] = [
        Self::RemoveEmptyOriginInfoChildren,
        Self::RemoveEmptyOriginInfo,
        Self::BackfillLegacyEventType,
        Self::InferPlaceTermType,
        Self::PropagatePlaceAuthority,
        Self::FixAuthorityCodeSpelling,
        Self::SingleKeyDate,
        Self::StripDateTrailingPeriod,
    ];

    pub const TITLE: [Self; 2] = [Self::RemoveBlankTitleParts, Self::RemoveEmptyTitleInfo];

    pub const GEO: [Self; 4] = [
        Self::DropBlankRdfResource,
        Self::DropGmlId,
        Self::CollapseGeoWhitespace,
        Self::RemoveEmptyDcElements,
    ];

    pub const fn category(self) -> PassCategory {
        match self {
            Self::RemoveEmptyOriginInfoChildren
            | Self::RemoveEmptyOriginInfo
            | Self::BackfillLegacyEventType
            | Self::InferPlaceTermType
            | Self::PropagatePlaceAuthority
            | Self::FixAuthorityCodeSpelling
            | Self::SingleKeyDate
            | Self::StripDateTrailingPeriod => PassCategory::OriginInfo,
            Self::RemoveBlankTitleParts | Self::RemoveEmptyTitleInfo => PassCategory::Title,
            Self::DropBlankRdfResource
            | Self::DropGmlId
            | Self::CollapseGeoWhitespace
            | Self::RemoveEmptyDcElements => PassCategory::Geo,
        }
    }

    /// Stable name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RemoveEmptyOriginInfoChildren => "remove_empty_origin_info_children",
            Self::RemoveEmptyOriginInfo => "remove_empty_origin_info",
            Self::BackfillLegacyEventType => "backfill_legacy_event_type",
            Self::InferPlaceTermType => "infer_place_term_type",
            Self::PropagatePlaceAuthority => "propagate_place_authority",
            Self::FixAuthorityCodeSpelling => "fix_authority_code_spelling",
            Self::SingleKeyDate => "single_key_date",
            Self::StripDateTrailingPeriod => "strip_date_trailing_period",
            Self::RemoveBlankTitleParts => "remove_blank_title_parts",
            Self::RemoveEmptyTitleInfo => "remove_empty_title_info",
            Self::DropBlankRdfResource => "drop_blank_rdf_resource",
            Self::DropGmlId => "drop_gml_id",
            Self::CollapseGeoWhitespace => "collapse_geo_whitespace",
            Self::RemoveEmptyDcElements => "remove_empty_dc_elements",
        }
    }

    /// Rewrite the tree under `root` in place. Returns the number of
    /// changes made.
    pub fn apply(self, root: &mut Element) -> usize {
        match self {
            Self::RemoveEmptyOriginInfoChildren => origin_info::remove_empty_children(root),
            Self::RemoveEmptyOriginInfo => origin_info::remove_empty_origin_info(root),
            Self::BackfillLegacyEventType => origin_info::backfill_legacy_event_type(root),
            Self::InferPlaceTermType => origin_info::infer_place_term_type(root),
            Self::PropagatePlaceAuthority => origin_info::propagate_place_authority(root),
            Self::FixAuthorityCodeSpelling => origin_info::fix_authority_code_spelling(root),
            Self::SingleKeyDate => origin_info::single_key_date(root),
            Self::StripDateTrailingPeriod => origin_info::strip_date_trailing_period(root),
            Self::RemoveBlankTitleParts => title::remove_blank_parts(root),
            Self::RemoveEmptyTitleInfo => title::remove_empty_title_info(root),
            Self::DropBlankRdfResource => geo::drop_blank_rdf_resource(root),
            Self::DropGmlId => geo::drop_gml_id(root),
            Self::CollapseGeoWhitespace => geo::collapse_whitespace(root),
            Self::RemoveEmptyDcElements => geo::remove_empty_dc_elements(root),
        }
    }
}

/// An ordered list of passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationPipeline {
    passes: Vec<NormalizationPass>,
}

impl NormalizationPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin_info() -> Self {
        Self::from_passes(NormalizationPass::ORIGIN_INFO)
    }

    pub fn title() -> Self {
        Self::from_passes(NormalizationPass::TITLE)
    }

    pub fn geo() -> Self {
        Self::from_passes(NormalizationPass::GEO)
    }

    /// Origin-info, then title, then (when enabled) geo-extension passes.
    pub fn full(options: &NormalizationOptions) -> Self {
        let mut pipeline = Self::origin_info();
        pipeline.extend(NormalizationPass::TITLE);
        if options.geo {
            pipeline.extend(NormalizationPass::GEO);
        }
        pipeline
    }

    fn from_passes(passes: impl IntoIterator<Item = NormalizationPass>) -> Self {
        Self {
            passes: passes.into_iter().collect(),
        }
    }

    /// Append a pass to the end of the pipeline.
    pub fn add_pass(&mut self, pass: NormalizationPass) {
        self.passes.push(pass);
    }

    fn extend(&mut self, passes: impl IntoIterator<Item = NormalizationPass>) {
        self.passes.extend(passes);
    }

    /// Passes in execution order.
    pub fn passes(&self) -> &[NormalizationPass] {
        &self.passes
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}
