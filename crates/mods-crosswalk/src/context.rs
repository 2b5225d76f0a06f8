//! State shared by the field writers of one document.

use std::collections::HashMap;

use mods_common::Notifier;

use crate::ids::{GroupId, GroupIdAllocator, GroupKind};

/// Explicit writer state: the document's id allocator, the diagnostic sink
/// and the links the title writer leaves for the contributor writer.
pub struct WriterContext<'a> {
    ids: &'a mut GroupIdAllocator,
    notifier: &'a dyn Notifier,
    druid: &'a str,
    path: String,
    name_title_groups: HashMap<String, GroupId>,
}

impl<'a> WriterContext<'a> {
    pub fn new(ids: &'a mut GroupIdAllocator, notifier: &'a dyn Notifier, druid: &'a str) -> Self {
        Self {
            ids,
            notifier,
            druid,
            path: "description".to_string(),
            name_title_groups: HashMap::new(),
        }
    }

    /// Context for a nested record at `path` (relative to this one).
    ///
    /// Shares the allocator and notifier; name-title links do not cross
    /// record boundaries.
    pub fn nested(&mut self, path: &str) -> WriterContext<'_> {
        WriterContext {
            ids: &mut *self.ids,
            notifier: self.notifier,
            druid: self.druid,
            path: format!("{}.{path}", self.path),
            name_title_groups: HashMap::new(),
        }
    }

    /// The resource identifier the transform was called with.
    pub fn druid(&self) -> &str {
        self.druid
    }

    pub fn next_id(&mut self, kind: GroupKind) -> GroupId {
        self.ids.next(kind)
    }

    /// Absolute path of a field of the current record, for diagnostics.
    pub fn path_to(&self, field: &str) -> String {
        format!("{}.{field}", self.path)
    }

    pub fn warn(&self, message: &str, context: &[(&str, &str)]) {
        self.notifier.warn(message, context);
    }

    pub fn error(&self, message: &str, context: &[(&str, &str)]) {
        self.notifier.error(message, context);
    }

    /// Warn about a value missing from a vocabulary table.
    pub(crate) fn warn_unmapped(&self, message: &str, value: &str, field: &str) {
        let path = self.path_to(field);
        self.notifier
            .warn(message, &[("type", value), ("path", path.as_str())]);
    }

    pub(crate) fn link_name_title(&mut self, name: String, id: GroupId) {
        self.name_title_groups.insert(name, id);
    }

    pub(crate) fn name_title_group(&self, name: &str) -> Option<&GroupId> {
        self.name_title_groups.get(name)
    }
}
