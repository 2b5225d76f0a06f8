//! Per-document group identifiers.
//!
//! MODS links otherwise separate elements through shared attribute values:
//! parallel representations share an `altRepGroup`, and a name shares a
//! `nameTitleGroup` with the uniform title it is part of. One allocator is
//! created per transform so ids never leak between documents.

use std::fmt;

/// The two independent id namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    AltRepGroup,
    NameTitleGroup,
}

impl GroupKind {
    /// The MODS attribute that carries ids of this kind.
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::AltRepGroup => "altRepGroup",
            Self::NameTitleGroup => "nameTitleGroup",
        }
    }
}

/// An opaque group token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupId(String);

impl GroupId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Issues monotonically increasing ids, one counter per [`GroupKind`].
#[derive(Debug, Default)]
pub struct GroupIdAllocator {
    alt_rep_group: u32,
    name_title_group: u32,
}

impl GroupIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id of `kind`. The first id of each kind is `"1"`.
    pub fn next(&mut self, kind: GroupKind) -> GroupId {
        let counter = match kind {
            GroupKind::AltRepGroup => &mut self.alt_rep_group,
            GroupKind::NameTitleGroup => &mut self.name_title_group,
        };
        *counter += 1;
        GroupId(counter.to_string())
    }

    /// How many ids of `kind` have been issued.
    pub fn issued(&self, kind: GroupKind) -> u32 {
        match kind {
            GroupKind::AltRepGroup => self.alt_rep_group,
            GroupKind::NameTitleGroup => self.name_title_group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_count_independently() {
        let mut ids = GroupIdAllocator::new();
        assert_eq!(ids.next(GroupKind::AltRepGroup).as_str(), "1");
        assert_eq!(ids.next(GroupKind::AltRepGroup).as_str(), "2");
        assert_eq!(ids.next(GroupKind::NameTitleGroup).as_str(), "1");
        assert_eq!(ids.issued(GroupKind::AltRepGroup), 2);
        assert_eq!(ids.issued(GroupKind::NameTitleGroup), 1);
    }

    #[test]
    fn attribute_names() {
        assert_eq!(GroupKind::AltRepGroup.attribute(), "altRepGroup");
        assert_eq!(GroupKind::NameTitleGroup.attribute(), "nameTitleGroup");
    }
}
