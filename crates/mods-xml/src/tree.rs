//! Element tree types.

/// A child of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with ordered attributes and children.
///
/// Names are kept exactly as written (including any prefix); lookups by
/// element name compare the local part only, so `mods:titleInfo` and
/// `titleInfo` both match `"titleInfo"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: set an attribute.
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Builder: set an attribute when a value is present.
    #[must_use]
    pub fn with_opt_attr(mut self, key: impl Into<String>, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.set_attr(key, value);
        }
        self
    }

    /// Builder: append a text node.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }

    /// Builder: append a child element.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without any namespace prefix.
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// The namespace prefix, if the name has one.
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    pub fn is(&self, local_name: &str) -> bool {
        self.local_name() == local_name
    }

    /// Name for a new sibling/child element carrying the same prefix.
    pub fn qualify(&self, local_name: &str) -> String {
        match self.prefix() {
            Some(prefix) => format!("{prefix}:{local_name}"),
            None => local_name.to_string(),
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Attribute value when present and not blank.
    pub fn attr_non_blank(&self, key: &str) -> Option<&str> {
        self.attr(key).filter(|value| !value.trim().is_empty())
    }

    pub fn has_attr(&self, key: &str) -> bool {
        self.attr(key).is_some()
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(name, _)| *name == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn remove_attr(&mut self, key: &str) -> Option<String> {
        let idx = self.attributes.iter().position(|(name, _)| name == key)?;
        Some(self.attributes.remove(idx).1)
    }

    /// Keep only the attributes for which `keep(key, value)` returns true.
    pub fn retain_attrs<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &str) -> bool,
    {
        self.attributes.retain(|(key, value)| keep(key, value));
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Append text, merging with a trailing text node.
    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(&text);
        } else {
            self.children.push(Node::Text(text));
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Child elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Child elements with the given local name.
    pub fn elements_named<'a>(&'a self, local_name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.elements().filter(move |element| element.is(local_name))
    }

    pub fn elements_named_mut<'a>(
        &'a mut self,
        local_name: &'a str,
    ) -> impl Iterator<Item = &'a mut Element> {
        self.elements_mut()
            .filter(move |element| element.is(local_name))
    }

    /// First child element with the given local name.
    pub fn child(&self, local_name: &str) -> Option<&Element> {
        self.elements().find(|element| element.is(local_name))
    }

    pub fn child_mut(&mut self, local_name: &str) -> Option<&mut Element> {
        self.elements_mut().find(|element| element.is(local_name))
    }

    pub fn has_element_children(&self) -> bool {
        self.elements().next().is_some()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Keep only the child elements for which `keep` returns true.
    /// Text nodes are always kept.
    pub fn retain_elements<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Element) -> bool,
    {
        self.children.retain(|node| match node {
            Node::Element(element) => keep(element),
            Node::Text(_) => true,
        });
    }

    /// Concatenated direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Replace all direct text children with a single text node.
    ///
    /// The new text takes the position of the first text child, or is
    /// appended when there was none.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        let first = self
            .children
            .iter()
            .position(|node| matches!(node, Node::Text(_)));
        match first {
            Some(idx) => {
                self.children[idx] = Node::Text(text);
                let mut seen = 0usize;
                self.children.retain(|node| {
                    if matches!(node, Node::Text(_)) {
                        seen += 1;
                        seen == 1
                    } else {
                        true
                    }
                });
            }
            None => self.children.push(Node::Text(text)),
        }
    }

    /// Text of this element and all descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    /// True when neither this element nor any descendant has non-blank text.
    pub fn is_blank(&self) -> bool {
        self.text_content().trim().is_empty()
    }

    /// Visit this element and every descendant, parents before children.
    pub fn walk_mut<F>(&mut self, visit: &mut F)
    where
        F: FnMut(&mut Element),
    {
        visit(self);
        for child in self.elements_mut() {
            child.walk_mut(visit);
        }
    }

    /// All descendants (excluding self) with the given local name.
    pub fn descendants_named<'a>(&'a self, local_name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_named(local_name, &mut found);
        found
    }

    fn collect_named<'a>(&'a self, local_name: &str, found: &mut Vec<&'a Element>) {
        for child in self.elements() {
            if child.is(local_name) {
                found.push(child);
            }
            child.collect_named(local_name, found);
        }
    }

    /// Apply `visit` to every descendant (excluding self) with the given
    /// local name. Matches nested inside a match are visited too.
    pub fn for_each_named_mut<F>(&mut self, local_name: &str, visit: &mut F)
    where
        F: FnMut(&mut Element),
    {
        for child in self.elements_mut() {
            if child.is(local_name) {
                visit(child);
            }
            child.for_each_named_mut(local_name, visit);
        }
    }

    /// Remove whitespace-only text nodes from elements that also have
    /// element children (indentation between elements).
    pub(crate) fn drop_layout_whitespace(&mut self) {
        if self.has_element_children() {
            self.children.retain(|node| match node {
                Node::Text(text) => !text.trim().is_empty(),
                Node::Element(_) => true,
            });
        }
    }
}

/// A complete XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }
}

fn local_part(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_name_ignores_prefix() {
        let element = Element::new("mods:titleInfo");
        assert_eq!(element.local_name(), "titleInfo");
        assert_eq!(element.prefix(), Some("mods"));
        assert!(element.is("titleInfo"));
        assert_eq!(element.qualify("title"), "mods:title");
        assert_eq!(Element::new("title").qualify("subTitle"), "subTitle");
    }

    #[test]
    fn set_attr_replaces_in_place() {
        let mut element = Element::new("name")
            .with_attr("type", "personal")
            .with_attr("usage", "primary");
        element.set_attr("type", "corporate");
        let attrs: Vec<_> = element.attributes().collect();
        assert_eq!(attrs, vec![("type", "corporate"), ("usage", "primary")]);
        assert_eq!(element.remove_attr("usage"), Some("primary".to_string()));
        assert_eq!(element.remove_attr("usage"), None);
    }

    #[test]
    fn set_text_keeps_single_text_node() {
        let mut element = Element::new("dateIssued").with_text("1990.");
        element.push(Element::new("x"));
        element.children_mut().push(Node::Text("tail".to_string()));
        element.set_text("1990");
        assert_eq!(element.text(), "1990");
        assert_eq!(element.children().len(), 2);
        assert!(matches!(&element.children()[0], Node::Text(text) if text == "1990"));
    }

    #[test]
    fn descendants_match_at_any_depth() {
        let root = Element::new("mods").with_child(
            Element::new("originInfo").with_child(
                Element::new("place")
                    .with_child(Element::new("placeTerm").with_text("Paris"))
                    .with_child(Element::new("placeTerm").with_text("fr")),
            ),
        );
        assert_eq!(root.descendants_named("placeTerm").len(), 2);
        assert_eq!(root.text_content(), "Parisfr");
        assert!(!root.is_blank());
    }
}
