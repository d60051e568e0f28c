//! Markup document tree.

/// A node of a parsed markup document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Raw text, whitespace included.
    Text(String),
}

/// An element: tag name as authored, attributes, and children in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add an attribute, replacing an existing one with the same key.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Look up an attribute value. Keys are case-sensitive.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Node::Text(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_lookup_is_case_sensitive() {
        let feed = Element::new("feed").attr("lines", "3");
        assert_eq!(feed.attribute("lines"), Some("3"));
        assert_eq!(feed.attribute("LINES"), None);
    }

    #[test]
    fn test_attr_replaces_duplicate_key() {
        let feed = Element::new("feed").attr("lines", "3").attr("lines", "5");
        assert_eq!(feed.attributes, vec![("lines".to_string(), "5".to_string())]);
    }

    #[test]
    fn test_builder_children_keep_order() {
        let bold = Element::new("bold").child("a").child(Element::new("br")).child("b");
        assert_eq!(bold.children.len(), 3);
        assert_eq!(bold.children[0], Node::text("a"));
        assert!(bold.children[1].as_element().is_some());
    }
}
