//! Element abstraction the translator mutates.
//!
//! Hosts implement [`Element`] for whatever node type they render: a DOM
//! node (see the `wasm32` adapter), a widget, or the in-memory
//! [`MemoryElement`](crate::memory::MemoryElement).

use std::fmt;

/// A localizable UI element.
///
/// Getters return owned strings because most hosts (the DOM in particular)
/// hand out fresh copies anyway.
pub trait Element {
    /// Read an attribute by name.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Replace the element's rendered content (its label).
    fn set_content(&mut self, content: &str);

    /// Current value, for elements that carry one.
    fn value(&self) -> Option<String>;

    /// Set the element's value.
    fn set_value(&mut self, value: &str);

    /// Tip currently attached to the element.
    fn tip(&self) -> Option<String>;

    /// Attach a tip to the element.
    fn set_tip(&mut self, tip: &str);

    /// Visit the option entries of a selection list.
    ///
    /// Elements without options keep the default, which visits nothing.
    fn for_each_option(&mut self, _visit: &mut dyn FnMut(&mut dyn Element)) {}
}

/// How an element takes its localized strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Displays text: content from the text mark, plus a tip.
    Label,
    /// Form input: value from the value mark, plus a tip.
    Input,
    /// Selection list: a tip for the list, text for each option.
    Select,
    /// Hyperlink: tip only.
    Link,
}

impl ElementKind {
    /// Classify an HTML tag name (case-insensitive).
    ///
    /// Returns `None` for `option`, which is localized through its
    /// selection list. Unknown tags are treated as labels.
    #[must_use]
    pub fn from_tag_name(tag: &str) -> Option<Self> {
        let tag = tag.to_ascii_lowercase();
        match tag.as_str() {
            "option" => None,
            "input" | "textarea" => Some(Self::Input),
            "select" => Some(Self::Select),
            "a" => Some(Self::Link),
            _ => Some(Self::Label),
        }
    }

    /// Short lowercase name, used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Input => "input",
            Self::Select => "select",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names_classify() {
        assert_eq!(ElementKind::from_tag_name("SPAN"), Some(ElementKind::Label));
        assert_eq!(ElementKind::from_tag_name("div"), Some(ElementKind::Label));
        assert_eq!(ElementKind::from_tag_name("INPUT"), Some(ElementKind::Input));
        assert_eq!(ElementKind::from_tag_name("textarea"), Some(ElementKind::Input));
        assert_eq!(ElementKind::from_tag_name("Select"), Some(ElementKind::Select));
        assert_eq!(ElementKind::from_tag_name("A"), Some(ElementKind::Link));
        assert_eq!(ElementKind::from_tag_name("OPTION"), None);
    }

    #[test]
    fn kind_display() {
        assert_eq!(ElementKind::Select.to_string(), "select");
    }

    struct Bare;

    impl Element for Bare {
        fn attribute(&self, _name: &str) -> Option<String> {
            None
        }
        fn set_content(&mut self, _content: &str) {}
        fn value(&self) -> Option<String> {
            None
        }
        fn set_value(&mut self, _value: &str) {}
        fn tip(&self) -> Option<String> {
            None
        }
        fn set_tip(&mut self, _tip: &str) {}
    }

    #[test]
    fn default_options_visit_nothing() {
        let mut visited = 0;
        Bare.for_each_option(&mut |_| visited += 1);
        assert_eq!(visited, 0);
    }
}
