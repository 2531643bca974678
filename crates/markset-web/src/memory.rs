//! In-memory element for headless hosts and tests.

use std::collections::BTreeMap;

use crate::element::Element;

/// A detached element that stores everything the translator touches.
///
/// # Example
///
/// ```
/// use markset_web::{Element, MemoryElement};
///
/// let option = MemoryElement::new().with_attribute("markset", "text:optA");
/// let select = MemoryElement::new()
///     .with_attribute("markset", "tip:pickTip")
///     .with_option(option);
/// assert_eq!(select.options().len(), 1);
/// assert_eq!(select.attribute("markset").as_deref(), Some("tip:pickTip"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    attributes: BTreeMap<String, String>,
    content: Option<String>,
    value: Option<String>,
    tip: Option<String>,
    options: Vec<MemoryElement>,
}

impl MemoryElement {
    /// Create an element with no attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set the initial rendered content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Append an option entry.
    #[must_use]
    pub fn with_option(mut self, option: MemoryElement) -> Self {
        self.options.push(option);
        self
    }

    /// Set an attribute in place.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Rendered content.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Option entries, in document order.
    #[must_use]
    pub fn options(&self) -> &[MemoryElement] {
        &self.options
    }
}

impl Element for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_content(&mut self, content: &str) {
        self.content = Some(content.to_string());
    }

    fn value(&self) -> Option<String> {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }

    fn tip(&self) -> Option<String> {
        self.tip.clone()
    }

    fn set_tip(&mut self, tip: &str) {
        self.tip = Some(tip.to_string());
    }

    fn for_each_option(&mut self, visit: &mut dyn FnMut(&mut dyn Element)) {
        for option in &mut self.options {
            visit(option);
        }
    }
}
