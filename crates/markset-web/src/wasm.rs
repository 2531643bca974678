//! Browser DOM adapter (wasm32 only).
//!
//! [`DomElement`] implements [`Element`] over `web_sys::Element`, and
//! [`translate_document`] runs one localization pass over every marked
//! element in the current document.

use js_sys::Function;
use markset_i18n::LanguageTable;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::element::{Element, ElementKind};
use crate::translator::Translator;

/// A live DOM node.
#[derive(Debug, Clone)]
pub struct DomElement {
    inner: web_sys::Element,
}

impl DomElement {
    /// Wrap a DOM element.
    #[must_use]
    pub fn new(inner: web_sys::Element) -> Self {
        Self { inner }
    }

    /// Classify by tag name; `None` for `<option>`.
    #[must_use]
    pub fn kind(&self) -> Option<ElementKind> {
        ElementKind::from_tag_name(&self.inner.tag_name())
    }

    /// The underlying DOM element.
    #[must_use]
    pub fn as_element(&self) -> &web_sys::Element {
        &self.inner
    }
}

impl Element for DomElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.inner.get_attribute(name)
    }

    fn set_content(&mut self, content: &str) {
        match self.inner.dyn_ref::<HtmlOptionElement>() {
            Some(option) => option.set_text(content),
            None => self.inner.set_text_content(Some(content)),
        }
    }

    fn value(&self) -> Option<String> {
        if let Some(input) = self.inner.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        self.inner
            .dyn_ref::<HtmlTextAreaElement>()
            .map(|area| area.value())
    }

    fn set_value(&mut self, value: &str) {
        if let Some(input) = self.inner.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = self.inner.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn tip(&self) -> Option<String> {
        self.inner
            .dyn_ref::<HtmlElement>()
            .map(|html| html.title())
            .filter(|title| !title.is_empty())
    }

    fn set_tip(&mut self, tip: &str) {
        if let Some(html) = self.inner.dyn_ref::<HtmlElement>() {
            html.set_title(tip);
        }
    }

    fn for_each_option(&mut self, visit: &mut dyn FnMut(&mut dyn Element)) {
        let Some(select) = self.inner.dyn_ref::<HtmlSelectElement>() else {
            return;
        };
        let options = select.options();
        for index in 0..options.length() {
            if let Some(option) = options.item(index) {
                visit(&mut DomElement::new(option));
            }
        }
    }
}

/// Localize every `[markset]` element of the current document.
///
/// Every `<select>` is visited as well, marked or not, so its options are
/// translated through the list. Marked `<option>`s are not visited directly.
///
/// `table_json` uses the [`LanguageTable::from_json`] shape. `scheduler` is
/// called with each element right after its tip is set; its return value
/// and any exception it throws are ignored. Returns the number of elements
/// visited.
#[wasm_bindgen(js_name = translateDocument)]
pub fn translate_document(table_json: &str, scheduler: &Function) -> Result<u32, JsValue> {
    let table =
        LanguageTable::from_json(table_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    let schedule = |element: &DomElement| {
        let target: &JsValue = element.as_element();
        if scheduler.call1(&JsValue::NULL, target).is_err() {
            tracing::trace!("tip scheduler threw; ignoring");
        }
    };
    let translator = Translator::new(&table, schedule);

    // Unmarked selects still own marked options.
    let selector = format!("[{}], select", translator.config().marker_attribute);
    let nodes = document.query_selector_all(&selector)?;

    let mut visited = 0u32;
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let mut element = DomElement::new(element);
        if let Some(kind) = element.kind() {
            translator.translate(kind, &mut element);
            visited += 1;
        }
    }
    tracing::debug!(
        visited,
        locale = translator.table().locale().unwrap_or("-"),
        "document localized"
    );
    Ok(visited)
}
