//! Applies resolved markset strings to elements.
//!
//! # Invariants
//!
//! 1. **Attribute-gated**: an element without a non-empty marker attribute
//!    is never touched.
//! 2. **Independent concerns**: text, value and tip are resolved and applied
//!    separately; a missing one never blocks another.
//! 3. **Schedule after attach**: the [`TipScheduler`] is notified exactly
//!    once per resolved tip, after the tip (with any range suffix) is set.
//! 4. **Silent degradation**: unresolved marks skip their mutation. Nothing
//!    in this module returns an error or panics.
//!
//! # Example
//!
//! ```
//! use markset_i18n::{Category, LanguageTable};
//! use markset_web::{MemoryElement, NoopScheduler, Translator};
//!
//! let mut table = LanguageTable::new();
//! table.insert(Category::Text, "titleMark", "Site Map");
//!
//! let translator = Translator::new(&table, NoopScheduler);
//! let mut label = MemoryElement::new().with_attribute("markset", "text:titleMark");
//! translator.translate_label(&mut label);
//! assert_eq!(label.content(), Some("Site Map"));
//! ```

use markset_i18n::{Category, LanguageTable, Markset};
use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementKind};
use crate::scheduler::TipScheduler;

/// Translator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Attribute holding the markset (default: `markset`).
    pub marker_attribute: String,
    /// Attribute holding range context for tips (default: `range`).
    pub range_attribute: String,
    /// Text inserted between a tip and its range (default: `" Range="`).
    pub range_prefix: String,
    /// Ignore marksets that fail strict parsing, such as duplicated or
    /// unknown categories (default: false, first match wins).
    pub strict: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            marker_attribute: "markset".into(),
            range_attribute: "range".into(),
            range_prefix: " Range=".into(),
            strict: false,
        }
    }
}

impl TranslatorConfig {
    /// Set the marker attribute name.
    #[must_use]
    pub fn marker_attribute(mut self, name: impl Into<String>) -> Self {
        self.marker_attribute = name.into();
        self
    }

    /// Set the range attribute name.
    #[must_use]
    pub fn range_attribute(mut self, name: impl Into<String>) -> Self {
        self.range_attribute = name.into();
        self
    }

    /// Set the text placed between a tip and its range.
    #[must_use]
    pub fn range_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.range_prefix = prefix.into();
        self
    }

    /// Enable or disable strict markset validation.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Localizes elements against one borrowed [`LanguageTable`].
///
/// A translator is cheap to build; construct a new one on language switch
/// and run it over the page again.
#[derive(Debug, Clone)]
pub struct Translator<'t, S> {
    table: &'t LanguageTable,
    scheduler: S,
    config: TranslatorConfig,
}

impl<'t, S> Translator<'t, S> {
    /// Create a translator with the default configuration.
    #[must_use]
    pub fn new(table: &'t LanguageTable, scheduler: S) -> Self {
        Self {
            table,
            scheduler,
            config: TranslatorConfig::default(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: TranslatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// The table strings are resolved against.
    #[must_use]
    pub fn table(&self) -> &'t LanguageTable {
        self.table
    }

    /// The tip scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Label-like element: text replaces the content, tip is attached.
    pub fn translate_label<E>(&self, element: &mut E)
    where
        E: Element + ?Sized,
        S: TipScheduler<E>,
    {
        let Some(markset) = self.markset(&*element) else {
            return;
        };
        let _span = tracing::debug_span!("translate", kind = "label", markset = %markset).entered();
        if let Some(text) = self.resolve(&markset, Category::Text) {
            element.set_content(text);
        }
        self.apply_tip(element, &markset);
    }

    /// Input element: value is set, tip is attached.
    pub fn translate_input<E>(&self, element: &mut E)
    where
        E: Element + ?Sized,
        S: TipScheduler<E>,
    {
        let Some(markset) = self.markset(&*element) else {
            return;
        };
        let _span = tracing::debug_span!("translate", kind = "input", markset = %markset).entered();
        if let Some(value) = self.resolve(&markset, Category::Value) {
            element.set_value(value);
        }
        self.apply_tip(element, &markset);
    }

    /// Selection list: tip for the list, text for every option.
    ///
    /// Options carry their own marker attribute and are translated even when
    /// the list itself has none.
    pub fn translate_select<E>(&self, element: &mut E)
    where
        E: Element + ?Sized,
        S: TipScheduler<E>,
    {
        let _span = tracing::debug_span!("translate", kind = "select").entered();
        if let Some(markset) = self.markset(&*element) {
            self.apply_tip(element, &markset);
        }
        element.for_each_option(&mut |option| {
            let Some(markset) = self.markset(&*option) else {
                return;
            };
            if let Some(text) = self.resolve(&markset, Category::Text) {
                option.set_content(text);
            }
        });
    }

    /// Link element: tip only.
    pub fn translate_link<E>(&self, element: &mut E)
    where
        E: Element + ?Sized,
        S: TipScheduler<E>,
    {
        let Some(markset) = self.markset(&*element) else {
            return;
        };
        let _span = tracing::debug_span!("translate", kind = "link", markset = %markset).entered();
        self.apply_tip(element, &markset);
    }

    /// Dispatch on element kind.
    pub fn translate<E>(&self, kind: ElementKind, element: &mut E)
    where
        E: Element + ?Sized,
        S: TipScheduler<E>,
    {
        match kind {
            ElementKind::Label => self.translate_label(element),
            ElementKind::Input => self.translate_input(element),
            ElementKind::Select => self.translate_select(element),
            ElementKind::Link => self.translate_link(element),
        }
    }

    /// One localization pass over a set of elements.
    pub fn translate_all<'e, E, I>(&self, elements: I)
    where
        E: Element + ?Sized + 'e,
        S: TipScheduler<E>,
        I: IntoIterator<Item = (ElementKind, &'e mut E)>,
    {
        let mut count = 0usize;
        for (kind, element) in elements {
            self.translate(kind, element);
            count += 1;
        }
        tracing::debug!(
            elements = count,
            locale = self.table().locale().unwrap_or("-"),
            "localization pass complete"
        );
    }

    /// Marker attribute, if present, non-empty and (in strict mode) valid.
    fn markset<E: Element + ?Sized>(&self, element: &E) -> Option<String> {
        let markset = element
            .attribute(&self.config.marker_attribute)
            .filter(|m| !m.is_empty())?;
        if self.config.strict {
            if let Err(err) = markset.parse::<Markset>() {
                tracing::warn!(markset = %markset, error = %err, "ignoring invalid markset");
                return None;
            }
        }
        Some(markset)
    }

    fn resolve(&self, markset: &str, category: Category) -> Option<&'t str> {
        let table: &'t LanguageTable = self.table;
        let resolved = table.resolve(markset, category);
        if resolved.is_none() {
            tracing::trace!(%category, markset, "no localized string");
        }
        resolved
    }

    fn apply_tip<E>(&self, element: &mut E, markset: &str)
    where
        E: Element + ?Sized,
        S: TipScheduler<E>,
    {
        let Some(tip) = self.resolve(markset, Category::Tip) else {
            return;
        };
        let tip = match element
            .attribute(&self.config.range_attribute)
            .filter(|r| !r.is_empty())
        {
            Some(range) => format!("{tip}{}{range}", self.config.range_prefix),
            None => tip.to_string(),
        };
        element.set_tip(&tip);
        self.scheduler.schedule(&*element);
    }
}
