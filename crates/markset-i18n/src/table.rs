//! Language resource table with per-category lookup.
//!
//! # Invariants
//!
//! 1. **No fallback**: a lookup either hits the map for its category or
//!    returns `None`. There is no default language and no default string.
//!
//! 2. **Categories are independent**: `texts`, `tips` and `values` are
//!    separate namespaces; the same mark name may map to different strings
//!    in each.
//!
//! 3. **Read-only at translation time**: translators borrow the table
//!    immutably, so a table is `Send + Sync` and can be shared freely.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing mark | Category absent from markset | Returns `None` |
//! | Missing entry | Mark name not in the category map | Returns `None` |
//! | Bad JSON | `from_json` input not a table object | [`TableError::Parse`] |

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::markset::{Category, Markset, extract_mark};

/// Errors from loading a language table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The JSON document could not be parsed into a table.
    Parse(String),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "language table parse error: {msg}"),
        }
    }
}

impl std::error::Error for TableError {}

/// Localized strings for one language, split by [`Category`].
///
/// # Example
///
/// ```
/// use markset_i18n::{Category, LanguageTable};
///
/// let mut table = LanguageTable::new();
/// table.insert(Category::Text, "titleMark", "Site Map");
/// table.insert(Category::Tip, "titleTip", "Enter the site title");
///
/// let markset = "text:titleMark;tip:titleTip";
/// assert_eq!(table.text(markset), Some("Site Map"));
/// assert_eq!(table.tip(markset), Some("Enter the site title"));
/// assert_eq!(table.value(markset), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<String>,
    texts: HashMap<String, String>,
    tips: HashMap<String, String>,
    values: HashMap<String, String>,
}

impl LanguageTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag the table with the locale it holds (e.g. `"en"`).
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Locale tag, if one was set.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Load a table from JSON.
    ///
    /// Expected shape (every field optional):
    ///
    /// ```json
    /// { "locale": "en", "texts": {"k": "v"}, "tips": {}, "values": {} }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let table: Self =
            serde_json::from_str(json).map_err(|e| TableError::Parse(e.to_string()))?;
        tracing::debug!(
            locale = table.locale().unwrap_or("-"),
            texts = table.texts.len(),
            tips = table.tips.len(),
            values = table.values.len(),
            "loaded language table"
        );
        Ok(table)
    }

    /// Insert a localized string for `name` in `category`.
    pub fn insert(&mut self, category: Category, name: impl Into<String>, value: impl Into<String>) {
        self.map_mut(category).insert(name.into(), value.into());
    }

    /// Look up a mark name directly.
    #[must_use]
    pub fn lookup(&self, category: Category, name: &str) -> Option<&str> {
        self.map(category).get(name).map(String::as_str)
    }

    /// Extract the mark for `category` from `markset` and look it up.
    #[must_use]
    pub fn resolve(&self, markset: &str, category: Category) -> Option<&str> {
        extract_mark(markset, category).and_then(|name| self.lookup(category, name))
    }

    /// Resolve the text mark of a markset.
    #[must_use]
    pub fn text(&self, markset: &str) -> Option<&str> {
        self.resolve(markset, Category::Text)
    }

    /// Resolve the tip mark of a markset.
    #[must_use]
    pub fn tip(&self, markset: &str) -> Option<&str> {
        self.resolve(markset, Category::Tip)
    }

    /// Resolve the value mark of a markset.
    #[must_use]
    pub fn value(&self, markset: &str) -> Option<&str> {
        self.resolve(markset, Category::Value)
    }

    /// Total number of entries across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len() + self.tips.len() + self.values.len()
    }

    /// Whether the table has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the mark names defined for a category.
    pub fn names(&self, category: Category) -> impl Iterator<Item = &str> {
        self.map(category).keys().map(String::as_str)
    }

    // -----------------------------------------------------------------
    // Coverage
    // -----------------------------------------------------------------

    /// Check which marks referenced by `marksets` this table resolves.
    ///
    /// Marksets are read leniently; each distinct `(category, name)` pair is
    /// counted once. Missing marks are returned sorted.
    #[must_use]
    pub fn coverage_report<'m, I>(&self, marksets: I) -> CoverageReport
    where
        I: IntoIterator<Item = &'m str>,
    {
        let referenced: BTreeSet<MissingMark> = marksets
            .into_iter()
            .flat_map(|m| {
                Markset::parse(m)
                    .marks()
                    .map(|(category, name)| MissingMark {
                        category,
                        name: name.to_string(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let total = referenced.len();
        let missing: Vec<MissingMark> = referenced
            .into_iter()
            .filter(|mark| self.lookup(mark.category, &mark.name).is_none())
            .collect();
        let resolved = total.saturating_sub(missing.len());
        let coverage_percent = if total == 0 {
            100.0
        } else {
            (resolved as f32 / total as f32) * 100.0
        };

        CoverageReport {
            locale: self.locale.clone(),
            total_marks: total,
            resolved,
            missing,
            coverage_percent,
        }
    }

    fn map(&self, category: Category) -> &HashMap<String, String> {
        match category {
            Category::Text => &self.texts,
            Category::Tip => &self.tips,
            Category::Value => &self.values,
        }
    }

    fn map_mut(&mut self, category: Category) -> &mut HashMap<String, String> {
        match category {
            Category::Text => &mut self.texts,
            Category::Tip => &mut self.tips,
            Category::Value => &mut self.values,
        }
    }
}

/// A mark referenced by some markset.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MissingMark {
    /// Category the mark was referenced under.
    pub category: Category,
    /// Mark name.
    pub name: String,
}

/// How well a table covers a set of marksets.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    /// Locale tag of the checked table.
    pub locale: Option<String>,
    /// Distinct `(category, name)` pairs referenced.
    pub total_marks: usize,
    /// Referenced pairs the table resolves.
    pub resolved: usize,
    /// Referenced pairs the table does not resolve.
    pub missing: Vec<MissingMark>,
    /// Coverage as a percentage (0.0–100.0).
    pub coverage_percent: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn site_table() -> LanguageTable {
        let mut table = LanguageTable::new().with_locale("en");
        table.insert(Category::Text, "titleMark", "Site Map");
        table.insert(Category::Tip, "titleTip", "Enter the site title");
        table.insert(Category::Value, "titleValue", "My Site");
        table
    }

    #[test]
    fn resolves_each_category() {
        let table = site_table();
        let m = "text:titleMark;tip:titleTip;value:titleValue";
        assert_eq!(table.text(m), Some("Site Map"));
        assert_eq!(table.tip(m), Some("Enter the site title"));
        assert_eq!(table.value(m), Some("My Site"));
    }

    #[test]
    fn categories_are_separate_namespaces() {
        let table = site_table();
        // titleMark exists only in texts.
        assert_eq!(table.tip("tip:titleMark"), None);
        assert_eq!(table.lookup(Category::Text, "titleMark"), Some("Site Map"));
    }

    #[test]
    fn missing_mark_and_missing_entry() {
        let table = site_table();
        assert_eq!(table.tip("text:titleMark"), None);
        assert_eq!(table.tip("tip:unknownMark"), None);
        assert_eq!(table.text("garbage"), None);
    }

    #[test]
    fn len_counts_all_categories() {
        let table = site_table();
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert!(LanguageTable::new().is_empty());
    }

    #[test]
    fn names_lists_category_keys() {
        let table = site_table();
        let names: Vec<&str> = table.names(Category::Tip).collect();
        assert_eq!(names, vec!["titleTip"]);
    }

    #[test]
    fn from_json_full() {
        let table = LanguageTable::from_json(
            r#"{
                "locale": "de",
                "texts": {"titleMark": "Seitenübersicht"},
                "tips": {"titleTip": "Titel eingeben"},
                "values": {}
            }"#,
        )
        .unwrap();
        assert_eq!(table.locale(), Some("de"));
        assert_eq!(table.text("text:titleMark"), Some("Seitenübersicht"));
        assert_eq!(table.tip("tip:titleTip"), Some("Titel eingeben"));
    }

    #[test]
    fn from_json_partial_defaults() {
        let table = LanguageTable::from_json(r#"{"tips": {"a": "b"}}"#).unwrap();
        assert_eq!(table.locale(), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn from_json_rejects_garbage() {
        let err = LanguageTable::from_json("{not json").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
        assert!(err.to_string().starts_with("language table parse error"));
    }

    #[test]
    fn coverage_report_counts_distinct_marks() {
        let table = site_table();
        let report = table.coverage_report([
            "text:titleMark;tip:titleTip",
            "text:titleMark",
            "tip:unknownMark",
            "value:zeta;text:alpha",
        ]);
        assert_eq!(report.locale.as_deref(), Some("en"));
        assert_eq!(report.total_marks, 5);
        assert_eq!(report.resolved, 2);
        assert_eq!(
            report.missing,
            vec![
                MissingMark {
                    category: Category::Text,
                    name: "alpha".into()
                },
                MissingMark {
                    category: Category::Tip,
                    name: "unknownMark".into()
                },
                MissingMark {
                    category: Category::Value,
                    name: "zeta".into()
                },
            ]
        );
        assert!((report.coverage_percent - 40.0).abs() < 0.01);
    }

    #[test]
    fn coverage_report_empty_input() {
        let report = site_table().coverage_report(std::iter::empty());
        assert_eq!(report.total_marks, 0);
        assert!(report.missing.is_empty());
        assert!((report.coverage_percent - 100.0).abs() < f32::EPSILON);
    }
}
