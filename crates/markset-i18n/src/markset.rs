//! Markset grammar: the marker attribute mini-language.
//!
//! A markset names the language-table keys ("marks") an element draws its
//! localized strings from:
//!
//! ```text
//! markset  := ( pair ( ';' pair )* )?
//! pair     := category ':' name
//! category := "text" | "tip" | "value"
//! ```
//!
//! # Invariants
//!
//! 1. **Canonical output**: [`Markset`] always renders pairs in
//!    `text, tip, value` order with no trailing separator.
//! 2. **Empty is absent**: an empty markset builds to `None`, never `""`.
//!    An empty mark name, or one containing `:` or `;`, is treated as a
//!    missing mark so it can never corrupt the pairs around it.
//! 3. **Lenient lookup never fails**: [`extract_mark`] returns `None` for any
//!    input it cannot interpret.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Too few tokens | `""`, `"text"` | `extract_mark` → `None` |
//! | Odd token count | `"text:a;tip"`, trailing `;` | `extract_mark` → `None` for every category |
//! | Duplicate category | `"tip:a;tip:b"` | lenient: first wins; strict: [`MarksetError::DuplicateCategory`] |
//! | Unknown category | `"label:a"` | lenient: ignored; strict: [`MarksetError::UnknownCategory`] |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const SEPARATORS: [char; 2] = [':', ';'];

/// Kind of localized attribute a mark supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Rendered content of the element.
    Text,
    /// Tooltip attached to the element.
    Tip,
    /// Value of an input element.
    Value,
}

impl Category {
    /// Every category, in canonical build order.
    pub const ALL: [Category; 3] = [Category::Text, Category::Tip, Category::Value];

    /// The category keyword as it appears in a markset.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Tip => "tip",
            Self::Value => "value",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = MarksetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "tip" => Ok(Self::Tip),
            "value" => Ok(Self::Value),
            other => Err(MarksetError::UnknownCategory(other.to_string())),
        }
    }
}

/// Errors from strict markset parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarksetError {
    /// A pair was not of the form `category:name`.
    Malformed(String),
    /// A category keyword outside `{text, tip, value}`.
    UnknownCategory(String),
    /// The same category appeared more than once.
    DuplicateCategory(Category),
}

impl fmt::Display for MarksetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(pair) => write!(f, "malformed markset pair: '{pair}'"),
            Self::UnknownCategory(c) => write!(f, "unknown markset category: '{c}'"),
            Self::DuplicateCategory(c) => write!(f, "duplicate markset category: '{c}'"),
        }
    }
}

impl std::error::Error for MarksetError {}

/// Look up the mark name for `category` in a raw markset string.
///
/// Splits on `:` and `;`, then walks the tokens as `(category, name)` pairs.
/// The first matching pair wins. Inputs with fewer than two tokens, or an odd
/// number of tokens, carry no marks at all.
#[must_use]
pub fn extract_mark(markset: &str, category: Category) -> Option<&str> {
    let tokens: Vec<&str> = markset.split(SEPARATORS).collect();
    if tokens.len() < 2 || tokens.len() % 2 != 0 {
        return None;
    }
    tokens
        .chunks_exact(2)
        .find(|pair| pair[0] == category.as_str())
        .map(|pair| pair[1])
        .filter(|name| !name.is_empty())
}

/// Build a markset string from up to three mark names.
///
/// Returns `None` when every name is absent.
///
/// ```
/// use markset_i18n::build_markset;
///
/// assert_eq!(
///     build_markset(Some("titleMark"), None, Some("titleValue")),
///     Some("text:titleMark;value:titleValue".into())
/// );
/// assert_eq!(build_markset(None, None, None), None);
/// ```
#[must_use]
pub fn build_markset(text: Option<&str>, tip: Option<&str>, value: Option<&str>) -> Option<String> {
    Markset::new(text, tip, value).build()
}

/// Rewrite the marks of an existing markset.
///
/// `modifier` is called exactly three times, in `text, tip, value` order,
/// with the current name (or `None`) and returns the replacement name (or
/// `None` to drop the mark). The result is rebuilt with [`build_markset`].
#[must_use]
pub fn modify_markset<F>(markset: &str, modifier: F) -> Option<String>
where
    F: FnMut(Category, Option<&str>) -> Option<String>,
{
    Markset::parse(markset).modify(modifier).build()
}

/// Typed markset: one optional mark name per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markset {
    text: Option<String>,
    tip: Option<String>,
    value: Option<String>,
}

impl Markset {
    /// Create a markset from optional names. Empty names, and names
    /// containing a separator, are dropped.
    #[must_use]
    pub fn new(text: Option<&str>, tip: Option<&str>, value: Option<&str>) -> Self {
        let mut markset = Self::default();
        markset.set(Category::Text, text.map(String::from));
        markset.set(Category::Tip, tip.map(String::from));
        markset.set(Category::Value, value.map(String::from));
        markset
    }

    /// Lenient parse: never fails, first match wins, garbage yields no marks.
    #[must_use]
    pub fn parse(markset: &str) -> Self {
        Self::new(
            extract_mark(markset, Category::Text),
            extract_mark(markset, Category::Tip),
            extract_mark(markset, Category::Value),
        )
    }

    /// Set the text mark.
    #[must_use]
    pub fn with_text(mut self, name: impl Into<String>) -> Self {
        self.set(Category::Text, Some(name.into()));
        self
    }

    /// Set the tip mark.
    #[must_use]
    pub fn with_tip(mut self, name: impl Into<String>) -> Self {
        self.set(Category::Tip, Some(name.into()));
        self
    }

    /// Set the value mark.
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>) -> Self {
        self.set(Category::Value, Some(name.into()));
        self
    }

    /// Mark name for a category.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&str> {
        self.slot(category).as_deref()
    }

    /// Replace (or clear, with `None`) the mark for a category.
    ///
    /// Names that are empty or contain a separator (`:` or `;`) cannot be
    /// written back into a markset and are dropped.
    pub fn set(&mut self, category: Category, name: Option<String>) {
        let slot = match category {
            Category::Text => &mut self.text,
            Category::Tip => &mut self.tip,
            Category::Value => &mut self.value,
        };
        *slot = name.filter(|n| !n.is_empty() && !n.contains(SEPARATORS));
    }

    /// Whether no category carries a mark.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|&c| self.get(c).is_none())
    }

    /// Present `(category, name)` pairs in canonical order.
    pub fn marks(&self) -> impl Iterator<Item = (Category, &str)> {
        Category::ALL
            .into_iter()
            .filter_map(|c| self.get(c).map(|name| (c, name)))
    }

    /// Apply `modifier` to every category in canonical order.
    #[must_use]
    pub fn modify<F>(&self, mut modifier: F) -> Self
    where
        F: FnMut(Category, Option<&str>) -> Option<String>,
    {
        let mut next = Self::default();
        for category in Category::ALL {
            next.set(category, modifier(category, self.get(category)));
        }
        next
    }

    /// Canonical string form, or `None` for an empty markset.
    #[must_use]
    pub fn build(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }

    fn slot(&self, category: Category) -> &Option<String> {
        match category {
            Category::Text => &self.text,
            Category::Tip => &self.tip,
            Category::Value => &self.value,
        }
    }
}

impl fmt::Display for Markset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (category, name)) in self.marks().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{category}:{name}")?;
        }
        Ok(())
    }
}

/// Strict parse. The empty string is the empty markset.
impl FromStr for Markset {
    type Err = MarksetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut markset = Self::default();
        if s.is_empty() {
            return Ok(markset);
        }
        for pair in s.split(';') {
            let (category, name) = pair
                .split_once(':')
                .filter(|(_, name)| !name.is_empty() && !name.contains(':'))
                .ok_or_else(|| MarksetError::Malformed(pair.to_string()))?;
            let category: Category = category.parse()?;
            if markset.get(category).is_some() {
                return Err(MarksetError::DuplicateCategory(category));
            }
            markset.set(category, Some(name.to_string()));
        }
        Ok(markset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extract_each_category() {
        let m = "text:titleMark;tip:titleTip;value:titleValue";
        assert_eq!(extract_mark(m, Category::Text), Some("titleMark"));
        assert_eq!(extract_mark(m, Category::Tip), Some("titleTip"));
        assert_eq!(extract_mark(m, Category::Value), Some("titleValue"));
    }

    #[test]
    fn extract_order_insignificant() {
        let m = "value:v;text:t";
        assert_eq!(extract_mark(m, Category::Text), Some("t"));
        assert_eq!(extract_mark(m, Category::Value), Some("v"));
        assert_eq!(extract_mark(m, Category::Tip), None);
    }

    #[test]
    fn extract_too_few_tokens() {
        assert_eq!(extract_mark("", Category::Text), None);
        assert_eq!(extract_mark("text", Category::Text), None);
    }

    #[test]
    fn extract_odd_token_count() {
        // A dangling token poisons the whole markset.
        assert_eq!(extract_mark("text:a;tip", Category::Text), None);
        assert_eq!(extract_mark("text:a;", Category::Text), None);
    }

    #[test]
    fn extract_duplicate_first_wins() {
        assert_eq!(extract_mark("tip:first;tip:second", Category::Tip), Some("first"));
    }

    #[test]
    fn extract_unknown_category_ignored() {
        let m = "label:x;text:y";
        assert_eq!(extract_mark(m, Category::Text), Some("y"));
    }

    #[test]
    fn extract_empty_name_is_absent() {
        assert_eq!(extract_mark("text:", Category::Text), None);
    }

    #[test]
    fn build_canonical_order() {
        assert_eq!(
            build_markset(Some("a"), Some("b"), Some("c")),
            Some("text:a;tip:b;value:c".into())
        );
        assert_eq!(build_markset(None, Some("b"), None), Some("tip:b".into()));
    }

    #[test]
    fn build_all_absent_is_none() {
        assert_eq!(build_markset(None, None, None), None);
        assert_eq!(build_markset(Some(""), None, Some("")), None);
    }

    #[test]
    fn build_drops_names_with_separators() {
        let built = build_markset(Some("a;b"), Some("t"), Some("x:y"));
        assert_eq!(built, Some("tip:t".into()));
        assert_eq!(extract_mark("tip:t", Category::Tip), Some("t"));
        assert_eq!(build_markset(Some("a;b"), None, None), None);
    }

    #[test]
    fn modify_cannot_inject_separators() {
        let out = modify_markset("text:a;tip:t", |category, name| match category {
            Category::Text => Some("a;value:evil".into()),
            _ => name.map(String::from),
        });
        assert_eq!(out, Some("tip:t".into()));
    }

    #[test]
    fn modify_calls_in_order_with_absent() {
        let mut calls = Vec::new();
        let out = modify_markset("tip:t", |category, name| {
            calls.push((category, name.map(String::from)));
            name.map(String::from)
        });
        assert_eq!(
            calls,
            vec![
                (Category::Text, None),
                (Category::Tip, Some("t".to_string())),
                (Category::Value, None),
            ]
        );
        assert_eq!(out, Some("tip:t".into()));
    }

    #[test]
    fn modify_rename_and_drop() {
        let out = modify_markset("text:a;tip:b", |category, name| match category {
            Category::Text => name.map(|n| format!("{n}Renamed")),
            Category::Tip => None,
            Category::Value => Some("added".into()),
        });
        assert_eq!(out, Some("text:aRenamed;value:added".into()));
    }

    #[test]
    fn modify_to_nothing_is_none() {
        assert_eq!(modify_markset("text:a", |_, _| None), None);
    }

    #[test]
    fn strict_parse_valid() {
        let m: Markset = "tip:b;text:a".parse().unwrap();
        assert_eq!(m, Markset::default().with_text("a").with_tip("b"));
        assert_eq!(m.to_string(), "text:a;tip:b");
    }

    #[test]
    fn strict_parse_empty() {
        let m: Markset = "".parse().unwrap();
        assert!(m.is_empty());
        assert_eq!(m.build(), None);
    }

    #[test]
    fn strict_parse_errors() {
        assert_eq!(
            "tip:a;tip:b".parse::<Markset>(),
            Err(MarksetError::DuplicateCategory(Category::Tip))
        );
        assert_eq!(
            "label:a".parse::<Markset>(),
            Err(MarksetError::UnknownCategory("label".into()))
        );
        assert_eq!(
            "text:a;".parse::<Markset>(),
            Err(MarksetError::Malformed(String::new()))
        );
        assert_eq!(
            "text".parse::<Markset>(),
            Err(MarksetError::Malformed("text".into()))
        );
    }

    #[test]
    fn lenient_parse_matches_extract() {
        let m = Markset::parse("value:v;tip:t;tip:ignored");
        assert_eq!(m.get(Category::Tip), Some("t"));
        assert_eq!(m.get(Category::Value), Some("v"));
        assert_eq!(m.get(Category::Text), None);
    }

    #[test]
    fn marks_iterates_present_pairs() {
        let m = Markset::new(Some("a"), None, Some("c"));
        let pairs: Vec<_> = m.marks().collect();
        assert_eq!(pairs, vec![(Category::Text, "a"), (Category::Value, "c")]);
    }

    #[test]
    fn category_round_trips_keyword() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }
}
