//! CLDR plural rules for locale-aware agreement of number words.
//!
//! Implements the subset of the Unicode CLDR cardinal rules needed by the
//! supported languages, which only distinguish `one` from `other`. Each
//! [`PluralRule`] maps an integer count to a [`PluralCategory`]; a
//! [`PluralForms`] table then supplies the word.
//!
//! # Invariants
//!
//! 1. Every `PluralRule` maps any `i64` to exactly one `PluralCategory`.
//! 2. The `Other` category is always the catch-all fallback.
//! 3. Rules are pure functions: same count always yields same category.

use core::fmt;

use crate::locale::Lang;

/// CLDR plural categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    One,
    Other,
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "one"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Singular and plural spelling of a word, usable in `static` tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralForms {
    pub one: &'static str,
    pub other: &'static str,
}

impl PluralForms {
    /// Build forms with distinct singular and plural spellings.
    #[must_use]
    pub const fn new(one: &'static str, other: &'static str) -> Self {
        Self { one, other }
    }

    /// Build forms for an invariable word (e.g. French "tiers").
    #[must_use]
    pub const fn invariable(word: &'static str) -> Self {
        Self {
            one: word,
            other: word,
        }
    }

    /// Select the appropriate form for the given category.
    #[must_use]
    pub fn select(&self, category: PluralCategory) -> &'static str {
        match category {
            PluralCategory::One => self.one,
            PluralCategory::Other => self.other,
        }
    }

    /// Select the form agreeing with `count` under `rule`.
    #[must_use]
    pub fn for_count(&self, rule: &PluralRule, count: i64) -> &'static str {
        self.select(rule.categorize(count))
    }
}

/// Maps a count to a plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// English-like: `one` for 1, `other` for everything else.
    English,
    /// French-like: `one` for 0-1, `other` for everything else.
    French,
}

impl PluralRule {
    /// Determine the plural category for the given count.
    #[must_use]
    pub fn categorize(&self, count: i64) -> PluralCategory {
        let n = count.unsigned_abs();
        match self {
            Self::English => english_rule(n),
            Self::French => french_rule(n),
        }
    }

    /// The built-in rule for a supported language.
    #[must_use]
    pub fn for_lang(lang: Lang) -> Self {
        match lang {
            Lang::English => Self::English,
            Lang::French => Self::French,
        }
    }
}

// ── Rule implementations ────────────────────────────────────────────

fn english_rule(n: u64) -> PluralCategory {
    if n == 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn french_rule(n: u64) -> PluralCategory {
    if n <= 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}
