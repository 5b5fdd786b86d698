//! Supported languages and language-tag parsing.
//!
//! Tags follow the BCP 47 shape loosely: only the primary language subtag
//! is significant, so `en`, `en-us`, `en_GB` and `EN-AU` all resolve to
//! [`Lang::English`].

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::plural::PluralRule;

/// Errors produced while resolving a language tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    #[error("language tag is empty")]
    EmptyTag,

    #[error("unsupported language: {tag}")]
    UnsupportedLanguage { tag: String },
}

/// A language with a number and time verbalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Lang {
    #[default]
    English,
    French,
}

impl Lang {
    /// Every supported language, in declaration order.
    pub const ALL: [Lang; 2] = [Lang::English, Lang::French];

    /// Canonical lowercase tag (`"en-us"`, `"fr-fr"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en-us",
            Self::French => "fr-fr",
        }
    }

    /// Primary language subtag (`"en"`, `"fr"`).
    #[must_use]
    pub const fn primary(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
        }
    }

    /// Character placed between the integer and fractional digits.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::English => '.',
            Self::French => ',',
        }
    }

    /// Character placed between groups of three integer digits.
    #[must_use]
    pub const fn group_separator(self) -> char {
        match self {
            Self::English => ',',
            Self::French => ' ',
        }
    }

    /// CLDR cardinal plural rule for this language.
    #[must_use]
    pub fn plural_rule(self) -> PluralRule {
        PluralRule::for_lang(self)
    }
}

impl FromStr for Lang {
    type Err = I18nError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(I18nError::EmptyTag);
        }
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        match primary.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::English),
            "fr" => Ok(Self::French),
            _ => Err(I18nError::UnsupportedLanguage {
                tag: tag.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Lang {
    type Error = I18nError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<Lang> for String {
    fn from(lang: Lang) -> Self {
        lang.code().to_string()
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
