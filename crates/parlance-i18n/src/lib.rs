#![forbid(unsafe_code)]

//! Internationalization (i18n) foundation for Parlance.
//!
//! Provides the supported language identifiers and CLDR plural rules
//! used by the number and time verbalizers.
//!
//! # Role in Parlance
//! `parlance-i18n` isolates locale identity and plural agreement so the
//! formatting engines in `parlance` stay table-driven: an engine asks which
//! [`PluralCategory`] a count falls into and picks the matching word from
//! its own [`PluralForms`] table.
//!
//! # How it fits in the system
//! The crate has no knowledge of number words. It is a leaf dependency of
//! `parlance`, keeping language parsing reusable and testable on its own.

pub mod locale;
pub mod plural;

pub use locale::{I18nError, Lang};
pub use plural::{PluralCategory, PluralForms, PluralRule};
