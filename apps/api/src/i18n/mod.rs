// Locale selection and translated labels.
// Lookups walk exact locale → parent locale → English → raw key, so they never fail.

pub mod labels;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use labels::Table;

#[derive(Debug, Error, PartialEq)]
#[error("Locale '{0}' is not supported.")]
pub struct UnknownLocale(pub String);

/// Display language for labels and user-facing messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    /// Modern Standard Arabic.
    Ar,
    /// Egyptian Arabic. Only carries dialect overrides; everything else comes from `Ar`.
    Eg,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ar, Locale::Eg];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
            Locale::Eg => "eg",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ar => "العربية",
            Locale::Eg => "مصرّي",
        }
    }

    /// The locale consulted before English when a key is missing.
    pub fn parent(self) -> Option<Locale> {
        match self {
            Locale::Eg => Some(Locale::Ar),
            Locale::En | Locale::Ar => None,
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::Ar | Locale::Eg)
    }

    /// The lookup order for this locale, ending at English.
    fn chain(self) -> impl Iterator<Item = Locale> {
        std::iter::successors(Some(self), |l| l.parent())
            .chain((self != Locale::En).then_some(Locale::En))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            "eg" => Ok(Locale::Eg),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// Parses an optional locale code, defaulting to English when absent.
pub fn parse_or_default(code: Option<&str>) -> Result<Locale, UnknownLocale> {
    code.map_or(Ok(Locale::default()), str::parse)
}

fn resolve(locale: Locale, table: fn(Locale) -> Table, key: &str) -> String {
    locale
        .chain()
        .find_map(|l| {
            table(l)
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        })
        .unwrap_or_else(|| key.to_string())
}

/// Display label for a field. Falls back to the field name itself.
pub fn label(locale: Locale, field: &str) -> String {
    resolve(locale, labels::field_labels, field)
}

/// One-line help text for a field. Falls back to the field name itself.
pub fn help(locale: Locale, field: &str) -> String {
    resolve(locale, labels::field_help, field)
}

/// A user-facing message such as `required_error`.
pub fn message(locale: Locale, key: &str) -> String {
    resolve(locale, labels::messages, key)
}
