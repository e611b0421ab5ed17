use std::{fmt, str::FromStr};

use chrono::Locale;

/// A validated `chrono` locale, parsed from names such as `pt_BR` or `en-US`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLocale(Locale);

impl DateLocale {
    pub const fn locale(&self) -> Locale {
        self.0
    }
}

impl Default for DateLocale {
    fn default() -> Self {
        Self(Locale::pt_BR)
    }
}

impl From<Locale> for DateLocale {
    fn from(locale: Locale) -> Self {
        Self(locale)
    }
}

impl FromStr for DateLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.replace('-', "_");
        Locale::try_from(name.as_str())
            .map(Self)
            .map_err(|_| format!("unknown locale `{}`", s))
    }
}

impl fmt::Display for DateLocale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // variant names are the POSIX names (`pt_BR`)
        write!(f, "{:?}", self.0)
    }
}
