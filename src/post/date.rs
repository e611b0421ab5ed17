use chrono::{DateTime, Utc};

use crate::config::locale::DateLocale;

/// Day of month, abbreviated month, four digit year.
pub const DATE_FORMAT: &str = "%d %b %Y";

/// The one place publication dates become display strings.
///
/// Both the listing (initial and merged pages) and the post page go through
/// here at render time, the view model keeps the raw timestamp. A post that
/// was never published renders as an empty string.
pub fn format_publication_date(timestamp: Option<&DateTime<Utc>>, locale: DateLocale) -> String {
    timestamp
        .map(|date| {
            date.format_localized(DATE_FORMAT, locale.locale())
                .to_string()
        })
        .unwrap_or_default()
}
