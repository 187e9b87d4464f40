//! Country domain model and matching operations.
//!
//! This module defines the core `Country` type representing a single record of
//! the loaded dataset, along with the two matching predicates used for
//! filtering and the display formatting for optional fields. Every descriptive
//! field other than `name` may be absent in the source payload and resolves to
//! the [`NO_DATA`] marker when rendered.

use serde::{Deserialize, Serialize};

/// Fallback marker rendered for absent optional fields.
pub const NO_DATA: &str = "No data";

/// A language spoken in a country.
///
/// Only the display name is read; other payload fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
}

/// A currency used in a country.
///
/// Rendered as `"Name (CODE)"` in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Represents one country record of the loaded dataset.
///
/// Records are decoded once from the remote payload and never mutated
/// afterwards. `name` is the only required field; it is the sole field the
/// filter predicates read. All other fields are descriptive and optional,
/// resolved per-field through the [`NO_DATA`] fallback at render time rather
/// than rejecting the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Country display name, also the search and sort key.
    pub name: String,

    /// Capital city, if known.
    #[serde(default)]
    pub capital: Option<String>,

    /// Continental region (e.g. "Europe").
    #[serde(default)]
    pub region: Option<String>,

    /// Subregion (e.g. "Western Europe").
    #[serde(default)]
    pub subregion: Option<String>,

    /// Total population.
    #[serde(default)]
    pub population: Option<u64>,

    /// Land area in square kilometres.
    #[serde(default)]
    pub area: Option<f64>,

    /// URL of the flag image, shown verbatim in the detail view.
    #[serde(default)]
    pub flag: Option<String>,

    /// Spoken languages.
    #[serde(default)]
    pub languages: Option<Vec<Language>>,

    /// Official currencies.
    #[serde(default)]
    pub currencies: Option<Vec<Currency>>,

    /// Timezone identifiers (e.g. "UTC+01:00").
    #[serde(default)]
    pub timezones: Option<Vec<String>>,
}

impl Country {
    /// Returns `true` if the country name contains `query` case-insensitively.
    ///
    /// This is the predicate behind free-text filtering. The empty query
    /// matches every record.
    ///
    /// # Examples
    ///
    /// ```
    /// use zatlas::domain::Country;
    ///
    /// let germany = Country::named("Germany");
    /// assert!(germany.matches_substring("man"));
    /// assert!(germany.matches_substring("GER"));
    /// assert!(germany.matches_substring(""));
    /// assert!(!germany.matches_substring("xyz"));
    /// ```
    #[must_use]
    pub fn matches_substring(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Returns `true` if the first character of the name, ASCII-uppercased,
    /// equals `letter` exactly.
    ///
    /// This is the predicate behind alphabet-letter filtering. It is an exact
    /// first-character comparison, not a substring test: names with a
    /// non-ASCII leading character (e.g. "Åland Islands") match no letter.
    #[must_use]
    pub fn starts_with_letter(&self, letter: char) -> bool {
        self.first_letter() == Some(letter.to_ascii_uppercase())
    }

    /// The first character of the name, ASCII-uppercased.
    #[must_use]
    pub fn first_letter(&self) -> Option<char> {
        self.name.chars().next().map(|c| c.to_ascii_uppercase())
    }

    /// Capital city or the [`NO_DATA`] fallback.
    #[must_use]
    pub fn capital_display(&self) -> String {
        self.capital.clone().unwrap_or_else(|| NO_DATA.to_string())
    }

    /// Region or the [`NO_DATA`] fallback.
    #[must_use]
    pub fn region_display(&self) -> String {
        self.region.clone().unwrap_or_else(|| NO_DATA.to_string())
    }

    /// Subregion or the [`NO_DATA`] fallback.
    #[must_use]
    pub fn subregion_display(&self) -> String {
        self.subregion.clone().unwrap_or_else(|| NO_DATA.to_string())
    }

    /// Population with thousands separators, or the [`NO_DATA`] fallback.
    #[must_use]
    pub fn population_display(&self) -> String {
        self.population
            .map_or_else(|| NO_DATA.to_string(), group_thousands)
    }

    /// Area as `"{n} km²"` with thousands separators, or the [`NO_DATA`]
    /// fallback.
    #[must_use]
    pub fn area_display(&self) -> String {
        self.area
            .map_or_else(|| NO_DATA.to_string(), |a| format!("{} km²", format_area(a)))
    }

    /// Language names joined by `", "`, or the [`NO_DATA`] fallback.
    ///
    /// An absent or empty list both resolve to the fallback.
    #[must_use]
    pub fn languages_display(&self) -> String {
        match self.languages.as_deref() {
            Some(languages) if !languages.is_empty() => languages
                .iter()
                .map(|l| l.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            _ => NO_DATA.to_string(),
        }
    }

    /// Currencies as `"Name (CODE)"` joined by `", "`, or the [`NO_DATA`]
    /// fallback.
    #[must_use]
    pub fn currencies_display(&self) -> String {
        match self.currencies.as_deref() {
            Some(currencies) if !currencies.is_empty() => currencies
                .iter()
                .map(|c| {
                    let name = c.name.as_deref().unwrap_or(NO_DATA);
                    match c.code.as_deref() {
                        Some(code) => format!("{name} ({code})"),
                        None => name.to_string(),
                    }
                })
                .collect::<Vec<_>>()
                .join(", "),
            _ => NO_DATA.to_string(),
        }
    }

    /// Timezones joined by `", "`, or the [`NO_DATA`] fallback.
    #[must_use]
    pub fn timezones_display(&self) -> String {
        match self.timezones.as_deref() {
            Some(timezones) if !timezones.is_empty() => timezones.join(", "),
            _ => NO_DATA.to_string(),
        }
    }

    /// Flag URL or the [`NO_DATA`] fallback.
    #[must_use]
    pub fn flag_display(&self) -> String {
        self.flag.clone().unwrap_or_else(|| NO_DATA.to_string())
    }

    /// Creates a record with only the name set. Primarily useful in tests and
    /// doc examples.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capital: None,
            region: None,
            subregion: None,
            population: None,
            area: None,
            flag: None,
            languages: None,
            currencies: None,
            timezones: None,
        }
    }
}

/// Formats an integer with `,` thousands separators (e.g. `83240000` →
/// `"83,240,000"`).
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats an area value: integer part grouped, one decimal kept when the
/// value is fractional.
fn format_area(area: f64) -> String {
    let area = area.max(0.0);
    let int_part = group_thousands(area.trunc() as u64);
    let tenth = ((area.fract() * 10.0).round() as u64).min(9);
    if tenth == 0 {
        int_part
    } else {
        format!("{int_part}.{tenth}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Vec<Country> {
        vec![
            Country::named("Germany"),
            Country::named("Ghana"),
            Country::named("France"),
        ]
    }

    #[test]
    fn substring_match_is_case_insensitive_containment() {
        let matched: Vec<_> = dataset()
            .into_iter()
            .filter(|c| c.matches_substring("g"))
            .map(|c| c.name)
            .collect();
        assert_eq!(matched, vec!["Germany", "Ghana"]);
    }

    #[test]
    fn empty_query_matches_every_record() {
        assert!(dataset().iter().all(|c| c.matches_substring("")));
    }

    #[test]
    fn prefix_match_compares_first_character_exactly() {
        assert!(Country::named("France").starts_with_letter('F'));
        assert!(Country::named("france").starts_with_letter('F'));
        // Substring hit but not a prefix hit.
        assert!(!Country::named("Afghanistan").starts_with_letter('F'));
    }

    #[test]
    fn non_ascii_leading_character_matches_no_letter() {
        let aland = Country::named("Åland Islands");
        assert!(('A'..='Z').all(|l| !aland.starts_with_letter(l)));
    }

    #[test]
    fn missing_capital_renders_fallback() {
        let record = Country::named("Atlantis");
        assert_eq!(record.capital_display(), NO_DATA);
        assert_eq!(record.population_display(), NO_DATA);
        assert_eq!(record.languages_display(), NO_DATA);
    }

    #[test]
    fn present_fields_render_values() {
        let mut record = Country::named("Germany");
        record.capital = Some("Berlin".to_string());
        record.population = Some(83_240_000);
        record.area = Some(357_022.0);
        record.currencies = Some(vec![Currency {
            code: Some("EUR".to_string()),
            name: Some("Euro".to_string()),
        }]);
        assert_eq!(record.capital_display(), "Berlin");
        assert_eq!(record.population_display(), "83,240,000");
        assert_eq!(record.area_display(), "357,022 km²");
        assert_eq!(record.currencies_display(), "Euro (EUR)");
    }

    #[test]
    fn empty_language_list_renders_fallback() {
        let mut record = Country::named("Nowhere");
        record.languages = Some(vec![]);
        assert_eq!(record.languages_display(), NO_DATA);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(647_500), "647,500");
        assert_eq!(group_thousands(1_234_567_890), "1,234,567,890");
    }

    #[test]
    fn optional_fields_survive_deserialization() {
        let payload = r#"{"name":"Germany","capital":"Berlin","population":83240000}"#;
        let record: Country = serde_json::from_str(payload).expect("valid record");
        assert_eq!(record.name, "Germany");
        assert_eq!(record.capital.as_deref(), Some("Berlin"));
        assert!(record.region.is_none());
        assert!(record.timezones.is_none());
    }
}
