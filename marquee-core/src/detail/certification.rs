//! Age-tier labels for provider rating codes.

use std::collections::HashMap;

use crate::providers::RegionReleaseDates;

const DEFAULT_TIERS: &[(&str, &str)] = &[
    // MPA film ratings
    ("G", "0+"),
    ("PG", "10+"),
    ("PG-13", "13+"),
    ("R", "17+"),
    ("NC-17", "18+"),
    ("R+", "17+"),
    ("NR", "Not Rated"),
    ("UR", "Not Rated"),
    // TV parental guidelines
    ("TV-Y", "0+"),
    ("TV-Y7", "7+"),
    ("TV-G", "0+"),
    ("TV-PG", "10+"),
    ("TV-14", "14+"),
    ("TV-MA", "17+"),
];

/// Mapping from raw rating codes to display tiers. Lookups never lose data:
/// a code missing from the table is returned as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationMap {
    tiers: HashMap<String, String>,
}

impl Default for CertificationMap {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_TIERS.iter().copied())
    }
}

impl CertificationMap {
    pub fn empty() -> Self {
        Self {
            tiers: HashMap::new(),
        }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            tiers: pairs
                .into_iter()
                .map(|(code, tier)| (code.into(), tier.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, code: impl Into<String>, tier: impl Into<String>) {
        self.tiers.insert(code.into(), tier.into());
    }

    pub fn tier(&self, code: &str) -> Option<&str> {
        self.tiers.get(code).map(String::as_str)
    }

    pub fn normalize(&self, code: &str) -> String {
        self.tier(code).unwrap_or(code).to_string()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

/// First non-empty rating code recorded for `region`, in upstream order.
///
/// When a region carries several certifications (theatrical and re-release,
/// say) the earliest listed one wins. Codes are returned exactly as the
/// provider sent them, so a whitespace-only code still counts as present.
pub fn select_certification<'a>(
    regions: &'a [RegionReleaseDates],
    region: &str,
) -> Option<&'a str> {
    regions
        .iter()
        .find(|record| record.iso_3166_1 == region)?
        .release_dates
        .iter()
        .filter_map(|entry| entry.certification.as_deref())
        .find(|code| !code.is_empty())
}

/// Select and normalize the certification for `region`.
pub fn resolve_certification(
    regions: &[RegionReleaseDates],
    region: &str,
    map: &CertificationMap,
) -> Option<String> {
    select_certification(regions, region).map(|code| map.normalize(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ReleaseDateEntry;

    fn region(code: &str, certifications: &[&str]) -> RegionReleaseDates {
        RegionReleaseDates {
            iso_3166_1: code.into(),
            release_dates: certifications
                .iter()
                .map(|cert| ReleaseDateEntry::with_certification(cert))
                .collect(),
        }
    }

    #[test]
    fn table_codes_map_to_documented_tiers() {
        let map = CertificationMap::default();
        let expected = [
            ("G", "0+"),
            ("PG", "10+"),
            ("PG-13", "13+"),
            ("R", "17+"),
            ("NC-17", "18+"),
            ("R+", "17+"),
            ("NR", "Not Rated"),
            ("UR", "Not Rated"),
            ("TV-Y", "0+"),
            ("TV-Y7", "7+"),
            ("TV-G", "0+"),
            ("TV-PG", "10+"),
            ("TV-14", "14+"),
            ("TV-MA", "17+"),
        ];
        for (code, tier) in expected {
            assert_eq!(map.normalize(code), tier, "code {code}");
        }
        assert_eq!(map.len(), expected.len());
    }

    #[test]
    fn unknown_codes_pass_through() {
        let map = CertificationMap::default();
        for code in ["FSK 16", "12A", "", "pg-13", "M/PG"] {
            assert_eq!(map.normalize(code), code);
        }
    }

    #[test]
    fn selects_first_non_empty_entry_in_reference_region() {
        let regions = vec![
            region("DE", &["16"]),
            region("US", &["", "PG-13", "R"]),
        ];

        assert_eq!(select_certification(&regions, "US"), Some("PG-13"));
        assert_eq!(
            resolve_certification(
                &regions,
                "US",
                &CertificationMap::default()
            ),
            Some("13+".to_string())
        );
    }

    #[test]
    fn missing_region_or_codes_resolve_to_absent() {
        let regions = vec![region("US", &["", ""]), region("FR", &["U"])];
        let map = CertificationMap::default();

        assert_eq!(resolve_certification(&regions, "US", &map), None);
        assert_eq!(resolve_certification(&regions, "GB", &map), None);
        assert_eq!(resolve_certification(&[], "US", &map), None);
    }

    #[test]
    fn custom_tiers_override_defaults() {
        let mut map = CertificationMap::empty();
        map.insert("12A", "12+");
        assert_eq!(map.normalize("12A"), "12+");
        assert_eq!(map.normalize("R"), "R");
    }

    #[test]
    fn codes_pass_through_untrimmed() {
        let regions = vec![region("US", &["", "  ", "PG-13"])];
        assert_eq!(select_certification(&regions, "US"), Some("  "));

        let padded = vec![region("US", &[" R "])];
        assert_eq!(
            resolve_certification(&padded, "US", &CertificationMap::default()),
            Some(" R ".to_string())
        );
    }
}
