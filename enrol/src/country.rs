//! Country options for the country selector.

use serde::Serialize;

/// One selectable country: a stable value code plus a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryOption {
    /// ISO 3166-1 alpha-2 code, stored in drafts and records.
    pub value: &'static str,
    /// Label shown in the selector.
    pub label: &'static str,
}

/// The option list the form offers, alphabetical by label.
pub const COUNTRY_OPTIONS: &[CountryOption] = &[
    CountryOption { value: "AR", label: "Argentina" },
    CountryOption { value: "AU", label: "Australia" },
    CountryOption { value: "AT", label: "Austria" },
    CountryOption { value: "BE", label: "Belgium" },
    CountryOption { value: "BR", label: "Brazil" },
    CountryOption { value: "CA", label: "Canada" },
    CountryOption { value: "CL", label: "Chile" },
    CountryOption { value: "CN", label: "China" },
    CountryOption { value: "CZ", label: "Czechia" },
    CountryOption { value: "DK", label: "Denmark" },
    CountryOption { value: "EG", label: "Egypt" },
    CountryOption { value: "FI", label: "Finland" },
    CountryOption { value: "FR", label: "France" },
    CountryOption { value: "DE", label: "Germany" },
    CountryOption { value: "GR", label: "Greece" },
    CountryOption { value: "IN", label: "India" },
    CountryOption { value: "ID", label: "Indonesia" },
    CountryOption { value: "IE", label: "Ireland" },
    CountryOption { value: "IT", label: "Italy" },
    CountryOption { value: "JP", label: "Japan" },
    CountryOption { value: "KE", label: "Kenya" },
    CountryOption { value: "MX", label: "Mexico" },
    CountryOption { value: "NL", label: "Netherlands" },
    CountryOption { value: "NZ", label: "New Zealand" },
    CountryOption { value: "NG", label: "Nigeria" },
    CountryOption { value: "NO", label: "Norway" },
    CountryOption { value: "PL", label: "Poland" },
    CountryOption { value: "PT", label: "Portugal" },
    CountryOption { value: "SG", label: "Singapore" },
    CountryOption { value: "ZA", label: "South Africa" },
    CountryOption { value: "KR", label: "South Korea" },
    CountryOption { value: "ES", label: "Spain" },
    CountryOption { value: "SE", label: "Sweden" },
    CountryOption { value: "CH", label: "Switzerland" },
    CountryOption { value: "GB", label: "United Kingdom" },
    CountryOption { value: "US", label: "United States" },
];

/// Looks up an option by its value code.
pub fn find_country(value: &str) -> Option<&'static CountryOption> {
    COUNTRY_OPTIONS.iter().find(|c| c.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_country_by_code() {
        let us = find_country("US").unwrap();
        assert_eq!(us.label, "United States");
        assert!(find_country("XX").is_none());
    }

    #[test]
    fn test_options_sorted_by_label() {
        let mut labels: Vec<&str> = COUNTRY_OPTIONS.iter().map(|c| c.label).collect();
        labels.sort_unstable();
        let original: Vec<&str> = COUNTRY_OPTIONS.iter().map(|c| c.label).collect();
        assert_eq!(labels, original);
    }
}
