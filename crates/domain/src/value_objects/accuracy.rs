//! Location accuracy reported alongside an observation's coordinate

use serde::{Deserialize, Serialize};

/// Horizontal accuracy of a location fix and the provider that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAccuracy {
    /// Location source, e.g. "gps", "network", "manual"
    pub provider: String,
    /// Accuracy radius in meters
    pub meters: f64,
}

impl LocationAccuracy {
    pub const MANUAL_PROVIDER: &'static str = "manual";

    pub fn new(provider: impl Into<String>, meters: f64) -> Self {
        Self {
            provider: provider.into(),
            meters,
        }
    }

    /// Whether the location was placed by hand rather than measured.
    pub fn is_manual(&self) -> bool {
        self.provider == Self::MANUAL_PROVIDER
    }

    /// Display text such as `"GPS ± 4.50m"`.
    ///
    /// Manually placed locations have no meaningful accuracy and yield `None`.
    pub fn display_text(&self) -> Option<String> {
        if self.is_manual() {
            return None;
        }
        Some(format!(
            "{} ± {:.2}m",
            display_provider(&self.provider),
            self.meters
        ))
    }
}

/// "gps" is an acronym; every other provider has each word capitalized.
fn display_provider(provider: &str) -> String {
    if provider == "gps" {
        return "GPS".to_string();
    }
    let mut text = String::with_capacity(provider.len());
    let mut word_start = true;
    for c in provider.chars() {
        if c.is_whitespace() {
            text.push(c);
            word_start = true;
        } else if word_start {
            text.extend(c.to_uppercase());
            word_start = false;
        } else {
            text.extend(c.to_lowercase());
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gps_provider_is_upper_cased() {
        let accuracy = LocationAccuracy::new("gps", 4.5);
        assert_eq!(accuracy.display_text().as_deref(), Some("GPS ± 4.50m"));
    }

    #[test]
    fn other_providers_are_capitalized() {
        let accuracy = LocationAccuracy::new("NETWORK", 12.0);
        assert_eq!(accuracy.display_text().as_deref(), Some("Network ± 12.00m"));
    }

    #[test]
    fn every_word_of_a_provider_is_capitalized() {
        let accuracy = LocationAccuracy::new("fused location", 7.25);
        assert_eq!(
            accuracy.display_text().as_deref(),
            Some("Fused Location ± 7.25m")
        );
    }

    #[test]
    fn provider_keywords_are_case_sensitive() {
        assert_eq!(
            LocationAccuracy::new("GPS", 4.5).display_text().as_deref(),
            Some("Gps ± 4.50m")
        );
        let upper_manual = LocationAccuracy::new("Manual", 3.0);
        assert!(!upper_manual.is_manual());
        assert_eq!(upper_manual.display_text().as_deref(), Some("Manual ± 3.00m"));
    }

    #[test]
    fn manual_location_has_no_display() {
        assert_eq!(LocationAccuracy::new("manual", 3.0).display_text(), None);
    }
}
