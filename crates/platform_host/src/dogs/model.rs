//! Dog profile records served as static JSON documents.

use serde::{Deserialize, Serialize};

/// One show placement listed on a dog profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowResult {
    /// Show or event name.
    pub show: String,
    /// Placement or title earned.
    pub achievement: String,
}

/// Breeding availability block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedingInfo {
    /// Whether the dog is currently available for breeding.
    pub available: bool,
    /// Number of previous litters.
    pub previous_litters: u32,
}

/// Dog profile record fetched from `/dogs/{name}.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogProfile {
    /// Registered call name.
    pub name: String,
    /// Breed label.
    pub breed: String,
    /// Date of birth as authored in the record.
    pub date_of_birth: String,
    /// Kennel club registration number.
    pub registration: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Coat colour.
    pub color: String,
    /// Weight in kilograms.
    pub weight: f64,
    /// Height in centimetres.
    pub height: f64,
    /// Completed health screenings.
    #[serde(default)]
    pub health_tests: Vec<String>,
    /// Whether vaccinations are current.
    pub vaccinations_up_to_date: bool,
    /// Show placements.
    #[serde(default)]
    pub show_results: Vec<ShowResult>,
    /// Completed DNA panels.
    #[serde(default)]
    pub dna_tests: Vec<String>,
    /// Optional breeding block.
    #[serde(default)]
    pub breeding: Option<BreedingInfo>,
}

impl DogProfile {
    /// Returns the description or the placeholder shown when none was authored.
    pub fn description_or_placeholder(&self) -> &str {
        self.description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or("No description available.")
    }
}

/// Builds the static document URL for a dog record slug.
pub fn dog_profile_url(slug: &str) -> String {
    format!("/dogs/{slug}.json")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn camel_case_record_deserializes_with_optional_blocks_missing() {
        let raw = r#"{
            "name": "Example",
            "breed": "Border Collie",
            "dateOfBirth": "2021-04-02",
            "registration": "KC-0042",
            "color": "Black & White",
            "weight": 19.5,
            "height": 53,
            "healthTests": ["Hips", "Eyes"],
            "vaccinationsUpToDate": true,
            "showResults": [{ "show": "Crufts 2023", "achievement": "Best of Breed" }],
            "dnaTests": ["CEA"]
        }"#;

        let profile: DogProfile = serde_json::from_str(raw).expect("parse profile");
        assert_eq!(profile.date_of_birth, "2021-04-02");
        assert_eq!(profile.show_results.len(), 1);
        assert_eq!(profile.breeding, None);
        assert_eq!(profile.description_or_placeholder(), "No description available.");
    }

    #[test]
    fn profile_url_uses_dogs_directory() {
        assert_eq!(dog_profile_url("dogB"), "/dogs/dogB.json");
    }
}
