use serde::{Deserialize, Serialize};

/// Settlement kind of a recommended destination, as emitted by the
/// upstream text generator. `beach` is not in the generator's prompt
/// vocabulary but shows up in practice, so it is accepted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementType {
    #[default]
    City,
    Town,
    Village,
    Resort,
    Island,
    Beach,
}

/// Category of a trip activity recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActivityCategory {
    Dining,
    Sightseeing,
    #[default]
    Activities,
    Shopping,
    Culture,
    Nature,
    Entertainment,
}

/// A destination recommendation produced by the upstream text generator.
///
/// The non-image fields are carried through enrichment untouched; they
/// mirror what the persistence layer stores. The four discrete image
/// slots are populated by the enrichment pipeline in order, leaving any
/// remainder `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationRecommendation {
    pub name: String,
    pub location: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub settlement_type: SettlementType,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub budget_category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image2: Option<String>,
    #[serde(default)]
    pub image3: Option<String>,
    #[serde(default)]
    pub image4: Option<String>,
}

impl DestinationRecommendation {
    /// Number of image slots currently filled.
    #[must_use]
    pub const fn image_count(&self) -> usize {
        self.image.is_some() as usize
            + self.image2.is_some() as usize
            + self.image3.is_some() as usize
            + self.image4.is_some() as usize
    }
}

/// A trip activity recommendation. The image list and cover image are
/// populated by the enrichment pipeline; `coverImage` keeps its camelCase
/// wire name for the frontend contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecommendation {
    pub title: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub category: ActivityCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, rename = "coverImage")]
    pub cover_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_deserializes_with_missing_optional_fields() {
        let rec: DestinationRecommendation = serde_json::from_str(
            r#"{"name": "Paris", "location": "France", "title": "Paris, France"}"#,
        )
        .unwrap();

        assert_eq!(rec.settlement_type, SettlementType::City);
        assert_eq!(rec.image_count(), 0);
        assert!(rec.tags.is_empty());
    }

    #[test]
    fn settlement_type_uses_lowercase_wire_names() {
        let rec: DestinationRecommendation = serde_json::from_str(
            r#"{"name": "Bali", "location": "Indonesia", "title": "Bali, Indonesia",
                "settlement_type": "island"}"#,
        )
        .unwrap();

        assert_eq!(rec.settlement_type, SettlementType::Island);
    }

    #[test]
    fn activity_cover_image_round_trips_as_camel_case() {
        let act = ActivityRecommendation {
            title: "Eiffel Tower".to_string(),
            destination: "Paris, France".to_string(),
            category: ActivityCategory::Sightseeing,
            description: String::new(),
            images: vec!["u1".to_string()],
            cover_image: Some("u1".to_string()),
        };

        let json = serde_json::to_value(&act).unwrap();
        assert_eq!(json["coverImage"], "u1");
        assert_eq!(json["category"], "Sightseeing");

        let back: ActivityRecommendation = serde_json::from_value(json).unwrap();
        assert_eq!(back.cover_image.as_deref(), Some("u1"));
    }

    #[test]
    fn image_count_tracks_filled_slots() {
        let mut rec: DestinationRecommendation = serde_json::from_str(
            r#"{"name": "Tokyo", "location": "Japan", "title": "Tokyo, Japan"}"#,
        )
        .unwrap();

        rec.image = Some("u1".to_string());
        rec.image2 = Some("u2".to_string());
        assert_eq!(rec.image_count(), 2);
    }
}
