/// Data model for the in-progress hazard report
///
/// These structs represent the draft that flows between the form store,
/// the validator, the submission workflow, and the UI layer.

use serde::Serialize;

/// Location text written by the geolocation path instead of a real address.
/// Manual edits to the location field replace it like any other text.
pub const GEOLOCATED_SENTINEL: &str = "Current location detected";

/// Severity scale bounds (inclusive)
pub const SEVERITY_MIN: u8 = 1;
pub const SEVERITY_MAX: u8 = 5;

/// Default severity for a fresh draft (middle of the scale)
pub const SEVERITY_DEFAULT: u8 = 3;

/// Severity at or above this level shows the high-severity advisory banner
pub const SEVERITY_ADVISORY: u8 = 4;

/// Media types the intake layer accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Png,
    Jpeg,
}

impl MediaType {
    /// MIME string, used in the submission payload
    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Png => "image/png",
            MediaType::Jpeg => "image/jpeg",
        }
    }
}

/// The selected photo: raw bytes plus the media type detected from them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HazardImage {
    pub bytes: Vec<u8>,
    pub media_type: MediaType,
}

/// Renderable representation derived from a successfully decoded image.
/// Always regenerated from the image bytes, never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePreview {
    pub width: u32,
    pub height: u32,
}

/// A (latitude, longitude) pair from the geolocation adapter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Fixed set of hazard kinds a report can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    RoadDamage,
    Electrical,
    Water,
    Structural,
    Debris,
    Lighting,
    Signage,
    Vegetation,
    Other,
}

impl Category {
    /// Every category, in the order the form lists them
    pub const ALL: [Category; 9] = [
        Category::RoadDamage,
        Category::Electrical,
        Category::Water,
        Category::Structural,
        Category::Debris,
        Category::Lighting,
        Category::Signage,
        Category::Vegetation,
        Category::Other,
    ];

    /// Stable identifier used in the submission payload
    pub fn value(&self) -> &'static str {
        match self {
            Category::RoadDamage => "road_damage",
            Category::Electrical => "electrical",
            Category::Water => "water",
            Category::Structural => "structural",
            Category::Debris => "debris",
            Category::Lighting => "lighting",
            Category::Signage => "signage",
            Category::Vegetation => "vegetation",
            Category::Other => "other",
        }
    }

    /// Human-readable label shown in the category picker
    pub fn label(&self) -> &'static str {
        match self {
            Category::RoadDamage => "Road Damage (Potholes, Cracks)",
            Category::Electrical => "Electrical Hazard (Exposed Wires, Damaged Poles)",
            Category::Water => "Water Issues (Leaks, Flooding)",
            Category::Structural => "Structural Problems (Building Damage, Bridges)",
            Category::Debris => "Debris or Obstruction",
            Category::Lighting => "Lighting Issues (Street Lights Out)",
            Category::Signage => "Missing or Damaged Signs",
            Category::Vegetation => "Overgrown Vegetation",
            Category::Other => "Other Hazard",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The in-progress, not-yet-submitted hazard report.
///
/// Owned exclusively by the form store; one live instance per session.
/// Invariant: `preview` is present iff `image` is present — the store
/// only ever sets or clears the pair together.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftReport {
    pub image: Option<HazardImage>,
    pub preview: Option<ImagePreview>,
    pub description: String,
    pub location_text: String,
    pub coordinates: Option<Coordinates>,
    pub category: Option<Category>,
    pub severity: u8,
}

impl Default for DraftReport {
    fn default() -> Self {
        Self {
            image: None,
            preview: None,
            description: String::new(),
            location_text: String::new(),
            coordinates: None,
            category: None,
            severity: SEVERITY_DEFAULT,
        }
    }
}

impl DraftReport {
    /// Create a fresh empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the severity slider crosses into the advisory band
    pub fn is_high_severity(&self) -> bool {
        self.severity >= SEVERITY_ADVISORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_is_empty() {
        let draft = DraftReport::default();
        assert!(draft.image.is_none());
        assert!(draft.preview.is_none());
        assert!(draft.description.is_empty());
        assert!(draft.location_text.is_empty());
        assert!(draft.coordinates.is_none());
        assert!(draft.category.is_none());
        assert_eq!(draft.severity, SEVERITY_DEFAULT);
    }

    #[test]
    fn test_high_severity_boundary_is_four() {
        let mut draft = DraftReport::default();
        draft.severity = 3;
        assert!(!draft.is_high_severity());
        draft.severity = 4;
        assert!(draft.is_high_severity());
        draft.severity = 5;
        assert!(draft.is_high_severity());
    }

    #[test]
    fn test_category_wire_values() {
        assert_eq!(Category::RoadDamage.value(), "road_damage");
        assert_eq!(Category::Other.value(), "other");
        assert_eq!(Category::ALL.len(), 9);
    }
}
