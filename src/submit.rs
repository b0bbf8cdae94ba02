/// Submission collaborator
///
/// Carries a snapshot of every draft field to the backend. The backend
/// here is a stand-in with a fixed delay that always succeeds, but the
/// interface shape — an async call resolving to `Result<(),
/// SubmissionError>` — is what a real transport would keep.

use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::state::draft::{Coordinates, DraftReport};

/// How long the stand-in backend pretends to be talking to a server
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1500);

/// Opaque transport/server failure. The form data stays populated for
/// retry; no automatic retry is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("submission failed: {0}")]
pub struct SubmissionError(String);

impl SubmissionError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Wire snapshot of a draft. The JSON shape is ours to choose; the image
/// bytes travel alongside the metadata rather than inside the JSON log.
#[derive(Debug, Clone, Serialize)]
pub struct ReportPayload {
    pub description: String,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub category: String,
    pub severity: u8,
    pub image_media_type: String,
    pub image_size: usize,
    #[serde(skip)]
    pub image_bytes: Vec<u8>,
    /// Unix timestamp of the submit intent
    pub submitted_at: i64,
}

impl ReportPayload {
    /// Snapshot a draft that already passed validation
    pub fn from_draft(draft: &DraftReport) -> Self {
        let (image_bytes, image_media_type) = match &draft.image {
            Some(image) => (image.bytes.clone(), image.media_type.mime().to_string()),
            None => (Vec::new(), String::new()),
        };

        Self {
            description: draft.description.clone(),
            location: draft.location_text.clone(),
            coordinates: draft.coordinates,
            category: draft
                .category
                .map(|c| c.value().to_string())
                .unwrap_or_default(),
            severity: draft.severity,
            image_size: image_bytes.len(),
            image_media_type,
            image_bytes,
            submitted_at: Utc::now().timestamp(),
        }
    }

    /// JSON form of the metadata, for diagnostics logging
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// The stand-in backend: a fixed delay, then success
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self {
            delay: SIMULATED_DELAY,
        }
    }
}

impl SimulatedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend with a custom delay (used by tests)
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Accept a report. Suspends for the configured delay, then succeeds.
    pub async fn submit(&self, payload: ReportPayload) -> Result<(), SubmissionError> {
        match payload.to_json() {
            Ok(json) => println!("📤 Submitting report: {json}"),
            Err(e) => eprintln!("⚠️  Could not log payload: {e}"),
        }

        tokio::time::sleep(self.delay).await;

        println!("✅ Report accepted ({} image bytes)", payload.image_size);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::draft::{Category, HazardImage, ImagePreview, MediaType};

    fn ready_draft() -> DraftReport {
        let mut draft = DraftReport::default();
        draft.image = Some(HazardImage {
            bytes: vec![7u8; 10],
            media_type: MediaType::Jpeg,
        });
        draft.preview = Some(ImagePreview {
            width: 1,
            height: 1,
        });
        draft.description = "cracked slab".to_string();
        draft.location_text = "5th and Main".to_string();
        draft.category = Some(Category::RoadDamage);
        draft.severity = 4;
        draft
    }

    #[test]
    fn test_payload_carries_every_field() {
        let payload = ReportPayload::from_draft(&ready_draft());

        assert_eq!(payload.description, "cracked slab");
        assert_eq!(payload.location, "5th and Main");
        assert_eq!(payload.category, "road_damage");
        assert_eq!(payload.severity, 4);
        assert_eq!(payload.image_media_type, "image/jpeg");
        assert_eq!(payload.image_size, 10);
        assert_eq!(payload.image_bytes.len(), 10);
    }

    #[test]
    fn test_payload_json_uses_wire_category() {
        let payload = ReportPayload::from_draft(&ready_draft());
        let json = payload.to_json().expect("payload should serialize");
        assert!(json.contains("\"category\":\"road_damage\""));
        assert!(json.contains("\"image_media_type\":\"image/jpeg\""));
        // Raw bytes stay out of the logged JSON
        assert!(!json.contains("image_bytes"));
    }

    #[tokio::test]
    async fn test_simulated_backend_always_succeeds() {
        let backend = SimulatedBackend::with_delay(Duration::from_millis(1));
        let result = backend.submit(ReportPayload::from_draft(&ready_draft())).await;
        assert_eq!(result, Ok(()));
    }
}
