/// The form store owns the single live draft and mediates every change
/// to it. Mutations are synchronous and total: they never fail, and
/// out-of-range values are clamped rather than rejected.
///
/// The presentation layer observes the store through `snapshot()`; the
/// `revision` counter bumps on every mutation so observers (the view and
/// its entrance/notification animations) can key effects to changes
/// without the store knowing anything about rendering.

use super::draft::{
    Coordinates, DraftReport, HazardImage, ImagePreview, GEOLOCATED_SENTINEL, SEVERITY_MAX,
    SEVERITY_MIN,
};

#[derive(Debug, Default)]
pub struct FormStore {
    draft: DraftReport,
    revision: u64,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current draft
    pub fn snapshot(&self) -> &DraftReport {
        &self.draft
    }

    /// Monotonic change counter; bumps once per mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Install a validated image and its preview as a pair.
    /// Replaces any previously selected image.
    pub fn set_image(&mut self, image: HazardImage, preview: ImagePreview) {
        self.draft.image = Some(image);
        self.draft.preview = Some(preview);
        self.revision += 1;
    }

    /// Remove the image and its preview. Idempotent.
    pub fn clear_image(&mut self) {
        self.draft.image = None;
        self.draft.preview = None;
        self.revision += 1;
    }

    pub fn set_description(&mut self, text: String) {
        self.draft.description = text;
        self.revision += 1;
    }

    /// Manual edit of the location field. Clears any coordinates so a
    /// typed address never carries stale GPS data alongside it.
    pub fn set_location_text(&mut self, text: String) {
        self.draft.location_text = text;
        self.draft.coordinates = None;
        self.revision += 1;
    }

    pub fn set_category(&mut self, category: super::draft::Category) {
        self.draft.category = Some(category);
        self.revision += 1;
    }

    /// Set severity, clamped to the [1, 5] scale
    pub fn set_severity(&mut self, level: u8) {
        self.draft.severity = level.clamp(SEVERITY_MIN, SEVERITY_MAX);
        self.revision += 1;
    }

    /// Record a successful geolocation fix: coordinates plus the sentinel
    /// location text, discarding whatever address was typed before.
    pub fn apply_geolocation(&mut self, coordinates: Coordinates) {
        self.draft.coordinates = Some(coordinates);
        self.draft.location_text = GEOLOCATED_SENTINEL.to_string();
        self.revision += 1;
    }

    /// Replace the draft with a fresh empty one (after a successful submit)
    pub fn reset(&mut self) {
        self.draft = DraftReport::new();
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::draft::{Category, MediaType, SEVERITY_DEFAULT};

    fn sample_image() -> (HazardImage, ImagePreview) {
        (
            HazardImage {
                bytes: vec![1, 2, 3],
                media_type: MediaType::Png,
            },
            ImagePreview {
                width: 4,
                height: 4,
            },
        )
    }

    #[test]
    fn test_severity_is_clamped() {
        let mut store = FormStore::new();
        store.set_severity(0);
        assert_eq!(store.snapshot().severity, 1);
        store.set_severity(6);
        assert_eq!(store.snapshot().severity, 5);
        store.set_severity(4);
        assert_eq!(store.snapshot().severity, 4);
    }

    #[test]
    fn test_image_is_last_write_wins() {
        let mut store = FormStore::new();
        let (first, first_preview) = sample_image();
        store.set_image(first, first_preview);

        let second = HazardImage {
            bytes: vec![9, 9],
            media_type: MediaType::Jpeg,
        };
        let second_preview = ImagePreview {
            width: 8,
            height: 2,
        };
        store.set_image(second.clone(), second_preview);

        assert_eq!(store.snapshot().image.as_ref(), Some(&second));
        assert_eq!(store.snapshot().preview, Some(second_preview));
    }

    #[test]
    fn test_clear_image_is_idempotent() {
        let mut store = FormStore::new();
        let (image, preview) = sample_image();
        store.set_image(image, preview);

        store.clear_image();
        store.clear_image();

        assert!(store.snapshot().image.is_none());
        assert!(store.snapshot().preview.is_none());
    }

    #[test]
    fn test_manual_location_edit_clears_coordinates() {
        let mut store = FormStore::new();
        store.apply_geolocation(Coordinates {
            latitude: 48.85,
            longitude: 2.35,
        });
        assert_eq!(store.snapshot().location_text, GEOLOCATED_SENTINEL);
        assert!(store.snapshot().coordinates.is_some());

        store.set_location_text("12 Main Street".to_string());
        assert_eq!(store.snapshot().location_text, "12 Main Street");
        assert!(store.snapshot().coordinates.is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut store = FormStore::new();
        let (image, preview) = sample_image();
        store.set_image(image, preview);
        store.set_description("leaking pipe".to_string());
        store.set_category(Category::Water);
        store.set_severity(5);

        store.reset();

        assert_eq!(store.snapshot(), &DraftReport::default());
        assert_eq!(store.snapshot().severity, SEVERITY_DEFAULT);
    }

    #[test]
    fn test_every_mutation_bumps_revision() {
        let mut store = FormStore::new();
        let before = store.revision();
        store.set_description("x".to_string());
        store.set_severity(2);
        store.clear_image();
        assert_eq!(store.revision(), before + 3);
    }
}
