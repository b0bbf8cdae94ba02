/// Pre-submission validation. Pure and deterministic: no I/O, no side
/// effects, just a list of everything blocking the draft from going out.

use super::draft::DraftReport;
use crate::notify::Notification;

/// A blocking problem with the draft. Only the image and the category are
/// mandatory; description, location, and severity all have valid defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    MissingImage,
    MissingCategory,
}

impl ValidationIssue {
    /// The user-facing message for this issue
    pub fn notification(&self) -> Notification {
        match self {
            ValidationIssue::MissingImage => Notification::error(
                "Image required",
                "Please upload an image of the hazard.",
            ),
            ValidationIssue::MissingCategory => Notification::error(
                "Category required",
                "Please select a hazard category.",
            ),
        }
    }
}

/// Collect every issue blocking submission of `draft`
pub fn validate(draft: &DraftReport) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if draft.image.is_none() {
        issues.push(ValidationIssue::MissingImage);
    }
    if draft.category.is_none() {
        issues.push(ValidationIssue::MissingCategory);
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::draft::{Category, HazardImage, ImagePreview, MediaType};

    fn draft_with_image() -> DraftReport {
        let mut draft = DraftReport::default();
        draft.image = Some(HazardImage {
            bytes: vec![0u8; 16],
            media_type: MediaType::Jpeg,
        });
        draft.preview = Some(ImagePreview {
            width: 2,
            height: 2,
        });
        draft
    }

    #[test]
    fn test_empty_draft_has_both_issues() {
        let issues = validate(&DraftReport::default());
        assert_eq!(
            issues,
            vec![ValidationIssue::MissingImage, ValidationIssue::MissingCategory]
        );
    }

    #[test]
    fn test_image_alone_still_needs_category() {
        let issues = validate(&draft_with_image());
        assert_eq!(issues, vec![ValidationIssue::MissingCategory]);
    }

    #[test]
    fn test_category_alone_still_needs_image() {
        let mut draft = DraftReport::default();
        draft.category = Some(Category::Debris);
        let issues = validate(&draft);
        assert_eq!(issues, vec![ValidationIssue::MissingImage]);
    }

    #[test]
    fn test_image_and_category_are_sufficient() {
        let mut draft = draft_with_image();
        draft.category = Some(Category::RoadDamage);
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let draft = DraftReport::default();
        assert_eq!(validate(&draft), validate(&draft));
    }
}
