//! User-proposed study spaces awaiting moderation.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::serde_util::string_or_number;

pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Free-form amenity choices offered on the submission form.
pub const AMENITY_CHOICES: [&str; 7] = [
    "Computers",
    "Printer",
    "Whiteboard",
    "Microwave",
    "Café",
    "Lounge Seating",
    "Power Outlets",
];

/// `(value, label)` pairs for the privacy select.
pub const PRIVACY_CHOICES: [(&str, &str); 4] =
    [("open", "Open"), ("semi", "Semi-Private"), ("enclosed", "Private Room"), ("mixed", "Mixed")];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| format!("unknown submission status: {s:?}"))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Submission {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub name: String,
    pub building: String,
    pub campus: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub noise_level: Option<String>,
    #[serde(default)]
    pub privacy_level: Option<String>,
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
    #[serde(default)]
    pub photos: Option<Vec<String>>,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub submitter_name: Option<String>,
    #[serde(default)]
    pub submitter_email: Option<String>,
}

/// Request body of `POST /api/submissions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSubmission {
    pub user_id: String,
    pub name: String,
    pub building: String,
    pub campus: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionValidationError {
    #[error("Name must be at least 3 characters")]
    NameTooShort,
    #[error("Building name required")]
    BuildingTooShort,
    #[error("Please select a campus")]
    CampusMissing,
    #[error("Description must be less than {} characters", DESCRIPTION_MAX_CHARS)]
    DescriptionTooLong,
}

/// Form state of the submission page. Empty strings mean "not provided".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionDraft {
    pub name: String,
    pub building: String,
    pub campus: String,
    pub description: String,
    pub noise_level: String,
    pub privacy_level: String,
    pub amenities: Vec<String>,
}

fn provided(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl SubmissionDraft {
    /// Checks the fields in form order and reports the first failure.
    pub fn validate(&self) -> Result<(), SubmissionValidationError> {
        if self.name.trim().chars().count() < 3 {
            return Err(SubmissionValidationError::NameTooShort);
        }
        if self.building.trim().chars().count() < 2 {
            return Err(SubmissionValidationError::BuildingTooShort);
        }
        if self.campus.trim().is_empty() {
            return Err(SubmissionValidationError::CampusMissing);
        }
        if self.description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(SubmissionValidationError::DescriptionTooLong);
        }
        Ok(())
    }

    pub fn toggle_amenity(&mut self, amenity: &str) {
        if let Some(pos) = self.amenities.iter().position(|a| a == amenity) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(amenity.to_string());
        }
    }

    pub fn into_request(self, user_id: &str, photos: Vec<String>) -> Result<NewSubmission, SubmissionValidationError> {
        self.validate()?;
        Ok(NewSubmission {
            user_id: user_id.to_string(),
            name: self.name.trim().to_string(),
            building: self.building.trim().to_string(),
            campus: self.campus.trim().to_string(),
            description: provided(&self.description),
            noise_level: provided(&self.noise_level),
            privacy_level: provided(&self.privacy_level),
            amenities: (!self.amenities.is_empty()).then_some(self.amenities),
            photos: (!photos.is_empty()).then_some(photos),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> SubmissionDraft {
        SubmissionDraft {
            name: "Rooftop Lounge".to_string(),
            building: "Union".to_string(),
            campus: "central".to_string(),
            ..SubmissionDraft::default()
        }
    }

    #[test]
    fn validation_reports_first_failure_with_form_message() {
        assert_eq!(draft().validate(), Ok(()));

        let mut d = draft();
        d.name = "ab".to_string();
        d.campus.clear();
        let err = d.validate().unwrap_err();
        assert_eq!(err, SubmissionValidationError::NameTooShort);
        assert_eq!(err.to_string(), "Name must be at least 3 characters");

        let mut d = draft();
        d.building = "U".to_string();
        assert_eq!(d.validate(), Err(SubmissionValidationError::BuildingTooShort));

        let mut d = draft();
        d.campus = "  ".to_string();
        assert_eq!(d.validate().unwrap_err().to_string(), "Please select a campus");

        let mut d = draft();
        d.description = "é".repeat(DESCRIPTION_MAX_CHARS);
        assert_eq!(d.validate(), Ok(()));
        d.description.push('x');
        assert_eq!(d.validate(), Err(SubmissionValidationError::DescriptionTooLong));
    }

    #[test]
    fn request_omits_empty_optional_fields() {
        let body = serde_json::to_value(draft().into_request("user_1", vec![]).unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "user_id": "user_1",
                "name": "Rooftop Lounge",
                "building": "Union",
                "campus": "central",
            })
        );
    }

    #[test]
    fn request_carries_selected_options() {
        let mut d = draft();
        d.noise_level = "quiet".to_string();
        d.toggle_amenity("Printer");
        d.toggle_amenity("Café");
        d.toggle_amenity("Printer");
        let request = d.into_request("user_1", vec!["/uploads/a.png".to_string()]).unwrap();
        assert_eq!(request.noise_level.as_deref(), Some("quiet"));
        assert_eq!(request.privacy_level, None);
        assert_eq!(request.amenities, Some(vec!["Café".to_string()]));
        assert_eq!(request.photos.map(|p| p.len()), Some(1));
    }

    #[test]
    fn parses_listing_with_numeric_id() {
        let json = r#"{"id": 12, "user_id": "u", "name": "Nook", "building": "GG Brown",
            "campus": "north", "status": "approved", "created_at": "2025-02-02T00:00:00Z"}"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.id, "12");
        assert_eq!(submission.status, SubmissionStatus::Approved);
        assert_eq!("rejected".parse(), Ok(SubmissionStatus::Rejected));
    }
}
