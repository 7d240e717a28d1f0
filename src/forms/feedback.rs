//! Waitlist feedback form
//!
//! One form backs both the landing page and the city home page. Submitting
//! does not leave the browser: a valid form is logged and acknowledged.

use serde::{Deserialize, Serialize};

use super::validation::{is_valid_email, require, ValidationErrors};
use crate::city::{city_label, City};

/// Pet types offered as checkboxes
pub const PET_TYPES: [&str; 8] = [
    "Dog", "Cat", "Bird", "Rabbit", "Hamster", "Fish", "Reptile", "Other",
];

/// How the visitor expects to use the product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UseCase {
    FindServices,
    ConnectOwners,
    Information,
    Playdates,
    LostPets,
    Other,
}

impl UseCase {
    pub const ALL: [UseCase; 6] = [
        UseCase::FindServices,
        UseCase::ConnectOwners,
        UseCase::Information,
        UseCase::Playdates,
        UseCase::LostPets,
        UseCase::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UseCase::FindServices => "Finding local pet services",
            UseCase::ConnectOwners => "Connecting with other pet owners",
            UseCase::Information => "Accessing pet-related information",
            UseCase::Playdates => "Organizing pet playdates",
            UseCase::LostPets => "Finding lost pets",
            UseCase::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.label() == label)
    }
}

/// What a successful submission hands to the logger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    pub city: String,
    pub pet_types: Vec<String>,
    pub features: String,
    pub use_case: Option<String>,
    /// City selected when the form was sent
    pub selected_city: Option<City>,
}

impl FeedbackSubmission {
    /// Body of the thank-you banner
    pub fn acknowledgement(&self) -> String {
        format!(
            "We've added you to our waitlist and your feedback will help shape PawConnect in {}.",
            city_label(self.selected_city, "your city")
        )
    }
}

/// Feedback form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    /// Free text; not tied to the city selection
    pub city: String,
    pub pet_types: Vec<String>,
    pub features: String,
    pub use_case: Option<UseCase>,
    pub custom_use_case: String,
    pub privacy: bool,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The custom use case field appears only for [`UseCase::Other`]
    pub fn shows_custom_use_case(&self) -> bool {
        self.use_case == Some(UseCase::Other)
    }

    pub fn toggle_pet_type(&mut self, pet_type: &str) {
        if let Some(pos) = self.pet_types.iter().position(|p| p == pet_type) {
            self.pet_types.remove(pos);
        } else {
            self.pet_types.push(pet_type.to_string());
        }
    }

    pub fn has_pet_type(&self, pet_type: &str) -> bool {
        self.pet_types.iter().any(|p| p == pet_type)
    }

    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        require(&mut errors, "name", &self.name, "Name is required");
        require(&mut errors, "email", &self.email, "Email is required");
        if !self.email.trim().is_empty() && !is_valid_email(&self.email) {
            errors.add("email", "Please enter a valid email address");
        }
        if self.shows_custom_use_case() {
            require(
                &mut errors,
                "custom_use_case",
                &self.custom_use_case,
                "Please tell us how you'd use PawConnect",
            );
        }
        if !self.privacy {
            errors.add("privacy", "Please accept the privacy policy");
        }

        errors
    }

    /// Validate and, on success, reset every field
    ///
    /// On failure the form is left exactly as it was.
    pub fn submit(
        &mut self,
        selected_city: Option<City>,
    ) -> Result<FeedbackSubmission, ValidationErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "Feedback rejected");
            return Err(errors);
        }

        let form = std::mem::take(self);
        let use_case = form.use_case.map(|u| match u {
            UseCase::Other => form.custom_use_case.trim().to_string(),
            _ => u.label().to_string(),
        });

        let submission = FeedbackSubmission {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            city: form.city.trim().to_string(),
            pet_types: form.pet_types,
            features: form.features,
            use_case,
            selected_city,
        };

        tracing::info!(
            email = %submission.email,
            city = ?selected_city,
            pet_types = submission.pet_types.len(),
            "Feedback submitted"
        );

        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FeedbackForm {
        FeedbackForm {
            name: "Anna".into(),
            email: "anna@example.nl".into(),
            city: "Amsterdam".into(),
            pet_types: vec!["Dog".into()],
            features: "Dog parks map".into(),
            use_case: Some(UseCase::FindServices),
            custom_use_case: String::new(),
            privacy: true,
        }
    }

    #[test]
    fn test_valid_submit_clears_form() {
        let mut form = filled();
        let submission = form.submit(Some(City::Amsterdam)).unwrap();

        assert_eq!(submission.name, "Anna");
        assert_eq!(
            submission.use_case.as_deref(),
            Some("Finding local pet services")
        );
        assert_eq!(form, FeedbackForm::default());
    }

    #[test]
    fn test_missing_name_leaves_form_unchanged() {
        let mut form = filled();
        form.name = "   ".into();
        let before = form.clone();

        let errors = form.submit(None).unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(form, before);
    }

    #[test]
    fn test_email_required_and_formatted() {
        let mut form = filled();
        form.email.clear();
        assert_eq!(form.validate().get("email"), Some("Email is required"));

        form.email = "anna@".into();
        assert_eq!(
            form.validate().get("email"),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_privacy_must_be_accepted() {
        let mut form = filled();
        form.privacy = false;
        assert!(form.validate().has("privacy"));
    }

    #[test]
    fn test_custom_use_case_only_required_for_other() {
        let mut form = filled();
        assert!(!form.shows_custom_use_case());
        assert!(form.validate().is_empty());

        form.use_case = Some(UseCase::Other);
        assert!(form.shows_custom_use_case());
        assert!(form.validate().has("custom_use_case"));

        form.custom_use_case = "Finding pet-friendly holiday rentals".into();
        let submission = form.submit(None).unwrap();
        assert_eq!(
            submission.use_case.as_deref(),
            Some("Finding pet-friendly holiday rentals")
        );
    }

    #[test]
    fn test_toggle_pet_type() {
        let mut form = FeedbackForm::new();
        form.toggle_pet_type("Cat");
        form.toggle_pet_type("Fish");
        form.toggle_pet_type("Cat");

        assert_eq!(form.pet_types, vec!["Fish".to_string()]);
        assert!(form.has_pet_type("Fish"));
        assert!(!form.has_pet_type("Cat"));
    }

    #[test]
    fn test_acknowledgement_mentions_city() {
        let submission = filled().submit(Some(City::Dublin)).unwrap();
        assert!(submission.acknowledgement().ends_with("shape PawConnect in Dublin."));

        let submission = filled().submit(None).unwrap();
        assert!(submission.acknowledgement().ends_with("in your city."));
    }

    #[test]
    fn test_use_case_labels_round_trip() {
        for use_case in UseCase::ALL {
            assert_eq!(UseCase::from_label(use_case.label()), Some(use_case));
        }
        assert_eq!(UseCase::from_label("Skydiving"), None);
    }
}
