//! Add-pet dialog form

use super::validation::ValidationErrors;
use crate::dataset::PetKind;
use crate::profile::NewPet;

/// Largest accepted photo, 5 MiB
pub const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;
pub const MAX_BIO_CHARS: usize = 500;
pub const MAX_AGE: f32 = 50.0;

/// A file picked in the photo input
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoUpload {
    /// MIME type reported by the browser
    pub mime: String,
    pub size: u64,
    /// Preview URL once the file has been read
    pub url: String,
}

impl PhotoUpload {
    /// Check type and size before the file is read
    pub fn check(mime: &str, size: u64) -> Result<(), &'static str> {
        if !mime.starts_with("image/") {
            return Err("Please select an image file");
        }
        if size > MAX_PHOTO_BYTES {
            return Err("Image must be less than 5MB");
        }
        Ok(())
    }
}

/// Add-pet form state
#[derive(Debug, Clone, PartialEq)]
pub struct NewPetForm {
    pub name: String,
    pub kind: PetKind,
    pub breed: String,
    /// Raw text of the age input
    pub age: String,
    pub bio: String,
    pub photo: Option<PhotoUpload>,
}

impl Default for NewPetForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: PetKind::Dog,
            breed: String::new(),
            age: "0".to_string(),
            bio: String::new(),
            photo: None,
        }
    }
}

impl NewPetForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a photo, or record why it was refused
    pub fn set_photo(&mut self, upload: PhotoUpload) -> Result<(), &'static str> {
        PhotoUpload::check(&upload.mime, upload.size)?;
        self.photo = Some(upload);
        Ok(())
    }

    /// Characters left in the bio
    pub fn bio_remaining(&self) -> isize {
        MAX_BIO_CHARS as isize - self.bio.chars().count() as isize
    }

    fn parsed_age(&self) -> Option<f32> {
        self.age.trim().parse::<f32>().ok().filter(|a| a.is_finite())
    }

    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.name.trim().chars().count() < 2 {
            errors.add("name", "Pet name must be at least 2 characters");
        }
        if self.breed.trim().chars().count() < 2 {
            errors.add("breed", "Breed must be at least 2 characters");
        }
        match self.parsed_age() {
            None => errors.add("age", "Age must be a number"),
            Some(age) if age < 0.0 => errors.add("age", "Age must be a positive number"),
            Some(age) if age > MAX_AGE => errors.add("age", "Age must be less than 50"),
            Some(_) => {}
        }
        if self.bio.chars().count() > MAX_BIO_CHARS {
            errors.add("bio", "Bio cannot be more than 500 characters");
        }
        match &self.photo {
            None => errors.add("photo", "Please upload a pet photo"),
            Some(photo) => {
                if let Err(message) = PhotoUpload::check(&photo.mime, photo.size) {
                    errors.add("photo", message);
                }
            }
        }

        errors
    }

    /// Validate and reset; the returned pet is ready for the roster
    pub fn submit(&mut self) -> Result<NewPet, ValidationErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let age = self.parsed_age().unwrap_or_default();
        let form = std::mem::take(self);
        Ok(NewPet {
            name: form.name.trim().to_string(),
            kind: form.kind,
            breed: form.breed.trim().to_string(),
            age,
            bio: form.bio.trim().to_string(),
            image: form.photo.map(|p| p.url).unwrap_or_default(),
        })
    }
}

/// Toast text after a pet is added
pub fn added_message(name: &str) -> String {
    format!("{} has been added to your profile.", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo() -> PhotoUpload {
        PhotoUpload {
            mime: "image/png".into(),
            size: 120_000,
            url: "blob:photo".into(),
        }
    }

    fn filled() -> NewPetForm {
        NewPetForm {
            name: "Luna".into(),
            kind: PetKind::Cat,
            breed: "Siamese".into(),
            age: "2.5".into(),
            bio: "Sleeps on keyboards".into(),
            photo: Some(photo()),
        }
    }

    #[test]
    fn test_valid_form_submits_and_resets() {
        let mut form = filled();
        let pet = form.submit().unwrap();

        assert_eq!(pet.name, "Luna");
        assert_eq!(pet.age, 2.5);
        assert_eq!(pet.image, "blob:photo");
        assert_eq!(form, NewPetForm::default());
    }

    #[test]
    fn test_short_name_and_breed() {
        let mut form = filled();
        form.name = "L".into();
        form.breed = " ".into();

        let errors = form.validate();
        assert_eq!(errors.get("name"), Some("Pet name must be at least 2 characters"));
        assert_eq!(errors.get("breed"), Some("Breed must be at least 2 characters"));
    }

    #[test]
    fn test_age_bounds() {
        let mut form = filled();
        for (age, ok) in [("0", true), ("50", true), ("-1", false), ("51", false), ("old", false)] {
            form.age = age.into();
            assert_eq!(form.validate().is_empty(), ok, "age {}", age);
        }
    }

    #[test]
    fn test_bio_limit() {
        let mut form = filled();
        form.bio = "a".repeat(500);
        assert!(form.validate().is_empty());
        assert_eq!(form.bio_remaining(), 0);

        form.bio.push('a');
        assert!(form.validate().has("bio"));
    }

    #[test]
    fn test_photo_required() {
        let mut form = filled();
        form.photo = None;
        let before = form.clone();

        let errors = form.submit().unwrap_err();
        assert_eq!(errors.get("photo"), Some("Please upload a pet photo"));
        assert_eq!(form, before);
    }

    #[test]
    fn test_photo_type_and_size() {
        let mut form = NewPetForm::new();

        let pdf = PhotoUpload {
            mime: "application/pdf".into(),
            ..photo()
        };
        assert_eq!(form.set_photo(pdf), Err("Please select an image file"));

        let huge = PhotoUpload {
            size: MAX_PHOTO_BYTES + 1,
            ..photo()
        };
        assert_eq!(form.set_photo(huge), Err("Image must be less than 5MB"));
        assert!(form.photo.is_none());

        let exact = PhotoUpload {
            size: MAX_PHOTO_BYTES,
            ..photo()
        };
        assert!(form.set_photo(exact).is_ok());
    }

    #[test]
    fn test_added_message() {
        assert_eq!(added_message("Luna"), "Luna has been added to your profile.");
    }
}
