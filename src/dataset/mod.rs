//! Dataset
//!
//! The read-only mock data every page renders from. A copy is bundled into
//! the binary; the server and CLI can load a replacement from disk.
//!
//! Records reference each other by id only (a provider's `category`, a
//! pet's `owner_id`, a user's `pets`). [`Dataset::validate`] reports broken
//! references without failing the load.

mod error;
mod types;

pub use error::{DatasetError, DatasetIssue, DatasetResult};
pub use types::{
    Article, CityProfile, CityStats, Feature, Pet, PetKind, ServiceCategory, ServiceProvider,
    Testimonial, User,
};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::city::City;

const BUNDLED: &str = include_str!("../../data/dataset.json");

/// All mock content
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    #[serde(default)]
    pub cities: Vec<CityProfile>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub pets: Vec<Pet>,
    #[serde(default)]
    pub categories: Vec<ServiceCategory>,
    #[serde(default)]
    pub providers: Vec<ServiceProvider>,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub stats: Vec<CityStats>,
}

/// Record counts, printed by the CLI and logged by the server
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DatasetSummary {
    pub cities: usize,
    pub users: usize,
    pub pets: usize,
    pub categories: usize,
    pub providers: usize,
    pub articles: usize,
    pub features: usize,
    pub testimonials: usize,
}

impl Dataset {
    /// The dataset compiled into the crate
    pub fn bundled() -> DatasetResult<Self> {
        Self::from_json(BUNDLED)
    }

    /// Parse a dataset from JSON text
    pub fn from_json(json: &str) -> DatasetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a dataset file
    pub fn load(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let dataset = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), "Loaded dataset");
        Ok(dataset)
    }

    /// Load from `path` when given, otherwise the bundled copy
    pub fn load_or_bundled(path: Option<&Path>) -> DatasetResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::bundled(),
        }
    }

    /// Look for broken references and out-of-range values
    pub fn validate(&self) -> Vec<DatasetIssue> {
        let mut issues = Vec::new();

        duplicates("user", self.users.iter().map(|u| u.id.to_string()), &mut issues);
        duplicates("pet", self.pets.iter().map(|p| p.id.to_string()), &mut issues);
        duplicates(
            "category",
            self.categories.iter().map(|c| c.id.to_string()),
            &mut issues,
        );
        duplicates(
            "provider",
            self.providers.iter().map(|p| p.id.to_string()),
            &mut issues,
        );
        duplicates(
            "article",
            self.articles.iter().map(|a| a.id.to_string()),
            &mut issues,
        );
        duplicates("feature", self.features.iter().map(|f| f.id.clone()), &mut issues);
        duplicates(
            "testimonial",
            self.testimonials.iter().map(|t| t.id.clone()),
            &mut issues,
        );

        for provider in &self.providers {
            if self.category(provider.category).is_none() {
                issues.push(DatasetIssue::UnknownCategory {
                    provider: provider.id,
                    category: provider.category,
                });
            }
            if !(0.0..=5.0).contains(&provider.rating) {
                issues.push(DatasetIssue::RatingOutOfRange {
                    provider: provider.id,
                    rating: provider.rating,
                });
            }
        }

        for pet in &self.pets {
            if self.user(pet.owner_id).is_none() {
                issues.push(DatasetIssue::UnknownOwner {
                    pet: pet.id,
                    owner: pet.owner_id,
                });
            }
        }

        for user in &self.users {
            for &pet in &user.pets {
                if self.pet(pet).is_none() {
                    issues.push(DatasetIssue::UnknownPet { user: user.id, pet });
                }
            }
        }

        for t in &self.testimonials {
            if !(1..=5).contains(&t.rating) {
                issues.push(DatasetIssue::StarsOutOfRange {
                    testimonial: t.id.clone(),
                    rating: t.rating,
                });
            }
        }

        if !self.testimonials.is_empty() && !self.testimonials.iter().any(|t| t.city.is_none()) {
            issues.push(DatasetIssue::MissingDefault {
                kind: "testimonials",
            });
        }
        if !self.stats.is_empty() && !self.stats.iter().any(|s| s.city.is_none()) {
            issues.push(DatasetIssue::MissingDefault { kind: "stats" });
        }

        issues
    }

    /// [`validate`](Self::validate) as a `Result`
    pub fn check(&self) -> DatasetResult<()> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(DatasetError::Invalid(issues))
        }
    }

    pub fn category(&self, id: u32) -> Option<&ServiceCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Category name for a provider card, `"Other"` when unknown
    pub fn category_name(&self, id: u32) -> &str {
        self.category(id).map(|c| c.name.as_str()).unwrap_or("Other")
    }

    pub fn city_profile(&self, city: City) -> Option<&CityProfile> {
        self.cities.iter().find(|c| c.id == city)
    }

    pub fn user(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn pet(&self, id: u32) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            cities: self.cities.len(),
            users: self.users.len(),
            pets: self.pets.len(),
            categories: self.categories.len(),
            providers: self.providers.len(),
            articles: self.articles.len(),
            features: self.features.len(),
            testimonials: self.testimonials.len(),
        }
    }
}

fn duplicates(
    kind: &'static str,
    ids: impl Iterator<Item = String>,
    issues: &mut Vec<DatasetIssue>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.clone()) {
            issues.push(DatasetIssue::DuplicateId { kind, id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_bundled_dataset_parses() {
        let dataset = Dataset::bundled().unwrap();
        let summary = dataset.summary();

        assert_eq!(summary.cities, 3);
        assert_eq!(summary.categories, 6);
        assert_eq!(summary.providers, 6);
        assert_eq!(summary.articles, 6);
        assert_eq!(summary.features, 8);
    }

    #[test]
    fn test_bundled_dataset_is_consistent() {
        let dataset = Dataset::bundled().unwrap();
        assert_eq!(dataset.validate(), Vec::new());
        assert!(dataset.check().is_ok());
    }

    #[test]
    fn test_every_city_has_a_profile() {
        let dataset = Dataset::bundled().unwrap();
        for city in City::ALL {
            let profile = dataset.city_profile(city).unwrap();
            assert_eq!(profile.title, city.display_name());
        }
    }

    #[test]
    fn test_lookups() {
        let dataset = Dataset::bundled().unwrap();

        assert_eq!(dataset.category_name(2), "Veterinary");
        assert_eq!(dataset.category_name(99), "Other");
        assert_eq!(dataset.user(1).unwrap().name, "Sophie Johnson");
        assert_eq!(dataset.pet(1).unwrap().name, "Max");
        assert!(dataset.pet(999).is_none());
    }

    #[test]
    fn test_validate_reports_broken_references() {
        let mut dataset = Dataset::bundled().unwrap();
        dataset.providers[0].category = 42;
        dataset.providers[1].rating = 7.5;
        dataset.pets[0].owner_id = 77;
        let dup = dataset.articles[0].clone();
        dataset.articles.push(dup);

        let issues = dataset.validate();
        assert!(issues.contains(&DatasetIssue::UnknownCategory {
            provider: dataset.providers[0].id,
            category: 42,
        }));
        assert!(issues
            .iter()
            .any(|i| matches!(i, DatasetIssue::RatingOutOfRange { .. })));
        assert!(issues.contains(&DatasetIssue::UnknownOwner { pet: 1, owner: 77 }));
        assert!(issues
            .iter()
            .any(|i| matches!(i, DatasetIssue::DuplicateId { kind: "article", .. })));

        assert!(matches!(dataset.check(), Err(DatasetError::Invalid(_))));
    }

    #[test]
    fn test_validate_missing_defaults() {
        let mut dataset = Dataset::bundled().unwrap();
        dataset.testimonials.retain(|t| t.city.is_some());
        dataset.stats.retain(|s| s.city.is_some());

        let issues = dataset.validate();
        assert!(issues.contains(&DatasetIssue::MissingDefault {
            kind: "testimonials"
        }));
        assert!(issues.contains(&DatasetIssue::MissingDefault { kind: "stats" }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(BUNDLED.as_bytes()).unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset, Dataset::bundled().unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dataset::load("/nonexistent/pawconnect/dataset.json").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let dataset = Dataset::from_json(r#"{"features": []}"#).unwrap();
        assert!(dataset.providers.is_empty());
        assert!(dataset.validate().is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let err = Dataset::from_json("{not json").unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }
}
