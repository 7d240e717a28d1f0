//! Dataset entity types
//!
//! Shapes of the mock records the UI binds to. Field names follow the JSON
//! in `data/dataset.json`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::city::City;

/// Landing copy for a city card in the selector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityProfile {
    pub id: City,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// A pet owner profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub bio: String,
    pub city: City,
    #[serde(default)]
    pub avatar: String,
    /// Ids of the user's pets
    #[serde(default)]
    pub pets: Vec<u32>,
}

/// Kind of pet
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PetKind {
    Dog,
    Cat,
    Bird,
    Fish,
    Other,
}

impl PetKind {
    pub const ALL: [PetKind; 5] = [
        PetKind::Dog,
        PetKind::Cat,
        PetKind::Bird,
        PetKind::Fish,
        PetKind::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PetKind::Dog => "Dog",
            PetKind::Cat => "Cat",
            PetKind::Bird => "Bird",
            PetKind::Fish => "Fish",
            PetKind::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PetKind::Dog => "🐕",
            PetKind::Cat => "🐈",
            PetKind::Bird => "🐦",
            PetKind::Fish => "🐟",
            PetKind::Other => "🐾",
        }
    }
}

impl std::fmt::Display for PetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A pet profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    pub id: u32,
    pub name: String,
    pub kind: PetKind,
    pub breed: String,
    /// Age in years; half years are allowed
    pub age: f32,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image: String,
    pub owner_id: u32,
}

/// Directory category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceCategory {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub description: String,
}

/// A directory listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceProvider {
    pub id: u32,
    pub name: String,
    /// Id of a [`ServiceCategory`]
    pub category: u32,
    pub city: City,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub email: String,
    /// 0.0 - 5.0
    pub rating: f32,
    #[serde(default)]
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// When the listing was added, used for "newest first"
    pub listed_on: NaiveDate,
}

/// An info hub article
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub city: City,
    pub category: String,
    #[serde(default)]
    pub image: String,
    pub excerpt: String,
    pub content: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A votable roadmap feature
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feature {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub votes: u32,
}

/// A landing page quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub pet_type: String,
    /// `None` marks the generic set shown before a city is picked
    #[serde(default)]
    pub city: Option<City>,
    pub quote: String,
    /// 1 - 5 stars
    pub rating: u8,
    #[serde(default)]
    pub avatar_url: String,
}

/// Headline numbers for the social proof counters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CityStats {
    #[serde(default)]
    pub city: Option<City>,
    pub owners: u32,
    pub businesses: u32,
    pub features: u32,
}
