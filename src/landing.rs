//! Landing Content
//!
//! City-dependent copy, images, testimonials and counters for the landing
//! and home pages.

use crate::city::{city_label, City};
use crate::dataset::{CityStats, Testimonial};

/// Length of the social proof counter animation
pub const COUNTER_ANIMATION_MS: u32 = 2000;

/// Pause between picking a city on `/home` and revealing the page
pub const CITY_REVEAL_DELAY_MS: u32 = 500;

/// Main landing heading
pub const HERO_TITLE: &str = "PawConnect: Your Local Pet Community, Connected";

const FALLBACK_STATS: CityStats = CityStats {
    city: None,
    owners: 0,
    businesses: 0,
    features: 0,
};

/// Testimonials for a city, or the generic set when the city has none
pub fn testimonials_for(testimonials: &[Testimonial], city: Option<City>) -> Vec<&Testimonial> {
    let local: Vec<&Testimonial> = match city {
        Some(c) => testimonials.iter().filter(|t| t.city == Some(c)).collect(),
        None => Vec::new(),
    };

    if local.is_empty() {
        testimonials.iter().filter(|t| t.city.is_none()).collect()
    } else {
        local
    }
}

/// Where the testimonial author is from, e.g. `"Dog owner, Dublin"`
pub fn testimonial_byline(testimonial: &Testimonial) -> String {
    format!(
        "{} owner, {}",
        testimonial.pet_type,
        city_label(testimonial.city, "Beta Tester")
    )
}

/// Stats for a city, or the default row
pub fn stats_for(stats: &[CityStats], city: Option<City>) -> CityStats {
    city.and_then(|c| stats.iter().find(|s| s.city == Some(c)))
        .or_else(|| stats.iter().find(|s| s.city.is_none()))
        .copied()
        .unwrap_or(FALLBACK_STATS)
}

/// Counter value at `progress` (0.0 - 1.0) through the animation
pub fn animated_count(target: u32, progress: f64) -> u32 {
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    (progress * target as f64).floor() as u32
}

/// Every counter at `progress`
pub fn animated_stats(target: CityStats, progress: f64) -> CityStats {
    CityStats {
        city: target.city,
        owners: animated_count(target.owners, progress),
        businesses: animated_count(target.businesses, progress),
        features: animated_count(target.features, progress),
    }
}

/// Fraction of the counter animation done after `elapsed_ms`
pub fn counter_progress(elapsed_ms: f64) -> f64 {
    (elapsed_ms / COUNTER_ANIMATION_MS as f64).clamp(0.0, 1.0)
}

pub fn hero_image(city: Option<City>) -> &'static str {
    match city {
        Some(City::Amsterdam) => "/images/amsterdam-pets.jpg",
        Some(City::Dublin) => "/images/dublin-pets.jpg",
        Some(City::Calgary) => "/images/calgary-pets.jpg",
        None => "/images/default-pets.jpg",
    }
}

pub fn cta_image(city: Option<City>) -> &'static str {
    match city {
        Some(City::Amsterdam) => "/images/amsterdam-landmark.jpg",
        Some(City::Dublin) => "/images/dublin-landmark.jpg",
        Some(City::Calgary) => "/images/calgary-landmark.jpg",
        None => "/images/default-landmark.jpg",
    }
}

pub fn hero_subtitle(city: Option<City>) -> String {
    format!(
        "Find local pet services, connect with nearby pet owners, and access {}'s best pet resources in one place",
        city_label(city, "your city")
    )
}

pub fn cta_heading(city: Option<City>) -> String {
    format!("Join {}'s Pet Community Today", city_label(city, "Your City"))
}

/// Toast body after "Get Early Access"
pub fn early_access_message(city: Option<City>) -> String {
    format!(
        "We'll notify you when PawConnect launches in {}.",
        city_label(city, "Your City")
    )
}

pub fn city_section_heading(city: Option<City>) -> &'static str {
    if city.is_some() {
        "Change your current city"
    } else {
        "Select your city to get started"
    }
}

/// A feature tile on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

pub const HOME_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        icon: "👥",
        title: "Connect with Pet Owners",
        description: "Create profiles for you and your pets, and connect with other pet owners in your area for playdates and advice.",
        link: "/profile",
    },
    Highlight {
        icon: "🧭",
        title: "Find Local Services",
        description: "Discover and connect with veterinarians, groomers, pet shops, and other pet services in your neighborhood.",
        link: "/directory",
    },
    Highlight {
        icon: "📖",
        title: "City-Specific Resources",
        description: "Access information about local regulations, pet-friendly locations, and other resources unique to your city.",
        link: "/infohub",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_testimonials_for_city() {
        let dataset = Dataset::bundled().unwrap();
        let quotes = testimonials_for(&dataset.testimonials, Some(City::Dublin));
        assert_eq!(quotes.len(), 3);
        assert!(quotes.iter().all(|t| t.city == Some(City::Dublin)));
    }

    #[test]
    fn test_testimonials_fall_back_to_default() {
        let dataset = Dataset::bundled().unwrap();
        let quotes = testimonials_for(&dataset.testimonials, None);
        assert_eq!(quotes.len(), 3);
        assert!(quotes.iter().all(|t| t.city.is_none()));

        let only_defaults: Vec<Testimonial> = dataset
            .testimonials
            .iter()
            .filter(|t| t.city.is_none())
            .cloned()
            .collect();
        let quotes = testimonials_for(&only_defaults, Some(City::Calgary));
        assert_eq!(quotes.len(), 3);
    }

    #[test]
    fn test_byline() {
        let dataset = Dataset::bundled().unwrap();
        let amsterdam = testimonials_for(&dataset.testimonials, Some(City::Amsterdam));
        assert!(testimonial_byline(amsterdam[0]).ends_with(", Amsterdam"));

        let default = testimonials_for(&dataset.testimonials, None);
        assert!(testimonial_byline(default[0]).ends_with(", Beta Tester"));
    }

    #[test]
    fn test_stats_for() {
        let dataset = Dataset::bundled().unwrap();
        assert_eq!(stats_for(&dataset.stats, Some(City::Amsterdam)).owners, 437);
        assert_eq!(stats_for(&dataset.stats, None).owners, 1200);
        assert_eq!(stats_for(&[], Some(City::Dublin)), FALLBACK_STATS);
    }

    #[test]
    fn test_animated_count() {
        assert_eq!(animated_count(437, 0.0), 0);
        assert_eq!(animated_count(437, 0.5), 218);
        assert_eq!(animated_count(437, 1.0), 437);
        assert_eq!(animated_count(437, 3.0), 437);
        assert_eq!(animated_count(437, -1.0), 0);
        assert_eq!(animated_count(437, f64::NAN), 0);
    }

    #[test]
    fn test_counter_progress() {
        assert_eq!(counter_progress(0.0), 0.0);
        assert_eq!(counter_progress(1000.0), 0.5);
        assert_eq!(counter_progress(5000.0), 1.0);

        let halfway = animated_stats(
            CityStats {
                city: None,
                owners: 1200,
                businesses: 75,
                features: 120,
            },
            0.5,
        );
        assert_eq!((halfway.owners, halfway.businesses, halfway.features), (600, 37, 60));
    }

    #[test]
    fn test_city_copy() {
        assert_eq!(cta_heading(Some(City::Calgary)), "Join Calgary's Pet Community Today");
        assert_eq!(cta_heading(None), "Join Your City's Pet Community Today");
        assert!(hero_subtitle(None).contains("your city's best"));
        assert_eq!(hero_image(Some(City::Dublin)), "/images/dublin-pets.jpg");
        assert_eq!(cta_image(None), "/images/default-landmark.jpg");
        assert_eq!(city_section_heading(None), "Select your city to get started");
    }
}
