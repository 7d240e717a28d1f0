//! Profile
//!
//! Who "you" are on the profile page, and the pets added during the session.

use crate::city::City;
use crate::dataset::{Pet, PetKind, User};

/// The demo user for a city: the first user living there, else the first
/// user overall
pub fn current_user(users: &[User], city: Option<City>) -> Option<&User> {
    city.and_then(|c| users.iter().find(|u| u.city == c))
        .or_else(|| users.first())
}

/// Pets listed on a user's profile, in the user's order
pub fn pets_of<'a>(user: &User, pets: &'a [Pet]) -> Vec<&'a Pet> {
    user.pets
        .iter()
        .filter_map(|id| pets.iter().find(|p| p.id == *id))
        .collect()
}

/// Avatar fallback letters, e.g. `"SJ"` for `"Sophie Johnson"`
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// `"1 year"`, `"3 years"`, `"1.5 years"`
pub fn age_label(age: f32) -> String {
    if age.fract() == 0.0 {
        let years = age as u32;
        if years == 1 {
            "1 year".to_string()
        } else {
            format!("{} years", years)
        }
    } else {
        format!("{:.1} years", age)
    }
}

/// Which half of the profile page is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Profile,
    Pets,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 2] = [ProfileTab::Profile, ProfileTab::Pets];

    /// Tab caption; the pets tab carries the count, e.g. `"Pets (2)"`
    pub fn label(&self, pet_count: usize) -> String {
        match self {
            ProfileTab::Profile => "Profile".to_string(),
            ProfileTab::Pets => format!("Pets ({})", pet_count),
        }
    }
}

/// Validated data for a pet about to join the roster
#[derive(Debug, Clone, PartialEq)]
pub struct NewPet {
    pub name: String,
    pub kind: PetKind,
    pub breed: String,
    pub age: f32,
    pub bio: String,
    /// Object URL or data URL of the uploaded photo
    pub image: String,
}

/// Pets shown on the profile page for this session
///
/// Starts from the user's dataset pets. Additions live only as long as the
/// page does. New ids continue after every pet the roster was seeded from,
/// not just the owner's.
#[derive(Debug, Clone, PartialEq)]
pub struct PetRoster {
    owner_id: u32,
    pets: Vec<Pet>,
    next_id: u32,
}

fn next_pet_id<'a>(pets: impl IntoIterator<Item = &'a Pet>) -> u32 {
    pets.into_iter().map(|p| p.id).max().unwrap_or(0) + 1
}

impl PetRoster {
    pub fn new(owner_id: u32, pets: Vec<Pet>) -> Self {
        let next_id = next_pet_id(&pets);
        Self {
            owner_id,
            pets,
            next_id,
        }
    }

    /// Seed from a user's pets in the dataset, reserving ids already used
    /// by anyone's pets in `pets`
    pub fn for_user(user: &User, pets: &[Pet]) -> Self {
        Self {
            owner_id: user.id,
            pets: pets_of(user, pets).into_iter().cloned().collect(),
            next_id: next_pet_id(pets),
        }
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// Append a pet with a fresh id
    pub fn add(&mut self, new_pet: NewPet) -> Pet {
        let id = self.next_id;
        self.next_id += 1;
        let pet = Pet {
            id,
            name: new_pet.name,
            kind: new_pet.kind,
            breed: new_pet.breed,
            age: new_pet.age,
            bio: new_pet.bio,
            image: new_pet.image,
            owner_id: self.owner_id,
        };

        tracing::info!(id = pet.id, name = %pet.name, "Pet added to profile");
        self.pets.push(pet.clone());
        pet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_current_user_by_city() {
        let dataset = Dataset::bundled().unwrap();

        let user = current_user(&dataset.users, Some(City::Calgary)).unwrap();
        assert_eq!(user.city, City::Calgary);

        let fallback = current_user(&dataset.users, None).unwrap();
        assert_eq!(fallback.id, dataset.users[0].id);

        assert!(current_user(&[], Some(City::Dublin)).is_none());
    }

    #[test]
    fn test_pets_of_user() {
        let dataset = Dataset::bundled().unwrap();
        let user = dataset.user(1).unwrap();

        let names: Vec<&str> = pets_of(user, &dataset.pets)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names.len(), user.pets.len());
        assert_eq!(names[0], "Max");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sophie Johnson"), "SJ");
        assert_eq!(initials("cher"), "C");
        assert_eq!(initials("Anna van der Berg"), "AV");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn test_age_label() {
        assert_eq!(age_label(1.0), "1 year");
        assert_eq!(age_label(3.0), "3 years");
        assert_eq!(age_label(0.0), "0 years");
        assert_eq!(age_label(1.5), "1.5 years");
    }

    #[test]
    fn test_profile_tab_labels() {
        assert_eq!(ProfileTab::default(), ProfileTab::Profile);
        assert_eq!(ProfileTab::Profile.label(4), "Profile");
        assert_eq!(ProfileTab::Pets.label(0), "Pets (0)");
        assert_eq!(ProfileTab::Pets.label(2), "Pets (2)");
    }

    #[test]
    fn test_roster_add_assigns_fresh_id() {
        let dataset = Dataset::bundled().unwrap();
        let user = dataset.user(3).unwrap();
        let mut roster = PetRoster::for_user(user, &dataset.pets);
        let before = roster.len();
        let max_id = roster.pets().iter().map(|p| p.id).max().unwrap();

        let pet = roster.add(NewPet {
            name: "Pixel".into(),
            kind: PetKind::Cat,
            breed: "Sphynx".into(),
            age: 2.0,
            bio: String::new(),
            image: "blob:pixel".into(),
        });

        assert_eq!(pet.id, max_id + 1);
        assert_eq!(pet.owner_id, user.id);
        assert_eq!(roster.len(), before + 1);
        assert_eq!(roster.pets().last(), Some(&pet));
    }

    #[test]
    fn test_roster_ids_do_not_clash_with_other_owners() {
        let dataset = Dataset::bundled().unwrap();
        let user = dataset.user(1).unwrap();
        let mut roster = PetRoster::for_user(user, &dataset.pets);
        let dataset_max = dataset.pets.iter().map(|p| p.id).max().unwrap();
        assert!(roster.pets().iter().all(|p| p.id < dataset_max));

        let first = roster.add(NewPet {
            name: "Nori".into(),
            kind: PetKind::Fish,
            breed: "Betta".into(),
            age: 1.0,
            bio: String::new(),
            image: "blob:nori".into(),
        });
        let second = roster.add(NewPet {
            name: "Juno".into(),
            kind: PetKind::Dog,
            breed: "Beagle".into(),
            age: 2.0,
            bio: String::new(),
            image: "blob:juno".into(),
        });

        assert_eq!(first.id, dataset_max + 1);
        assert_eq!(second.id, dataset_max + 2);
        assert!(dataset.pets.iter().all(|p| p.id != first.id && p.id != second.id));
    }

    #[test]
    fn test_empty_roster_starts_at_one() {
        let mut roster = PetRoster::new(9, Vec::new());
        assert!(roster.is_empty());

        let pet = roster.add(NewPet {
            name: "Bolt".into(),
            kind: PetKind::Dog,
            breed: "Collie".into(),
            age: 4.0,
            bio: "Fast".into(),
            image: String::new(),
        });
        assert_eq!(pet.id, 1);
    }
}
