//! UI Components
//!
//! Reusable components for the PawConnect frontend.

mod add_pet_form;
mod article_view;
mod call_to_action;
mod city_badge;
mod city_selector;
mod directory_search;
mod feature_voting;
mod feedback_section;
mod field_message;
mod header;
mod hero;
mod info_card;
mod loading;
mod pet_card;
mod profile_card;
mod service_card;
mod social_proof;
mod toast;

pub use add_pet_form::AddPetForm;
pub use article_view::ArticleView;
pub use call_to_action::CallToAction;
pub use city_badge::CityBadge;
pub use city_selector::CitySelector;
pub use directory_search::DirectorySearch;
pub use feature_voting::FeatureVoting;
pub use feedback_section::FeedbackSection;
pub(crate) use field_message::FieldMessage;
pub use header::Header;
pub use hero::Hero;
pub use info_card::InfoCard;
pub use loading::{InlineLoading, Loading};
pub use pet_card::PetCard;
pub use profile_card::ProfileCard;
pub use service_card::ServiceCard;
pub use social_proof::SocialProof;
pub use toast::Toast;
