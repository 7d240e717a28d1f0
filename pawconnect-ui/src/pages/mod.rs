//! Page Components
//!
//! Top-level page components for routing.

mod directory;
mod home;
mod infohub;
mod landing;
mod profile;

pub use directory::Directory;
pub use home::Home;
pub use infohub::InfoHub;
pub use landing::Landing;
pub use profile::Profile;
