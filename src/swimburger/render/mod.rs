//! One renderer per output format.
//!
//! Each renderer is a pure function of the whole [`Profile`](crate::profile::Profile) and
//! returns the complete text to write, trailing newline included:
//!
//! - [`json::to_json`]: pretty JSON, two-space indent
//! - [`yaml::to_yaml`]: block-style YAML
//! - [`vcard::to_vcard`]: vCard 3.0
//! - [`card::to_card`]: the boxed terminal card

pub mod card;
pub mod json;
pub mod vcard;
pub mod yaml;

pub use card::{to_card, CardLayout};
pub use json::to_json;
pub use vcard::to_vcard;
pub use yaml::to_yaml;
