//! Records fetched from the remote record stores.
//!
//! Every record is a read-only snapshot that lives for a single aggregation
//! call: it is created by a store fetch, consumed by the resolver and the
//! aggregators, then dropped. Nothing here is ever written back.
//!
//! # Record Types
//!
//! - [`AdoptionRecord`] - An adoption, pointing at a publication
//! - [`PublicationRecord`] - A listing, pointing at an animal
//! - [`AnimalRecord`] - An animal with its species, pointing at a shelter
//! - [`ShelterRecord`] - A shelter
//! - [`PaymentRecord`] - A donation payment
//! - [`VolunteerRecord`] - A volunteer, pointing at a campaign
//! - [`CampaignRecord`] - A campaign, pointing at its type
//! - [`CampaignTypeRecord`] - A campaign classification
//!
//! All foreign keys are optional. Wire payloads are converted into these
//! types at the store-client boundary (see [`crate::infrastructure::http`]).

pub mod adoption;
pub mod animal;
pub mod campaign;
pub mod payment;
pub mod publication;
pub mod volunteer;

pub use adoption::AdoptionRecord;
pub use animal::{AnimalRecord, ShelterRecord};
pub use campaign::{CampaignRecord, CampaignTypeRecord};
pub use payment::PaymentRecord;
pub use publication::PublicationRecord;
pub use volunteer::VolunteerRecord;
