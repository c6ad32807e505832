//! Cross-store reference resolution.
//!
//! Follows foreign keys one hop at a time (adoption → publication → animal
//! → shelter, volunteer → campaign → campaign type). A chain that cannot be
//! completed yields no value for that record only; the failure is logged,
//! counted, and never surfaces to the caller.

use std::future::Future;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::{AdoptionRecord, AnimalRecord, VolunteerRecord};
use crate::domain::stores::{
    AnimalStore, CampaignStore, CampaignTypeStore, PublicationStore, RecordStores, ShelterStore,
};
use crate::error::StoreError;

/// Lookups kept in flight by the fan-out helpers unless configured otherwise.
pub const DEFAULT_RESOLVE_CONCURRENCY: usize = 8;

/// Why a reference chain stopped before producing a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionFailure {
    /// The record does not carry the reference (or the label is blank).
    MissingReference { reference: &'static str },
    /// The store answered that the referenced id does not exist.
    NotFound { store: &'static str, id: Uuid },
    /// The store could not be reached or answered with garbage.
    Transport { store: &'static str, message: String },
}

impl ResolutionFailure {
    fn reason(&self) -> &'static str {
        match self {
            Self::MissingReference { .. } => "missing_reference",
            Self::NotFound { .. } => "not_found",
            Self::Transport { .. } => "transport",
        }
    }

    /// Logs the failure and bumps the failure counter.
    fn report(&self, record_id: Uuid) {
        metrics::counter!("stats_resolution_failures_total", "reason" => self.reason())
            .increment(1);

        match self {
            Self::MissingReference { reference } => {
                debug!(%record_id, reference, "Reference missing, record dropped from breakdown");
            }
            Self::NotFound { store, id } => {
                debug!(%record_id, store, %id, "Referenced record not found");
            }
            Self::Transport { store, message } => {
                warn!(%record_id, store, error = %message, "Reference lookup failed");
            }
        }
    }
}

/// Outcome of following one reference chain.
pub type Resolution<T> = Result<T, ResolutionFailure>;

/// Where an adopted animal came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    pub species: Option<String>,
    pub shelter: Option<String>,
}

/// Resolves labels that live behind one or more store hops.
#[derive(Clone)]
pub struct ReferenceResolver {
    publications: Arc<dyn PublicationStore>,
    animals: Arc<dyn AnimalStore>,
    shelters: Arc<dyn ShelterStore>,
    campaigns: Arc<dyn CampaignStore>,
    campaign_types: Arc<dyn CampaignTypeStore>,
    concurrency: usize,
}

impl ReferenceResolver {
    /// Creates a resolver over the given stores.
    ///
    /// `concurrency` caps how many records the `resolve_all_*` helpers
    /// resolve at once; zero is treated as one.
    pub fn new(stores: &RecordStores, concurrency: usize) -> Self {
        Self {
            publications: stores.publications.clone(),
            animals: stores.animals.clone(),
            shelters: stores.shelters.clone(),
            campaigns: stores.campaigns.clone(),
            campaign_types: stores.campaign_types.clone(),
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Follows adoption → publication → animal.
    pub async fn trace_animal(&self, adoption: &AdoptionRecord) -> Resolution<AnimalRecord> {
        let publication_id = adoption
            .publication_id
            .ok_or(ResolutionFailure::MissingReference {
                reference: "adoption.publication",
            })?;

        let publication = lookup(
            "publications",
            publication_id,
            self.publications.get_publication(publication_id),
        )
        .await?;

        let animal_id = publication
            .animal_id
            .ok_or(ResolutionFailure::MissingReference {
                reference: "publication.animal",
            })?;

        lookup("animals", animal_id, self.animals.get_animal(animal_id)).await
    }

    /// Species of the adopted animal.
    pub async fn trace_species(&self, adoption: &AdoptionRecord) -> Resolution<String> {
        let animal = self.trace_animal(adoption).await?;
        species_of(&animal)
    }

    /// Name of the shelter housing `animal`.
    pub async fn trace_shelter_name(&self, animal: &AnimalRecord) -> Resolution<String> {
        let shelter_id = animal
            .shelter_id
            .ok_or(ResolutionFailure::MissingReference {
                reference: "animal.shelter",
            })?;

        let shelter = lookup("shelters", shelter_id, self.shelters.get_shelter(shelter_id)).await?;

        shelter
            .name_label()
            .map(str::to_string)
            .ok_or(ResolutionFailure::MissingReference {
                reference: "shelter.name",
            })
    }

    /// Follows volunteer → campaign → campaign type.
    pub async fn trace_campaign_type(&self, volunteer: &VolunteerRecord) -> Resolution<String> {
        let campaign_id = volunteer
            .campaign_id
            .ok_or(ResolutionFailure::MissingReference {
                reference: "volunteer.campaign",
            })?;

        let campaign = lookup(
            "campaigns",
            campaign_id,
            self.campaigns.get_campaign(campaign_id),
        )
        .await?;

        let type_id = campaign
            .campaign_type_id
            .ok_or(ResolutionFailure::MissingReference {
                reference: "campaign.campaign_type",
            })?;

        let campaign_type = lookup(
            "campaign_types",
            type_id,
            self.campaign_types.get_campaign_type(type_id),
        )
        .await?;

        campaign_type
            .name_label()
            .map(str::to_string)
            .ok_or(ResolutionFailure::MissingReference {
                reference: "campaign_type.name",
            })
    }

    /// Species of the adopted animal, or `None` if any hop fails.
    pub async fn resolve_species(&self, adoption: &AdoptionRecord) -> Option<String> {
        settle(adoption.id, self.trace_species(adoption).await)
    }

    /// Campaign type name of the volunteer's campaign, or `None` if any hop fails.
    pub async fn resolve_campaign_type(&self, volunteer: &VolunteerRecord) -> Option<String> {
        settle(volunteer.id, self.trace_campaign_type(volunteer).await)
    }

    /// Species and shelter of the adopted animal.
    ///
    /// Both come from the same animal lookup; once the animal is known the
    /// species and the shelter succeed or fail independently.
    pub async fn resolve_placement(&self, adoption: &AdoptionRecord) -> Placement {
        let animal = match self.trace_animal(adoption).await {
            Ok(animal) => animal,
            Err(failure) => {
                failure.report(adoption.id);
                return Placement::default();
            }
        };

        Placement {
            species: settle(adoption.id, species_of(&animal)),
            shelter: settle(adoption.id, self.trace_shelter_name(&animal).await),
        }
    }

    /// Resolves species for every adoption, in input order.
    pub async fn resolve_all_species(&self, adoptions: &[AdoptionRecord]) -> Vec<Option<String>> {
        self.fan_out(adoptions, |resolver, adoption| async move {
            resolver.resolve_species(&adoption).await
        })
        .await
    }

    /// Resolves placements for every adoption, in input order.
    pub async fn resolve_all_placements(&self, adoptions: &[AdoptionRecord]) -> Vec<Placement> {
        self.fan_out(adoptions, |resolver, adoption| async move {
            resolver.resolve_placement(&adoption).await
        })
        .await
    }

    /// Resolves campaign types for every volunteer, in input order.
    pub async fn resolve_all_campaign_types(
        &self,
        volunteers: &[VolunteerRecord],
    ) -> Vec<Option<String>> {
        self.fan_out(volunteers, |resolver, volunteer| async move {
            resolver.resolve_campaign_type(&volunteer).await
        })
        .await
    }

    /// Runs one resolution per item with at most `concurrency` in flight.
    ///
    /// Results keep the order of `items`. Resolutions never fail, so one
    /// record's lookup cannot cancel another's. Each lookup owns its own
    /// resolver handle and record clone.
    async fn fan_out<T, R, F, Fut>(&self, items: &[T], resolve: F) -> Vec<R>
    where
        T: Clone,
        F: Fn(ReferenceResolver, T) -> Fut,
        Fut: Future<Output = R>,
    {
        let resolver = self.clone();

        stream::iter(items.to_vec())
            .map(move |item| resolve(resolver.clone(), item))
            .buffered(self.concurrency)
            .collect()
            .await
    }
}

fn species_of(animal: &AnimalRecord) -> Resolution<String> {
    animal
        .species_label()
        .map(str::to_string)
        .ok_or(ResolutionFailure::MissingReference {
            reference: "animal.species",
        })
}

fn settle<T>(record_id: Uuid, outcome: Resolution<T>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(failure) => {
            failure.report(record_id);
            None
        }
    }
}

/// Performs one by-id hop, classifying absence and store failures.
async fn lookup<T, F>(store: &'static str, id: Uuid, fetch: F) -> Resolution<T>
where
    F: Future<Output = Result<Option<T>, StoreError>>,
{
    match fetch.await {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(ResolutionFailure::NotFound { store, id }),
        Err(e) => Err(ResolutionFailure::Transport {
            store,
            message: e.to_string(),
        }),
    }
}
