//! Fixtures shared by the service unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use metrics::{
    Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit,
};
use uuid::Uuid;

use crate::domain::entities::{
    AdoptionRecord, AnimalRecord, PaymentRecord, PublicationRecord, VolunteerRecord,
};
use crate::domain::stores::{
    MockAdoptionStore, MockAnimalStore, MockCampaignStore, MockCampaignTypeStore,
    MockPaymentStore, MockPublicationStore, MockShelterStore, MockVolunteerStore, RecordStores,
};

#[derive(Default)]
pub(crate) struct StoreMocks {
    pub adoptions: MockAdoptionStore,
    pub publications: MockPublicationStore,
    pub animals: MockAnimalStore,
    pub shelters: MockShelterStore,
    pub payments: MockPaymentStore,
    pub volunteers: MockVolunteerStore,
    pub campaigns: MockCampaignStore,
    pub campaign_types: MockCampaignTypeStore,
}

impl StoreMocks {
    pub fn into_stores(self) -> RecordStores {
        RecordStores {
            adoptions: Arc::new(self.adoptions),
            publications: Arc::new(self.publications),
            animals: Arc::new(self.animals),
            shelters: Arc::new(self.shelters),
            payments: Arc::new(self.payments),
            volunteers: Arc::new(self.volunteers),
            campaigns: Arc::new(self.campaigns),
            campaign_types: Arc::new(self.campaign_types),
        }
    }

    /// Wires publication → animal lookups so that each publication id in
    /// `species` resolves to an animal of that species housed in `shelter`.
    ///
    /// The animal reuses the publication's id.
    pub fn with_catalog(mut self, species: HashMap<Uuid, &'static str>, shelter: Option<Uuid>) -> Self {
        let known: Vec<Uuid> = species.keys().copied().collect();
        self.publications
            .expect_get_publication()
            .returning(move |id| {
                Ok(known
                    .contains(&id)
                    .then(|| PublicationRecord::new(id, None, Some(id))))
            });
        self.animals.expect_get_animal().returning(move |id| {
            Ok(species
                .get(&id)
                .map(|s| AnimalRecord::new(id, Some(s.to_string()), shelter)))
        });
        self
    }
}

pub(crate) fn adoption(status: &str, publication_id: Option<Uuid>) -> AdoptionRecord {
    AdoptionRecord::new(
        Uuid::new_v4(),
        None,
        Some(status.to_string()),
        publication_id,
    )
}

pub(crate) fn adoption_at(
    status: &str,
    adopted_at: DateTime<Utc>,
    publication_id: Option<Uuid>,
) -> AdoptionRecord {
    AdoptionRecord::new(
        Uuid::new_v4(),
        Some(adopted_at),
        Some(status.to_string()),
        publication_id,
    )
}

pub(crate) fn volunteer(status: &str, campaign_id: Option<Uuid>) -> VolunteerRecord {
    VolunteerRecord::new(Uuid::new_v4(), Some(status.to_string()), campaign_id)
}

pub(crate) fn payment(
    status: Option<&str>,
    amount: f64,
    method: Option<&str>,
    completed_at: Option<DateTime<Utc>>,
) -> PaymentRecord {
    PaymentRecord {
        id: Uuid::new_v4(),
        amount,
        method: method.map(str::to_string),
        status: status.map(str::to_string),
        completed_at,
        created_at: None,
        donation_id: None,
    }
}

/// Recorder that remembers every counter registration as `name{label=value}`.
#[derive(Default)]
pub(crate) struct CountingRecorder {
    registered: Mutex<Vec<String>>,
}

impl CountingRecorder {
    pub fn registered(&self) -> Vec<String> {
        self.registered.lock().unwrap().clone()
    }
}

impl Recorder for CountingRecorder {
    fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

    fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

    fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

    fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
        let labels: Vec<String> = key
            .labels()
            .map(|label| format!("{}={}", label.key(), label.value()))
            .collect();
        self.registered
            .lock()
            .unwrap()
            .push(format!("{}{{{}}}", key.name(), labels.join(",")));
        Counter::noop()
    }

    fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
        Gauge::noop()
    }

    fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
        Histogram::noop()
    }
}
