//! REST client implementing every record store trait.

use std::time::{Duration, Instant};

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{StatusCode, header};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use super::wire::{
    AdoptionPayload, AnimalPayload, CampaignPayload, CampaignTypePayload, PaymentPayload,
    PublicationPayload, ShelterPayload, VolunteerPayload,
};
use crate::domain::entities::{
    AdoptionRecord, AnimalRecord, CampaignRecord, CampaignTypeRecord, PaymentRecord,
    PublicationRecord, ShelterRecord, VolunteerRecord,
};
use crate::domain::stores::{
    AdoptionStore, AnimalStore, CampaignStore, CampaignTypeStore, PaymentStore,
    PublicationStore, ShelterStore, VolunteerStore,
};
use crate::error::StoreError;

const ADOPTIONS: &str = "adopciones";
const PUBLICATIONS: &str = "publicaciones";
const ANIMALS: &str = "animals";
const SHELTERS: &str = "refugios";
const PAYMENTS: &str = "pagos";
const VOLUNTEERS: &str = "voluntarios";
const CAMPAIGNS: &str = "campanias";
const CAMPAIGN_TYPES: &str = "tipo_campanias";

/// JSON-over-HTTP client for the record store backend.
///
/// Each store is a collection under the base URL: `GET /{collection}` lists
/// it and `GET /{collection}/{id}` fetches one record. Every request carries
/// the configured timeout; there are no retries.
#[derive(Clone)]
pub struct HttpStoreClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpStoreClient {
    /// Builds a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Fails if `base_url` is not an absolute URL or the HTTP client cannot
    /// be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let mut base_url =
            Url::parse(base_url).with_context(|| format!("Invalid store URL: {base_url}"))?;

        // Url::join replaces the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL safe to show to clients and logs, with any password
    /// replaced by `***`.
    pub fn redacted_url(&self) -> String {
        let mut url = self.base_url.clone();
        if url.password().is_some() {
            // Only fails for URLs that cannot carry credentials at all
            let _ = url.set_password(Some("***"));
        }
        url.to_string()
    }

    /// Checks that the backend answers at all.
    ///
    /// Any HTTP response counts as reachable; only transport failures are
    /// reported.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.get("").await.map(|_| ())
    }

    async fn get(&self, relative: &str) -> Result<reqwest::Response, StoreError> {
        let path = format!("/{relative}");
        let url = self
            .base_url
            .join(relative)
            .map_err(|e| StoreError::Transport {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let started = Instant::now();
        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| StoreError::Transport {
                path: path.clone(),
                message: e.without_url().to_string(),
            })?;

        debug!(
            path,
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Store request completed"
        );

        Ok(response)
    }

    async fn list<P, R>(&self, collection: &str) -> Result<Vec<R>, StoreError>
    where
        P: DeserializeOwned,
        R: From<P>,
    {
        let response = self.get(collection).await?;
        let path = format!("/{collection}");

        if !response.status().is_success() {
            return Err(StoreError::UnexpectedStatus {
                status: response.status().as_u16(),
                path,
            });
        }

        let payloads: Vec<P> = decode(response, &path).await?;
        Ok(payloads.into_iter().map(R::from).collect())
    }

    async fn find<P, R>(&self, collection: &str, id: Uuid) -> Result<Option<R>, StoreError>
    where
        P: DeserializeOwned,
        R: From<P>,
    {
        let relative = format!("{collection}/{id}");
        let path = format!("/{relative}");
        let response = self.get(&relative).await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let payload: P = decode(response, &path).await?;
                Ok(Some(R::from(payload)))
            }
            status => Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                path,
            }),
        }
    }
}

async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
    path: &str,
) -> Result<T, StoreError> {
    let body = response.bytes().await.map_err(|e| StoreError::Transport {
        path: path.to_string(),
        message: e.to_string(),
    })?;

    serde_json::from_slice(&body).map_err(|e| StoreError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}

#[async_trait]
impl AdoptionStore for HttpStoreClient {
    async fn list_adoptions(&self) -> Result<Vec<AdoptionRecord>, StoreError> {
        self.list::<AdoptionPayload, _>(ADOPTIONS).await
    }

    async fn get_adoption(&self, id: Uuid) -> Result<Option<AdoptionRecord>, StoreError> {
        self.find::<AdoptionPayload, _>(ADOPTIONS, id).await
    }
}

#[async_trait]
impl PublicationStore for HttpStoreClient {
    async fn list_publications(&self) -> Result<Vec<PublicationRecord>, StoreError> {
        self.list::<PublicationPayload, _>(PUBLICATIONS).await
    }

    async fn get_publication(&self, id: Uuid) -> Result<Option<PublicationRecord>, StoreError> {
        self.find::<PublicationPayload, _>(PUBLICATIONS, id).await
    }
}

#[async_trait]
impl AnimalStore for HttpStoreClient {
    async fn list_animals(&self) -> Result<Vec<AnimalRecord>, StoreError> {
        self.list::<AnimalPayload, _>(ANIMALS).await
    }

    async fn get_animal(&self, id: Uuid) -> Result<Option<AnimalRecord>, StoreError> {
        self.find::<AnimalPayload, _>(ANIMALS, id).await
    }
}

#[async_trait]
impl ShelterStore for HttpStoreClient {
    async fn list_shelters(&self) -> Result<Vec<ShelterRecord>, StoreError> {
        self.list::<ShelterPayload, _>(SHELTERS).await
    }

    async fn get_shelter(&self, id: Uuid) -> Result<Option<ShelterRecord>, StoreError> {
        self.find::<ShelterPayload, _>(SHELTERS, id).await
    }
}

#[async_trait]
impl PaymentStore for HttpStoreClient {
    async fn list_payments(&self) -> Result<Vec<PaymentRecord>, StoreError> {
        self.list::<PaymentPayload, _>(PAYMENTS).await
    }

    async fn get_payment(&self, id: Uuid) -> Result<Option<PaymentRecord>, StoreError> {
        self.find::<PaymentPayload, _>(PAYMENTS, id).await
    }
}

#[async_trait]
impl VolunteerStore for HttpStoreClient {
    async fn list_volunteers(&self) -> Result<Vec<VolunteerRecord>, StoreError> {
        self.list::<VolunteerPayload, _>(VOLUNTEERS).await
    }

    async fn get_volunteer(&self, id: Uuid) -> Result<Option<VolunteerRecord>, StoreError> {
        self.find::<VolunteerPayload, _>(VOLUNTEERS, id).await
    }
}

#[async_trait]
impl CampaignStore for HttpStoreClient {
    async fn list_campaigns(&self) -> Result<Vec<CampaignRecord>, StoreError> {
        self.list::<CampaignPayload, _>(CAMPAIGNS).await
    }

    async fn get_campaign(&self, id: Uuid) -> Result<Option<CampaignRecord>, StoreError> {
        self.find::<CampaignPayload, _>(CAMPAIGNS, id).await
    }
}

#[async_trait]
impl CampaignTypeStore for HttpStoreClient {
    async fn list_campaign_types(&self) -> Result<Vec<CampaignTypeRecord>, StoreError> {
        self.list::<CampaignTypePayload, _>(CAMPAIGN_TYPES).await
    }

    async fn get_campaign_type(&self, id: Uuid) -> Result<Option<CampaignTypeRecord>, StoreError> {
        self.find::<CampaignTypePayload, _>(CAMPAIGN_TYPES, id).await
    }
}
