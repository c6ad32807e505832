//! JSON payloads returned by the REST record stores.
//!
//! Payloads mirror the backend's field names and are converted into domain
//! records right after decoding. Timestamps are parsed leniently: RFC 3339,
//! or naive ISO-8601 read as UTC. A timestamp that cannot be parsed is
//! treated as absent rather than failing the whole payload.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use uuid::Uuid;

use crate::domain::entities::{
    AdoptionRecord, AnimalRecord, CampaignRecord, CampaignTypeRecord, PaymentRecord,
    PublicationRecord, ShelterRecord, VolunteerRecord,
};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a backend timestamp, normalized to UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(ts.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

#[derive(Debug, Deserialize)]
pub struct AdoptionPayload {
    pub id_adopcion: Uuid,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub fecha_adopcion: Option<DateTime<Utc>>,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub id_publicacion: Option<Uuid>,
}

impl From<AdoptionPayload> for AdoptionRecord {
    fn from(p: AdoptionPayload) -> Self {
        AdoptionRecord::new(p.id_adopcion, p.fecha_adopcion, p.estado, p.id_publicacion)
    }
}

#[derive(Debug, Deserialize)]
pub struct PublicationPayload {
    pub id_publicacion: Uuid,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub fecha_publicacion: Option<DateTime<Utc>>,
    #[serde(default)]
    pub id_animal: Option<Uuid>,
}

impl From<PublicationPayload> for PublicationRecord {
    fn from(p: PublicationPayload) -> Self {
        PublicationRecord::new(p.id_publicacion, p.fecha_publicacion, p.id_animal)
    }
}

#[derive(Debug, Deserialize)]
pub struct AnimalPayload {
    pub id_animal: Uuid,
    #[serde(default)]
    pub especie: Option<String>,
    #[serde(default)]
    pub id_refugio: Option<Uuid>,
}

impl From<AnimalPayload> for AnimalRecord {
    fn from(p: AnimalPayload) -> Self {
        AnimalRecord::new(p.id_animal, p.especie, p.id_refugio)
    }
}

#[derive(Debug, Deserialize)]
pub struct ShelterPayload {
    pub id_refugio: Uuid,
    #[serde(default)]
    pub nombre: Option<String>,
}

impl From<ShelterPayload> for ShelterRecord {
    fn from(p: ShelterPayload) -> Self {
        ShelterRecord::new(p.id_refugio, p.nombre)
    }
}

/// Payment as stored by the backend. `monto` may arrive as a number or as
/// a decimal string.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PaymentPayload {
    pub id_pago: Uuid,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub monto: Option<f64>,
    #[serde(default)]
    pub metodo_pago: Option<String>,
    #[serde(default)]
    pub estado_pago: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub fecha_pago_completado: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub id_donacion: Option<Uuid>,
}

impl From<PaymentPayload> for PaymentRecord {
    fn from(p: PaymentPayload) -> Self {
        PaymentRecord {
            id: p.id_pago,
            amount: p.monto.unwrap_or(0.0),
            method: p.metodo_pago,
            status: p.estado_pago,
            completed_at: p.fecha_pago_completado,
            created_at: p.created_at,
            donation_id: p.id_donacion,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VolunteerPayload {
    pub id_voluntario: Uuid,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub id_campania: Option<Uuid>,
}

impl From<VolunteerPayload> for VolunteerRecord {
    fn from(p: VolunteerPayload) -> Self {
        VolunteerRecord::new(p.id_voluntario, p.estado, p.id_campania)
    }
}

#[derive(Debug, Deserialize)]
pub struct CampaignPayload {
    pub id_campania: Uuid,
    #[serde(default)]
    pub id_tipo_campania: Option<Uuid>,
}

impl From<CampaignPayload> for CampaignRecord {
    fn from(p: CampaignPayload) -> Self {
        CampaignRecord::new(p.id_campania, p.id_tipo_campania)
    }
}

#[derive(Debug, Deserialize)]
pub struct CampaignTypePayload {
    pub id_tipo_campania: Uuid,
    #[serde(default)]
    pub nombre: Option<String>,
}

impl From<CampaignTypePayload> for CampaignTypeRecord {
    fn from(p: CampaignTypePayload) -> Self {
        CampaignTypeRecord::new(p.id_tipo_campania, p.nombre)
    }
}
