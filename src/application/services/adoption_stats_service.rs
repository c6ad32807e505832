//! Adoption statistics: species and shelter rankings, monthly trend, summary.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::reference_resolver::ReferenceResolver;
use crate::domain::aggregation::{
    CategoryCount, DEFAULT_LOOKBACK_MONTHS, MonthlyBucket, aggregate_by_month,
    aggregate_categories, lookback_cutoff, start_of_month, start_of_year,
};
use crate::domain::entities::AdoptionRecord;
use crate::domain::stores::{AdoptionStore, RecordStores};
use crate::error::AppError;

/// Overview of adoption activity.
#[derive(Debug, Clone, PartialEq)]
pub struct AdoptionSummary {
    pub total_adoptions: u64,
    pub adoptions_this_month: u64,
    pub adoptions_this_year: u64,
    /// Always `None`: no store exposes the animals' intake dates.
    pub average_days_to_adoption: Option<f64>,
    pub species_ranking: Vec<CategoryCount>,
    pub shelter_ranking: Vec<CategoryCount>,
    pub monthly_trend: Vec<MonthlyBucket>,
}

/// Service computing adoption statistics.
///
/// Rejected and cancelled adoptions, and adoptions without a status, are
/// dropped before any counting. Species and shelters are resolved through
/// the [`ReferenceResolver`]; adoptions whose chain cannot be resolved still
/// count toward totals but not toward breakdowns.
pub struct AdoptionStatsService {
    adoptions: Arc<dyn AdoptionStore>,
    resolver: ReferenceResolver,
}

impl AdoptionStatsService {
    /// Creates a new adoption statistics service.
    pub fn new(stores: &RecordStores, resolver: ReferenceResolver) -> Self {
        Self {
            adoptions: stores.adoptions.clone(),
            resolver,
        }
    }

    async fn countable_adoptions(&self) -> Result<Vec<AdoptionRecord>, AppError> {
        let adoptions = self.adoptions.list_adoptions().await?;
        let fetched = adoptions.len();

        let countable: Vec<AdoptionRecord> = adoptions
            .into_iter()
            .filter(AdoptionRecord::is_countable)
            .collect();

        debug!(fetched, countable = countable.len(), "Adoptions loaded");
        Ok(countable)
    }

    /// Ranks species by number of adoptions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the adoptions store cannot be listed.
    pub async fn species_ranking(&self) -> Result<Vec<CategoryCount>, AppError> {
        let adoptions = self.countable_adoptions().await?;
        let species = self.resolver.resolve_all_species(&adoptions).await;

        Ok(aggregate_categories(species.into_iter().flatten()))
    }

    /// Ranks shelters by number of adoptions of the animals they housed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the adoptions store cannot be listed.
    pub async fn shelter_ranking(&self) -> Result<Vec<CategoryCount>, AppError> {
        let adoptions = self.countable_adoptions().await?;
        let placements = self.resolver.resolve_all_placements(&adoptions).await;

        Ok(aggregate_categories(
            placements.into_iter().filter_map(|p| p.shelter),
        ))
    }

    /// Adoptions per month over the last `months` lookback months.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the adoptions store cannot be listed.
    pub async fn monthly_trend(&self, months: u32) -> Result<Vec<MonthlyBucket>, AppError> {
        self.monthly_trend_at(months, Utc::now()).await
    }

    /// [`Self::monthly_trend`] evaluated at a fixed instant.
    pub async fn monthly_trend_at(
        &self,
        months: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<MonthlyBucket>, AppError> {
        let cutoff = lookback_cutoff(now, months);

        // Only adoptions inside the window need their species looked up
        let recent: Vec<AdoptionRecord> = self
            .countable_adoptions()
            .await?
            .into_iter()
            .filter(|a| a.adopted_at.is_some_and(|at| at >= cutoff))
            .collect();

        let species = self.resolver.resolve_all_species(&recent).await;

        let entries = recent.iter().filter_map(|a| a.adopted_at).zip(species);

        Ok(aggregate_by_month(entries, months, now))
    }

    /// Builds the adoption overview.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the adoptions store cannot be listed.
    pub async fn summary(&self) -> Result<AdoptionSummary, AppError> {
        self.summary_at(Utc::now()).await
    }

    /// [`Self::summary`] evaluated at a fixed instant.
    ///
    /// Fetches the adoptions once and resolves each one once; the rankings
    /// and the trend all derive from that single pass.
    pub async fn summary_at(&self, now: DateTime<Utc>) -> Result<AdoptionSummary, AppError> {
        let adoptions = self.countable_adoptions().await?;
        let placements = self.resolver.resolve_all_placements(&adoptions).await;

        let month_start = start_of_month(now);
        let year_start = start_of_year(now);
        let count_since = |start: DateTime<Utc>| {
            adoptions
                .iter()
                .filter(|a| a.adopted_at.is_some_and(|at| at >= start))
                .count() as u64
        };

        let species_ranking =
            aggregate_categories(placements.iter().filter_map(|p| p.species.as_deref()));
        let shelter_ranking =
            aggregate_categories(placements.iter().filter_map(|p| p.shelter.as_deref()));

        let trend_entries = adoptions
            .iter()
            .zip(placements.iter())
            .filter_map(|(a, p)| a.adopted_at.map(|at| (at, p.species.clone())));
        let monthly_trend = aggregate_by_month(trend_entries, DEFAULT_LOOKBACK_MONTHS, now);

        Ok(AdoptionSummary {
            total_adoptions: adoptions.len() as u64,
            adoptions_this_month: count_since(month_start),
            adoptions_this_year: count_since(year_start),
            average_days_to_adoption: None,
            species_ranking,
            shelter_ranking,
            monthly_trend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{StoreMocks, adoption, adoption_at};
    use crate::domain::entities::ShelterRecord;
    use crate::error::StoreError;
    use chrono::TimeZone;
    use std::collections::HashMap;
    use uuid::Uuid;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn service(mocks: StoreMocks) -> AdoptionStatsService {
        let stores = mocks.into_stores();
        let resolver = ReferenceResolver::new(&stores, 4);
        AdoptionStatsService::new(&stores, resolver)
    }

    #[tokio::test]
    async fn test_species_ranking_excludes_rejected() {
        let perro_a = Uuid::new_v4();
        let perro_b = Uuid::new_v4();
        let gato = Uuid::new_v4();

        let records = vec![
            adoption("completada", Some(perro_a)),
            adoption("completada", Some(perro_b)),
            adoption("rechazada", Some(gato)),
        ];

        let mut mocks = StoreMocks::default();
        mocks
            .adoptions
            .expect_list_adoptions()
            .times(1)
            .returning(move || Ok(records.clone()));
        let mocks = mocks.with_catalog(
            HashMap::from([(perro_a, "perro"), (perro_b, "perro"), (gato, "gato")]),
            None,
        );

        let ranking = service(mocks).species_ranking().await.unwrap();

        assert_eq!(
            ranking,
            vec![CategoryCount {
                category: "perro".to_string(),
                count: 2,
                percentage: 100.0,
            }]
        );
    }

    #[tokio::test]
    async fn test_species_ranking_skips_unresolved_adoption() {
        let perro = Uuid::new_v4();
        let unknown = Uuid::new_v4();
        let records = vec![
            adoption("completada", Some(unknown)),
            adoption("completada", Some(perro)),
            adoption("completada", None),
        ];

        let mut mocks = StoreMocks::default();
        mocks
            .adoptions
            .expect_list_adoptions()
            .returning(move || Ok(records.clone()));
        let mocks = mocks.with_catalog(HashMap::from([(perro, "perro")]), None);

        let ranking = service(mocks).species_ranking().await.unwrap();

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].count, 1);
        assert_eq!(ranking[0].percentage, 100.0);
    }

    #[tokio::test]
    async fn test_root_fetch_failure_propagates() {
        let mut mocks = StoreMocks::default();
        mocks.adoptions.expect_list_adoptions().returning(|| {
            Err(StoreError::UnexpectedStatus {
                status: 503,
                path: "/adopciones".to_string(),
            })
        });

        let result = service(mocks).species_ranking().await;

        assert!(matches!(result, Err(AppError::Upstream { .. })));
    }

    #[tokio::test]
    async fn test_monthly_trend_buckets_within_window() {
        let perro = Uuid::new_v4();
        let records = vec![
            adoption_at("completada", at(2024, 1, 15), Some(perro)),
            adoption_at("completada", at(2024, 1, 20), None),
            adoption_at("completada", at(2023, 3, 1), Some(perro)),
            adoption_at("cancelado", at(2024, 2, 1), Some(perro)),
        ];

        let mut mocks = StoreMocks::default();
        mocks
            .adoptions
            .expect_list_adoptions()
            .returning(move || Ok(records.clone()));
        let mocks = mocks.with_catalog(HashMap::from([(perro, "perro")]), None);

        let trend = service(mocks)
            .monthly_trend_at(12, at(2024, 6, 1))
            .await
            .unwrap();

        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].period, "2024-01");
        assert_eq!(trend[0].total, 2);
        assert_eq!(trend[0].breakdown.len(), 1);
        assert_eq!(trend[0].breakdown[0].count, 1);
        assert_eq!(trend[0].breakdown[0].percentage, 100.0);
    }

    #[tokio::test]
    async fn test_summary_of_empty_store() {
        let mut mocks = StoreMocks::default();
        mocks
            .adoptions
            .expect_list_adoptions()
            .returning(|| Ok(vec![]));

        let summary = service(mocks).summary_at(at(2024, 6, 1)).await.unwrap();

        assert_eq!(summary.total_adoptions, 0);
        assert_eq!(summary.adoptions_this_month, 0);
        assert_eq!(summary.adoptions_this_year, 0);
        assert!(summary.average_days_to_adoption.is_none());
        assert!(summary.species_ranking.is_empty());
        assert!(summary.shelter_ranking.is_empty());
        assert!(summary.monthly_trend.is_empty());
    }

    #[tokio::test]
    async fn test_summary_survives_missing_publication() {
        let perro = Uuid::new_v4();
        let missing = Uuid::new_v4();
        let shelter = Uuid::new_v4();
        let now = at(2024, 6, 18);
        let records = vec![
            adoption_at("completada", at(2024, 6, 2), Some(perro)),
            adoption_at("completada", at(2024, 3, 10), Some(missing)),
            adoption_at("en proceso", at(2023, 11, 5), Some(perro)),
            adoption("rechazado", Some(perro)),
        ];

        let mut mocks = StoreMocks::default();
        mocks
            .adoptions
            .expect_list_adoptions()
            .times(1)
            .returning(move || Ok(records.clone()));
        mocks
            .shelters
            .expect_get_shelter()
            .returning(|id| Ok(Some(ShelterRecord::new(id, Some("Patitas".to_string())))));
        let mocks = mocks.with_catalog(HashMap::from([(perro, "perro")]), Some(shelter));

        let summary = service(mocks).summary_at(now).await.unwrap();

        assert_eq!(summary.total_adoptions, 3);
        assert_eq!(summary.adoptions_this_month, 1);
        assert_eq!(summary.adoptions_this_year, 2);

        assert_eq!(summary.species_ranking.len(), 1);
        assert_eq!(summary.species_ranking[0].category, "perro");
        assert_eq!(summary.species_ranking[0].count, 2);

        assert_eq!(summary.shelter_ranking.len(), 1);
        assert_eq!(summary.shelter_ranking[0].category, "Patitas");
        assert_eq!(summary.shelter_ranking[0].count, 2);

        let periods: Vec<&str> = summary
            .monthly_trend
            .iter()
            .map(|b| b.period.as_str())
            .collect();
        assert_eq!(periods, vec!["2023-11", "2024-03", "2024-06"]);
        assert_eq!(summary.monthly_trend[1].total, 1);
        assert!(summary.monthly_trend[1].breakdown.is_empty());
    }

    #[tokio::test]
    async fn test_shelter_ranking_drops_animals_without_shelter() {
        let housed = Uuid::new_v4();
        let stray = Uuid::new_v4();
        let shelter_id = Uuid::new_v4();
        let records = vec![
            adoption("completada", Some(housed)),
            adoption("completada", Some(stray)),
        ];

        let mut mocks = StoreMocks::default();
        mocks
            .adoptions
            .expect_list_adoptions()
            .returning(move || Ok(records.clone()));
        mocks
            .publications
            .expect_get_publication()
            .returning(|id| {
                Ok(Some(crate::domain::entities::PublicationRecord::new(
                    id,
                    None,
                    Some(id),
                )))
            });
        mocks.animals.expect_get_animal().returning(move |id| {
            let shelter = (id == housed).then_some(shelter_id);
            Ok(Some(crate::domain::entities::AnimalRecord::new(
                id,
                Some("gato".to_string()),
                shelter,
            )))
        });
        mocks
            .shelters
            .expect_get_shelter()
            .times(1)
            .returning(|id| Ok(Some(ShelterRecord::new(id, Some("Huellitas".to_string())))));

        let ranking = service(mocks).shelter_ranking().await.unwrap();

        assert_eq!(
            ranking,
            vec![CategoryCount {
                category: "Huellitas".to_string(),
                count: 1,
                percentage: 100.0,
            }]
        );
    }

    #[tokio::test]
    async fn test_species_ranking_is_idempotent() {
        let perro = Uuid::new_v4();
        let gato = Uuid::new_v4();
        let records = vec![
            adoption("completada", Some(gato)),
            adoption("completada", Some(perro)),
        ];

        let mut mocks = StoreMocks::default();
        mocks
            .adoptions
            .expect_list_adoptions()
            .times(2)
            .returning(move || Ok(records.clone()));
        let mocks = mocks.with_catalog(HashMap::from([(perro, "perro"), (gato, "gato")]), None);
        let service = service(mocks);

        let first = service.species_ranking().await.unwrap();
        let second = service.species_ranking().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first[0].category, "gato");
        assert_eq!(first[0].percentage, 50.0);
    }
}
