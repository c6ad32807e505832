//! Data Transfer Objects for API requests and responses.
//!
//! Response DTOs carry the Spanish field names the dashboards consume and
//! are built from the service results with `From` conversions. Query
//! parameters use `serde_with` for parsing and `validator` for bounds.

pub mod activity;
pub mod adoptions;
pub mod category;
pub mod donations;
pub mod health;
pub mod lookback;
pub mod volunteers;

pub use activity::MonthlyActivityDto;
pub use adoptions::{AdoptionSummaryResponse, MonthlyAdoptionsDto};
pub use category::CategoryCountDto;
pub use donations::DonationSummaryResponse;
pub use lookback::LookbackParams;
pub use volunteers::CampaignTypeParticipationDto;
