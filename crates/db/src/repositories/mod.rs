pub mod advertiser_repo;
pub mod campaign_repo;
pub mod client_repo;
pub mod clock_repo;
pub mod ledger_repo;
pub mod ml_score_repo;
pub mod stats_repo;

pub use advertiser_repo::AdvertiserRepo;
pub use campaign_repo::CampaignRepo;
pub use client_repo::ClientRepo;
pub use clock_repo::ClockRepo;
pub use ledger_repo::LedgerRepo;
pub use ml_score_repo::MlScoreRepo;
pub use stats_repo::StatsRepo;
