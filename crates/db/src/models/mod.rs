pub mod advertiser;
pub mod campaign;
pub mod client;
pub mod clock;
pub mod event;
pub mod ml_score;
