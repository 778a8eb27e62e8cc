pub mod ads;
pub mod advertisers;
pub mod campaigns;
pub mod clients;
pub mod ml_scores;
pub mod stats;
pub mod time;
