pub mod database;
pub mod metrics;

pub use database::ConferenceDb;
pub use metrics::{get_metrics, init_metrics};
