//! Simulation de canal bruité pour les symboles FEC

pub mod error_model;
pub mod channel;
pub mod metrics;

pub use error_model::ErrorModel;
pub use channel::{SymbolChannel, ChannelConfig};
pub use metrics::{ChannelMetrics, MetricsCollector};
