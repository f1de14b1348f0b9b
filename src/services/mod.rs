pub mod chart_service;
pub mod metrics_service;
