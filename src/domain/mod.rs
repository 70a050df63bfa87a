// Domain layer - dashboard model, time series and hover state
pub mod dashboard;
pub mod hover;
pub mod sample;
pub mod series;
pub mod tooltip;
