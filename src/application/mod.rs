// Application layer - use cases and the seams they depend on
pub mod chart_view;
pub mod clock;
pub mod overview_service;
pub mod value_source;
pub mod view_service;
