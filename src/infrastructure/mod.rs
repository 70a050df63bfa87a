// Infrastructure layer - External dependencies and adapters
pub mod clock;
pub mod config;
pub mod json_mapper;
pub mod random_source;
