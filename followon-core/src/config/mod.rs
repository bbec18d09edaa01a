//! Configuration model.
//!
//! Weights, windows, cutpoints, and targets are externally supplied and
//! never hard-coded in engine logic. Loading layers (files, environment,
//! CLI) belong to the host; this crate only parses TOML strings, supplies
//! compiled defaults, and validates fail-fast.
//!
//! "Reload" means constructing a new config and recreating the components
//! that hold it — there is no hidden shared mutable state to invalidate.

pub mod detection_config;
pub mod perf_config;
pub mod resolver_config;
pub mod scoring_config;
pub mod transition_config;
pub mod window_config;

pub use detection_config::DetectionConfig;
pub use perf_config::PerfConfig;
pub use resolver_config::ResolverConfig;
pub use scoring_config::ScoringConfig;
pub use transition_config::TransitionConfig;
pub use window_config::WindowConfig;
