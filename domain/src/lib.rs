//! # Domain
//!
//! Platform-independent logic behind the referee match calendar page.
//!
//! Everything here runs natively as well as in the browser: the frontend
//! crate only supplies DOM bindings through [`render::RenderPort`] and a way
//! to read the host configuration through [`config_resolver::ConfigSource`].
//!
//! ## Module Organization
//!
//! - **calendar**: month grid generation, day classification and tooltip text
//! - **match_detail**: projection of a clicked match into the detail modal
//! - **render**: rendering port and the clear-then-rebuild render pass
//! - **config_resolver**: bounded wait for the host page configuration
//! - **navigation**: sidebar page switching and mobile show/hide state
//! - **error**: error types shared by the modules above

pub mod calendar;
pub mod config_resolver;
pub mod error;
pub mod match_detail;
pub mod navigation;
pub mod render;

pub use calendar::CalendarGridBuilder;
pub use config_resolver::{resolve_config, ConfigSource, ResolvedConfig};
pub use error::{CalendarError, ConfigError, DetailError};
pub use render::{CalendarRenderer, RenderOutcome, RenderPort, StatsDisplay};
