//! # GitHub Profile Dashboard Renderer
//!
//! `gitpulse` renders dynamic SVG dashboards for GitHub profile readmes:
//! stat cards, streak metrics, a smoothed contribution chart, a language
//! donut and a trophy strip, all composed into one themeable document.
//!
//! ## Features
//!
//! - Short-TTL caching of upstream resources with a bounded store
//! - Streak derivation from raw daily activity, including the grace-day
//!   rule for the current day
//! - Declarative SVG composition from typed nodes with centralized escaping
//! - Five built-in color themes selected per request
//! - Graceful degradation when optional upstream data is unavailable
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use gitpulse::fetch::{ProfileService, SampleSource};
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let service = Arc::new(ProfileService::new(SampleSource::new()));
//! gitpulse::server::serve(service, 3000, runtime.handle().clone()).unwrap();
//! ```

pub mod analysis;
pub mod cache;
pub mod compose;
pub mod fetch;
pub mod render;
pub mod server;
pub mod theme;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use compose::render_dashboard;
pub use fetch::{DashboardData, ProfileService, SampleSource};
pub use types::{ActivityDay, Alignment, ContributionSummary, UserProfile};
