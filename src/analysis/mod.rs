pub mod activity;

pub use activity::{summarize, ContributionFeed};
