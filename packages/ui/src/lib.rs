//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod gallery;
pub use gallery::make_gallery;

mod media;
pub use media::{discard_capture, save_capture, MediaError};

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityBanner, ActivityLog, LogLevel};

pub mod views;

pub const SNAPVAULT_CSS: Asset = asset!("/assets/snapvault.css");
