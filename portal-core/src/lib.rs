//! Browser-independent core of the parent portal: wire types, view-model
//! projections, action contracts and the snapshot store the UI drives.

pub mod absence;
pub mod actions;
pub mod config;
pub mod control;
pub mod dto;
pub mod envelope;
pub mod error;
pub mod filters;
pub mod format;
pub mod identity;
pub mod nav;
pub mod store;
pub mod toast;
pub mod view;

pub use config::PortalConfig;
