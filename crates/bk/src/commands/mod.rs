//! Command handlers for the `bk` CLI.

pub mod cache_cmd;
pub mod colour_cmd;
pub mod icons;
pub mod notify_cmd;
pub mod times;
pub mod version;
