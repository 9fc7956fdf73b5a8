//! Icon web service client and on-disk icon cache.
//!
//! The icon service renders named glyphs in a requested colour. Fetches go
//! through [`cache::IconCache`], which keeps downloaded images on disk so a
//! glyph/colour pair is only fetched once.

pub mod cache;
pub mod client;

pub use cache::IconCache;
pub use client::{IconClient, IconError};
