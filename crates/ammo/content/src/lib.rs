//! Data-driven content and loaders for the ammunition model.
//!
//! This crate reads the tracker configuration from TOML files and turns it
//! into validated `ammo-core` values. The ammunition catalogs themselves are
//! compiled into `ammo-core` and never loaded from disk.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult};
