//! Canonical local storage tree
//!
//! Persisted orbit products live under a two-level tree keyed by year and
//! product category: `{root}/{year}/{category}/`, e.g. `orbits/2021/sp3/`.
//! The analysis configuration writer uses a sibling `{root}/input/` branch.
//!
//! The root is resolved once at startup ([`StorageLayout::from_env_or`]) and
//! passed around as a value, so independent orchestrations and parallel test
//! runs never share implicit process-wide state.

use crate::registry::ProductCategory;
use std::path::{Path, PathBuf};

/// Environment variable consulted for the storage root when no explicit
/// path is given
pub const ORBIT_ROOT_ENV: &str = "ORBITS";

/// Default storage root when neither a flag nor the environment names one
pub const DEFAULT_ORBIT_ROOT: &str = "./orbits";

/// Local directory layout for retrieved products
#[derive(Debug, Clone)]
pub struct StorageLayout {
    root: PathBuf,
}

impl StorageLayout {
    /// Create a layout rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the root from an optional explicit path, the [`ORBIT_ROOT_ENV`]
    /// variable, or [`DEFAULT_ORBIT_ROOT`], in that order
    pub fn from_env_or(explicit: Option<PathBuf>) -> Self {
        let root = explicit
            .or_else(|| std::env::var(ORBIT_ROOT_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ORBIT_ROOT));
        Self { root }
    }

    /// The storage root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory for a persisted product: `{root}/{year}/{category}`
    pub fn product_dir(&self, year: i32, category: ProductCategory) -> PathBuf {
        self.root
            .join(format!("{year:04}"))
            .join(category.dir_name())
    }

    /// Directory for analysis configuration files: `{root}/input`
    pub fn input_dir(&self) -> PathBuf {
        self.root.join("input")
    }
}
