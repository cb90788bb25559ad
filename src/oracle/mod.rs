//! # Type Oracle
//!
//! The contract between the projection engine and whoever owns the type
//! hierarchy. The engine never walks the hierarchy itself; every "is this
//! a kind of X?" question goes through this trait.
//!
//! ## Implementations
//!
//! | Oracle | Module | Description |
//! |--------|--------|-------------|
//! | `TypeRegistry` | `registry` | In-memory hierarchy for embedding/testing |
//!
//! A type may have several unrelated ancestors, so `is_type_of` can be
//! true for more than one candidate at once.

pub mod registry;

use std::sync::Arc;

pub use registry::TypeRegistry;

/// Subtype-membership test service.
pub trait TypeOracle: Send + Sync {
    /// Is `type_name` the same as `candidate`, or one of its descendants?
    fn is_type_of(&self, type_name: &str, candidate: &str) -> bool;

    /// Does `type_name` match any of the candidates?
    fn is_type_of_any(&self, type_name: &str, candidates: &[&str]) -> bool {
        candidates.iter().any(|c| self.is_type_of(type_name, c))
    }

    /// Counter that moves whenever the hierarchy changes. Memoized views
    /// are only reused under the generation they were built in. A fixed
    /// hierarchy may keep the default.
    fn generation(&self) -> u64 {
        0
    }
}

impl<T: TypeOracle + ?Sized> TypeOracle for &T {
    fn is_type_of(&self, type_name: &str, candidate: &str) -> bool {
        (**self).is_type_of(type_name, candidate)
    }

    fn is_type_of_any(&self, type_name: &str, candidates: &[&str]) -> bool {
        (**self).is_type_of_any(type_name, candidates)
    }

    fn generation(&self) -> u64 {
        (**self).generation()
    }
}

impl<T: TypeOracle + ?Sized> TypeOracle for Arc<T> {
    fn is_type_of(&self, type_name: &str, candidate: &str) -> bool {
        (**self).is_type_of(type_name, candidate)
    }

    fn is_type_of_any(&self, type_name: &str, candidates: &[&str]) -> bool {
        (**self).is_type_of_any(type_name, candidates)
    }

    fn generation(&self) -> u64 {
        (**self).generation()
    }
}
