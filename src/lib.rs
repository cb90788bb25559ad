//! # metaview: Typed Views over an Open Metadata Graph
//!
//! A projection engine that turns generic, self-describing metadata
//! elements (a type name plus an open property bag, linked by typed
//! directed relationships) into strongly-typed view objects.
//!
//! ## Design Principles
//!
//! 1. **Oracle-first**: `TypeOracle` is the contract with whoever owns the type hierarchy
//! 2. **Tag before fill**: the variant is resolved before any property is read
//! 3. **Nothing dropped**: unknown properties land in `extended_properties`, verbatim
//! 4. **Scoped rules**: relationship routing tables belong to one context each
//!
//! ## Quick Start
//!
//! ```rust
//! use metaview::{MetadataElement, Projector, TargetShape, TypeRegistry};
//! use metaview::properties::PersonProperties;
//!
//! # fn example() -> metaview::Result<()> {
//! let projector = Projector::new(TypeRegistry::open_metadata());
//!
//! let person = MetadataElement::new("guid-1", "Person")
//!     .with_property("qualifiedName", "Person::ada")
//!     .with_property("givenNames", "Ada")
//!     .with_property("favouriteEngine", "analytical");
//!
//! let view = projector.element_view(TargetShape::ActorProfile, Some(&person), "getActor")?;
//! let props = view.properties_as::<PersonProperties>().unwrap();
//! assert_eq!(props.given_names.as_deref(), Some("Ada"));
//! assert!(view.extended_properties().contains_key("favouriteEngine"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | Shape Resolver | `shape` | Most specific known variant for a type name |
//! | Property Extractor | `extract`, `properties` | Named fields + residual bag |
//! | Relationship Classifier | `classify` | Relationships into named buckets |
//! | View Assembler | `assembler`, `view` | The four request shapes |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod types;
pub mod oracle;
pub mod shape;
pub mod extract;
pub mod properties;
pub mod classify;
pub mod view;
pub mod assembler;
pub mod cache;
pub mod config;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Value, PropertyBag, Guid, ElementType, MetadataElement, ElementStub,
    Relationship, RelatedElement, AnchorEnd, Classification, EffectiveWindow,
};

// ============================================================================
// Re-exports: Engine
// ============================================================================

pub use oracle::{TypeOracle, TypeRegistry};
pub use shape::{VariantKind, TargetShape, CompositeForm, Resolution};
pub use properties::ElementProperties;
pub use classify::{BucketKey, RelationshipBuckets, RuleSet};
pub use view::{ElementView, ElementHeader, RelationshipLink, CompositeParts, CompositeEdge};
pub use assembler::Projector;
pub use config::ProjectorConfig;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing {what} for {shape} in {method} ({service})")]
    MissingInstance {
        what: &'static str,
        shape: TargetShape,
        method: String,
        service: String,
    },

    #[error("{shape} cannot hold {type_name} (resolved as {variant}) in {method} ({service})")]
    InvalidTargetShape {
        shape: TargetShape,
        variant: VariantKind,
        type_name: String,
        method: String,
        service: String,
    },

    #[error("Malformed {what} {guid}: no type designator, requested as {shape} in {method} ({service})")]
    MalformedInstance {
        what: &'static str,
        guid: String,
        shape: TargetShape,
        method: String,
        service: String,
    },

    #[error("{shape} has no {operation:?} composite in {method} ({service})")]
    UnsupportedOperation {
        shape: TargetShape,
        operation: CompositeForm,
        method: String,
        service: String,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Stable classification of an [`Error`] for the service layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingInstance,
    InvalidTargetShape,
    MalformedInstance,
    UnsupportedOperation,
    Config,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::MissingInstance => "MISSING_INSTANCE",
            ErrorKind::InvalidTargetShape => "INVALID_TARGET_SHAPE",
            ErrorKind::MalformedInstance => "MALFORMED_INSTANCE",
            ErrorKind::UnsupportedOperation => "UNSUPPORTED_OPERATION",
            ErrorKind::Config => "CONFIG",
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingInstance { .. } => ErrorKind::MissingInstance,
            Error::InvalidTargetShape { .. } => ErrorKind::InvalidTargetShape,
            Error::MalformedInstance { .. } => ErrorKind::MalformedInstance,
            Error::UnsupportedOperation { .. } => ErrorKind::UnsupportedOperation,
            Error::Config(_) => ErrorKind::Config,
        }
    }

    /// The requested shape, for every projection failure.
    pub fn shape(&self) -> Option<TargetShape> {
        match self {
            Error::MissingInstance { shape, .. }
            | Error::InvalidTargetShape { shape, .. }
            | Error::MalformedInstance { shape, .. }
            | Error::UnsupportedOperation { shape, .. } => Some(*shape),
            Error::Config(_) => None,
        }
    }

    /// The calling entry point, for every projection failure.
    pub fn method(&self) -> Option<&str> {
        match self {
            Error::MissingInstance { method, .. }
            | Error::InvalidTargetShape { method, .. }
            | Error::MalformedInstance { method, .. }
            | Error::UnsupportedOperation { method, .. } => Some(method),
            Error::Config(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
