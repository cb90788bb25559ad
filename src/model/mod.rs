//! # Open Metadata Model
//!
//! Read-only snapshots of the generic, self-describing metadata graph:
//! elements with a type designator and an open property bag, and typed
//! directed relationships between them.
//!
//! Design rule: this module is pure data. No I/O, no state, no type
//! hierarchy knowledge; membership tests belong to the oracle.

pub mod value;
pub mod property_bag;
pub mod effective;
pub mod classification;
pub mod element;
pub mod relationship;

pub use value::{Value, EnumValue};
pub use property_bag::PropertyBag;
pub use effective::EffectiveWindow;
pub use classification::Classification;
pub use element::{
    Guid, ElementType, SuperTypeNames, ElementStatus, ElementVersions,
    ElementOrigin, OriginCategory, MetadataElement, ElementStub,
};
pub use relationship::{Relationship, RelatedElement, AnchorEnd};
