//! # View Objects
//!
//! What the assembler hands back. A view is built fresh per call and never
//! mutated after it is returned.
//!
//! ```text
//! ElementView
//! ├── header      identity, resolved variant, reported type, classifications
//! ├── properties  one ElementProperties variant (+ extended properties)
//! ├── reachedBy   connecting relationship         (entry point b, c)
//! ├── related     RelationshipBuckets             (entry point c, d)
//! └── composite   CompositeParts, attached as-is  (entry point d)
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::classify::RelationshipBuckets;
use crate::model::{
    AnchorEnd, Classification, EffectiveWindow, ElementOrigin, ElementStatus, ElementVersions, Guid,
    MetadataElement, PropertyBag, Relationship, SuperTypeNames,
};
use crate::properties::{ElementProperties, VariantOf};
use crate::shape::{CompositeForm, Resolution, VariantKind};

// ============================================================================
// Header
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementHeader {
    pub guid: Guid,
    /// Variant the properties were populated as.
    pub variant: VariantKind,
    /// Type reported by the source; may be more specific than `variant`.
    pub type_name: String,
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub super_type_names: SuperTypeNames,
    #[serde(default)]
    pub status: ElementStatus,
    #[serde(default)]
    pub versions: ElementVersions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<ElementOrigin>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classifications: Vec<Classification>,
    #[serde(default)]
    pub effective: EffectiveWindow,
}

impl ElementHeader {
    pub fn new(element: &MetadataElement, resolution: &Resolution) -> Self {
        Self {
            guid: element.guid.clone(),
            variant: resolution.variant,
            type_name: resolution.type_name.clone(),
            super_type_names: element.element_type.super_type_names.clone(),
            status: element.status,
            versions: element.versions.clone(),
            origin: element.origin.clone(),
            classifications: element.classifications.clone(),
            effective: element.effective,
        }
    }

    pub fn classification(&self, name: &str) -> Option<&Classification> {
        self.classifications.iter().find(|c| c.name == name)
    }
}

// ============================================================================
// How reached
// ============================================================================

/// The relationship a view was reached through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipLink {
    pub guid: Guid,
    pub type_name: String,
    #[serde(default)]
    pub status: ElementStatus,
    #[serde(default, skip_serializing_if = "PropertyBag::is_empty")]
    pub properties: PropertyBag,
    #[serde(default)]
    pub effective: EffectiveWindow,
    /// End the viewed element occupies, when it is on either end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_end: Option<AnchorEnd>,
}

impl RelationshipLink {
    /// `properties` is a copy; the caller's relationship is left untouched.
    pub fn new(relationship: &Relationship, element: &Guid) -> Self {
        Self {
            guid: relationship.guid.clone(),
            type_name: relationship.type_name().to_owned(),
            status: relationship.status,
            properties: relationship.properties.clone(),
            effective: relationship.effective,
            element_end: relationship.anchor_end(element),
        }
    }
}

// ============================================================================
// Composite parts
// ============================================================================

/// One edge of a pre-resolved composite structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeEdge {
    pub relationship: Guid,
    pub type_name: String,
    pub from: Guid,
    pub to: Guid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A nested structure materialized outside the engine: a member graph, a
/// sub-component list, a hierarchy or a lineage graph. The assembler only
/// attaches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeParts {
    pub form: CompositeForm,
    #[serde(default)]
    pub nodes: Vec<ElementView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<CompositeEdge>,
}

impl CompositeParts {
    pub fn new(form: CompositeForm) -> Self {
        Self { form, nodes: Vec::new(), edges: Vec::new() }
    }

    pub fn with_node(mut self, node: ElementView) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_edge(mut self, edge: CompositeEdge) -> Self {
        self.edges.push(edge);
        self
    }

    pub fn node(&self, guid: &Guid) -> Option<&ElementView> {
        self.nodes.iter().find(|n| &n.header.guid == guid)
    }
}

// ============================================================================
// ElementView
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementView {
    pub header: ElementHeader,
    pub properties: ElementProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reached_by: Option<RelationshipLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<RelationshipBuckets>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite: Option<CompositeParts>,
}

impl ElementView {
    pub fn new(header: ElementHeader, properties: ElementProperties) -> Self {
        Self { header, properties, reached_by: None, related: None, composite: None }
    }

    pub fn guid(&self) -> &Guid {
        &self.header.guid
    }

    pub fn variant(&self) -> VariantKind {
        self.header.variant
    }

    pub fn type_name(&self) -> &str {
        &self.header.type_name
    }

    pub fn extended_properties(&self) -> &PropertyBag {
        self.properties.extended_properties()
    }

    /// Typed access to the properties, `None` if the view holds another variant.
    pub fn properties_as<T: VariantOf>(&self) -> Option<&T> {
        self.properties.as_variant::<T>()
    }
}
