//! Relationship (typed, directed link) between two metadata elements.

use serde::{Deserialize, Serialize};

use super::{EffectiveWindow, ElementStatus, ElementStub, ElementType, ElementVersions, Guid, MetadataElement, PropertyBag, Value};

/// Which end of a relationship the anchor element occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorEnd {
    End1,
    End2,
}

impl AnchorEnd {
    /// The end the far element sits on.
    pub fn far_end(self) -> AnchorEnd {
        match self {
            AnchorEnd::End1 => AnchorEnd::End2,
            AnchorEnd::End2 => AnchorEnd::End1,
        }
    }
}

/// A relationship snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub guid: Guid,
    #[serde(rename = "type")]
    pub relationship_type: ElementType,
    #[serde(default)]
    pub status: ElementStatus,
    #[serde(default)]
    pub versions: ElementVersions,
    pub end1: ElementStub,
    pub end2: ElementStub,
    #[serde(default)]
    pub properties: PropertyBag,
    #[serde(default)]
    pub effective: EffectiveWindow,
}

impl Relationship {
    pub fn new(
        guid: impl Into<Guid>,
        type_name: impl Into<String>,
        end1: ElementStub,
        end2: ElementStub,
    ) -> Self {
        Self {
            guid: guid.into(),
            relationship_type: ElementType::named(type_name),
            status: ElementStatus::default(),
            versions: ElementVersions::default(),
            end1,
            end2,
            properties: PropertyBag::new(),
            effective: EffectiveWindow::default(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key, value);
        self
    }

    pub fn with_effective(mut self, effective: EffectiveWindow) -> Self {
        self.effective = effective;
        self
    }

    pub fn type_name(&self) -> &str {
        &self.relationship_type.type_name
    }

    pub fn end(&self, end: AnchorEnd) -> &ElementStub {
        match end {
            AnchorEnd::End1 => &self.end1,
            AnchorEnd::End2 => &self.end2,
        }
    }

    /// Which end the given element sits on. End1 wins for self-links.
    pub fn anchor_end(&self, anchor: &Guid) -> Option<AnchorEnd> {
        if &self.end1.guid == anchor { Some(AnchorEnd::End1) }
        else if &self.end2.guid == anchor { Some(AnchorEnd::End2) }
        else { None }
    }

    /// The "other" end of the relationship from the given element.
    pub fn other_end(&self, from: &Guid) -> Option<&ElementStub> {
        self.anchor_end(from).map(|end| self.end(end.far_end()))
    }
}

/// A relationship seen from an anchor element, plus the element at the
/// far end (which the retrieval layer may have failed to supply).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedElement {
    pub relationship: Relationship,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<MetadataElement>,
    pub anchor_end: AnchorEnd,
}

impl RelatedElement {
    pub fn new(relationship: Relationship, element: Option<MetadataElement>, anchor_end: AnchorEnd) -> Self {
        Self { relationship, element, anchor_end }
    }

    /// Build from the anchor's point of view. Returns `None` when the
    /// anchor is on neither end of the relationship.
    pub fn from_anchor(anchor: &Guid, relationship: Relationship, far: Option<MetadataElement>) -> Option<Self> {
        let anchor_end = relationship.anchor_end(anchor)?;
        Some(Self::new(relationship, far, anchor_end))
    }

    pub fn type_name(&self) -> &str {
        self.relationship.type_name()
    }

    /// The far end's stub as recorded on the relationship itself.
    pub fn far_stub(&self) -> &ElementStub {
        self.relationship.end(self.anchor_end.far_end())
    }
}
