//! Metadata element: a typed node in the open metadata graph.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Classification, EffectiveWindow, PropertyBag, Value};

/// Unique identifier of an element or relationship.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guid(pub String);

impl Guid {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Guid {
    fn from(s: &str) -> Self { Guid(s.to_owned()) }
}

impl From<String> for Guid {
    fn from(s: String) -> Self { Guid(s) }
}

/// Ancestor chain as reported by the source (most specific first).
pub type SuperTypeNames = SmallVec<[String; 4]>;

/// The type designator carried by every instance.
///
/// An empty `type_name` means the source did not supply one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementType {
    pub type_name: String,
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub super_type_names: SuperTypeNames,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_version: Option<i64>,
}

impl ElementType {
    pub fn named(type_name: impl Into<String>) -> Self {
        Self { type_name: type_name.into(), ..Default::default() }
    }

    pub fn with_super_types(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.super_type_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_missing(&self) -> bool {
        self.type_name.trim().is_empty()
    }
}

/// Lifecycle status of an instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementStatus {
    Unknown,
    Draft,
    Prepared,
    Proposed,
    Approved,
    Rejected,
    #[default]
    Active,
    Deprecated,
    Other,
    Deleted,
}

/// Who changed the instance and when.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementVersions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: i64,
}

/// Where the instance's master copy lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OriginCategory {
    #[default]
    LocalCohort,
    ExportedInstance,
    ContentPack,
    DeregisteredRepository,
    Configuration,
    ExternalSource,
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementOrigin {
    pub metadata_collection_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_collection_name: Option<String>,
    #[serde(default)]
    pub origin_category: OriginCategory,
}

/// A read-only snapshot of one metadata element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataElement {
    pub guid: Guid,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    #[serde(default)]
    pub status: ElementStatus,
    #[serde(default)]
    pub versions: ElementVersions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<ElementOrigin>,
    #[serde(default)]
    pub properties: PropertyBag,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classifications: Vec<Classification>,
    #[serde(default)]
    pub effective: EffectiveWindow,
}

impl MetadataElement {
    pub fn new(guid: impl Into<Guid>, type_name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            element_type: ElementType::named(type_name),
            status: ElementStatus::default(),
            versions: ElementVersions::default(),
            origin: None,
            properties: PropertyBag::new(),
            classifications: Vec::new(),
            effective: EffectiveWindow::default(),
        }
    }

    pub fn with_super_types(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.element_type = self.element_type.with_super_types(names);
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key, value);
        self
    }

    pub fn with_properties(mut self, properties: PropertyBag) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classifications.push(classification);
        self
    }

    pub fn with_effective(mut self, effective: EffectiveWindow) -> Self {
        self.effective = effective;
        self
    }

    pub fn with_version(mut self, version: i64) -> Self {
        self.versions.version = version;
        self
    }

    pub fn type_name(&self) -> &str {
        &self.element_type.type_name
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn classification(&self, name: &str) -> Option<&Classification> {
        self.classifications.iter().find(|c| c.name == name)
    }

    /// Reduced reference to this element, as used on relationship ends.
    pub fn stub(&self) -> ElementStub {
        ElementStub {
            guid: self.guid.clone(),
            element_type: self.element_type.clone(),
            unique_name: self.properties.get_str("qualifiedName").map(str::to_owned),
        }
    }
}

/// A reference to an element at one end of a relationship.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStub {
    pub guid: Guid,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
}

impl ElementStub {
    pub fn new(guid: impl Into<Guid>, type_name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            element_type: ElementType::named(type_name),
            unique_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_stub() {
        let e = MetadataElement::new("g1", "Person")
            .with_super_types(["ActorProfile", "Referenceable"])
            .with_property("qualifiedName", "Person::ada");
        let stub = e.stub();
        assert_eq!(stub.guid, Guid::from("g1"));
        assert_eq!(stub.unique_name.as_deref(), Some("Person::ada"));
        assert_eq!(e.element_type.super_type_names.len(), 2);
    }

    #[test]
    fn test_missing_type_designator() {
        assert!(ElementType::named("  ").is_missing());
        assert!(!ElementType::named("Asset").is_missing());
    }
}
