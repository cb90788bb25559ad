//! Bucket keys, relationship summaries and the bucket map.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{AnchorEnd, EffectiveWindow, ElementStatus, ElementStub, Guid, MetadataElement, PropertyBag, RelatedElement};

// ============================================================================
// BucketKey
// ============================================================================

/// Name of an output collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketKey(Cow<'static, str>);

impl BucketKey {
    pub const fn new(name: &'static str) -> Self {
        BucketKey(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Catch-all and linkage buckets exist in every rule set.
    pub const OTHER: BucketKey = BucketKey::new("otherRelatedElements");
    pub const LINKAGE: BucketKey = BucketKey::new("linkedElements");

    // Common to every element
    pub const EXTERNAL_REFERENCES: BucketKey = BucketKey::new("externalReferences");
    pub const RELATED_MEDIA: BucketKey = BucketKey::new("relatedMedia");
    pub const ACTION_TARGETS: BucketKey = BucketKey::new("actionTargets");
    pub const ACTION_SOURCES: BucketKey = BucketKey::new("actionSources");
    pub const MEANINGS: BucketKey = BucketKey::new("meanings");
    pub const SEMANTIC_ASSIGNEES: BucketKey = BucketKey::new("semanticAssignees");
    pub const MEMBER_OF_COLLECTIONS: BucketKey = BucketKey::new("memberOfCollections");
    pub const COLLECTION_MEMBERS: BucketKey = BucketKey::new("collectionMembers");
    pub const LIKES: BucketKey = BucketKey::new("likes");
    pub const TAGS: BucketKey = BucketKey::new("tags");
    pub const COMMENTS: BucketKey = BucketKey::new("comments");
    pub const GOVERNED_BY: BucketKey = BucketKey::new("governedBy");
    pub const GOVERNS: BucketKey = BucketKey::new("governs");
    pub const SOURCED_FROM: BucketKey = BucketKey::new("sourcedFrom");
    pub const SOURCE_OF: BucketKey = BucketKey::new("sourceOf");
    pub const SEARCH_KEYWORDS: BucketKey = BucketKey::new("searchKeywords");
    pub const RESOURCE_LIST: BucketKey = BucketKey::new("resourceList");
    pub const RESOURCE_LIST_USERS: BucketKey = BucketKey::new("resourceListUsers");
    pub const MORE_INFORMATION: BucketKey = BucketKey::new("moreInformation");
    pub const DESCRIBES: BucketKey = BucketKey::new("describes");

    // Projects
    pub const SUB_PROJECTS: BucketKey = BucketKey::new("subProjects");
    pub const PARENT_PROJECTS: BucketKey = BucketKey::new("parentProjects");
    pub const DEPENDS_ON: BucketKey = BucketKey::new("dependsOn");
    pub const DEPENDENTS: BucketKey = BucketKey::new("dependents");
    pub const PROJECT_MANAGERS: BucketKey = BucketKey::new("projectManagers");
    pub const PROJECT_TEAMS: BucketKey = BucketKey::new("projectTeams");
    pub const PROJECT_RESOURCES: BucketKey = BucketKey::new("projectResources");

    // Actors
    pub const PERFORMS_ROLES: BucketKey = BucketKey::new("performsRoles");
    pub const MEMBER_OF_TEAMS: BucketKey = BucketKey::new("memberOfTeams");
    pub const TEAM_MEMBERS: BucketKey = BucketKey::new("teamMembers");
    pub const SUB_TEAMS: BucketKey = BucketKey::new("subTeams");
    pub const SUPER_TEAMS: BucketKey = BucketKey::new("superTeams");
    pub const CONTACT_DETAILS: BucketKey = BucketKey::new("contactDetails");
    pub const PEERS: BucketKey = BucketKey::new("peers");

    // Assets
    pub const DOWNSTREAM: BucketKey = BucketKey::new("downstreamLineage");
    pub const UPSTREAM: BucketKey = BucketKey::new("upstreamLineage");

    // Collections
    pub const MEMBERS: BucketKey = BucketKey::new("members");

    // Solutions
    pub const SUB_COMPONENTS: BucketKey = BucketKey::new("subComponents");
    pub const PARENT_COMPONENTS: BucketKey = BucketKey::new("parentComponents");
    pub const WIRES: BucketKey = BucketKey::new("wires");
    pub const IMPLEMENTED_BY: BucketKey = BucketKey::new("implementedBy");
    pub const IMPLEMENTS: BucketKey = BucketKey::new("implements");

    // Governance
    pub const GOVERNED_ELEMENTS: BucketKey = BucketKey::new("governedElements");
    pub const LINKED_POLICIES: BucketKey = BucketKey::new("linkedPolicies");
    pub const RESPONSES: BucketKey = BucketKey::new("responses");
    pub const DRIVERS: BucketKey = BucketKey::new("drivers");
}

impl std::fmt::Display for BucketKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Summaries
// ============================================================================

/// Identity, type and validity of the connecting relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipHeader {
    pub guid: Guid,
    pub type_name: String,
    #[serde(default)]
    pub status: ElementStatus,
    #[serde(default)]
    pub effective: EffectiveWindow,
}

/// The far element as carried in a bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSummary {
    pub guid: Guid,
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classifications: Vec<String>,
    #[serde(default, skip_serializing_if = "PropertyBag::is_empty")]
    pub properties: PropertyBag,
}

impl ElementSummary {
    pub fn from_element(element: &MetadataElement) -> Self {
        Self {
            guid: element.guid.clone(),
            type_name: element.type_name().to_owned(),
            unique_name: element.properties.get_str(crate::types::QUALIFIED_NAME).map(str::to_owned),
            classifications: element.classifications.iter().map(|c| c.name.clone()).collect(),
            properties: element.properties.clone(),
        }
    }

    /// Identity only, from the stub recorded on the relationship.
    pub fn from_stub(stub: &ElementStub) -> Self {
        Self {
            guid: stub.guid.clone(),
            type_name: stub.element_type.type_name.clone(),
            unique_name: stub.unique_name.clone(),
            classifications: Vec::new(),
            properties: PropertyBag::new(),
        }
    }
}

/// One relationship as it appears in a bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedElementSummary {
    pub relationship: RelationshipHeader,
    #[serde(default, skip_serializing_if = "PropertyBag::is_empty")]
    pub relationship_properties: PropertyBag,
    pub related_element: ElementSummary,
    pub anchor_end: AnchorEnd,
    /// Join key for linkage families.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_key: Option<String>,
    /// Set when the source relationship was malformed and only identity
    /// could be recorded.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub detail_omitted: bool,
}

impl RelatedElementSummary {
    pub fn from_related(related: &RelatedElement) -> Self {
        let rel = &related.relationship;
        let related_element = match &related.element {
            Some(element) => ElementSummary::from_element(element),
            None => ElementSummary::from_stub(related.far_stub()),
        };
        Self {
            relationship: RelationshipHeader {
                guid: rel.guid.clone(),
                type_name: rel.type_name().to_owned(),
                status: rel.status,
                effective: rel.effective,
            },
            relationship_properties: rel.properties.clone(),
            related_element,
            anchor_end: related.anchor_end,
            join_key: None,
            detail_omitted: false,
        }
    }

    /// Minimal summary for a relationship that cannot be classified.
    pub fn identity_only(related: &RelatedElement) -> Self {
        let rel = &related.relationship;
        Self {
            relationship: RelationshipHeader {
                guid: rel.guid.clone(),
                type_name: rel.type_name().to_owned(),
                status: rel.status,
                effective: rel.effective,
            },
            relationship_properties: PropertyBag::new(),
            related_element: ElementSummary::from_stub(related.far_stub()),
            anchor_end: related.anchor_end,
            join_key: None,
            detail_omitted: true,
        }
    }

    pub fn related_guid(&self) -> &Guid {
        &self.related_element.guid
    }
}

// ============================================================================
// RelationshipBuckets
// ============================================================================

/// Classified relationships: bucket key → summaries, plus the type names
/// the rule set claimed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipBuckets {
    /// Rule set that produced this classification.
    pub rule_set: String,
    buckets: BTreeMap<BucketKey, Vec<RelatedElementSummary>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    claimed_types: Vec<String>,
}

impl RelationshipBuckets {
    pub fn new(rule_set: impl Into<String>) -> Self {
        Self { rule_set: rule_set.into(), ..Default::default() }
    }

    pub(crate) fn push(&mut self, key: BucketKey, summary: RelatedElementSummary) {
        self.buckets.entry(key).or_default().push(summary);
    }

    pub(crate) fn set_claimed(&mut self, claimed: Vec<String>) {
        self.claimed_types = claimed;
    }

    pub fn get(&self, key: &BucketKey) -> &[RelatedElementSummary] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Non-empty buckets, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&BucketKey, &[RelatedElementSummary])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &BucketKey> {
        self.buckets.keys()
    }

    /// Relationship type names routed by a rule, in first-claimed order.
    pub fn claimed_types(&self) -> &[String] {
        &self.claimed_types
    }

    /// Number of summaries across every bucket, `other` included.
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    // ========================================================================
    // Named views
    // ========================================================================

    pub fn other(&self) -> &[RelatedElementSummary] { self.get(&BucketKey::OTHER) }
    pub fn linked(&self) -> &[RelatedElementSummary] { self.get(&BucketKey::LINKAGE) }
    pub fn external_references(&self) -> &[RelatedElementSummary] { self.get(&BucketKey::EXTERNAL_REFERENCES) }
    pub fn related_media(&self) -> &[RelatedElementSummary] { self.get(&BucketKey::RELATED_MEDIA) }
    pub fn action_targets(&self) -> &[RelatedElementSummary] { self.get(&BucketKey::ACTION_TARGETS) }
    pub fn action_sources(&self) -> &[RelatedElementSummary] { self.get(&BucketKey::ACTION_SOURCES) }
    pub fn meanings(&self) -> &[RelatedElementSummary] { self.get(&BucketKey::MEANINGS) }
    pub fn member_of_collections(&self) -> &[RelatedElementSummary] { self.get(&BucketKey::MEMBER_OF_COLLECTIONS) }
    pub fn members(&self) -> &[RelatedElementSummary] { self.get(&BucketKey::MEMBERS) }
    pub fn governed_by(&self) -> &[RelatedElementSummary] { self.get(&BucketKey::GOVERNED_BY) }
    pub fn sub_projects(&self) -> &[RelatedElementSummary] { self.get(&BucketKey::SUB_PROJECTS) }
    pub fn parent_projects(&self) -> &[RelatedElementSummary] { self.get(&BucketKey::PARENT_PROJECTS) }
    pub fn upstream_lineage(&self) -> &[RelatedElementSummary] { self.get(&BucketKey::UPSTREAM) }
    pub fn downstream_lineage(&self) -> &[RelatedElementSummary] { self.get(&BucketKey::DOWNSTREAM) }
    pub fn sub_components(&self) -> &[RelatedElementSummary] { self.get(&BucketKey::SUB_COMPONENTS) }
}
