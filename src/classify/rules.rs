//! Rule tables.
//!
//! A rule set is an ordered list of `(type, direction) → route` rows scoped
//! to one assembler context. The same relationship type can route to
//! different buckets in different rule sets; there is no global mapping.

use std::sync::LazyLock;

use crate::model::{AnchorEnd, RelatedElement};
use crate::oracle::TypeOracle;
use crate::shape::TargetShape;
use crate::types::*;
use super::BucketKey;

// ============================================================================
// Rule
// ============================================================================

/// Which anchor positions a rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionRule {
    Any,
    AnchorAtEnd1,
    AnchorAtEnd2,
}

impl DirectionRule {
    pub fn accepts(self, end: AnchorEnd) -> bool {
        match self {
            DirectionRule::Any => true,
            DirectionRule::AnchorAtEnd1 => end == AnchorEnd::End1,
            DirectionRule::AnchorAtEnd2 => end == AnchorEnd::End2,
        }
    }
}

/// Where a matching relationship goes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Bucket(BucketKey),
    /// Undifferentiated linkage bucket; the relationship property named
    /// `join_key` is copied into the summary.
    Linkage { join_key: &'static str },
}

static LINKAGE_KEY: BucketKey = BucketKey::LINKAGE;

impl Route {
    pub fn bucket(&self) -> &BucketKey {
        match self {
            Route::Bucket(key) => key,
            Route::Linkage { .. } => &LINKAGE_KEY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    /// Matched through the oracle, so subtypes route like their parent.
    pub type_name: &'static str,
    pub direction: DirectionRule,
    pub route: Route,
}

impl Rule {
    pub const fn either(type_name: &'static str, bucket: BucketKey) -> Self {
        Self { type_name, direction: DirectionRule::Any, route: Route::Bucket(bucket) }
    }

    pub const fn end1(type_name: &'static str, bucket: BucketKey) -> Self {
        Self { type_name, direction: DirectionRule::AnchorAtEnd1, route: Route::Bucket(bucket) }
    }

    pub const fn end2(type_name: &'static str, bucket: BucketKey) -> Self {
        Self { type_name, direction: DirectionRule::AnchorAtEnd2, route: Route::Bucket(bucket) }
    }

    pub const fn linkage(type_name: &'static str, join_key: &'static str) -> Self {
        Self { type_name, direction: DirectionRule::Any, route: Route::Linkage { join_key } }
    }

    pub fn matches<O: TypeOracle + ?Sized>(&self, related: &RelatedElement, oracle: &O) -> bool {
        self.direction.accepts(related.anchor_end) && oracle.is_type_of(related.type_name(), self.type_name)
    }
}

// ============================================================================
// RuleSet
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    name: &'static str,
    rules: Vec<Rule>,
}

/// Rows every context ends with.
fn common_rules() -> Vec<Rule> {
    vec![
        Rule::either(EXTERNAL_REFERENCE_LINK, BucketKey::EXTERNAL_REFERENCES),
        Rule::either(MEDIA_REFERENCE, BucketKey::RELATED_MEDIA),
        Rule::end1(ACTION_TARGET, BucketKey::ACTION_TARGETS),
        Rule::end2(ACTION_TARGET, BucketKey::ACTION_SOURCES),
        Rule::end2(SEMANTIC_ASSIGNMENT, BucketKey::MEANINGS),
        Rule::end1(SEMANTIC_ASSIGNMENT, BucketKey::SEMANTIC_ASSIGNEES),
        Rule::end2(COLLECTION_MEMBERSHIP, BucketKey::MEMBER_OF_COLLECTIONS),
        Rule::end1(COLLECTION_MEMBERSHIP, BucketKey::COLLECTION_MEMBERS),
        Rule::either(ATTACHED_LIKE, BucketKey::LIKES),
        Rule::either(ATTACHED_TAG, BucketKey::TAGS),
        Rule::either(ATTACHED_COMMENT, BucketKey::COMMENTS),
        Rule::end2(GOVERNED_BY, BucketKey::GOVERNED_BY),
        Rule::end1(GOVERNED_BY, BucketKey::GOVERNS),
        Rule::end1(SOURCED_FROM, BucketKey::SOURCED_FROM),
        Rule::end2(SOURCED_FROM, BucketKey::SOURCE_OF),
        Rule::either(SEARCH_KEYWORD_LINK, BucketKey::SEARCH_KEYWORDS),
        Rule::end1(RESOURCE_LIST, BucketKey::RESOURCE_LIST),
        Rule::end2(RESOURCE_LIST, BucketKey::RESOURCE_LIST_USERS),
        Rule::end1(MORE_INFORMATION, BucketKey::MORE_INFORMATION),
        Rule::end2(MORE_INFORMATION, BucketKey::DESCRIBES),
    ]
}

static ELEMENT_RULES: LazyLock<RuleSet> = LazyLock::new(|| RuleSet::new("element", Vec::new()));

static ACTOR_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new("actorProfile", vec![
        Rule::either(PERSON_ROLE_APPOINTMENT, BucketKey::PERFORMS_ROLES),
        Rule::end1(TEAM_MEMBERSHIP, BucketKey::MEMBER_OF_TEAMS),
        Rule::end2(TEAM_MEMBERSHIP, BucketKey::TEAM_MEMBERS),
        Rule::end1(TEAM_STRUCTURE, BucketKey::SUB_TEAMS),
        Rule::end2(TEAM_STRUCTURE, BucketKey::SUPER_TEAMS),
        Rule::either(CONTACT_THROUGH, BucketKey::CONTACT_DETAILS),
        Rule::either(PEER, BucketKey::PEERS),
    ])
});

static ASSET_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new("asset", vec![
        Rule::end1(LINEAGE_RELATIONSHIP, BucketKey::DOWNSTREAM),
        Rule::end2(LINEAGE_RELATIONSHIP, BucketKey::UPSTREAM),
    ])
});

static COLLECTION_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new("collection", vec![
        Rule::end1(COLLECTION_MEMBERSHIP, BucketKey::MEMBERS),
    ])
});

static PROJECT_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new("project", vec![
        Rule::end1(PROJECT_HIERARCHY, BucketKey::SUB_PROJECTS),
        Rule::end2(PROJECT_HIERARCHY, BucketKey::PARENT_PROJECTS),
        Rule::end1(PROJECT_DEPENDENCY, BucketKey::DEPENDS_ON),
        Rule::end2(PROJECT_DEPENDENCY, BucketKey::DEPENDENTS),
        Rule::end1(PROJECT_MANAGEMENT, BucketKey::PROJECT_MANAGERS),
        Rule::end1(PROJECT_TEAM, BucketKey::PROJECT_TEAMS),
        Rule::end1(RESOURCE_LIST, BucketKey::PROJECT_RESOURCES),
    ])
});

static SOLUTION_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new("solutionComponent", vec![
        Rule::end1(SOLUTION_COMPOSITION, BucketKey::SUB_COMPONENTS),
        Rule::end2(SOLUTION_COMPOSITION, BucketKey::PARENT_COMPONENTS),
        Rule::either(SOLUTION_LINKING_WIRE, BucketKey::WIRES),
        Rule::linkage(INFORMATION_SUPPLY_CHAIN_LINK, ISC_QUALIFIED_NAME),
        Rule::end1(IMPLEMENTED_BY, BucketKey::IMPLEMENTED_BY),
        Rule::end2(IMPLEMENTED_BY, BucketKey::IMPLEMENTS),
        Rule::end1(LINEAGE_RELATIONSHIP, BucketKey::DOWNSTREAM),
        Rule::end2(LINEAGE_RELATIONSHIP, BucketKey::UPSTREAM),
    ])
});

static GOVERNANCE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new("governanceDefinition", vec![
        Rule::end1(GOVERNED_BY, BucketKey::GOVERNED_ELEMENTS),
        Rule::either(GOVERNANCE_POLICY_LINK, BucketKey::LINKED_POLICIES),
        Rule::end1(GOVERNANCE_RESPONSE, BucketKey::RESPONSES),
        Rule::end2(GOVERNANCE_RESPONSE, BucketKey::DRIVERS),
    ])
});

impl RuleSet {
    /// Context-specific rows first, then the common rows.
    pub fn new(name: &'static str, mut rules: Vec<Rule>) -> Self {
        rules.extend(common_rules());
        Self { name, rules }
    }

    /// The rule set an assembler uses for a shape.
    pub fn for_shape(shape: TargetShape) -> &'static RuleSet {
        match shape {
            TargetShape::ActorProfile | TargetShape::Person => &ACTOR_RULES,
            TargetShape::Asset => &ASSET_RULES,
            TargetShape::Collection => &COLLECTION_RULES,
            TargetShape::Project => &PROJECT_RULES,
            TargetShape::SolutionComponent => &SOLUTION_RULES,
            TargetShape::GovernanceDefinition => &GOVERNANCE_RULES,
            TargetShape::Element
            | TargetShape::GlossaryTerm
            | TargetShape::ExternalReference
            | TargetShape::ToDo => &ELEMENT_RULES,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// First rule, in priority order, that accepts the relationship.
    pub fn first_match<O: TypeOracle + ?Sized>(&self, related: &RelatedElement, oracle: &O) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(related, oracle))
    }
}
