//! Open metadata type names the projection catalog refers to.
//!
//! The hierarchy itself is owned by the type oracle; these constants only
//! pin down spelling so the selection tree, the rule sets and callers agree.

// ============================================================================
// Element types
// ============================================================================

pub const OPEN_METADATA_ROOT: &str = "OpenMetadataRoot";
pub const REFERENCEABLE: &str = "Referenceable";

pub const ACTOR_PROFILE: &str = "ActorProfile";
pub const PERSON: &str = "Person";
pub const TEAM: &str = "Team";

pub const ASSET: &str = "Asset";
pub const DATA_SET: &str = "DataSet";
pub const DATA_STORE: &str = "DataStore";
pub const PROCESS: &str = "Process";

pub const COLLECTION: &str = "Collection";
pub const GLOSSARY_TERM: &str = "GlossaryTerm";

pub const EXTERNAL_REFERENCE: &str = "ExternalReference";
pub const RELATED_MEDIA: &str = "RelatedMedia";

pub const PROJECT: &str = "Project";
pub const TO_DO: &str = "ToDo";

pub const GOVERNANCE_DEFINITION: &str = "GovernanceDefinition";
pub const GOVERNANCE_POLICY: &str = "GovernancePolicy";

pub const SOLUTION_COMPONENT: &str = "SolutionComponent";

// ============================================================================
// Relationship types
// ============================================================================

pub const ACTION_TARGET: &str = "ActionTarget";
pub const EXTERNAL_REFERENCE_LINK: &str = "ExternalReferenceLink";
pub const MEDIA_REFERENCE: &str = "MediaReference";
pub const SEMANTIC_ASSIGNMENT: &str = "SemanticAssignment";
pub const COLLECTION_MEMBERSHIP: &str = "CollectionMembership";
pub const ATTACHED_LIKE: &str = "AttachedLike";
pub const ATTACHED_TAG: &str = "AttachedTag";
pub const ATTACHED_COMMENT: &str = "AttachedComment";
pub const GOVERNED_BY: &str = "GovernedBy";
pub const SOURCED_FROM: &str = "SourcedFrom";
pub const SEARCH_KEYWORD_LINK: &str = "SearchKeywordLink";
pub const RESOURCE_LIST: &str = "ResourceList";
pub const MORE_INFORMATION: &str = "MoreInformation";

pub const PROJECT_HIERARCHY: &str = "ProjectHierarchy";
pub const PROJECT_DEPENDENCY: &str = "ProjectDependency";
pub const PROJECT_MANAGEMENT: &str = "ProjectManagement";
pub const PROJECT_TEAM: &str = "ProjectTeam";

pub const PERSON_ROLE_APPOINTMENT: &str = "PersonRoleAppointment";
pub const TEAM_MEMBERSHIP: &str = "TeamMembership";
pub const TEAM_STRUCTURE: &str = "TeamStructure";
pub const CONTACT_THROUGH: &str = "ContactThrough";
pub const PEER: &str = "Peer";

pub const LINEAGE_RELATIONSHIP: &str = "LineageRelationship";
pub const DATA_FLOW: &str = "DataFlow";
pub const CONTROL_FLOW: &str = "ControlFlow";
pub const PROCESS_CALL: &str = "ProcessCall";

pub const SOLUTION_COMPOSITION: &str = "SolutionComposition";
pub const SOLUTION_LINKING_WIRE: &str = "SolutionLinkingWire";
pub const INFORMATION_SUPPLY_CHAIN_LINK: &str = "InformationSupplyChainLink";
pub const IMPLEMENTED_BY: &str = "ImplementedBy";

pub const GOVERNANCE_POLICY_LINK: &str = "GovernancePolicyLink";
pub const GOVERNANCE_RESPONSE: &str = "GovernanceResponse";

// ============================================================================
// Property names the engine reads outside the variant manifests
// ============================================================================

pub const QUALIFIED_NAME: &str = "qualifiedName";
pub const DISPLAY_NAME: &str = "displayName";
pub const NAME: &str = "name";

/// Join key carried by supply-chain linkage relationships.
pub const ISC_QUALIFIED_NAME: &str = "iscQualifiedName";
