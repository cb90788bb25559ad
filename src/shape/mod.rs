//! # Shape Resolver
//!
//! Picks the most specific known variant for an element's runtime type
//! name. The true type is a string, not a host-language type, so narrowing
//! is done by walking an explicit, ordered selection tree and asking the
//! type oracle at each branch.
//!
//! The tag is always resolved before anything is populated; see
//! [`crate::extract::extract_properties`] for the second half.

pub mod tree;
pub mod target;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::extract::{manifest_of, Extractor, FieldSpec};
use crate::properties::*;
use crate::types;

pub use tree::{SelectionNode, SelectionTree, Resolution};
pub use target::{TargetShape, CompositeForm};

// ============================================================================
// VariantKind
// ============================================================================

/// Discriminant of every variant in the closed properties family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VariantKind {
    Referenceable,
    ActorProfile,
    Person,
    Team,
    Asset,
    DataSet,
    DataStore,
    Process,
    Collection,
    GlossaryTerm,
    ExternalReference,
    RelatedMedia,
    Project,
    ToDo,
    GovernanceDefinition,
    GovernancePolicy,
    SolutionComponent,
}

impl VariantKind {
    pub const ALL: [VariantKind; 17] = [
        VariantKind::Referenceable,
        VariantKind::ActorProfile,
        VariantKind::Person,
        VariantKind::Team,
        VariantKind::Asset,
        VariantKind::DataSet,
        VariantKind::DataStore,
        VariantKind::Process,
        VariantKind::Collection,
        VariantKind::GlossaryTerm,
        VariantKind::ExternalReference,
        VariantKind::RelatedMedia,
        VariantKind::Project,
        VariantKind::ToDo,
        VariantKind::GovernanceDefinition,
        VariantKind::GovernancePolicy,
        VariantKind::SolutionComponent,
    ];

    /// The open metadata type this variant is selected for.
    pub fn type_name(self) -> &'static str {
        match self {
            VariantKind::Referenceable => types::REFERENCEABLE,
            VariantKind::ActorProfile => types::ACTOR_PROFILE,
            VariantKind::Person => types::PERSON,
            VariantKind::Team => types::TEAM,
            VariantKind::Asset => types::ASSET,
            VariantKind::DataSet => types::DATA_SET,
            VariantKind::DataStore => types::DATA_STORE,
            VariantKind::Process => types::PROCESS,
            VariantKind::Collection => types::COLLECTION,
            VariantKind::GlossaryTerm => types::GLOSSARY_TERM,
            VariantKind::ExternalReference => types::EXTERNAL_REFERENCE,
            VariantKind::RelatedMedia => types::RELATED_MEDIA,
            VariantKind::Project => types::PROJECT,
            VariantKind::ToDo => types::TO_DO,
            VariantKind::GovernanceDefinition => types::GOVERNANCE_DEFINITION,
            VariantKind::GovernancePolicy => types::GOVERNANCE_POLICY,
            VariantKind::SolutionComponent => types::SOLUTION_COMPONENT,
        }
    }

    /// The variant this one extends. `None` only for the root.
    pub fn parent(self) -> Option<VariantKind> {
        use VariantKind as V;
        match self {
            V::Referenceable => None,
            V::Person | V::Team => Some(V::ActorProfile),
            V::DataSet | V::DataStore | V::Process => Some(V::Asset),
            V::RelatedMedia => Some(V::ExternalReference),
            V::GovernancePolicy => Some(V::GovernanceDefinition),
            V::ActorProfile
            | V::Asset
            | V::Collection
            | V::GlossaryTerm
            | V::ExternalReference
            | V::Project
            | V::ToDo
            | V::GovernanceDefinition
            | V::SolutionComponent => Some(V::Referenceable),
        }
    }

    /// This variant and its ancestors, most specific first.
    pub fn lineage(self) -> SmallVec<[VariantKind; 4]> {
        let mut out = SmallVec::new();
        let mut current = Some(self);
        while let Some(kind) = current {
            out.push(kind);
            current = kind.parent();
        }
        out
    }

    /// Is this variant `ancestor` or one of its descendants?
    pub fn is_within(self, ancestor: VariantKind) -> bool {
        self.lineage().contains(&ancestor)
    }

    /// Cumulative field manifest, ancestors first.
    pub fn manifest(self) -> Vec<FieldSpec> {
        match self {
            VariantKind::Referenceable => manifest_of::<ReferenceableProperties>(),
            VariantKind::ActorProfile => manifest_of::<ActorProfileProperties>(),
            VariantKind::Person => manifest_of::<PersonProperties>(),
            VariantKind::Team => manifest_of::<TeamProperties>(),
            VariantKind::Asset => manifest_of::<AssetProperties>(),
            VariantKind::DataSet => manifest_of::<DataSetProperties>(),
            VariantKind::DataStore => manifest_of::<DataStoreProperties>(),
            VariantKind::Process => manifest_of::<ProcessProperties>(),
            VariantKind::Collection => manifest_of::<CollectionProperties>(),
            VariantKind::GlossaryTerm => manifest_of::<GlossaryTermProperties>(),
            VariantKind::ExternalReference => manifest_of::<ExternalReferenceProperties>(),
            VariantKind::RelatedMedia => manifest_of::<RelatedMediaProperties>(),
            VariantKind::Project => manifest_of::<ProjectProperties>(),
            VariantKind::ToDo => manifest_of::<ToDoProperties>(),
            VariantKind::GovernanceDefinition => manifest_of::<GovernanceDefinitionProperties>(),
            VariantKind::GovernancePolicy => manifest_of::<GovernancePolicyProperties>(),
            VariantKind::SolutionComponent => manifest_of::<SolutionComponentProperties>(),
        }
    }

    /// Instantiate and populate this variant.
    pub fn extract(self, x: &mut Extractor) -> ElementProperties {
        match self {
            VariantKind::Referenceable => ElementProperties::Referenceable(VariantFields::extract(x)),
            VariantKind::ActorProfile => ElementProperties::ActorProfile(VariantFields::extract(x)),
            VariantKind::Person => ElementProperties::Person(VariantFields::extract(x)),
            VariantKind::Team => ElementProperties::Team(VariantFields::extract(x)),
            VariantKind::Asset => ElementProperties::Asset(VariantFields::extract(x)),
            VariantKind::DataSet => ElementProperties::DataSet(VariantFields::extract(x)),
            VariantKind::DataStore => ElementProperties::DataStore(VariantFields::extract(x)),
            VariantKind::Process => ElementProperties::Process(VariantFields::extract(x)),
            VariantKind::Collection => ElementProperties::Collection(VariantFields::extract(x)),
            VariantKind::GlossaryTerm => ElementProperties::GlossaryTerm(VariantFields::extract(x)),
            VariantKind::ExternalReference => ElementProperties::ExternalReference(VariantFields::extract(x)),
            VariantKind::RelatedMedia => ElementProperties::RelatedMedia(VariantFields::extract(x)),
            VariantKind::Project => ElementProperties::Project(VariantFields::extract(x)),
            VariantKind::ToDo => ElementProperties::ToDo(VariantFields::extract(x)),
            VariantKind::GovernanceDefinition => ElementProperties::GovernanceDefinition(VariantFields::extract(x)),
            VariantKind::GovernancePolicy => ElementProperties::GovernancePolicy(VariantFields::extract(x)),
            VariantKind::SolutionComponent => ElementProperties::SolutionComponent(VariantFields::extract(x)),
        }
    }
}

impl std::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}Properties", self.type_name())
    }
}
