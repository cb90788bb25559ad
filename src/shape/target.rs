//! Requested output shapes.

use serde::{Deserialize, Serialize};

use super::VariantKind;

/// Pre-resolved nested structure a composite view can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompositeForm {
    /// Members of a collection and the links between them.
    MemberGraph,
    /// Nested sub-components of a solution component.
    SubComponents,
    /// Parent/child structure, e.g. project or team hierarchies.
    Hierarchy,
    /// Upstream/downstream lineage around an asset.
    LineageGraph,
}

/// The family a caller asks for. Each shape accepts one subtree of the
/// variant family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetShape {
    /// Any element; accepts every variant.
    Element,
    ActorProfile,
    Person,
    Asset,
    Collection,
    GlossaryTerm,
    ExternalReference,
    Project,
    ToDo,
    GovernanceDefinition,
    SolutionComponent,
}

impl TargetShape {
    pub const ALL: [TargetShape; 11] = [
        TargetShape::Element,
        TargetShape::ActorProfile,
        TargetShape::Person,
        TargetShape::Asset,
        TargetShape::Collection,
        TargetShape::GlossaryTerm,
        TargetShape::ExternalReference,
        TargetShape::Project,
        TargetShape::ToDo,
        TargetShape::GovernanceDefinition,
        TargetShape::SolutionComponent,
    ];

    /// Name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TargetShape::Element => "ElementView",
            TargetShape::ActorProfile => "ActorProfileView",
            TargetShape::Person => "PersonView",
            TargetShape::Asset => "AssetView",
            TargetShape::Collection => "CollectionView",
            TargetShape::GlossaryTerm => "GlossaryTermView",
            TargetShape::ExternalReference => "ExternalReferenceView",
            TargetShape::Project => "ProjectView",
            TargetShape::ToDo => "ToDoView",
            TargetShape::GovernanceDefinition => "GovernanceDefinitionView",
            TargetShape::SolutionComponent => "SolutionComponentView",
        }
    }

    /// Top of the subtree this shape accepts.
    pub fn root_variant(self) -> VariantKind {
        match self {
            TargetShape::Element => VariantKind::Referenceable,
            TargetShape::ActorProfile => VariantKind::ActorProfile,
            TargetShape::Person => VariantKind::Person,
            TargetShape::Asset => VariantKind::Asset,
            TargetShape::Collection => VariantKind::Collection,
            TargetShape::GlossaryTerm => VariantKind::GlossaryTerm,
            TargetShape::ExternalReference => VariantKind::ExternalReference,
            TargetShape::Project => VariantKind::Project,
            TargetShape::ToDo => VariantKind::ToDo,
            TargetShape::GovernanceDefinition => VariantKind::GovernanceDefinition,
            TargetShape::SolutionComponent => VariantKind::SolutionComponent,
        }
    }

    pub fn accepts(self, variant: VariantKind) -> bool {
        variant.is_within(self.root_variant())
    }

    /// Composite entry points this shape family offers.
    pub fn composite_forms(self) -> &'static [CompositeForm] {
        match self {
            TargetShape::Collection => &[CompositeForm::MemberGraph],
            TargetShape::SolutionComponent => &[CompositeForm::SubComponents, CompositeForm::LineageGraph],
            TargetShape::Asset => &[CompositeForm::LineageGraph],
            TargetShape::Project => &[CompositeForm::Hierarchy, CompositeForm::MemberGraph],
            TargetShape::ActorProfile => &[CompositeForm::Hierarchy],
            TargetShape::GovernanceDefinition => &[CompositeForm::Hierarchy],
            TargetShape::Element
            | TargetShape::Person
            | TargetShape::GlossaryTerm
            | TargetShape::ExternalReference
            | TargetShape::ToDo => &[],
        }
    }

    pub fn supports(self, form: CompositeForm) -> bool {
        self.composite_forms().contains(&form)
    }
}

impl std::fmt::Display for TargetShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
