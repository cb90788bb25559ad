//! # Element Properties
//!
//! The closed, ancestor-linked family of property variants. Each variant
//! struct embeds its parent's struct (flattened when serialized), so its
//! fields are always a superset of its parent's, and the root of every
//! variant carries the reported type name and the residual
//! `extended_properties`.
//!
//! Variant structs are declared with [`variant_properties!`], which keeps
//! a struct's fields, its field manifest and its extraction code in one
//! place.

use serde::{Deserialize, Serialize};

use crate::extract::{Extractor, FieldSpec};
use crate::model::PropertyBag;
use crate::shape::VariantKind;

/// Declare a property variant that extends `$parent`.
///
/// Every field is an `Option` filled by [`Extractor::take`] from the
/// property named by the string literal.
macro_rules! variant_properties {
    (
        $(#[$meta:meta])*
        $name:ident extends $parent:ident as $parent_field:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty = $key:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            #[serde(flatten)]
            pub $parent_field: $parent,
            $(
                $(#[$fmeta])*
                #[serde(default, rename = $key, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            /// Fields this variant adds to its parent.
            pub const OWN_FIELDS: &'static [$crate::extract::FieldSpec] = &[
                $( $crate::extract::FieldSpec::new($key, <$ty as $crate::extract::FieldValue>::KIND), )*
            ];
        }

        impl $crate::properties::VariantFields for $name {
            fn manifest(out: &mut Vec<$crate::extract::FieldSpec>) {
                <$parent as $crate::properties::VariantFields>::manifest(out);
                out.extend_from_slice(Self::OWN_FIELDS);
            }

            fn extract(x: &mut $crate::extract::Extractor) -> Self {
                let $parent_field = <$parent as $crate::properties::VariantFields>::extract(x);
                Self {
                    $parent_field,
                    $( $field: x.take::<$ty>($key), )*
                }
            }

            fn root(&self) -> &$crate::properties::ReferenceableProperties {
                $crate::properties::VariantFields::root(&self.$parent_field)
            }

            fn root_mut(&mut self) -> &mut $crate::properties::ReferenceableProperties {
                $crate::properties::VariantFields::root_mut(&mut self.$parent_field)
            }
        }
    };
}

pub mod root;
pub mod actor;
pub mod asset;
pub mod knowledge;
pub mod reference;
pub mod work;
pub mod governance;
pub mod solution;

pub use root::ReferenceableProperties;
pub use actor::{ActorProfileProperties, PersonProperties, TeamProperties};
pub use asset::{AssetProperties, DataSetProperties, DataStoreProperties, ProcessProperties};
pub use knowledge::{CollectionProperties, GlossaryTermProperties};
pub use reference::{ExternalReferenceProperties, RelatedMediaProperties, MediaType};
pub use work::{ProjectProperties, ToDoProperties, ActivityStatus};
pub use governance::{GovernanceDefinitionProperties, GovernancePolicyProperties};
pub use solution::SolutionComponentProperties;

// ============================================================================
// Variant plumbing
// ============================================================================

/// Implemented by every variant struct.
pub trait VariantFields: Sized {
    /// Append the cumulative manifest, ancestors first.
    fn manifest(out: &mut Vec<FieldSpec>);

    /// Populate from the extractor, parent fields first.
    fn extract(x: &mut Extractor) -> Self;

    fn root(&self) -> &ReferenceableProperties;

    fn root_mut(&mut self) -> &mut ReferenceableProperties;
}

/// Checked narrowing from the family to one concrete variant.
pub trait VariantOf: Sized {
    const KIND: VariantKind;

    fn narrow(properties: &ElementProperties) -> Option<&Self>;
}

// ============================================================================
// The family
// ============================================================================

/// A populated properties object of exactly one variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum ElementProperties {
    Referenceable(ReferenceableProperties),
    ActorProfile(ActorProfileProperties),
    Person(PersonProperties),
    Team(TeamProperties),
    Asset(AssetProperties),
    DataSet(DataSetProperties),
    DataStore(DataStoreProperties),
    Process(ProcessProperties),
    Collection(CollectionProperties),
    GlossaryTerm(GlossaryTermProperties),
    ExternalReference(ExternalReferenceProperties),
    RelatedMedia(RelatedMediaProperties),
    Project(ProjectProperties),
    ToDo(ToDoProperties),
    GovernanceDefinition(GovernanceDefinitionProperties),
    GovernancePolicy(GovernancePolicyProperties),
    SolutionComponent(SolutionComponentProperties),
}

/// Apply `$body` to the inner struct whatever the variant.
macro_rules! each_variant {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            ElementProperties::Referenceable($inner) => $body,
            ElementProperties::ActorProfile($inner) => $body,
            ElementProperties::Person($inner) => $body,
            ElementProperties::Team($inner) => $body,
            ElementProperties::Asset($inner) => $body,
            ElementProperties::DataSet($inner) => $body,
            ElementProperties::DataStore($inner) => $body,
            ElementProperties::Process($inner) => $body,
            ElementProperties::Collection($inner) => $body,
            ElementProperties::GlossaryTerm($inner) => $body,
            ElementProperties::ExternalReference($inner) => $body,
            ElementProperties::RelatedMedia($inner) => $body,
            ElementProperties::Project($inner) => $body,
            ElementProperties::ToDo($inner) => $body,
            ElementProperties::GovernanceDefinition($inner) => $body,
            ElementProperties::GovernancePolicy($inner) => $body,
            ElementProperties::SolutionComponent($inner) => $body,
        }
    };
}

impl ElementProperties {
    pub fn kind(&self) -> VariantKind {
        match self {
            ElementProperties::Referenceable(_) => VariantKind::Referenceable,
            ElementProperties::ActorProfile(_) => VariantKind::ActorProfile,
            ElementProperties::Person(_) => VariantKind::Person,
            ElementProperties::Team(_) => VariantKind::Team,
            ElementProperties::Asset(_) => VariantKind::Asset,
            ElementProperties::DataSet(_) => VariantKind::DataSet,
            ElementProperties::DataStore(_) => VariantKind::DataStore,
            ElementProperties::Process(_) => VariantKind::Process,
            ElementProperties::Collection(_) => VariantKind::Collection,
            ElementProperties::GlossaryTerm(_) => VariantKind::GlossaryTerm,
            ElementProperties::ExternalReference(_) => VariantKind::ExternalReference,
            ElementProperties::RelatedMedia(_) => VariantKind::RelatedMedia,
            ElementProperties::Project(_) => VariantKind::Project,
            ElementProperties::ToDo(_) => VariantKind::ToDo,
            ElementProperties::GovernanceDefinition(_) => VariantKind::GovernanceDefinition,
            ElementProperties::GovernancePolicy(_) => VariantKind::GovernancePolicy,
            ElementProperties::SolutionComponent(_) => VariantKind::SolutionComponent,
        }
    }

    pub fn root(&self) -> &ReferenceableProperties {
        each_variant!(self, p => p.root())
    }

    pub fn root_mut(&mut self) -> &mut ReferenceableProperties {
        each_variant!(self, p => p.root_mut())
    }

    /// The element's reported type name.
    pub fn type_name(&self) -> &str {
        &self.root().type_name
    }

    pub fn qualified_name(&self) -> Option<&str> {
        self.root().qualified_name.as_deref()
    }

    /// Residual properties the variant has no named field for.
    pub fn extended_properties(&self) -> &PropertyBag {
        &self.root().extended_properties
    }

    /// Narrow to one concrete variant struct.
    pub fn as_variant<T: VariantOf>(&self) -> Option<&T> {
        T::narrow(self)
    }

    /// Actor profile fields of an actor profile or any of its descendants.
    pub fn actor_profile(&self) -> Option<&ActorProfileProperties> {
        match self {
            ElementProperties::ActorProfile(p) => Some(p),
            ElementProperties::Person(p) => Some(&p.actor_profile),
            ElementProperties::Team(p) => Some(&p.actor_profile),
            _ => None,
        }
    }

    /// Asset fields of an asset or any of its descendants.
    pub fn asset(&self) -> Option<&AssetProperties> {
        match self {
            ElementProperties::Asset(p) => Some(p),
            ElementProperties::DataSet(p) => Some(&p.asset),
            ElementProperties::DataStore(p) => Some(&p.asset),
            ElementProperties::Process(p) => Some(&p.asset),
            _ => None,
        }
    }

    pub fn external_reference(&self) -> Option<&ExternalReferenceProperties> {
        match self {
            ElementProperties::ExternalReference(p) => Some(p),
            ElementProperties::RelatedMedia(p) => Some(&p.external_reference),
            _ => None,
        }
    }

    pub fn governance_definition(&self) -> Option<&GovernanceDefinitionProperties> {
        match self {
            ElementProperties::GovernanceDefinition(p) => Some(p),
            ElementProperties::GovernancePolicy(p) => Some(&p.governance_definition),
            _ => None,
        }
    }

    /// Best human-facing name: displayName, then name, then qualifiedName.
    pub fn display_name(&self) -> Option<&str> {
        let named = match self {
            ElementProperties::ActorProfile(p) => p.display_name.as_deref(),
            ElementProperties::Person(p) => p.actor_profile.display_name.as_deref(),
            ElementProperties::Team(p) => p.actor_profile.display_name.as_deref(),
            ElementProperties::Asset(_)
            | ElementProperties::DataSet(_)
            | ElementProperties::DataStore(_)
            | ElementProperties::Process(_) => {
                self.asset().and_then(|a| a.display_name.as_deref().or(a.name.as_deref()))
            }
            ElementProperties::Collection(p) => p.name.as_deref(),
            ElementProperties::GlossaryTerm(p) => p.display_name.as_deref(),
            ElementProperties::ExternalReference(p) => p.display_name.as_deref(),
            ElementProperties::RelatedMedia(p) => p.external_reference.display_name.as_deref(),
            ElementProperties::Project(p) => p.name.as_deref(),
            ElementProperties::ToDo(p) => p.name.as_deref(),
            ElementProperties::GovernanceDefinition(p) => p.title.as_deref(),
            ElementProperties::GovernancePolicy(p) => p.governance_definition.title.as_deref(),
            ElementProperties::SolutionComponent(p) => p.display_name.as_deref().or(p.name.as_deref()),
            ElementProperties::Referenceable(_) => None,
        };
        named.or_else(|| self.qualified_name())
    }
}

/// `VariantOf` for a leaf of the enum.
macro_rules! variant_of {
    ($($kind:ident => $ty:ty),* $(,)?) => {
        $(
            impl VariantOf for $ty {
                const KIND: VariantKind = VariantKind::$kind;

                fn narrow(properties: &ElementProperties) -> Option<&Self> {
                    match properties {
                        ElementProperties::$kind(p) => Some(p),
                        _ => None,
                    }
                }
            }
        )*
    };
}

variant_of! {
    Referenceable => ReferenceableProperties,
    ActorProfile => ActorProfileProperties,
    Person => PersonProperties,
    Team => TeamProperties,
    Asset => AssetProperties,
    DataSet => DataSetProperties,
    DataStore => DataStoreProperties,
    Process => ProcessProperties,
    Collection => CollectionProperties,
    GlossaryTerm => GlossaryTermProperties,
    ExternalReference => ExternalReferenceProperties,
    RelatedMedia => RelatedMediaProperties,
    Project => ProjectProperties,
    ToDo => ToDoProperties,
    GovernanceDefinition => GovernanceDefinitionProperties,
    GovernancePolicy => GovernancePolicyProperties,
    SolutionComponent => SolutionComponentProperties,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::manifest_of;

    #[test]
    fn test_manifest_is_cumulative_ancestors_first() {
        let person = manifest_of::<PersonProperties>();
        let names: Vec<&str> = person.iter().map(|f| f.name).collect();
        assert_eq!(&names[..2], &["qualifiedName", "additionalProperties"]);
        assert!(names.contains(&"displayName"));
        assert!(names.contains(&"givenNames"));

        let actor = manifest_of::<ActorProfileProperties>();
        assert!(actor.iter().all(|f| person.contains(f)));
        assert!(person.len() > actor.len());
    }

    #[test]
    fn test_narrowing_and_group_views() {
        let person = ElementProperties::Person(PersonProperties::default());
        assert!(person.as_variant::<PersonProperties>().is_some());
        assert!(person.as_variant::<TeamProperties>().is_none());
        assert!(person.actor_profile().is_some());
        assert!(person.asset().is_none());
        assert_eq!(person.kind(), VariantKind::Person);
    }

    #[test]
    fn test_serialized_form_is_flat_with_class_tag() {
        let mut p = PersonProperties::default();
        p.given_names = Some("Ada".into());
        p.actor_profile.referenceable.qualified_name = Some("p1".into());
        p.actor_profile.referenceable.type_name = "Person".into();
        let json = serde_json::to_value(ElementProperties::Person(p)).unwrap();
        assert_eq!(json["class"], "Person");
        assert_eq!(json["givenNames"], "Ada");
        assert_eq!(json["qualifiedName"], "p1");
        assert!(json.get("actorProfile").is_none());
    }
}
