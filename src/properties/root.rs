//! Root of the variant family.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::extract::{Extractor, FieldKind, FieldSpec};
use crate::model::PropertyBag;
use super::VariantFields;

/// Properties every element view carries, whatever its variant.
///
/// `type_name` and `extended_properties` are filled by the engine, not
/// read from the bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceableProperties {
    /// The element's reported type, possibly more specific than the variant.
    #[serde(default)]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<BTreeMap<String, String>>,
    /// Properties the running variant has no named field for.
    #[serde(default, skip_serializing_if = "PropertyBag::is_empty")]
    pub extended_properties: PropertyBag,
}

impl ReferenceableProperties {
    pub const OWN_FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("qualifiedName", FieldKind::String),
        FieldSpec::new("additionalProperties", FieldKind::StringMap),
    ];
}

impl VariantFields for ReferenceableProperties {
    fn manifest(out: &mut Vec<FieldSpec>) {
        out.extend_from_slice(Self::OWN_FIELDS);
    }

    fn extract(x: &mut Extractor) -> Self {
        Self {
            type_name: String::new(),
            qualified_name: x.take("qualifiedName"),
            additional_properties: x.take("additionalProperties"),
            extended_properties: PropertyBag::new(),
        }
    }

    fn root(&self) -> &ReferenceableProperties {
        self
    }

    fn root_mut(&mut self) -> &mut ReferenceableProperties {
        self
    }
}
