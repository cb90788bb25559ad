//! External references and related media.

use serde::{Deserialize, Serialize};

use crate::extract::{FieldKind, FieldValue};
use crate::model::Value;
use super::ReferenceableProperties;

/// Kind of media a `RelatedMedia` element points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    Image,
    Audio,
    Document,
    Video,
    Other,
}

impl MediaType {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "Image" => Some(MediaType::Image),
            "Audio" => Some(MediaType::Audio),
            "Document" => Some(MediaType::Document),
            "Video" => Some(MediaType::Video),
            "Other" => Some(MediaType::Other),
            _ => None,
        }
    }
}

impl FieldValue for MediaType {
    const KIND: FieldKind = FieldKind::Enum;

    fn convert(value: &Value) -> Option<Self> {
        value.as_symbol().and_then(MediaType::from_symbol)
    }
}

variant_properties! {
    ExternalReferenceProperties extends ReferenceableProperties as referenceable {
        display_name: String = "displayName",
        url: String = "url",
        reference_title: String = "referenceTitle",
        reference_abstract: String = "referenceAbstract",
        description: String = "description",
        reference_version: String = "referenceVersion",
        organization: String = "organization",
    }
}

variant_properties! {
    RelatedMediaProperties extends ExternalReferenceProperties as external_reference {
        media_type: MediaType = "mediaType",
        media_usage: Vec<String> = "mediaUsage",
        default_media_usage: String = "defaultMediaUsage",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EnumValue;

    #[test]
    fn test_media_type_from_enum_or_string() {
        assert_eq!(MediaType::convert(&Value::Enum(EnumValue::new(3, "Video"))), Some(MediaType::Video));
        assert_eq!(MediaType::convert(&Value::from("Image")), Some(MediaType::Image));
        assert_eq!(MediaType::convert(&Value::from("Hologram")), None);
    }
}
