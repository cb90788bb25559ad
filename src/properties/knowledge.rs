//! Collections and glossary terms.

use super::ReferenceableProperties;

variant_properties! {
    CollectionProperties extends ReferenceableProperties as referenceable {
        name: String = "name",
        description: String = "description",
        collection_type: String = "collectionType",
    }
}

variant_properties! {
    GlossaryTermProperties extends ReferenceableProperties as referenceable {
        display_name: String = "displayName",
        summary: String = "summary",
        description: String = "description",
        examples: String = "examples",
        abbreviation: String = "abbreviation",
        usage: String = "usage",
    }
}
