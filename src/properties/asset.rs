//! Assets: data sets, data stores and processes.

use chrono::{DateTime, Utc};

use super::ReferenceableProperties;

variant_properties! {
    AssetProperties extends ReferenceableProperties as referenceable {
        name: String = "name",
        display_name: String = "displayName",
        resource_name: String = "resourceName",
        version_identifier: String = "versionIdentifier",
        description: String = "description",
        deployed_implementation_type: String = "deployedImplementationType",
    }
}

variant_properties! {
    DataSetProperties extends AssetProperties as asset {
        formula: String = "formula",
        formula_type: String = "formulaType",
    }
}

variant_properties! {
    /// Physical store. Times are the store's own, not the metadata's.
    DataStoreProperties extends AssetProperties as asset {
        store_create_time: DateTime<Utc> = "storeCreateTime",
        store_update_time: DateTime<Utc> = "storeUpdateTime",
    }
}

variant_properties! {
    ProcessProperties extends AssetProperties as asset {
        formula: String = "formula",
        formula_type: String = "formulaType",
        is_dynamic: bool = "isDynamic",
    }
}
