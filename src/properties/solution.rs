//! Solution components.

use super::ReferenceableProperties;

variant_properties! {
    SolutionComponentProperties extends ReferenceableProperties as referenceable {
        name: String = "name",
        display_name: String = "displayName",
        description: String = "description",
        solution_component_type: String = "solutionComponentType",
        planned_deployed_implementation_type: String = "plannedDeployedImplementationType",
        version_identifier: String = "versionIdentifier",
    }
}
