//! Governance definitions.

use super::ReferenceableProperties;

variant_properties! {
    GovernanceDefinitionProperties extends ReferenceableProperties as referenceable {
        document_identifier: String = "documentIdentifier",
        title: String = "title",
        summary: String = "summary",
        description: String = "description",
        scope: String = "scope",
        domain_identifier: i32 = "domainIdentifier",
        importance: String = "importance",
        implications: Vec<String> = "implications",
        outcomes: Vec<String> = "outcomes",
        results: Vec<String> = "results",
    }
}

variant_properties! {
    /// A policy adds no fields of its own; it exists so policies resolve
    /// to their own variant and shape.
    GovernancePolicyProperties extends GovernanceDefinitionProperties as governance_definition {}
}
