//! Property-based tests for the projection guarantees.
//!
//! - nothing is dropped or duplicated by extraction
//! - every relationship lands in exactly one bucket
//! - variant selection depends on the type name only

use std::collections::BTreeSet;

use metaview::extract::extract_properties;
use metaview::model::EnumValue;
use metaview::types::*;
use metaview::{
    AnchorEnd, ElementStub, MetadataElement, Projector, PropertyBag, RelatedElement, Relationship, RuleSet,
    TargetShape, TypeRegistry, Value, VariantKind,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Mix of keys some variant knows and keys nobody knows.
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "qualifiedName", "additionalProperties", "displayName", "description", "name",
            "givenNames", "isPublic", "priority", "startDate", "mediaUsage", "mediaType",
            "toDoStatus", "domainIdentifier", "implications", "storeCreateTime", "formula",
        ])
        .prop_map(str::to_owned),
        "[a-z][a-zA-Z]{0,8}",
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<i32>().prop_map(|i| Value::Float(f64::from(i))),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
        (0..4i32, "[A-Z][a-zA-Z]{0,8}").prop_map(|(o, s)| Value::Enum(EnumValue::new(o, s))),
        prop::collection::vec("[a-z]{1,5}".prop_map(Value::String), 0..3).prop_map(Value::List),
        prop::collection::vec(any::<i64>().prop_map(Value::Int), 1..3).prop_map(Value::List),
    ]
}

fn arb_bag() -> impl Strategy<Value = PropertyBag> {
    prop::collection::vec((arb_key(), arb_value()), 0..16).prop_map(|entries| entries.into_iter().collect())
}

fn arb_type_name() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            REFERENCEABLE, PERSON, TEAM, ASSET, DATA_SET, DATA_STORE, "CSVFile", PROCESS, COLLECTION,
            GLOSSARY_TERM, RELATED_MEDIA, PROJECT, "Campaign", TO_DO, GOVERNANCE_POLICY, SOLUTION_COMPONENT,
        ])
        .prop_map(str::to_owned),
        "[A-Z][a-zA-Z]{2,10}",
    ]
}

fn arb_relationship_type() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            ACTION_TARGET, EXTERNAL_REFERENCE_LINK, SEMANTIC_ASSIGNMENT, COLLECTION_MEMBERSHIP, ATTACHED_TAG,
            GOVERNED_BY, RESOURCE_LIST, PROJECT_HIERARCHY, TEAM_MEMBERSHIP, DATA_FLOW, SOLUTION_COMPOSITION,
            INFORMATION_SUPPLY_CHAIN_LINK, "",
        ])
        .prop_map(str::to_owned),
        "[A-Z][a-zA-Z]{2,10}",
    ]
}

fn arb_related() -> impl Strategy<Value = Vec<(String, bool, bool)>> {
    prop::collection::vec((arb_relationship_type(), any::<bool>(), prop::bool::weighted(0.9)), 0..24)
}

fn build_related(specs: &[(String, bool, bool)]) -> Vec<RelatedElement> {
    specs
        .iter()
        .enumerate()
        .map(|(i, (type_name, at_end1, has_element))| {
            let anchor = ElementStub::new("anchor", ASSET);
            let far_guid = format!("far-{i}");
            let far = ElementStub::new(far_guid.as_str(), REFERENCEABLE);
            let (rel, end) = if *at_end1 {
                (Relationship::new(format!("rel-{i}"), type_name.as_str(), anchor, far), AnchorEnd::End1)
            } else {
                (Relationship::new(format!("rel-{i}"), type_name.as_str(), far, anchor), AnchorEnd::End2)
            };
            let element = has_element.then(|| MetadataElement::new(far_guid, REFERENCEABLE));
            RelatedElement::new(rel, element, end)
        })
        .collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn test_extraction_is_lossless(bag in arb_bag()) {
        for kind in VariantKind::ALL {
            let extraction = extract_properties(kind, kind.type_name(), &bag);
            let original: BTreeSet<&str> = bag.keys().collect();
            let consumed: BTreeSet<&str> = extraction.consumed.iter().map(String::as_str).collect();
            let residual: BTreeSet<&str> = extraction.properties.extended_properties().keys().collect();

            prop_assert!(consumed.is_disjoint(&residual), "{kind}: key in both");
            let union: BTreeSet<&str> = consumed.union(&residual).copied().collect();
            prop_assert_eq!(union, original);
            prop_assert_eq!(extraction.consumed.len(), consumed.len());
        }
    }

    #[test]
    fn test_residual_values_are_verbatim(bag in arb_bag()) {
        let extraction = extract_properties(VariantKind::Person, PERSON, &bag);
        for (key, value) in extraction.properties.extended_properties().iter() {
            prop_assert_eq!(bag.get(key), Some(value));
        }
    }

    #[test]
    fn test_every_relationship_lands_once(specs in arb_related()) {
        let registry = TypeRegistry::open_metadata();
        let related = build_related(&specs);

        for shape in TargetShape::ALL {
            let buckets = metaview::classify::classify(RuleSet::for_shape(shape), &related, &registry);
            prop_assert_eq!(buckets.total(), related.len());

            let mut seen: Vec<String> = buckets
                .iter()
                .flat_map(|(_, items)| items.iter().map(|s| s.relationship.guid.to_string()))
                .collect();
            seen.sort();
            let mut expected: Vec<String> = related.iter().map(|r| r.relationship.guid.to_string()).collect();
            expected.sort();
            prop_assert_eq!(seen, expected);
        }
    }

    #[test]
    fn test_variant_depends_on_type_only(type_name in arb_type_name(), a in arb_bag(), b in arb_bag()) {
        let projector = Projector::new(TypeRegistry::open_metadata());
        let expected = projector.resolve(&type_name).variant;

        let first = MetadataElement::new("g", type_name.as_str()).with_properties(a);
        let second = MetadataElement::new("g", type_name.as_str()).with_properties(b);
        let v1 = projector.element_view(TargetShape::Element, Some(&first), "get").unwrap();
        let v2 = projector.element_view(TargetShape::Element, Some(&second), "get").unwrap();

        prop_assert_eq!(v1.variant(), expected);
        prop_assert_eq!(v2.variant(), expected);
    }

    #[test]
    fn test_projection_is_idempotent(type_name in arb_type_name(), bag in arb_bag(), specs in arb_related()) {
        let projector = Projector::new(TypeRegistry::open_metadata());
        let element = MetadataElement::new("anchor", type_name.as_str()).with_properties(bag);
        let related = build_related(&specs);

        let first = projector.full_view(TargetShape::Element, Some(&element), None, Some(&related), "get").unwrap();
        let second = projector.full_view(TargetShape::Element, Some(&element), None, Some(&related), "get").unwrap();
        prop_assert_eq!(first, second);
    }
}
