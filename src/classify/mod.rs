//! # Relationship Classifier
//!
//! Partitions a batch of relationships seen from one anchor element into
//! named buckets, using a rule set scoped to the calling context.
//!
//! ## Guarantees
//!
//! | Property | Meaning |
//! |----------|---------|
//! | Total | Every input lands in exactly one bucket, `other` included |
//! | First match | Rules are tried in order; the first that accepts wins |
//! | Tolerant | Malformed input becomes an identity-only summary in `other` |
//!
//! The type oracle answers all type questions, so a subtype of a routed
//! relationship type follows its parent's rule.

pub mod buckets;
pub mod rules;

use hashbrown::HashSet;

use crate::model::{RelatedElement, Value};
use crate::oracle::TypeOracle;

pub use buckets::{BucketKey, ElementSummary, RelatedElementSummary, RelationshipBuckets, RelationshipHeader};
pub use rules::{DirectionRule, Route, Rule, RuleSet};

/// Classify `related` with `rules`. Never fails.
pub fn classify<O: TypeOracle + ?Sized>(
    rules: &RuleSet,
    related: &[RelatedElement],
    oracle: &O,
) -> RelationshipBuckets {
    let mut out = RelationshipBuckets::new(rules.name());
    let mut seen: HashSet<&str> = HashSet::new();
    let mut claimed: Vec<String> = Vec::new();

    for item in related {
        let rel = &item.relationship;

        if rel.relationship_type.is_missing() || item.element.is_none() {
            tracing::warn!(
                relationship = %rel.guid,
                rule_set = rules.name(),
                missing_type = rel.relationship_type.is_missing(),
                missing_element = item.element.is_none(),
                "malformed relationship, recording identity only"
            );
            out.push(BucketKey::OTHER, RelatedElementSummary::identity_only(item));
            continue;
        }

        let Some(rule) = rules.first_match(item, oracle) else {
            tracing::trace!(relationship = %rel.guid, type_name = item.type_name(), "no rule, routed to other");
            out.push(BucketKey::OTHER, RelatedElementSummary::from_related(item));
            continue;
        };

        let mut summary = RelatedElementSummary::from_related(item);
        if let Route::Linkage { join_key } = rule.route {
            summary.join_key = join_value(item, join_key);
        }

        if seen.insert(item.type_name()) {
            claimed.push(item.type_name().to_owned());
        }

        tracing::trace!(
            relationship = %rel.guid,
            type_name = item.type_name(),
            bucket = %rule.route.bucket(),
            "routed"
        );
        out.push(rule.route.bucket().clone(), summary);
    }

    out.set_claimed(claimed);
    out
}

/// The join key from the relationship's own properties: a string, or the
/// first string of a list.
fn join_value(item: &RelatedElement, key: &str) -> Option<String> {
    match item.relationship.properties.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::List(items) => items.iter().find_map(|v| v.as_str().map(str::to_owned)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnchorEnd, ElementStub, MetadataElement, Relationship};
    use crate::oracle::TypeRegistry;
    use crate::shape::TargetShape;
    use crate::types::*;

    fn related(guid: &str, type_name: &str, end: AnchorEnd, far_guid: &str, far_type: &str) -> RelatedElement {
        let anchor = ElementStub::new("anchor", "Referenceable");
        let far = ElementStub::new(far_guid, far_type);
        let rel = match end {
            AnchorEnd::End1 => Relationship::new(guid, type_name, anchor, far),
            AnchorEnd::End2 => Relationship::new(guid, type_name, far, anchor),
        };
        RelatedElement::new(rel, Some(MetadataElement::new(far_guid, far_type)), end)
    }

    #[test]
    fn test_action_target_and_external_reference() {
        let reg = TypeRegistry::open_metadata();
        let input = vec![
            related("r1", ACTION_TARGET, AnchorEnd::End1, "t1", TO_DO),
            related("r2", EXTERNAL_REFERENCE_LINK, AnchorEnd::End2, "x1", EXTERNAL_REFERENCE),
        ];
        let buckets = classify(RuleSet::for_shape(TargetShape::Element), &input, &reg);

        assert_eq!(buckets.action_targets().len(), 1);
        assert_eq!(buckets.action_targets()[0].related_guid().as_str(), "t1");
        assert_eq!(buckets.external_references().len(), 1);
        assert_eq!(buckets.external_references()[0].related_guid().as_str(), "x1");
        assert!(buckets.other().is_empty());
        assert_eq!(buckets.total(), 2);
    }

    #[test]
    fn test_direction_split_claims_type_once() {
        let reg = TypeRegistry::open_metadata();
        let input = vec![
            related("r1", ACTION_TARGET, AnchorEnd::End1, "a", TO_DO),
            related("r2", ACTION_TARGET, AnchorEnd::End2, "b", TO_DO),
        ];
        let buckets = classify(RuleSet::for_shape(TargetShape::Element), &input, &reg);

        assert_eq!(buckets.action_targets().len(), 1);
        assert_eq!(buckets.action_sources().len(), 1);
        assert_eq!(buckets.action_sources()[0].related_guid().as_str(), "b");
        assert_eq!(buckets.claimed_types(), &[ACTION_TARGET.to_owned()]);
    }

    #[test]
    fn test_unmatched_goes_to_other() {
        let reg = TypeRegistry::open_metadata();
        let input = vec![related("r1", "BrandNewLink", AnchorEnd::End1, "a", ASSET)];
        let buckets = classify(RuleSet::for_shape(TargetShape::Element), &input, &reg);
        assert_eq!(buckets.other().len(), 1);
        assert!(!buckets.other()[0].detail_omitted);
        assert!(buckets.claimed_types().is_empty());
    }

    #[test]
    fn test_malformed_is_tolerated() {
        let reg = TypeRegistry::open_metadata();
        let mut no_element = related("r1", ACTION_TARGET, AnchorEnd::End1, "a", TO_DO);
        no_element.element = None;
        let no_type = related("r2", "  ", AnchorEnd::End2, "b", ASSET);
        let fine = related("r3", ATTACHED_TAG, AnchorEnd::End1, "c", "InformalTag");

        let buckets = classify(RuleSet::for_shape(TargetShape::Element), &[no_element, no_type, fine], &reg);

        assert_eq!(buckets.other().len(), 2);
        assert!(buckets.other().iter().all(|s| s.detail_omitted));
        assert_eq!(buckets.other()[0].related_guid().as_str(), "a");
        assert_eq!(buckets.get(&BucketKey::TAGS).len(), 1);
        assert_eq!(buckets.total(), 3);
    }

    #[test]
    fn test_subtype_follows_parent_rule() {
        let reg = TypeRegistry::open_metadata();
        let input = vec![
            related("r1", DATA_FLOW, AnchorEnd::End1, "down", PROCESS),
            related("r2", DATA_FLOW, AnchorEnd::End2, "up", PROCESS),
        ];
        let buckets = classify(RuleSet::for_shape(TargetShape::Asset), &input, &reg);
        assert_eq!(buckets.downstream_lineage()[0].related_guid().as_str(), "down");
        assert_eq!(buckets.upstream_lineage()[0].related_guid().as_str(), "up");

        // No lineage rows in the element context.
        let plain = classify(RuleSet::for_shape(TargetShape::Element), &input, &reg);
        assert_eq!(plain.other().len(), 2);
    }

    #[test]
    fn test_linkage_copies_join_key() {
        let reg = TypeRegistry::open_metadata();
        let mut item = related("r1", INFORMATION_SUPPLY_CHAIN_LINK, AnchorEnd::End2, "c2", SOLUTION_COMPONENT);
        item.relationship = item
            .relationship
            .with_property(ISC_QUALIFIED_NAME, Value::List(vec![Value::from("ISC::orders")]));

        let buckets = classify(RuleSet::for_shape(TargetShape::SolutionComponent), &[item], &reg);
        assert_eq!(buckets.linked().len(), 1);
        assert_eq!(buckets.linked()[0].join_key.as_deref(), Some("ISC::orders"));
    }

    #[test]
    fn test_empty_input() {
        let reg = TypeRegistry::open_metadata();
        let buckets = classify(RuleSet::for_shape(TargetShape::Project), &[], &reg);
        assert!(buckets.is_empty());
        assert_eq!(buckets.rule_set, "project");
    }
}
