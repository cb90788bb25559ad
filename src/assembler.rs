//! # View Assembler
//!
//! `Projector` runs the resolver, the extractor and the classifier for the
//! four request shapes:
//!
//! | Entry point | Output |
//! |-------------|--------|
//! | `element_view` | header + properties |
//! | `related_view` | the above + the relationship it was reached through |
//! | `full_view` | the above + classified relationship buckets |
//! | `composite_view` | the above + pre-resolved composite parts |
//!
//! Every call is a pure function of its inputs. Construction is
//! all-or-nothing: on failure no view is returned.

use std::sync::Arc;

use crate::cache::{CacheKey, ViewCache};
use crate::classify::{classify, RuleSet};
use crate::config::ProjectorConfig;
use crate::extract::extract_properties;
use crate::model::{MetadataElement, RelatedElement, Relationship};
use crate::oracle::TypeOracle;
use crate::shape::{Resolution, SelectionTree, TargetShape};
use crate::view::{CompositeParts, ElementHeader, ElementView, RelationshipLink};
use crate::{Error, Result};

/// Converts metadata snapshots into typed views.
pub struct Projector<O: TypeOracle> {
    oracle: O,
    tree: &'static SelectionTree,
    config: ProjectorConfig,
    cache: Option<ViewCache>,
}

impl<O: TypeOracle> Projector<O> {
    pub fn new(oracle: O) -> Self {
        Self::with_config(oracle, ProjectorConfig::default())
    }

    pub fn with_config(oracle: O, config: ProjectorConfig) -> Self {
        let cache = config.memoize.then(|| ViewCache::new(config.cache_capacity));
        Self {
            oracle,
            tree: SelectionTree::open_metadata(),
            config,
            cache,
        }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    pub fn cache(&self) -> Option<&ViewCache> {
        self.cache.as_ref()
    }

    /// Resolve a type name against this projector's oracle.
    pub fn resolve(&self, type_name: &str) -> Resolution {
        self.tree.resolve(type_name, &self.oracle)
    }

    // ========================================================================
    // Entry points
    // ========================================================================

    /// (a) Header and properties only.
    pub fn element_view(
        &self,
        shape: TargetShape,
        element: Option<&MetadataElement>,
        method: &str,
    ) -> Result<ElementView> {
        let element = self.require_element(shape, element, method)?;

        let Some(cache) = &self.cache else {
            return self.project(shape, element, method);
        };

        let Some(key) = CacheKey::new(element, shape, self.oracle.generation()) else {
            return self.project(shape, element, method);
        };
        if let Some(hit) = cache.get(&key) {
            tracing::trace!(guid = %element.guid, %shape, "view cache hit");
            return Ok(ElementView::clone(&hit));
        }
        let view = self.project(shape, element, method)?;
        cache.insert(key, Arc::new(view.clone()));
        Ok(view)
    }

    /// (b) Element view plus the relationship it was reached through.
    pub fn related_view(
        &self,
        shape: TargetShape,
        element: Option<&MetadataElement>,
        relationship: Option<&Relationship>,
        method: &str,
    ) -> Result<ElementView> {
        let element = self.require_element(shape, element, method)?;
        let Some(relationship) = relationship else {
            return Err(self.missing(shape, "relationship", method));
        };
        let link = self.link(shape, element, relationship, method)?;

        let mut view = self.project(shape, element, method)?;
        view.reached_by = Some(link);
        Ok(view)
    }

    /// (c) Element view, optionally with how it was reached, plus every
    /// relationship classified with the shape's rule set.
    ///
    /// `None` and an empty list both yield present, empty buckets.
    pub fn full_view(
        &self,
        shape: TargetShape,
        element: Option<&MetadataElement>,
        reached_by: Option<&Relationship>,
        relationships: Option<&[RelatedElement]>,
        method: &str,
    ) -> Result<ElementView> {
        let element = self.require_element(shape, element, method)?;
        let link = reached_by
            .map(|rel| self.link(shape, element, rel, method))
            .transpose()?;

        let mut view = self.project(shape, element, method)?;
        let related = relationships.unwrap_or_default();
        let buckets = classify(RuleSet::for_shape(shape), related, &self.oracle);
        tracing::debug!(
            guid = %element.guid,
            %shape,
            relationships = related.len(),
            claimed = buckets.claimed_types().len(),
            other = buckets.other().len(),
            "classified relationships"
        );

        view.reached_by = link;
        view.related = Some(buckets);
        Ok(view)
    }

    /// (d) Full view plus composite parts built elsewhere. The parts are
    /// attached unchanged.
    pub fn composite_view(
        &self,
        shape: TargetShape,
        element: Option<&MetadataElement>,
        relationships: Option<&[RelatedElement]>,
        parts: CompositeParts,
        method: &str,
    ) -> Result<ElementView> {
        if !shape.supports(parts.form) {
            return Err(Error::UnsupportedOperation {
                shape,
                operation: parts.form,
                method: method.to_owned(),
                service: self.config.attribution(),
            });
        }

        let mut view = self.full_view(shape, element, None, relationships, method)?;
        tracing::debug!(
            guid = %view.header.guid,
            %shape,
            form = ?parts.form,
            nodes = parts.nodes.len(),
            edges = parts.edges.len(),
            "attached composite parts"
        );
        view.composite = Some(parts);
        Ok(view)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn project(&self, shape: TargetShape, element: &MetadataElement, method: &str) -> Result<ElementView> {
        if element.element_type.is_missing() {
            return Err(self.malformed(shape, "element", element.guid.as_str(), method));
        }

        let resolution = self.resolve(element.type_name());
        if !shape.accepts(resolution.variant) {
            return Err(Error::InvalidTargetShape {
                shape,
                variant: resolution.variant,
                type_name: resolution.type_name,
                method: method.to_owned(),
                service: self.config.attribution(),
            });
        }

        let extraction = extract_properties(resolution.variant, &resolution.type_name, &element.properties);
        tracing::debug!(
            guid = %element.guid,
            %shape,
            variant = %resolution.variant,
            consumed = extraction.consumed.len(),
            extended = extraction.properties.extended_properties().len(),
            method,
            "assembled view"
        );

        Ok(ElementView::new(ElementHeader::new(element, &resolution), extraction.properties))
    }

    fn link(
        &self,
        shape: TargetShape,
        element: &MetadataElement,
        relationship: &Relationship,
        method: &str,
    ) -> Result<RelationshipLink> {
        if relationship.relationship_type.is_missing() {
            return Err(self.malformed(shape, "relationship", relationship.guid.as_str(), method));
        }
        Ok(RelationshipLink::new(relationship, &element.guid))
    }

    fn require_element<'a>(
        &self,
        shape: TargetShape,
        element: Option<&'a MetadataElement>,
        method: &str,
    ) -> Result<&'a MetadataElement> {
        element.ok_or_else(|| self.missing(shape, "element", method))
    }

    fn missing(&self, shape: TargetShape, what: &'static str, method: &str) -> Error {
        Error::MissingInstance {
            what,
            shape,
            method: method.to_owned(),
            service: self.config.attribution(),
        }
    }

    fn malformed(&self, shape: TargetShape, what: &'static str, guid: &str, method: &str) -> Error {
        Error::MalformedInstance {
            what,
            guid: guid.to_owned(),
            shape,
            method: method.to_owned(),
            service: self.config.attribution(),
        }
    }
}

impl<O: TypeOracle> std::fmt::Debug for Projector<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Projector")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
