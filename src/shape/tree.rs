//! The selection tree: declarative, ordered rows of
//! `(type-name predicate, variant, children)`.
//!
//! ```text
//! Referenceable
//! ├── ActorProfile ── Person, Team
//! ├── Asset ───────── DataSet, DataStore, Process
//! ├── Collection
//! ├── GlossaryTerm
//! ├── ExternalReference ── RelatedMedia
//! ├── Project
//! ├── ToDo
//! ├── GovernanceDefinition ── GovernancePolicy
//! └── SolutionComponent
//! ```
//!
//! Children are tested in declared order and the first match wins, which
//! settles types that descend from more than one branch.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::oracle::TypeOracle;
use super::VariantKind;

/// One row of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionNode {
    pub variant: VariantKind,
    pub children: Vec<SelectionNode>,
}

impl SelectionNode {
    pub fn leaf(variant: VariantKind) -> Self {
        Self { variant, children: Vec::new() }
    }

    pub fn branch(variant: VariantKind, children: Vec<SelectionNode>) -> Self {
        Self { variant, children }
    }

    /// The type-name predicate of this row.
    pub fn type_name(&self) -> &'static str {
        self.variant.type_name()
    }
}

/// Outcome of resolving an element's type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Deepest matching variant.
    pub variant: VariantKind,
    /// The element's reported type, kept even when more specific.
    pub type_name: String,
    /// Variants matched on the way down, root first.
    pub path: SmallVec<[VariantKind; 4]>,
}

impl Resolution {
    /// False when nothing beyond the root matched.
    pub fn is_recognized(&self) -> bool {
        self.path.len() > 1
    }
}

static OPEN_METADATA: LazyLock<SelectionTree> = LazyLock::new(SelectionTree::build_open_metadata);

/// Priority tree of variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTree {
    root: SelectionNode,
}

impl SelectionTree {
    pub fn new(root: SelectionNode) -> Self {
        Self { root }
    }

    /// The shared tree for the open metadata variant family.
    pub fn open_metadata() -> &'static SelectionTree {
        &OPEN_METADATA
    }

    fn build_open_metadata() -> SelectionTree {
        use SelectionNode as N;
        use VariantKind as V;

        SelectionTree::new(N::branch(V::Referenceable, vec![
            N::branch(V::ActorProfile, vec![N::leaf(V::Person), N::leaf(V::Team)]),
            N::branch(V::Asset, vec![N::leaf(V::DataSet), N::leaf(V::DataStore), N::leaf(V::Process)]),
            N::leaf(V::Collection),
            N::leaf(V::GlossaryTerm),
            N::branch(V::ExternalReference, vec![N::leaf(V::RelatedMedia)]),
            N::leaf(V::Project),
            N::leaf(V::ToDo),
            N::branch(V::GovernanceDefinition, vec![N::leaf(V::GovernancePolicy)]),
            N::leaf(V::SolutionComponent),
        ]))
    }

    pub fn root(&self) -> &SelectionNode {
        &self.root
    }

    /// Rows in priority order (pre-order), with their depth.
    pub fn rows(&self) -> Vec<(usize, &SelectionNode)> {
        fn walk<'a>(node: &'a SelectionNode, depth: usize, out: &mut Vec<(usize, &'a SelectionNode)>) {
            out.push((depth, node));
            for child in &node.children {
                walk(child, depth + 1, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.root, 0, &mut out);
        out
    }

    /// Descend from the root, recursing into the first matching child at
    /// each branch. The root always matches.
    pub fn resolve<O: TypeOracle + ?Sized>(&self, type_name: &str, oracle: &O) -> Resolution {
        let mut path: SmallVec<[VariantKind; 4]> = SmallVec::new();
        let mut node = &self.root;
        path.push(node.variant);

        while let Some(next) = node
            .children
            .iter()
            .find(|child| oracle.is_type_of(type_name, child.type_name()))
        {
            path.push(next.variant);
            node = next;
        }

        if path.len() == 1 {
            tracing::debug!(type_name, variant = %node.variant, "unrecognized type, using root variant");
        } else {
            tracing::trace!(type_name, variant = %node.variant, depth = path.len(), "resolved variant");
        }

        Resolution {
            variant: node.variant,
            type_name: type_name.to_owned(),
            path,
        }
    }
}
