//! In-memory type registry.
//!
//! This is the reference implementation of `TypeOracle`. It keeps a
//! type → direct-supertypes table behind a RwLock so it can be shared
//! across threads and taught new types while conversions are running.
//!
//! ## Limitations
//!
//! - **No versioning**: redefining a type replaces its supertypes outright.
//! - **No validation**: supertypes need not be defined themselves; an
//!   undefined name is simply a root.
//!
//! Use this registry for:
//! - Tests of the shape resolver and the relationship classifier
//! - Embedding the engine where the hierarchy arrives with the instances
//!   (see [`TypeRegistry::learn`])

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use hashbrown::{HashMap, HashSet};
use parking_lot::RwLock;
use smallvec::SmallVec;

use crate::model::ElementType;
use crate::types::*;
use super::TypeOracle;

type Parents = SmallVec<[String; 2]>;

// ============================================================================
// TypeRegistry
// ============================================================================

/// Shared, cloneable type hierarchy.
#[derive(Clone, Default)]
pub struct TypeRegistry {
    inner: Arc<RwLock<HashMap<String, Parents>>>,
    generation: Arc<AtomicU64>,
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.inner.read().len())
            .field("generation", &self.generation())
            .finish()
    }
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-loaded with the open metadata types the catalog uses.
    pub fn open_metadata() -> Self {
        let registry = Self::new();
        let seed: &[(&str, &[&str])] = &[
            (OPEN_METADATA_ROOT, &[]),
            (REFERENCEABLE, &[OPEN_METADATA_ROOT]),
            (ACTOR_PROFILE, &[REFERENCEABLE]),
            (PERSON, &[ACTOR_PROFILE]),
            (TEAM, &[ACTOR_PROFILE]),
            ("ITProfile", &[ACTOR_PROFILE]),
            (ASSET, &[REFERENCEABLE]),
            (DATA_SET, &[ASSET]),
            ("DataFeed", &[DATA_SET]),
            ("TabularDataSet", &[DATA_SET]),
            (DATA_STORE, &[ASSET]),
            ("DataFile", &[DATA_STORE]),
            ("CSVFile", &["DataFile"]),
            ("Database", &[DATA_STORE]),
            (PROCESS, &[ASSET]),
            ("DeployedSoftwareComponent", &[PROCESS]),
            (COLLECTION, &[REFERENCEABLE]),
            ("DigitalProduct", &[COLLECTION]),
            (GLOSSARY_TERM, &[REFERENCEABLE]),
            ("ControlledGlossaryTerm", &[GLOSSARY_TERM]),
            (EXTERNAL_REFERENCE, &[REFERENCEABLE]),
            (RELATED_MEDIA, &[EXTERNAL_REFERENCE]),
            ("CitedDocument", &[EXTERNAL_REFERENCE]),
            (PROJECT, &[REFERENCEABLE]),
            ("Campaign", &[PROJECT]),
            (TO_DO, &[REFERENCEABLE]),
            ("Action", &[TO_DO]),
            (GOVERNANCE_DEFINITION, &[REFERENCEABLE]),
            (GOVERNANCE_POLICY, &[GOVERNANCE_DEFINITION]),
            ("GovernancePrinciple", &[GOVERNANCE_POLICY]),
            ("GovernanceControl", &[GOVERNANCE_DEFINITION]),
            (SOLUTION_COMPONENT, &[REFERENCEABLE]),
            // Relationship types
            (LINEAGE_RELATIONSHIP, &[]),
            (DATA_FLOW, &[LINEAGE_RELATIONSHIP]),
            (CONTROL_FLOW, &[LINEAGE_RELATIONSHIP]),
            (PROCESS_CALL, &[LINEAGE_RELATIONSHIP]),
            ("LineageMapping", &[LINEAGE_RELATIONSHIP]),
        ];
        for (name, parents) in seed {
            registry.define(name, parents.iter().copied());
        }
        registry
    }

    /// Define (or redefine) a type with its direct supertypes.
    pub fn define<I, S>(&self, type_name: &str, supertypes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parents: Parents = supertypes.into_iter().map(Into::into).collect();
        self.inner.write().insert(type_name.to_owned(), parents);
        self.generation.fetch_add(1, Ordering::Release);
    }

    /// Learn a linear ancestor chain from an instance's type designator.
    ///
    /// Existing definitions win; only unknown names are added.
    pub fn learn(&self, element_type: &ElementType) {
        if element_type.is_missing() {
            return;
        }
        let chain = std::iter::once(&element_type.type_name).chain(element_type.super_type_names.iter());
        let next = element_type.super_type_names.iter().map(Some).chain(std::iter::once(None));

        let mut types = self.inner.write();
        let mut added = 0;
        for (name, parent) in chain.zip(next) {
            if !types.contains_key(name.as_str()) {
                types.insert(name.clone(), parent.iter().map(|p| (*p).clone()).collect());
                added += 1;
            }
        }
        if added > 0 {
            self.generation.fetch_add(1, Ordering::Release);
        }
    }

    pub fn is_defined(&self, type_name: &str) -> bool {
        self.inner.read().contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// All ancestors, breadth first, nearest first. Excludes the type itself.
    pub fn ancestors(&self, type_name: &str) -> Vec<String> {
        let types = self.inner.read();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        let mut out = Vec::new();

        seen.insert(type_name);
        queue.push_back(type_name);
        while let Some(current) = queue.pop_front() {
            let Some(parents) = types.get(current) else { continue };
            for parent in parents {
                if seen.insert(parent.as_str()) {
                    out.push(parent.clone());
                    queue.push_back(parent.as_str());
                }
            }
        }
        out
    }
}

// ============================================================================
// TypeOracle impl
// ============================================================================

impl TypeOracle for TypeRegistry {
    fn is_type_of(&self, type_name: &str, candidate: &str) -> bool {
        if type_name == candidate {
            return true;
        }
        let types = self.inner.read();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = vec![type_name];

        // Walk upwards; the seen set keeps a malformed cyclic table finite.
        while let Some(current) = stack.pop() {
            let Some(parents) = types.get(current) else { continue };
            for parent in parents {
                if parent == candidate {
                    return true;
                }
                if seen.insert(parent.as_str()) {
                    stack.push(parent.as_str());
                }
            }
        }
        false
    }

    fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_and_transitive_membership() {
        let reg = TypeRegistry::open_metadata();
        assert!(reg.is_type_of(PERSON, PERSON));
        assert!(reg.is_type_of(PERSON, ACTOR_PROFILE));
        assert!(reg.is_type_of(PERSON, REFERENCEABLE));
        assert!(!reg.is_type_of(PERSON, ASSET));
        assert!(reg.is_type_of("CSVFile", DATA_STORE));
    }

    #[test]
    fn test_multiple_ancestors() {
        let reg = TypeRegistry::new();
        reg.define("A", Vec::<String>::new());
        reg.define("B", Vec::<String>::new());
        reg.define("AB", ["A", "B"]);
        assert!(reg.is_type_of("AB", "A"));
        assert!(reg.is_type_of("AB", "B"));
        assert!(reg.is_type_of_any("AB", &["Z", "B"]));
        assert_eq!(reg.ancestors("AB"), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_unknown_type_matches_only_itself() {
        let reg = TypeRegistry::open_metadata();
        assert!(reg.is_type_of("FutureWidget", "FutureWidget"));
        assert!(!reg.is_type_of("FutureWidget", REFERENCEABLE));
    }

    #[test]
    fn test_cycle_terminates() {
        let reg = TypeRegistry::new();
        reg.define("X", ["Y"]);
        reg.define("Y", ["X"]);
        assert!(!reg.is_type_of("X", "Z"));
        assert!(reg.is_type_of("X", "Y"));
    }

    #[test]
    fn test_learn_from_instance_chain() {
        let reg = TypeRegistry::new();
        let et = ElementType::named("KafkaTopic").with_super_types(["DataFeed", "DataSet", "Asset"]);
        reg.learn(&et);
        assert!(reg.is_type_of("KafkaTopic", "Asset"));
        assert!(reg.is_type_of("DataFeed", "DataSet"));
        assert_eq!(reg.ancestors("KafkaTopic"), vec!["DataFeed", "DataSet", "Asset"]);
    }

    #[test]
    fn test_generation_moves_on_change_only() {
        let reg = TypeRegistry::open_metadata();
        let start = reg.generation();

        reg.define("KafkaTopic", [DATA_SET]);
        let after_define = reg.generation();
        assert!(after_define > start);

        // Every name already known: nothing learned, nothing moves.
        reg.learn(&ElementType::named("KafkaTopic").with_super_types([DATA_SET]));
        assert_eq!(reg.generation(), after_define);

        reg.learn(&ElementType::named("AvroTopic").with_super_types(["KafkaTopic"]));
        assert!(reg.generation() > after_define);

        // Clones share the counter.
        let clone = reg.clone();
        clone.define("Other", [ASSET]);
        assert_eq!(reg.generation(), clone.generation());
    }
}
