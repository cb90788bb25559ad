//! Memo cache for element-only views.
//!
//! Conversions are pure, so a view can be reused for as long as the element
//! snapshot and the type hierarchy are unchanged. The key carries the
//! element's type, version and update time plus the oracle's generation; a
//! newer snapshot or a changed hierarchy simply misses. A versioned snapshot
//! is taken to be immutable: the repository bumps the version on every
//! update. Unversioned snapshots (version 0, no update time) carry no such
//! promise and are never cached.
//!
//! Nothing is ever invalidated: when the cache reaches capacity it is
//! cleared wholesale.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::model::{Guid, MetadataElement};
use crate::shape::TargetShape;
use crate::view::ElementView;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub guid: Guid,
    pub type_name: String,
    pub version: i64,
    pub update_time: Option<DateTime<Utc>>,
    pub shape: TargetShape,
    pub generation: u64,
}

impl CacheKey {
    /// `None` for an unversioned snapshot.
    pub fn new(element: &MetadataElement, shape: TargetShape, generation: u64) -> Option<Self> {
        let versions = &element.versions;
        if versions.version == 0 && versions.update_time.is_none() {
            return None;
        }
        Some(Self {
            guid: element.guid.clone(),
            type_name: element.type_name().to_owned(),
            version: versions.version,
            update_time: versions.update_time,
            shape,
            generation,
        })
    }
}

/// Bounded, thread-safe view cache. Clones share storage.
#[derive(Clone)]
pub struct ViewCache {
    inner: Arc<RwLock<HashMap<CacheKey, Arc<ElementView>>>>,
    capacity: usize,
}

impl ViewCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::with_capacity(capacity.min(1024)))),
            capacity: capacity.max(1),
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<ElementView>> {
        self.inner.read().get(key).cloned()
    }

    pub fn insert(&self, key: CacheKey, view: Arc<ElementView>) {
        let mut map = self.inner.write();
        if map.len() >= self.capacity && !map.contains_key(&key) {
            tracing::debug!(entries = map.len(), "view cache full, clearing");
            map.clear();
        }
        map.insert(key, view);
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

impl std::fmt::Debug for ViewCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewCache")
            .field("entries", &self.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
