//! Ordered property container with pooled reuse
//!
//! A [`PropertySet`] holds the properties of one log call. Storage keeps
//! insertion positions; a `name -> position` index provides O(1) lookup and
//! decides which entries are live. Deleting a name only removes it from the
//! index, so everything that reads the set (lookups, exports, encoders)
//! stops seeing it while storage stays as it is until the set is recycled.
//!
//! Sets come from a process-wide pool. A set is exclusively owned by the
//! code that acquired it and goes back to the pool on [`PropertySet::release`]
//! or when dropped. `release` consumes the handle, so touching a set after
//! releasing it does not compile:
//!
//! ```compile_fail
//! use rust_structured_logger::{Prop, PropertySet};
//!
//! let props = PropertySet::new(&[Prop::string("user", "alice")]);
//! props.release();
//! props.get("user");
//! ```

use super::property::{Prop, PropValue};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Upper bound on idle storages kept by the pool
pub const MAX_POOLED_SETS: usize = 256;

#[derive(Debug, Default)]
struct PropertyStore {
    entries: Vec<Prop>,
    index: HashMap<String, usize>,
    released: bool,
}

struct PropertyPool {
    free: Mutex<Vec<PropertyStore>>,
}

static POOL: PropertyPool = PropertyPool {
    free: parking_lot::const_mutex(Vec::new()),
};

impl PropertyPool {
    fn acquire(&self, capacity: usize) -> PropertyStore {
        let pooled = self.free.lock().pop();
        let mut store = match pooled {
            Some(store) => {
                debug_assert!(store.released, "pooled property storage was not released");
                debug_assert!(store.index.is_empty(), "pooled property index was not cleared");
                store
            }
            None => PropertyStore::default(),
        };
        store.released = false;
        store.entries.clear();
        store.entries.reserve(capacity);
        store.index.reserve(capacity);
        store
    }

    fn put(&self, mut store: PropertyStore) {
        store.index.clear();
        store.released = true;
        let mut free = self.free.lock();
        if free.len() < MAX_POOLED_SETS {
            free.push(store);
        }
    }
}

/// The properties of a single log call
#[derive(Debug)]
pub struct PropertySet {
    store: PropertyStore,
}

impl PropertySet {
    /// Acquire a pooled set holding `props`
    ///
    /// Props are inserted in order. When a name repeats, the later value wins
    /// but the entry keeps the position of the first occurrence.
    pub fn new(props: &[Prop]) -> Self {
        let mut set = Self {
            store: POOL.acquire(props.len()),
        };
        for prop in props {
            set.set(prop.clone());
        }
        set
    }

    /// Acquire an empty pooled set
    pub fn empty() -> Self {
        Self::new(&[])
    }

    #[inline]
    fn check_live(&self) {
        debug_assert!(
            !self.store.released,
            "PropertySet accessed after it was returned to the pool"
        );
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.check_live();
        self.store
            .index
            .get(name)
            .and_then(|&idx| self.store.entries.get(idx))
            .map(|prop| &prop.value)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(PropValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(PropValue::Int(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn get_uint(&self, name: &str) -> Option<u64> {
        match self.get(name) {
            Some(PropValue::UInt(u)) => Some(*u),
            _ => None,
        }
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(PropValue::Float(f)) => Some(*f),
            _ => None,
        }
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(PropValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Overwrite a live entry in place, or append a new one
    pub fn set(&mut self, prop: Prop) {
        self.check_live();
        if let Some(&idx) = self.store.index.get(&prop.name) {
            self.store.entries[idx].value = prop.value;
            return;
        }
        self.store
            .index
            .insert(prop.name.clone(), self.store.entries.len());
        self.store.entries.push(prop);
    }

    /// Remove names from the index; storage is not compacted
    pub fn delete(&mut self, names: &[&str]) {
        self.check_live();
        for name in names {
            self.store.index.remove(*name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.check_live();
        self.store.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live entries in storage-position order
    pub fn iter(&self) -> impl Iterator<Item = &Prop> {
        self.check_live();
        let index = &self.store.index;
        self.store
            .entries
            .iter()
            .enumerate()
            .filter(move |(idx, prop)| index.get(&prop.name) == Some(idx))
            .map(|(_, prop)| prop)
    }

    /// Live entries in storage-position order, minus `except`
    pub fn as_ordered_list(&self, except: &[&str]) -> Vec<&Prop> {
        self.iter()
            .filter(|prop| !except.contains(&prop.name.as_str()))
            .collect()
    }

    /// Live entries keyed by name, minus `except`
    pub fn as_map(&self, except: &[&str]) -> HashMap<&str, &PropValue> {
        self.iter()
            .filter(|prop| !except.contains(&prop.name.as_str()))
            .map(|prop| (prop.name.as_str(), &prop.value))
            .collect()
    }

    /// Live entries as a JSON object, minus `except`
    pub fn to_json_map(&self, except: &[&str]) -> serde_json::Map<String, serde_json::Value> {
        self.iter()
            .filter(|prop| !except.contains(&prop.name.as_str()))
            .map(|prop| (prop.name.clone(), prop.value.to_json_value()))
            .collect()
    }

    /// Return the set to the pool
    pub fn release(self) {
        drop(self);
    }
}

impl Default for PropertySet {
    fn default() -> Self {
        Self::empty()
    }
}

impl Drop for PropertySet {
    fn drop(&mut self) {
        POOL.put(std::mem::take(&mut self.store));
    }
}
