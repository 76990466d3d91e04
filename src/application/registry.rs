use crate::error::{DispatchError, Result};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Anything that self-reports the key it should be registered under.
pub trait Keyed {
    type Key: Copy + Eq + Hash + Display;

    fn key(&self) -> Self::Key;
}

/// A build-once lookup table from key to handler factory.
///
/// Built generically by reducing over the complete factory set; each entry
/// self-reports its key, so adding a variant means adding one factory to the
/// registration list, not editing a branch at every call site. Read-only
/// after construction, so concurrent lookups need no coordination.
pub struct Registry<F: Keyed> {
    entries: HashMap<F::Key, F>,
}

impl<F: Keyed> Registry<F> {
    /// Consumes the complete factory set.
    ///
    /// Fails with `DuplicateRouteError` the moment two factories report the
    /// same key; the registry never becomes usable with a silently dropped
    /// entry.
    pub fn new<I>(factories: I) -> Result<Self>
    where
        I: IntoIterator<Item = F>,
    {
        let mut entries = HashMap::new();
        for factory in factories {
            let key = factory.key();
            if entries.insert(key, factory).is_some() {
                return Err(DispatchError::DuplicateRouteError(key.to_string()));
            }
        }
        Ok(Self { entries })
    }

    /// Pure read; a miss yields `UnknownRouteError`, never a default.
    pub fn resolve(&self, key: F::Key) -> Result<&F> {
        self.entries
            .get(&key)
            .ok_or_else(|| DispatchError::UnknownRouteError(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
