//! Module registry: module key → singleton handler, in registration order.

use indexmap::IndexMap;
use sitekit_api::Handler;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct RegisteredModule {
    pub key: String,
    pub handler: Arc<dyn Handler>,
}

impl fmt::Debug for RegisteredModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredModule")
            .field("key", &self.key)
            .field("type_tag", &self.handler.type_tag())
            .finish()
    }
}

/// Append-only table of registered modules. The first registration of a key wins.
#[derive(Default, Clone, Debug)]
pub struct ModuleRegistry {
    modules: IndexMap<String, RegisteredModule>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under its name. Returns `false` if the key was
    /// already taken, in which case the registry is left untouched.
    pub fn register(&mut self, handler: Arc<dyn Handler>) -> bool {
        let key = handler.name().to_string();
        if self.modules.contains_key(&key) {
            tracing::debug!("Module '{}' already registered, keeping the first", key);
            return false;
        }
        tracing::debug!("Registered module '{}'", key);
        self.modules
            .insert(key.clone(), RegisteredModule { key, handler });
        true
    }

    pub fn find(&self, key: &str) -> Option<Arc<dyn Handler>> {
        self.modules.get(key).map(|m| m.handler.clone())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.modules.contains_key(key)
    }

    /// Registered modules in registration order.
    pub fn all(&self) -> impl Iterator<Item = &RegisteredModule> {
        self.modules.values()
    }

    pub fn handlers(&self) -> Vec<Arc<dyn Handler>> {
        self.modules.values().map(|m| m.handler.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Removes a module while preserving the order of the others.
    /// Only meant for test isolation.
    pub fn remove(&mut self, key: &str) -> Option<RegisteredModule> {
        self.modules.shift_remove(key)
    }
}
