use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;

/// One loaded step-definition module: the source text of a `*.steps` file,
/// keyed by the file name without extension. The step-matching engine
/// consumes these by name; this layer only loads them.
#[derive(Debug, Clone, Serialize)]
pub struct StepModule {
    pub name: String,
    pub path: PathBuf,
    pub source: String,
}

/// Caller-owned registry of loaded step modules.
///
/// Inserting a module with a name that is already present replaces the old
/// entry, so a registry always reflects the most recent load of each module.
/// A discovery pass clears and repopulates it; entries are never removed
/// individually.
#[derive(Debug, Default)]
pub struct StepRegistry {
    modules: HashMap<String, StepModule>,
}

impl StepRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `module`, returning the entry it replaced, if any.
    pub fn insert(&mut self, module: StepModule) -> Option<StepModule> {
        self.modules.insert(module.name.clone(), module)
    }

    pub fn get(&self, name: &str) -> Option<&StepModule> {
        self.modules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    pub fn modules(&self) -> impl Iterator<Item = &StepModule> {
        self.modules.values()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn clear(&mut self) {
        self.modules.clear();
    }
}
