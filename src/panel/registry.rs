//! Bidirectional panel <-> tab key map
//!
//! Host tab-groups identify their tabs by opaque keys. Instead of
//! reinterpreting those keys as widget handles, the core keeps an explicit
//! map that is filled in when panels are registered.

use std::collections::HashMap;

use super::{PanelId, TabKey};

#[derive(Debug, Clone, Default)]
pub struct PanelRegistry {
    by_panel: HashMap<PanelId, TabKey>,
    by_key: HashMap<TabKey, PanelId>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a panel and the tab key the host uses for it
    ///
    /// Re-registering a panel or a key replaces the previous pairing, so the
    /// two directions never disagree.
    pub fn register(&mut self, panel: PanelId, key: TabKey) {
        if let Some(old_key) = self.by_panel.insert(panel, key) {
            self.by_key.remove(&old_key);
        }
        if let Some(old_panel) = self.by_key.insert(key, panel) {
            if old_panel != panel {
                self.by_panel.remove(&old_panel);
            }
        }
    }

    /// Forget a panel (e.g. after the host destroyed it)
    pub fn unregister(&mut self, panel: PanelId) {
        if let Some(key) = self.by_panel.remove(&panel) {
            self.by_key.remove(&key);
        }
    }

    /// Panel behind a tab key, if the key is known
    pub fn resolve(&self, key: TabKey) -> Option<PanelId> {
        self.by_key.get(&key).copied()
    }

    pub fn key_of(&self, panel: PanelId) -> Option<TabKey> {
        self.by_panel.get(&panel).copied()
    }

    pub fn len(&self) -> usize {
        self.by_panel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_panel.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_resolve() {
        let mut registry = PanelRegistry::new();
        registry.register(PanelId(1), TabKey(100));
        registry.register(PanelId(2), TabKey(200));

        assert_eq!(registry.resolve(TabKey(100)), Some(PanelId(1)));
        assert_eq!(registry.key_of(PanelId(2)), Some(TabKey(200)));
        assert_eq!(registry.resolve(TabKey(300)), None);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_reregister_replaces_both_directions() {
        let mut registry = PanelRegistry::new();
        registry.register(PanelId(1), TabKey(100));
        registry.register(PanelId(1), TabKey(101));

        assert_eq!(registry.resolve(TabKey(100)), None);
        assert_eq!(registry.resolve(TabKey(101)), Some(PanelId(1)));

        // Key handed to another panel
        registry.register(PanelId(2), TabKey(101));
        assert_eq!(registry.key_of(PanelId(1)), None);
        assert_eq!(registry.resolve(TabKey(101)), Some(PanelId(2)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister() {
        let mut registry = PanelRegistry::new();
        registry.register(PanelId(7), TabKey(70));
        registry.unregister(PanelId(7));
        assert!(registry.is_empty());
        assert_eq!(registry.resolve(TabKey(70)), None);
    }
}
