use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::RigError;
use crate::input::RigAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping rig actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `RotateLeft` → `"KeyA"`).
    pub bindings: HashMap<RigAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, RigAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (RigAction::RotateLeft, "KeyA".into()),
            (RigAction::RotateRight, "KeyD".into()),
            (RigAction::TiltUp, "KeyZ".into()),
            (RigAction::TiltDown, "KeyX".into()),
            (RigAction::Recenter, "KeyM".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Bind `action` to `key`, replacing its previous key. Any other action
    /// bound to `key` is unbound.
    pub fn bind(&mut self, action: RigAction, key: impl Into<String>) {
        let key = key.into();
        self.bindings.retain(|bound, bound_key| {
            if *bound != action && *bound_key == key {
                log::warn!("{key} rebound from {bound:?} to {action:?}");
                false
            } else {
                true
            }
        });
        let _ = self.bindings.insert(action, key);
        self.rebuild_reverse_map();
    }

    /// Reject two actions sharing one key.
    pub fn validate(&self) -> Result<(), RigError> {
        let mut seen: HashMap<&str, RigAction> = HashMap::new();
        for (action, key) in &self.bindings {
            if let Some(other) = seen.insert(key.as_str(), *action) {
                return Err(RigError::InvalidOptions(format!(
                    "key {key} is bound to both {other:?} and {action:?}"
                )));
            }
        }
        Ok(())
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<RigAction> {
        self.key_to_action.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_unique_keys() {
        assert!(KeybindingOptions::default().validate().is_ok());
    }

    #[test]
    fn shared_key_is_rejected() {
        let mut opts = KeybindingOptions::default();
        let _ = opts.bindings.insert(RigAction::TiltUp, "KeyA".into());
        assert!(matches!(
            opts.validate(),
            Err(RigError::InvalidOptions(_))
        ));
    }

    #[test]
    fn bind_takes_the_key_from_its_previous_action() {
        let mut opts = KeybindingOptions::default();
        opts.bind(RigAction::Recenter, "KeyA");
        assert_eq!(opts.lookup("KeyA"), Some(RigAction::Recenter));
        assert_eq!(opts.lookup("KeyM"), None);
        assert!(!opts.bindings.contains_key(&RigAction::RotateLeft));
        assert!(opts.validate().is_ok());
    }
}
