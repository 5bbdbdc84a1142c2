//! Held-key state accumulated from keyboard messages.
use std::collections::HashMap;

use bevy::prelude::*;

use super::actions::{HeldActions, KeyBindings, NavAction};

/// Latest pressed/released status per physical key.
///
/// Every key that has produced an event is recorded, bound or not; only keys
/// present in [`KeyBindings`] are ever consulted when resolving actions.
#[derive(Resource, Debug, Default)]
pub struct KeyState {
    held: HashMap<KeyCode, bool>,
}

impl KeyState {
    pub fn press(&mut self, key: KeyCode) {
        self.held.insert(key, true);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.held.insert(key, false);
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.get(&key).copied().unwrap_or(false)
    }

    pub fn is_action_held(&self, action: NavAction, bindings: &KeyBindings) -> bool {
        bindings.keys_for(action).any(|key| self.is_held(key))
    }

    /// Resolves the current key table into the set of held actions.
    pub fn held_actions(&self, bindings: &KeyBindings) -> HeldActions {
        NavAction::ALL
            .into_iter()
            .filter(|action| self.is_action_held(*action, bindings))
            .collect()
    }
}
