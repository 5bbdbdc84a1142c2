//! Logical navigation actions and the table mapping physical keys onto them.
use std::fmt;

use bevy::prelude::*;

/// Logical movement actions understood by the navigation controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    TurnLeft,
    TurnRight,
}

impl NavAction {
    pub const ALL: [NavAction; 6] = [
        NavAction::Forward,
        NavAction::Back,
        NavAction::StrafeLeft,
        NavAction::StrafeRight,
        NavAction::TurnLeft,
        NavAction::TurnRight,
    ];

    /// Key bound to this action when the configuration does not name one.
    pub fn default_key(self) -> KeyCode {
        match self {
            Self::Forward => KeyCode::KeyW,
            Self::Back => KeyCode::KeyS,
            Self::StrafeLeft => KeyCode::KeyA,
            Self::StrafeRight => KeyCode::KeyD,
            Self::TurnLeft => KeyCode::ArrowLeft,
            Self::TurnRight => KeyCode::ArrowRight,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Self::Forward => 1 << 0,
            Self::Back => 1 << 1,
            Self::StrafeLeft => 1 << 2,
            Self::StrafeRight => 1 << 3,
            Self::TurnLeft => 1 << 4,
            Self::TurnRight => 1 << 5,
        }
    }
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Forward => "forward",
            Self::Back => "back",
            Self::StrafeLeft => "strafe left",
            Self::StrafeRight => "strafe right",
            Self::TurnLeft => "turn left",
            Self::TurnRight => "turn right",
        };
        write!(f, "{}", label)
    }
}

/// Set of actions held during a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldActions(u8);

impl HeldActions {
    pub const NONE: HeldActions = HeldActions(0);

    pub fn insert(&mut self, action: NavAction) {
        self.0 |= action.bit();
    }

    pub fn contains(self, action: NavAction) -> bool {
        self.0 & action.bit() != 0
    }
}

impl FromIterator<NavAction> for HeldActions {
    fn from_iter<I: IntoIterator<Item = NavAction>>(iter: I) -> Self {
        let mut held = HeldActions::NONE;
        for action in iter {
            held.insert(action);
        }
        held
    }
}

/// Mapping table from physical keys to navigation actions.
///
/// Several keys may drive the same action; an action is held while any of
/// its keys is held.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct KeyBindings {
    table: Vec<(KeyCode, NavAction)>,
}

impl KeyBindings {
    /// Creates an empty table. Actions without keys can never be triggered.
    pub fn empty() -> Self {
        Self { table: Vec::new() }
    }

    pub fn bind(&mut self, key: KeyCode, action: NavAction) {
        if !self.table.contains(&(key, action)) {
            self.table.push((key, action));
        }
    }

    pub fn keys_for(&self, action: NavAction) -> impl Iterator<Item = KeyCode> + '_ {
        self.table
            .iter()
            .filter(move |(_, bound)| *bound == action)
            .map(|(key, _)| *key)
    }

    pub fn is_bound(&self, action: NavAction) -> bool {
        self.keys_for(action).next().is_some()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        for action in NavAction::ALL {
            bindings.bind(action.default_key(), action);
        }
        bindings
    }
}
