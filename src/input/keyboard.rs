//! Keyboard shortcuts for the profile form.

use egui::{Event, Key, Modifiers};
use std::collections::HashMap;

/// A keyboard shortcut definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyboardShortcut {
    /// The primary key
    pub key: Key,
    /// Required modifiers
    pub modifiers: Modifiers,
}

impl KeyboardShortcut {
    /// Create a new shortcut with just a key.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a shortcut with Ctrl modifier.
    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::CTRL,
        }
    }

    /// Get a display string for the shortcut.
    pub fn display(&self) -> String {
        let mut parts = Vec::new();

        if self.modifiers.ctrl {
            parts.push("Ctrl");
        }
        if self.modifiers.alt {
            parts.push("Alt");
        }
        if self.modifiers.shift {
            parts.push("Shift");
        }

        parts.push(key_name(self.key));

        parts.join("+")
    }
}

/// Actions that can be triggered by keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    GenerateFields,
    GenerateProfile,
    ToggleTheme,
    Dismiss,
}

impl KeyAction {
    /// All actions, in registration order.
    pub const ALL: [KeyAction; 4] = [
        KeyAction::GenerateFields,
        KeyAction::GenerateProfile,
        KeyAction::ToggleTheme,
        KeyAction::Dismiss,
    ];

    /// Get the default shortcut for this action.
    pub fn default_shortcut(&self) -> KeyboardShortcut {
        match self {
            KeyAction::GenerateFields => KeyboardShortcut::ctrl(Key::G),
            KeyAction::GenerateProfile => KeyboardShortcut::ctrl(Key::Enter),
            KeyAction::ToggleTheme => KeyboardShortcut::ctrl(Key::T),
            KeyAction::Dismiss => KeyboardShortcut::new(Key::Escape),
        }
    }

    /// Get the description for this action.
    pub fn description(&self) -> &'static str {
        match self {
            KeyAction::GenerateFields => "Generate input fields",
            KeyAction::GenerateProfile => "Generate profile",
            KeyAction::ToggleTheme => "Toggle dark/light theme",
            KeyAction::Dismiss => "Close error dialog",
        }
    }
}

/// Keyboard input handler.
pub struct KeyboardHandler {
    shortcuts: HashMap<KeyboardShortcut, KeyAction>,
}

impl Default for KeyboardHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardHandler {
    /// Create a new keyboard handler with default shortcuts.
    pub fn new() -> Self {
        let shortcuts = KeyAction::ALL
            .iter()
            .map(|action| (action.default_shortcut(), *action))
            .collect();
        Self { shortcuts }
    }

    /// Get the action for a key press.
    ///
    /// Modifiers match the way egui matches shortcuts, so Ctrl also accepts
    /// the platform command flag that accompanies it.
    pub fn get_action(&self, key: Key, modifiers: Modifiers) -> Option<KeyAction> {
        self.shortcuts
            .iter()
            .find(|(shortcut, _)| {
                shortcut.key == key && modifiers.matches_logically(shortcut.modifiers)
            })
            .map(|(_, &action)| action)
    }

    /// Consume this frame's matching key presses and return their actions.
    pub fn poll(&self, ctx: &egui::Context) -> Vec<KeyAction> {
        ctx.input_mut(|input| {
            let mut actions = Vec::new();
            input.events.retain(|event| {
                let Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                else {
                    return true;
                };
                match self.get_action(*key, *modifiers) {
                    Some(action) => {
                        actions.push(action);
                        false
                    }
                    None => true,
                }
            });
            actions
        })
    }
}

/// Get a display name for a key.
fn key_name(key: Key) -> &'static str {
    match key {
        Key::Enter => "Enter",
        Key::Escape => "Esc",
        Key::G => "G",
        Key::T => "T",
        _ => "?",
    }
}
