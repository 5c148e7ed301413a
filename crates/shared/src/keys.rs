//! Keyboard shortcuts understood by both hosts

use crate::InputEvent;

/// Map a key name and its modifiers to an editor event.
///
/// `key` is the DOM `KeyboardEvent.key` / egui `Key::name()` spelling;
/// `command` is Ctrl, or Cmd on macOS.
pub fn shortcut(key: &str, command: bool, shift: bool) -> Option<InputEvent> {
    match key {
        "z" | "Z" if command && shift => Some(InputEvent::Redo),
        "z" | "Z" if command => Some(InputEvent::Undo),
        "y" | "Y" if command => Some(InputEvent::Redo),
        "Escape" => Some(InputEvent::ContextMenu),
        "Enter" => Some(InputEvent::DoubleClick),
        _ => None,
    }
}
