//! Keyboard input handling

use game_core::Command;

/// Translate a key-down into a simulation command
pub fn handle_key_down(key: &str) -> Option<Command> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Command::Move(-1)),
        "ArrowDown" | "s" | "S" => Some(Command::Move(1)),
        "Escape" => Some(Command::TogglePause),
        " " | "Enter" => Some(Command::Confirm),
        _ => None,
    }
}

/// Translate a key-up; only movement keys release
pub fn handle_key_up(key: &str) -> Option<Command> {
    match key {
        "ArrowUp" | "w" | "W" | "ArrowDown" | "s" | "S" => Some(Command::Move(0)),
        _ => None,
    }
}
