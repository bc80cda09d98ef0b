//! Keyboard input handling for the game.
//!
//! This module defines the [`GameKey`] enum for abstracting game actions
//! from physical keys, and utilities for mapping crossterm key events to
//! game actions. The abstraction keeps the session loop decoupled from the
//! specific keys bound to each action.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::movement::Direction;

/// In-game actions that can be triggered by a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    /// Move the player up (W or Up Arrow).
    MoveUp,
    /// Move the player down (S or Down Arrow).
    MoveDown,
    /// Move the player left (A or Left Arrow).
    MoveLeft,
    /// Move the player right (D or Right Arrow).
    MoveRight,
    /// Quit the game (Q, Escape, or Ctrl+C).
    Quit,
}

impl GameKey {
    /// The movement direction for this action, if it is a movement key.
    pub fn direction(self) -> Option<Direction> {
        match self {
            GameKey::MoveUp => Some(Direction::Up),
            GameKey::MoveDown => Some(Direction::Down),
            GameKey::MoveLeft => Some(Direction::Left),
            GameKey::MoveRight => Some(Direction::Right),
            GameKey::Quit => None,
        }
    }
}

macro_rules! match_char_key {
    ($c:expr, {
        $($key:literal => $variant:expr),* $(,)?
    }) => {{
        match $c.to_ascii_lowercase() {
            $($key => Some($variant),)*
            _ => None,
        }
    }};
}

macro_rules! match_named_key {
    ($k:expr, {
        $($key:ident => $variant:expr),* $(,)?
    }) => {{
        match $k {
            $(KeyCode::$key => Some($variant),)*
            _ => None,
        }
    }};
}

/// Converts a crossterm [`KeyEvent`] to a [`GameKey`] if it matches a mapped
/// action.
///
/// Supports both named keys (arrows, escape) and character keys (WASD, Q).
/// Ctrl+C is mapped to [`GameKey::Quit`] because raw mode delivers it as an
/// ordinary key event rather than a signal.
pub fn key_event_to_game_key(event: &KeyEvent) -> Option<GameKey> {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') => Some(GameKey::Quit),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Char(c) => match_char_key!(c, {
            'w' => GameKey::MoveUp,
            's' => GameKey::MoveDown,
            'a' => GameKey::MoveLeft,
            'd' => GameKey::MoveRight,
            'q' => GameKey::Quit,
        }),

        code => match_named_key!(code, {
            Up => GameKey::MoveUp,
            Down => GameKey::MoveDown,
            Left => GameKey::MoveLeft,
            Right => GameKey::MoveRight,
            Esc => GameKey::Quit,
        }),
    }
}
