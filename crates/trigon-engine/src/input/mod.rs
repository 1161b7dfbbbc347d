//! Keyboard input translation.
//!
//! The demos only react to a handful of keys, so this is a deliberately
//! small subset of winit's key space. Anything unmapped arrives as
//! `Key::Unknown` and is ignored by the demos.

use winit::keyboard::{KeyCode, PhysicalKey};

/// Engine-level key identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Key {
    Escape,
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    C,
    R,
    Unknown,
}

/// Maps a winit physical key to the engine `Key`.
pub fn translate_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Space => Key::Space,
            KeyCode::ArrowLeft => Key::ArrowLeft,
            KeyCode::ArrowRight => Key::ArrowRight,
            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,
            KeyCode::KeyC => Key::C,
            KeyCode::KeyR => Key::R,
            _ => Key::Unknown,
        },
        PhysicalKey::Unidentified(_) => Key::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_letters_map() {
        assert_eq!(
            translate_key(PhysicalKey::Code(KeyCode::ArrowLeft)),
            Key::ArrowLeft
        );
        assert_eq!(translate_key(PhysicalKey::Code(KeyCode::KeyC)), Key::C);
    }

    #[test]
    fn unmapped_keys_are_unknown() {
        assert_eq!(translate_key(PhysicalKey::Code(KeyCode::KeyQ)), Key::Unknown);
    }
}
