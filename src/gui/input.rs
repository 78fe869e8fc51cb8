//! Keyboard Commands
//!
//! Maps logical keys to viewer commands. Kept apart from the event loop so
//! the bindings can be checked without opening a window.

use winit::keyboard::{Key, NamedKey};

/// Something the user asked the viewer to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start or stop the animation
    Toggle,
    /// Restart from a random row
    Reset,
    /// Restart from a single live cell
    SingleCell,
    Faster,
    Slower,
    LargerCells,
    SmallerCells,
    NextRule,
    PreviousRule,
    /// Copy the preset link to the clipboard
    CopyLink,
    Quit,
}

/// Look up the command bound to a key, if any
pub fn command_for_key(key: &Key) -> Option<Command> {
    match key {
        Key::Named(named) => match named {
            NamedKey::Space => Some(Command::Toggle),
            NamedKey::ArrowUp => Some(Command::Faster),
            NamedKey::ArrowDown => Some(Command::Slower),
            NamedKey::ArrowRight => Some(Command::NextRule),
            NamedKey::ArrowLeft => Some(Command::PreviousRule),
            NamedKey::Escape => Some(Command::Quit),
            _ => None,
        },
        Key::Character(c) => match c.to_lowercase().as_str() {
            " " => Some(Command::Toggle),
            "r" => Some(Command::Reset),
            "s" => Some(Command::SingleCell),
            "+" | "=" => Some(Command::LargerCells),
            "-" | "_" => Some(Command::SmallerCells),
            "c" => Some(Command::CopyLink),
            "q" => Some(Command::Quit),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(s: &str) -> Key {
        Key::Character(s.into())
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            command_for_key(&Key::Named(NamedKey::Space)),
            Some(Command::Toggle)
        );
        assert_eq!(
            command_for_key(&Key::Named(NamedKey::ArrowLeft)),
            Some(Command::PreviousRule)
        );
        assert_eq!(command_for_key(&Key::Named(NamedKey::Tab)), None);
    }

    #[test]
    fn test_character_keys_ignore_case() {
        assert_eq!(command_for_key(&character("r")), Some(Command::Reset));
        assert_eq!(command_for_key(&character("R")), Some(Command::Reset));
        assert_eq!(command_for_key(&character("S")), Some(Command::SingleCell));
        assert_eq!(command_for_key(&character("+")), Some(Command::LargerCells));
        assert_eq!(command_for_key(&character("-")), Some(Command::SmallerCells));
        assert_eq!(command_for_key(&character("x")), None);
    }
}
