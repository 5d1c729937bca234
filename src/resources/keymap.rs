//! Static key-code lookup table.
//!
//! Maps raw host key codes (browser-style `keyCode` values) to [`KeyId`]
//! identifiers. The table is fixed at compile time and indexed through a map
//! built once on first use; codes outside the table are simply unknown.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Identifier for a tracked keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyId {
    Backspace,
    Tab,
    Enter,
    Shift,
    Control,
    Alt,
    Pause,
    CapsLock,
    Escape,
    Space,
    PageUp,
    PageDown,
    End,
    Home,
    Left,
    Up,
    Right,
    Down,
    Insert,
    Delete,
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    NumLock,
    ScrollLock,
    Semicolon,
    Equal,
    Comma,
    Minus,
    Period,
    Slash,
    Grave,
    LeftBracket,
    Backslash,
    RightBracket,
    Apostrophe,
}

/// Raw code to identifier pairs, browser `keyCode` convention.
static KEY_TABLE: &[(u16, KeyId)] = &[
    (8, KeyId::Backspace),
    (9, KeyId::Tab),
    (13, KeyId::Enter),
    (16, KeyId::Shift),
    (17, KeyId::Control),
    (18, KeyId::Alt),
    (19, KeyId::Pause),
    (20, KeyId::CapsLock),
    (27, KeyId::Escape),
    (32, KeyId::Space),
    (33, KeyId::PageUp),
    (34, KeyId::PageDown),
    (35, KeyId::End),
    (36, KeyId::Home),
    (37, KeyId::Left),
    (38, KeyId::Up),
    (39, KeyId::Right),
    (40, KeyId::Down),
    (45, KeyId::Insert),
    (46, KeyId::Delete),
    (48, KeyId::Num0),
    (49, KeyId::Num1),
    (50, KeyId::Num2),
    (51, KeyId::Num3),
    (52, KeyId::Num4),
    (53, KeyId::Num5),
    (54, KeyId::Num6),
    (55, KeyId::Num7),
    (56, KeyId::Num8),
    (57, KeyId::Num9),
    (65, KeyId::A),
    (66, KeyId::B),
    (67, KeyId::C),
    (68, KeyId::D),
    (69, KeyId::E),
    (70, KeyId::F),
    (71, KeyId::G),
    (72, KeyId::H),
    (73, KeyId::I),
    (74, KeyId::J),
    (75, KeyId::K),
    (76, KeyId::L),
    (77, KeyId::M),
    (78, KeyId::N),
    (79, KeyId::O),
    (80, KeyId::P),
    (81, KeyId::Q),
    (82, KeyId::R),
    (83, KeyId::S),
    (84, KeyId::T),
    (85, KeyId::U),
    (86, KeyId::V),
    (87, KeyId::W),
    (88, KeyId::X),
    (89, KeyId::Y),
    (90, KeyId::Z),
    (112, KeyId::F1),
    (113, KeyId::F2),
    (114, KeyId::F3),
    (115, KeyId::F4),
    (116, KeyId::F5),
    (117, KeyId::F6),
    (118, KeyId::F7),
    (119, KeyId::F8),
    (120, KeyId::F9),
    (121, KeyId::F10),
    (122, KeyId::F11),
    (123, KeyId::F12),
    (144, KeyId::NumLock),
    (145, KeyId::ScrollLock),
    (186, KeyId::Semicolon),
    (187, KeyId::Equal),
    (188, KeyId::Comma),
    (189, KeyId::Minus),
    (190, KeyId::Period),
    (191, KeyId::Slash),
    (192, KeyId::Grave),
    (219, KeyId::LeftBracket),
    (220, KeyId::Backslash),
    (221, KeyId::RightBracket),
    (222, KeyId::Apostrophe),
];

fn table() -> &'static FxHashMap<u16, KeyId> {
    static MAP: OnceLock<FxHashMap<u16, KeyId>> = OnceLock::new();
    MAP.get_or_init(|| KEY_TABLE.iter().copied().collect())
}

/// Resolve a raw key code to its identifier, if the code is tracked.
pub fn lookup(code: u16) -> Option<KeyId> {
    table().get(&code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_codes() {
        assert_eq!(lookup(32), Some(KeyId::Space));
        assert_eq!(lookup(65), Some(KeyId::A));
        assert_eq!(lookup(90), Some(KeyId::Z));
        assert_eq!(lookup(37), Some(KeyId::Left));
        assert_eq!(lookup(123), Some(KeyId::F12));
        assert_eq!(lookup(222), Some(KeyId::Apostrophe));
    }

    #[test]
    fn test_lookup_unknown_code() {
        assert_eq!(lookup(1), None);
        assert_eq!(lookup(999), None);
    }

    #[test]
    fn test_table_has_no_duplicate_codes() {
        assert_eq!(table().len(), KEY_TABLE.len());
    }
}
