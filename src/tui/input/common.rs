use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map an unshifted symbol to its shifted counterpart (US layout)
fn shift_symbol(c: char) -> Option<char> {
    match c {
        '/' => Some('?'),
        ';' => Some(':'),
        '1' => Some('!'),
        '-' => Some('_'),
        '=' => Some('+'),
        _ => None,
    }
}

/// Normalize key events from terminals using the kitty keyboard protocol.
///
/// Kitty protocol sends `Char(lowercase) + SHIFT` instead of `Char(UPPERCASE) + SHIFT`,
/// and `Char(base_symbol) + SHIFT` instead of `Char(shifted_symbol)`.
/// For traditional terminals this is a no-op.
pub(super) fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
    {
        if c.is_ascii_lowercase() {
            key.code = KeyCode::Char(c.to_ascii_uppercase());
        } else if let Some(shifted) = shift_symbol(c) {
            key.code = KeyCode::Char(shifted);
            key.modifiers.remove(KeyModifiers::SHIFT);
        }
    }
    key
}
