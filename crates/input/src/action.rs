use winit::keyboard::KeyCode;

/// A discrete viewer action produced by a key press or a panel button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Rotate toward the preset orientation for the given face index.
    SnapToFace(usize),
    /// Rotate toward the next preset face, wrapping after the last one.
    CycleFace,
    /// Rotate by a random angle about a random mesh face normal.
    SpinRandom,
    /// Snap the orientation back to identity.
    ResetOrientation,
    /// Show or hide the control panel.
    TogglePanel,
}

/// The fixed key table.
///
/// Digits pick a preset face directly, `I` cycles through all presets,
/// `R` spins randomly, `Home` resets, `F1` toggles the panel.
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Digit1 => Action::SnapToFace(0),
        KeyCode::Digit2 => Action::SnapToFace(1),
        KeyCode::Digit3 => Action::SnapToFace(2),
        KeyCode::Digit4 => Action::SnapToFace(3),
        KeyCode::Digit5 => Action::SnapToFace(4),
        KeyCode::Digit6 => Action::SnapToFace(5),
        KeyCode::Digit7 => Action::SnapToFace(6),
        KeyCode::Digit8 => Action::SnapToFace(7),
        KeyCode::Digit9 => Action::SnapToFace(8),
        KeyCode::Digit0 => Action::SnapToFace(9),
        KeyCode::KeyI => Action::CycleFace,
        KeyCode::KeyR => Action::SpinRandom,
        KeyCode::Home => Action::ResetOrientation,
        KeyCode::F1 => Action::TogglePanel,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_faces_in_order() {
        assert_eq!(action_for_key(KeyCode::Digit1), Some(Action::SnapToFace(0)));
        assert_eq!(action_for_key(KeyCode::Digit9), Some(Action::SnapToFace(8)));
        assert_eq!(action_for_key(KeyCode::Digit0), Some(Action::SnapToFace(9)));
    }

    #[test]
    fn cycle_spin_reset_bindings() {
        assert_eq!(action_for_key(KeyCode::KeyI), Some(Action::CycleFace));
        assert_eq!(action_for_key(KeyCode::KeyR), Some(Action::SpinRandom));
        assert_eq!(action_for_key(KeyCode::Home), Some(Action::ResetOrientation));
        assert_eq!(action_for_key(KeyCode::F1), Some(Action::TogglePanel));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(action_for_key(KeyCode::KeyW), None);
        assert_eq!(action_for_key(KeyCode::Space), None);
        assert_eq!(action_for_key(KeyCode::Escape), None);
    }
}
