use shiminput_types::{ButtonStatus, SButton};

use crate::button_map::ActiveButtonMap;

/// Derive the new button map from the previous frame's map and the set of
/// buttons physically down this frame. Pure function; the tracker swaps the
/// result in wholesale.
///
/// Down buttons advance through Pressed/Held; previously-Down buttons that
/// vanished become Released for exactly one frame; Released entries from
/// last frame drop out, which is how a button settles back to the implicit
/// None.
pub(crate) fn derive(previous: &ActiveButtonMap, down: &[SButton]) -> ActiveButtonMap {
    let mut next = ActiveButtonMap::with_capacity(down.len() + previous.len());

    for &button in down {
        next.insert(button, previous.status(button).progress(true));
    }

    for (button, status) in previous.iter() {
        if status.is_down() && !next.contains(button) {
            next.insert(button, ButtonStatus::Released);
        }
    }

    next
}
