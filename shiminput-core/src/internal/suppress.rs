use hashbrown::HashSet;
use shiminput_types::{DeviceKind, SButton};

use crate::frame::FrameResult;

/// Reconcile the suppression set against the freshly derived button map,
/// then rewrite the suppressed view of each affected device.
///
/// Pruning comes first: a button that is no longer Down leaves the set, so
/// its real (now inactive) state shows through. The suppressed snapshots are
/// cloned lazily, only for devices that still own a suppressed button.
pub(crate) fn apply(suppressed: &mut HashSet<SButton>, frame: &mut FrameResult) {
    suppressed.retain(|&button| frame.buttons.is_down(button));

    for &button in suppressed.iter() {
        match button.device() {
            DeviceKind::Keyboard => {
                let keyboard = frame
                    .suppressed_keyboard
                    .get_or_insert_with(|| frame.keyboard.clone());
                keyboard.pressed.retain(|&key| key != button);
            }
            DeviceKind::Mouse => {
                frame
                    .suppressed_mouse
                    .get_or_insert_with(|| frame.mouse.clone())
                    .set_button(button, false);
            }
            DeviceKind::Gamepad => {
                frame
                    .suppressed_gamepad
                    .get_or_insert_with(|| frame.gamepad.clone())
                    .clear_input(button);
            }
        }
    }
}
