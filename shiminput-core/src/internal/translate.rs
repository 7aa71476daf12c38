use shiminput_types::{GamepadSnapshot, KeyboardSnapshot, MouseSnapshot, SButton};

use crate::config::TrackerConfig;

/// Merge the three device snapshots into the frame's down-set, writing into
/// `out` so the per-frame scan allocates nothing once the scratch buffer has
/// grown to its working size.
pub(crate) fn collect_down(
    out: &mut Vec<SButton>,
    keyboard: &KeyboardSnapshot,
    mouse: &MouseSnapshot,
    gamepad: &GamepadSnapshot,
    config: &TrackerConfig,
) {
    out.clear();
    out.extend(keyboard.pressed.iter().copied());

    for (down, button) in [
        (mouse.left, SButton::MouseLeft),
        (mouse.right, SButton::MouseRight),
        (mouse.middle, SButton::MouseMiddle),
        (mouse.x1, SButton::MouseX1),
        (mouse.x2, SButton::MouseX2),
    ] {
        if down {
            out.push(button);
        }
    }

    if gamepad.connected {
        collect_gamepad(out, gamepad, config);
    }
}

fn collect_gamepad(out: &mut Vec<SButton>, gamepad: &GamepadSnapshot, config: &TrackerConfig) {
    for (down, button) in [
        (gamepad.a, SButton::ControllerA),
        (gamepad.b, SButton::ControllerB),
        (gamepad.x, SButton::ControllerX),
        (gamepad.y, SButton::ControllerY),
        (gamepad.left_shoulder, SButton::LeftShoulder),
        (gamepad.right_shoulder, SButton::RightShoulder),
        (gamepad.dpad_up, SButton::DPadUp),
        (gamepad.dpad_down, SButton::DPadDown),
        (gamepad.dpad_left, SButton::DPadLeft),
        (gamepad.dpad_right, SButton::DPadRight),
        (gamepad.back, SButton::ControllerBack),
        (gamepad.start, SButton::ControllerStart),
        (gamepad.big_button, SButton::BigButton),
        (gamepad.left_stick, SButton::LeftStick),
        (gamepad.right_stick, SButton::RightStick),
    ] {
        if down {
            out.push(button);
        }
    }

    if gamepad.left_trigger > config.trigger_threshold {
        out.push(SButton::LeftTrigger);
    }
    if gamepad.right_trigger > config.trigger_threshold {
        out.push(SButton::RightTrigger);
    }

    // Left stick: per-axis dead zone, so diagonals report two directions.
    let left = gamepad.left_thumbstick;
    let dead_zone = config.left_stick_dead_zone;
    if left.y > dead_zone {
        out.push(SButton::LeftThumbstickUp);
    }
    if left.y < -dead_zone {
        out.push(SButton::LeftThumbstickDown);
    }
    if left.x < -dead_zone {
        out.push(SButton::LeftThumbstickLeft);
    }
    if left.x > dead_zone {
        out.push(SButton::LeftThumbstickRight);
    }

    // Right stick: a single magnitude gate over the 2-D vector, then the
    // sign of each axis picks the reported directions.
    let right = gamepad.right_thumbstick;
    if (right.x * right.x + right.y * right.y).sqrt() > config.right_stick_dead_zone {
        if right.y > 0.0 {
            out.push(SButton::RightThumbstickUp);
        }
        if right.y < 0.0 {
            out.push(SButton::RightThumbstickDown);
        }
        if right.x < 0.0 {
            out.push(SButton::RightThumbstickLeft);
        }
        if right.x > 0.0 {
            out.push(SButton::RightThumbstickRight);
        }
    }
}
