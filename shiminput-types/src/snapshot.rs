use mint::Vector2;

use crate::SButton;

/// Keyboard state at a single frame: the set of keys reported down by the
/// host, as already-translated [`SButton`] values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyboardSnapshot {
    pub pressed: Vec<SButton>,
}

impl KeyboardSnapshot {
    pub fn is_pressed(&self, key: SButton) -> bool {
        self.pressed.contains(&key)
    }
}

/// Mouse state at a single frame. `cursor` is in raw device coordinates;
/// zoom adjustment happens in the tracker, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseSnapshot {
    pub cursor: Vector2<f32>,
    pub scroll_wheel: f32,
    pub left: bool,
    pub right: bool,
    pub middle: bool,
    pub x1: bool,
    pub x2: bool,
}

impl Default for MouseSnapshot {
    fn default() -> Self {
        Self {
            cursor: Vector2 { x: 0.0, y: 0.0 },
            scroll_wheel: 0.0,
            left: false,
            right: false,
            middle: false,
            x1: false,
            x2: false,
        }
    }
}

impl MouseSnapshot {
    /// Read one mouse button's state. Panics on a non-mouse button, which
    /// callers rule out via [`SButton::device`].
    pub fn button(&self, button: SButton) -> bool {
        match button {
            SButton::MouseLeft => self.left,
            SButton::MouseRight => self.right,
            SButton::MouseMiddle => self.middle,
            SButton::MouseX1 => self.x1,
            SButton::MouseX2 => self.x2,
            other => panic!("{other} is not a mouse button"),
        }
    }

    pub fn set_button(&mut self, button: SButton, down: bool) {
        match button {
            SButton::MouseLeft => self.left = down,
            SButton::MouseRight => self.right = down,
            SButton::MouseMiddle => self.middle = down,
            SButton::MouseX1 => self.x1 = down,
            SButton::MouseX2 => self.x2 = down,
            other => panic!("{other} is not a mouse button"),
        }
    }
}

/// Gamepad state at a single frame. When `connected` is false every other
/// field is ignored by the tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct GamepadSnapshot {
    pub connected: bool,

    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
    pub left_shoulder: bool,
    pub right_shoulder: bool,
    pub dpad_up: bool,
    pub dpad_down: bool,
    pub dpad_left: bool,
    pub dpad_right: bool,
    pub back: bool,
    pub start: bool,
    pub big_button: bool,
    pub left_stick: bool,
    pub right_stick: bool,

    pub left_trigger: f32,
    pub right_trigger: f32,
    pub left_thumbstick: Vector2<f32>,
    pub right_thumbstick: Vector2<f32>,
}

impl Default for GamepadSnapshot {
    fn default() -> Self {
        Self {
            connected: false,
            a: false,
            b: false,
            x: false,
            y: false,
            left_shoulder: false,
            right_shoulder: false,
            dpad_up: false,
            dpad_down: false,
            dpad_left: false,
            dpad_right: false,
            back: false,
            start: false,
            big_button: false,
            left_stick: false,
            right_stick: false,
            left_trigger: 0.0,
            right_trigger: 0.0,
            left_thumbstick: Vector2 { x: 0.0, y: 0.0 },
            right_thumbstick: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl GamepadSnapshot {
    /// Force one gamepad input to its "not pressed" representation.
    /// Digital buttons go false, triggers go to rest, and a suppressed stick
    /// direction zeroes the axis it was derived from.
    pub fn clear_input(&mut self, button: SButton) {
        match button {
            SButton::ControllerA => self.a = false,
            SButton::ControllerB => self.b = false,
            SButton::ControllerX => self.x = false,
            SButton::ControllerY => self.y = false,
            SButton::LeftShoulder => self.left_shoulder = false,
            SButton::RightShoulder => self.right_shoulder = false,
            SButton::DPadUp => self.dpad_up = false,
            SButton::DPadDown => self.dpad_down = false,
            SButton::DPadLeft => self.dpad_left = false,
            SButton::DPadRight => self.dpad_right = false,
            SButton::ControllerBack => self.back = false,
            SButton::ControllerStart => self.start = false,
            SButton::BigButton => self.big_button = false,
            SButton::LeftStick => self.left_stick = false,
            SButton::RightStick => self.right_stick = false,
            SButton::LeftTrigger => self.left_trigger = 0.0,
            SButton::RightTrigger => self.right_trigger = 0.0,
            SButton::LeftThumbstickUp | SButton::LeftThumbstickDown => {
                self.left_thumbstick.y = 0.0
            }
            SButton::LeftThumbstickLeft | SButton::LeftThumbstickRight => {
                self.left_thumbstick.x = 0.0
            }
            SButton::RightThumbstickUp | SButton::RightThumbstickDown => {
                self.right_thumbstick.y = 0.0
            }
            SButton::RightThumbstickLeft | SButton::RightThumbstickRight => {
                self.right_thumbstick.x = 0.0
            }
            other => panic!("{other} is not a gamepad input"),
        }
    }
}
