use mint::Vector2;
use shiminput_types::{GamepadSnapshot, KeyboardSnapshot, MouseSnapshot};

use crate::button_map::ActiveButtonMap;

/// The zoom-adjusted pointer position in integer screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    /// Raw device coordinates divided by the host zoom factor,
    /// floor-truncated.
    pub fn from_raw(raw: Vector2<f32>, zoom: f32) -> Self {
        Self {
            x: (raw.x / zoom).floor() as i32,
            y: (raw.y / zoom).floor() as i32,
        }
    }
}

/// Everything one call to `poll_and_update` publishes: the real device
/// snapshots, the suppressed view of each device, the button map, and the
/// adjusted cursor.
///
/// A suppressed snapshot is stored only when suppression actually rewrote
/// the device; the accessors fall back to the real snapshot otherwise, so a
/// frame with nothing suppressed makes no copies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameResult {
    pub(crate) keyboard: KeyboardSnapshot,
    pub(crate) mouse: MouseSnapshot,
    pub(crate) gamepad: GamepadSnapshot,
    pub(crate) suppressed_keyboard: Option<KeyboardSnapshot>,
    pub(crate) suppressed_mouse: Option<MouseSnapshot>,
    pub(crate) suppressed_gamepad: Option<GamepadSnapshot>,
    pub(crate) buttons: ActiveButtonMap,
    pub(crate) cursor: ScreenPoint,
}

impl FrameResult {
    pub fn keyboard(&self) -> &KeyboardSnapshot {
        &self.keyboard
    }

    pub fn mouse(&self) -> &MouseSnapshot {
        &self.mouse
    }

    pub fn gamepad(&self) -> &GamepadSnapshot {
        &self.gamepad
    }

    /// The keyboard as the host application should perceive it.
    pub fn suppressed_keyboard(&self) -> &KeyboardSnapshot {
        self.suppressed_keyboard.as_ref().unwrap_or(&self.keyboard)
    }

    pub fn suppressed_mouse(&self) -> &MouseSnapshot {
        self.suppressed_mouse.as_ref().unwrap_or(&self.mouse)
    }

    pub fn suppressed_gamepad(&self) -> &GamepadSnapshot {
        self.suppressed_gamepad.as_ref().unwrap_or(&self.gamepad)
    }

    pub fn buttons(&self) -> &ActiveButtonMap {
        &self.buttons
    }

    pub fn cursor(&self) -> ScreenPoint {
        self.cursor
    }
}
