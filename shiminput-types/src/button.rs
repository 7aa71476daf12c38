use strum_macros::{Display, EnumIter};

/// Every logical input the tracker recognizes, across all three devices,
/// flattened into one closed set. Device-specific raw state is translated
/// into these values once per frame so the rest of the system only ever
/// reasons about `SButton`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SButton {
    // Keyboard: letters
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
    // Keyboard: digit row
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
    // Keyboard: function keys
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
    // Keyboard: navigation and editing
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    // Keyboard: whitespace and control
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    LeftShift,
    RightShift,
    LeftControl,
    RightControl,
    LeftAlt,
    RightAlt,

    // Mouse
    MouseLeft,
    MouseRight,
    MouseMiddle,
    MouseX1,
    MouseX2,

    // Gamepad: face diamond
    ControllerA,
    ControllerB,
    ControllerX,
    ControllerY,
    // Gamepad: shoulders and triggers (triggers become buttons once past
    // the analog threshold)
    LeftShoulder,
    RightShoulder,
    LeftTrigger,
    RightTrigger,
    // Gamepad: d-pad
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
    // Gamepad: center cluster
    ControllerBack,
    ControllerStart,
    BigButton,
    // Gamepad: stick clicks
    LeftStick,
    RightStick,
    // Gamepad: discrete stick directions derived from the analog axes
    LeftThumbstickUp,
    LeftThumbstickDown,
    LeftThumbstickLeft,
    LeftThumbstickRight,
    RightThumbstickUp,
    RightThumbstickDown,
    RightThumbstickLeft,
    RightThumbstickRight,
}

/// Which physical device a button's raw state lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Keyboard,
    Mouse,
    Gamepad,
}

impl SButton {
    /// The device whose snapshot reports this button. Suppression uses this
    /// to decide which snapshot to rewrite.
    pub fn device(self) -> DeviceKind {
        use SButton::*;
        match self {
            MouseLeft | MouseRight | MouseMiddle | MouseX1 | MouseX2 => DeviceKind::Mouse,
            ControllerA | ControllerB | ControllerX | ControllerY | LeftShoulder
            | RightShoulder | LeftTrigger | RightTrigger | DPadUp | DPadDown | DPadLeft
            | DPadRight | ControllerBack | ControllerStart | BigButton | LeftStick
            | RightStick | LeftThumbstickUp | LeftThumbstickDown | LeftThumbstickLeft
            | LeftThumbstickRight | RightThumbstickUp | RightThumbstickDown
            | RightThumbstickLeft | RightThumbstickRight => DeviceKind::Gamepad,
            _ => DeviceKind::Keyboard,
        }
    }
}

/// The per-frame status of a button.
///
/// `None` is never stored in the active map; a button absent from the map is
/// implicitly `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonStatus {
    #[default]
    None,
    /// Newly active this frame.
    Pressed,
    /// Active this frame and the previous one.
    Held,
    /// Active last frame, inactive this frame. Lasts exactly one frame.
    Released,
}

impl ButtonStatus {
    pub fn is_down(self) -> bool {
        matches!(self, ButtonStatus::Pressed | ButtonStatus::Held)
    }

    /// Advance this status by one frame given whether the button is
    /// physically down now. No step ever skips `Pressed` on the way down or
    /// `Released` on the way up.
    pub fn progress(self, down: bool) -> ButtonStatus {
        match (self, down) {
            (ButtonStatus::Pressed | ButtonStatus::Held, true) => ButtonStatus::Held,
            (_, true) => ButtonStatus::Pressed,
            (ButtonStatus::Pressed | ButtonStatus::Held, false) => ButtonStatus::Released,
            (_, false) => ButtonStatus::None,
        }
    }
}
