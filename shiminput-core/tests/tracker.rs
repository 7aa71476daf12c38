//! End-to-end frame sequences against a scripted host.

use std::{collections::VecDeque, sync::Arc};

use mint::Vector2;
use parking_lot::Mutex;
use shiminput_core::{
    ActiveButtonMap, InputStateTracker, ScreenPoint, TrackerConfig,
};
use shiminput_types::{
    ButtonStatus, DeviceFault, GamepadSnapshot, HostInterface, HostInterfaceTrait,
    KeyboardSnapshot, MouseSnapshot, SButton,
};

type Scripted<T> = Mutex<VecDeque<Result<T, DeviceFault>>>;

/// Replays pre-queued snapshots; an exhausted queue reports idle devices.
#[derive(Debug)]
struct ScriptedHost {
    keyboard: Scripted<KeyboardSnapshot>,
    mouse: Scripted<MouseSnapshot>,
    gamepad: Scripted<GamepadSnapshot>,
    zoom: f32,
}

impl ScriptedHost {
    fn new(zoom: f32) -> Arc<Self> {
        Arc::new(Self {
            keyboard: Mutex::new(VecDeque::new()),
            mouse: Mutex::new(VecDeque::new()),
            gamepad: Mutex::new(VecDeque::new()),
            zoom,
        })
    }

    fn queue(&self, keyboard: KeyboardSnapshot, mouse: MouseSnapshot, gamepad: GamepadSnapshot) {
        self.keyboard.lock().push_back(Ok(keyboard));
        self.mouse.lock().push_back(Ok(mouse));
        self.gamepad.lock().push_back(Ok(gamepad));
    }

    fn queue_gamepad_fault(&self) {
        self.keyboard.lock().push_back(Ok(Default::default()));
        self.mouse.lock().push_back(Ok(Default::default()));
        self.gamepad
            .lock()
            .push_back(Err(DeviceFault::Transient("window lost focus".into())));
    }
}

impl HostInterfaceTrait for ScriptedHost {
    fn poll_keyboard(&self) -> Result<KeyboardSnapshot, DeviceFault> {
        self.keyboard
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(Default::default()))
    }

    fn poll_mouse(&self) -> Result<MouseSnapshot, DeviceFault> {
        self.mouse
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(Default::default()))
    }

    fn poll_gamepad(&self) -> Result<GamepadSnapshot, DeviceFault> {
        self.gamepad
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(Default::default()))
    }

    fn zoom_factor(&self) -> f32 {
        self.zoom
    }
}

fn tracker_over(host: &Arc<ScriptedHost>) -> InputStateTracker {
    InputStateTracker::new(
        HostInterface(host.clone() as Arc<dyn HostInterfaceTrait>),
        TrackerConfig::default(),
    )
    .unwrap()
}

fn mouse_left(down: bool) -> MouseSnapshot {
    MouseSnapshot {
        left: down,
        ..Default::default()
    }
}

#[test]
fn mouse_left_goes_pressed_held_released() {
    let host = ScriptedHost::new(1.0);
    host.queue(Default::default(), mouse_left(true), Default::default());
    host.queue(Default::default(), mouse_left(true), Default::default());
    host.queue(Default::default(), mouse_left(false), Default::default());

    let mut tracker = tracker_over(&host);
    for expected in [
        ButtonStatus::Pressed,
        ButtonStatus::Held,
        ButtonStatus::Released,
    ] {
        let frame = tracker.poll_and_update();
        assert_eq!(frame.buttons().status(SButton::MouseLeft), expected);
    }

    // One more idle frame and the Released pulse is gone.
    let frame = tracker.poll_and_update();
    assert_eq!(
        frame.buttons().status(SButton::MouseLeft),
        ButtonStatus::None
    );
    assert!(frame.buttons().is_empty());
}

#[test]
fn suppressing_a_held_mouse_button_hides_it_until_release() {
    let host = ScriptedHost::new(1.0);
    for _ in 0..3 {
        host.queue(Default::default(), mouse_left(true), Default::default());
    }
    host.queue(Default::default(), mouse_left(false), Default::default());

    let mut tracker = tracker_over(&host);
    tracker.poll_and_update(); // Pressed
    tracker.poll_and_update(); // Held

    assert!(tracker.is_down(SButton::MouseLeft));
    tracker.request_suppress(SButton::MouseLeft);
    assert_eq!(tracker.suppressed_buttons(), vec![SButton::MouseLeft]);

    // Still held: the real snapshot reports the press, the host view hides it.
    let frame = tracker.poll_and_update();
    assert!(frame.mouse().left);
    assert!(!frame.suppressed_mouse().left);
    assert_eq!(
        frame.buttons().status(SButton::MouseLeft),
        ButtonStatus::Held
    );

    // Released: suppression is pruned and both views agree on "not pressed".
    let frame = tracker.poll_and_update();
    assert_eq!(
        frame.buttons().status(SButton::MouseLeft),
        ButtonStatus::Released
    );
    assert!(!frame.mouse().left);
    assert!(!frame.suppressed_mouse().left);
    assert_eq!(frame.suppressed_mouse(), frame.mouse());
    assert!(tracker.suppressed_buttons().is_empty());
}

#[test]
fn suppressing_a_button_that_is_not_down_is_a_no_op() {
    let host = ScriptedHost::new(1.0);
    let tracker = tracker_over(&host);
    tracker.request_suppress(SButton::MouseLeft);
    assert!(tracker.suppressed_buttons().is_empty());
}

#[test]
fn suppression_survives_consecutive_held_frames() {
    let host = ScriptedHost::new(1.0);
    let key = KeyboardSnapshot {
        pressed: vec![SButton::E],
    };
    for _ in 0..4 {
        host.queue(key.clone(), Default::default(), Default::default());
    }

    let mut tracker = tracker_over(&host);
    tracker.poll_and_update();
    tracker.request_suppress(SButton::E);

    for _ in 0..3 {
        let frame = tracker.poll_and_update();
        assert!(frame.keyboard().is_pressed(SButton::E));
        assert!(!frame.suppressed_keyboard().is_pressed(SButton::E));
        assert_eq!(tracker.suppressed_buttons(), vec![SButton::E]);
    }
}

#[test]
fn transient_gamepad_fault_reuses_the_previous_frame() {
    let host = ScriptedHost::new(1.0);
    host.queue(Default::default(), mouse_left(true), Default::default());
    host.queue_gamepad_fault();
    host.queue(Default::default(), mouse_left(true), Default::default());

    let mut tracker = tracker_over(&host);
    let before = tracker.poll_and_update().clone();
    assert_eq!(
        before.buttons().status(SButton::MouseLeft),
        ButtonStatus::Pressed
    );

    // The faulted frame is a verbatim replay, Pressed does not advance.
    let retained = tracker.poll_and_update();
    assert_eq!(*retained, before);

    // The next clean poll picks up where the last good frame left off.
    let after = tracker.poll_and_update();
    assert_eq!(
        after.buttons().status(SButton::MouseLeft),
        ButtonStatus::Held
    );
}

#[test]
fn gamepad_disconnect_releases_all_controller_buttons() {
    let host = ScriptedHost::new(1.0);
    host.queue(
        Default::default(),
        Default::default(),
        GamepadSnapshot {
            connected: true,
            a: true,
            left_trigger: 0.9,
            left_thumbstick: Vector2 { x: 0.0, y: 0.6 },
            ..Default::default()
        },
    );
    host.queue(Default::default(), Default::default(), Default::default());

    let mut tracker = tracker_over(&host);
    let frame = tracker.poll_and_update();
    for button in [
        SButton::ControllerA,
        SButton::LeftTrigger,
        SButton::LeftThumbstickUp,
    ] {
        assert_eq!(frame.buttons().status(button), ButtonStatus::Pressed);
    }

    let frame = tracker.poll_and_update();
    for button in [
        SButton::ControllerA,
        SButton::LeftTrigger,
        SButton::LeftThumbstickUp,
    ] {
        assert_eq!(frame.buttons().status(button), ButtonStatus::Released);
    }

    let frame = tracker.poll_and_update();
    assert!(frame.buttons().is_empty());
}

#[test]
fn cursor_is_scaled_by_the_zoom_factor_and_floored() {
    let host = ScriptedHost::new(2.0);
    host.queue(
        Default::default(),
        MouseSnapshot {
            cursor: Vector2 { x: 101.0, y: 57.0 },
            ..Default::default()
        },
        Default::default(),
    );

    let mut tracker = tracker_over(&host);
    let frame = tracker.poll_and_update();
    assert_eq!(frame.cursor(), ScreenPoint { x: 50, y: 28 });
}

#[test]
fn is_any_down_matches_any_tracked_button() {
    let host = ScriptedHost::new(1.0);
    host.queue(
        KeyboardSnapshot {
            pressed: vec![SButton::W],
        },
        Default::default(),
        Default::default(),
    );

    let mut tracker = tracker_over(&host);
    tracker.poll_and_update();
    assert!(tracker.is_any_down(&[SButton::Space, SButton::W]));
    assert!(!tracker.is_any_down(&[SButton::Space, SButton::Enter]));
    assert!(!tracker.is_any_down(&[]));
}

#[test]
fn tracker_can_start_from_an_arbitrary_map() {
    let host = ScriptedHost::new(1.0);
    host.queue(Default::default(), Default::default(), Default::default());

    let initial: ActiveButtonMap = [(SButton::Q, ButtonStatus::Held)].into_iter().collect();
    let mut tracker = InputStateTracker::with_initial_map(
        HostInterface(host.clone() as Arc<dyn HostInterfaceTrait>),
        TrackerConfig::default(),
        initial,
    )
    .unwrap();

    assert!(tracker.is_down(SButton::Q));
    assert!(tracker.frame().buttons().is_down(SButton::Q));
    let frame = tracker.poll_and_update();
    assert_eq!(frame.buttons().status(SButton::Q), ButtonStatus::Released);
}

#[test]
fn rejected_config_never_builds_a_tracker() {
    let host = ScriptedHost::new(1.0);
    let result = InputStateTracker::new(
        HostInterface(host as Arc<dyn HostInterfaceTrait>),
        TrackerConfig {
            right_stick_dead_zone: 2.0,
            ..Default::default()
        },
    );
    assert!(result.is_err());
}
