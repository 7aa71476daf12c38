use hashbrown::HashSet;
use parking_lot::Mutex;
use shiminput_types::{DeviceFault, HostInterface, SButton};

use crate::{
    button_map::ActiveButtonMap,
    config::{ConfigError, TrackerConfig},
    frame::{FrameResult, ScreenPoint},
    internal::{suppress, transition, translate},
};

/// The unified input-state tracker.
///
/// Owns the previous frame's button map and the live suppression set, and on
/// each tick polls the host's three devices, derives every button's
/// press/hold/release transition, and publishes the real and suppressed
/// views of the frame.
///
/// `poll_and_update` takes `&mut self`, so it cannot race with itself;
/// `request_suppress` goes through a mutex so UI-event call sites between
/// frames need no exclusive borrow.
pub struct InputStateTracker {
    host: HostInterface,
    config: TrackerConfig,
    suppressed: Mutex<HashSet<SButton>>,
    /// Scratch buffer for the per-frame down-set scan, reused across frames.
    down_scratch: Vec<SButton>,
    frame: FrameResult,
}

impl InputStateTracker {
    pub fn new(host: HostInterface, config: TrackerConfig) -> Result<Self, ConfigError> {
        Self::with_initial_map(host, config, ActiveButtonMap::default())
    }

    /// Start from an arbitrary button map instead of an empty one. Exists so
    /// tests can put the tracker mid-way through a transition sequence.
    pub fn with_initial_map(
        host: HostInterface,
        config: TrackerConfig,
        buttons: ActiveButtonMap,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            host,
            config,
            suppressed: Mutex::new(HashSet::new()),
            down_scratch: Vec::new(),
            frame: FrameResult {
                buttons,
                ..Default::default()
            },
        })
    }

    /// Poll all three devices once and advance to the new frame.
    ///
    /// A transient fault on any poll keeps the previous frame's result
    /// unchanged for this tick; it is logged and never crosses this
    /// boundary.
    pub fn poll_and_update(&mut self) -> &FrameResult {
        let (keyboard, mouse, gamepad) = match self.poll_devices() {
            Ok(snapshots) => snapshots,
            Err(fault) => {
                log::warn!("device poll failed, reusing previous frame: {fault}");
                return &self.frame;
            }
        };

        if gamepad.connected != self.frame.gamepad.connected {
            log::debug!(
                "gamepad {}",
                if gamepad.connected {
                    "connected"
                } else {
                    "disconnected"
                }
            );
        }

        translate::collect_down(
            &mut self.down_scratch,
            &keyboard,
            &mouse,
            &gamepad,
            &self.config,
        );
        let buttons = transition::derive(&self.frame.buttons, &self.down_scratch);
        let cursor = ScreenPoint::from_raw(mouse.cursor, self.host.zoom_factor());

        let mut frame = FrameResult {
            keyboard,
            mouse,
            gamepad,
            suppressed_keyboard: None,
            suppressed_mouse: None,
            suppressed_gamepad: None,
            buttons,
            cursor,
        };
        suppress::apply(&mut self.suppressed.lock(), &mut frame);

        self.frame = frame;
        &self.frame
    }

    fn poll_devices(
        &self,
    ) -> Result<
        (
            shiminput_types::KeyboardSnapshot,
            shiminput_types::MouseSnapshot,
            shiminput_types::GamepadSnapshot,
        ),
        DeviceFault,
    > {
        Ok((
            self.host.poll_keyboard()?,
            self.host.poll_mouse()?,
            self.host.poll_gamepad()?,
        ))
    }

    /// The most recently published frame.
    pub fn frame(&self) -> &FrameResult {
        &self.frame
    }

    pub fn is_down(&self, button: SButton) -> bool {
        self.frame.buttons.is_down(button)
    }

    pub fn is_any_down(&self, buttons: &[SButton]) -> bool {
        buttons.iter().any(|&button| self.is_down(button))
    }

    /// Hide `button` from the host's view until it is physically released.
    /// A request for a button that is not currently down is a no-op: there
    /// is nothing to suppress.
    ///
    /// Takes effect with the next `poll_and_update`.
    pub fn request_suppress(&self, button: SButton) {
        if self.frame.buttons.is_down(button) {
            self.suppressed.lock().insert(button);
        }
    }

    /// The buttons currently forced hidden, for diagnostics.
    pub fn suppressed_buttons(&self) -> Vec<SButton> {
        self.suppressed.lock().iter().copied().collect()
    }
}
