use std::{fmt::Debug, ops::Deref, sync::Arc};

use thiserror::Error;

use crate::snapshot::{GamepadSnapshot, KeyboardSnapshot, MouseSnapshot};

/**
 * The connection from the tracker to the host platform's raw input
 * primitives. The tracker is a pure consumer: it never owns device state,
 * it only polls these once per frame.
 */
#[derive(Debug, Clone)]
pub struct HostInterface(pub Arc<dyn HostInterfaceTrait>);

impl Deref for HostInterface {
    type Target = dyn HostInterfaceTrait;

    fn deref(&self) -> &Self::Target {
        self.0.deref()
    }
}

/// A poll failed for this frame only. The tracker swallows these; they must
/// never surface to the frame loop.
#[derive(Debug, Clone, Error)]
pub enum DeviceFault {
    #[error("transient device fault: {0}")]
    Transient(String),
}

pub trait HostInterfaceTrait: Debug + Send + Sync {
    fn poll_keyboard(&self) -> Result<KeyboardSnapshot, DeviceFault>;
    fn poll_mouse(&self) -> Result<MouseSnapshot, DeviceFault>;
    fn poll_gamepad(&self) -> Result<GamepadSnapshot, DeviceFault>;
    /// The host's current zoom/scale factor, consulted once per frame for
    /// pointer adjustment.
    fn zoom_factor(&self) -> f32;
}
