pub mod button;
pub mod host_interface;
pub mod snapshot;

pub use button::{ButtonStatus, DeviceKind, SButton};
pub use host_interface::{DeviceFault, HostInterface, HostInterfaceTrait};
pub use snapshot::{GamepadSnapshot, KeyboardSnapshot, MouseSnapshot};
