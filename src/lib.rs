mod device;
pub mod event;
mod filters;
mod server;
mod sink;
mod smoother;

const CHANNEL_MAX_BUFFER: usize = 256;

pub use device::{list_event_devices, EventDeviceStream};
pub use event::{RawEventRecord, EVENT_SIZE};
pub use filters::{ExponentialSmoothing, FilterError};
pub use server::FilterServer;
pub use sink::RecordOutputStream;
pub use smoother::{EventSmoother, DEFAULT_HALF_LIFE};
