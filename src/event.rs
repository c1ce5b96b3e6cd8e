//! Binary layout of kernel input event records.
//!
//! Records are a fixed 16 bytes. The fields the filter cares about sit at fixed offsets and are
//! stored little-endian regardless of host byte order:
//!
//! ```text
//! ┌────────────────┬────────┬────────┬────────┬────────┐
//! │ timestamp      │ type   │ (pad)  │ code   │ value  │
//! │ 8 bytes        │ 1 byte │ 1 byte │ 2 bytes│ 4 bytes│
//! └────────────────┴────────┴────────┴────────┴────────┘
//! offset 0          8        9        10       12
//! ```
//!
//! The timestamp and pad bytes are opaque to the filter and pass through untouched.

pub const EVENT_SIZE: usize = 16;

const TYPE_OFFSET: usize = 8;
const CODE_OFFSET: usize = 10;
const VALUE_OFFSET: usize = 12;

/// One raw record, exactly as read from the device.
pub type RawEventRecord = [u8; EVENT_SIZE];

/// Digital button/key report.
pub const EV_KEY: u8 = 1;
/// Absolute axis value report.
pub const EV_ABS: u8 = 3;

pub const ABS_X: u16 = 0;
pub const ABS_Y: u16 = 1;
pub const ABS_PRESSURE: u16 = 24;
pub const ABS_DISTANCE: u16 = 25;
pub const ABS_TILT_X: u16 = 26;
pub const ABS_TILT_Y: u16 = 27;

/// Pen tool entered sensing range.
pub const BTN_TOOL_PEN: u16 = 320;
/// Eraser tool entered sensing range.
pub const BTN_TOOL_RUBBER: u16 = 321;
/// Tool touching the surface. Reported by the devices we filter but not acted on.
pub const BTN_TOUCH: u16 = 330;

#[inline]
pub fn event_type(record: &RawEventRecord) -> u8 {
    record[TYPE_OFFSET]
}

#[inline]
pub fn event_code(record: &RawEventRecord) -> u16 {
    u16::from_le_bytes([record[CODE_OFFSET], record[CODE_OFFSET + 1]])
}

#[inline]
pub fn event_value(record: &RawEventRecord) -> u32 {
    u32::from_le_bytes([
        record[VALUE_OFFSET],
        record[VALUE_OFFSET + 1],
        record[VALUE_OFFSET + 2],
        record[VALUE_OFFSET + 3],
    ])
}

/// Overwrite the value field in place. Only bytes 12..16 are touched.
#[inline]
pub fn set_event_value(record: &mut RawEventRecord, value: u32) {
    record[VALUE_OFFSET..VALUE_OFFSET + 4].copy_from_slice(&value.to_le_bytes());
}
