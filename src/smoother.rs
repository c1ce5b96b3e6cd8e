use crate::{
    event::{
        self, RawEventRecord, ABS_X, ABS_Y, BTN_TOOL_PEN, BTN_TOOL_RUBBER, EV_ABS, EV_KEY,
    },
    filters::{ExponentialSmoothing, FilterError},
};

use log::{debug, trace};

/// Half-life used when no override is given; matches the reference tuning for pen digitizers.
pub const DEFAULT_HALF_LIFE: f32 = 4.0;

/// Smooths the X/Y coordinate fields of an input event record stream in place.
///
/// Holds one running estimate per axis; the estimates persist across records until a tool-contact
/// record (pen or eraser entering range) resets them, so each stroke starts fresh.
pub struct EventSmoother {
    avg_x: ExponentialSmoothing,
    avg_y: ExponentialSmoothing,
}

impl EventSmoother {
    /// Both axes share the one half-life.
    pub fn new(half_life: f32) -> Result<Self, FilterError> {
        Ok(EventSmoother {
            avg_x: ExponentialSmoothing::new(half_life)?,
            avg_y: ExponentialSmoothing::new(half_life)?,
        })
    }

    /// Process one record, overwriting its value field if it carries an X or Y coordinate.
    /// All other bytes are left untouched. Never fails: every byte pattern is a valid record.
    pub fn process(&mut self, record: &mut RawEventRecord) {
        let ty = event::event_type(record);
        let code = event::event_code(record);
        let value = event::event_value(record);

        // A tool coming into range starts a new gesture; stale estimates from the previous
        // contact must not bleed into it. Tool-out (value == 0) does not reset.
        if ty == EV_KEY && value == 1 && (code == BTN_TOOL_PEN || code == BTN_TOOL_RUBBER) {
            debug!("tool {} in range, starting fresh estimates", code);
            self.reset();
        }

        if ty == EV_ABS {
            let smoothed = match code {
                ABS_X => Some(update_axis(&mut self.avg_x, value)),
                ABS_Y => Some(update_axis(&mut self.avg_y, value)),
                _ => None,
            };
            if let Some(smoothed) = smoothed {
                trace!("axis {} sample {} smoothed to {}", code, value, smoothed);
                event::set_event_value(record, smoothed);
            }
        }
    }

    /// Forget both running estimates. The next sample on each axis is taken verbatim.
    pub fn reset(&mut self) {
        self.avg_x.clear();
        self.avg_y.clear();
    }
}

fn update_axis(axis: &mut ExponentialSmoothing, sample: u32) -> u32 {
    axis.add(sample);
    axis.value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{ABS_PRESSURE, ABS_TILT_X, EVENT_SIZE};

    fn make_record(ty: u8, code: u16, value: u32) -> RawEventRecord {
        let mut record = [0u8; EVENT_SIZE];
        // Opaque timestamp bytes; the filter must never touch them.
        record[..8].copy_from_slice(&[0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]);
        record[8] = ty;
        record[10..12].copy_from_slice(&code.to_le_bytes());
        record[12..16].copy_from_slice(&value.to_le_bytes());
        record
    }

    fn process_value(smoother: &mut EventSmoother, ty: u8, code: u16, value: u32) -> u32 {
        let mut record = make_record(ty, code, value);
        smoother.process(&mut record);
        crate::event::event_value(&record)
    }

    #[test]
    fn first_coordinate_sample_passes_verbatim() {
        let mut smoother = EventSmoother::new(DEFAULT_HALF_LIFE).unwrap();
        let mut record = make_record(EV_ABS, ABS_X, 1000);
        smoother.process(&mut record);

        assert_eq!(crate::event::event_value(&record), 1000);
        // Everything outside the value field is untouched.
        assert_eq!(&record[..12], &make_record(EV_ABS, ABS_X, 1000)[..12]);
    }

    #[test]
    fn coordinate_stream_is_smoothed_with_truncation() {
        // With half-life 4, alpha ~= 0.8409: 100 then 200 gives ~115.91, truncated to 115.
        let mut smoother = EventSmoother::new(4.0).unwrap();
        assert_eq!(process_value(&mut smoother, EV_ABS, ABS_X, 100), 100);
        assert_eq!(process_value(&mut smoother, EV_ABS, ABS_X, 200), 115);
    }

    #[test]
    fn axes_are_smoothed_independently() {
        let mut smoother = EventSmoother::new(4.0).unwrap();
        assert_eq!(process_value(&mut smoother, EV_ABS, ABS_X, 100), 100);
        assert_eq!(process_value(&mut smoother, EV_ABS, ABS_Y, 1000), 1000);

        // The Y sample must not have disturbed the X estimate.
        assert_eq!(process_value(&mut smoother, EV_ABS, ABS_X, 200), 115);
        // 0.8409 * 1000 + 0.1591 * 2000 ~= 1159.1
        assert_eq!(process_value(&mut smoother, EV_ABS, ABS_Y, 2000), 1159);
    }

    #[test]
    fn pen_in_range_resets_both_axes() {
        let mut smoother = EventSmoother::new(4.0).unwrap();
        process_value(&mut smoother, EV_ABS, ABS_X, 100);
        process_value(&mut smoother, EV_ABS, ABS_Y, 100);

        let pen_down = make_record(EV_KEY, BTN_TOOL_PEN, 1);
        let mut record = pen_down;
        smoother.process(&mut record);
        // The reset record itself passes through byte-for-byte.
        assert_eq!(record, pen_down);

        // Next sample on each axis is taken verbatim again.
        assert_eq!(process_value(&mut smoother, EV_ABS, ABS_X, 5000), 5000);
        assert_eq!(process_value(&mut smoother, EV_ABS, ABS_Y, 7000), 7000);
    }

    #[test]
    fn eraser_in_range_resets_both_axes() {
        let mut smoother = EventSmoother::new(4.0).unwrap();
        process_value(&mut smoother, EV_ABS, ABS_X, 100);

        process_value(&mut smoother, EV_KEY, BTN_TOOL_RUBBER, 1);
        assert_eq!(process_value(&mut smoother, EV_ABS, ABS_X, 5000), 5000);
    }

    #[test]
    fn tool_out_of_range_does_not_reset() {
        let mut smoother = EventSmoother::new(4.0).unwrap();
        process_value(&mut smoother, EV_ABS, ABS_X, 100);
        process_value(&mut smoother, EV_ABS, ABS_X, 200);

        // Only value == 1 triggers the reset; tool-out keeps the running estimate.
        process_value(&mut smoother, EV_KEY, BTN_TOOL_PEN, 0);
        // 0.8409 * 115.91 + 0.1591 * 200 ~= 129.29, so still smoothing against old state.
        assert_eq!(process_value(&mut smoother, EV_ABS, ABS_X, 200), 129);
    }

    #[test]
    fn non_coordinate_axes_pass_through_unchanged() {
        let mut smoother = EventSmoother::new(4.0).unwrap();
        process_value(&mut smoother, EV_ABS, ABS_X, 100);

        for &code in &[ABS_PRESSURE, ABS_TILT_X] {
            let input = make_record(EV_ABS, code, 5555);
            let mut record = input;
            smoother.process(&mut record);
            assert_eq!(record, input);
        }
    }

    #[test]
    fn unrelated_event_types_pass_through_unchanged() {
        let mut smoother = EventSmoother::new(4.0).unwrap();

        // EV_SYN (0) and an arbitrary unknown type, both with coordinate-looking codes.
        for &ty in &[0u8, 4, 0xFF] {
            let input = make_record(ty, ABS_X, 12345);
            let mut record = input;
            smoother.process(&mut record);
            assert_eq!(record, input);
        }
    }

    #[test]
    fn explicit_reset_forgets_both_estimates() {
        let mut smoother = EventSmoother::new(4.0).unwrap();
        process_value(&mut smoother, EV_ABS, ABS_X, 100);
        process_value(&mut smoother, EV_ABS, ABS_Y, 100);

        smoother.reset();
        assert_eq!(process_value(&mut smoother, EV_ABS, ABS_X, 900), 900);
        assert_eq!(process_value(&mut smoother, EV_ABS, ABS_Y, 900), 900);
    }

    #[test]
    fn rejects_nonpositive_half_life() {
        assert!(EventSmoother::new(0.0).is_err());
        assert!(EventSmoother::new(-1.0).is_err());
    }
}
