use crate::{
    device::EventDeviceStream, filters::FilterError, sink::RecordOutputStream,
    smoother::EventSmoother,
};

use crossbeam_channel::{select, Receiver};
use log::debug;
use std::path::{Path, PathBuf};

/// Wires a device input stream through the smoother and into the output stream.
pub struct FilterServer {
    canceller: Receiver<()>,
    half_life: f32,
    output_path: Option<PathBuf>,
}

impl FilterServer {
    pub fn new(canceller: Receiver<()>, half_life: f32, output_path: Option<PathBuf>) -> Self {
        FilterServer {
            canceller,
            half_life,
            output_path,
        }
    }

    pub fn run_device(&self, device_path: &Path) -> Result<(), FilterError> {
        let mut smoother = EventSmoother::new(self.half_life)?;

        // Create the stream components: device input --> smoother --> record output.
        let device_input = EventDeviceStream::open(device_path);
        let output = match self.output_path.as_ref() {
            Some(path) => RecordOutputStream::connect_file(path),
            None => RecordOutputStream::connect_stdout(),
        };

        loop {
            select! {
                recv(device_input.get_record_rx()) -> item => {
                    let mut record = match item {
                        Ok(record) => record,
                        Err(_) => {
                            debug!("Device stream closed");
                            break;
                        }
                    };
                    smoother.process(&mut record);
                    output.write_record(record);
                },
                recv(self.canceller) -> item => {
                    item.expect("Couldn't receive cancellation.");
                    debug!("Interrupted filter server");
                    break;
                }
            }
        }

        output.close();

        Ok(())
    }
}
