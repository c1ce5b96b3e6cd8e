use crate::{
    event::{RawEventRecord, EVENT_SIZE},
    CHANNEL_MAX_BUFFER,
};

use crossbeam_channel as channel;
use crossbeam_channel::Receiver;
use log::{info, warn};
use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::thread;

pub fn list_event_devices() {
    let entries = fs::read_dir("/dev/input").expect("Failed to read /dev/input");
    let mut device_paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.starts_with("event"))
                .unwrap_or(false)
        })
        .collect();
    device_paths.sort();

    println!("--- Available input event devices ---");
    for path in device_paths {
        println!("{}", path.display());
    }
}

/// Reads fixed-size event records from a kernel input device on a dedicated thread.
///
/// Only complete records are forwarded; a short read at end of stream is dropped rather than
/// handed to the filter.
pub struct EventDeviceStream {
    record_rx: Receiver<RawEventRecord>,
}

impl EventDeviceStream {
    pub fn open(device_path: &Path) -> Self {
        let mut device = File::open(device_path).expect("Failed to open input event device");
        info!("Reading event records from {}", device_path.display());

        let (record_tx, record_rx) = channel::bounded(CHANNEL_MAX_BUFFER);

        thread::spawn(move || loop {
            let mut record = [0u8; EVENT_SIZE];
            match device.read_exact(&mut record) {
                Ok(()) => {
                    if record_tx.send(record).is_err() {
                        // Receiver dropped; the stream is done.
                        break;
                    }
                }
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    info!("Input event device stream ended");
                    break;
                }
                Err(e) => {
                    warn!("Failed to read from input event device: {}", e);
                    break;
                }
            }
        });

        EventDeviceStream { record_rx }
    }

    pub fn get_record_rx(&self) -> &Receiver<RawEventRecord> {
        &self.record_rx
    }
}
