use crate::{event::RawEventRecord, CHANNEL_MAX_BUFFER};

use crossbeam_channel as channel;
use crossbeam_channel::{Receiver, Sender};
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::thread;

/// Forwards filtered records, byte-for-byte, to the consumer on a dedicated writer thread.
pub struct RecordOutputStream {
    record_tx: Sender<RawEventRecord>,
    join_handle: thread::JoinHandle<()>,
}

impl RecordOutputStream {
    pub fn connect_file(path: &Path) -> Self {
        let file = File::create(path).expect("Failed to create record output file");
        info!("Forwarding records to {}", path.display());
        Self::connect(Box::new(file))
    }

    pub fn connect_stdout() -> Self {
        Self::connect(Box::new(io::stdout()))
    }

    fn connect(writer: Box<dyn Write + Send>) -> Self {
        let (record_tx, record_rx) = channel::bounded(CHANNEL_MAX_BUFFER);
        let join_handle = thread::spawn(move || buffered_record_writer(writer, record_rx));

        RecordOutputStream {
            record_tx,
            join_handle,
        }
    }

    pub fn write_record(&self, record: RawEventRecord) {
        self.record_tx
            .send(record)
            .expect("Failed to send record to output stream");
    }

    /// Stops the writer thread after it drains outstanding records, then flushes.
    pub fn close(self) {
        drop(self.record_tx);
        self.join_handle
            .join()
            .expect("Failed to join on record writer thread");
    }
}

fn buffered_record_writer(writer: Box<dyn Write + Send>, record_rx: Receiver<RawEventRecord>) {
    let mut writer = BufWriter::new(writer);
    while let Ok(record) = record_rx.recv() {
        writer
            .write_all(&record)
            .expect("Record writer failed to write record");
    }
    writer.flush().expect("Failed to flush record output stream");
    info!("Flushed record output stream");
}
