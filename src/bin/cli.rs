use steadypen::{list_event_devices, FilterServer};

use crossbeam_channel as channel;
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "cli")]
enum Opt {
    /// List candidate input event devices.
    List,
    /// Smooth one device's coordinate stream and forward the records.
    Run {
        #[structopt(short = "d", long = "device", parse(from_os_str))]
        device_path: PathBuf,

        /// Samples after which a past sample's weight decays to 50%.
        #[structopt(short = "l", long = "half-life", default_value = "4")]
        half_life: f32,

        /// Where to forward filtered records; defaults to stdout.
        #[structopt(short = "o", long = "output", parse(from_os_str))]
        output_path: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let opt = Opt::from_args();

    // Set SIGINT handler.
    let (exit_tx, exit_rx) = channel::bounded(1);
    ctrlc::set_handler(move || {
        let _ = exit_tx.send(());
    })
    .expect("Error setting Ctrl-C handler");

    match opt {
        Opt::List => list_event_devices(),
        Opt::Run {
            device_path,
            half_life,
            output_path,
        } => {
            let server = FilterServer::new(exit_rx, half_life, output_path);
            if let Err(e) = server.run_device(&device_path) {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    }
}
