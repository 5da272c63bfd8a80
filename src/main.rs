use log::error;
use std::process;

use sdrplay_rs::find_devices;

fn main() {
    stderrlog::new().verbosity(log::Level::Info).init().unwrap();

    println!("Looking for SDRplay devices...");
    match find_devices() {
        Ok(count) => println!("{}", found_message(count)),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}

fn found_message(count: usize) -> String {
    format!("Found {} SDRplay device(s)", count)
}
