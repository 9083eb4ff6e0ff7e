//! Receiver Configuration Example
//!
//! Loads a receiver parameter file, reads every setting through the checked
//! accessors, then stamps a sample fix.
//!
//! ## What You'll Learn
//!
//! - Narrowing store integers to receiver field widths
//! - Declaring boolean switches with defaults
//! - Telling range errors from type errors at startup
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_receiver_config --features json
//! cargo run --example 01_receiver_config --features json -- params.json
//! ```

use std::{env, error::Error, fs, process};

use gnss_node_core::{
    params::{declare_boolean, get_int_vector, get_uint_or_default, get_uint_vector},
    time::{to_utc_seconds, CalendarTimestamp},
    ConfigErrorKind, MemoryParamStore,
};

const DEFAULT_PARAMS: &str = r#"{
    "device": "/dev/ttyACM0",
    "uart1": {"baudrate": 115200, "in": 1, "out": 1},
    "rate": 4,
    "nav_rate": 1,
    "dynamic_model": 4,
    "tmode3": {"offsets_cm": [-12, 0, 35]},
    "sbas": {"prns": [120, 124, 126]}
}"#;

fn main() {
    if let Err(e) = run() {
        eprintln!("startup aborted: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let json = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => DEFAULT_PARAMS.to_string(),
    };
    let mut store = MemoryParamStore::from_json_str(&json)?;
    println!("Loaded {} parameters", store.len());

    let baudrate: u32 = get_uint_or_default(&store, "uart1/baudrate", 9600)?;
    let meas_rate: u16 = get_uint_or_default(&store, "rate", 4)?;
    let nav_rate: u16 = get_uint_or_default(&store, "nav_rate", 1)?;
    let offsets: Vec<i8> = get_int_vector::<i8, _>(&store, "tmode3/offsets_cm")?.unwrap_or_default();

    let dynamic_model = match get_uint_or_default::<u8, _>(&store, "dynamic_model", 0) {
        Ok(model) => model,
        Err(e) if e.kind() == ConfigErrorKind::Range => {
            eprintln!("fix '{}' in the parameter file", e.key());
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let prns: Vec<u8> = get_uint_vector::<u8, _>(&store, "sbas/prns")?.unwrap_or_default();
    let sbas = declare_boolean(&mut store, "sbas/enable", !prns.is_empty())?;
    let raw_data = declare_boolean(&mut store, "raw_data", false)?;

    println!("  baudrate       {baudrate}");
    println!("  meas/nav rate  {meas_rate} Hz / every {nav_rate} meas");
    println!("  dynamic model  {dynamic_model}");
    println!("  tmode3 offsets {offsets:?} cm");
    println!("  sbas           {sbas} (prns {prns:?})");
    println!("  raw data       {raw_data}");

    let fix = CalendarTimestamp::new(2024, 2, 29, 12, 0, 0);
    println!("Fix at {fix} -> {} s", to_utc_seconds(&fix));

    Ok(())
}
