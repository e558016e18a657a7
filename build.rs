use anyhow::{Context, Result};
use rgbled_config::{codegen::generate_modules, Overlay};
use std::{
    env,
    fs::File,
    io::{BufReader, Read},
};

const DEFAULT_OVERLAY_FILENAME: &str = "./rgbled_config/sample_configurations/base_overlay.ron";

fn main() -> Result<()> {
    println!("cargo:rerun-if-env-changed=RGBLED_OVERLAY");
    println!("cargo:rerun-if-changed={}", DEFAULT_OVERLAY_FILENAME);

    let filename = match env::var("RGBLED_OVERLAY") {
        Ok(filename) => {
            println!("cargo:rerun-if-changed={}", filename);
            filename
        }
        Err(_) => DEFAULT_OVERLAY_FILENAME.into(),
    };

    let file = File::open(&filename).with_context(|| format!("Failed to open {}", filename))?;
    let mut buf_reader = BufReader::new(file);
    let mut contents = String::new();
    buf_reader.read_to_string(&mut contents)?;
    let overlay: Overlay = ron::from_str(&contents)?;
    generate_modules(env::var("OUT_DIR")?, &overlay)?;

    Ok(())
}
