//! `splashgen`
//!
//! Writes the mobile app's splash screen from its icon.

use std::path::Path;

use splashgen::{generate_splash, GenerateSplashError, SplashLayout, ICON_PATH, OUTPUT_PATH};

fn main() -> Result<(), GenerateSplashError> {
    env_logger::init();

    let output_path = Path::new(OUTPUT_PATH);
    generate_splash(Path::new(ICON_PATH), output_path, &SplashLayout::default())?;
    println!("Splash screen written to {}", output_path.display());

    Ok(())
}
