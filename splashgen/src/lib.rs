//! `splashgen`
//!
//! Renders the mobile app's launch splash screen: the app icon above the app name, on a solid
//! background.

mod compose;
pub mod font;

use std::{
    error, fmt, fs, io,
    path::{Path, PathBuf},
};

pub use compose::{compose_splash, compute_placement, measure_label, Placement};
pub use font::{resolve_font, FontOrigin, LabelFont};
use image::{ImageFormat, Rgba};

/// The icon the splash screen is built from.
pub const ICON_PATH: &str = "assets/icon.png";
/// Where the splash screen is written.
pub const OUTPUT_PATH: &str = "assets/splash.png";

/// Width of the splash screen, in pixels.
pub const CANVAS_WIDTH: u32 = 1290;
/// Height of the splash screen, in pixels.
pub const CANVAS_HEIGHT: u32 = 2796;
/// The app's dark teal.
pub const BACKGROUND_COLOUR: Rgba<u8> = Rgba([0x0f, 0x28, 0x2f, 0xff]);
/// The icon is scaled to a square of this size.
pub const ICON_SIZE: u32 = 512;
/// Text drawn under the icon.
pub const LABEL: &str = "BudgetIn Check";
/// Size of the label, in pixels.
pub const FONT_SIZE: f32 = 96.0;
/// Gap between the bottom of the icon and the top of the label.
pub const SPACING: u32 = 64;
/// How far down the free vertical space the icon and label sit, as a percentage.
pub const VERTICAL_BIAS_PERCENT: u32 = 45;
/// Colour of each shadow pass.
pub const SHADOW_COLOUR: Rgba<u8> = Rgba([0, 0, 0, 110]);
/// Offsets of the shadow passes from the label.
pub const SHADOW_OFFSETS: [(i32, i32); 3] = [(2, 2), (3, 3), (4, 4)];
/// Colour of the label itself.
pub const LABEL_COLOUR: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

/// Everything that decides what the splash screen looks like.
#[derive(Debug, Clone)]
pub struct SplashLayout {
    /// Width of the canvas.
    pub canvas_width: u32,
    /// Height of the canvas.
    pub canvas_height: u32,
    /// Fill colour of the canvas.
    pub background_colour: Rgba<u8>,
    /// Side length of the resized icon.
    pub icon_size: u32,
    /// Text drawn under the icon.
    pub label: String,
    /// Size of the label, in pixels.
    pub font_size: f32,
    /// Font files to try for the label, most preferred first.
    pub font_candidates: Vec<PathBuf>,
    /// Gap between the icon and the label.
    pub spacing: u32,
    /// How far down the free vertical space the icon and label sit, as a percentage.
    pub vertical_bias_percent: u32,
    /// Colour of each shadow pass.
    pub shadow_colour: Rgba<u8>,
    /// Offsets of the shadow passes from the label.
    pub shadow_offsets: Vec<(i32, i32)>,
    /// Colour of the label.
    pub label_colour: Rgba<u8>,
}

impl Default for SplashLayout {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            background_colour: BACKGROUND_COLOUR,
            icon_size: ICON_SIZE,
            label: LABEL.to_string(),
            font_size: FONT_SIZE,
            font_candidates: font::FONT_CANDIDATES
                .iter()
                .map(PathBuf::from)
                .collect(),
            spacing: SPACING,
            vertical_bias_percent: VERTICAL_BIAS_PERCENT,
            shadow_colour: SHADOW_COLOUR,
            shadow_offsets: SHADOW_OFFSETS.to_vec(),
            label_colour: LABEL_COLOUR,
        }
    }
}

/// Errors that can occur while generating the splash screen.
#[derive(Debug)]
pub enum GenerateSplashError {
    /// The icon could not be opened or decoded.
    LoadIcon(image::ImageError),
    /// The directory the splash screen goes in could not be created.
    CreateOutputDirectory(io::Error),
    /// The splash screen could not be encoded or written.
    SaveSplash(image::ImageError),
}

impl fmt::Display for GenerateSplashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateSplashError::LoadIcon(err) => write!(f, "failed to load icon: {err}"),
            GenerateSplashError::CreateOutputDirectory(err) => {
                write!(f, "failed to create output directory: {err}")
            }
            GenerateSplashError::SaveSplash(err) => {
                write!(f, "failed to save splash screen: {err}")
            }
        }
    }
}

impl error::Error for GenerateSplashError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            GenerateSplashError::LoadIcon(err) | GenerateSplashError::SaveSplash(err) => Some(err),
            GenerateSplashError::CreateOutputDirectory(err) => Some(err),
        }
    }
}

/// Generates the splash screen and writes it out as a PNG.
///
/// # Arguments
/// * `icon_path`: The icon to put on the splash screen.
/// * `output_path`: Where to write the splash screen. Missing parent directories are created.
/// * `layout`: What the splash screen looks like.
///
/// # Errors
/// If the icon cannot be loaded, or the output cannot be written. Fonts that fail to load are not
/// errors, the built-in font is used instead.
pub fn generate_splash(
    icon_path: &Path,
    output_path: &Path,
    layout: &SplashLayout,
) -> Result<(), GenerateSplashError> {
    let icon = image::open(icon_path).map_err(GenerateSplashError::LoadIcon)?;
    log::info!(
        "Loaded icon {} ({}x{})",
        icon_path.display(),
        icon.width(),
        icon.height()
    );

    let font = resolve_font(layout.font_size, &layout.font_candidates);
    let canvas = compose_splash(&icon, &font, layout);

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent).map_err(GenerateSplashError::CreateOutputDirectory)?;
    }
    canvas
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(GenerateSplashError::SaveSplash)?;
    log::info!(
        "Wrote {}x{} splash screen to {}",
        canvas.width(),
        canvas.height(),
        output_path.display()
    );

    Ok(())
}
