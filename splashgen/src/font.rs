//! `font`
//!
//! Picks the typeface used to draw the splash label.
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use ab_glyph::{FontArc, InvalidFont, PxScale};

/// Font files to try, in order of preference, before falling back to the built-in face.
#[allow(clippy::module_name_repetitions)]
pub const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/SFNSRounded.ttf",
    "/System/Library/Fonts/Supplemental/Arial Rounded Bold.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
];

/// Where a resolved label font was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum FontOrigin {
    /// One of the candidate font files.
    Candidate(PathBuf),
    /// The face compiled into the binary.
    BuiltIn,
}

/// A font ready to draw the label at a fixed pixel size.
#[derive(Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct LabelFont {
    /// The parsed font face.
    font: FontArc,
    /// The size the label is drawn at.
    scale: PxScale,
    /// Where the face was loaded from.
    origin: FontOrigin,
}

impl LabelFont {
    /// Gets the parsed font face.
    ///
    /// # Returns
    /// The font face.
    #[must_use]
    pub fn font(&self) -> &FontArc {
        &self.font
    }

    /// Gets the size the label is drawn at.
    ///
    /// # Returns
    /// The pixel scale of the font.
    #[must_use]
    pub fn scale(&self) -> PxScale {
        self.scale
    }

    /// Gets where the face was loaded from.
    ///
    /// # Returns
    /// The origin of the font.
    #[must_use]
    pub fn origin(&self) -> &FontOrigin {
        &self.origin
    }
}

/// Reasons a font candidate was skipped. Only ever logged.
#[derive(Debug)]
enum FontCandidateError {
    /// The file could not be read.
    Read(io::Error),
    /// The file is not a font we can parse.
    Parse(InvalidFont),
}

impl fmt::Display for FontCandidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontCandidateError::Read(err) => write!(f, "unreadable: {err}"),
            FontCandidateError::Parse(err) => write!(f, "not a usable font: {err}"),
        }
    }
}

/// Resolves the label font.
///
/// Candidates that are missing or fail to parse are skipped silently, and if none of them load
/// the built-in face is used, so this never fails.
///
/// # Arguments
/// * `font_size`: The size of the label, in pixels.
/// * `candidates`: Font files to try, most preferred first.
///
/// # Returns
/// The first candidate that loads, otherwise the built-in font.
#[must_use]
pub fn resolve_font(font_size: f32, candidates: &[PathBuf]) -> LabelFont {
    let scale = PxScale::from(font_size);

    for path in candidates {
        match load_candidate(path) {
            Ok(font) => {
                log::info!("Using font {}", path.display());
                return LabelFont {
                    font,
                    scale,
                    origin: FontOrigin::Candidate(path.clone()),
                };
            }
            Err(err) => log::debug!("Skipping font candidate {}: {err}", path.display()),
        }
    }

    log::info!("No font candidates could be loaded, using the built-in font");
    LabelFont {
        font: built_in_font(),
        scale,
        origin: FontOrigin::BuiltIn,
    }
}

/// Gets the fallback face that ships inside the binary.
///
/// # Returns
/// The built-in font.
#[allow(clippy::missing_panics_doc)]
#[must_use]
pub fn built_in_font() -> FontArc {
    FontArc::try_from_slice(epaint_default_fonts::UBUNTU_LIGHT)
        .expect("Built-in font should always parse")
}

/// Reads and parses a single candidate. Collections load their first face.
///
/// # Arguments
/// * `path`: The font file to load.
///
/// # Returns
/// The parsed font if successful, otherwise why it was skipped.
fn load_candidate(path: &Path) -> Result<FontArc, FontCandidateError> {
    let data = fs::read(path).map_err(FontCandidateError::Read)?;
    FontArc::try_from_vec(data).map_err(FontCandidateError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_candidates_fall_back_to_built_in() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let candidates = vec![dir.path().join("nope.ttf"), dir.path().join("also-nope.otf")];

        let font = resolve_font(96.0, &candidates);

        assert_eq!(font.origin(), &FontOrigin::BuiltIn, "origin");
        assert_eq!(font.scale(), PxScale::from(96.0), "scale");
    }

    #[test]
    fn test_no_candidates_fall_back_to_built_in() {
        let font = resolve_font(12.0, &[]);
        assert_eq!(font.origin(), &FontOrigin::BuiltIn, "origin");
    }

    #[test]
    fn test_first_loadable_candidate_wins() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("missing.ttf");
        let garbage = dir.path().join("garbage.ttf");
        fs::write(&garbage, b"definitely not a font").expect("failed to write garbage font");
        let hack = dir.path().join("hack.ttf");
        fs::write(&hack, epaint_default_fonts::HACK_REGULAR).expect("failed to write font");
        let ubuntu = dir.path().join("ubuntu.ttf");
        fs::write(&ubuntu, epaint_default_fonts::UBUNTU_LIGHT).expect("failed to write font");

        let font = resolve_font(
            48.0,
            &[missing, garbage.clone(), hack.clone(), ubuntu.clone()],
        );
        assert_eq!(font.origin(), &FontOrigin::Candidate(hack), "hack first");

        let font = resolve_font(48.0, &[ubuntu.clone(), garbage]);
        assert_eq!(font.origin(), &FontOrigin::Candidate(ubuntu), "ubuntu first");
    }

    #[test]
    fn test_unparsable_candidate_is_skipped() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let empty = dir.path().join("empty.ttf");
        fs::write(&empty, b"").expect("failed to write empty font");

        let font = resolve_font(32.0, &[empty]);
        assert_eq!(font.origin(), &FontOrigin::BuiltIn, "empty file");
    }

    #[test]
    fn test_candidate_errors_describe_the_failure() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("missing.ttf");
        let garbage = dir.path().join("garbage.ttf");
        fs::write(&garbage, b"definitely not a font").expect("failed to write garbage font");

        let read_err = load_candidate(&missing).err().expect("missing file should fail");
        assert!(
            matches!(read_err, FontCandidateError::Read(_)),
            "expected Read, got {read_err:?}"
        );
        assert!(
            read_err.to_string().starts_with("unreadable: "),
            "read message, got {read_err}"
        );

        let parse_err = load_candidate(&garbage).err().expect("garbage should fail");
        assert!(
            matches!(parse_err, FontCandidateError::Parse(_)),
            "expected Parse, got {parse_err:?}"
        );
        assert!(
            parse_err.to_string().starts_with("not a usable font: "),
            "parse message, got {parse_err}"
        );
    }
}
