//! `compose`
//!
//! Lays out and paints the splash canvas.
use image::{
    imageops::{self, FilterType},
    DynamicImage, Rgba, RgbaImage,
};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::{font::LabelFont, SplashLayout};

/// Top-left positions of the icon and the label on the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Left edge of the icon.
    pub icon_x: i64,
    /// Top edge of the icon.
    pub icon_y: i64,
    /// Left edge of the label.
    pub label_x: i64,
    /// Top edge of the label.
    pub label_y: i64,
}

/// Measures the rendered size of some text.
///
/// # Arguments
/// * `font`: The font the text will be drawn with.
/// * `text`: The text to measure.
///
/// # Returns
/// The width and height of the text, in pixels.
#[must_use]
pub fn measure_label(font: &LabelFont, text: &str) -> (u32, u32) {
    text_size(font.scale(), font.font(), text)
}

/// Works out where the icon and the label go.
///
/// Both are centred horizontally. The icon, the spacing and the label form one block, which sits
/// `vertical_bias_percent` of the way down the free vertical space, so slightly above centre with
/// the default of 45.
///
/// # Arguments
/// * `layout`: The canvas and icon dimensions.
/// * `label_width`: The measured width of the label.
/// * `label_height`: The measured height of the label.
///
/// # Returns
/// The placement of the icon and the label.
#[must_use]
pub fn compute_placement(layout: &SplashLayout, label_width: u32, label_height: u32) -> Placement {
    let icon_size = i64::from(layout.icon_size);
    let spacing = i64::from(layout.spacing);

    let block_height = icon_size + spacing + i64::from(label_height);
    let free_height = (i64::from(layout.canvas_height) - block_height).max(0);
    let block_top = free_height * i64::from(layout.vertical_bias_percent) / 100;

    Placement {
        icon_x: centre_offset(layout.canvas_width, layout.icon_size),
        icon_y: block_top,
        label_x: centre_offset(layout.canvas_width, label_width),
        label_y: block_top + icon_size + spacing,
    }
}

/// Paints the splash screen.
///
/// # Arguments
/// * `icon`: The source icon, at any size.
/// * `font`: The font to draw the label with.
/// * `layout`: The layout constants.
///
/// # Returns
/// The finished canvas.
#[must_use]
pub fn compose_splash(icon: &DynamicImage, font: &LabelFont, layout: &SplashLayout) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(
        layout.canvas_width,
        layout.canvas_height,
        layout.background_colour,
    );

    let icon = imageops::resize(
        &icon.to_rgba8(),
        layout.icon_size,
        layout.icon_size,
        FilterType::Lanczos3,
    );

    let (label_width, label_height) = measure_label(font, &layout.label);
    let placement = compute_placement(layout, label_width, label_height);
    log::debug!("Label measures {label_width}x{label_height}, placement {placement:?}");

    imageops::overlay(&mut canvas, &icon, placement.icon_x, placement.icon_y);

    // Shadow passes then the label go on one transparent layer, composited onto the canvas once.
    let mut label_layer = RgbaImage::new(layout.canvas_width, layout.canvas_height);
    for &(dx, dy) in &layout.shadow_offsets {
        draw_label(
            &mut label_layer,
            layout.shadow_colour,
            placement.label_x + i64::from(dx),
            placement.label_y + i64::from(dy),
            font,
            &layout.label,
        );
    }
    draw_label(
        &mut label_layer,
        layout.label_colour,
        placement.label_x,
        placement.label_y,
        font,
        &layout.label,
    );
    imageops::overlay(&mut canvas, &label_layer, 0, 0);

    canvas
}

/// Offset that centres something inside a span, clamped to the start of the span.
fn centre_offset(outer: u32, inner: u32) -> i64 {
    i64::from(outer.saturating_sub(inner) / 2)
}

/// Draws one pass of the label.
///
/// # Arguments
/// * `canvas`: The image to draw onto.
/// * `colour`: The colour of the text.
/// * `x`: Left edge of the text.
/// * `y`: Top edge of the text.
/// * `font`: The font to draw with.
/// * `text`: The text.
fn draw_label(
    canvas: &mut RgbaImage,
    colour: Rgba<u8>,
    x: i64,
    y: i64,
    font: &LabelFont,
    text: &str,
) {
    let x = i32::try_from(x).unwrap_or(i32::MAX);
    let y = i32::try_from(y).unwrap_or(i32::MAX);
    draw_text_mut(canvas, colour, x, y, font.scale(), font.font(), text);
}
