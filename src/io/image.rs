//! PNG export of tilings with per-facing colours

use crate::io::configuration::{
    BACKGROUND_COLOR, DOWN_COLOR, LEFT_COLOR, OUTLINE_COLOR, RIGHT_COLOR, UP_COLOR,
};
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::domino::{Domino, Facing};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Drawing parameters shared by still and animated output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStyle {
    /// Side length of one cell in pixels
    pub cell_size: u32,
    /// Whether to draw a one pixel outline around each domino
    pub outline: bool,
}

/// Fill colour of a domino with the given facing
pub const fn facing_color(facing: Facing) -> [u8; 4] {
    match facing {
        Facing::Up => UP_COLOR,
        Facing::Down => DOWN_COLOR,
        Facing::Left => LEFT_COLOR,
        Facing::Right => RIGHT_COLOR,
    }
}

/// Side length in pixels of a canvas holding the diamond of the given order
pub const fn canvas_side(order: u32, style: RenderStyle) -> u32 {
    2 * order * style.cell_size
}

/// Paint dominoes onto a canvas sized for the diamond of `canvas_order`
///
/// The diamond centre sits at the canvas centre, so smaller tilings drawn on
/// a larger canvas stay centred. Dominoes falling outside the canvas are
/// clipped.
pub fn paint_dominoes<'a>(
    img: &mut RgbaImage,
    dominoes: impl IntoIterator<Item = &'a Domino>,
    canvas_order: u32,
    style: RenderStyle,
) {
    let size = i64::from(style.cell_size);
    let origin = i64::from(canvas_order) * size;

    for domino in dominoes {
        let left = i64::from(domino.anchor.x) * size + origin;
        let top = i64::from(domino.anchor.y) * size + origin;
        let (width, height) = if domino.facing.is_horizontal() {
            (2 * size, size)
        } else {
            (size, 2 * size)
        };
        let fill = Rgba(facing_color(domino.facing));
        let edge = Rgba(OUTLINE_COLOR);

        for dy in 0..height {
            for dx in 0..width {
                let on_edge = dx == 0 || dy == 0 || dx == width - 1 || dy == height - 1;
                let color = if style.outline && on_edge { edge } else { fill };
                put_clipped(img, left + dx, top + dy, color);
            }
        }
    }
}

fn put_clipped(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= i64::from(img.width()) || y >= i64::from(img.height()) {
        return;
    }
    img.put_pixel(x as u32, y as u32, color);
}

/// Render a tiling of the given order to an image
pub fn render_tiling<'a>(
    dominoes: impl IntoIterator<Item = &'a Domino>,
    order: u32,
    style: RenderStyle,
) -> RgbaImage {
    let side = canvas_side(order, style);
    let mut img = RgbaImage::from_pixel(side, side, Rgba(BACKGROUND_COLOR));
    paint_dominoes(&mut img, dominoes, order, style);
    img
}

/// Export a tiling as a PNG image with transparent background
///
/// # Errors
///
/// Returns an error if:
/// - There are no dominoes to draw
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_tiling_as_png<'a>(
    dominoes: impl IntoIterator<Item = &'a Domino>,
    order: u32,
    style: RenderStyle,
    output_path: &Path,
) -> Result<()> {
    let mut dominoes = dominoes.into_iter().peekable();
    if dominoes.peek().is_none() {
        return Err(AlgorithmError::InvalidParameter {
            parameter: "tiling",
            value: format!("order {order}"),
            reason: "No dominoes have been placed".to_string(),
        });
    }

    let img = render_tiling(dominoes, order, style);

    create_parent_dir(output_path)?;
    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

/// Create the directory an output file will be written into
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be created.
pub fn create_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
