use crate::{Grid, Result};
use image::{
    codecs::gif::{GifEncoder, Repeat},
    Delay, Frame, Rgba, RgbaImage,
};
use std::{fs::File, io::Write, path::Path, time::Duration};

/// Pixels per cell side in exported images.
pub const GIF_CELL_PIXELS: u32 = 8;

pub const ALIVE_RGBA: Rgba<u8> = Rgba([0xfd, 0xe7, 0x25, 0xff]);
pub const DEAD_RGBA: Rgba<u8> = Rgba([0x44, 0x01, 0x54, 0xff]);

/// Renders one field, each cell as a `cell_pixels` square.
pub fn frame_image(grid: &Grid, cell_pixels: u32) -> RgbaImage {
    let n = grid.side_length() as u32;
    RgbaImage::from_fn(n * cell_pixels, n * cell_pixels, |x, y| {
        if grid.get((x / cell_pixels) as i64, (y / cell_pixels) as i64) {
            ALIVE_RGBA
        } else {
            DEAD_RGBA
        }
    })
}

/// Encodes `frames` as a looping animation, `delay` apart.
pub fn write_gif(frames: &[Grid], dst: impl Write, delay: Duration) -> Result<()> {
    let mut encoder = GifEncoder::new(dst);
    encoder.set_repeat(Repeat::Infinite)?;
    let delay = Delay::from_numer_denom_ms(delay.as_millis() as u32, 1);
    for grid in frames {
        let image = frame_image(grid, GIF_CELL_PIXELS);
        encoder.encode_frame(Frame::from_parts(image, 0, 0, delay))?;
    }
    Ok(())
}

pub fn save_gif(frames: &[Grid], path: impl AsRef<Path>, delay: Duration) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_gif(frames, file, delay)?;
    tracing::info!(path = %path.as_ref().display(), frames = frames.len(), "animation saved");
    Ok(())
}
