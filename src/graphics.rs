use image::{DynamicImage, GrayImage, Luma};

/// Render a bar-module pattern as a tight 1-bit image.
/// - `narrow`: dots per module
/// - `quiet`: white modules added on each side
pub fn render_modules(modules: &[bool], narrow: u32, height: u32, quiet: u32) -> GrayImage {
    let narrow = narrow.max(1);
    let w = (modules.len() as u32 + quiet * 2) * narrow;
    let mut img = GrayImage::from_pixel(w.max(1), height.max(1), Luma([255u8]));

    for (i, &bar) in modules.iter().enumerate() {
        if !bar {
            continue;
        }
        let x0 = (quiet + i as u32) * narrow;
        for x in x0..x0 + narrow {
            for y in 0..img.height() {
                img.put_pixel(x, y, Luma([0]));
            }
        }
    }
    img
}

/// Rotate 90 degrees clockwise to compensate for driver-locked landscape orientation.
pub fn rotate90(img: &GrayImage) -> GrayImage {
    DynamicImage::ImageLuma8(img.clone()).rotate90().to_luma8()
}
