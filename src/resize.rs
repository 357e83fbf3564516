//! Square resizing of the decoded source

use crate::config::{FitMode, ResampleFilter};
use image::{imageops, DynamicImage, GenericImageView, Rgba, RgbaImage};
use tracing::warn;

/// Produce a `size x size` copy of `source`
pub fn resize_square(
    source: &DynamicImage,
    size: u32,
    filter: ResampleFilter,
    fit: FitMode,
) -> DynamicImage {
    match fit {
        FitMode::Stretch => source.resize_exact(size, size, filter.filter_type()),
        FitMode::Contain => contain(source, size, filter),
    }
}

/// Scale inside the square keeping aspect ratio, centered on transparency
fn contain(source: &DynamicImage, size: u32, filter: ResampleFilter) -> DynamicImage {
    let (width, height) = source.dimensions();
    if width == height {
        return source.resize_exact(size, size, filter.filter_type());
    }

    let (scaled_w, scaled_h) = fit_within(width, height, size);
    if scaled_w == 0 || scaled_h == 0 {
        warn!(width, height, size, "source too thin to contain, stretching instead");
        return source.resize_exact(size, size, filter.filter_type());
    }

    let scaled = source
        .resize_exact(scaled_w, scaled_h, filter.filter_type())
        .to_rgba8();
    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 0]));
    let x = (size - scaled_w) / 2;
    let y = (size - scaled_h) / 2;
    imageops::overlay(&mut canvas, &scaled, i64::from(x), i64::from(y));
    DynamicImage::ImageRgba8(canvas)
}

/// Largest `(w, h)` with the source aspect ratio whose longer edge is `size`
fn fit_within(width: u32, height: u32, size: u32) -> (u32, u32) {
    let size = u64::from(size);
    let (w, h) = (u64::from(width), u64::from(height));
    if w >= h {
        (size as u32, ((h * size + w / 2) / w) as u32)
    } else {
        (((w * size + h / 2) / h) as u32, size as u32)
    }
}
