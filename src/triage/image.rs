//! Image preprocessing for the garment model
//!
//! The only contract a replacement model must satisfy: decode to
//! three-channel RGB, resize to a fixed square, normalize pixel values to
//! [-1, 1], and present as a single-item NCHW batch.

use std::path::Path;

use candle_core::{Device, Tensor};
use image::imageops::FilterType;

use crate::errors::Result;

/// Decode and preprocess an image into a (1, 3, size, size) f32 tensor
pub fn preprocess(path: &Path, size: usize, device: &Device) -> Result<Tensor> {
    let img = image::open(path)?.to_rgb8();
    let resized = image::imageops::resize(&img, size as u32, size as u32, FilterType::Triangle);

    // HWC u8 -> CHW f32, x/127.5 - 1
    let mut data = vec![0f32; 3 * size * size];
    for (x, y, pixel) in resized.enumerate_pixels() {
        let (x, y) = (x as usize, y as usize);
        for c in 0..3 {
            data[c * size * size + y * size + x] = pixel.0[c] as f32 / 127.5 - 1.0;
        }
    }

    let batch = Tensor::from_vec(data, (1, 3, size, size), device)?;
    Ok(batch)
}
