use std::path::Path;

use field_noise::color::Color;
use glam::{Vec2, Vec3};
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber honoring `RUST_LOG`, defaulting to `info`.
///
/// Calling it more than once is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// An axis-aligned `z = const` slice through a field, rasterized to an image.
#[derive(Clone, Debug)]
pub struct SliceConfig {
    /// Output image size in pixels.
    pub image_size: (u32, u32),
    /// World-space extent of the slice, centered at `center`.
    pub extent: Vec2,
    /// Slice center; its `z` is the slice height.
    pub center: Vec3,
}

impl SliceConfig {
    pub fn new(image_size: (u32, u32), extent: Vec2) -> Self {
        Self {
            image_size,
            extent,
            center: Vec3::ZERO,
        }
    }

    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }

    /// World-space point under the center of pixel `(x, y)`; image rows grow downwards.
    pub fn pixel_to_world(&self, x: u32, y: u32) -> Vec3 {
        let (w, h) = self.image_size;
        let u = (x as f32 + 0.5) / w.max(1) as f32 - 0.5;
        let v = 0.5 - (y as f32 + 0.5) / h.max(1) as f32;
        self.center + Vec3::new(u * self.extent.x, v * self.extent.y, 0.0)
    }
}

/// Quantizes a linear color to 8 bits per channel, clamping to [0, 1].
pub fn color_to_rgb(c: Color) -> [u8; 3] {
    let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    [q(c.r), q(c.g), q(c.b)]
}

/// Maps a flow vector to a color by direction, scaled so `max_len` saturates.
pub fn curl_to_rgb(v: Vec3, max_len: f32) -> [u8; 3] {
    let scaled = if max_len > 0.0 { v / max_len } else { Vec3::ZERO };
    let c = scaled.clamp_length_max(1.0) * 0.5 + Vec3::splat(0.5);
    color_to_rgb(c.into())
}

/// Renders `shade` over the slice and writes a PNG to `path`.
pub fn render_slice_to_png<F, P>(config: &SliceConfig, shade: F, path: P) -> anyhow::Result<()>
where
    F: Fn(Vec3) -> [u8; 3],
    P: AsRef<Path>,
{
    let (w, h) = config.image_size;
    let img = RgbImage::from_fn(w, h, |x, y| Rgb(shade(config.pixel_to_world(x, y))));
    img.save(path.as_ref())?;
    info!("Wrote {}", path.as_ref().display());
    Ok(())
}
