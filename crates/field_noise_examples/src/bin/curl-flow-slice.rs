use field_noise::prelude::*;
use field_noise_examples::{curl_to_rgb, init_tracing, render_slice_to_png, SliceConfig};
use glam::{Vec2, Vec3};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let noise = LatticeNoise::new(7);
    let slice = SliceConfig::new((512, 512), Vec2::new(4.0, 4.0));

    // A few frames of the space-time field, plus the fractal backend.
    for frame in 0..3 {
        let time = frame as f32 * 0.5;
        let config = CurlConfig::default()
            .with_octaves(3)
            .with_time(time)
            .with_scale(Vec3::splat(0.75));
        let eval = CurlEvaluator::try_new(config, &noise)?;
        let out = format!("curl-flow-slice-t{frame}.png");
        render_slice_to_png(&slice, |p| curl_to_rgb(eval.eval(p), 8.0), out)?;
    }

    let config = CurlConfig::default()
        .with_octaves(4)
        .with_backend(CurlBackend::Fractal { gain: 0.6 });
    let eval = CurlEvaluator::try_new(config, &noise)?;
    render_slice_to_png(&slice, |p| curl_to_rgb(eval.eval(p), 8.0), "curl-flow-slice-fractal.png")?;

    Ok(())
}
