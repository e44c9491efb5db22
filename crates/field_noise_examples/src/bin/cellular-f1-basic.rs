use field_noise::prelude::*;
use field_noise_examples::{color_to_rgb, init_tracing, render_slice_to_png, SliceConfig};
use glam::{Vec2, Vec3};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let noise = LatticeNoise::new(1337);

    // Plain F1 distance, no gaps: dark at feature points, bright towards cell edges.
    let config = CellularConfig::default().with_gap_size(0.0);
    let eval = CellularEvaluator::try_new(config, &noise)?;

    let slice = SliceConfig::new((512, 512), Vec2::new(8.0, 8.0)).with_center(Vec3::new(0.0, 0.0, 0.5));
    render_slice_to_png(&slice, |p| color_to_rgb(eval.eval(p)), "cellular-f1-basic.png")?;

    Ok(())
}
