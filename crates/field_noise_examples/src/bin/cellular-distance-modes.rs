use field_noise::prelude::*;
use field_noise_examples::{color_to_rgb, init_tracing, render_slice_to_png, SliceConfig};
use glam::{Vec2, Vec3};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let noise = LatticeNoise::new(7);
    let slice = SliceConfig::new((384, 384), Vec2::new(6.0, 6.0)).with_center(Vec3::new(0.0, 0.0, 0.25));

    // One image per combiner, Manhattan metric to show the diamond-shaped cells.
    let modes = [
        ("f1", DistanceMode::F1),
        ("f2-f1", DistanceMode::F2MinusF1),
        ("blend", DistanceMode::BlendF1F2),
        ("far-contrast", DistanceMode::FarContrast),
        ("triple-blend", DistanceMode::TripleBlend),
        ("normalized", DistanceMode::Normalized),
    ];
    for (name, mode) in modes {
        let config = CellularConfig::default()
            .with_distance_mode(mode)
            .with_distance_exponent(1.0)
            .with_gap_size(0.0);
        let eval = CellularEvaluator::try_new(config, &noise)?;
        let out = format!("cellular-distance-modes-{name}.png");
        render_slice_to_png(&slice, |p| color_to_rgb(eval.eval(p)), out)?;
    }

    Ok(())
}
