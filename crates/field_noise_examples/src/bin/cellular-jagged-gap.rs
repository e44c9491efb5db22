use field_noise::prelude::*;
use field_noise_examples::{color_to_rgb, init_tracing, render_slice_to_png, SliceConfig};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(2025);
    let noise = LatticeNoise::from_rng(&mut rng);

    let slice = SliceConfig::new((512, 512), Vec2::new(8.0, 8.0));

    // Same cells with straight and jagged signed gaps side by side.
    for (name, jagged) in [("straight", false), ("jagged", true)] {
        let config = CellularConfig::default()
            .with_variant(CellularVariant::SignedGap { jagged })
            .with_octaves(2)
            .with_gap_size(0.1);
        let eval = CellularEvaluator::try_new(config, &noise)?;

        let points: Vec<Vec3> = (0..4096)
            .map(|i| Vec3::new((i % 64) as f32 / 8.0, (i / 64) as f32 / 8.0, 0.0))
            .collect();
        tracing::info!(
            "{name}: border fraction {:.3}",
            border_fraction(&eval, &points)
        );

        let out = format!("cellular-{name}-gap.png");
        render_slice_to_png(&slice, |p| color_to_rgb(eval.eval(p)), out)?;
    }

    Ok(())
}
