use field_noise::prelude::*;
use field_noise_examples::{color_to_rgb, init_tracing, render_slice_to_png, SliceConfig};
use glam::{Vec2, Vec3};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let noise = LatticeNoise::new(2024);

    // Even-width mortar lines between cells, colored cell interiors.
    let palette = Palette::new(
        Color::new(0.85, 0.55, 0.35),
        Color::new(0.45, 0.2, 0.12),
        Color::new(0.9, 0.9, 0.85),
    );
    let config = CellularConfig::default()
        .with_variant(CellularVariant::Normalized)
        .with_distance_mode(DistanceMode::BlendF1F2)
        .with_gap_size(0.06)
        .with_palette(palette);
    let eval = CellularEvaluator::try_new(config, &noise)?;

    let slice = SliceConfig::new((512, 512), Vec2::new(8.0, 8.0)).with_center(Vec3::new(0.0, 0.0, 1.5));
    render_slice_to_png(&slice, |p| color_to_rgb(eval.eval(p)), "cellular-normalized-gap.png")?;

    Ok(())
}
