/// Example: Print a single frame to stdout without taking over the terminal
///
/// Usage: cargo run --example snapshot -- [angle_x angle_y angle_z [distance]]

use anyhow::{bail, Context};
use std::env;
use wire3d_core::{RenderConfig, RenderState, RotationState};

fn main() -> anyhow::Result<()> {
    let args = env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<f64>()
                .with_context(|| format!("Not a number: {arg}"))
        })
        .collect::<anyhow::Result<Vec<f64>>>()?;

    let config = RenderConfig::default();
    config.validate()?;

    let mut state = config.initial_state();
    match args.as_slice() {
        [] => {}
        [x, y, z, rest @ ..] if rest.len() <= 1 => {
            if let Some(&distance) = rest.first() {
                state = RenderState::new(distance, config.limits());
            }
            state.rotation = RotationState::new(*x, *y, *z);
        }
        _ => bail!(
            "expected three angles and an optional distance, got {} numbers",
            args.len()
        ),
    }

    let grid = config.frame_builder().build(&state);
    println!("{grid}");
    eprintln!(
        "angles ({}, {}, {}), viewer distance {:.1}, {} cells drawn",
        state.rotation.x,
        state.rotation.y,
        state.rotation.z,
        state.viewer_distance(),
        grid.lit_cells()
    );
    Ok(())
}
