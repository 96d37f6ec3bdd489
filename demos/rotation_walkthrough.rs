//! Walks the rotation panel through a short lesson: RY in steps, then a
//! switch to RX that restarts the angle at 0.

use bloch_panels::{
    AsciiRenderer, PanelError, Renderer, RotationFamily, RotationPanel, RotationPanelState,
};

fn main() -> Result<(), PanelError> {
    println!("--- bloch_panels: rotation walkthrough ---");

    let panel = RotationPanel::default();
    let renderer = AsciiRenderer::new();
    let mut state = RotationPanelState::default();

    // (family, slider value the learner picks)
    let moves = [
        (RotationFamily::Ry, 0.0),
        (RotationFamily::Ry, 0.25),
        (RotationFamily::Ry, 0.5),
        (RotationFamily::Rx, 0.5), // switching family discards 0.5
        (RotationFamily::Rx, 1.0),
    ];

    for (family, requested) in moves {
        let update = panel.update(&state, family, requested);
        println!("\n> {} with θ/π = {}", family, requested);
        if update.reset {
            println!("  family changed, slider moved to {}", update.slider_value);
        }
        print!("{}", renderer.render(&update.output.figure));
        state = update.state;
    }

    println!("\nFinal panel state: {:?}", state);
    Ok(())
}
