//! Prints where each fixed gate sends |0⟩, |+⟩ and |r⟩, plus a prepared
//! state sampled in the Z basis.

use bloch_panels::{FixedGate, FixedGatePanel, FractionalPanel, PanelError, Simulator};

fn main() -> Result<(), PanelError> {
    println!("--- bloch_panels: fixed gates on the reference states ---");

    let panel = FixedGatePanel::default();
    println!("{:<6}{:>24}{:>24}{:>24}", "gate", "|0⟩", "|+⟩", "|r⟩");
    for gate in FixedGate::ALL {
        let out = panel.update(gate);
        let cells: Vec<String> = out.evolved.iter().map(ToString::to_string).collect();
        println!("{:<6}{:>24}{:>24}{:>24}", gate, cells[0], cells[1], cells[2]);
    }

    // A state a third of the way down from the north pole
    let prepared = FractionalPanel::default().with_circuit_diagram(true).update(1.0 / 3.0, 0.25)?;
    println!();
    for line in &prepared.output.lines {
        println!("{}", line);
    }
    let counts = Simulator::new().sample(&prepared.state, 1000, Some(7));
    println!("{}", counts);
    Ok(())
}
