//! # Slider Sweep
//!
//! Walks the trauma slider from 0.0 to 1.5 at three coherence settings and
//! prints the radar scores and badge at each position. Shows the strict
//! `trauma > 0.8` cut and the trauma-first ordering of the classifier.

use spiraltime_core::inputs::SliderSpec;
use spiraltime_core::landscape::Layer;
use spiraltime_core::simulator::Simulator;
use spiraltime_core::state::Severity;
use tracing_subscriber::EnvFilter;

fn badge(s: Severity) -> &'static str {
    match s {
        Severity::Normal => "flow      ",
        Severity::Fragmented => "fragmented",
        Severity::TraumaLoop => "LOOP      ",
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let trauma = SliderSpec::TRAUMA;
    let mut sim = Simulator::new();

    for coherence in [0.3, 1.0, 1.8] {
        sim.set_coherence(coherence);
        println!();
        println!(
            "coherence {}   ({} … {})",
            SliderSpec::COHERENCE.display(coherence),
            trauma.low_label,
            trauma.high_label
        );
        print!("  trauma |");
        for layer in Layer::ALL {
            print!(" {:>5}", &layer.label()[..2]);
        }
        println!(" | state");

        for n in 0..trauma.positions() {
            let frame = sim.set_trauma(trauma.value_at(n));
            print!("  {:>6} |", trauma.display(frame.inputs.trauma()));
            for v in frame.landscape.values() {
                print!(" {v:>5.1}");
            }
            println!(" | {}", badge(frame.state.severity));
        }
    }

    sim.reset();
    println!();
    println!(
        "reset → coherence {}, trauma {}",
        SliderSpec::COHERENCE.display(sim.inputs().coherence()),
        trauma.display(sim.inputs().trauma())
    );
}
