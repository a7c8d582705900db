//! Property sweeps over every stepped slider position.
//!
//! The sliders have 20 × 16 positions, so every claim below is checked
//! exhaustively rather than sampled.

use spiraltime_core::inputs::{SimulationInputs, SliderSpec};
use spiraltime_core::landscape::{calculate, Layer};
use spiraltime_core::state::{classify, Severity};
use spiraltime_core::trajectory::{generate, PlotWindow, TrajectorySample, TRAJECTORY_STEPS};

// ─── helpers ─────────────────────────────────────────────────────────────────

fn coherence_positions() -> impl Iterator<Item = f64> {
    let spec = SliderSpec::COHERENCE;
    (0..spec.positions()).map(move |n| spec.value_at(n))
}

fn trauma_positions() -> impl Iterator<Item = f64> {
    let spec = SliderSpec::TRAUMA;
    (0..spec.positions()).map(move |n| spec.value_at(n))
}

// ─── trajectory ──────────────────────────────────────────────────────────────

#[test]
fn test_every_trajectory_has_150_ordered_steps() {
    for inputs in SimulationInputs::grid() {
        let traj = generate(&inputs);
        assert_eq!(traj.len(), TRAJECTORY_STEPS, "{inputs:?}");
        let steps: Vec<u32> = traj.iter().map(|s| s.step).collect();
        let expected: Vec<u32> = (0..150).collect();
        assert_eq!(steps, expected, "{inputs:?}");
    }
}

#[test]
fn test_trajectory_bit_reproducible() {
    for inputs in SimulationInputs::grid() {
        let a = generate(&inputs);
        let b = generate(&inputs);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.phase.to_bits(), y.phase.to_bits());
            assert_eq!(x.identity.to_bits(), y.identity.to_bits());
        }
    }
}

#[test]
fn test_default_first_sample() {
    let traj = generate(&SimulationInputs::default());
    assert_eq!(
        traj.samples()[0],
        TrajectorySample { step: 0, phase: 1.0, identity: 0.5 }
    );
}

#[test]
fn test_phase_bounded_by_formula() {
    // |drive| ≤ 1 and |noise · 0.3| ≤ 0.3 · (2 − coherence) ≤ 0.57.
    for inputs in SimulationInputs::grid() {
        let bound = 1.0 + 0.3 * (2.0 - inputs.coherence()) + 1e-12;
        for s in &generate(&inputs) {
            assert!(s.phase.abs() <= bound, "{inputs:?} step {}: {}", s.step, s.phase);
        }
    }
}

#[test]
fn test_clipping_never_drops_samples() {
    let window = PlotWindow::default();
    let traj = generate(&SimulationInputs::new(0.1, 1.5));
    let clipped: Vec<_> = traj.iter().map(|s| window.clip(s)).collect();
    assert_eq!(clipped.len(), TRAJECTORY_STEPS);
    assert!(clipped.iter().all(|s| window.contains(s)));
}

// ─── landscape ───────────────────────────────────────────────────────────────

#[test]
fn test_landscape_always_in_range() {
    for inputs in SimulationInputs::grid() {
        let land = calculate(&inputs);
        assert_eq!(land.layers().len(), 5);
        for layer in &land {
            assert!(
                (0.0..=100.0).contains(&layer.value),
                "{inputs:?} {}: {}",
                layer.label(),
                layer.value
            );
        }
        assert_eq!(land.get(Layer::Physiology), 20.0);
    }
}

#[test]
fn test_emotion_monotone_in_coherence() {
    for trm in trauma_positions() {
        let mut prev = f64::NEG_INFINITY;
        for coh in coherence_positions() {
            let a3 = calculate(&SimulationInputs::new(coh, trm)).get(Layer::Emotion);
            assert!(a3 >= prev, "A3 dropped at coherence {coh}, trauma {trm}");
            prev = a3;
        }
    }
}

#[test]
fn test_safety_monotone_in_trauma() {
    for coh in coherence_positions() {
        let mut prev = f64::NEG_INFINITY;
        for trm in trauma_positions() {
            let a2 = calculate(&SimulationInputs::new(coh, trm)).get(Layer::Safety);
            assert!(a2 >= prev, "A2 dropped at trauma {trm}, coherence {coh}");
            prev = a2;
        }
    }
}

#[test]
fn test_default_landscape_scenario() {
    let land = calculate(&SimulationInputs::new(1.0, 0.2));
    assert_eq!(land.values(), [20.0, 30.0, 40.0, 44.0, 52.0]);
}

// ─── state ───────────────────────────────────────────────────────────────────

#[test]
fn test_documented_classifications() {
    let cases: &[(f64, f64, &str)] = &[
        (0.9, 1.0, "Trauma Loop Detected"),
        (1.0, 0.3, "Coherent Flow State"),
        (0.4, 0.2, "Fragmented / Low Coherence"),
    ];
    for &(coh, trm, label) in cases {
        let got = classify(&SimulationInputs::new(coh, trm)).label;
        assert_eq!(got, label, "coh={coh} trm={trm}");
    }
}

#[test]
fn test_classification_partitions_grid() {
    for inputs in SimulationInputs::grid() {
        let expected = if inputs.trauma() > 0.8 {
            Severity::TraumaLoop
        } else if inputs.coherence() < 0.5 {
            Severity::Fragmented
        } else {
            Severity::Normal
        };
        assert_eq!(classify(&inputs).severity, expected, "{inputs:?}");
    }
}
