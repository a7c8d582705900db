//! Local state container for the interactive view.
//!
//! [`Simulator`] owns the current [`SimulationInputs`] and the
//! [`SimulationFrame`] computed from them. Every setter recomputes the frame
//! synchronously before returning, so a caller never observes stale output.

use tracing::{debug, trace};

use crate::inputs::{SimulationInputs, SliderSpec};
use crate::landscape::{calculate, EnergyLandscape};
use crate::state::{classify, StateClassification};
use crate::trajectory::{generate, Trajectory};

/// Everything the view renders for one set of inputs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationFrame {
    /// Inputs the frame was computed from.
    pub inputs: SimulationInputs,
    /// Phase portrait samples.
    pub trajectory: Trajectory,
    /// Radar scores.
    pub landscape: EnergyLandscape,
    /// Badge content.
    pub state: StateClassification,
}

impl SimulationFrame {
    /// Compute all three outputs from `inputs`.
    pub fn compute(inputs: SimulationInputs) -> Self {
        Self {
            inputs,
            trajectory: generate(&inputs),
            landscape: calculate(&inputs),
            state: classify(&inputs),
        }
    }
}

/// Slider state plus the frame derived from it.
#[derive(Clone, Debug)]
pub struct Simulator {
    frame: SimulationFrame,
}

impl Simulator {
    /// Start at the default inputs (coherence 1.0, trauma 0.2).
    pub fn new() -> Self {
        Self::with_inputs(SimulationInputs::default())
    }

    /// Start at specific inputs.
    pub fn with_inputs(inputs: SimulationInputs) -> Self {
        Self {
            frame: SimulationFrame::compute(inputs),
        }
    }

    /// Current inputs.
    pub fn inputs(&self) -> SimulationInputs {
        self.frame.inputs
    }

    /// Frame for the current inputs.
    pub fn frame(&self) -> &SimulationFrame {
        &self.frame
    }

    /// Move the coherence slider. The value is snapped and clamped.
    pub fn set_coherence(&mut self, value: f64) -> &SimulationFrame {
        let next = self.frame.inputs.with_coherence(value);
        if next.coherence() != value {
            trace!(requested = value, applied = next.coherence(), "coherence snapped");
        }
        self.apply(next)
    }

    /// Move the trauma slider. The value is snapped and clamped.
    pub fn set_trauma(&mut self, value: f64) -> &SimulationFrame {
        let next = self.frame.inputs.with_trauma(value);
        if next.trauma() != value {
            trace!(requested = value, applied = next.trauma(), "trauma snapped");
        }
        self.apply(next)
    }

    /// Restore both sliders to their defaults.
    pub fn reset(&mut self) -> &SimulationFrame {
        debug!(
            coherence = SliderSpec::COHERENCE.default,
            trauma = SliderSpec::TRAUMA.default,
            "simulator reset"
        );
        self.apply(SimulationInputs::default())
    }

    fn apply(&mut self, inputs: SimulationInputs) -> &SimulationFrame {
        // Recompute from scratch on every change; nothing is carried over.
        self.frame = SimulationFrame::compute(inputs);
        debug!(
            coherence = inputs.coherence(),
            trauma = inputs.trauma(),
            severity = ?self.frame.state.severity,
            "frame recomputed"
        );
        &self.frame
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
