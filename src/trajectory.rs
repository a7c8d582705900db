//! Phase/identity trajectory generator.
//!
//! Produces the points of the phase portrait (φ against χ). Every sample is a
//! closed-form function of its own index and the two inputs:
//!
//! ```text
//! drive    = cos(2 i dt)
//! noise    = sin(13 i) · cos(7 i) · (2 − coherence)
//! phase    = drive + 0.3 · noise
//! identity = 0.5 · phase + sin(i dt) · 3.5 · trauma
//! ```
//!
//! There is no recurrence between samples and no random source, so two calls
//! with equal inputs produce bit-identical trajectories.
//!
//! # Invariants
//!
//! - A trajectory always holds exactly [`TRAJECTORY_STEPS`] samples, steps `0..150` in order.
//! - Samples outside the [`PlotWindow`] are kept; clipping is a rendering concern.

use heapless::Vec;

use crate::inputs::SimulationInputs;

/// Samples per trajectory.
pub const TRAJECTORY_STEPS: usize = 150;

/// Pseudo-time increment between samples.
pub const DT: f64 = 0.1;

/// Weight of the deterministic noise term in the phase.
const NOISE_GAIN: f64 = 0.3;

/// Identity pull per unit of trauma.
const TRAUMA_PULL: f64 = 3.5;

/// Minimum point opacity; the earliest samples never vanish entirely.
const OPACITY_FLOOR: f64 = 0.1;

// ─── TrajectorySample ────────────────────────────────────────────────────────

/// One point of the phase portrait.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrajectorySample {
    /// Sequential pseudo-time index.
    pub step: u32,
    /// Emotional phase φ (x axis).
    pub phase: f64,
    /// Identity depth χ (y axis).
    pub identity: f64,
}

/// Evaluate the closed form at step `i`.
pub fn sample_at(i: u32, inputs: &SimulationInputs) -> TrajectorySample {
    let t = f64::from(i);
    let drive = (t * DT * 2.0).cos();
    let noise = (t * 13.0).sin() * (t * 7.0).cos() * (2.0 - inputs.coherence());
    let phase = drive + noise * NOISE_GAIN;

    let trauma_pull = inputs.trauma() * TRAUMA_PULL;
    let identity = phase * 0.5 + (t * DT).sin() * trauma_pull;

    TrajectorySample { step: i, phase, identity }
}

// ─── Trajectory ──────────────────────────────────────────────────────────────

/// A full, ordered trajectory of [`TRAJECTORY_STEPS`] samples.
///
/// Stored inline; generating one never touches the heap.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trajectory {
    samples: Vec<TrajectorySample, TRAJECTORY_STEPS>,
}

impl Trajectory {
    /// Samples in step order.
    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    /// Iterate samples in step order.
    pub fn iter(&self) -> core::slice::Iter<'_, TrajectorySample> {
        self.samples.iter()
    }

    /// Number of samples (always [`TRAJECTORY_STEPS`]).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false for a generated trajectory.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `step`, if in range.
    pub fn get(&self, step: usize) -> Option<&TrajectorySample> {
        self.samples.get(step)
    }

    /// Samples paired with their rendering opacity.
    pub fn with_opacity(&self) -> impl Iterator<Item = (&TrajectorySample, f64)> + '_ {
        let len = self.samples.len();
        self.samples
            .iter()
            .enumerate()
            .map(move |(i, s)| (s, fill_opacity(i, len)))
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectorySample;
    type IntoIter = core::slice::Iter<'a, TrajectorySample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Generate the trajectory for `inputs`.
pub fn generate(inputs: &SimulationInputs) -> Trajectory {
    let samples = (0..TRAJECTORY_STEPS as u32)
        .map(|i| sample_at(i, inputs))
        .collect();
    Trajectory { samples }
}

/// Point opacity for sample `index` of `len`: `max(0.1, index / len)`.
///
/// Non-decreasing in `index`, so later points read as "newer".
pub fn fill_opacity(index: usize, len: usize) -> f64 {
    if len == 0 {
        return OPACITY_FLOOR;
    }
    (index as f64 / len as f64).max(OPACITY_FLOOR)
}

// ─── PlotWindow ──────────────────────────────────────────────────────────────

/// Fixed axis ranges of the phase portrait.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotWindow {
    /// x axis (phase) lower bound.
    pub phase_min: f64,
    /// x axis (phase) upper bound.
    pub phase_max: f64,
    /// y axis (identity) lower bound.
    pub identity_min: f64,
    /// y axis (identity) upper bound.
    pub identity_max: f64,
}

impl PlotWindow {
    /// Construct the standard window: φ ∈ [−2.5, 2.5], χ ∈ [−5, 5].
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the sample falls inside the window (edges inclusive).
    pub fn contains(&self, s: &TrajectorySample) -> bool {
        (self.phase_min..=self.phase_max).contains(&s.phase)
            && (self.identity_min..=self.identity_max).contains(&s.identity)
    }

    /// Clamp a sample's coordinates onto the window edge.
    pub fn clip(&self, s: &TrajectorySample) -> TrajectorySample {
        TrajectorySample {
            step: s.step,
            phase: s.phase.clamp(self.phase_min, self.phase_max),
            identity: s.identity.clamp(self.identity_min, self.identity_max),
        }
    }

    /// Map a sample to normalised `[0, 1]²` plot coordinates after clipping.
    ///
    /// `(0, 0)` is the bottom-left corner.
    pub fn normalise(&self, s: &TrajectorySample) -> (f64, f64) {
        let c = self.clip(s);
        (
            (c.phase - self.phase_min) / (self.phase_max - self.phase_min),
            (c.identity - self.identity_min) / (self.identity_max - self.identity_min),
        )
    }
}

impl Default for PlotWindow {
    fn default() -> Self {
        Self {
            phase_min: -2.5,
            phase_max: 2.5,
            identity_min: -5.0,
            identity_max: 5.0,
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
