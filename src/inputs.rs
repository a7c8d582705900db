//! Simulation inputs: the two bounded, stepped sliders.
//!
//! - [`SliderSpec`]: domain, resolution and labels for one control.
//! - [`SimulationInputs`]: the `(coherence, trauma)` pair every core function consumes.
//! - [`InputError`]: returned only by the strict constructor.
//!
//! # Invariants
//!
//! - A constructed [`SimulationInputs`] always lies inside both slider domains.
//! - Lenient paths snap to the nearest tick and clamp; they never fail.

use thiserror::Error;

// ─── SliderSpec ──────────────────────────────────────────────────────────────

/// Domain and presentation metadata for one input control.
///
/// Values are stepped in ticks of `1 / resolution`. Quantization divides an
/// integer tick count by `resolution`, so `0.3` comes out as the nearest
/// double to 0.3 rather than `3 × 0.1`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SliderSpec {
    /// Human-readable control name.
    pub name: &'static str,
    /// Lowest accepted value.
    pub min: f64,
    /// Highest accepted value.
    pub max: f64,
    /// Value restored by reset.
    pub default: f64,
    /// Ticks per unit (10 for a 0.1 step).
    pub resolution: u32,
    /// Label under the low end of the control.
    pub low_label: &'static str,
    /// Label under the high end of the control.
    pub high_label: &'static str,
}

impl SliderSpec {
    /// Emotional coherence (λ_φ): [0.1, 2.0], step 0.1, default 1.0.
    pub const COHERENCE: SliderSpec = SliderSpec {
        name: "Emotional Coherence (λ_φ)",
        min: 0.1,
        max: 2.0,
        default: 1.0,
        resolution: 10,
        low_label: "Chaos",
        high_label: "Resonance",
    };

    /// Trauma / identity lock (λ_χ): [0.0, 1.5], step 0.1, default 0.2.
    pub const TRAUMA: SliderSpec = SliderSpec {
        name: "Trauma / Identity Lock (λ_χ)",
        min: 0.0,
        max: 1.5,
        default: 0.2,
        resolution: 10,
        low_label: "Fluid Identity",
        high_label: "Trauma Loop",
    };

    /// Step size between adjacent ticks.
    pub fn step(&self) -> f64 {
        1.0 / f64::from(self.resolution)
    }

    /// Number of distinct positions the control can take.
    pub fn positions(&self) -> u32 {
        let res = f64::from(self.resolution);
        ((self.max * res).round() - (self.min * res).round()) as u32 + 1
    }

    /// Value at tick position `n` counted from `min`, clamped to `max`.
    pub fn value_at(&self, n: u32) -> f64 {
        let res = f64::from(self.resolution);
        let ticks = (self.min * res).round() + f64::from(n);
        (ticks / res).min(self.max)
    }

    /// Whether `value` is finite and inside `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Snap `value` to the nearest tick and clamp it into the domain.
    ///
    /// Non-finite input falls back to `default`.
    pub fn quantize(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default;
        }
        let res = f64::from(self.resolution);
        ((value * res).round() / res).clamp(self.min, self.max)
    }

    /// One-decimal readout shown beside the control.
    pub fn display(&self, value: f64) -> String {
        format!("{value:.1}")
    }
}

// ─── InputError ──────────────────────────────────────────────────────────────

/// Rejection from [`SimulationInputs::try_new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// NaN or infinite value.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Which input was rejected.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Finite but outside the slider domain.
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        /// Which input was rejected.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Domain lower bound.
        min: f64,
        /// Domain upper bound.
        max: f64,
    },
}

fn check(field: &'static str, spec: &SliderSpec, value: f64) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::NonFinite { field, value });
    }
    if !spec.contains(value) {
        return Err(InputError::OutOfRange {
            field,
            value,
            min: spec.min,
            max: spec.max,
        });
    }
    Ok(value)
}

// ─── SimulationInputs ────────────────────────────────────────────────────────

/// The two scalars that drive every output.
///
/// Fields are private so the domain invariant cannot be bypassed; use
/// [`new`](Self::new) (lenient) or [`try_new`](Self::try_new) (strict).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationInputs {
    coherence: f64,
    trauma: f64,
}

impl SimulationInputs {
    /// Build inputs, snapping each value to its slider's grid and clamping.
    pub fn new(coherence: f64, trauma: f64) -> Self {
        Self {
            coherence: SliderSpec::COHERENCE.quantize(coherence),
            trauma: SliderSpec::TRAUMA.quantize(trauma),
        }
    }

    /// Build inputs, rejecting anything outside the slider domains.
    ///
    /// In-range values are kept as given (not snapped), so callers can
    /// evaluate off-grid points.
    pub fn try_new(coherence: f64, trauma: f64) -> Result<Self, InputError> {
        Ok(Self {
            coherence: check("coherence", &SliderSpec::COHERENCE, coherence)?,
            trauma: check("trauma", &SliderSpec::TRAUMA, trauma)?,
        })
    }

    /// Emotional coherence in [0.1, 2.0].
    pub fn coherence(&self) -> f64 {
        self.coherence
    }

    /// Trauma in [0.0, 1.5].
    pub fn trauma(&self) -> f64 {
        self.trauma
    }

    /// Copy with a new coherence value (snapped and clamped).
    pub fn with_coherence(self, coherence: f64) -> Self {
        Self {
            coherence: SliderSpec::COHERENCE.quantize(coherence),
            ..self
        }
    }

    /// Copy with a new trauma value (snapped and clamped).
    pub fn with_trauma(self, trauma: f64) -> Self {
        Self {
            trauma: SliderSpec::TRAUMA.quantize(trauma),
            ..self
        }
    }

    /// Every stepped slider combination, coherence-major.
    pub fn grid() -> impl Iterator<Item = SimulationInputs> {
        let coh = SliderSpec::COHERENCE;
        let trm = SliderSpec::TRAUMA;
        (0..coh.positions()).flat_map(move |c| {
            (0..trm.positions()).map(move |t| SimulationInputs {
                coherence: coh.value_at(c),
                trauma: trm.value_at(t),
            })
        })
    }
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            coherence: SliderSpec::COHERENCE.default,
            trauma: SliderSpec::TRAUMA.default,
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_exact() {
        let inputs = SimulationInputs::default();
        assert_eq!(inputs.coherence(), 1.0);
        assert_eq!(inputs.trauma(), 0.2);
    }

    #[test]
    fn test_quantize_snaps_to_tenths() {
        assert_eq!(SliderSpec::COHERENCE.quantize(0.34), 0.3);
        assert_eq!(SliderSpec::COHERENCE.quantize(1.26), 1.3);
        assert_eq!(SliderSpec::TRAUMA.quantize(0.849), 0.8);
        assert_eq!(SliderSpec::TRAUMA.quantize(0.2), 0.2);
    }

    #[test]
    fn test_quantize_clamps_to_domain() {
        assert_eq!(SliderSpec::COHERENCE.quantize(0.0), 0.1);
        assert_eq!(SliderSpec::COHERENCE.quantize(-3.0), 0.1);
        assert_eq!(SliderSpec::COHERENCE.quantize(7.5), 2.0);
        assert_eq!(SliderSpec::TRAUMA.quantize(-0.4), 0.0);
        assert_eq!(SliderSpec::TRAUMA.quantize(1.9), 1.5);
    }

    #[test]
    fn test_quantize_non_finite_falls_back_to_default() {
        assert_eq!(SliderSpec::COHERENCE.quantize(f64::NAN), 1.0);
        assert_eq!(SliderSpec::TRAUMA.quantize(f64::INFINITY), 0.2);
        assert_eq!(SliderSpec::TRAUMA.quantize(f64::NEG_INFINITY), 0.2);
    }

    #[test]
    fn test_positions() {
        assert_eq!(SliderSpec::COHERENCE.positions(), 20);
        assert_eq!(SliderSpec::TRAUMA.positions(), 16);
        assert_eq!(SliderSpec::COHERENCE.value_at(0), 0.1);
        assert_eq!(SliderSpec::COHERENCE.value_at(19), 2.0);
        assert_eq!(SliderSpec::TRAUMA.value_at(15), 1.5);
    }

    #[test]
    fn test_step_size() {
        assert!((SliderSpec::COHERENCE.step() - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_one_decimal() {
        assert_eq!(SliderSpec::COHERENCE.display(1.0), "1.0");
        assert_eq!(SliderSpec::TRAUMA.display(0.30000000000000004), "0.3");
    }

    #[test]
    fn test_new_is_lenient() {
        let inputs = SimulationInputs::new(5.0, -1.0);
        assert_eq!(inputs.coherence(), 2.0);
        assert_eq!(inputs.trauma(), 0.0);
    }

    #[test]
    fn test_try_new_accepts_in_range() {
        let inputs = SimulationInputs::try_new(0.45, 0.81).expect("in range");
        assert_eq!(inputs.coherence(), 0.45);
        assert_eq!(inputs.trauma(), 0.81);
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        let err = SimulationInputs::try_new(0.05, 0.2).unwrap_err();
        assert_eq!(
            err,
            InputError::OutOfRange { field: "coherence", value: 0.05, min: 0.1, max: 2.0 }
        );
        let err = SimulationInputs::try_new(1.0, 1.6).unwrap_err();
        assert!(matches!(err, InputError::OutOfRange { field: "trauma", .. }));
    }

    #[test]
    fn test_try_new_rejects_nan() {
        let err = SimulationInputs::try_new(f64::NAN, 0.2).unwrap_err();
        assert!(matches!(err, InputError::NonFinite { field: "coherence", .. }));
        assert_eq!(err.to_string(), "coherence must be finite, got NaN");
    }

    #[test]
    fn test_with_setters_keep_other_field() {
        let inputs = SimulationInputs::default().with_trauma(1.04);
        assert_eq!(inputs.coherence(), 1.0);
        assert_eq!(inputs.trauma(), 1.0);
        let inputs = inputs.with_coherence(0.42);
        assert_eq!(inputs.coherence(), 0.4);
        assert_eq!(inputs.trauma(), 1.0);
    }

    #[test]
    fn test_grid_covers_every_position() {
        let all: Vec<_> = SimulationInputs::grid().collect();
        assert_eq!(all.len(), 20 * 16);
        assert!(all.iter().all(|i| SliderSpec::COHERENCE.contains(i.coherence())));
        assert!(all.iter().all(|i| SliderSpec::TRAUMA.contains(i.trauma())));
        assert_eq!(all[0], SimulationInputs::new(0.1, 0.0));
        assert_eq!(all[all.len() - 1], SimulationInputs::new(2.0, 1.5));
    }
}
