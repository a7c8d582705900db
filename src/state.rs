//! Qualitative state classification for the badge beside the controls.
//!
//! Decision order (first match wins):
//!
//! ```text
//! trauma    > 0.8  → TraumaLoop
//! coherence < 0.5  → Fragmented
//! otherwise        → Normal
//! ```
//!
//! The trauma check runs first, so high trauma with low coherence is always
//! a trauma loop.

use crate::inputs::SimulationInputs;

// ─── StateThresholds ─────────────────────────────────────────────────────────

/// Configurable cut-offs for [`classify_with`].
///
/// Both comparisons are strict: trauma exactly at `trauma_loop_above` is not a
/// loop, coherence exactly at `fragmented_below` is not fragmented.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateThresholds {
    /// Trauma above this locks the identity axis.
    pub trauma_loop_above: f64,
    /// Coherence below this fragments the emotional phase.
    pub fragmented_below: f64,
}

impl StateThresholds {
    /// Construct the standard thresholds.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for StateThresholds {
    fn default() -> Self {
        Self {
            trauma_loop_above: 0.8,
            fragmented_below: 0.5,
        }
    }
}

// ─── Severity ────────────────────────────────────────────────────────────────

/// Severity class of a [`StateClassification`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Severity {
    /// Coherent flow.
    Normal,
    /// Low coherence, unstable phase.
    Fragmented,
    /// Identity locked in a limit cycle.
    TraumaLoop,
}

impl Severity {
    /// Badge label text.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Normal => "Coherent Flow State",
            Severity::Fragmented => "Fragmented / Low Coherence",
            Severity::TraumaLoop => "Trauma Loop Detected",
        }
    }

    /// Sentence shown under the badge.
    pub fn description(&self) -> &'static str {
        match self {
            Severity::Normal => {
                "Optimal spiral dynamics; strong integration between emotion and identity."
            }
            Severity::Fragmented => {
                "Emotional phase is unstable; system is struggling to self-regulate."
            }
            Severity::TraumaLoop => {
                "Identity axis is locked in a limit cycle; meaning formation is inhibited."
            }
        }
    }

    /// Badge background colour.
    pub fn badge_tint(&self) -> [u8; 3] {
        match self {
            Severity::Normal => [220, 252, 231],     // green-100
            Severity::Fragmented => [254, 243, 199], // amber-100
            Severity::TraumaLoop => [254, 226, 226], // red-100
        }
    }

    /// Badge text colour.
    pub fn text_tint(&self) -> [u8; 3] {
        match self {
            Severity::Normal => [22, 101, 52],
            Severity::Fragmented => [146, 64, 14],
            Severity::TraumaLoop => [153, 27, 27],
        }
    }
}

// ─── StateClassification ─────────────────────────────────────────────────────

/// Derived badge content for the current inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StateClassification {
    /// Badge text.
    pub label: &'static str,
    /// Explanation under the badge.
    pub description: &'static str,
    /// Class driving the badge colour.
    pub severity: Severity,
}

impl From<Severity> for StateClassification {
    fn from(severity: Severity) -> Self {
        Self {
            label: severity.label(),
            description: severity.description(),
            severity,
        }
    }
}

/// Classify with the default thresholds.
pub fn classify(inputs: &SimulationInputs) -> StateClassification {
    classify_with(inputs, &StateThresholds::default())
}

/// Classify against custom thresholds, trauma check first.
pub fn classify_with(inputs: &SimulationInputs, th: &StateThresholds) -> StateClassification {
    let severity = if inputs.trauma() > th.trauma_loop_above {
        Severity::TraumaLoop
    } else if inputs.coherence() < th.fragmented_below {
        Severity::Fragmented
    } else {
        Severity::Normal
    };
    severity.into()
}

// ─── Tests ──────────────────────────────────────────────────────────────────
