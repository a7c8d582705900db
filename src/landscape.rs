//! DLHR energy landscape: five clamped layer scores for the radar chart.
//!
//! | Layer | Raw score |
//! |---|---|
//! | A1 Physiology | `20` |
//! | A2 Safety | `20 + 50 · trauma` |
//! | A3 Emotion | `40 · coherence` |
//! | A4 Cognition | `50 · coherence − 30 · trauma` |
//! | A5 Meaning | `60 · coherence − 40 · trauma` |
//!
//! Each raw score is clamped into `[0, SCORE_MAX]` on its own.

use crate::inputs::SimulationInputs;

/// Upper bound of every layer score and the radar's radius.
pub const SCORE_MAX: f64 = 100.0;

/// Number of layers.
pub const LAYER_COUNT: usize = 5;

/// `min(max(x, 0), 100)`.
pub fn clamp_score(x: f64) -> f64 {
    x.max(0.0).min(SCORE_MAX)
}

// ─── Layer ───────────────────────────────────────────────────────────────────

/// One of the five DLHR layers, in radar axis order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layer {
    /// A1: bodily baseline, independent of the inputs.
    Physiology,
    /// A2: safety need, raised by trauma.
    Safety,
    /// A3: emotion, raised by coherence.
    Emotion,
    /// A4: cognition, raised by coherence and drained by trauma.
    Cognition,
    /// A5: meaning, raised by coherence and drained hardest by trauma.
    Meaning,
}

impl Layer {
    /// All layers, A1 first.
    pub const ALL: [Layer; LAYER_COUNT] = [
        Layer::Physiology,
        Layer::Safety,
        Layer::Emotion,
        Layer::Cognition,
        Layer::Meaning,
    ];

    /// Axis label, e.g. `"A3: Emotion"`.
    pub fn label(&self) -> &'static str {
        match self {
            Layer::Physiology => "A1: Physiology",
            Layer::Safety => "A2: Safety",
            Layer::Emotion => "A3: Emotion",
            Layer::Cognition => "A4: Cognition",
            Layer::Meaning => "A5: Meaning",
        }
    }

    /// Zero-based axis position.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Unclamped score for this layer.
    pub fn raw_score(&self, inputs: &SimulationInputs) -> f64 {
        let coh = inputs.coherence();
        let trm = inputs.trauma();
        match self {
            Layer::Physiology => 20.0,
            Layer::Safety => 20.0 + trm * 50.0,
            Layer::Emotion => 40.0 * coh,
            Layer::Cognition => 50.0 * coh - trm * 30.0,
            Layer::Meaning => 60.0 * coh - trm * 40.0,
        }
    }
}

// ─── EnergyLayer / EnergyLandscape ──────────────────────────────────────────

/// One radar axis value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyLayer {
    /// Which layer.
    pub layer: Layer,
    /// Clamped score in [0, 100].
    pub value: f64,
    /// Radar radius (always [`SCORE_MAX`]).
    pub max: f64,
}

impl EnergyLayer {
    /// Axis label of this entry.
    pub fn label(&self) -> &'static str {
        self.layer.label()
    }
}

/// The five layer scores in A1..A5 order.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyLandscape {
    layers: [EnergyLayer; LAYER_COUNT],
}

impl EnergyLandscape {
    /// Layers in axis order.
    pub fn layers(&self) -> &[EnergyLayer; LAYER_COUNT] {
        &self.layers
    }

    /// Iterate in axis order.
    pub fn iter(&self) -> core::slice::Iter<'_, EnergyLayer> {
        self.layers.iter()
    }

    /// Score of one layer.
    pub fn get(&self, layer: Layer) -> f64 {
        self.layers[layer.index()].value
    }

    /// Just the scores, A1 first.
    pub fn values(&self) -> [f64; LAYER_COUNT] {
        self.layers.map(|l| l.value)
    }
}

impl<'a> IntoIterator for &'a EnergyLandscape {
    type Item = &'a EnergyLayer;
    type IntoIter = core::slice::Iter<'a, EnergyLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}

/// Compute the landscape for `inputs`.
pub fn calculate(inputs: &SimulationInputs) -> EnergyLandscape {
    EnergyLandscape {
        layers: Layer::ALL.map(|layer| EnergyLayer {
            layer,
            value: clamp_score(layer.raw_score(inputs)),
            max: SCORE_MAX,
        }),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_scenario() {
        let land = calculate(&SimulationInputs::default());
        assert_eq!(land.values(), [20.0, 30.0, 40.0, 44.0, 52.0]);
    }

    #[test]
    fn test_labels_in_order() {
        let land = calculate(&SimulationInputs::default());
        let labels: Vec<_> = land.iter().map(|l| l.label()).collect();
        assert_eq!(
            labels,
            ["A1: Physiology", "A2: Safety", "A3: Emotion", "A4: Cognition", "A5: Meaning"]
        );
        for (i, layer) in Layer::ALL.iter().enumerate() {
            assert_eq!(layer.index(), i);
        }
    }

    #[test]
    fn test_max_is_always_hundred() {
        let land = calculate(&SimulationInputs::new(2.0, 1.5));
        assert!(land.iter().all(|l| l.max == 100.0));
    }

    #[test]
    fn test_clamp_low() {
        // coherence 0.1, trauma 1.5: A4 = 5 - 45, A5 = 6 - 60
        let land = calculate(&SimulationInputs::new(0.1, 1.5));
        assert_eq!(land.get(Layer::Cognition), 0.0);
        assert_eq!(land.get(Layer::Meaning), 0.0);
        assert_eq!(land.get(Layer::Safety), 95.0);
    }

    #[test]
    fn test_clamp_high() {
        // coherence 2.0, trauma 0: A5 = 120, A4 = 100, A3 = 80
        let land = calculate(&SimulationInputs::new(2.0, 0.0));
        assert_eq!(land.get(Layer::Meaning), 100.0);
        assert_eq!(land.get(Layer::Cognition), 100.0);
        assert_eq!(land.get(Layer::Emotion), 80.0);
    }

    #[test]
    fn test_raw_score_unclamped() {
        let inputs = SimulationInputs::new(2.0, 0.0);
        assert_eq!(Layer::Meaning.raw_score(&inputs), 120.0);
        let inputs = SimulationInputs::new(0.1, 1.5);
        assert!(Layer::Meaning.raw_score(&inputs) < 0.0);
    }

    #[test]
    fn test_clamp_score_bounds() {
        assert_eq!(clamp_score(-0.5), 0.0);
        assert_eq!(clamp_score(100.5), 100.0);
        assert_eq!(clamp_score(42.0), 42.0);
    }

    #[test]
    fn test_physiology_constant() {
        for inputs in SimulationInputs::grid() {
            assert_eq!(calculate(&inputs).get(Layer::Physiology), 20.0);
        }
    }
}
