//! Chart-ready export of a [`SimulationFrame`].
//!
//! The record shapes match what the scatter and radar charts bind to:
//!
//! ```text
//! trajectory point: { "t": 0, "phi": 1.0, "chi": 0.5, "opacity": 0.1 }
//! radar axis:       { "subject": "A1: Physiology", "A": 20.0, "fullMark": 100.0 }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use spiraltime_core::export::ChartExport;
//! use spiraltime_core::simulator::Simulator;
//!
//! let sim = Simulator::new();
//! let json = serde_json::to_string(&ChartExport::from_frame(sim.frame())).unwrap();
//! let back: ChartExport = serde_json::from_str(&json).unwrap();
//! ```
//!
//! Requires the `serde` feature.
//!
//! [`SimulationFrame`]: crate::simulator::SimulationFrame

use crate::simulator::SimulationFrame;
use crate::state::Severity;

/// Current export format version.
pub const EXPORT_VERSION: u16 = 1;

/// A whole frame flattened into chart records.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct ChartExport {
    /// Always [`EXPORT_VERSION`] for newly built exports.
    pub version: u16,
    /// Slider values.
    pub inputs: InputsRecord,
    /// Badge content.
    pub state: StateRecord,
    /// Scatter points in step order.
    pub trajectory: Vec<TrajectoryPoint>,
    /// Radar axes in A1..A5 order.
    pub landscape: Vec<RadarAxis>,
}

/// Slider values at export time.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct InputsRecord {
    /// Coherence slider.
    pub coherence: f64,
    /// Trauma slider.
    pub trauma: f64,
}

/// Badge content.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct StateRecord {
    /// Badge text.
    pub label: String,
    /// Sentence under the badge.
    pub description: String,
    /// Severity class.
    pub severity: Severity,
}

/// One scatter point.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryPoint {
    /// Step index.
    pub t: u32,
    /// Emotional phase φ.
    pub phi: f64,
    /// Identity depth χ.
    pub chi: f64,
    /// Fill opacity, `max(0.1, t / len)`.
    pub opacity: f64,
}

/// One radar axis.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct RadarAxis {
    /// Axis label.
    pub subject: String,
    /// Clamped score.
    #[serde(rename = "A")]
    pub value: f64,
    /// Radius of the radar.
    #[serde(rename = "fullMark")]
    pub full_mark: f64,
}

impl ChartExport {
    /// Flatten `frame` into chart records.
    pub fn from_frame(frame: &SimulationFrame) -> Self {
        let trajectory = frame
            .trajectory
            .with_opacity()
            .map(|(s, opacity)| TrajectoryPoint {
                t: s.step,
                phi: s.phase,
                chi: s.identity,
                opacity,
            })
            .collect();

        let landscape = frame
            .landscape
            .iter()
            .map(|l| RadarAxis {
                subject: l.label().to_owned(),
                value: l.value,
                full_mark: l.max,
            })
            .collect();

        Self {
            version: EXPORT_VERSION,
            inputs: InputsRecord {
                coherence: frame.inputs.coherence(),
                trauma: frame.inputs.trauma(),
            },
            state: StateRecord {
                label: frame.state.label.to_owned(),
                description: frame.state.description.to_owned(),
                severity: frame.state.severity,
            },
            trajectory,
            landscape,
        }
    }

    /// Look up a radar axis by its label.
    pub fn find_axis(&self, subject: &str) -> Option<&RadarAxis> {
        self.landscape.iter().find(|a| a.subject == subject)
    }
}
