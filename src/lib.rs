//! # spiraltime-core
//!
//! The computational core of the Spiral-Time Simulator: a phase portrait of
//! emotion (φ) against identity (χ), the DLHR energy landscape, and a
//! qualitative state badge. All three are driven by the same two sliders.
//!
//! ---
//!
//! Everything here is a pure function of two scalars. There is no integrator,
//! no random source and no hidden state. The "noise" in the trajectory is a
//! fixed trigonometric product, so output is bit-reproducible for equal inputs.
//!
//! ## The pipeline
//!
//! ```text
//!                    ┌──▶ trajectory::generate  ──▶ phase portrait (150 samples)
//! SimulationInputs ──┼──▶ landscape::calculate  ──▶ radar (A1..A5, 0–100)
//!   (coherence,      └──▶ state::classify       ──▶ badge
//!    trauma)
//!         ▲
//!     Simulator (slider state, reset) ──▶ SimulationFrame ──▶ export::ChartExport
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`inputs`] | [`SimulationInputs`], [`SliderSpec`] | Bounded, stepped slider values |
//! | [`trajectory`] | [`Trajectory`], [`TrajectorySample`], [`PlotWindow`] | Closed-form φ/χ samples |
//! | [`landscape`] | [`EnergyLandscape`], [`Layer`] | Clamped five-layer radar scores |
//! | [`state`] | [`StateClassification`], [`Severity`] | First-match threshold classifier |
//! | [`simulator`] | [`Simulator`], [`SimulationFrame`] | Slider state with synchronous recompute |
//! | `export` | `ChartExport` | Chart-shaped JSON records (requires `serde` feature) |
//!
//! ## Quick start
//!
//! ```rust
//! use spiraltime_core::{Simulator, Severity};
//!
//! let mut sim = Simulator::new();
//! assert_eq!(sim.frame().landscape.values(), [20.0, 30.0, 40.0, 44.0, 52.0]);
//!
//! let frame = sim.set_trauma(1.0);
//! assert_eq!(frame.state.severity, Severity::TraumaLoop);
//!
//! sim.reset();
//! assert_eq!(sim.inputs().trauma(), 0.2);
//! ```
//!
//! ## Features
//!
//! - `serde`: serialisation for all value types and the `export` module.
//! - `python-ffi`: PyO3 bindings.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod inputs;
pub mod landscape;
pub mod simulator;
pub mod state;
pub mod trajectory;

#[cfg(feature = "serde")]
pub mod export;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use inputs::{InputError, SimulationInputs, SliderSpec};
pub use landscape::{calculate, EnergyLandscape, EnergyLayer, Layer};
pub use simulator::{SimulationFrame, Simulator};
pub use state::{classify, classify_with, Severity, StateClassification, StateThresholds};
pub use trajectory::{generate, PlotWindow, Trajectory, TrajectorySample};
