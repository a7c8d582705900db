//! Python FFI bindings via PyO3.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from spiraltime_core import generate, calculate, classify, Simulator
//!
//! points = generate(1.0, 0.2)          # [(step, phase, identity), ...] × 150
//! radar = calculate(1.0, 0.2)          # [("A1: Physiology", 20.0), ...]
//! label, desc, severity = classify(0.9, 1.0)
//!
//! sim = Simulator()
//! sim.set_trauma(1.2)
//! print(sim.severity)                  # "TRAUMA_LOOP"
//! sim.reset()
//! ```
//!
//! The free functions are strict: out-of-range or non-finite inputs raise
//! `ValueError`. The `Simulator` setters snap and clamp like the sliders do.

#![allow(non_snake_case)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::inputs::{InputError, SimulationInputs};
use crate::landscape::calculate as rust_calculate;
use crate::simulator::Simulator as RustSimulator;
use crate::state::{classify as rust_classify, Severity};
use crate::trajectory::generate as rust_generate;

impl From<InputError> for PyErr {
    fn from(e: InputError) -> Self {
        PyValueError::new_err(e.to_string())
    }
}

fn severity_name(s: Severity) -> &'static str {
    match s {
        Severity::Normal => "NORMAL",
        Severity::Fragmented => "FRAGMENTED",
        Severity::TraumaLoop => "TRAUMA_LOOP",
    }
}

fn points(inputs: &SimulationInputs) -> Vec<(u32, f64, f64)> {
    rust_generate(inputs)
        .iter()
        .map(|s| (s.step, s.phase, s.identity))
        .collect()
}

fn radar(inputs: &SimulationInputs) -> Vec<(&'static str, f64)> {
    rust_calculate(inputs)
        .iter()
        .map(|l| (l.label(), l.value))
        .collect()
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Phase portrait samples as `(step, phase, identity)` tuples.
///
/// Raises ValueError if an input is outside its slider domain.
#[pyfunction]
pub fn generate(coherence: f64, trauma: f64) -> PyResult<Vec<(u32, f64, f64)>> {
    let inputs = SimulationInputs::try_new(coherence, trauma)?;
    Ok(points(&inputs))
}

/// DLHR radar scores as `(label, value)` tuples in A1..A5 order.
#[pyfunction]
pub fn calculate(coherence: f64, trauma: f64) -> PyResult<Vec<(&'static str, f64)>> {
    let inputs = SimulationInputs::try_new(coherence, trauma)?;
    Ok(radar(&inputs))
}

/// State badge as `(label, description, severity)`.
#[pyfunction]
pub fn classify(
    coherence: f64,
    trauma: f64,
) -> PyResult<(&'static str, &'static str, &'static str)> {
    let inputs = SimulationInputs::try_new(coherence, trauma)?;
    let c = rust_classify(&inputs);
    Ok((c.label, c.description, severity_name(c.severity)))
}

// ── Simulator ─────────────────────────────────────────────────────────────────

/// Slider state with outputs recomputed on every change.
#[pyclass(name = "Simulator")]
pub struct PySimulator {
    inner: RustSimulator,
}

#[pymethods]
impl PySimulator {
    /// Create a simulator at the default inputs (coherence 1.0, trauma 0.2).
    #[new]
    pub fn new() -> Self {
        Self {
            inner: RustSimulator::new(),
        }
    }

    /// Current coherence.
    #[getter]
    pub fn coherence(&self) -> f64 {
        self.inner.inputs().coherence()
    }

    /// Current trauma.
    #[getter]
    pub fn trauma(&self) -> f64 {
        self.inner.inputs().trauma()
    }

    /// Current severity class name.
    #[getter]
    pub fn severity(&self) -> &'static str {
        severity_name(self.inner.frame().state.severity)
    }

    /// Current badge label.
    #[getter]
    pub fn label(&self) -> &'static str {
        self.inner.frame().state.label
    }

    /// Move the coherence slider (snapped to 0.1, clamped to [0.1, 2.0]).
    pub fn set_coherence(&mut self, value: f64) {
        self.inner.set_coherence(value);
    }

    /// Move the trauma slider (snapped to 0.1, clamped to [0.0, 1.5]).
    pub fn set_trauma(&mut self, value: f64) {
        self.inner.set_trauma(value);
    }

    /// Restore coherence 1.0, trauma 0.2.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Trajectory for the current inputs.
    pub fn trajectory(&self) -> Vec<(u32, f64, f64)> {
        points(&self.inner.inputs())
    }

    /// Radar scores for the current inputs.
    pub fn landscape(&self) -> Vec<(&'static str, f64)> {
        radar(&self.inner.inputs())
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "Simulator(coherence={:.1}, trauma={:.1})",
            self.coherence(),
            self.trauma()
        )
    }
}

// ── Module entry point ────────────────────────────────────────────────────────

/// Spiral-Time simulator bindings.
#[pymodule]
pub fn spiraltime_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate, m)?)?;
    m.add_function(wrap_pyfunction!(calculate, m)?)?;
    m.add_function(wrap_pyfunction!(classify, m)?)?;
    m.add_class::<PySimulator>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("TRAJECTORY_STEPS", crate::trajectory::TRAJECTORY_STEPS)?;
    Ok(())
}
