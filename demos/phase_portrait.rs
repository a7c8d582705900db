//! # Spiral-Time Phase Portrait
//!
//! Renders three slider settings in the terminal: the φ/χ scatter plot
//! inside the fixed plot window, the DLHR radar as bars, and the state badge.
//!
//! Run with `RUST_LOG=debug cargo run --example phase_portrait` to see the
//! simulator's recompute events.

use spiraltime_core::simulator::{SimulationFrame, Simulator};
use spiraltime_core::trajectory::PlotWindow;
use tracing_subscriber::EnvFilter;

const COLS: usize = 61;
const ROWS: usize = 21;

// ── Display helpers ───────────────────────────────────────────────────────────

fn bar(v: f64) -> String {
    let filled = (v / 5.0).round() as usize;
    let empty = 20usize.saturating_sub(filled);
    format!("[{}{}] {:5.1}", "█".repeat(filled), "░".repeat(empty), v)
}

/// Later samples get denser glyphs, like the chart's rising opacity.
fn glyph(opacity: f64) -> char {
    if opacity < 0.34 {
        '·'
    } else if opacity < 0.67 {
        '•'
    } else {
        '●'
    }
}

fn portrait(frame: &SimulationFrame, window: &PlotWindow) {
    let mut grid = vec![vec![' '; COLS]; ROWS];
    let mid_col = COLS / 2;
    let mid_row = ROWS / 2;
    for (r, row) in grid.iter_mut().enumerate() {
        row[mid_col] = if r == mid_row { '┼' } else { '│' };
    }
    for (c, cell) in grid[mid_row].iter_mut().enumerate() {
        if c != mid_col {
            *cell = '─';
        }
    }

    let mut clipped = 0;
    for (s, opacity) in frame.trajectory.with_opacity() {
        if !window.contains(s) {
            clipped += 1;
        }
        let (x, y) = window.normalise(s);
        let col = (x * (COLS - 1) as f64).round() as usize;
        let row = ROWS - 1 - (y * (ROWS - 1) as f64).round() as usize;
        grid[row][col] = glyph(opacity);
    }

    println!("  χ {:+.1}", window.identity_max);
    for row in &grid {
        println!("    {}", row.iter().collect::<String>());
    }
    println!(
        "  χ {:+.1}   φ ∈ [{:+.1}, {:+.1}]   clipped: {}",
        window.identity_min, window.phase_min, window.phase_max, clipped
    );
}

fn show(title: &str, frame: &SimulationFrame) {
    let window = PlotWindow::default();
    println!();
    println!("══ {title} ══");
    println!(
        "coherence {:.1}   trauma {:.1}",
        frame.inputs.coherence(),
        frame.inputs.trauma()
    );
    portrait(frame, &window);
    println!();
    for layer in &frame.landscape {
        println!("  {:<16} {}", layer.label(), bar(layer.value));
    }
    println!();
    println!("  [{}]  {}", frame.state.label, frame.state.description);
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut sim = Simulator::new();
    show("Defaults", sim.frame());

    sim.set_coherence(0.3);
    show("Low coherence", sim.frame());

    sim.set_coherence(1.2);
    sim.set_trauma(1.3);
    show("Trauma loop", sim.frame());

    sim.reset();
    show("After reset", sim.frame());
}
