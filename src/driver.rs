//! Fixed-count driver that prints the sequence
//!
//! Writes the two seed terms, then the current term after each advance.

use std::io::Write;

use crate::common::Result;
use crate::sequence::Window;

/// Number of advances performed after the seed terms are printed
pub const ADVANCES: usize = 10;

/// Write the sequence to `out`, one decimal term per line
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    tracing::debug!(advances = ADVANCES, "Printing sequence");

    let seed = Window::SEED;
    writeln!(out, "{}", seed.previous)?;
    writeln!(out, "{}", seed.current)?;

    for (step, window) in (1..=ADVANCES).zip(seed.iter()) {
        tracing::trace!(step, previous = window.previous, current = window.current, "Advanced");
        writeln!(out, "{}", window.current)?;
    }

    out.flush()?;
    tracing::debug!("Sequence complete");
    Ok(())
}
