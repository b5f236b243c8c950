//! Runs the default hyperparameter sweep, reporting to stdout.

use queens_ga::sweep::{run_sweep, SweepGrid};
use std::io;

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_sweep(&SweepGrid::default(), &mut out)?;
    Ok(())
}
