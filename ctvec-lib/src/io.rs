//! The runtime boundary: rendering vectors to an output sink.
//!
//! Everything else in this crate evaluates during translation; these
//! functions are the lowered, runtime-visible surface.

use std::io::Write;

use anyhow::Context;
use anyhow::Result;

use crate::vector::Vector;

/// Write the elements of `v`, space separated, followed by a newline.
///
/// The empty vector produces just the newline. Sink errors are propagated.
pub fn write_to<const N: usize>(v: &Vector<N>, sink: &mut impl Write) -> Result<()> {
    writeln!(sink, "{v}").context("writing vector to sink")?;
    Ok(())
}

/// Print the elements of `v`, space separated, to standard output.
///
/// `print(vector![])` emits a bare newline.
pub fn print<const N: usize>(v: Vector<N>) {
    println!("{v}");
}
