//! Line input shared by the game, the deck menu and the startup prompt.

use std::io::{self, BufRead, Write};

use crate::error::GameError;
use crate::game::Seat;

/// Reads one line, newline included.
///
/// Bytes that are not valid UTF-8 are replaced with `U+FFFD`, so a garbled
/// line reaches the caller as text that no prompt accepts. Returns `None` at
/// end of input.
///
/// # Errors
///
/// Returns an error if the underlying reader fails.
pub fn read_line<R: BufRead + ?Sized>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Asks `Play first?` until the answer is `yes` or `no`, in any case.
///
/// Returns the seat that moves first, or `None` if input ends before a
/// valid answer.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn prompt_first<R, W>(input: &mut R, out: &mut W) -> Result<Option<Seat>, GameError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    loop {
        writeln!(out, "Play first?")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().to_lowercase().as_str() {
            "yes" => return Ok(Some(Seat::Player)),
            "no" => return Ok(Some(Seat::Computer)),
            _ => {}
        }
    }
}
