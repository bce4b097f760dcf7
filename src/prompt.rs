use std::{
    io::{self, BufRead, Write},
    ops::RangeInclusive,
};
use tracing::debug;

/// Shows `message` until the user answers with a number inside `range`
///
/// Answers that are not numbers, or fall outside the range, are ignored and
/// the question is asked again. Running out of input is an error.
pub fn ask<R, W>(input: &mut R, output: &mut W, range: RangeInclusive<i64>, message: &str) -> io::Result<i64>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "\n{}", message)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a valid number was given",
            ));
        }
        match line.trim().parse::<i64>() {
            Ok(n) if range.contains(&n) => return Ok(n),
            _ => debug!(answer = line.trim(), "rejected answer"),
        }
    }
}
