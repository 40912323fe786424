use std::io::{self, BufRead, Write};
use std::str::FromStr;

use colored::Colorize;

/// Asks `Select the <what> for which you'd like to make a challenge [default]:`
/// until the answer parses; an empty answer takes the default.
pub fn ask<T, R, W>(input: &mut R, output: &mut W, what: &str, default: T) -> io::Result<T>
where
    T: FromStr + std::fmt::Display + Copy,
    R: BufRead,
    W: Write,
{
    loop {
        write!(
            output,
            "Select the {} for which you'd like to make a challenge [{}]: ",
            what.green(),
            default
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(default);
        }
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Error: '{}' is not a valid {}", answer, what)?,
        }
    }
}
