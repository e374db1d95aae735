use std::io::{self, BufRead, Write};

pub const CONFIRM_PROMPT: &str = "Build these indexes now? [Y/n]: ";

/// Interprets one trimmed answer. `None` means the answer was not understood.
pub fn parse_answer(answer: &str) -> Option<bool> {
    match answer {
        "y" | "Y" | "" => Some(true),
        "n" | "N" => Some(false),
        _ => None,
    }
}

/// Asks until a recognised answer arrives.
///
/// Reaching end of input counts as a decline.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    let mut line = String::new();
    loop {
        write!(out, "{}", CONFIRM_PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            tracing::warn!("Input closed before confirmation; not building indexes");
            return Ok(false);
        }

        if let Some(answer) = parse_answer(line.trim()) {
            return Ok(answer);
        }
        tracing::debug!("Unrecognised answer {:?}, asking again", line.trim());
    }
}
