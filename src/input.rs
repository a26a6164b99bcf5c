//! Interactive prompt loops that re-ask until input parses.
//!
//! Generic over the reader and writer so tests can script a session
//! through in-memory buffers.

use std::io::{self, BufRead, Write};

/// Writes a prompt and reads one line, trimmed and lowercased.
///
/// # Errors
///
/// Returns [`io::ErrorKind::UnexpectedEof`] when the input stream is
/// closed; there is no other way out of a prompt.
pub fn read_token<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<String> {
    writeln!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed mid-prompt",
        ));
    }
    Ok(line.trim().to_lowercase())
}

/// Prompts until the supplied parser accepts the token. There is no
/// retry bound; an invalid answer just asks again with `reprompt`.
pub fn prompt_until_valid<R, W, T>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    reprompt: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
{
    let mut token = read_token(input, out, prompt)?;
    loop {
        if let Some(value) = parse(&token) {
            return Ok(value);
        }
        token = read_token(input, out, reprompt)?;
    }
}
