//! Interactive input directory prompt.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const FIRST_PROMPT: &str = "Enter the CSV directory path: ";
const RETRY_PROMPT: &str = "Enter a valid CSV directory path: ";

/// Returns `initial` when it names an existing directory, otherwise asks on
/// `output` and reads answers from `input` until one does.
///
/// # Errors
///
/// Fails if `input` reaches end of file before a usable answer.
pub fn resolve_input_dir<R: BufRead, W: Write>(
    initial: Option<&Path>,
    input: &mut R,
    output: &mut W,
) -> io::Result<PathBuf> {
    let mut prompt = FIRST_PROMPT;
    if let Some(path) = initial {
        if path.is_dir() {
            return Ok(path.to_path_buf());
        }
        prompt = RETRY_PROMPT;
    }

    loop {
        output.write_all(prompt.as_bytes())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no input directory given",
            ));
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        if !answer.trim().is_empty() && Path::new(answer).is_dir() {
            return Ok(PathBuf::from(answer));
        }
        prompt = RETRY_PROMPT;
    }
}
