//! Yes/no questions on stdin.

use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdin. Anything but y/yes is a no.
pub fn confirm(question: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    confirm_from(&mut stdin.lock(), question)
}

/// Same as [`confirm`], reading the answer from `input`.
pub fn confirm_from<R: BufRead>(input: &mut R, question: &str) -> io::Result<bool> {
    warning(question);
    print!("Proceed? [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
