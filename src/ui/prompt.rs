use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdout and read the answer from `input`.
/// Anything other than y/yes (including end of input) means no.
pub fn ask_confirmation_from<R: BufRead>(input: &mut R, prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    match input.read_line(&mut s) {
        Ok(0) | Err(_) => false,
        Ok(_) => matches!(s.trim().to_lowercase().as_str(), "y" | "yes"),
    }
}

/// Ask a yes/no confirmation from the user on stdin.
pub fn ask_confirmation(prompt: &str) -> bool {
    let stdin = io::stdin();
    let mut lock = stdin.lock();
    ask_confirmation_from(&mut lock, prompt)
}
