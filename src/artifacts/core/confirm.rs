//! Confirmation before destructive operations
//!
//! `merge` and `reset` rewrite the working tree and ask before doing so. The
//! question is asked through a [`Confirm`] implementation handed to the
//! operation: [`StdinConfirm`] reads the answer from a terminal,
//! [`AssumeYes`] backs the `--yes` flag.

use derive_new::new;
use std::io::{self, BufRead, Write};

pub const QUESTION: &str = "Do you want to continue, Y / N ?";

pub trait Confirm {
    /// Show `warning` and ask whether to go on
    fn confirm(&mut self, warning: &str) -> io::Result<bool>;
}

/// Answers yes without asking
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, warning: &str) -> io::Result<bool> {
        tracing::debug!(warning, "confirmation assumed");
        Ok(true)
    }
}

/// Line-based prompt, repeated until the answer is yes or no
///
/// Accepts `y`, `yes`, `n` and `no` in any case. End of input counts as no.
#[derive(new)]
pub struct StdinConfirm<R, W> {
    input: R,
    output: W,
}

impl StdinConfirm<io::StdinLock<'static>, io::Stdout> {
    pub fn from_stdio() -> Self {
        StdinConfirm::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for StdinConfirm<R, W> {
    fn confirm(&mut self, warning: &str) -> io::Result<bool> {
        writeln!(self.output, "{}", warning)?;

        loop {
            writeln!(self.output, "{}", QUESTION)?;
            self.output.flush()?;

            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                return Ok(false);
            }

            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => continue,
            }
        }
    }
}
