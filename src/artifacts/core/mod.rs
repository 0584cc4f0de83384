//! Shared command-line plumbing
//!
//! - `confirm`: yes/no prompts before destructive operations
//! - [`PagerWriter`]: `Write` adapter feeding long output to the `minus` pager

pub mod confirm;

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter for the minus pager
///
/// `log` and `global-log` write through this when stdout is a terminal; the
/// collected text is shown with `minus::page_all` once the command returns.
/// Bytes that do not form complete UTF-8 yet are held back until the next
/// write or flush.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
    #[new(default)]
    pending: Vec<u8>,
}

impl PagerWriter {
    fn push(&mut self, text: &str) -> io::Result<()> {
        self.pager.push_str(text).map_err(io::Error::other)
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);

        let valid = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            // an incomplete sequence at the end waits for more bytes
            Err(err) if err.error_len().is_none() => err.valid_up_to(),
            Err(_) => self.pending.len(),
        };
        let ready = self.pending.drain(..valid).collect::<Vec<_>>();
        self.push(&String::from_utf8_lossy(&ready))?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            let rest = std::mem::take(&mut self.pending);
            self.push(&String::from_utf8_lossy(&rest))?;
        }

        Ok(())
    }
}
