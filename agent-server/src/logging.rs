//! Tracing setup for the server: stdout always, plus a plain-text file when `LOG_FILE` is set.

use std::io::{self, Write};

use crate::config::Error;

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info,agent_server=debug";

/// Longest CSI sequence held back before it is flushed through as ordinary bytes.
const MAX_PENDING_ESCAPE: usize = 64;

/// Writer that drops ANSI CSI escape sequences (e.g. `ESC [ 0 m`) so file logs are plain text.
///
/// Sequences may be split across `write` calls; the unfinished prefix is held in `pending`.
/// An `ESC` not followed by `[` is passed through unchanged.
pub struct StripAnsiWriter<W> {
    inner: W,
    pending: Vec<u8>,
}

impl<W: Write> StripAnsiWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            pending: Vec::with_capacity(16),
        }
    }

    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.inner)
    }

    fn feed(&mut self, b: u8) -> io::Result<()> {
        const ESC: u8 = 0x1b;
        match self.pending.len() {
            0 if b == ESC => self.pending.push(b),
            0 => self.inner.write_all(&[b])?,
            1 if b == b'[' => self.pending.push(b),
            1 => {
                self.pending.push(b);
                self.release()?;
            }
            _ if (0x40..=0x7e).contains(&b) => self.pending.clear(),
            _ if b.is_ascii_digit() || matches!(b, b';' | b'?' | b':') => {
                self.pending.push(b);
                if self.pending.len() > MAX_PENDING_ESCAPE {
                    self.release()?;
                }
            }
            _ => {
                self.release()?;
                self.feed(b)?;
            }
        }
        Ok(())
    }

    /// Writes the held-back bytes through unchanged.
    fn release(&mut self) -> io::Result<()> {
        self.inner.write_all(&self.pending)?;
        self.pending.clear();
        Ok(())
    }
}

impl<W: Write> Write for StripAnsiWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut rest = buf;
        while !rest.is_empty() {
            if self.pending.is_empty() {
                // Fast path: copy everything up to the next ESC in one write.
                let end = rest.iter().position(|&b| b == 0x1b).unwrap_or(rest.len());
                self.inner.write_all(&rest[..end])?;
                rest = &rest[end..];
                if rest.is_empty() {
                    break;
                }
            }
            self.feed(rest[0])?;
            rest = &rest[1..];
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            self.release()?;
        }
        self.inner.flush()
    }
}

/// Initializes tracing: always to stdout; if env `LOG_FILE` is set, also to that file (append).
///
/// `RUST_LOG` overrides the default filter. File output is plain text (ANSI stripped).
pub fn init_tracing() -> Result<(), Error> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::Layer;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_filter(filter.clone());
    let registry = tracing_subscriber::registry().with(stdout_layer);

    match std::env::var("LOG_FILE") {
        Ok(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Mutex::new(StripAnsiWriter::new(file)))
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_filter(filter);
            registry.with(file_layer).try_init()?;
            tracing::info!(path = %path, "logging to file");
        }
        Err(_) => registry.try_init()?,
    }
    Ok(())
}
