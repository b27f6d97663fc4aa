//! `tracing` subscriber that writes formatted events to the browser console.

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Buffers one formatted event and emits it as a single console line.
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let line = String::from_utf8_lossy(&self.buf);
            leptos::logging::console_log(line.trim_end());
            self.buf.clear();
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buf: Vec::new() }
    }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init() {
    let directive = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_env_filter(EnvFilter::new(directive))
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init();
    if let Err(err) = result {
        leptos::logging::warn!("tracing subscriber already installed: {err}");
    }
}
