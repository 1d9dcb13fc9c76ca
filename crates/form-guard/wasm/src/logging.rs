//! `tracing` output on the browser console

use std::io::{self, Write};

use tracing::Level;
use web_sys::console;

/// Buffers one formatted event and prints it on drop
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let line = String::from_utf8_lossy(&self.buf);
            console::log_1(&line.trim_end().into());
            self.buf.clear();
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Route core `tracing` events (submission outcomes, upper-cased fields)
/// to `console.log`. Does nothing if a global subscriber is already set.
pub fn init() {
    // no clock on wasm32-unknown-unknown
    let subscriber = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .with_max_level(Level::DEBUG)
        .without_time()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        console::debug_1(&"form-guard: tracing subscriber already set".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_buffers_until_flush() {
        let mut writer = ConsoleWriter::default();
        writer.write_all(b"DEBUG form_guard_core::required: ").unwrap();
        writer.write_all(b"submission blocked\n").unwrap();
        assert_eq!(writer.buf.len(), 52);
        // flushing calls into the browser console; drop the buffer instead
        writer.buf.clear();
    }
}
