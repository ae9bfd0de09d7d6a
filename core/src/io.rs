// ## Normalized I/O: canonical sources, sinks, and chunked reads

use std::io::{Cursor, Read, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::types::StreamError;

/// Canonical input abstraction
pub enum InputSource {
    Reader(Box<dyn Read + Send>),
    File(PathBuf),
    Memory(Vec<u8>),
}

/// Canonical output abstraction
pub enum OutputSink {
    Writer(Box<dyn Write + Send>),
    File(PathBuf),
    Memory,
}

/// Normalize input source into a boxed reader
pub fn open_input(src: InputSource) -> Result<Box<dyn Read + Send>, StreamError> {
    let reader: Box<dyn Read + Send> = match src {
        InputSource::Reader(r) => r,
        InputSource::File(p) => Box::new(std::fs::File::open(p)?),
        InputSource::Memory(b) => Box::new(Cursor::new(b)),
    };
    Ok(reader)
}

/// Normalize output sink into a boxed writer.
/// `with_buf` captures Memory output in a shared buffer for tests and
/// benchmarks. A File sink truncates an existing destination.
pub fn open_output(
    sink: OutputSink,
    with_buf: Option<bool>,
) -> Result<(Box<dyn Write + Send>, Option<Arc<Mutex<Vec<u8>>>>), StreamError> {
    match sink {
        OutputSink::Writer(w) => Ok((w, None)),
        OutputSink::File(p) => Ok((Box::new(std::fs::File::create(p)?), None)),
        OutputSink::Memory => match with_buf {
            Some(true) => {
                let buf = Arc::new(Mutex::new(Vec::new()));
                let writer = SharedBufferWriter { buf: buf.clone() };
                Ok((Box::new(writer), Some(buf)))
            }
            _ => {
                // Without concurrent access a plain Cursor<Vec<u8>> is enough.
                let cursor = Cursor::new(Vec::new());
                Ok((Box::new(cursor), None))
            }
        },
    }
}

pub struct SharedBufferWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for SharedBufferWriter {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        let mut guard = self.buf.lock().unwrap();
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Fill `buf` from `r`, tolerating short reads; returns bytes filled.
/// Returns less than `buf.len()` only at end-of-stream, so a short fill
/// is a reliable end-of-input signal for the codec loops.
pub fn read_chunk<R: Read>(r: &mut R, buf: &mut [u8]) -> Result<usize, StreamError> {
    let mut off = 0;

    while off < buf.len() {
        let n = r.read(&mut buf[off..])?;
        if n == 0 {
            break;
        }
        off += n;
    }

    Ok(off)
}
