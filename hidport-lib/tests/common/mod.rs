//! Shared mock device plumbing for the transport tests

// Shared across multiple test files; not every item is used in every binary
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use hidport_lib::config::Protocol;
use hidport_lib::device::{DeviceHandle, DeviceOpener};
use hidport_lib::{Pacing, UsbPort};

/// Scripted stand-in for a hidraw handle: pops one canned read outcome per
/// attempt and records every successful write.
pub struct ScriptedHandle {
    reads: VecDeque<io::Result<Vec<u8>>>,
    fail_write_at: Option<usize>,
    short_write_at: Option<usize>,
    writes: Arc<Mutex<Vec<Vec<u8>>>>,
    reads_performed: Arc<Mutex<usize>>,
}

impl DeviceHandle for ScriptedHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut writes = self.writes.lock().unwrap();
        if self.fail_write_at == Some(writes.len()) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "simulated write failure"));
        }
        if self.short_write_at == Some(writes.len()) {
            let accepted = buf.len() / 2;
            writes.push(buf[..accepted].to_vec());
            return Ok(accepted);
        }
        writes.push(buf.to_vec());
        Ok(buf.len())
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        *self.reads_performed.lock().unwrap() += 1;
        match self.reads.pop_front() {
            Some(Ok(bytes)) => {
                buf[..bytes.len()].copy_from_slice(&bytes);
                Ok(bytes.len())
            }
            Some(Err(err)) => Err(err),
            None => Ok(0),
        }
    }
}

/// Opener handing out a single scripted handle, or failing outright.
///
/// Write and read logs live behind `Arc` so they survive the handle being
/// moved into the port call.
pub struct ScriptedOpener {
    open_error: Option<io::ErrorKind>,
    reads: Mutex<VecDeque<io::Result<Vec<u8>>>>,
    fail_write_at: Option<usize>,
    short_write_at: Option<usize>,
    writes: Arc<Mutex<Vec<Vec<u8>>>>,
    reads_performed: Arc<Mutex<usize>>,
}

impl ScriptedOpener {
    /// Device that answers each read attempt with the next scripted outcome,
    /// then reads empty.
    pub fn replying(replies: Vec<io::Result<Vec<u8>>>) -> Self {
        Self {
            open_error: None,
            reads: Mutex::new(replies.into()),
            fail_write_at: None,
            short_write_at: None,
            writes: Arc::new(Mutex::new(Vec::new())),
            reads_performed: Arc::new(Mutex::new(0)),
        }
    }

    /// Device whose open always fails with the given kind.
    pub fn failing_open(kind: io::ErrorKind) -> Self {
        Self {
            open_error: Some(kind),
            ..Self::replying(Vec::new())
        }
    }

    /// Fail the write at the given zero-based frame index.
    pub fn fail_write_at(mut self, index: usize) -> Self {
        self.fail_write_at = Some(index);
        self
    }

    /// Accept only half the bytes of the write at the given frame index.
    pub fn short_write_at(mut self, index: usize) -> Self {
        self.short_write_at = Some(index);
        self
    }

    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.writes.lock().unwrap().clone()
    }

    pub fn reads_performed(&self) -> usize {
        *self.reads_performed.lock().unwrap()
    }
}

impl DeviceOpener for &ScriptedOpener {
    type Handle = ScriptedHandle;

    fn open(&self, _path: &str) -> io::Result<ScriptedHandle> {
        if let Some(kind) = self.open_error {
            return Err(io::Error::new(kind, "simulated open failure"));
        }
        Ok(ScriptedHandle {
            reads: std::mem::take(&mut *self.reads.lock().unwrap()),
            fail_write_at: self.fail_write_at,
            short_write_at: self.short_write_at,
            writes: Arc::clone(&self.writes),
            reads_performed: Arc::clone(&self.reads_performed),
        })
    }
}

/// Port over a scripted opener with zeroed pacing.
pub fn scripted_port(opener: &ScriptedOpener) -> UsbPort<&ScriptedOpener> {
    init_tracing();
    UsbPort::with_opener("/dev/hidraw-test", Protocol::Pi30, Pacing::immediate(), opener)
}

/// Route transport logs through a per-test fmt subscriber, filtered by
/// `RUST_LOG`. Safe to call from every test; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
