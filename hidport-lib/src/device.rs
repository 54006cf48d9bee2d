use std::fs::File;
use std::io::{self, Read, Write};

/// One open device handle, owned exclusively by a single transport call.
///
/// Closing is the implementor's `Drop`, which runs on every exit path of
/// the call once a handle was obtained.
pub trait DeviceHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// Opens device handles for a path.
///
/// The production opener talks to hidraw nodes; tests substitute a
/// scripted implementation.
pub trait DeviceOpener {
    type Handle: DeviceHandle;

    fn open(&self, path: &str) -> io::Result<Self::Handle>;
}

/// Opens `/dev/hidraw*`-style character devices read-write, non-blocking.
#[derive(Debug, Clone, Copy, Default)]
pub struct HidrawOpener;

#[cfg(unix)]
impl DeviceOpener for HidrawOpener {
    type Handle = File;

    fn open(&self, path: &str) -> io::Result<File> {
        use std::os::unix::fs::OpenOptionsExt;

        std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)
    }
}

impl DeviceHandle for File {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Write::write(self, buf)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }
}
