use std::io;
use std::thread;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::command::{Command, ResponseStatus, TransportResult};
use crate::config::{PortConfig, PortDto, Protocol};
use crate::constants::{READ_CHUNK, TERMINATOR};
use crate::device::{DeviceHandle, DeviceOpener, HidrawOpener};
use crate::error::PortError;
use crate::frame::chunk_command;
use crate::pacing::Pacing;

/// Transport driver for HID-attached inverters and chargers.
///
/// Each [`send_and_receive`](UsbPort::send_and_receive) call opens its own
/// handle, uses it exclusively, and closes it before returning; nothing is
/// shared across calls, so concurrent calls on clones of the configuration
/// never contend on a handle. Execution is synchronous: pacing blocks the
/// calling thread and there is no cancellation primitive.
pub struct UsbPort<O: DeviceOpener = HidrawOpener> {
    path: String,
    protocol: Protocol,
    pacing: Pacing,
    opener: O,
}

#[cfg(unix)]
impl UsbPort {
    /// Port over a real hidraw node with default pacing.
    pub fn new(path: impl Into<String>, protocol: Protocol) -> Self {
        Self::with_opener(path, protocol, Pacing::default(), HidrawOpener)
    }

    /// Build a port from a powermon-style configuration section.
    pub fn from_config(config: &PortConfig) -> Self {
        debug!(path = %config.path, protocol = %config.protocol, "building usb port");
        Self::new(config.path.clone(), config.protocol)
    }
}

impl<O: DeviceOpener> UsbPort<O> {
    /// Port over a custom opener and pacing, the seam the tests use.
    pub fn with_opener(
        path: impl Into<String>,
        protocol: Protocol,
        pacing: Pacing,
        opener: O,
    ) -> Self {
        Self {
            path: path.into(),
            protocol,
            pacing,
            opener,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Descriptor for config dumps and status surfaces.
    pub fn to_dto(&self) -> PortDto {
        PortDto {
            kind: "usb",
            path: self.path.clone(),
            protocol: self.protocol,
        }
    }

    /// Send one command and collect the terminated response.
    ///
    /// Opens a fresh handle, writes the command in paced frames, then polls
    /// until the CR terminator shows up or the attempt budget runs out. The
    /// handle closes on every exit path. Open and write failures come back
    /// through the result's error flag with nothing read; transient read
    /// errors are masked; an exhausted budget yields
    /// [`ResponseStatus::Incomplete`] with whatever bytes arrived.
    pub fn send_and_receive(&self, command: &Command) -> TransportResult {
        let result = TransportResult::new(command.code());

        let mut handle = match self.opener.open(&self.path) {
            Ok(handle) => handle,
            Err(source) => {
                let err = PortError::Open {
                    path: self.path.clone(),
                    source,
                };
                warn!("{err}");
                return result.fail(err.to_string());
            }
        };

        if let Err(err) = self.write_frames(&mut handle, command.full_command()) {
            warn!("{err}");
            return result.fail(err.to_string());
        }

        thread::sleep(self.pacing.settle_delay);
        let (raw_response, status) = self.poll_response(&mut handle);
        debug!(response = %hex::encode(&raw_response), %status, "usb response");

        TransportResult {
            raw_response,
            status,
            ..result
        }
    }

    fn write_frames(&self, handle: &mut O::Handle, full_command: &[u8]) -> Result<(), PortError> {
        debug!(len = full_command.len(), "sending command");
        for (frames_written, frame) in chunk_command(full_command).into_iter().enumerate() {
            debug!(frame = %hex::encode(&frame), "sending frame");
            thread::sleep(self.pacing.frame_delay);
            let written = handle.write(&frame).map_err(|source| PortError::Write {
                frames_written,
                source,
            })?;
            // A frame landing partially corrupts the command; fail like a write error.
            if written != frame.len() {
                return Err(PortError::Write {
                    frames_written,
                    source: io::Error::new(
                        io::ErrorKind::WriteZero,
                        format!("short write: {written} of {} bytes", frame.len()),
                    ),
                });
            }
        }
        Ok(())
    }

    fn poll_response(&self, handle: &mut O::Handle) -> (Bytes, ResponseStatus) {
        let mut accumulated = Vec::new();
        let mut chunk = [0u8; READ_CHUNK];
        for attempt in 0..self.pacing.max_read_attempts {
            thread::sleep(self.pacing.read_interval);
            match handle.read(&mut chunk) {
                Ok(n) => accumulated.extend_from_slice(&chunk[..n]),
                // Resource busy and friends: no bytes this attempt, keep polling.
                Err(err) => debug!(attempt, "usb read error: {err}"),
            }
            if let Some(pos) = accumulated.iter().position(|&b| b == TERMINATOR) {
                accumulated.truncate(pos + 1);
                return (Bytes::from(accumulated), ResponseStatus::Complete);
            }
        }
        (Bytes::from(accumulated), ResponseStatus::Incomplete)
    }
}
