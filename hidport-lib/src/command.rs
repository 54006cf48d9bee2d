use bytes::Bytes;
use strum_macros::Display;

/// A fully-encoded command ready for transmission.
///
/// Encoding (CRC, terminator, protocol framing) is the caller's concern;
/// the transport chunks and ships `full_command` as-is. Immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    code: String,
    full_command: Bytes,
}

impl Command {
    pub fn new(code: impl Into<String>, full_command: impl Into<Bytes>) -> Self {
        Self {
            code: code.into(),
            full_command: full_command.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn full_command(&self) -> &Bytes {
        &self.full_command
    }
}

/// Whether the accumulated response ended at a terminator or at the
/// attempt budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResponseStatus {
    /// The response ends with the terminator byte.
    Complete,
    /// The attempt budget ran out first; `raw_response` holds whatever
    /// arrived, untruncated.
    Incomplete,
}

/// Outcome of one transport attempt. Produced exactly once per call and
/// carries no live resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResult {
    pub command_code: String,
    pub raw_response: Bytes,
    pub status: ResponseStatus,
    pub error: bool,
    pub error_messages: Vec<String>,
}

impl TransportResult {
    pub(crate) fn new(command_code: &str) -> Self {
        Self {
            command_code: command_code.to_string(),
            raw_response: Bytes::new(),
            status: ResponseStatus::Incomplete,
            error: false,
            error_messages: Vec::new(),
        }
    }

    pub(crate) fn fail(mut self, message: String) -> Self {
        self.error = true;
        self.error_messages.push(message);
        self
    }

    /// True when the response ends with the terminator byte.
    pub fn is_complete(&self) -> bool {
        self.status == ResponseStatus::Complete
    }
}
