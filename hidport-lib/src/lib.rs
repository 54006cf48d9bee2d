pub mod command;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod frame;
pub mod pacing;
pub mod port;

// Re-export the main transport types for easy access
pub use command::{Command, ResponseStatus, TransportResult};
pub use error::PortError;
pub use pacing::Pacing;
pub use port::UsbPort;
