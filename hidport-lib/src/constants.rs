// Transport constants for the HID inverter link

/// Fixed transmission frame size for commands longer than one frame
pub const FRAME_LEN: usize = 8;

/// Carriage return, terminates every valid device response
pub const TERMINATOR: u8 = 13;

/// Upper bound on bytes requested per read attempt
pub const READ_CHUNK: usize = 256;

/// Default device node for Voltronic-style HID inverters
pub const DEFAULT_PATH: &str = "/dev/hidraw0";
