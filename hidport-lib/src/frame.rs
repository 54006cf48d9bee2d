use crate::constants::FRAME_LEN;
use bytes::Bytes;

/// Split a fully-encoded command into transmission frames.
///
/// Commands of up to [`FRAME_LEN`] bytes go out as a single unpadded write.
/// Longer commands are sliced into consecutive 8-byte windows; the last
/// window is right-padded with zero bytes so every frame on the wire is
/// exactly 8 bytes long. Frame order equals payload order.
pub fn chunk_command(full_command: &[u8]) -> Vec<Bytes> {
    if full_command.len() <= FRAME_LEN {
        return vec![Bytes::copy_from_slice(full_command)];
    }
    full_command
        .chunks(FRAME_LEN)
        .map(|window| {
            if window.len() == FRAME_LEN {
                Bytes::copy_from_slice(window)
            } else {
                let mut padded = Vec::with_capacity(FRAME_LEN);
                padded.extend_from_slice(window);
                padded.resize(FRAME_LEN, 0);
                Bytes::from(padded)
            }
        })
        .collect()
}
