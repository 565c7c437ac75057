use std::time::Duration;

/// Board size used when the server is not told otherwise.
pub const DEFAULT_ROWS: usize = 8;
pub const DEFAULT_COLS: usize = 8;

/// Inclusive bounds on either board dimension. Both must also be even.
pub const MIN_DIMENSION: usize = 4;
pub const MAX_DIMENSION: usize = 16;

/// Largest frame accepted on the wire. Reversi messages are tiny.
pub const MAX_MESSAGE_SIZE: u32 = 64 * 1024;

/// Upper bound on a single frame write.
pub const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// How long the terminal front end waits for input before pumping the UI queue again.
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Glyphs for the three cell markers, shared read-only for the life of the process.
pub const EMPTY_GLYPH: &str = "·";
pub const PLAYER_ONE_GLYPH: &str = "●";
pub const PLAYER_TWO_GLYPH: &str = "○";
