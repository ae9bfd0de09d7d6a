/// Fixed capacity of the input-side and output-side buffers (16 KiB).
/// Both buffers are reused across every iteration of one operation, so
/// memory stays bounded regardless of input size.
pub const BUFFER_SIZE: usize = 16 * 1024;

/// Default deflate compression level (balanced).
pub const DEFAULT_LEVEL_DEFLATE: i32 = 6;

/// Max buffer capacity sanity bound (32 MiB).
pub const MAX_BUFFER_SIZE: usize = 32 * 1024 * 1024;
