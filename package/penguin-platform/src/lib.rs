mod platform;

#[cfg(windows)]
pub use platform::windows::*;

#[cfg(not(windows))]
pub use platform::non_windows::*;

/// `true` when a line read from the terminal means the user is done:
/// nothing was read at all, or the line is the platform's end-of-input key.
#[must_use]
pub fn is_end_of_input(line: &str, bytes_read: usize) -> bool {
    bytes_read == 0 || line == CTRL_D_NL
}
