#[cfg(windows)]
pub mod windows {
    /// Ctrl+Z then Enter, as the console delivers it.
    pub const CTRL_D_NL: &str = "\x1a\r\n";
}

#[cfg(not(windows))]
pub mod non_windows {
    pub const CTRL_D_NL: &str = "\x04\n";
}
