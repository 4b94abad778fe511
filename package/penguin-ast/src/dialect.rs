use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Which statement kinds an interpreter accepts; one value per lesson type.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct DialectConfig {
    pub allow_assignment: bool,
    pub allow_print: bool,
    pub allow_input: bool,
    pub allow_concatenation: bool,
    pub allow_booleans: bool,
    /// treat a program without statements as an error instead of a no-op
    pub reject_empty_source: bool,
}

impl DialectConfig {
    #[must_use]
    pub const fn print_only() -> Self {
        Self {
            allow_assignment: false,
            allow_print: true,
            allow_input: false,
            allow_concatenation: false,
            allow_booleans: false,
            reject_empty_source: false,
        }
    }

    #[must_use]
    pub const fn variables() -> Self {
        Self {
            allow_assignment: true,
            ..Self::print_only()
        }
    }

    #[must_use]
    pub const fn input() -> Self {
        Self {
            allow_input: true,
            ..Self::variables()
        }
    }

    #[must_use]
    pub const fn concatenation() -> Self {
        Self {
            allow_concatenation: true,
            ..Self::variables()
        }
    }

    /// Union of every lesson dialect.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            allow_assignment: true,
            allow_print: true,
            allow_input: true,
            allow_concatenation: true,
            allow_booleans: true,
            reject_empty_source: false,
        }
    }

    #[must_use]
    pub const fn rejecting_empty_source(self) -> Self {
        Self {
            reject_empty_source: true,
            ..self
        }
    }
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self::full()
    }
}

#[derive(EnumString, StrumDisplay, EnumIter)]
#[strum(serialize_all = "kebab-case")]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum DialectPreset {
    PrintOnly,
    Variables,
    Input,
    Concatenation,
    Full,
}

impl From<DialectPreset> for DialectConfig {
    fn from(value: DialectPreset) -> Self {
        match value {
            DialectPreset::PrintOnly => Self::print_only(),
            DialectPreset::Variables => Self::variables(),
            DialectPreset::Input => Self::input(),
            DialectPreset::Concatenation => Self::concatenation(),
            DialectPreset::Full => Self::full(),
        }
    }
}

/// Caps on how much source one run accepts.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Limits {
    pub max_source_bytes: usize,
    pub max_lines: usize,
}

impl Limits {
    pub const DEFAULT_MAX_SOURCE_BYTES: usize = 64 * 1024;
    pub const DEFAULT_MAX_LINES: usize = 10_000;
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_source_bytes: Self::DEFAULT_MAX_SOURCE_BYTES,
            max_lines: Self::DEFAULT_MAX_LINES,
        }
    }
}
