use clap::ValueEnum;
use supports_color::Stream;

/// Whether change markers on stdout are coloured.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colour when stdout is a terminal that supports it.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => supports_color::on(Stream::Stdout).is_some(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}
