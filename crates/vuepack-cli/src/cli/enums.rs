use clap::ValueEnum;
use vuepack_config::{Mode, OutputFormat};

/// Rendering of the produced config
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum FormatArg {
    /// CommonJS module, loadable as webpack.config.js
    #[default]
    #[value(name = "module")]
    Module,

    /// Pretty-printed JSON, for inspection only
    #[value(name = "json")]
    Json,
}

impl FormatArg {
    /// File `write` targets when no `--out` is given
    pub fn default_file_name(self) -> &'static str {
        match self {
            FormatArg::Module => "webpack.config.js",
            FormatArg::Json => "webpack.config.json",
        }
    }
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Module => OutputFormat::Module,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Build variant; overrides NODE_ENV when given
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    #[value(name = "production")]
    Production,

    #[value(name = "development")]
    Development,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Production => Mode::Production,
            ModeArg::Development => Mode::Development,
        }
    }
}
