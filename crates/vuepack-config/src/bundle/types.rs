use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Named transform handler the bundler applies to matching files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loader {
    /// Single-file-component transform (`vue-loader`)
    Vue,
    /// Markup-inlining transform (`html-loader`)
    Html,
}

impl Loader {
    /// Name the bundler resolves the loader by
    pub fn name(self) -> &'static str {
        match self {
            Loader::Vue => "vue",
            Loader::Html => "html",
        }
    }
}

/// Matches files by extension; rendered as the regex `\.<ext>$`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionPattern {
    extension: String,
}

impl ExtensionPattern {
    /// Accepts the extension with or without its leading dot.
    pub fn new(extension: impl AsRef<str>) -> Self {
        Self {
            extension: extension.as_ref().trim_start_matches('.').to_string(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Regex source, without delimiters
    pub fn regex_source(&self) -> String {
        let mut source = String::from(r"\.");
        for ch in self.extension.chars() {
            if matches!(
                ch,
                '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' | '/'
            ) {
                source.push('\\');
            }
            source.push(ch);
        }
        source.push('$');
        source
    }
}

impl fmt::Display for ExtensionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.regex_source())
    }
}

impl Serialize for ExtensionPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.regex_source())
    }
}

/// Source map directive for development builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMapMode {
    /// Full source maps, emitted with the legacy `#` pragma prefix
    #[default]
    SourceMap,
}

impl SourceMapMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceMapMode::SourceMap => "#source-map",
        }
    }
}

impl fmt::Display for SourceMapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SourceMapMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
