use serde::Serialize;

use crate::bundle::types::{ExtensionPattern, Loader};

/// Maps a file-extension pattern to the loader that handles it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformRule {
    pub test: ExtensionPattern,
    pub loader: Loader,
}

impl TransformRule {
    pub fn new(test: ExtensionPattern, loader: Loader) -> Self {
        Self { test, loader }
    }

    /// `.vue` files through the single-file-component transform
    pub fn vue() -> Self {
        Self::new(ExtensionPattern::new("vue"), Loader::Vue)
    }

    /// `.html` files through the markup-inlining transform
    pub fn html() -> Self {
        Self::new(ExtensionPattern::new("html"), Loader::Html)
    }

    /// Rules every build carries, in evaluation order
    pub fn defaults() -> Vec<Self> {
        vec![Self::vue(), Self::html()]
    }
}
