use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_entry() -> PathBuf {
    PathBuf::from("./main.js")
}

pub(crate) fn default_output_path() -> PathBuf {
    PathBuf::from("./build")
}

pub(crate) fn default_public_path() -> String {
    "/build/".to_string()
}

pub(crate) fn default_filename() -> String {
    "index.js".to_string()
}
