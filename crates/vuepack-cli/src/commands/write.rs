//! Write command: render the config into a file under the project root.

use std::fs;
use std::path::{Path, PathBuf};

use vuepack_config::{Environment, OutputFormat};

use crate::cli::{FormatArg, WriteArgs};
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

pub fn execute(args: WriteArgs, env: Environment) -> Result<()> {
    let path = target_path(args.format, args.out.as_deref(), &args.project.root)?;
    let (_, config) = utils::prepare(&args.project, env)?;
    let rendered = OutputFormat::from(args.format).render(&config)?;

    if path.exists() {
        ui::warning(&format!("Overwriting {}", path.display()));
    }
    fs::write(&path, rendered).map_err(|source| CliError::WriteFailed {
        path: path.clone(),
        source,
    })?;

    ui::success(&format!("Wrote {} config to {}", config.mode(), path.display()));
    Ok(())
}

/// Destination for `format`, relative to `root` unless `out` is absolute.
///
/// JSON into a `.js` file is refused: the bundler would evaluate it as a script.
fn target_path(format: FormatArg, out: Option<&Path>, root: &Path) -> Result<PathBuf> {
    let out = out.unwrap_or_else(|| Path::new(format.default_file_name()));
    let path = utils::resolve_path(out, root);

    let is_script = path
        .extension()
        .is_some_and(|ext| ext == "js" || ext == "cjs" || ext == "mjs");
    if format == FormatArg::Json && is_script {
        return Err(CliError::JsonToScript(path));
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_follows_format() {
        let root = Path::new("/project");
        assert_eq!(
            target_path(FormatArg::Module, None, root).unwrap(),
            PathBuf::from("/project/webpack.config.js")
        );
        assert_eq!(
            target_path(FormatArg::Json, None, root).unwrap(),
            PathBuf::from("/project/webpack.config.json")
        );
    }

    #[test]
    fn json_into_script_is_refused() {
        let result = target_path(FormatArg::Json, Some(Path::new("webpack.config.js")), Path::new("."));
        assert!(matches!(result, Err(CliError::JsonToScript(_))));
    }

    #[test]
    fn explicit_out_is_kept() {
        let path = target_path(FormatArg::Module, Some(Path::new("webpack.prod.js")), Path::new("/p"))
            .unwrap();
        assert_eq!(path, PathBuf::from("/p/webpack.prod.js"));
    }
}
