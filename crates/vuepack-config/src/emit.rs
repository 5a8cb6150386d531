//! Rendering a [`BuildConfig`] into the forms the bundler accepts.
//!
//! JSON carries rule tests as regex source strings. The CommonJS module form is
//! what the bundler loads as `webpack.config.js`: rule tests become regex
//! literals and plugins become `new` expressions.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::{BuildConfig, PluginDescriptor};
use crate::error::{ConfigError, Result};

/// Output representation for a rendered config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// CommonJS config module
    #[default]
    Module,
}

impl OutputFormat {
    pub fn render(self, config: &BuildConfig) -> Result<String> {
        match self {
            OutputFormat::Json => to_json(config),
            OutputFormat::Module => to_module(config),
        }
    }
}

/// Pretty JSON in the bundler's schema.
///
/// Meant for inspection: JSON has no regex type, so rule tests come out as
/// regex source strings and the bundler would read them as path prefixes.
/// Use [`to_module`] for a config the bundler can load.
pub fn to_json(config: &BuildConfig) -> Result<String> {
    let mut out =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::Serialize(e.to_string()))?;
    out.push('\n');
    Ok(out)
}

/// CommonJS module exporting the config
///
/// # Example
///
/// ```
/// use vuepack_config::{emit, produce_config, Environment};
///
/// let module = emit::to_module(&produce_config(&Environment::new())).unwrap();
/// assert!(module.contains(r"test: /\.vue$/"));
/// assert!(module.contains("devtool: '#source-map'"));
/// ```
pub fn to_module(config: &BuildConfig) -> Result<String> {
    let plugin_options = match config.plugins() {
        Some(plugins) => plugins
            .iter()
            .map(PluginDescriptor::options)
            .collect::<serde_json::Result<Vec<_>>>()
            .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        None => Vec::new(),
    };

    let mut out = String::new();
    write_module(&mut out, config, &plugin_options)
        .map_err(|e| ConfigError::Serialize(e.to_string()))?;
    Ok(out)
}

fn write_module(
    out: &mut String,
    config: &BuildConfig,
    plugin_options: &[Option<Value>],
) -> fmt::Result {
    let base = config.base();

    writeln!(out, "var webpack = require('webpack')")?;
    writeln!(out)?;
    writeln!(out, "module.exports = {{")?;
    writeln!(out, "\tentry: {},", js_string(&base.entry.to_string_lossy()))?;
    writeln!(out, "\toutput: {{")?;
    writeln!(out, "\t\tpath: {},", js_string(&base.output.path.to_string_lossy()))?;
    writeln!(out, "\t\tpublicPath: {},", js_string(&base.output.public_path))?;
    writeln!(out, "\t\tfilename: {}", js_string(&base.output.filename))?;
    writeln!(out, "\t}},")?;

    write!(out, "\tmodule: {{\n\t\tloaders: [")?;
    for (i, rule) in base.rules.iter().enumerate() {
        if i > 0 {
            write!(out, ", ")?;
        }
        write!(
            out,
            "{{\n\t\t\ttest: {},\n\t\t\tloader: {}\n\t\t}}",
            rule.test,
            js_string(rule.loader.name())
        )?;
    }
    writeln!(out, "]\n\t}},")?;

    match config {
        BuildConfig::Production { plugins, .. } => {
            writeln!(out, "\tplugins: [")?;
            for (i, (plugin, options)) in plugins.iter().zip(plugin_options).enumerate() {
                write!(out, "\t\tnew {}(", plugin.constructor())?;
                if let Some(options) = options {
                    write_js_value(out, options, 2)?;
                }
                let sep = if i + 1 < plugins.len() { "," } else { "" };
                writeln!(out, "){sep}")?;
            }
            writeln!(out, "\t]")?;
        }
        BuildConfig::Development { devtool, .. } => {
            writeln!(out, "\tdevtool: {}", js_string(devtool.as_str()))?;
        }
    }

    writeln!(out, "}}")
}

/// Single-quoted JS string literal
fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Object literal for plugin options; keys are quoted only when they are not
/// plain identifiers.
fn write_js_value(out: &mut String, value: &Value, depth: usize) -> fmt::Result {
    match value {
        Value::Object(map) if map.is_empty() => write!(out, "{{}}"),
        Value::Object(map) => {
            let indent = "\t".repeat(depth + 1);
            writeln!(out, "{{")?;
            for (i, (key, value)) in map.iter().enumerate() {
                if is_identifier(key) {
                    write!(out, "{indent}{key}: ")?;
                } else {
                    write!(out, "{indent}{}: ", js_string(key))?;
                }
                write_js_value(out, value, depth + 1)?;
                let sep = if i + 1 < map.len() { "," } else { "" };
                writeln!(out, "{sep}")?;
            }
            write!(out, "{}}}", "\t".repeat(depth))
        }
        Value::String(s) => write!(out, "{}", js_string(s)),
        // Numbers, booleans, null and arrays share JSON's literal syntax.
        other => write!(out, "{other}"),
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
