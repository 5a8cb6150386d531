use indexmap::IndexMap;
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::environment::Mode;

/// Compile-time constant definitions (`webpack.DefinePlugin`)
///
/// Each value is source text, so string constants carry their own quotes:
/// `{"process.env": {"NODE_ENV": "\"production\""}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DefineOptions {
    pub definitions: IndexMap<String, Value>,
}

impl DefineOptions {
    /// Replace `process.env.NODE_ENV` with the mode's name so dead branches can be dropped
    pub fn node_env(mode: Mode) -> Self {
        let mut process_env = serde_json::Map::new();
        process_env.insert(
            "NODE_ENV".to_string(),
            Value::String(format!("\"{}\"", mode.as_str())),
        );

        let mut definitions = IndexMap::new();
        definitions.insert("process.env".to_string(), Value::Object(process_env));
        Self { definitions }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompressOptions {
    /// Report dropped code and other compressor warnings
    pub warnings: bool,
}

/// Minifier settings (`webpack.optimize.UglifyJsPlugin`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinifyOptions {
    pub compress: CompressOptions,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            compress: CompressOptions { warnings: false },
        }
    }
}

/// Post-processing step applied to the whole bundle graph
#[derive(Debug, Clone, PartialEq)]
pub enum PluginDescriptor {
    Define(DefineOptions),
    Minify(MinifyOptions),
    /// Assigns module ids by usage frequency for smaller, stable output
    OccurrenceOrder,
}

impl PluginDescriptor {
    /// Production plugin chain, in application order
    pub fn production() -> [Self; 3] {
        [
            PluginDescriptor::Define(DefineOptions::node_env(Mode::Production)),
            PluginDescriptor::Minify(MinifyOptions::default()),
            PluginDescriptor::OccurrenceOrder,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PluginDescriptor::Define(_) => "DefinePlugin",
            PluginDescriptor::Minify(_) => "UglifyJsPlugin",
            // The bundler's own spelling.
            PluginDescriptor::OccurrenceOrder => "OccurenceOrderPlugin",
        }
    }

    /// Constructor expression relative to the `webpack` module
    pub fn constructor(&self) -> &'static str {
        match self {
            PluginDescriptor::Define(_) => "webpack.DefinePlugin",
            PluginDescriptor::Minify(_) => "webpack.optimize.UglifyJsPlugin",
            PluginDescriptor::OccurrenceOrder => "webpack.optimize.OccurenceOrderPlugin",
        }
    }

    /// Constructor argument, or `None` for argument-less plugins
    pub fn options(&self) -> serde_json::Result<Option<Value>> {
        match self {
            PluginDescriptor::Define(options) => serde_json::to_value(options).map(Some),
            PluginDescriptor::Minify(options) => serde_json::to_value(options).map(Some),
            PluginDescriptor::OccurrenceOrder => Ok(None),
        }
    }
}

impl Serialize for PluginDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let options = self.options().map_err(S::Error::custom)?;
        let mut map = serializer.serialize_map(Some(if options.is_some() { 2 } else { 1 }))?;
        map.serialize_entry("name", self.name())?;
        if let Some(options) = options {
            map.serialize_entry("options", &options)?;
        }
        map.end()
    }
}
