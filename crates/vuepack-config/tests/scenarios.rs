//! End-to-end behaviour of `produce_config` for representative environments.

use std::path::PathBuf;

use vuepack_config::{
    produce_config, BuildConfig, Environment, Loader, Mode, PluginDescriptor, SourceMapMode,
};

#[test]
fn production_environment_attaches_three_plugins() {
    let config = produce_config(&Environment::new().with("NODE_ENV", "production"));

    assert_eq!(config.mode(), Mode::Production);
    let plugins = config.plugins().expect("production plugins");
    assert_eq!(plugins.len(), 3);
    assert!(matches!(plugins[0], PluginDescriptor::Define(_)));
    assert!(matches!(plugins[1], PluginDescriptor::Minify(_)));
    assert!(matches!(plugins[2], PluginDescriptor::OccurrenceOrder));
    assert!(config.devtool().is_none());
}

#[test]
fn empty_environment_selects_source_maps() {
    let config = produce_config(&Environment::new());

    assert_eq!(config.mode(), Mode::Development);
    assert_eq!(config.devtool(), Some(SourceMapMode::SourceMap));
    assert_eq!(config.devtool().map(SourceMapMode::as_str), Some("#source-map"));
    assert!(config.plugins().is_none());
}

#[test]
fn unrecognized_mode_falls_back_to_development() {
    let staging = produce_config(&Environment::new().with("NODE_ENV", "staging"));
    let unset = produce_config(&Environment::new());
    assert_eq!(staging, unset);
}

#[test]
fn unrelated_variables_are_ignored() {
    let env = Environment::new()
        .with("HOME", "/home/dev")
        .with("node_env", "production")
        .with("PATH", "/usr/bin");
    assert!(!produce_config(&env).is_production());
}

#[test]
fn base_fields_are_stock_values() {
    let config = produce_config(&Environment::new());
    let base = config.base();

    assert_eq!(base.entry, PathBuf::from("./main.js"));
    assert_eq!(base.output.path, PathBuf::from("./build"));
    assert_eq!(base.output.public_path, "/build/");
    assert_eq!(base.output.filename, "index.js");

    let loaders: Vec<_> = base.rules.iter().map(|r| r.loader).collect();
    assert_eq!(loaders, vec![Loader::Vue, Loader::Html]);
    assert_eq!(base.rules[0].test.extension(), "vue");
    assert_eq!(base.rules[1].test.extension(), "html");
}

#[test]
fn base_is_shared_between_variants() {
    let prod = produce_config(&Environment::new().with("NODE_ENV", "production"));
    let dev = produce_config(&Environment::new().with("NODE_ENV", "development"));
    assert_eq!(prod.base(), dev.base());
}

#[test]
fn repeated_calls_are_identical() {
    let env = Environment::new().with("NODE_ENV", "production");
    assert_eq!(produce_config(&env), produce_config(&env));
}

#[test]
fn variant_destructures_cleanly() {
    match produce_config(&Environment::new()) {
        BuildConfig::Development { devtool, .. } => assert_eq!(devtool.as_str(), "#source-map"),
        BuildConfig::Production { .. } => panic!("expected development variant"),
    }
}
