//! Property tests for the production/development branch policy.

use proptest::prelude::*;
use vuepack_config::{emit, produce_config, Environment, TransformRule, NODE_ENV};

/// Arbitrary environment that never sets NODE_ENV.
fn env_without_node_env() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[A-Z_]{1,12}", "[ -~]{0,16}"), 0..8).prop_map(|vars| {
        vars.into_iter()
            .filter(|(key, _)| key != NODE_ENV)
            .collect()
    })
}

/// Any NODE_ENV value other than the exact production marker.
fn non_production_value() -> impl Strategy<Value = String> {
    "[ -~]{0,16}".prop_filter("production selects the other branch", |v| v != "production")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: NODE_ENV=production always yields exactly three plugins and no devtool
    #[test]
    fn prop_production_has_plugins_only(vars in env_without_node_env()) {
        let env: Environment = vars.into_iter().collect::<Environment>().with(NODE_ENV, "production");
        let config = produce_config(&env);

        prop_assert_eq!(config.plugins().map(<[_]>::len), Some(3));
        prop_assert!(config.devtool().is_none());
    }

    /// Property: any other value, or none, yields a devtool and no plugins
    #[test]
    fn prop_other_values_select_development(
        vars in env_without_node_env(),
        value in prop::option::of(non_production_value()),
    ) {
        let mut env: Environment = vars.into_iter().collect();
        if let Some(value) = value {
            env.set(NODE_ENV, value);
        }
        let config = produce_config(&env);

        prop_assert!(config.devtool().is_some());
        prop_assert!(config.plugins().is_none());
    }

    /// Property: base fields never depend on the environment
    #[test]
    fn prop_base_independent_of_environment(
        vars in env_without_node_env(),
        value in prop::option::of("[ -~]{0,16}"),
    ) {
        let mut env: Environment = vars.into_iter().collect();
        if let Some(value) = value {
            env.set(NODE_ENV, value);
        }
        let config = produce_config(&env);
        let stock = produce_config(&Environment::new());

        prop_assert_eq!(config.base(), stock.base());
        prop_assert_eq!(&config.base().rules, &TransformRule::defaults());
    }

    /// Property: produce_config is pure
    #[test]
    fn prop_idempotent(vars in env_without_node_env(), production in any::<bool>()) {
        let mut env: Environment = vars.into_iter().collect();
        if production {
            env.set(NODE_ENV, "production");
        }
        prop_assert_eq!(produce_config(&env), produce_config(&env));
    }

    /// Property: rendered JSON carries exactly one of plugins/devtool
    #[test]
    fn prop_json_has_exactly_one_variant_key(production in any::<bool>()) {
        let env = if production {
            Environment::new().with(NODE_ENV, "production")
        } else {
            Environment::new()
        };
        let json: serde_json::Value =
            serde_json::from_str(&emit::to_json(&produce_config(&env)).unwrap()).unwrap();

        prop_assert_eq!(json.get("plugins").is_some(), production);
        prop_assert_eq!(json.get("devtool").is_some(), !production);
    }
}
