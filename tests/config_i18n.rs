use fleet_planning_toolbox::config::{self, Config, ConfigError};
use fleet_planning_toolbox::i18n::{keys, parse_toml_to_map, resolve_language, Language, Translator};

#[test]
fn empty_config_uses_defaults() {
    let cfg = config::parse_config("").unwrap();
    assert_eq!(cfg.engine.revenue_per_unit, 10_000.0);
    assert_eq!(cfg.engine.payback_never_sentinel, 999);
    assert_eq!(cfg.engine.reference_fx_rate, 28.0);
    assert_eq!(cfg.scenarios.base.inflation, 0.25);
    assert_eq!(cfg.prices.unit_price("frigo"), Some(2_350_000.0));
    assert!(cfg.language.is_none());
}

#[test]
fn partial_config_overrides_only_given_fields() {
    let cfg = config::parse_config(
        r#"
language = "tr"

[engine]
revenue_per_unit = 12000.0

[scenarios.custom]
inflation = 0.5
fx_rate = 45.0
interest = 0.6
"#,
    )
    .unwrap();
    assert_eq!(cfg.language.as_deref(), Some("tr"));
    assert_eq!(cfg.engine.revenue_per_unit, 12_000.0);
    assert_eq!(cfg.engine.monthly_depreciation_rate, 0.02);
    assert_eq!(cfg.scenarios.custom.fx_rate, 45.0);
    assert_eq!(cfg.scenarios.pessimistic.interest, 0.55);
}

#[test]
fn invalid_engine_values_are_rejected() {
    let err = config::parse_config("[engine]\nreference_fx_rate = 0.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid("reference_fx_rate")));
    assert!(matches!(
        config::parse_config("engine = 3"),
        Err(ConfigError::Serde(_))
    ));
}

#[test]
fn config_survives_save_and_load() {
    let dir = std::env::temp_dir().join(format!("fleet_planning_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    let _ = std::fs::remove_file(&path);

    let created = config::load_or_default(&path).unwrap();
    assert!(path.exists());

    let mut edited = created.clone();
    edited.language = Some("en".into());
    edited.engine.horizon_end_year = 2035;
    edited.save(&path).unwrap();

    let loaded = config::load_or_default(&path).unwrap();
    assert_eq!(loaded.language.as_deref(), Some("en"));
    assert_eq!(loaded.engine, edited.engine);
    assert_eq!(loaded.scenarios, Config::default().scenarios);
    assert_eq!(loaded.prices, Config::default().prices);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn translator_language_fallback() {
    let ko = Translator::default();
    assert_eq!(ko.language(), Language::Ko);
    assert_eq!(ko.t(keys::RISK_HIGH), "높음");

    let en = Translator::new("en-US");
    assert_eq!(en.language_code(), "en");
    assert_eq!(en.t(keys::RISK_HIGH), "high");

    let tr = Translator::new("tr");
    assert_eq!(tr.t(keys::RISK_HIGH), "yüksek");
    assert_eq!(tr.lookup(keys::DECISION_WAIT), Some("bekle"));

    assert_eq!(en.t("no.such.key"), "[missing translation]");
}

#[test]
fn resolve_language_prefers_cli_then_config() {
    assert_eq!(resolve_language("en", Some("tr")), "en");
    assert_eq!(resolve_language("auto", Some("tr")), "tr");
    assert_eq!(resolve_language("TR-tr", None), "tr");
}

#[test]
fn language_pack_flattens_sections() {
    let map = parse_toml_to_map("[risk]\nhigh = \"H\"\n[a.b]\nc = \"x\"\n").unwrap();
    assert_eq!(map.get("risk.high").map(String::as_str), Some("H"));
    assert_eq!(map.get("a.b.c").map(String::as_str), Some("x"));
    assert!(parse_toml_to_map("n = 1").is_none());
}

#[test]
fn external_pack_overrides_builtin() {
    let dir = std::env::temp_dir().join(format!("fleet_planning_pack_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("en.toml"), "[risk]\nhigh = \"HIGH!\"\n").unwrap();

    let tr = Translator::new_with_pack("en", dir.to_str());
    assert_eq!(tr.t(keys::RISK_HIGH), "HIGH!");
    assert_eq!(tr.t(keys::RISK_LOW), "low");

    let _ = std::fs::remove_dir_all(&dir);
}
