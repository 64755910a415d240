// ABOUTME: Behavior tests for the token store against in-memory style roots and preferences
// ABOUTME: Covers preset application, radius persistence, targeted edits and self-healing restore

#[cfg(test)]
mod tests {
    use crate::store::log_storage_failure;
    use crate::{
        InMemoryStyleRoot, MemoryPreferences, PRESETS, PreferenceStore, SemanticPolicy,
        StyleSink, TokenError, TokenStore,
    };
    use tinct_types::{StorageKey, ThemeMode, ThemePreference};
    use tracing_mock::{expect, subscriber};

    const STYLESHEET: &str = r#"
:root {
  --background: oklch(1 0 0);
  --foreground: oklch(0.145 0 0);
  --primary: oklch(0.205 0 0);
  --primary-foreground: oklch(0.985 0 0);
  --secondary: oklch(0.97 0 0);
  --accent: oklch(0.97 0 0);
  --border: #e5e5e5;
  --color-success: oklch(0.6 0.2 145);
  --color-warning: oklch(0.75 0.18 80);
  --color-info: oklch(0.6 0.2 250);
  --color-error: oklch(0.6 0.25 27);
  --radius: 0.625rem;
  --radius-sm: calc(var(--radius) - 4px);
  --spacing-4: 1rem;
}
"#;

    type MemoryStore = TokenStore<InMemoryStyleRoot, MemoryPreferences>;

    fn fixture() -> (InMemoryStyleRoot, MemoryPreferences, MemoryStore) {
        let root = InMemoryStyleRoot::from_css(STYLESHEET);
        let prefs = MemoryPreferences::new();
        let store = TokenStore::new(root.clone(), prefs.clone());
        (root, prefs, store)
    }

    /// Preferences whose writes always fail
    struct UnavailablePreferences;

    impl PreferenceStore for UnavailablePreferences {
        fn get(&self, _key: StorageKey) -> Option<String> {
            None
        }

        fn set(&mut self, _key: StorageKey, _value: &str) -> crate::Result<()> {
            Err(TokenError::io(
                "preferences.json",
                std::io::Error::other("storage unavailable"),
            ))
        }
    }

    #[test]
    fn test_load_tokens_reads_root() {
        let (_root, _prefs, mut store) = fixture();

        let tokens = store.load_tokens();
        assert_eq!(tokens.len(), 39);
        assert!(tokens.iter().all(|t| t.value == t.default_value));

        let primary = store.token("--primary").unwrap();
        assert_eq!(primary.name, "Primary");
        assert_eq!(primary.value, "oklch(0.205 0 0)");
        assert_eq!(store.token("--spacing-4").unwrap().value, "1rem");
        assert_eq!(store.token("--spacing-16").unwrap().value, "");
    }

    #[test]
    fn test_load_tokens_is_idempotent() {
        let (_root, _prefs, mut store) = fixture();
        let first = store.load_tokens().to_vec();
        let second = store.load_tokens().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_apply_violet_light() {
        let (root, prefs, mut store) = fixture();

        store.apply_preset(1, ThemeMode::Light).unwrap();

        assert_eq!(root.get("--primary").as_deref(), Some("oklch(0.488 0.243 264.376)"));
        assert_eq!(root.get("--color-success").as_deref(), Some("oklch(0.488 0.243 145)"));
        assert_eq!(prefs.get(StorageKey::ColorPreset).as_deref(), Some("1"));
        assert_eq!(store.selected_preset(), 1);

        // The reload picks the new values up as defaults
        let primary = store.token("--primary").unwrap();
        assert_eq!(primary.value, "oklch(0.488 0.243 264.376)");
        assert!(!primary.is_modified());
    }

    #[test]
    fn test_every_preset_lands_on_root() {
        for (index, preset) in PRESETS.iter().enumerate() {
            for mode in [ThemeMode::Light, ThemeMode::Dark] {
                let (root, _prefs, mut store) = fixture();
                store.apply_preset(index, mode).unwrap();

                for (variable, value) in preset.colors(mode).entries() {
                    assert_eq!(root.get(variable).as_deref(), Some(value), "{} {mode}", preset.name);
                }
            }
        }
    }

    #[test]
    fn test_semantic_colors_follow_primary() {
        let (root, _prefs, mut store) = fixture();
        store.apply_preset(3, ThemeMode::Dark).unwrap();

        let expected = [
            ("--color-success", "oklch(0.7 0.15 145)"),
            ("--color-warning", "oklch(0.7 0.15 80)"),
            ("--color-info", "oklch(0.7 0.15 250)"),
            ("--color-error", "oklch(0.7 0.15 27)"),
        ];
        for (variable, value) in expected {
            assert_eq!(root.get(variable).as_deref(), Some(value));
        }
    }

    #[test]
    fn test_apply_preset_out_of_range() {
        let (root, prefs, mut store) = fixture();

        let err = store.apply_preset(5, ThemeMode::Light).unwrap_err();
        assert!(matches!(err, TokenError::PresetOutOfRange { index: 5, len: 5 }));
        assert_eq!(prefs.get(StorageKey::ColorPreset), None);
        assert!(root.inline_properties().is_empty());
    }

    #[test]
    fn test_default_preset_keeps_stale_semantics() {
        let (root, _prefs, mut store) = fixture();

        store.apply_preset(1, ThemeMode::Light).unwrap();
        store.apply_preset(0, ThemeMode::Light).unwrap();

        assert_eq!(root.get("--primary").as_deref(), Some("oklch(0.205 0 0)"));
        assert_eq!(root.get("--color-success").as_deref(), Some("oklch(0.488 0.243 145)"));
    }

    #[test]
    fn test_default_preset_restores_baseline_semantics() {
        let root = InMemoryStyleRoot::from_css(STYLESHEET);
        let mut store = TokenStore::with_policy(
            root.clone(),
            MemoryPreferences::new(),
            SemanticPolicy::RestoreBaseline,
        );

        store.apply_preset(2, ThemeMode::Light).unwrap();
        store.apply_preset(0, ThemeMode::Light).unwrap();

        assert_eq!(root.get("--color-success").as_deref(), Some("oklch(0.6 0.2 145)"));
        assert_eq!(root.get("--color-error").as_deref(), Some("oklch(0.6 0.25 27)"));
        assert_eq!(store.policy(), SemanticPolicy::RestoreBaseline);
    }

    #[test]
    fn test_default_preset_always_derives() {
        let root = InMemoryStyleRoot::from_css(STYLESHEET);
        let mut store =
            TokenStore::with_policy(root.clone(), MemoryPreferences::new(), SemanticPolicy::Always);

        store.apply_preset(0, ThemeMode::Light).unwrap();
        assert_eq!(root.get("--color-info").as_deref(), Some("oklch(0.205 0 250)"));
    }

    #[test]
    fn test_set_radius_writes_rem() {
        let (root, prefs, mut store) = fixture();

        store.set_radius(12.0).unwrap();

        assert_eq!(root.get("--radius").as_deref(), Some("0.75rem"));
        assert_eq!(prefs.get(StorageKey::Radius).as_deref(), Some("12"));
        assert_eq!(store.radius_px(), 12.0);
    }

    #[test]
    fn test_set_radius_round_trips_through_storage() {
        for px in [0.0, 2.5, 10.0, 12.0, 20.0] {
            let prefs = MemoryPreferences::new();
            let mut store = TokenStore::new(InMemoryStyleRoot::from_css(STYLESHEET), prefs.clone());
            store.set_radius(px).unwrap();

            let root = InMemoryStyleRoot::from_css(STYLESHEET);
            let mut fresh = TokenStore::new(root.clone(), prefs);
            fresh.restore(ThemePreference::System).unwrap();

            assert_eq!(fresh.radius_px(), px);
            assert_eq!(root.get("--radius"), Some(format!("{}rem", px / 16.0)));
        }
    }

    #[test]
    fn test_set_radius_clamps_and_rejects() {
        let (root, _prefs, mut store) = fixture();

        store.set_radius(32.0).unwrap();
        assert_eq!(store.radius_px(), 20.0);
        assert_eq!(root.get("--radius").as_deref(), Some("1.25rem"));

        store.set_radius(-4.0).unwrap();
        assert_eq!(root.get("--radius").as_deref(), Some("0rem"));

        assert!(matches!(store.set_radius(f64::NAN), Err(TokenError::InvalidRadius(_))));
        assert!(matches!(store.set_radius(f64::INFINITY), Err(TokenError::InvalidRadius(_))));
        assert_eq!(store.radius_px(), 0.0);
    }

    #[test]
    fn test_set_token_value_is_targeted() {
        let (root, _prefs, mut store) = fixture();
        store.set_token_value("--accent", "oklch(0.8 0.1 200)").unwrap();

        // Edit the root behind the store's back; a targeted update must not pick it up
        let mut other = root.clone();
        other.set("--secondary", "oklch(0.1 0 0)").unwrap();

        store.set_token_value("--spacing-4", " 1.5rem ").unwrap();

        assert_eq!(store.token("--accent").unwrap().value, "oklch(0.8 0.1 200)");
        assert!(store.token("--accent").unwrap().is_modified());
        assert_eq!(store.token("--spacing-4").unwrap().value, "1.5rem");
        assert_eq!(store.token("--secondary").unwrap().value, "oklch(0.97 0 0)");
        assert_eq!(root.get("--spacing-4").as_deref(), Some("1.5rem"));
    }

    #[test]
    fn test_set_token_value_rejects_bad_input() {
        let (root, _prefs, mut store) = fixture();

        assert!(matches!(
            store.set_token_value("--radius-md", "round"),
            Err(TokenError::InvalidValue { .. })
        ));
        assert!(matches!(
            store.set_token_value("--primary", "red; color: blue"),
            Err(TokenError::InvalidValue { .. })
        ));
        assert!(matches!(
            store.set_token_value("--not-a-token", "1px"),
            Err(TokenError::UnknownToken(_))
        ));
        assert!(root.inline_properties().is_empty());
    }

    #[test]
    fn test_reset_then_reload_yields_defaults() {
        let (root, _prefs, mut store) = fixture();

        store.set_token_value("--primary", "#ff0000").unwrap();
        store.set_token_value("--radius-sm", "2px").unwrap();

        let variables: Vec<String> = store.tokens().iter().map(|t| t.variable.clone()).collect();
        for variable in &variables {
            store.reset_token(variable).unwrap();
        }
        assert_eq!(root.get("--primary").as_deref(), Some("oklch(0.205 0 0)"));

        let tokens = store.load_tokens();
        assert!(tokens.iter().all(|t| t.value == t.default_value));
        assert_eq!(store.token("--radius-sm").unwrap().value, "calc(var(--radius) - 4px)");
    }

    #[test]
    fn test_set_token_from_hex() {
        let (root, _prefs, mut store) = fixture();

        store.set_token_from_hex("--primary", "#ff8000").unwrap();
        assert_eq!(root.get("--primary").as_deref(), Some("oklch(0.5 0.2 255)"));

        store.set_token_from_hex("--background", "#808080").unwrap();
        assert_eq!(store.token("--background").unwrap().value, "oklch(0.502 0 0)");

        assert!(matches!(
            store.set_token_from_hex("--primary", "orange"),
            Err(TokenError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_channel_edits() {
        let (root, _prefs, mut store) = fixture();

        store.set_hue("--primary", 200.0).unwrap();
        assert_eq!(root.get("--primary").as_deref(), Some("oklch(0.205 0 200.000)"));

        store.set_chroma("--primary", 0.9).unwrap();
        assert_eq!(store.token("--primary").unwrap().value, "oklch(0.205 0.300 200.000)");

        // Not an oklch() value yet, so the edit starts from mid gray
        store.set_lightness("--border", 0.7).unwrap();
        assert_eq!(root.get("--border").as_deref(), Some("oklch(0.700 0 0)"));

        assert!(matches!(
            store.set_hue("--radius-lg", 10.0),
            Err(TokenError::InvalidValue { .. })
        ));
        assert!(store.set_lightness("--primary", f64::NAN).is_err());
    }

    #[test]
    fn test_channel_edits_keep_alpha() {
        let root = InMemoryStyleRoot::from_css(
            ":root { --border: oklch(1 0 0 / 10%); --input: oklch(0.269 0 0/0.5); }",
        );
        let mut store = TokenStore::new(root.clone(), MemoryPreferences::new());

        store.set_hue("--border", 40.0).unwrap();
        assert_eq!(root.get("--border").as_deref(), Some("oklch(1 0 40.000 / 10%)"));

        store.set_lightness("--border", 0.9).unwrap();
        assert_eq!(
            store.token("--border").unwrap().value,
            "oklch(0.900 0 40.000 / 10%)"
        );

        store.set_chroma("--input", 0.1).unwrap();
        assert_eq!(root.get("--input").as_deref(), Some("oklch(0.269 0.100 0/0.5)"));
    }

    #[test]
    fn test_export_tokens() {
        let (_root, _prefs, store) = fixture();
        let css = store.export_tokens();

        assert!(css.starts_with(":root {\n  --background: oklch(1 0 0);\n"));
        assert!(css.contains("  --spacing-4: 1rem;\n"));
        assert!(css.ends_with("  --spacing-16: ;\n}"));
        assert_eq!(css.lines().count(), 41);
    }

    #[test]
    fn test_tokens_by_category() {
        let (_root, _prefs, store) = fixture();
        let groups = store.tokens_by_category();

        let summary: Vec<(&str, usize)> = groups.iter().map(|(c, t)| (*c, t.len())).collect();
        assert_eq!(
            summary,
            [("Theme Colors", 17), ("Semantic Colors", 8), ("Radius", 4), ("Spacing", 10)]
        );
        assert_eq!(groups[1].1[0].name, "Success");
    }

    #[test]
    fn test_restore_applies_stored_choices() {
        let root = InMemoryStyleRoot::from_css(STYLESHEET);
        let prefs = MemoryPreferences::with_entries([
            (StorageKey::Theme, "dark"),
            (StorageKey::ColorPreset, "2"),
            (StorageKey::Radius, "6"),
        ]);
        let mut store = TokenStore::new(root.clone(), prefs);

        let mode = store.restore(ThemePreference::Light).unwrap();

        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(store.selected_preset(), 2);
        assert_eq!(root.get("--primary").as_deref(), Some("oklch(0.8 0.15 240)"));
        assert_eq!(root.get("--radius").as_deref(), Some("0.375rem"));
        assert_eq!(store.token("--primary").unwrap().value, "oklch(0.8 0.15 240)");
    }

    #[test]
    fn test_restore_heals_malformed_values() {
        let root = InMemoryStyleRoot::from_css(STYLESHEET);
        let prefs = MemoryPreferences::with_entries([
            (StorageKey::Theme, "sepia"),
            (StorageKey::ColorPreset, "violet"),
            (StorageKey::Radius, "wide"),
        ]);
        let mut store = TokenStore::new(root.clone(), prefs);

        let mode = store.restore(ThemePreference::Dark).unwrap();

        assert_eq!(mode, ThemeMode::Light);
        assert_eq!(store.selected_preset(), 0);
        assert_eq!(store.radius_px(), 10.0);
        assert!(root.inline_properties().is_empty());
    }

    #[test]
    fn test_restore_ignores_out_of_range_preset() {
        let prefs = MemoryPreferences::with_entries([(StorageKey::ColorPreset, "9")]);
        let mut store = TokenStore::new(InMemoryStyleRoot::from_css(STYLESHEET), prefs);

        store.restore(ThemePreference::System).unwrap();
        assert_eq!(store.selected_preset(), 0);
    }

    #[test]
    fn test_restore_uses_default_preference_when_theme_unset() {
        let prefs = MemoryPreferences::with_entries([(StorageKey::ColorPreset, "1")]);
        let root = InMemoryStyleRoot::from_css(STYLESHEET);
        let mut store = TokenStore::new(root.clone(), prefs);

        assert_eq!(store.restore(ThemePreference::Dark).unwrap(), ThemeMode::Dark);
        assert_eq!(root.get("--primary").as_deref(), Some("oklch(0.77 0.143 280)"));
    }

    #[test]
    fn test_unavailable_storage_is_not_fatal() {
        let root = InMemoryStyleRoot::from_css(STYLESHEET);
        let mut store = TokenStore::new(root.clone(), UnavailablePreferences);

        store.set_radius(4.0).unwrap();
        store.apply_preset(4, ThemeMode::Light).unwrap();

        assert_eq!(root.get("--radius").as_deref(), Some("0.25rem"));
        assert_eq!(root.get("--primary").as_deref(), Some("oklch(0.6 0.24 45)"));
        assert_eq!(store.preferences().get(StorageKey::Radius), None);
        assert_eq!(store.sink().get("--accent").as_deref(), Some("oklch(0.8 0.15 45)"));
    }

    #[test]
    fn test_storage_failure_is_logged_as_warning() {
        let (subscriber, handle) = subscriber::mock()
            .event(
                expect::event()
                    .at_level(tracing::Level::WARN)
                    .with_fields(expect::msg("Failed to persist preference")),
            )
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            let error = TokenError::io("preferences.json", std::io::Error::other("disk full"));
            log_storage_failure(StorageKey::Radius, &error);
        });

        handle.assert_finished();
    }
}
