// ABOUTME: The theme token store tying the style root, durable preferences and token list together
// ABOUTME: Presets and radius reload the whole list, single-token edits update only their entry

use tinct_logging::{debug, info, warn};
use tinct_types::{StorageKey, ThemeMode, ThemePreference, ThemeToken, TokenKind};

use crate::catalog::catalog;
use crate::color::{Channel, Oklch, approximate_from_hex, leading_number, replace_channel};
use crate::error::{Result, TokenError};
use crate::presets::{DEFAULT_PRESET, PRESETS, SemanticPolicy, SemanticRole, plan_preset};
use crate::sink::StyleSink;
use crate::storage::PreferenceStore;
use crate::stylesheet::export_root_block;
use crate::validate::validate_value;

/// Custom property holding the base radius
pub const RADIUS_VARIABLE: &str = "--radius";
/// Radius in pixels before anything is restored
pub const DEFAULT_RADIUS_PX: f64 = 10.0;
pub const MIN_RADIUS_PX: f64 = 0.0;
pub const MAX_RADIUS_PX: f64 = 20.0;

/// Pixels per rem used when converting the radius
const PX_PER_REM: f64 = 16.0;

/// Starting point for channel edits on a value with no `oklch(L C H` prefix
const CHANNEL_SEED: Oklch = Oklch::new(0.5, 0.0, 0.0);

/// Clamp a radius into range. Non-finite input is rejected.
pub fn clamp_radius(px: f64) -> Result<f64> {
    if !px.is_finite() {
        return Err(TokenError::InvalidRadius(px));
    }
    Ok(px.clamp(MIN_RADIUS_PX, MAX_RADIUS_PX))
}

/// `12` -> `"0.75rem"`
pub fn radius_rem(px: f64) -> String {
    format!("{}rem", px / PX_PER_REM)
}

/// The semantic color declarations `source` currently holds, in role order.
pub fn semantic_baseline(source: &impl StyleSink) -> Vec<(String, String)> {
    SemanticRole::ALL
        .iter()
        .filter_map(|role| {
            source
                .get(role.variable())
                .map(|value| (role.variable().to_string(), value))
        })
        .collect()
}

/// Holds the token list and keeps it in step with the style root.
pub struct TokenStore<S, P> {
    sink: S,
    preferences: P,
    tokens: Vec<ThemeToken>,
    radius_px: f64,
    selected_preset: usize,
    policy: SemanticPolicy,
    /// Semantic colors as the style root declared them at construction
    semantic_baseline: Vec<(String, String)>,
}

impl<S: StyleSink, P: PreferenceStore> TokenStore<S, P> {
    /// Create a store over `sink` and `preferences` and load the token list.
    ///
    /// Nothing persisted is applied until [`TokenStore::restore`] is called.
    pub fn new(sink: S, preferences: P) -> Self {
        Self::with_policy(sink, preferences, SemanticPolicy::default())
    }

    /// Create a store whose semantic baseline is whatever `sink` holds now.
    pub fn with_policy(sink: S, preferences: P, policy: SemanticPolicy) -> Self {
        let baseline = semantic_baseline(&sink);
        Self::with_baseline(sink, preferences, policy, baseline)
    }

    /// Create a store with an explicit semantic baseline.
    ///
    /// Under [`SemanticPolicy::RestoreBaseline`] the default preset writes
    /// these values back. Use this when `sink` already carries overrides from
    /// an earlier session and the baseline has to come from the stylesheet.
    pub fn with_baseline(
        sink: S,
        preferences: P,
        policy: SemanticPolicy,
        semantic_baseline: Vec<(String, String)>,
    ) -> Self {
        let mut store = Self {
            sink,
            preferences,
            tokens: Vec::new(),
            radius_px: DEFAULT_RADIUS_PX,
            selected_preset: DEFAULT_PRESET,
            policy,
            semantic_baseline,
        };
        store.load_tokens();
        store
    }

    /// Re-apply persisted radius and preset, then reload the token list.
    ///
    /// `default_preference` stands in for a missing `app-theme` value. Stored
    /// values that cannot be parsed are skipped and the live style is kept.
    pub fn restore(&mut self, default_preference: ThemePreference) -> Result<ThemeMode> {
        let mode = self
            .preferences
            .get(StorageKey::Theme)
            .map(|stored| ThemePreference::from_stored(&stored))
            .unwrap_or(default_preference)
            .resolve();

        match self.preferences.get(StorageKey::Radius) {
            Some(stored) => match leading_number(&stored).filter(|px| px.is_finite()) {
                Some(px) => self.apply_radius(px)?,
                None => {
                    warn!(key = %StorageKey::Radius, value = %stored, "Ignoring malformed stored preference");
                    self.radius_from_root();
                }
            },
            None => self.radius_from_root(),
        }

        if let Some(stored) = self.preferences.get(StorageKey::ColorPreset) {
            match stored.trim().parse::<usize>() {
                Ok(index) if index < PRESETS.len() => self.apply_preset(index, mode)?,
                _ => {
                    warn!(key = %StorageKey::ColorPreset, value = %stored, "Ignoring malformed stored preference");
                }
            }
        }

        self.load_tokens();
        info!(mode = %mode, radius_px = self.radius_px, preset = self.selected_preset, "Restored theme");
        Ok(mode)
    }

    /// Rebuild the token list from the style root.
    ///
    /// Every token comes back unmodified: its current value becomes its
    /// default. Variables the root does not declare load as empty strings.
    pub fn load_tokens(&mut self) -> &[ThemeToken] {
        self.tokens = catalog()
            .into_iter()
            .map(|spec| {
                let variable = spec.variable();
                let value = self
                    .sink
                    .get(&variable)
                    .map(|v| v.trim().to_string())
                    .unwrap_or_default();
                ThemeToken::new(spec.display_name(), variable, value, spec.kind, spec.category)
            })
            .collect();

        debug!(count = self.tokens.len(), "Loaded tokens");
        &self.tokens
    }

    /// Apply a built-in preset for `mode`, persist the choice and reload.
    pub fn apply_preset(&mut self, index: usize, mode: ThemeMode) -> Result<()> {
        let writes = plan_preset(index, mode, self.policy, &self.semantic_baseline)?;
        for (variable, value) in &writes {
            self.sink.set(variable, value)?;
        }

        self.selected_preset = index;
        self.persist(StorageKey::ColorPreset, &index.to_string());
        info!(index, preset = PRESETS[index].name, mode = %mode, writes = writes.len(), "Applied color preset");

        self.load_tokens();
        Ok(())
    }

    /// Set the base radius in pixels, persist it and reload.
    pub fn set_radius(&mut self, px: f64) -> Result<()> {
        self.apply_radius(px)?;
        let stored = self.radius_px.to_string();
        self.persist(StorageKey::Radius, &stored);
        self.load_tokens();
        Ok(())
    }

    fn apply_radius(&mut self, px: f64) -> Result<()> {
        let clamped = clamp_radius(px)?;
        if clamped != px {
            debug!(requested = px, clamped, "Radius clamped into range");
        }

        let rem = radius_rem(clamped);
        self.sink.set(RADIUS_VARIABLE, &rem)?;
        self.radius_px = clamped;
        info!(radius_px = clamped, value = %rem, "Radius applied");
        Ok(())
    }

    fn radius_from_root(&mut self) {
        if let Some(rem) = self.sink.get(RADIUS_VARIABLE).and_then(|v| leading_number(&v)) {
            self.radius_px = rem * PX_PER_REM;
        }
    }

    /// Write a validated value for one token without reloading the others.
    pub fn set_token_value(&mut self, variable: &str, value: &str) -> Result<()> {
        let index = self.position(variable)?;
        let value = validate_value(variable, self.tokens[index].kind, value)?;

        self.sink.set(variable, &value)?;
        debug!(variable, value = %value, "Token updated");
        self.tokens[index].value = value;
        Ok(())
    }

    /// Set a color token from a `#rrggbb` picker value.
    pub fn set_token_from_hex(&mut self, variable: &str, hex: &str) -> Result<()> {
        self.position(variable)?;
        let value =
            approximate_from_hex(variable, hex).ok_or_else(|| TokenError::InvalidHex(hex.to_string()))?;
        self.set_token_value(variable, &value)
    }

    pub fn set_lightness(&mut self, variable: &str, lightness: f64) -> Result<()> {
        self.set_channel(variable, Channel::Lightness, lightness)
    }

    pub fn set_chroma(&mut self, variable: &str, chroma: f64) -> Result<()> {
        self.set_channel(variable, Channel::Chroma, chroma)
    }

    pub fn set_hue(&mut self, variable: &str, hue: f64) -> Result<()> {
        self.set_channel(variable, Channel::Hue, hue)
    }

    fn set_channel(&mut self, variable: &str, channel: Channel, value: f64) -> Result<()> {
        let index = self.position(variable)?;
        let token = &self.tokens[index];
        if token.kind != TokenKind::Color || !value.is_finite() {
            return Err(TokenError::invalid_value(variable, token.kind, &value.to_string()));
        }

        // Alpha and anything else after the hue survive the edit
        let updated = match replace_channel(&token.value, channel, value) {
            Some(updated) => updated,
            None => {
                let seed = CHANNEL_SEED.to_string();
                replace_channel(&seed, channel, value)
                    .ok_or_else(|| TokenError::invalid_value(variable, TokenKind::Color, &seed))?
            }
        };
        self.set_token_value(variable, &updated)
    }

    /// Restore one token's default value on the style root and in the list.
    pub fn reset_token(&mut self, variable: &str) -> Result<()> {
        let index = self.position(variable)?;
        let default_value = self.tokens[index].default_value.clone();

        self.sink.set(variable, &default_value)?;
        self.tokens[index].reset();
        debug!(variable, value = %default_value, "Token reset");
        Ok(())
    }

    /// The current tokens as a `:root { ... }` block.
    pub fn export_tokens(&self) -> String {
        export_root_block(&self.tokens)
    }

    pub fn tokens(&self) -> &[ThemeToken] {
        &self.tokens
    }

    pub fn token(&self, variable: &str) -> Option<&ThemeToken> {
        self.tokens.iter().find(|t| t.variable == variable)
    }

    /// Tokens grouped by category, categories in listing order.
    pub fn tokens_by_category(&self) -> Vec<(&str, Vec<&ThemeToken>)> {
        let mut groups: Vec<(&str, Vec<&ThemeToken>)> = Vec::new();
        for token in &self.tokens {
            match groups.iter_mut().find(|(category, _)| *category == token.category) {
                Some((_, members)) => members.push(token),
                None => groups.push((token.category.as_str(), vec![token])),
            }
        }
        groups
    }

    pub fn radius_px(&self) -> f64 {
        self.radius_px
    }

    pub fn selected_preset(&self) -> usize {
        self.selected_preset
    }

    pub fn policy(&self) -> SemanticPolicy {
        self.policy
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    fn position(&self, variable: &str) -> Result<usize> {
        self.tokens
            .iter()
            .position(|t| t.variable == variable)
            .ok_or_else(|| TokenError::UnknownToken(variable.to_string()))
    }

    fn persist(&mut self, key: StorageKey, value: &str) {
        if let Err(e) = self.preferences.set(key, value) {
            log_storage_failure(key, &e);
        }
    }
}

/// Storage is best effort: a failed write is logged and the session carries on.
pub(crate) fn log_storage_failure(key: StorageKey, error: &TokenError) {
    warn!(key = %key, error = %error, "Failed to persist preference");
}
