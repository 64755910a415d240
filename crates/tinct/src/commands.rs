// ABOUTME: Runs CLI commands against a file backed token store
// ABOUTME: Output goes to a caller supplied writer so commands can be tested end to end

use anyhow::{Context, Result, bail};
use std::io::Write;
use tinct_core::{
    FilePreferences, InMemoryStyleRoot, JsonFileStyleRoot, PRESETS, PreferenceStore, TokenStore,
    approximate_to_rgb, parse_root_block, radius_rem, semantic_baseline, swatches,
};
use tinct_logging::{debug, info};
use tinct_types::{StorageKey, ThemeMode, ThemePreference, ThemeToken, TokenKind};

use crate::cli::Command;
use crate::config::TinctConfig;

/// Stylesheet used when the configuration names none
pub const DEFAULT_STYLESHEET: &str = include_str!("default.css");

type FileStore = TokenStore<JsonFileStyleRoot, FilePreferences>;

/// An opened store plus a second handle on its style root
pub struct Session {
    pub store: FileStore,
    root: JsonFileStyleRoot,
    default_preference: ThemePreference,
}

impl Session {
    /// Open the configured style root and preferences.
    ///
    /// On first use, or when `fresh` is set, runtime overrides are dropped
    /// and the stored preset and radius are re-applied.
    pub fn open(config: &TinctConfig, fresh: bool) -> Result<Self> {
        let base = load_base_root(config)?;
        let preferences = FilePreferences::open(&config.paths.preferences)?;

        // Taken before saved overrides are layered on top of the stylesheet
        let baseline = semantic_baseline(&base);

        let first_use = !config.paths.style_root.exists();
        let mut root = JsonFileStyleRoot::open(&config.paths.style_root, base)?;
        if fresh {
            root.clear()?;
        }

        let mut store = TokenStore::with_baseline(
            root.clone(),
            preferences,
            config.theme.semantic_policy,
            baseline,
        );
        if first_use || fresh {
            store.restore(config.theme.mode)?;
        }

        debug!(
            style_root = %config.paths.style_root.display(),
            first_use,
            fresh,
            "Opened session"
        );
        Ok(Self {
            store,
            root,
            default_preference: config.theme.mode,
        })
    }

    /// Mode from the stored app-theme, falling back to the configured one
    pub fn mode(&self) -> ThemeMode {
        self.store
            .preferences()
            .get(StorageKey::Theme)
            .map(|stored| ThemePreference::from_stored(&stored))
            .unwrap_or(self.default_preference)
            .resolve()
    }

    /// Selected preset as stored, if it names a real preset
    pub fn stored_preset(&self) -> Option<usize> {
        self.store
            .preferences()
            .get(StorageKey::ColorPreset)
            .and_then(|stored| stored.trim().parse().ok())
            .filter(|index| *index < PRESETS.len())
    }

    /// Remove the override for a token so its stylesheet value applies again
    pub fn reset(&mut self, variable: &str) -> Result<()> {
        if self.store.token(variable).is_none() {
            bail!("Unknown token: {variable}");
        }
        self.root.remove(variable)?;
        self.store.load_tokens();
        Ok(())
    }
}

/// The stylesheet declarations every run starts from
fn load_base_root(config: &TinctConfig) -> Result<InMemoryStyleRoot> {
    let css = match &config.paths.stylesheet {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stylesheet {}", path.display()))?,
        None => DEFAULT_STYLESHEET.to_string(),
    };

    let mut declarations = parse_root_block(&css);
    if !declarations.iter().any(|(name, _)| name == "--radius") {
        declarations.push(("--radius".to_string(), radius_rem(config.theme.default_radius)));
    }
    Ok(InMemoryStyleRoot::with_stylesheet(declarations))
}

/// `primary` and `--primary` both name the `--primary` token
pub fn variable_name(arg: &str) -> String {
    let trimmed = arg.trim();
    if trimmed.starts_with("--") {
        trimmed.to_string()
    } else {
        format!("--{trimmed}")
    }
}

pub fn run(command: &Command, config: &TinctConfig, out: &mut dyn Write) -> Result<()> {
    if let Command::Preview { expr } = command {
        writeln!(out, "{}", approximate_to_rgb(expr))?;
        return Ok(());
    }

    let mut session = Session::open(config, matches!(command, Command::Restore))?;

    match command {
        Command::List { category } => list(&session, category.as_deref(), out)?,
        Command::Presets { mode } => {
            let mode = mode.unwrap_or_else(|| session.mode());
            presets(&session, mode, out)?
        }
        Command::ApplyPreset { index, mode } => {
            let mode = mode.unwrap_or_else(|| session.mode());
            session.store.apply_preset(*index, mode)?;
            info!(index, mode = %mode, "Preset applied from command line");
            writeln!(out, "Applied preset {} ({mode})", PRESETS[*index].name)?;
        }
        Command::Radius { px } => {
            session.store.set_radius(*px)?;
            let radius = session.store.radius_px();
            writeln!(out, "Radius set to {radius}px ({})", radius_rem(radius))?;
        }
        Command::Set { variable, value } => {
            let variable = variable_name(variable);
            session.store.set_token_value(&variable, value)?;
            print_token(&session, &variable, out)?;
        }
        Command::SetHex { variable, hex } => {
            let variable = variable_name(variable);
            session.store.set_token_from_hex(&variable, hex)?;
            print_token(&session, &variable, out)?;
        }
        Command::Adjust {
            variable,
            lightness,
            chroma,
            hue,
        } => {
            let variable = variable_name(variable);
            if lightness.is_none() && chroma.is_none() && hue.is_none() {
                bail!("Nothing to adjust: pass --lightness, --chroma or --hue");
            }
            if let Some(l) = lightness {
                session.store.set_lightness(&variable, *l)?;
            }
            if let Some(c) = chroma {
                session.store.set_chroma(&variable, *c)?;
            }
            if let Some(h) = hue {
                session.store.set_hue(&variable, *h)?;
            }
            print_token(&session, &variable, out)?;
        }
        Command::Reset { variable } => {
            let variable = variable_name(variable);
            session.reset(&variable)?;
            print_token(&session, &variable, out)?;
        }
        Command::Restore => {
            writeln!(
                out,
                "Restored preset {} and radius {}px",
                PRESETS[session.store.selected_preset()].name,
                session.store.radius_px()
            )?;
        }
        Command::Export { output } => {
            let css = session.store.export_tokens();
            match output {
                Some(path) => {
                    std::fs::write(path, format!("{css}\n"))
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    writeln!(out, "Exported {} tokens to {}", session.store.tokens().len(), path.display())?;
                }
                None => writeln!(out, "{css}")?,
            }
        }
        Command::Preview { .. } => {}
    }

    Ok(())
}

fn list(session: &Session, category: Option<&str>, out: &mut dyn Write) -> Result<()> {
    let groups = session.store.tokens_by_category();
    let mut shown = 0;

    for (name, tokens) in groups {
        if category.is_some_and(|wanted| !wanted.eq_ignore_ascii_case(name)) {
            continue;
        }
        writeln!(out, "{name}")?;
        for token in tokens {
            writeln!(out, "{}", token_line(token))?;
        }
        shown += 1;
    }

    if let (0, Some(wanted)) = (shown, category) {
        bail!("No token category named {wanted:?}");
    }
    Ok(())
}

fn presets(session: &Session, mode: ThemeMode, out: &mut dyn Write) -> Result<()> {
    let selected = session.stored_preset();
    writeln!(out, "Presets ({mode})")?;
    for (index, preset) in PRESETS.iter().enumerate() {
        let marker = if selected == Some(index) { '*' } else { ' ' };
        let [primary, accent, secondary] = swatches(preset, mode);
        writeln!(
            out,
            "{marker} {index}  {:<8} {primary} {accent} {secondary}",
            preset.name
        )?;
    }
    Ok(())
}

fn print_token(session: &Session, variable: &str, out: &mut dyn Write) -> Result<()> {
    let token = session
        .store
        .token(variable)
        .with_context(|| format!("Unknown token: {variable}"))?;
    writeln!(out, "{}", token_line(token))?;
    Ok(())
}

fn token_line(token: &ThemeToken) -> String {
    match token.kind {
        TokenKind::Color if !token.value.is_empty() => format!(
            "  {:<28} {:<28} {}",
            token.variable,
            token.value,
            approximate_to_rgb(&token.value)
        ),
        _ => format!("  {:<28} {}", token.variable, token.value),
    }
}
