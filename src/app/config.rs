use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use ratatui::prelude::Color;
use serde::Deserialize;

use super::theme::Theme;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    pub(crate) theme: Option<String>,
    pub(crate) log_file: Option<PathBuf>,
    pub(crate) themes: Option<HashMap<String, ThemeOverride>>,
}

impl Config {
    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Named theme with any matching overrides applied. Unknown names fall
    /// back to the default theme.
    pub(crate) fn resolve_theme(&self) -> (String, Theme) {
        let name = self
            .theme
            .as_deref()
            .filter(|n| Theme::from_name(n).is_some())
            .unwrap_or("light")
            .to_ascii_lowercase();
        let mut theme = Theme::from_name(&name).unwrap_or_default();
        if let Some(overrides) = self.themes.as_ref().and_then(|t| t.get(&name)) {
            apply_theme_overrides(&mut theme, overrides);
        }
        (name, theme)
    }
}

fn candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from("mvim.toml"), PathBuf::from(".mvim.toml")];
    if let Ok(home) = std::env::var("HOME") {
        candidates.push(PathBuf::from(home).join(".config/mvim/config.toml"));
    }
    candidates
}

pub fn load_config() -> Result<Config> {
    for path in candidates() {
        if !path.exists() {
            continue;
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        return parse_config(&content).with_context(|| format!("parsing {}", path.display()));
    }
    Ok(Config::default())
}

pub(crate) fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

#[derive(Debug, Deserialize, Default, Clone)]
pub(crate) struct ThemeOverride {
    pub(crate) status_fg: Option<String>,
    pub(crate) status_bg: Option<String>,
    pub(crate) message_fg: Option<String>,
    pub(crate) filler_fg: Option<String>,
}

pub(crate) fn apply_theme_overrides(theme: &mut Theme, overrides: &ThemeOverride) {
    let slots = [
        (&overrides.status_fg, &mut theme.status_fg),
        (&overrides.status_bg, &mut theme.status_bg),
        (&overrides.message_fg, &mut theme.message_fg),
        (&overrides.filler_fg, &mut theme.filler_fg),
    ];
    for (value, slot) in slots {
        if let Some(color) = value.as_deref().and_then(parse_color) {
            *slot = color;
        }
    }
}

fn parse_color(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
