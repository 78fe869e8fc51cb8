//! Shareable presets
//!
//! A preset is the query-string form of the run settings:
//! `?rule=90&cellSize=10&speed=24`. Any parameter may be missing, but a
//! parameter that is present and invalid rejects the whole preset.

use std::fmt;

use super::config::ConfigError;
use super::settings::{Settings, Speed, SurfaceSize};
use crate::core::Rule;

const KEY_RULE: &str = "rule";
const KEY_CELL_SIZE: &str = "cellSize";
const KEY_SPEED: &str = "speed";

/// Settings carried by a preset link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preset {
    pub rule: Option<Rule>,
    pub cell_size: Option<u32>,
    pub speed: Option<Speed>,
}

impl Preset {
    /// Parse a query string, a `?query`, or a full link
    ///
    /// Unknown keys are ignored. When a key repeats, the first value wins.
    pub fn parse(input: &str, surface: SurfaceSize) -> Result<Self, ConfigError> {
        let query = match input.split_once('?') {
            Some((_, query)) => query,
            None => input,
        };
        let query = query.split('#').next().unwrap_or_default().trim();

        let mut preset = Preset::default();
        let mut seen = Vec::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);

            let invalid = || ConfigError::Preset {
                key: key.to_string(),
                value: value.to_string(),
            };
            match key {
                KEY_RULE => {
                    let rule = parse_digits(value).ok_or_else(invalid)?;
                    preset.rule = Some(Rule::try_from(rule).map_err(|_| invalid())?);
                }
                KEY_SPEED => {
                    let speed = parse_digits(value).ok_or_else(invalid)?;
                    preset.speed = Some(Speed::new(speed).map_err(|_| invalid())?);
                }
                KEY_CELL_SIZE => {
                    let cell_size = parse_digits(value)
                        .filter(|size| surface.allowed_cell_sizes().contains(size))
                        .ok_or_else(invalid)?;
                    preset.cell_size = Some(cell_size);
                }
                _ => {}
            }
        }
        Ok(preset)
    }

    /// Preset carrying every field of `settings`
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            rule: Some(settings.rule),
            cell_size: Some(settings.cell_size),
            speed: Some(settings.speed),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rule.is_none() && self.cell_size.is_none() && self.speed.is_none()
    }

    /// Query string without the leading `?`
    pub fn to_query(&self) -> String {
        let mut pairs = Vec::with_capacity(3);
        if let Some(rule) = self.rule {
            pairs.push(format!("{}={}", KEY_RULE, rule));
        }
        if let Some(cell_size) = self.cell_size {
            pairs.push(format!("{}={}", KEY_CELL_SIZE, cell_size));
        }
        if let Some(speed) = self.speed {
            pairs.push(format!("{}={}", KEY_SPEED, speed));
        }
        pairs.join("&")
    }

    /// Set this preset's parameters on `base`
    ///
    /// Other query parameters and the fragment are kept; the ones this
    /// preset carries replace any existing values.
    pub fn share_link(&self, base: &str) -> String {
        let (base, fragment) = match base.split_once('#') {
            Some((base, fragment)) => (base, Some(fragment)),
            None => (base, None),
        };
        let (path, query) = base.split_once('?').unwrap_or((base, ""));

        let ours = self.to_query();
        let mut pairs: Vec<&str> = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter(|pair| {
                let key = pair.split_once('=').map_or(*pair, |(key, _)| key);
                !self.carries(key)
            })
            .collect();
        if !ours.is_empty() {
            pairs.push(&ours);
        }

        let mut link = format!("{}?{}", path, pairs.join("&"));
        if let Some(fragment) = fragment {
            link.push('#');
            link.push_str(fragment);
        }
        link
    }

    fn carries(&self, key: &str) -> bool {
        match key {
            KEY_RULE => self.rule.is_some(),
            KEY_CELL_SIZE => self.cell_size.is_some(),
            KEY_SPEED => self.speed.is_some(),
            _ => false,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.to_query())
    }
}

/// Non-empty ASCII digits only; no signs, spaces or prefixes
fn parse_digits(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
