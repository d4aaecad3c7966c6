//! Token resolution for output templates.
//!
//! An [`OutputContext`] binds one configuration snapshot and one timestamp
//! and answers "expand this template" queries. Recognized tokens:
//!
//! | token | value |
//! |---|---|
//! | `yyyy` `yy` `MM` `dd` `HH` `mm` `ss` | zero-padded parts of the timestamp |
//! | `revision` | project commit hash |
//! | `shortRevision` | first 7 characters of the commit hash |
//! | `configName` | config file name without extension |
//! | `hostname` | name of this machine |
//! | `platform` | alias of `build.target` |
//! | `targetGroup` | alias of `build.targetGroup` |
//! | any registered field path | see [`FieldRegistry`] |
//!
//! Everything else is left in place.

use super::tokens::substitute;
use crate::config::{Config, FieldRegistry};
use chrono::{DateTime, Local};

/// Template key of the build output path.
pub const BUILD_PATH_KEY: &str = "buildPath";

/// Short token names that stand for a registered field path.
const ALIASES: &[(&str, &str)] = &[
    ("platform", "build.target"),
    ("targetGroup", "build.targetGroup"),
];

const SHORT_REVISION_LEN: usize = 7;

/// Fallback template used when the configured one is empty.
fn default_template(key: &str) -> &'static str {
    match key {
        BUILD_PATH_KEY => "{platform}",
        _ => "",
    }
}

/// Expands output templates against one config snapshot and one timestamp.
#[derive(Debug, Clone, Copy)]
pub struct OutputContext<'a> {
    config: &'a Config,
    now: DateTime<Local>,
}

impl<'a> OutputContext<'a> {
    pub fn new(config: &'a Config, now: DateTime<Local>) -> Self {
        Self { config, now }
    }

    /// Expand the template named `key`.
    ///
    /// `template` is the configured value; when it is empty the built-in
    /// default for `key` is used instead. `key` plays no part in token lookup.
    pub fn expand(&self, key: &str, template: &str) -> String {
        let template = if template.is_empty() {
            default_template(key)
        } else {
            template
        };

        let expanded = substitute(template, |name| self.resolve(name));
        log::debug!("expanded {} '{}' -> '{}'", key, template, expanded);
        expanded
    }

    /// Value of a single token, or `None` if the token is not recognized.
    pub fn resolve(&self, token: &str) -> Option<String> {
        let date_format = match token {
            "yyyy" => Some("%Y"),
            "yy" => Some("%y"),
            "MM" => Some("%m"),
            "dd" => Some("%d"),
            "HH" => Some("%H"),
            "mm" => Some("%M"),
            "ss" => Some("%S"),
            _ => None,
        };
        if let Some(format) = date_format {
            return Some(self.now.format(format).to_string());
        }

        match token {
            "revision" => Some(self.config.revision().to_string()),
            "shortRevision" => Some(
                self.config
                    .revision()
                    .chars()
                    .take(SHORT_REVISION_LEN)
                    .collect(),
            ),
            "configName" => Some(self.config.file_name().to_string()),
            "hostname" => hostname::get()
                .ok()
                .map(|h| h.to_string_lossy().into_owned()),
            _ => {
                let path = ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == token)
                    .map_or(token, |(_, path)| *path);
                FieldRegistry::global().lookup(self.config.raw(), path)
            }
        }
    }
}
