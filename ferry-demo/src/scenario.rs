//! Scripted sessions read from JSON.

use std::collections::BTreeMap;
use std::path::Path;

use ferry::prelude::*;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Languages reported by the simulated host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Languages {
    pub element: Option<String>,
    pub document: Option<String>,
    pub platform: Option<String>,
}

/// One scripted step.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Feed an input event to the instance.
    Input(Input),
    /// Sleep for this many milliseconds, then deliver due announcements.
    Wait(u64),
    /// Apply a batch of structural changes.
    Mutations(Vec<Mutation>),
    /// Select every item of the named container.
    SelectAll(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub scope: String,
    #[serde(default)]
    pub languages: Languages,
    #[serde(default)]
    pub touch: bool,
    #[serde(default)]
    pub keyboard_toggles: bool,
    /// Extra translation tables, keyed by language code.
    #[serde(default)]
    pub locales: BTreeMap<String, BTreeMap<String, String>>,
    pub containers: Vec<ContainerSpec>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// A host that resolves the scenario's scope and reports its languages.
    pub fn host(&self) -> MemoryHost {
        MemoryHost::new(&self.scope)
            .with_languages(
                self.languages.element.as_deref(),
                self.languages.document.as_deref(),
                self.languages.platform.as_deref(),
            )
            .with_touch(self.touch)
    }

    pub fn locales(&self) -> Result<Locales, ScenarioError> {
        let mut locales = Locales::new();
        for (code, entries) in &self.locales {
            locales
                .register(code, entries.clone())
                .map_err(ConfigError::from)?;
        }
        Ok(locales)
    }

    pub fn config(&self) -> FerryConfig {
        FerryConfig::default().with_keyboard_toggles(self.keyboard_toggles)
    }
}
