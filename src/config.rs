//! Configuration handling for the contact form

use crate::state::ChoiceOption;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the configured endpoint
pub const ENDPOINT_ENV: &str = "CONTACT_FORM_ENDPOINT";

/// Default wait of the simulated submission
const DEFAULT_SIMULATED_DELAY_MS: u64 = 2000;

/// Which submission strategy the form uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionMode {
    Remote,
    Simulated,
}

/// Where a successful submission is announced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuccessSurface {
    Overlay,
    Toast,
    Both,
}

impl SuccessSurface {
    pub fn shows_overlay(&self) -> bool {
        matches!(self, Self::Overlay | Self::Both)
    }

    pub fn shows_toast(&self) -> bool {
        matches!(self, Self::Toast | Self::Both)
    }
}

/// User configuration for the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Submission strategy; defaults to remote when an endpoint is set
    pub mode: Option<SubmissionMode>,
    /// Remote endpoint receiving the JSON payload
    pub endpoint: Option<String>,
    /// Delay of the simulated submission in milliseconds
    pub simulated_delay_ms: Option<u64>,
    /// Success feedback surface
    pub success_surface: Option<SuccessSurface>,
    /// Extra fields posted with every submission (e.g. an access key)
    pub hidden_fields: Option<BTreeMap<String, String>>,
    /// Options of the service select
    pub services: Option<Vec<ChoiceOption>>,
}

/// Log file written under [`FormConfig::log_dir`]
pub const LOG_FILE_NAME: &str = "contact-form.log";

impl FormConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "contactform", "contact-form-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory holding [`LOG_FILE_NAME`]
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                return Self::parse(&content)
                    .with_context(|| format!("parsing {}", path.display()));
            }
        }

        Ok(Self::default())
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Apply `CONTACT_FORM_ENDPOINT` if it is set and non-empty
    pub fn with_env_overrides(self) -> Self {
        self.with_endpoint_override(std::env::var(ENDPOINT_ENV).ok())
    }

    fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = Some(endpoint);
        }
        self
    }

    pub fn mode(&self) -> SubmissionMode {
        match (self.mode, &self.endpoint) {
            (Some(mode), _) => mode,
            (None, Some(_)) => SubmissionMode::Remote,
            (None, None) => SubmissionMode::Simulated,
        }
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(
            self.simulated_delay_ms
                .unwrap_or(DEFAULT_SIMULATED_DELAY_MS),
        )
    }

    pub fn success_surface(&self) -> SuccessSurface {
        self.success_surface.unwrap_or(match self.mode() {
            SubmissionMode::Remote => SuccessSurface::Toast,
            SubmissionMode::Simulated => SuccessSurface::Overlay,
        })
    }

    pub fn hidden_fields(&self) -> Vec<(String, String)> {
        self.hidden_fields
            .as_ref()
            .map(|fields| {
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn services(&self) -> Vec<ChoiceOption> {
        self.services.clone().unwrap_or_else(default_services)
    }
}

fn default_services() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("consulting", "Consulting"),
        ChoiceOption::new("development", "Development"),
        ChoiceOption::new("design", "Design"),
        ChoiceOption::new("support", "Support"),
        ChoiceOption::new("other", "Other"),
    ]
}
