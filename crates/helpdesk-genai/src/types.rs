use crate::error::GenAiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable overriding the request timeout.
pub const TIMEOUT_ENV: &str = "GEMINI_TIMEOUT_SECS";
/// Model every request goes to unless the caller picks another one.
pub const DEFAULT_MODEL: &str = "googleai/gemini-2.0-flash";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Provider plugin the client is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Plugin {
    #[default]
    GoogleAi,
}

impl Plugin {
    pub fn name(self) -> &'static str {
        match self {
            Plugin::GoogleAi => "googleai",
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Plugin::GoogleAi => "https://generativelanguage.googleapis.com/v1beta",
        }
    }
}

/// A `<provider>/<model-name>` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRef {
    pub provider: String,
    pub name: String,
}

impl FromStr for ModelRef {
    type Err = GenAiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (provider, name) = s
            .split_once('/')
            .ok_or_else(|| GenAiError::InvalidModel(s.to_string()))?;
        if provider.is_empty() || name.is_empty() || name.contains('/') {
            return Err(GenAiError::InvalidModel(s.to_string()));
        }
        Ok(Self {
            provider: provider.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.provider, self.name)
    }
}

#[derive(Clone)]
pub struct GenAiConfig {
    pub api_key: String,
    pub plugin: Plugin,
    pub default_model: String,
    pub timeout_secs: u64,
}

impl GenAiConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, GenAiError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GenAiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(GenAiError::MissingApiKey { var: API_KEY_ENV })?;

        let timeout_secs = match lookup(TIMEOUT_ENV) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e: std::num::ParseIntError| {
                GenAiError::InvalidSetting {
                    var: TIMEOUT_ENV,
                    message: e.to_string(),
                }
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            plugin: Plugin::GoogleAi,
            default_model: DEFAULT_MODEL.to_string(),
            timeout_secs,
        })
    }
}

impl fmt::Debug for GenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenAiConfig")
            .field("api_key", &"<redacted>")
            .field("plugin", &self.plugin)
            .field("default_model", &self.default_model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

// Wire types for `models/<model>:generateContent`.

#[derive(Debug, Clone, Serialize)]
pub(crate) struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub(crate) struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Content,
}

impl GenerateRequest {
    pub fn user_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

impl GenerateResponse {
    /// Text of the first candidate, all parts joined.
    pub fn first_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
