//! Configuration — YAML config + env var overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::replies;

/// Which chat surface a set of settings belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatProfile {
    /// Full chat on the `/chatbot` page
    Page,
    /// Modal chat opened from the home page
    Widget,
}

impl ChatProfile {
    pub fn defaults(self) -> ChatSettings {
        match self {
            ChatProfile::Page => ChatSettings::page(),
            ChatProfile::Widget => ChatSettings::widget(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChatProfile::Page => "page",
            ChatProfile::Widget => "widget",
        }
    }
}

impl std::str::FromStr for ChatProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page" => Ok(ChatProfile::Page),
            "widget" => Ok(ChatProfile::Widget),
            other => Err(format!("unknown chat profile '{}'", other)),
        }
    }
}

/// Copy and timing of one chat surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSettings {
    pub assistant_name: String,

    /// Shown under the assistant name in the chat header
    pub status_line: String,

    /// Seeded bot message at session start
    pub welcome_message: String,

    /// Bot reply; `{question}` is replaced with the user's text
    pub reply_template: String,

    /// Simulated latency before the reply lands
    pub reply_delay_ms: u64,

    pub input_placeholder: String,

    /// Suggestions offered while only the welcome message is shown
    #[serde(default)]
    pub quick_questions: Vec<String>,
}

impl ChatSettings {
    pub fn page() -> Self {
        Self {
            assistant_name: replies::PAGE_ASSISTANT_NAME.into(),
            status_line: replies::PAGE_STATUS_LINE.into(),
            welcome_message: replies::PAGE_WELCOME.into(),
            reply_template: replies::PAGE_REPLY_TEMPLATE.into(),
            reply_delay_ms: replies::DEFAULT_REPLY_DELAY_MS,
            input_placeholder: replies::PAGE_INPUT_PLACEHOLDER.into(),
            quick_questions: replies::QUICK_QUESTIONS
                .iter()
                .map(|q| q.to_string())
                .collect(),
        }
    }

    pub fn widget() -> Self {
        Self {
            assistant_name: replies::WIDGET_ASSISTANT_NAME.into(),
            status_line: replies::WIDGET_STATUS_LINE.into(),
            welcome_message: replies::WIDGET_WELCOME.into(),
            reply_template: replies::WIDGET_REPLY_TEMPLATE.into(),
            reply_delay_ms: replies::DEFAULT_REPLY_DELAY_MS,
            input_placeholder: replies::WIDGET_INPUT_PLACEHOLDER.into(),
            quick_questions: Vec::new(),
        }
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    fn validate(&self, profile: ChatProfile) -> Result<()> {
        if self.welcome_message.trim().is_empty() {
            anyhow::bail!("{} chat: welcome_message must not be empty", profile.as_str());
        }
        if !self.reply_template.contains(replies::QUESTION_PLACEHOLDER) {
            anyhow::bail!(
                "{} chat: reply_template must contain {}",
                profile.as_str(),
                replies::QUESTION_PLACEHOLDER
            );
        }
        Ok(())
    }
}

/// A `page:`/`widget:` block as written in YAML; missing keys fall back
/// to the profile's defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsOverlay {
    assistant_name: Option<String>,
    status_line: Option<String>,
    welcome_message: Option<String>,
    reply_template: Option<String>,
    reply_delay_ms: Option<u64>,
    input_placeholder: Option<String>,
    quick_questions: Option<Vec<String>>,
}

impl SettingsOverlay {
    fn over(self, base: ChatSettings) -> ChatSettings {
        ChatSettings {
            assistant_name: self.assistant_name.unwrap_or(base.assistant_name),
            status_line: self.status_line.unwrap_or(base.status_line),
            welcome_message: self.welcome_message.unwrap_or(base.welcome_message),
            reply_template: self.reply_template.unwrap_or(base.reply_template),
            reply_delay_ms: self.reply_delay_ms.unwrap_or(base.reply_delay_ms),
            input_placeholder: self.input_placeholder.unwrap_or(base.input_placeholder),
            quick_questions: self.quick_questions.unwrap_or(base.quick_questions),
        }
    }
}

fn page_settings<'de, D: Deserializer<'de>>(
    d: D,
) -> std::result::Result<ChatSettings, D::Error> {
    Ok(SettingsOverlay::deserialize(d)?.over(ChatSettings::page()))
}

fn widget_settings<'de, D: Deserializer<'de>>(
    d: D,
) -> std::result::Result<ChatSettings, D::Error> {
    Ok(SettingsOverlay::deserialize(d)?.over(ChatSettings::widget()))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_university_name")]
    pub university_name: String,

    /// Settings for the `/chatbot` page
    #[serde(default = "ChatSettings::page", deserialize_with = "page_settings")]
    pub page: ChatSettings,

    /// Settings for the home page modal
    #[serde(default = "ChatSettings::widget", deserialize_with = "widget_settings")]
    pub widget: ChatSettings,

    /// Port the static server listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Built frontend directory, relative to the project root unless absolute
    #[serde(default = "default_frontend_dist")]
    pub frontend_dist: String,

    /// Resolved project root (set at load time, not serialized from YAML)
    #[serde(skip)]
    pub project_root: PathBuf,
}

fn default_university_name() -> String {
    "Murang'a University".into()
}
fn default_port() -> u16 {
    8000
}
fn default_frontend_dist() -> String {
    "crates/mu-chat-web/frontend/dist".into()
}

impl Config {
    /// Load config from a YAML file with env var overrides.
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        let mut config: Config =
            serde_yaml::from_str(&content).context("Failed to parse config.yaml")?;

        let parent = config_path.parent().unwrap_or(Path::new("."));
        config.project_root = parent
            .canonicalize()
            .unwrap_or_else(|_| parent.to_path_buf());

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from the default location (project_root/config.yaml)
    pub fn load_from_dir(project_root: &Path) -> Result<Self> {
        Self::load(&project_root.join("config.yaml"))
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by env var name.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(delay) = var("MU_CHAT_REPLY_DELAY_MS") {
            let ms: u64 = delay
                .trim()
                .parse()
                .with_context(|| format!("MU_CHAT_REPLY_DELAY_MS is not a number: {}", delay))?;
            self.page.reply_delay_ms = ms;
            self.widget.reply_delay_ms = ms;
        }

        if let Some(dist) = var("MU_CHAT_FRONTEND_DIST") {
            self.frontend_dist = dist;
        }

        if let Some(port) = var("PORT") {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port: {}", port))?;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        self.page.validate(ChatProfile::Page)?;
        self.widget.validate(ChatProfile::Widget)
    }

    pub fn settings(&self, profile: ChatProfile) -> &ChatSettings {
        match profile {
            ChatProfile::Page => &self.page,
            ChatProfile::Widget => &self.widget,
        }
    }

    /// Absolute path of the built frontend.
    pub fn resolve_frontend_dist(&self) -> PathBuf {
        let p = Path::new(&self.frontend_dist);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.project_root.join(p)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            university_name: default_university_name(),
            page: ChatSettings::page(),
            widget: ChatSettings::widget(),
            port: default_port(),
            frontend_dist: default_frontend_dist(),
            project_root: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_load_config_defaults() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "university_name: Murang'a University").unwrap();

        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.university_name, "Murang'a University");
        assert_eq!(config.page, ChatSettings::page());
        assert_eq!(config.widget, ChatSettings::widget());
        assert_eq!(config.page.reply_delay_ms, 1500);
        assert_eq!(config.page.quick_questions.len(), 6);
        assert!(config.widget.quick_questions.is_empty());
    }

    #[test]
    fn test_load_config_custom_values() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            "frontend_dist: /srv/site\nwidget:\n  assistant_name: Helper\n  status_line: Online\n  welcome_message: Hi\n  reply_template: 'You said {{question}}'\n  reply_delay_ms: 10\n  input_placeholder: Type"
        )
        .unwrap();

        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.widget.assistant_name, "Helper");
        assert_eq!(config.widget.reply_delay(), Duration::from_millis(10));
        assert_eq!(config.settings(ChatProfile::Widget).welcome_message, "Hi");
        assert_eq!(config.settings(ChatProfile::Page), &ChatSettings::page());
        assert_eq!(config.resolve_frontend_dist(), PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_template_without_placeholder_fails() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            "page:\n  assistant_name: A\n  status_line: B\n  welcome_message: Hi\n  reply_template: Thanks for asking\n  reply_delay_ms: 1500\n  input_placeholder: Ask"
        )
        .unwrap();

        assert!(Config::load(tmp.path()).is_err());
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from_dir(dir.path()).is_err());
    }

    #[test]
    fn test_profile_parse() {
        assert_eq!("page".parse::<ChatProfile>(), Ok(ChatProfile::Page));
        assert_eq!("widget".parse::<ChatProfile>(), Ok(ChatProfile::Widget));
        assert!("modal".parse::<ChatProfile>().is_err());
        assert_eq!(ChatProfile::Widget.defaults(), ChatSettings::widget());
    }

    #[test]
    fn test_partial_profile_block_keeps_defaults() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "page:\n  reply_delay_ms: 500\nwidget:\n  status_line: Away").unwrap();

        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.page.reply_delay_ms, 500);
        assert_eq!(config.page.welcome_message, ChatSettings::page().welcome_message);
        assert_eq!(config.page.quick_questions.len(), 6);
        assert_eq!(config.widget.status_line, "Away");
        assert_eq!(config.widget.reply_template, ChatSettings::widget().reply_template);
    }

    #[test]
    fn test_empty_profile_block_is_default() {
        let config: Config = serde_yaml::from_str("widget: {}").unwrap();
        assert_eq!(config.widget, ChatSettings::widget());
        assert_eq!(config.page, ChatSettings::page());
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = Config::default();
        config
            .apply_overrides(vars(&[
                ("MU_CHAT_REPLY_DELAY_MS", " 250 "),
                ("MU_CHAT_FRONTEND_DIST", "/srv/mu"),
                ("PORT", "9090"),
            ]))
            .unwrap();

        assert_eq!(config.page.reply_delay_ms, 250);
        assert_eq!(config.widget.reply_delay_ms, 250);
        assert_eq!(config.frontend_dist, "/srv/mu");
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_no_overrides_leave_config_alone() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[])).unwrap();
        assert_eq!(config.page, ChatSettings::page());
        assert_eq!(config.port, 8000);
        assert_eq!(config.frontend_dist, "crates/mu-chat-web/frontend/dist");
    }

    #[test]
    fn test_bad_override_values_fail() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(vars(&[("MU_CHAT_REPLY_DELAY_MS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("MU_CHAT_REPLY_DELAY_MS"));

        let mut config = Config::default();
        assert!(config.apply_overrides(vars(&[("PORT", "70000")])).is_err());
    }
}
