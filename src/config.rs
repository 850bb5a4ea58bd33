use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(test)]
use std::collections::HashMap;

pub const WEBHOOK_URL: &str = "WEBHOOK_URL";
pub const GITHUB_WORKSPACE: &str = "GITHUB_WORKSPACE";
pub const MOD_JSON_PATH: &str = "MOD_JSON_PATH";
pub const CHANGELOG_TEXT: &str = "CHANGELOG_TEXT";
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const GITHUB_REF: &str = "GITHUB_REF";
pub const NOTIFIER_CONFIG: &str = "NOTIFIER_CONFIG";

const DEFAULT_DESCRIPTOR_FILE_NAME: &str = "mod.json";
const DEFAULT_ACCENT_COLOR: u32 = 4176208;
const DEFAULT_VERSION: &str = "1.0.0";

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} not provided")]
    MissingVariable(&'static str),
    #[error("Cannot resolve the current directory")]
    CurrentDir {
        #[source]
        cause: std::io::Error,
    },
    #[error("Cannot read options file {}", path.display())]
    ReadOptions {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
    #[error("Cannot parse options file {}", path.display())]
    ParseOptions {
        path: PathBuf,
        #[source]
        cause: serde_yaml::Error,
    },
}

/// Read access to the process environment.
pub trait Environment {
    fn var(&self, key: &str) -> Option<String>;

    fn current_dir(&self) -> Result<PathBuf, Error>;

    /// Like [`Environment::var`], but an empty value counts as unset.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn current_dir(&self) -> Result<PathBuf, Error> {
        std::env::current_dir().map_err(|cause| Error::CurrentDir { cause })
    }
}

#[cfg(test)]
impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn current_dir(&self) -> Result<PathBuf, Error> {
        Ok(PathBuf::from("."))
    }
}

/// Everything a single run needs from the environment.
#[derive(Debug, Clone)]
pub struct Context {
    pub webhook_url: String,
    pub repository: String,
    pub git_ref: String,
    pub changelog: String,
    pub descriptor_path: PathBuf,
    pub options_path: Option<PathBuf>,
}

impl Context {
    pub fn resolve(env: &impl Environment) -> Result<Context, Error> {
        let webhook_url = env
            .non_empty(WEBHOOK_URL)
            .ok_or(Error::MissingVariable(WEBHOOK_URL))?;

        let workspace = match env.non_empty(GITHUB_WORKSPACE) {
            Some(workspace) => PathBuf::from(workspace),
            None => env.current_dir()?,
        };

        let descriptor_path = match env.non_empty(MOD_JSON_PATH) {
            Some(path) => resolve_against(&workspace, path),
            None => workspace.join(DEFAULT_DESCRIPTOR_FILE_NAME),
        };

        let options_path = env
            .non_empty(NOTIFIER_CONFIG)
            .map(|path| resolve_against(&workspace, path));

        Ok(Context {
            webhook_url,
            repository: env.var(GITHUB_REPOSITORY).unwrap_or_default(),
            git_ref: env.var(GITHUB_REF).unwrap_or_default(),
            changelog: env.var(CHANGELOG_TEXT).unwrap_or_default(),
            descriptor_path,
            options_path,
        })
    }
}

fn resolve_against(base: &Path, path: impl Into<PathBuf>) -> PathBuf {
    let path = path.into();
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    #[default]
    Custom,
    Unicode,
    None,
}

/// What to do with the download button when the descriptor has no id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingIdPolicy {
    #[default]
    OmitButton,
    OmitUrl,
}

/// Presentation knobs for the composed message.
#[derive(Debug, Clone, Deserialize)]
pub struct Options {
    #[serde(default = "Options::default_accent_color")]
    pub accent_color: u32,
    #[serde(default)]
    pub spoiler: bool,
    #[serde(default = "Options::enabled")]
    pub footer: bool,
    #[serde(default = "Options::enabled")]
    pub with_components: bool,
    #[serde(default)]
    pub icons: IconStyle,
    #[serde(default = "Options::default_version")]
    pub default_version: String,
    #[serde(default)]
    pub missing_id: MissingIdPolicy,
    #[serde(default = "Options::enabled")]
    pub show_description: bool,
    /// Without a logo, put the text blocks straight into the container
    /// instead of an accessory-less section.
    #[serde(default)]
    pub inline_text_without_logo: bool,
    pub timeout_secs: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            accent_color: Options::default_accent_color(),
            spoiler: false,
            footer: true,
            with_components: true,
            icons: IconStyle::default(),
            default_version: Options::default_version(),
            missing_id: MissingIdPolicy::default(),
            show_description: true,
            inline_text_without_logo: false,
            timeout_secs: None,
        }
    }
}

impl Options {
    /// Defaults unless the run points at an options file.
    pub fn load(path: Option<&Path>) -> Result<Options, Error> {
        let Some(path) = path else {
            return Ok(Options::default());
        };

        let options_string = std::fs::read_to_string(path).map_err(|cause| Error::ReadOptions {
            path: path.to_owned(),
            cause,
        })?;

        serde_yaml::from_str::<Options>(&options_string).map_err(|cause| Error::ParseOptions {
            path: path.to_owned(),
            cause,
        })
    }

    fn default_accent_color() -> u32 {
        DEFAULT_ACCENT_COLOR
    }

    fn default_version() -> String {
        DEFAULT_VERSION.to_owned()
    }

    fn enabled() -> bool {
        true
    }
}
