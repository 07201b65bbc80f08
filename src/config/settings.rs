//! Application settings and their loader.

use std::fmt;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use serde::{Deserialize, Deserializer};

/// Favicon shipped with the amis distribution.
pub const DEFAULT_SITE_ICON: &str = "https://baidu.gitee.io/amis/static/favicon_b3b0647.png";

/// Keys recognized in the `.env` file and the process environment.
const FIELDS: &[&str] = &[
    "name",
    "host",
    "port",
    "secret_key",
    "allow_origins",
    "debug",
    "site_title",
    "site_icon",
    "site_path",
    "language",
    "amis_cdn",
    "amis_pkg",
    "amis_theme",
    "web_root",
    "database_url",
    "database_max_connections",
    "database_acquire_timeout",
];

/// Root configuration structure.
#[derive(Clone, Deserialize)]
pub struct Settings {
    /// Human-readable application name
    pub name: String,

    /// Host address to bind to
    pub host: String,

    /// Port number to listen on
    pub port: u16,

    /// Credential material; must be overridden before any real deployment
    pub secret_key: String,

    /// Origins permitted by CORS; `None` allows any origin
    #[serde(default, deserialize_with = "deserialize_origins")]
    pub allow_origins: Option<Vec<String>>,

    /// Verbose logging and debug-friendly output
    pub debug: bool,

    /// Brand name shown in the admin shell
    pub site_title: String,

    /// Logo shown in the admin shell
    pub site_icon: String,

    /// Mount path of the admin site (e.g. "/admin")
    pub site_path: String,

    /// amis locale, empty for the amis default
    pub language: String,

    /// CDN hosting the amis SDK
    pub amis_cdn: String,

    /// amis package and version on the CDN
    pub amis_pkg: String,

    /// amis theme name
    pub amis_theme: String,

    /// Directory holding `public/`, `pages/` and `index.html`
    pub web_root: String,

    /// MySQL connection URL; the land-cost API is disabled without it
    #[serde(default)]
    pub database_url: Option<String>,

    /// Maximum number of connections in the pool
    pub database_max_connections: u32,

    /// Connection acquire timeout in seconds
    pub database_acquire_timeout: u64,
}

impl Settings {
    /// The backend crate root at build time.
    pub fn base_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }

    /// `.env` in the working directory if present, else `<base_dir>/.env`.
    ///
    /// The build-time crate root does not exist on machines the binary is
    /// deployed to, so the working directory is checked first.
    pub fn env_file_path() -> PathBuf {
        resolve_env_file(std::env::current_dir().ok().as_deref())
    }

    /// Load settings from [`Settings::env_file_path`] and the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the `.env` file is malformed or a value
    /// cannot be parsed into its field's type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env_file(Self::env_file_path())
    }

    /// Load settings from an explicit `.env` file and the process environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_sources(Some(path.as_ref()), std::env::vars())
    }

    /// Build settings from an optional `.env` file and a set of variables.
    ///
    /// Precedence, lowest first: defaults, `.env` entries, `vars`. A missing
    /// `.env` file contributes nothing.
    pub fn from_sources<I>(env_file: Option<&Path>, vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let file_values = match env_file {
            Some(path) => read_env_file(path)?,
            None => Map::new(),
        };

        let settings: Self = Config::builder()
            .set_default("name", "Project_name")?
            .set_default("host", "127.0.0.1")?
            .set_default("port", 2333)?
            .set_default("secret_key", "")?
            .set_default("debug", false)?
            .set_default("site_title", "Amis Admin")?
            .set_default("site_icon", DEFAULT_SITE_ICON)?
            .set_default("site_path", "/admin")?
            .set_default("language", "")?
            .set_default("amis_cdn", "https://unpkg.com")?
            .set_default("amis_pkg", "amis@6.3.0")?
            .set_default("amis_theme", "cxd")?
            .set_default("web_root", ".")?
            .set_default("database_max_connections", 10)?
            .set_default("database_acquire_timeout", 30)?
            .add_source(Environment::default().source(Some(file_values)))
            .add_source(Environment::default().source(Some(known_keys(vars))))
            .build()?
            .try_deserialize()?;

        Ok(settings.normalized())
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether a non-empty secret key has been configured.
    pub fn has_secret_key(&self) -> bool {
        !self.secret_key.is_empty()
    }

    fn normalized(mut self) -> Self {
        if self.database_url.as_deref().is_some_and(|url| url.trim().is_empty()) {
            self.database_url = None;
        }
        self
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |set: bool| if set { "<redacted>" } else { "<empty>" };
        f.debug_struct("Settings")
            .field("name", &self.name)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secret_key", &redact(self.has_secret_key()))
            .field("allow_origins", &self.allow_origins)
            .field("debug", &self.debug)
            .field("site_title", &self.site_title)
            .field("site_icon", &self.site_icon)
            .field("site_path", &self.site_path)
            .field("language", &self.language)
            .field("amis_cdn", &self.amis_cdn)
            .field("amis_pkg", &self.amis_pkg)
            .field("amis_theme", &self.amis_theme)
            .field("web_root", &self.web_root)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("database_max_connections", &self.database_max_connections)
            .field("database_acquire_timeout", &self.database_acquire_timeout)
            .finish()
    }
}

fn resolve_env_file(cwd: Option<&Path>) -> PathBuf {
    cwd.map(|dir| dir.join(".env"))
        .filter(|path| path.is_file())
        .unwrap_or_else(|| Settings::base_dir().join(".env"))
}

/// Keep only entries naming a settings field, with keys lowercased.
fn known_keys<I>(vars: I) -> Map<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| {
            let key = key.to_ascii_lowercase();
            FIELDS.contains(&key.as_str()).then_some((key, value))
        })
        .collect()
}

fn read_env_file(path: &Path) -> Result<Map<String, String>, ConfigError> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(e) if e.not_found() => return Ok(Map::new()),
        Err(e) => {
            return Err(ConfigError::Message(format!(
                "failed to read env file {}: {}",
                path.display(),
                e
            )))
        }
    };

    let pairs = entries
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            ConfigError::Message(format!("malformed env file {}: {}", path.display(), e))
        })?;

    Ok(known_keys(pairs))
}

/// Raw origins as they arrive from a config source.
#[derive(Deserialize)]
#[serde(untagged)]
enum OriginsInput {
    List(Vec<String>),
    Raw(String),
}

/// Accepts a list, a JSON array string, or a comma-separated string.
fn deserialize_origins<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let origins = match Option::<OriginsInput>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(OriginsInput::List(list)) => list,
        Some(OriginsInput::Raw(raw)) => parse_origins(&raw).map_err(serde::de::Error::custom)?,
    };

    let origins: Vec<String> = origins
        .into_iter()
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect();

    Ok((!origins.is_empty()).then_some(origins))
}

/// A JSON array, or a comma list optionally wrapped in brackets.
///
/// Unquoted `.env` values lose their inner double quotes, so
/// `["http://a"]` may arrive as `[http://a]`.
fn parse_origins(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    let raw = raw.trim();
    if raw.starts_with('[') {
        if let Ok(list) = serde_json::from_str(raw) {
            return Ok(list);
        }
        if raw.contains('"') {
            return serde_json::from_str(raw);
        }
    }

    let list = raw.strip_prefix('[').unwrap_or(raw);
    let list = list.strip_suffix(']').unwrap_or(list);
    Ok(list.split(',').map(str::to_string).collect())
}
