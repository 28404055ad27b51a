use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

use crate::groups::{GroupDefinition, GroupTable};

const CONFIG_PATH_ENV: &str = "MODELDECK_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "modeldeck.toml";

/// Process-wide configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    pub site: SiteSettings,
    pub groups: GroupTable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// The only path that renders the model page.
    pub root_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamSettings {
    pub url: String,
    pub api_key: String,
    pub disable_system_proxy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub name: String,
    pub logo: String,
    pub icon: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    server: ServerSection,
    #[serde(default)]
    upstream: UpstreamSection,
    #[serde(default)]
    site: SiteSection,
    #[serde(default)]
    groups: Option<Vec<GroupDefinition>>,
    #[serde(default)]
    default_group: Option<GroupDefinition>,
}

#[derive(Debug, Deserialize)]
struct ServerSection {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_root_path")]
    root_path: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            root_path: default_root_path(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UpstreamSection {
    #[serde(default = "default_api_url")]
    url: String,
    #[serde(default)]
    api_key: String,
    #[serde(default)]
    disable_system_proxy: bool,
}

impl Default for UpstreamSection {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            api_key: String::new(),
            disable_system_proxy: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SiteSection {
    #[serde(default = "default_site_name")]
    name: String,
    #[serde(default = "default_site_image")]
    logo: String,
    #[serde(default = "default_site_image")]
    icon: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            logo: default_site_image(),
            icon: default_site_image(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_root_path() -> String {
    "/".to_string()
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/models".to_string()
}

fn default_site_name() -> String {
    "NewAPI Model List".to_string()
}

fn default_site_image() -> String {
    "https://docs.newapi.pro/assets/logo.png".to_string()
}

impl AppConfig {
    /// Load from the optional TOML file, then apply environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Like [`AppConfig::load`], reading variables through `lookup`. A blank
    /// `MODELDECK_CONFIG` counts as unset.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let config_path = lookup(CONFIG_PATH_ENV).filter(|value| !value.trim().is_empty());
        let file_config = load_from_file(config_path)?.unwrap_or_default();
        Self::resolve(file_config, lookup)
    }

    /// Build from environment-style lookups only, with built-in defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Self::resolve(FileConfig::default(), lookup)
    }

    /// Merge a parsed file with overrides from `lookup`. Blank values count as unset.
    pub fn resolve(
        file: FileConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match var("MODELDECK_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid MODELDECK_PORT: {}", value))?,
            None => file.server.port,
        };

        let server = ServerSettings {
            host: var("MODELDECK_HOST").unwrap_or(file.server.host),
            port,
            root_path: normalize_root_path(
                &var("MODELDECK_ROOT_PATH").unwrap_or(file.server.root_path),
            ),
        };

        let upstream = UpstreamSettings {
            url: var("API_URL").unwrap_or(file.upstream.url),
            api_key: var("API_KEY").unwrap_or(file.upstream.api_key),
            disable_system_proxy: match var("MODELDECK_DISABLE_SYSTEM_PROXY") {
                Some(value) => parse_flag(&value)
                    .with_context(|| format!("Invalid MODELDECK_DISABLE_SYSTEM_PROXY: {}", value))?,
                None => file.upstream.disable_system_proxy,
            },
        };

        let site = SiteSettings {
            name: var("SITE_NAME").unwrap_or(file.site.name),
            logo: var("SITE_LOGO").unwrap_or(file.site.logo),
            icon: var("SITE_ICON").unwrap_or(file.site.icon),
        };

        let builtin = GroupTable::builtin();
        let groups = GroupTable::new(
            file.groups.unwrap_or_else(|| builtin.groups().to_vec()),
            file.default_group
                .unwrap_or_else(|| builtin.default_group().clone()),
        );

        Ok(Self {
            server,
            upstream,
            site,
            groups,
        })
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {:?}", other),
    }
}

fn normalize_root_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn load_from_file(config_path: Option<String>) -> anyhow::Result<Option<FileConfig>> {
    let path = if let Some(path) = config_path {
        Some(path)
    } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
        Some(DEFAULT_CONFIG_FILE.to_string())
    } else {
        None
    };

    let Some(path) = path else {
        return Ok(None);
    };

    let contents = fs::read_to_string(&path)
        .map_err(|err| anyhow::anyhow!("Failed to read config {}: {}", path, err))?;
    let parsed: FileConfig = toml::from_str(&contents)
        .map_err(|err| anyhow::anyhow!("Failed to parse config {}: {}", path, err))?;
    Ok(Some(parsed))
}
