use crate::domain::model::SourceKind;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MonumentError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = concat!("monument-aggregator/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_FAVORITES_DIR: &str = "data";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub favorites: FavoritesConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_armentieres")]
    pub armentieres: SourceConfig,
    #[serde(default = "default_lille")]
    pub lille: SourceConfig,
    #[serde(default = "default_roubaix")]
    pub roubaix: SourceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesConfig {
    #[serde(default = "default_favorites_dir")]
    pub data_dir: String,
}

fn default_source(kind: SourceKind) -> SourceConfig {
    SourceConfig {
        endpoint: kind.default_endpoint(),
    }
}

fn default_armentieres() -> SourceConfig {
    default_source(SourceKind::Armentieres)
}

fn default_lille() -> SourceConfig {
    default_source(SourceKind::Lille)
}

fn default_roubaix() -> SourceConfig {
    default_source(SourceKind::Roubaix)
}

fn default_favorites_dir() -> String {
    DEFAULT_FAVORITES_DIR.to_string()
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            armentieres: default_armentieres(),
            lille: default_lille(),
            roubaix: default_roubaix(),
        }
    }
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            data_dir: default_favorites_dir(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MonumentError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MonumentError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MONUMENTS_PORTAL})，未定義的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MonumentError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn source(&self, kind: SourceKind) -> &SourceConfig {
        match kind {
            SourceKind::Armentieres => &self.sources.armentieres,
            SourceKind::Lille => &self.sources.lille,
            SourceKind::Roubaix => &self.sources.roubaix,
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        for kind in SourceKind::ALL {
            crate::utils::validation::validate_url(
                &format!("sources.{}.endpoint", kind.tag()),
                &self.source(kind).endpoint,
            )?;
        }

        crate::utils::validation::validate_path("favorites.data_dir", &self.favorites.data_dir)?;

        if let Some(timeout) = self.http.timeout_seconds {
            crate::utils::validation::validate_range("http.timeout_seconds", timeout, 1, 600)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn source_endpoint(&self, kind: SourceKind) -> &str {
        &self.source(kind).endpoint
    }

    fn favorites_dir(&self) -> &str {
        &self.favorites.data_dir
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.http.timeout_seconds.map(Duration::from_secs)
    }

    fn user_agent(&self) -> &str {
        self.http.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
