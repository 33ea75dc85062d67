use crate::core::ConfigProvider;
use crate::utils::error::{MapError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SEARCH_BASE_URL: &str = "https://openapi.naver.com";
pub const DEFAULT_GEOCODE_BASE_URL: &str = "https://naveropenapi.apigw.ntruss.com";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

fn default_search_base_url() -> String {
    DEFAULT_SEARCH_BASE_URL.to_string()
}

fn default_geocode_base_url() -> String {
    DEFAULT_GEOCODE_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub search: SearchApiConfig,
    pub geocode: GeocodeApiConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 搜尋 API（openapi.naver.com）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchApiConfig {
    #[serde(default = "default_search_base_url")]
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
}

impl SearchApiConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            base_url: default_search_base_url(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

/// 地理編碼 API（NCP gateway）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeApiConfig {
    #[serde(default = "default_geocode_base_url")]
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
}

impl GeocodeApiConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            base_url: default_geocode_base_url(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 設定後每日寫入 `coordinate_search_YYYYMMDD.log`
    pub directory: Option<PathBuf>,
}

impl MapConfig {
    pub fn new(search: SearchApiConfig, geocode: GeocodeApiConfig) -> Self {
        Self {
            search,
            geocode,
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MapError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 從環境變數建立配置
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            validation::validate_required_field(name, &lookup(name)).cloned()
        };

        let mut search =
            SearchApiConfig::new(required("NAVER_CLIENT_ID")?, required("NAVER_CLIENT_SECRET")?);
        if let Some(url) = lookup("NAVER_SEARCH_BASE_URL") {
            search.base_url = url;
        }

        let mut geocode = GeocodeApiConfig::new(
            required("NAVER_MAPS_CLIENT_ID")?,
            required("NAVER_MAPS_CLIENT_SECRET")?,
        );
        if let Some(url) = lookup("NAVER_GEOCODE_BASE_URL") {
            geocode.base_url = url;
        }

        let mut config = Self::new(search, geocode);
        if let Some(timeout) = lookup("NAVER_HTTP_TIMEOUT_SECONDS") {
            config.http.timeout_seconds = timeout.trim().parse().map_err(|_| {
                MapError::invalid(
                    "NAVER_HTTP_TIMEOUT_SECONDS",
                    &timeout,
                    "Value must be a whole number of seconds",
                )
            })?;
        }
        config.logging.directory = lookup("NAVER_MAP_LOG_DIR").map(PathBuf::from);

        Ok(config)
    }

    /// 替換環境變數 (例如 ${NAVER_CLIENT_ID})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MapError::Config {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for MapConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("search.base_url", &self.search.base_url)?;
        validation::validate_non_empty_string("search.client_id", &self.search.client_id)?;
        validation::validate_non_empty_string("search.client_secret", &self.search.client_secret)?;

        validation::validate_url("geocode.base_url", &self.geocode.base_url)?;
        validation::validate_non_empty_string("geocode.client_id", &self.geocode.client_id)?;
        validation::validate_non_empty_string(
            "geocode.client_secret",
            &self.geocode.client_secret,
        )?;

        validation::validate_range("http.timeout_seconds", self.http.timeout_seconds, 1, 300)?;

        // 未替換的 ${VAR} 代表環境變數缺失
        for (field, value) in [
            ("search.client_id", &self.search.client_id),
            ("search.client_secret", &self.search.client_secret),
            ("geocode.client_id", &self.geocode.client_id),
            ("geocode.client_secret", &self.geocode.client_secret),
        ] {
            if value.starts_with("${") {
                return Err(MapError::MissingConfig {
                    field: format!("{} ({})", field, value),
                });
            }
        }

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}

impl ConfigProvider for MapConfig {
    fn search_base_url(&self) -> &str {
        &self.search.base_url
    }

    fn search_credentials(&self) -> (&str, &str) {
        (&self.search.client_id, &self.search.client_secret)
    }

    fn geocode_base_url(&self) -> &str {
        &self.geocode.base_url
    }

    fn geocode_credentials(&self) -> (&str, &str) {
        (&self.geocode.client_id, &self.geocode.client_secret)
    }

    fn timeout_seconds(&self) -> u64 {
        self.http.timeout_seconds
    }
}
