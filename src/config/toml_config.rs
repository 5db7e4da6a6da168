use crate::domain::model::SecurityContext;
use crate::utils::error::{EmsError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SERVICE_URL: &str =
    "https://mailworx.marketingsuite.info/services/serviceagent.asmx";
pub const DEFAULT_CONFIG_FILE: &str = "ems-config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmsConfig {
    pub service: ServiceConfig,
    pub credentials: CredentialsConfig,
    pub campaign: CampaignConfig,
    pub statistics: StatisticsConfig,
    pub trigger_mail: TriggerMailConfig,
    pub media: MediaConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub url: String,
    pub namespace: String,
    pub language: String,
    pub timeout_seconds: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVICE_URL.to_string(),
            namespace: crate::adapters::soap::DEFAULT_SERVICE_NAMESPACE.to_string(),
            language: "EN".to_string(),
            timeout_seconds: 60,
        }
    }
}

/// Login data; the application must be registered in eMS before use.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub account: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub application: Option<String>,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("account", &self.account)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("application", &self.application)
            .finish()
    }
}

impl CredentialsConfig {
    /// `None` until all four values are present.
    pub fn security_context(&self) -> Option<SecurityContext> {
        Some(SecurityContext {
            account: self.account.clone()?,
            username: self.username.clone()?,
            password: self.password.clone()?,
            source: self.application.clone()?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    /// Name of the in-work campaign used as the copy source.
    pub name: String,
    /// Static profile the sample subscribers are imported into.
    pub profile_name: String,
    pub sender_address: String,
    pub sender_name: String,
    pub subject: String,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            name: "[CAMPAIGN_NAME]".to_string(),
            profile_name: "[PROFILE_NAME]".to_string(),
            sender_address: "service@eworx.at".to_string(),
            sender_name: "eworx Service Crew".to_string(),
            subject: "My first Newsletter".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    pub campaign_id: String,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            campaign_id: "[CAMPAIGN_ID]".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerMailConfig {
    pub campaign_id: String,
    pub subscriber_id: String,
}

impl Default for TriggerMailConfig {
    fn default() -> Self {
        Self {
            campaign_id: "[CAMPAIGN_ID]".to_string(),
            subscriber_id: "[SUBSCRIBER_ID]".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Local directory holding the demo images (email.png, logo.png, messaging.png, events.png).
    pub assets_path: String,
    /// Target folder in the eMS media database; it must already exist.
    pub mdb_path: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            assets_path: "./assets".to_string(),
            mdb_path: "marketing-suite".to_string(),
        }
    }
}

impl EmsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EmsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${EMS_PASSWORD})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EmsError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Loads `path`, or the default file when it exists, or built-in defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("service.url", &self.service.url)?;
        validation::validate_non_empty_string("service.namespace", &self.service.namespace)?;
        validation::validate_non_empty_string("service.language", &self.service.language)?;
        validation::validate_range("service.timeout_seconds", self.service.timeout_seconds, 1, 600)?;

        for (field, value) in [
            ("credentials.account", &self.credentials.account),
            ("credentials.username", &self.credentials.username),
            ("credentials.password", &self.credentials.password),
            ("credentials.application", &self.credentials.application),
        ] {
            let value = validation::validate_required_field(field, value)?;
            validation::validate_non_empty_string(field, value)?;
            // 未替換的 ${VAR} 代表環境變數不存在
            if value.starts_with("${") {
                return Err(EmsError::MissingConfigError {
                    field: field.to_string(),
                });
            }
        }

        validation::validate_path("media.assets_path", &self.media.assets_path)?;
        validation::validate_non_empty_string("media.mdb_path", &self.media.mdb_path)?;
        Ok(())
    }
}

impl Validate for EmsConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FULL_CONFIG: &str = r#"
[service]
url = "https://ems.example.com/services/serviceagent.asmx"
language = "DE"
timeout_seconds = 30

[credentials]
account = "acme"
username = "demo"
password = "secret"
application = "rust-demo"

[campaign]
name = "Spring"
profile_name = "Newsletter"

[trigger_mail]
campaign_id = "0d9c6d4a-4c55-4bd4-9f43-2d7f0c1b6e21"
subscriber_id = "9a0e4f7c-1b2d-4c3e-8f5a-6b7c8d9e0f1a"
"#;

    #[test]
    fn test_parse_config_with_defaults() {
        let config = EmsConfig::from_toml_str(FULL_CONFIG).unwrap();

        assert_eq!(config.service.language, "DE");
        assert_eq!(config.service.namespace, "http://schemas.mailworx.info/");
        assert_eq!(config.campaign.name, "Spring");
        assert_eq!(config.campaign.sender_name, "eworx Service Crew");
        assert_eq!(config.media.mdb_path, "marketing-suite");
        assert!(config.validate().is_ok());

        let context = config.credentials.security_context().unwrap();
        assert_eq!(context.source, "rust-demo");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = EmsConfig::from_toml_str("").unwrap();
        assert_eq!(config.service.url, DEFAULT_SERVICE_URL);
        assert!(config.credentials.security_context().is_none());
        assert!(matches!(
            config.validate(),
            Err(EmsError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EMS_TEST_PASSWORD_SUBST", "from-env");

        let config = EmsConfig::from_toml_str(
            r#"
[credentials]
account = "acme"
username = "demo"
password = "${EMS_TEST_PASSWORD_SUBST}"
application = "rust-demo"
"#,
        )
        .unwrap();
        assert_eq!(config.credentials.password.as_deref(), Some("from-env"));

        std::env::remove_var("EMS_TEST_PASSWORD_SUBST");
    }

    #[test]
    fn test_unresolved_env_var_fails_validation() {
        let config = EmsConfig::from_toml_str(
            r#"
[credentials]
account = "acme"
username = "demo"
password = "${EMS_TEST_SURELY_UNSET_VARIABLE}"
application = "rust-demo"
"#,
        )
        .unwrap();

        match config.validate() {
            Err(EmsError::MissingConfigError { field }) => assert_eq!(field, "credentials.password"),
            other => panic!("expected missing password, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_url_fails_validation() {
        let mut config = EmsConfig::from_toml_str(FULL_CONFIG).unwrap();
        config.service.url = "serviceagent.asmx".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(matches!(
            EmsConfig::from_toml_str("[service\nurl = 1"),
            Err(EmsError::TomlError(_))
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(FULL_CONFIG.as_bytes()).unwrap();

        let config = EmsConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.credentials.account.as_deref(), Some("acme"));

        let loaded = EmsConfig::load(temp_file.path().to_str()).unwrap();
        assert_eq!(loaded.service.timeout_seconds, 30);
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let config = EmsConfig::from_toml_str(FULL_CONFIG).unwrap();
        let printed = format!("{:?}", config.credentials);
        assert!(!printed.contains("secret"));
    }
}
