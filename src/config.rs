use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub appdir: Option<String>,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub sqlite: Option<SqliteConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqliteConfig {
    pub filename: String,
    #[serde(alias = "maxconnections", default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(alias = "imagebase", default = "default_image_base")]
    pub image_base: String,
    #[serde(alias = "perpage", default = "default_per_page")]
    pub per_page: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            image_base: default_image_base(),
            per_page: default_per_page(),
        }
    }
}

fn default_port() -> String {
    "8080".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_site_name() -> String {
    "Cinepage".to_string()
}

fn default_image_base() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_per_page() -> u32 {
    20
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        Self::from_yaml(&content).map_err(|e| ConfigError::ParseError(path.to_string(), e))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn get_database(&self) -> Option<&SqliteConfig> {
        self.database.sqlite.as_ref()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let yaml = r#"
listen:
  port: "9000"
database:
  sqlite:
    filename: "sqlite://movies.db"
site:
  perpage: 12
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.listen.port, "9000");
        assert_eq!(config.listen.address, None);
        let db = config.get_database().unwrap();
        assert_eq!(db.filename, "sqlite://movies.db");
        assert_eq!(db.max_connections, 5);
        assert_eq!(config.site.per_page, 12);
        assert_eq!(config.site.image_base, "https://image.tmdb.org/t/p");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.listen.port, "8080");
        assert!(config.get_database().is_none());
        assert_eq!(config.site.per_page, 20);
    }
}
