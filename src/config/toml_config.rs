use crate::config::defaults;
use crate::core::catalog::item_id;
use crate::core::router::RESTAURANT_PREFIX;
use crate::domain::model::{Catalog, ServiceRegion};
use crate::utils::error::{BotError, Result};
use crate::utils::validation::{
    validate_max_chars, validate_max_len, validate_non_empty_string, validate_range,
    validate_unique_ids, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

// WhatsApp interactive message limits
const MAX_LIST_ROWS: usize = 10;
const MAX_ROW_TITLE_CHARS: usize = 24;
const MAX_SECTION_TITLE_CHARS: usize = 24;
const MAX_HEADER_CHARS: usize = 60;
const MAX_ROW_ID_CHARS: usize = 200;

/// Static data the bot serves from. Loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub business: BusinessConfig,
    #[serde(default = "defaults::default_regions")]
    pub regions: Vec<ServiceRegion>,
    #[serde(default = "defaults::default_catalog")]
    pub catalog: Catalog,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessConfig {
    pub name: String,
    pub assistant_name: String,
    /// Offered to customers outside every service region.
    pub website_url: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: defaults::DEFAULT_BUSINESS_NAME.to_string(),
            assistant_name: defaults::DEFAULT_ASSISTANT_NAME.to_string(),
            website_url: defaults::DEFAULT_WEBSITE_URL.to_string(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            business: BusinessConfig::default(),
            regions: defaults::default_regions(),
            catalog: defaults::default_catalog(),
        }
    }
}

impl BotConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| BotError::ConfigError {
            message: format!(
                "Cannot read config file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Loads `path` when given, otherwise the built-in tables.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::info!("📁 Loading bot configuration from: {}", path);
                Self::from_file(path)
            }
            None => {
                tracing::info!("📁 No config file given, using built-in regions and menu");
                Ok(Self::default())
            }
        }
    }

    /// 替換環境變數 (例如 ${WEBSITE_URL})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("business.name", &self.business.name)?;
        validate_non_empty_string("business.assistant_name", &self.business.assistant_name)?;
        validate_url("business.website_url", &self.business.website_url)?;

        if self.regions.is_empty() {
            return Err(BotError::ConfigValidationError {
                field: "regions".to_string(),
                message: "At least one service region is required".to_string(),
            });
        }

        for (i, region) in self.regions.iter().enumerate() {
            let field = |name: &str| format!("regions[{}].{}", i, name);

            validate_non_empty_string(&field("name"), &region.name)?;
            validate_range(&field("center_latitude"), region.center_latitude, -90.0, 90.0)?;
            validate_range(&field("center_longitude"), region.center_longitude, -180.0, 180.0)?;
            if !(region.radius_km > 0.0) {
                return Err(BotError::InvalidConfigValueError {
                    field: field("radius_km"),
                    value: region.radius_km.to_string(),
                    reason: "Radius must be greater than zero".to_string(),
                });
            }

            validate_max_chars(
                &field("name"),
                &format!("{} Branches", region.name),
                MAX_SECTION_TITLE_CHARS,
            )?;
            validate_max_chars(
                &field("name"),
                &format!("🏢 Select a Restaurant in {}", region.name),
                MAX_HEADER_CHARS,
            )?;

            if region.branches.is_empty() {
                return Err(BotError::ConfigValidationError {
                    field: field("branches"),
                    message: "A region needs at least one branch".to_string(),
                });
            }
            validate_max_len(&field("branches"), &region.branches, MAX_LIST_ROWS)?;

            for branch in &region.branches {
                if !branch.id.starts_with(RESTAURANT_PREFIX) || branch.id.len() == RESTAURANT_PREFIX.len() {
                    return Err(BotError::InvalidConfigValueError {
                        field: field("branches.id"),
                        value: branch.id.clone(),
                        reason: format!("Branch ids must start with '{}'", RESTAURANT_PREFIX),
                    });
                }
                validate_max_chars(&field("branches.id"), &branch.id, MAX_ROW_ID_CHARS)?;
                validate_non_empty_string(&field("branches.title"), &branch.title)?;
                validate_max_chars(&field("branches.title"), &branch.title, MAX_ROW_TITLE_CHARS)?;
            }
        }

        validate_unique_ids(
            "regions.branches.id",
            self.regions
                .iter()
                .flat_map(|r| r.branches.iter().map(|b| b.id.as_str())),
        )?;

        for (i, category) in self.catalog.categories.iter().enumerate() {
            let field = |name: &str| format!("catalog.categories[{}].{}", i, name);

            validate_non_empty_string(&field("header"), &category.header)?;
            validate_max_chars(
                &field("header"),
                &category.display_header(),
                MAX_SECTION_TITLE_CHARS,
            )?;
            validate_non_empty_string(&field("body_text"), &category.body_text)?;
            if category.items.is_empty() {
                return Err(BotError::ConfigValidationError {
                    field: field("items"),
                    message: "A category needs at least one item".to_string(),
                });
            }
            validate_max_len(&field("items"), &category.items, MAX_LIST_ROWS)?;

            for item in &category.items {
                validate_non_empty_string(&field("items"), item)?;
                validate_max_chars(&field("items"), item, MAX_ROW_TITLE_CHARS)?;
                validate_max_chars(
                    &field("items"),
                    &item_id(&category.header, item),
                    MAX_ROW_ID_CHARS,
                )?;
            }
        }

        // item ids share the reply namespace with branch ids
        let item_ids: Vec<String> = self.catalog.item_ids().collect();
        validate_unique_ids("catalog.items", item_ids.iter().map(String::as_str))?;
        if let Some(clash) = item_ids.iter().find(|id| id.starts_with(RESTAURANT_PREFIX)) {
            return Err(BotError::ConfigValidationError {
                field: "catalog.items".to_string(),
                message: format!("Item id '{}' would be read as a branch selection", clash),
            });
        }

        Ok(())
    }
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_config_is_valid() {
        let config = BotConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.regions.len(), 4);
        assert_eq!(config.catalog.categories.len(), 6);
    }

    #[test]
    fn test_empty_toml_falls_back_to_builtin_tables() {
        let config = BotConfig::from_toml_str("").unwrap();
        assert_eq!(config.regions, defaults::default_regions());
        assert_eq!(config.catalog, defaults::default_catalog());
        assert_eq!(config.business, BusinessConfig::default());
    }

    #[test]
    fn test_parse_custom_regions_and_catalog() {
        let toml_content = r#"
[business]
name = "Test Kitchen"

[[regions]]
name = "Accra"
center_latitude = 5.6037
center_longitude = -0.1870
radius_km = 30.0
branches = [
    { id = "rest_osu", title = "Osu Branch" },
]

[[catalog.categories]]
header = "SOUPS"
icon = "🍲"
body_text = "Warm bowls"
items = ["Light Soup", "Palm Nut Soup"]
"#;

        let config = BotConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.business.name, "Test Kitchen");
        // unspecified business fields keep their defaults
        assert_eq!(config.business.assistant_name, "Lolo");
        assert_eq!(config.regions.len(), 1);
        assert_eq!(config.regions[0].branches[0].id, "rest_osu");
        assert_eq!(config.catalog.categories[0].display_header(), "🍲 SOUPS");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MENU_BOT_TEST_WEBSITE", "https://order.example.com");

        let toml_content = r#"
[business]
website_url = "${MENU_BOT_TEST_WEBSITE}"
"#;

        let config = BotConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.business.website_url, "https://order.example.com");

        std::env::remove_var("MENU_BOT_TEST_WEBSITE");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[business]
website_url = "${MENU_BOT_TEST_NEVER_SET}"
"#;
        let config = BotConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.business.website_url, "${MENU_BOT_TEST_NEVER_SET}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_branch_ids() {
        let mut config = BotConfig::default();
        let duplicate = config.regions[0].branches[0].clone();
        config.regions[1].branches.push(duplicate);

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("rest_lekki"));
    }

    #[test]
    fn test_validation_rejects_branch_without_prefix() {
        let mut config = BotConfig::default();
        config.regions[0].branches[0].id = "lekki".to_string();
        assert!(matches!(
            config.validate(),
            Err(BotError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_colliding_item_ids() {
        let mut config = BotConfig::default();
        // same slug as "Fried Rice"
        config.catalog.categories[0]
            .items
            .push("fried  rice".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_lists() {
        let mut config = BotConfig::default();
        config.catalog.categories[0].items = (0..11).map(|i| format!("Dish {}", i)).collect();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_geometry() {
        let mut config = BotConfig::default();
        config.regions[0].radius_km = 0.0;
        assert!(config.validate().is_err());

        let mut config = BotConfig::default();
        config.regions[0].center_latitude = 123.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[business]\nname = \"File Kitchen\"\n")
            .unwrap();

        let config = BotConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.business.name, "File Kitchen");
        assert_eq!(config.regions.len(), 4);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = BotConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, BotError::ConfigError { .. }));
    }
}
