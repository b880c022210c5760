use crate::utils::error::{CodemodError, Result};
use crate::utils::validation::{validate_extension, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional `codemods.toml`. Only says where the rules run, never what they do.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodemodsConfig {
    pub bulk_fix: Option<BulkFixSection>,
    pub migrate_excel: Option<MigrateExcelSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkFixSection {
    pub root: Option<String>,
    pub extension: Option<String>,
    pub exclude: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MigrateExcelSection {
    pub file: Option<String>,
}

impl CodemodsConfig {
    /// Loads and validates a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| CodemodError::io(path, source))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config: Self = toml::from_str(&processed_content)?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces `${VAR}` placeholders from the environment. Unset variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for CodemodsConfig {
    fn validate(&self) -> Result<()> {
        if let Some(section) = &self.bulk_fix {
            if let Some(root) = &section.root {
                validate_path("bulk_fix.root", root)?;
            }
            if let Some(extension) = &section.extension {
                validate_extension("bulk_fix.extension", extension)?;
            }
        }

        if let Some(section) = &self.migrate_excel {
            if let Some(file) = &section.file {
                validate_path("migrate_excel.file", file)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[bulk_fix]
root = "backend/src"
extension = ".ts"
exclude = ".test.ts"

[migrate_excel]
file = "backend/src/reports/excel.service.ts"
"#;

        let config = CodemodsConfig::from_toml_str(toml_content).unwrap();
        let bulk = config.bulk_fix.unwrap();
        assert_eq!(bulk.root.as_deref(), Some("backend/src"));
        assert_eq!(bulk.exclude.as_deref(), Some(".test.ts"));
        assert_eq!(
            config.migrate_excel.unwrap().file.as_deref(),
            Some("backend/src/reports/excel.service.ts")
        );
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = CodemodsConfig::from_toml_str("").unwrap();
        assert_eq!(config, CodemodsConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CODEMODS_TEST_ROOT", "apps/api/src");

        let config = CodemodsConfig::from_toml_str(
            r#"
[bulk_fix]
root = "${CODEMODS_TEST_ROOT}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.bulk_fix.unwrap().root.as_deref(),
            Some("apps/api/src")
        );

        std::env::remove_var("CODEMODS_TEST_ROOT");
    }

    #[test]
    fn test_unknown_env_var_is_kept() {
        let config = CodemodsConfig::from_toml_str(
            r#"
[migrate_excel]
file = "${CODEMODS_TEST_UNSET_VARIABLE}/x.ts"
"#,
        )
        .unwrap();
        assert_eq!(
            config.migrate_excel.unwrap().file.as_deref(),
            Some("${CODEMODS_TEST_UNSET_VARIABLE}/x.ts")
        );
    }

    #[test]
    fn test_invalid_extension_rejected() {
        let err = CodemodsConfig::from_toml_str(
            r#"
[bulk_fix]
extension = "ts"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, CodemodError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_bad_toml_rejected() {
        let err = CodemodsConfig::from_toml_str("[bulk_fix\nroot = 1").unwrap_err();
        assert!(matches!(err, CodemodError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[bulk_fix]\nroot = \"lib\"\n")
            .unwrap();

        let config = CodemodsConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.bulk_fix.unwrap().root.as_deref(), Some("lib"));
    }
}
