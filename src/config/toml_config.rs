use crate::core::auth::DEFAULT_MAX_ATTEMPTS;
use crate::core::calculator::STANDARD_MONTHLY_HOURS;
use crate::core::registry::{default_employees, DEFAULT_CAPACITY};
use crate::core::ConfigProvider;
use crate::domain::model::{Category, Employee};
use crate::utils::error::{PayrollError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Hours in a 31-day month; upper bound for the report baseline.
const MAX_BASELINE_HOURS: f64 = 744.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub registry: RegistryConfig,
    pub auth: AuthConfig,
    /// Replaces the built-in demonstration accounts when present.
    pub employees: Option<Vec<EmployeeSeed>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub capacity: usize,
    pub baseline_hours: f64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            baseline_hours: STANDARD_MONTHLY_HOURS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub max_attempts: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSeed {
    pub name: String,
    pub national_id: String,
    pub login: String,
    pub secret: String,
    pub category: Category,
}

impl From<&EmployeeSeed> for Employee {
    fn from(seed: &EmployeeSeed) -> Self {
        Employee::new(
            seed.name.clone(),
            seed.national_id.clone(),
            seed.login.clone(),
            seed.secret.clone(),
            seed.category,
        )
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PayrollError::ConfigError {
            message: format!("{}: {}", path.display(), e),
        })?;
        tracing::info!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PayrollError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ADMIN_SECRET})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PayrollError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_positive_number("registry.capacity", self.registry.capacity, 1)?;
        validation::validate_range(
            "registry.baseline_hours",
            self.registry.baseline_hours,
            0.0,
            MAX_BASELINE_HOURS,
        )?;
        validation::validate_positive_number(
            "auth.max_attempts",
            self.auth.max_attempts as usize,
            1,
        )?;

        // Built-in accounts count too when no [[employees]] list is given.
        validation::validate_max_count(
            "employees",
            self.seed_employees().len(),
            self.registry.capacity,
        )?;

        if let Some(employees) = &self.employees {
            for seed in employees {
                validation::validate_non_empty_string("employees.name", &seed.name)?;
                validation::validate_non_empty_string("employees.login", &seed.login)?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn capacity(&self) -> usize {
        self.registry.capacity
    }

    fn baseline_hours(&self) -> f64 {
        self.registry.baseline_hours
    }

    fn max_login_attempts(&self) -> u32 {
        self.auth.max_attempts
    }

    fn seed_employees(&self) -> Vec<Employee> {
        match &self.employees {
            Some(seeds) => seeds.iter().map(Employee::from).collect(),
            None => default_employees(),
        }
    }
}

impl Validate for TomlConfig {
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
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.capacity(), 10);
        assert_eq!(config.baseline_hours(), 160.0);
        assert_eq!(config.max_login_attempts(), 3);

        let logins: Vec<String> = config
            .seed_employees()
            .iter()
            .map(|e| e.login().to_string())
            .collect();
        assert_eq!(logins, vec!["admin", "ventas", "gerente"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[registry]
capacity = 5
baseline_hours = 120.0

[auth]
max_attempts = 2

[[employees]]
name = "Ana"
national_id = "0102030405"
login = "ana"
secret = "pw"
category = "manager"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.capacity(), 5);
        assert_eq!(config.baseline_hours(), 120.0);
        assert_eq!(config.max_login_attempts(), 2);

        let seeds = config.seed_employees();
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].category(), Category::Manager);
        assert_eq!(seeds[0].base_salary(), 700.0);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PAYROLL_DESK_TEST_SECRET", "s3cret");

        let toml_content = r#"
[[employees]]
name = "Env"
national_id = "1"
login = "env"
secret = "${PAYROLL_DESK_TEST_SECRET}"
category = "regular"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.seed_employees()[0].secret(), "s3cret");

        std::env::remove_var("PAYROLL_DESK_TEST_SECRET");
    }

    #[test]
    fn test_unset_env_var_is_left_untouched() {
        let toml_content = r#"
[[employees]]
name = "Env"
national_id = "1"
login = "env"
secret = "${PAYROLL_DESK_SURELY_UNSET_VAR}"
category = "regular"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.seed_employees()[0].secret(),
            "${PAYROLL_DESK_SURELY_UNSET_VAR}"
        );
    }

    #[test]
    fn test_unknown_category_fails_parsing() {
        let toml_content = r#"
[[employees]]
name = "X"
national_id = "1"
login = "x"
secret = "x"
category = "intern"
"#;

        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, PayrollError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let zero_capacity = TomlConfig::from_toml_str("[registry]\ncapacity = 0\n").unwrap();
        assert!(zero_capacity.validate().is_err());

        let zero_attempts = TomlConfig::from_toml_str("[auth]\nmax_attempts = 0\n").unwrap();
        assert!(zero_attempts.validate().is_err());

        let bad_hours = TomlConfig::from_toml_str("[registry]\nbaseline_hours = 1000.0\n").unwrap();
        assert!(bad_hours.validate().is_err());

        let too_many = TomlConfig::from_toml_str(
            r#"
[registry]
capacity = 1

[[employees]]
name = "A"
national_id = "1"
login = "a"
secret = "x"
category = "regular"

[[employees]]
name = "B"
national_id = "2"
login = "b"
secret = "x"
category = "regular"
"#,
        )
        .unwrap();
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_default_accounts_must_fit_capacity() {
        let too_small = TomlConfig::from_toml_str("[registry]\ncapacity = 2\n").unwrap();
        let err = too_small.validate().unwrap_err();
        assert!(matches!(
            err,
            PayrollError::InvalidConfigValueError { ref field, .. } if field == "employees"
        ));

        let exact = TomlConfig::from_toml_str("[registry]\ncapacity = 3\n").unwrap();
        assert!(exact.validate().is_ok());

        // An explicit, shorter seed list fits a small registry.
        let explicit = TomlConfig::from_toml_str(
            r#"
[registry]
capacity = 1

[[employees]]
name = "Solo"
national_id = "1"
login = "solo"
secret = "x"
category = "manager"
"#,
        )
        .unwrap();
        assert!(explicit.validate().is_ok());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[registry]\ncapacity = 4\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.capacity(), 4);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = TomlConfig::from_file("/definitely/not/here/payroll.toml").unwrap_err();
        assert!(matches!(err, PayrollError::ConfigError { .. }));
    }
}
