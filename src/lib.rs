pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::app::console::{Console, SessionEnd};
pub use crate::core::{auth::Authenticator, calculator, registry::EmployeeRegistry};
pub use crate::domain::model::{Category, Employee, PaySlip, SalaryInputs};
pub use crate::utils::error::{PayrollError, Result};
