pub mod auth;
pub mod calculator;
pub mod registry;

pub use crate::domain::model::{Category, Employee, PaySlip, SalaryInputs};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
