use crate::domain::model::Employee;

/// Settings the registry and the console are built from.
pub trait ConfigProvider {
    fn capacity(&self) -> usize;
    fn baseline_hours(&self) -> f64;
    fn max_login_attempts(&self) -> u32;
    fn seed_employees(&self) -> Vec<Employee>;
}
