use crate::core::calculator::STANDARD_MONTHLY_HOURS;
use crate::domain::model::{Category, Employee};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use std::fmt;
use std::io::Write;

pub const DEFAULT_CAPACITY: usize = 10;

const REPORT_TITLE: &str =
    "\n************************************** BASE PAYROLL OF REGISTERED EMPLOYEES **************************************";
const REPORT_RULE: &str =
    "******************************************************************************************************************";

/// The three demonstration accounts every fresh registry starts with.
pub fn default_employees() -> Vec<Employee> {
    vec![
        Employee::new("Admin", "1700000000", "admin", "1234", Category::Administrative),
        Employee::new("Sales", "1700000000", "ventas", "1234", Category::Regular),
        Employee::new("Manager", "1700000000", "gerente", "1234", Category::Manager),
    ]
}

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered { position: usize },
    CapacityExceeded { capacity: usize },
}

impl RegisterOutcome {
    pub fn is_registered(&self) -> bool {
        matches!(self, RegisterOutcome::Registered { .. })
    }
}

impl fmt::Display for RegisterOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterOutcome::Registered { .. } => f.write_str("Employee registered successfully."),
            RegisterOutcome::CapacityExceeded { capacity } => write!(
                f,
                "No more employees can be registered. Limit of {} reached.",
                capacity
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub national_id: String,
    pub category: Category,
    pub monthly_salary: f64,
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee: {:<20} | ID: {:<12} | Category: {:<14} | Monthly Salary: ${:>12.2}",
            self.name, self.national_id, self.category, self.monthly_salary
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BasePayrollReport {
    pub baseline_hours: f64,
    pub rows: Vec<ReportRow>,
}

impl fmt::Display for BasePayrollReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_TITLE)?;
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        write!(f, "{}", REPORT_RULE)
    }
}

/// Insertion-ordered employee store with a hard capacity ceiling.
///
/// Login names are not required to be unique; lookups return the earliest
/// registration.
#[derive(Debug, Clone)]
pub struct EmployeeRegistry {
    employees: Vec<Employee>,
    capacity: usize,
    baseline_hours: f64,
}

impl EmployeeRegistry {
    /// Registry with the default capacity, seeded with [`default_employees`].
    pub fn new() -> Self {
        let mut registry = Self::with_capacity(DEFAULT_CAPACITY);
        registry.seed(default_employees());
        registry
    }

    /// Empty registry.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            employees: Vec::with_capacity(capacity),
            capacity,
            baseline_hours: STANDARD_MONTHLY_HOURS,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let mut registry = Self::with_capacity(config.capacity());
        registry.baseline_hours = config.baseline_hours();
        registry.seed(config.seed_employees());
        registry
    }

    fn seed(&mut self, employees: Vec<Employee>) {
        for employee in employees {
            let _ = self.register(employee);
        }
    }

    pub fn register(&mut self, employee: Employee) -> RegisterOutcome {
        if self.employees.len() >= self.capacity {
            tracing::warn!(
                "Registration of '{}' rejected: registry is full ({} employees)",
                employee.login(),
                self.capacity
            );
            return RegisterOutcome::CapacityExceeded {
                capacity: self.capacity,
            };
        }

        tracing::info!(
            "Registered '{}' as {} ({}/{})",
            employee.login(),
            employee.category(),
            self.employees.len() + 1,
            self.capacity
        );
        self.employees.push(employee);
        RegisterOutcome::Registered {
            position: self.employees.len() - 1,
        }
    }

    pub fn find_by_login(&self, login: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.login() == login)
    }

    pub fn find_by_login_mut(&mut self, login: &str) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.login() == login)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.employees.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn baseline_hours(&self) -> f64 {
        self.baseline_hours
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    /// Baseline pay for every employee: `baseline_hours` worked, no bonuses,
    /// no deductions.
    pub fn base_payroll_report(&self) -> BasePayrollReport {
        let rows = self
            .employees
            .iter()
            .map(|e| ReportRow {
                name: e.name().to_string(),
                national_id: e.national_id().to_string(),
                category: e.category(),
                monthly_salary: e.calculate_salary(self.baseline_hours, 0.0, 0.0),
            })
            .collect();

        BasePayrollReport {
            baseline_hours: self.baseline_hours,
            rows,
        }
    }

    pub fn write_base_payroll_report<W: Write>(&self, out: &mut W) -> Result<()> {
        let report = self.base_payroll_report();
        tracing::debug!(
            "Generating base payroll report for {} employees at {} hours",
            report.rows.len(),
            report.baseline_hours
        );
        writeln!(out, "{}", report)?;
        Ok(())
    }

    /// Prints the base payroll report to standard output.
    pub fn generate_base_payroll_report(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.write_base_payroll_report(&mut handle)
    }
}

impl Default for EmployeeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
