use crate::core::calculator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee category. Fixes both the base salary and the salary formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Regular,
    Administrative,
    Manager,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Regular,
        Category::Administrative,
        Category::Manager,
    ];

    pub fn base_salary(self) -> f64 {
        match self {
            Category::Manager => 700.0,
            Category::Administrative => 450.0,
            Category::Regular => 300.0,
        }
    }

    /// Monthly salary for this category. Administrative and Manager staff
    /// are paid a fixed amount, so `hours_worked` only matters for Regular.
    pub fn monthly_salary(
        self,
        base: f64,
        hours_worked: f64,
        bonuses: f64,
        deductions: f64,
    ) -> f64 {
        match self {
            Category::Regular => base * hours_worked + bonuses - deductions,
            Category::Administrative => base + bonuses - deductions,
            Category::Manager => base + base * 0.15 + bonuses - deductions,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Regular => "REGULAR",
            Category::Administrative => "ADMINISTRATIVE",
            Category::Manager => "MANAGER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width specifiers work in the report columns
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    name: String,
    national_id: String,
    login: String,
    secret: String,
    category: Category,
    base_salary: f64,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        national_id: impl Into<String>,
        login: impl Into<String>,
        secret: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            national_id: national_id.into(),
            login: login.into(),
            secret: secret.into(),
            category,
            base_salary: category.base_salary(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn base_salary(&self) -> f64 {
        self.base_salary
    }

    /// Overrides the category-derived base salary. The salary formulas and
    /// the calculator wrappers all read the overridden value afterwards.
    pub fn set_base_salary(&mut self, base_salary: f64) {
        tracing::debug!(
            "Base salary of '{}' changed from {:.2} to {:.2}",
            self.login,
            self.base_salary,
            base_salary
        );
        self.base_salary = base_salary;
    }

    pub fn verify_secret(&self, candidate: &str) -> bool {
        self.secret == candidate
    }

    pub fn calculate_salary(&self, hours_worked: f64, bonuses: f64, deductions: f64) -> f64 {
        self.category
            .monthly_salary(self.base_salary, hours_worked, bonuses, deductions)
    }

    pub fn thirteenth_month_bonus(&self) -> f64 {
        calculator::thirteenth_month_bonus(self.base_salary)
    }

    pub fn profit_share(&self, months_worked: i32) -> f64 {
        calculator::profit_share(self.base_salary, months_worked)
    }

    pub fn overtime_pay(&self, overtime_hours: f64) -> f64 {
        calculator::overtime_pay(self.base_salary, overtime_hours)
    }

    pub fn reserve_fund(&self) -> f64 {
        calculator::reserve_fund(self.base_salary)
    }

    pub fn pay_slip(&self, inputs: &SalaryInputs) -> PaySlip {
        PaySlip {
            monthly_salary: self.calculate_salary(
                inputs.hours_worked,
                inputs.bonuses,
                inputs.deductions,
            ),
            thirteenth_month_bonus: self.thirteenth_month_bonus(),
            profit_share: self.profit_share(inputs.months_worked),
            overtime_pay: self.overtime_pay(inputs.overtime_hours),
            reserve_fund: self.reserve_fund(),
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} | National ID: {} | Login: {} | Category: {} | Base Salary: ${:.2}",
            self.name, self.national_id, self.login, self.category, self.base_salary
        )
    }
}

/// Variable inputs the salary menu collects before offering calculations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalaryInputs {
    pub hours_worked: f64,
    pub bonuses: f64,
    pub deductions: f64,
    pub months_worked: i32,
    pub overtime_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaySlip {
    pub monthly_salary: f64,
    pub thirteenth_month_bonus: f64,
    pub profit_share: f64,
    pub overtime_pay: f64,
    pub reserve_fund: f64,
}

impl fmt::Display for PaySlip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\t*Monthly Salary: ${:.2}", self.monthly_salary)?;
        writeln!(f, "\t*Thirteenth Month Bonus: ${:.2}", self.thirteenth_month_bonus)?;
        writeln!(f, "\t*Profit Share: ${:.2}", self.profit_share)?;
        writeln!(f, "\t*Overtime Pay: ${:.2}", self.overtime_pay)?;
        write!(f, "\t*Reserve Fund: ${:.2}", self.reserve_fund)
    }
}
