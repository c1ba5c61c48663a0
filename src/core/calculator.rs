//! Payroll formulas. Everything here is plain arithmetic over a base salary;
//! inputs are not range-checked, so negative hours or months flow straight
//! through.

/// Hours in a standard working month.
pub const STANDARD_MONTHLY_HOURS: f64 = 160.0;

pub const OVERTIME_MULTIPLIER: f64 = 1.5;

pub fn thirteenth_month_bonus(base: f64) -> f64 {
    base / 12.0
}

pub fn profit_share(base: f64, months_worked: i32) -> f64 {
    base * f64::from(months_worked) / 12.0
}

pub fn overtime_pay(base: f64, overtime_hours: f64) -> f64 {
    (base / STANDARD_MONTHLY_HOURS) * OVERTIME_MULTIPLIER * overtime_hours
}

pub fn reserve_fund(base: f64) -> f64 {
    base / 12.0
}

/// General pay formula. The category formulas in
/// [`Category::monthly_salary`](crate::domain::model::Category::monthly_salary)
/// are what employees are actually paid by.
pub fn gross_monthly_pay(base: f64, hours_worked: f64, bonuses: f64, deductions: f64) -> f64 {
    base + (hours_worked * base / STANDARD_MONTHLY_HOURS) + bonuses - deductions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_thirteenth_month_bonus_equals_reserve_fund() {
        for base in [300.0, 450.0, 700.0, 1234.56] {
            assert_eq!(thirteenth_month_bonus(base), reserve_fund(base));
            assert!(approx_eq(thirteenth_month_bonus(base), base / 12.0));
        }
    }

    #[test]
    fn test_profit_share() {
        assert_eq!(profit_share(700.0, 12), 700.0);
        assert_eq!(profit_share(300.0, 6), 150.0);
        assert_eq!(profit_share(450.0, 0), 0.0);
        // Negative months are not rejected.
        assert_eq!(profit_share(300.0, -12), -300.0);
    }

    #[test]
    fn test_overtime_pay() {
        assert_eq!(overtime_pay(300.0, 0.0), 0.0);
        assert_eq!(overtime_pay(300.0, 1.0), 2.8125);
        assert!(approx_eq(overtime_pay(700.0, 10.0), 65.625));
    }

    #[test]
    fn test_gross_monthly_pay() {
        assert_eq!(gross_monthly_pay(300.0, 160.0, 0.0, 0.0), 600.0);
        assert_eq!(gross_monthly_pay(450.0, 0.0, 50.0, 20.0), 480.0);
        assert_eq!(gross_monthly_pay(320.0, 80.0, 0.0, 10.0), 470.0);
    }
}
