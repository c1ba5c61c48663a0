use payroll_desk::core::registry::RegisterOutcome;
use payroll_desk::{calculator, Category, Employee, EmployeeRegistry};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_thirteenth_month_bonus_and_reserve_fund_agree() {
    for base in [1.0, 300.0, 450.0, 700.0, 999.99] {
        let bonus = calculator::thirteenth_month_bonus(base);
        assert_eq!(bonus, calculator::reserve_fund(base));
        assert!(approx_eq(bonus, base / 12.0));
    }
}

#[test]
fn test_profit_share_over_full_year_is_base() {
    for base in [300.0, 450.0, 700.0] {
        assert!(approx_eq(calculator::profit_share(base, 12), base));
        assert!(approx_eq(calculator::profit_share(base, 5), base * 5.0 / 12.0));
    }
}

#[test]
fn test_overtime_pay_formula() {
    for base in [300.0, 450.0, 700.0] {
        assert_eq!(calculator::overtime_pay(base, 0.0), 0.0);
        for hours in [1.0, 7.5, 20.0] {
            assert!(approx_eq(
                calculator::overtime_pay(base, hours),
                (base / 160.0) * 1.5 * hours
            ));
        }
    }
}

#[test]
fn test_category_formulas() {
    let regular = Employee::new("R", "1", "r", "x", Category::Regular);
    let admin = Employee::new("A", "2", "a", "x", Category::Administrative);
    let manager = Employee::new("M", "3", "m", "x", Category::Manager);

    assert_eq!(regular.calculate_salary(160.0, 0.0, 0.0), 48000.0);
    assert_eq!(admin.calculate_salary(999.0, 100.0, 50.0), 500.0);
    assert_eq!(manager.calculate_salary(0.0, 0.0, 0.0), 805.0);
}

#[test]
fn test_employee_wrappers_use_own_base() {
    let manager = Employee::new("M", "3", "m", "x", Category::Manager);

    assert_eq!(manager.thirteenth_month_bonus(), calculator::thirteenth_month_bonus(700.0));
    assert_eq!(manager.reserve_fund(), calculator::reserve_fund(700.0));
    assert_eq!(manager.profit_share(12), 700.0);
    assert_eq!(manager.overtime_pay(10.0), calculator::overtime_pay(700.0, 10.0));
}

#[test]
fn test_seeded_lookup() {
    let registry = EmployeeRegistry::new();

    let manager = registry.find_by_login("gerente").expect("seeded manager");
    assert_eq!(manager.category(), Category::Manager);
    assert_eq!(manager.base_salary(), 700.0);

    assert!(registry.find_by_login("nope").is_none());
}

#[test]
fn test_capacity_caps_at_ten() {
    let mut registry = EmployeeRegistry::new();
    assert_eq!(registry.len(), 3);

    let outcomes: Vec<RegisterOutcome> = (0..8)
        .map(|i| {
            registry.register(Employee::new(
                format!("Extra {}", i),
                format!("09000000{:02}", i),
                format!("extra{}", i),
                "pw",
                Category::Regular,
            ))
        })
        .collect();

    assert!(outcomes[..7].iter().all(|o| o.is_registered()));
    assert_eq!(outcomes[7], RegisterOutcome::CapacityExceeded { capacity: 10 });
    assert_eq!(registry.len(), 10);
    assert!(registry.is_full());
    assert!(registry.find_by_login("extra6").is_some());
    assert!(registry.find_by_login("extra7").is_none());
}

#[test]
fn test_base_report_over_defaults() {
    let registry = EmployeeRegistry::new();
    let report = registry.base_payroll_report();

    let rows: Vec<(Category, f64)> = report
        .rows
        .iter()
        .map(|r| (r.category, r.monthly_salary))
        .collect();

    assert_eq!(
        rows,
        vec![
            (Category::Administrative, 450.0),
            (Category::Regular, 48000.0),
            (Category::Manager, 805.0),
        ]
    );
    assert!(report.rows.iter().all(|r| r.national_id == "1700000000"));
}
