use crate::app::prompt::Prompter;
use crate::core::auth::{Authenticator, LoginOutcome, DEFAULT_MAX_ATTEMPTS};
use crate::core::registry::EmployeeRegistry;
use crate::domain::model::{Category, Employee, SalaryInputs};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const WELCOME_BANNER: &str =
    "\n****************** WELCOME TO THE EMPLOYEE MANAGEMENT SYSTEM ******************";

const START_OPTIONS: [&str; 3] = ["Log in", "Register", "Exit"];
const MAIN_OPTIONS: [&str; 3] = ["Generate payroll report", "Salary menu", "Log out"];
// Same order as `Category::ALL`.
const CATEGORY_OPTIONS: [&str; 3] = ["Regular", "Administrative", "Manager"];
const SALARY_OPTIONS: [&str; 7] = [
    "Calculate monthly salary",
    "Calculate thirteenth month bonus",
    "Calculate profit share",
    "Calculate overtime pay",
    "Calculate reserve fund",
    "Print personal pay slip",
    "Back",
];

const PAY_SLIP_TITLE: &str =
    "\n************************************** PERSONAL PAY SLIP **************************************";
const PAY_SLIP_RULE: &str =
    "************************************************************************************************";

/// How a console run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Exited,
    LockedOut,
}

enum Flow {
    Continue,
    LockedOut,
}

/// Menu-driven front end over an [`EmployeeRegistry`].
pub struct Console<R, W> {
    registry: EmployeeRegistry,
    prompter: Prompter<R, W>,
    max_login_attempts: u32,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(registry: EmployeeRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            prompter: Prompter::new(input, output),
            max_login_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_login_attempts(mut self, max_login_attempts: u32) -> Self {
        self.max_login_attempts = max_login_attempts;
        self
    }

    pub fn registry(&self) -> &EmployeeRegistry {
        &self.registry
    }

    pub fn into_parts(self) -> (EmployeeRegistry, W) {
        (self.registry, self.prompter.into_output())
    }

    /// Runs the start menu until the operator exits or a login session
    /// exhausts its attempts.
    pub fn run(&mut self) -> Result<SessionEnd> {
        loop {
            let flow = match self.prompter.choose("\nStart menu", &START_OPTIONS)? {
                1 => self.login()?,
                2 => self.register_employee()?,
                _ => {
                    self.prompter.say("\nTHANK YOU FOR USING OUR SYSTEM.")?;
                    return Ok(SessionEnd::Exited);
                }
            };

            if let Flow::LockedOut = flow {
                return Ok(SessionEnd::LockedOut);
            }
        }
    }

    fn login(&mut self) -> Result<Flow> {
        self.prompter.say("\nLOG IN")?;
        let mut auth = Authenticator::new(self.max_login_attempts);

        loop {
            let login = self.prompter.ask(">> Username: ")?;
            let secret = self.prompter.ask(">> Password: ")?;

            match auth.attempt(&self.registry, &login, &secret) {
                LoginOutcome::Authenticated(employee) => {
                    self.prompter
                        .say(format_args!("\nWELCOME {}", employee.name().to_uppercase()))?;
                    main_menu(&mut self.prompter, &self.registry, employee)?;
                    return Ok(Flow::Continue);
                }
                LoginOutcome::Rejected { remaining } => {
                    self.prompter.say(format_args!(
                        "Incorrect username or password. Attempts left: {}",
                        remaining
                    ))?;
                }
                LoginOutcome::LockedOut => {
                    self.prompter
                        .say("Maximum number of attempts reached. Exiting the system...")?;
                    return Ok(Flow::LockedOut);
                }
            }
        }
    }

    fn register_employee(&mut self) -> Result<Flow> {
        self.prompter.say("\nNEW EMPLOYEE REGISTRATION")?;

        let name = self.prompter.ask("Name: ")?;
        let national_id = self.prompter.ask("National ID: ")?;
        let login = self.prompter.ask("Username: ")?;
        let secret = self.prompter.ask("Password: ")?;
        let choice = self
            .prompter
            .choose("\nSelect the category:", &CATEGORY_OPTIONS)?;
        let category = Category::ALL[choice - 1];

        let outcome = self
            .registry
            .register(Employee::new(name, national_id, login, secret, category));
        self.prompter.say(outcome)?;
        self.prompter.say("Redirecting to log in...")?;

        self.login()
    }
}

fn main_menu<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    registry: &EmployeeRegistry,
    employee: &Employee,
) -> Result<()> {
    loop {
        match prompter.choose("\nMain menu", &MAIN_OPTIONS)? {
            1 => registry.write_base_payroll_report(prompter.output())?,
            2 => salary_menu(prompter, employee)?,
            _ => {
                prompter.say("Logging out...")?;
                return Ok(());
            }
        }
    }
}

fn read_salary_inputs<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<SalaryInputs> {
    prompter.say("")?;
    Ok(SalaryInputs {
        hours_worked: prompter.ask_number(">> Hours worked: ")?,
        bonuses: prompter.ask_number(">> Bonuses: ")?,
        deductions: prompter.ask_number(">> Deductions: ")?,
        months_worked: prompter.ask_number(">> Months worked: ")?,
        overtime_hours: prompter.ask_number(">> Overtime hours: ")?,
    })
}

fn salary_menu<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    employee: &Employee,
) -> Result<()> {
    let inputs = read_salary_inputs(prompter)?;
    tracing::debug!("Salary menu for '{}' with {:?}", employee.login(), inputs);

    loop {
        match prompter.choose("\nSalary menu", &SALARY_OPTIONS)? {
            1 => {
                let salary = employee.calculate_salary(
                    inputs.hours_worked,
                    inputs.bonuses,
                    inputs.deductions,
                );
                prompter.say(format_args!("Monthly salary: ${:.2}", salary))?;
            }
            2 => prompter.say(format_args!(
                "Thirteenth month bonus: ${:.2}",
                employee.thirteenth_month_bonus()
            ))?,
            3 => prompter.say(format_args!(
                "Profit share: ${:.2}",
                employee.profit_share(inputs.months_worked)
            ))?,
            4 => prompter.say(format_args!(
                "Overtime pay: ${:.2}",
                employee.overtime_pay(inputs.overtime_hours)
            ))?,
            5 => prompter.say(format_args!("Reserve fund: ${:.2}", employee.reserve_fund()))?,
            6 => {
                prompter.say(PAY_SLIP_TITLE)?;
                prompter.say(employee)?;
                prompter.say("")?;
                prompter.say(employee.pay_slip(&inputs))?;
                prompter.say(PAY_SLIP_RULE)?;
            }
            _ => {
                prompter.say("Leaving the salary menu...")?;
                return Ok(());
            }
        }
    }
}
