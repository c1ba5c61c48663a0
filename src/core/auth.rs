use crate::core::registry::EmployeeRegistry;
use crate::domain::model::Employee;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    AwaitingInput,
    Authenticated,
    Terminated,
}

#[derive(Debug, PartialEq)]
pub enum LoginOutcome<'a> {
    Authenticated(&'a Employee),
    Rejected { remaining: u32 },
    LockedOut,
}

/// Attempt budget for a single login session.
///
/// An unknown login and a wrong secret count the same way.
#[derive(Debug, Clone)]
pub struct Authenticator {
    max_attempts: u32,
    failed_attempts: u32,
    state: AuthState,
}

impl Authenticator {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            failed_attempts: 0,
            state: AuthState::AwaitingInput,
        }
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.max_attempts.saturating_sub(self.failed_attempts)
    }

    pub fn attempt<'r>(
        &mut self,
        registry: &'r EmployeeRegistry,
        login: &str,
        secret: &str,
    ) -> LoginOutcome<'r> {
        if self.state == AuthState::Terminated {
            return LoginOutcome::LockedOut;
        }

        match registry.find_by_login(login) {
            Some(employee) if employee.verify_secret(secret) => {
                tracing::info!("Login succeeded for '{}'", login);
                self.state = AuthState::Authenticated;
                LoginOutcome::Authenticated(employee)
            }
            _ => {
                self.failed_attempts += 1;
                let remaining = self.remaining_attempts();
                if remaining == 0 {
                    tracing::warn!(
                        "Login locked out after {} failed attempts (last login '{}')",
                        self.failed_attempts,
                        login
                    );
                    self.state = AuthState::Terminated;
                    LoginOutcome::LockedOut
                } else {
                    tracing::info!("Login failed for '{}', {} attempts left", login, remaining);
                    self.state = AuthState::AwaitingInput;
                    LoginOutcome::Rejected { remaining }
                }
            }
        }
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}
