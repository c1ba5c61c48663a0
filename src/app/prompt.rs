use crate::utils::error::{PayrollError, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Line-oriented prompts over any reader/writer pair. Bad input is answered
/// with a message and the question is asked again.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(PayrollError::InputClosed);
        }
        Ok(buf.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Prints `label` without a newline and returns the raw answer.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn ask_number<T: FromStr>(&mut self, label: &str) -> Result<T> {
        loop {
            let answer = self.ask(label)?;
            match answer.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    tracing::debug!("Rejected non-numeric input {:?}", answer);
                    self.say("A numeric value is expected.")?;
                }
            }
        }
    }

    /// Shows a numbered menu and returns the chosen option, 1-based.
    pub fn choose(&mut self, title: &str, options: &[&str]) -> Result<usize> {
        loop {
            self.say(title.to_uppercase())?;
            for (i, option) in options.iter().enumerate() {
                self.say(format_args!("{}. {}", i + 1, option))?;
            }

            let answer = self.ask(">> Enter the option number: ")?;
            // Signed, so "-1" gets the range message rather than the numeric one.
            match answer.trim().parse::<i64>() {
                Ok(choice) if choice >= 1 && choice as u64 <= options.len() as u64 => {
                    return Ok(choice as usize)
                }
                Ok(_) => {
                    self.say(format_args!("Enter a number between [1-{}]", options.len()))?
                }
                Err(_) => self.say("Numeric options are expected.")?,
            }
        }
    }
}
