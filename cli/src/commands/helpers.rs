use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use std::str::FromStr;

/// Line-oriented terminal dialogue over any reader/writer pair.
pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub(crate) fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    pub(crate) fn say_all(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    /// Print `prompt` without a newline and read one line of input.
    pub(crate) fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("No input");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub(crate) fn ask_parsed<T>(&mut self, prompt: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let answer = self.ask(prompt)?;
        let trimmed = answer.trim();
        trimmed
            .parse()
            .with_context(|| format!("Invalid number '{trimmed}'"))
    }

    /// Read a menu choice. Integers too large for `i64` saturate so they fall
    /// through to the caller's invalid-choice branch; non-numbers are errors.
    pub(crate) fn ask_choice(&mut self, prompt: &str) -> Result<i64> {
        let answer = self.ask(prompt)?;
        let trimmed = answer.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => Ok(n),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(e).with_context(|| format!("Invalid number '{trimmed}'")),
            },
        }
    }

    pub(crate) fn ask_date(&mut self, prompt: &str) -> Result<NaiveDate> {
        let answer = self.ask(prompt)?;
        parse_date(&answer)
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{s}'. Use YYYY-MM-DD"))
}
