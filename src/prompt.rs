use std::{
    fmt::Display,
    io::{IsTerminal, Write},
};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::{
    eval::{eval, EvalError, Number},
    lex::{lex_operand, lex_operator, LexError},
};

const BANNER: &str = "=== Simple Calculator ===";

const FIRST_NUMBER_PROMPT: &str = "Enter first number: ";
const OPERATOR_PROMPT: &str = "Enter operator (+, -, *, /): ";
const SECOND_NUMBER_PROMPT: &str = "Enter second number: ";

/// Where the answers come from. Implemented by the rustyline editor for the
/// terminal and by scripted input in tests.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError>;

    /// Whether `read_line` shows the prompt itself. When it doesn't, the
    /// session writes the prompt to its output before reading.
    fn shows_prompt(&self) -> bool {
        true
    }
}

impl LineSource for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        self.readline(prompt)
    }

    // rustyline reads piped stdin without printing the prompt
    fn shows_prompt(&self) -> bool {
        std::io::stdin().is_terminal()
    }
}

#[derive(Debug, PartialEq)]
pub enum Report {
    Result(Number),
    DivisionByZero,
    InvalidOperator,
    InvalidInput,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Result(n) => write!(f, "Result: {}", n),
            Report::DivisionByZero => write!(f, "Error: Division by zero."),
            Report::InvalidOperator => write!(f, "Invalid operator."),
            Report::InvalidInput => write!(f, "Invalid input. Please enter numbers."),
        }
    }
}

impl From<LexError> for Report {
    fn from(_: LexError) -> Self {
        Report::InvalidInput
    }
}

impl From<EvalError> for Report {
    fn from(value: EvalError) -> Self {
        match value {
            EvalError::DivisionByZero => Report::DivisionByZero,
        }
    }
}

/// Prompts for first number, operator and second number, then reports.
///
/// Returns `Ok(None)` when the user hits CTRL-C or CTRL-D at a prompt.
pub fn session<L: LineSource, W: Write>(
    lines: &mut L,
    out: &mut W,
) -> anyhow::Result<Option<Report>> {
    let Some(first) = ask(lines, out, FIRST_NUMBER_PROMPT)? else {
        return Ok(None);
    };
    let lhs = match lex_operand(&first) {
        Ok(n) => n,
        Err(e) => {
            log::debug!("first operand {:?} rejected: {}", first, e);
            return report(out, e.into());
        }
    };

    let Some(op) = ask(lines, out, OPERATOR_PROMPT)? else {
        return Ok(None);
    };

    let Some(second) = ask(lines, out, SECOND_NUMBER_PROMPT)? else {
        return Ok(None);
    };
    let rhs = match lex_operand(&second) {
        Ok(n) => n,
        Err(e) => {
            log::debug!("second operand {:?} rejected: {}", second, e);
            return report(out, e.into());
        }
    };

    let Some(op) = lex_operator(&op) else {
        log::debug!("operator {:?} not recognized", op.trim());
        return report(out, Report::InvalidOperator);
    };

    log::debug!("evaluating {} {} {}", lhs, op, rhs);
    match eval(lhs, op, rhs) {
        Ok(n) => report(out, Report::Result(n)),
        Err(e) => {
            log::debug!("evaluation refused: {}", e);
            report(out, e.into())
        }
    }
}

fn ask<L: LineSource, W: Write>(
    lines: &mut L,
    out: &mut W,
    prompt: &str,
) -> anyhow::Result<Option<String>> {
    if !lines.shows_prompt() {
        write!(out, "{}", prompt)?;
        out.flush()?;
    }

    match lines.read_line(prompt) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) => {
            writeln!(out, "CTRL-C")?;
            Ok(None)
        }
        Err(ReadlineError::Eof) => {
            writeln!(out, "CTRL-D")?;
            Ok(None)
        }
        Err(err) => Err(anyhow::anyhow!("Unexpected Error: {:?}", err)),
    }
}

fn report<W: Write>(out: &mut W, report: Report) -> anyhow::Result<Option<Report>> {
    writeln!(out, "{}", report)?;
    Ok(Some(report))
}

/// Prints the banner (unless `quiet`) and runs one session.
pub fn start<L: LineSource, W: Write>(
    lines: &mut L,
    out: &mut W,
    quiet: bool,
) -> anyhow::Result<Option<Report>> {
    if !quiet {
        writeln!(out, "{}", BANNER)?;
        out.flush()?;
    }

    session(lines, out)
}

pub fn run(quiet: bool) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut stdout = std::io::stdout();

    match start(&mut rl, &mut stdout, quiet)? {
        Some(report) => log::info!("session finished: {:?}", report),
        None => log::info!("session abandoned"),
    }

    Ok(())
}
