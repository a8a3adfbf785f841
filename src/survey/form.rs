//! Field descriptors and form executors
//!
//! The survey is a fixed ordered list of [`FieldSpec`]s. Each executor
//! walks the list, re-prompting a field until its rule accepts the input,
//! so a validation failure never escapes the form boundary.

use std::io::{self, BufRead, Write};

use dialoguer::{Confirm, Input, Select};

use super::SurveyResult;
use crate::constants::survey as text;
use crate::errors::SurveyError;

/// A single form field: a prompt plus its input kind
pub(crate) struct FieldSpec {
    pub prompt: &'static str,
    pub kind: FieldKind,
}

/// Input kinds the form executors know how to render
pub(crate) enum FieldKind {
    /// Free text with a validation rule returning the canonical value
    Text {
        validate: fn(&str) -> Result<String, String>,
    },
    /// Single choice over a fixed option list
    Select {
        options: &'static [&'static str],
    },
    /// Yes/no confirmation
    Confirm { default: bool },
}

/// A validated answer for one field
pub(crate) enum FieldValue {
    Text(String),
    Choice(usize),
    Confirm(bool),
}

/// The three fields of the demo survey, in display order
pub(crate) fn survey_fields() -> [FieldSpec; 3] {
    [
        FieldSpec {
            prompt: text::NAME_PROMPT,
            kind: FieldKind::Text {
                validate: validate_name,
            },
        },
        FieldSpec {
            prompt: text::LANGUAGE_PROMPT,
            kind: FieldKind::Select {
                options: &text::LANGUAGES,
            },
        },
        FieldSpec {
            prompt: text::NEWSLETTER_PROMPT,
            kind: FieldKind::Confirm { default: false },
        },
    ]
}

/// Accept a non-empty name, returning the trimmed value
fn validate_name(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(text::NAME_REQUIRED.to_string());
    }
    Ok(trimmed.to_string())
}

/// Parse a 1-based choice index into a 0-based option offset
fn parse_choice(raw: &str, len: usize) -> Result<usize, String> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
        .ok_or_else(|| format!("must be a number between 1 and {len}"))
}

/// Parse a yes/no line, falling back to the default on an empty line
fn parse_confirm(raw: &str, default: bool) -> Result<bool, String> {
    match raw.trim().to_lowercase().as_str() {
        "" => Ok(default),
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err("answer y or n".to_string()),
    }
}

/// Build the result from the positional field answers
fn assemble(values: Vec<FieldValue>) -> Result<SurveyResult, SurveyError> {
    match values.as_slice() {
        [FieldValue::Text(name), FieldValue::Choice(index), FieldValue::Confirm(opt_in)] => {
            Ok(SurveyResult {
                name: name.clone(),
                favorite_language: text::LANGUAGES[*index].to_string(),
                newsletter_opt_in: *opt_in,
            })
        }
        _ => Err(SurveyError::Execution(
            "form produced mismatched answers".to_string(),
        )),
    }
}

/// Execute the survey over plain text lines
///
/// Prompts go to `output`, responses come one line at a time from `input`.
/// Choice fields accept 1-based numeric indices. Validation failures are
/// echoed as plain text before the field re-prompts; a closed input stream
/// surfaces as an I/O error.
pub fn run_accessible<R, W>(mut input: R, mut output: W) -> Result<SurveyResult, SurveyError>
where
    R: BufRead,
    W: Write,
{
    let mut values = Vec::with_capacity(3);
    for field in survey_fields() {
        values.push(prompt_line_field(&field, &mut input, &mut output)?);
    }
    assemble(values)
}

fn prompt_line_field<R, W>(
    field: &FieldSpec,
    input: &mut R,
    output: &mut W,
) -> Result<FieldValue, SurveyError>
where
    R: BufRead,
    W: Write,
{
    loop {
        match &field.kind {
            FieldKind::Text { validate } => {
                writeln!(output, "{}", field.prompt)?;
                write!(output, "> ")?;
                output.flush()?;

                match validate(&read_line(input)?) {
                    Ok(value) => return Ok(FieldValue::Text(value)),
                    Err(message) => writeln!(output, "{message}")?,
                }
            }
            FieldKind::Select { options } => {
                writeln!(output, "{}", field.prompt)?;
                for (i, option) in options.iter().enumerate() {
                    writeln!(output, "{}. {}", i + 1, option)?;
                }
                write!(output, "Choose 1-{}: ", options.len())?;
                output.flush()?;

                match parse_choice(&read_line(input)?, options.len()) {
                    Ok(index) => return Ok(FieldValue::Choice(index)),
                    Err(message) => writeln!(output, "Invalid: {message}")?,
                }
            }
            FieldKind::Confirm { default } => {
                let hint = if *default { "Y/n" } else { "y/N" };
                write!(output, "{} [{hint}]: ", field.prompt)?;
                output.flush()?;

                match parse_confirm(&read_line(input)?, *default) {
                    Ok(confirmed) => return Ok(FieldValue::Confirm(confirmed)),
                    Err(message) => writeln!(output, "Invalid: {message}")?,
                }
            }
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the survey completed",
        ));
    }
    Ok(line)
}

/// Execute the survey with full interactive widgets
///
/// Maps each descriptor to its dialoguer widget; the widgets own the
/// re-prompt loop for validation failures.
pub(crate) fn run_interactive() -> Result<SurveyResult, SurveyError> {
    let mut values = Vec::with_capacity(3);
    for field in survey_fields() {
        values.push(prompt_widget_field(&field)?);
    }
    assemble(values)
}

fn prompt_widget_field(field: &FieldSpec) -> Result<FieldValue, SurveyError> {
    match &field.kind {
        FieldKind::Text { validate } => {
            let validate = *validate;
            let raw: String = Input::<String>::new()
                .with_prompt(field.prompt)
                .validate_with(move |value: &String| -> Result<(), String> {
                    validate(value).map(|_| ())
                })
                .interact_text()?;

            // The widget re-prompts until the rule passes; run it once more
            // for the canonical (trimmed) value.
            let value = validate(&raw).map_err(SurveyError::Execution)?;
            Ok(FieldValue::Text(value))
        }
        FieldKind::Select { options } => {
            let index = Select::new()
                .with_prompt(field.prompt)
                .items(options)
                .default(0)
                .interact()?;
            Ok(FieldValue::Choice(index))
        }
        FieldKind::Confirm { default } => {
            let confirmed = Confirm::new()
                .with_prompt(field.prompt)
                .default(*default)
                .interact()?;
            Ok(FieldValue::Confirm(confirmed))
        }
    }
}
