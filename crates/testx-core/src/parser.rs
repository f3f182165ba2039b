//! Question file parser.
//!
//! # Format
//! ```text
//! #What is 2 + 2?
//! +4
//! -5
//!
//! #Which are even?
//! +2
//! -3
//! +8
//! ```
//!
//! Lines are classified by their first non-blank character only; there is no
//! escape for a literal leading `#`, `+` or `-`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::{Question, QuizOption, ValidityIssue};

/// Parse question text into questions, in file order.
///
/// Questions without options are kept; use [`validate_questions`] before a run.
pub fn parse_questions(content: &str) -> Vec<Question> {
    let mut questions = Vec::new();
    let mut current: Option<Question> = None;

    for (idx, line) in content.lines().enumerate() {
        match classify_line(line) {
            LineType::Question(text) => {
                if let Some(done) = current.replace(Question::new(text)) {
                    questions.push(done);
                }
            }
            LineType::Option { text, is_correct } => match current.as_mut() {
                Some(question) => question.options.push(QuizOption::new(text, is_correct)),
                None => {
                    tracing::debug!(line = idx + 1, "option before any question, discarded");
                }
            },
            LineType::Empty | LineType::Other => {}
        }
    }

    if let Some(done) = current {
        questions.push(done);
    }

    questions
}

enum LineType<'a> {
    Question(&'a str),
    Option { text: &'a str, is_correct: bool },
    Empty,
    Other,
}

fn classify_line(line: &str) -> LineType<'_> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        LineType::Empty
    } else if let Some(rest) = trimmed.strip_prefix('#') {
        LineType::Question(rest.trim())
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        LineType::Option {
            text: rest.trim(),
            is_correct: true,
        }
    } else if let Some(rest) = trimmed.strip_prefix('-') {
        LineType::Option {
            text: rest.trim(),
            is_correct: false,
        }
    } else {
        LineType::Other
    }
}

/// Read and parse a single question file.
pub fn parse_question_file(path: &Path) -> Result<Vec<Question>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question file: {}", path.display()))?;

    let questions = parse_questions(&content);
    tracing::info!(
        "parsed {} question(s) from {}",
        questions.len(),
        path.display()
    );
    Ok(questions)
}

/// List the `*.txt` question files in a directory, sorted by name.
pub fn list_question_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// A question rejected by [`validate_questions`].
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The rejected question's text.
    pub question: String,
    pub issue: ValidityIssue,
}

/// Split parsed questions into the ones that can be asked and warnings for the rest.
pub fn validate_questions(questions: Vec<Question>) -> (Vec<Question>, Vec<ValidationWarning>) {
    let mut valid = Vec::with_capacity(questions.len());
    let mut warnings = Vec::new();

    for question in questions {
        match question.validity_issue() {
            None => valid.push(question),
            Some(issue) => warnings.push(ValidationWarning {
                question: question.text,
                issue,
            }),
        }
    }

    (valid, warnings)
}
