//! Core data model types for testx.
//!
//! A quiz file is a flat list of questions, each with an ordered list of
//! answer options flagged correct or incorrect.

use std::fmt;

/// One selectable answer attached to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    /// Text shown to the user.
    pub text: String,
    /// Whether selecting this option is part of the correct answer.
    pub is_correct: bool,
}

impl QuizOption {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }

    pub fn correct(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    pub fn incorrect(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }
}

/// A prompt plus its ordered options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The question text, without the leading `#`.
    pub text: String,
    /// Options in file order (or shuffled order during a run).
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::new(),
        }
    }

    pub fn with_options(text: impl Into<String>, options: Vec<QuizOption>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    /// 1-based indices of the correct options, in presentation order.
    pub fn correct_indices(&self) -> Vec<usize> {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, opt)| opt.is_correct)
            .map(|(idx, _)| idx + 1)
            .collect()
    }

    /// Returns the reason this question cannot be asked, if any.
    pub fn validity_issue(&self) -> Option<ValidityIssue> {
        if self.options.is_empty() {
            Some(ValidityIssue::NoOptions)
        } else if !self.options.iter().any(|opt| opt.is_correct) {
            Some(ValidityIssue::NoCorrectOption)
        } else {
            None
        }
    }

    /// A question is valid when it has at least one option and at least one correct option.
    pub fn is_valid(&self) -> bool {
        self.validity_issue().is_none()
    }
}

/// Why a parsed question was rejected before a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidityIssue {
    NoOptions,
    NoCorrectOption,
}

impl fmt::Display for ValidityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidityIssue::NoOptions => write!(f, "no answer options"),
            ValidityIssue::NoCorrectOption => write!(f, "no correct answers"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_indices_are_one_based() {
        let q = Question::with_options(
            "Pick primes",
            vec![
                QuizOption::incorrect("4"),
                QuizOption::correct("3"),
                QuizOption::incorrect("9"),
                QuizOption::correct("7"),
            ],
        );
        assert_eq!(q.correct_indices(), vec![2, 4]);
    }

    #[test]
    fn validity() {
        assert_eq!(
            Question::new("empty").validity_issue(),
            Some(ValidityIssue::NoOptions)
        );
        let no_correct = Question::with_options("q", vec![QuizOption::incorrect("a")]);
        assert_eq!(
            no_correct.validity_issue(),
            Some(ValidityIssue::NoCorrectOption)
        );
        let ok = Question::with_options("q", vec![QuizOption::correct("a")]);
        assert!(ok.is_valid());
    }
}
