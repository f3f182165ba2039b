//! Interactive quiz engine.
//!
//! [`QuizSession`] holds the scoring state of one run and knows nothing about
//! terminals. [`QuizEngine`] drives a session over any `BufRead`/`Write` pair,
//! shuffling with an injected random source so runs can be replayed in tests.

use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{QuizError, SelectionError};
use crate::model::Question;
use crate::settings::Settings;

/// Answers that end a run early, compared case-insensitively.
pub const EXIT_KEYWORDS: &[&str] = &["q", "quit", "exit", "выход"];

const ANSWER_PROMPT: &str =
    "Enter the numbers of the correct answers separated by spaces (q to quit): ";

/// How a run reacts to an early exit and to an empty answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizMode {
    /// Early exit returns [`ExitStats`]; empty answers are re-prompted;
    /// wrong answers are collected for a retry pass.
    #[default]
    Retry,
    /// Early exit prints the running score and stops; an empty answer means
    /// "selected nothing".
    Minimal,
}

/// Configuration for the quiz engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    /// Present questions in random order.
    pub shuffle_questions: bool,
    /// Present each question's options in random order.
    pub shuffle_answers: bool,
    pub mode: QuizMode,
}

impl EngineConfig {
    pub fn from_settings(settings: Settings, mode: QuizMode) -> Self {
        Self {
            shuffle_questions: settings.shuffle_questions,
            shuffle_answers: settings.shuffle_answers,
            mode,
        }
    }
}

/// A parsed answer line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Exit,
    /// Distinct 1-based option numbers.
    Indices(BTreeSet<usize>),
}

/// Parse one answer line for a question with `option_count` options.
pub fn parse_selection(
    line: &str,
    option_count: usize,
    mode: QuizMode,
) -> Result<Selection, SelectionError> {
    let trimmed = line.trim();

    let lowered = trimmed.to_lowercase();
    if EXIT_KEYWORDS.contains(&lowered.as_str()) {
        return Ok(Selection::Exit);
    }

    if trimmed.is_empty() {
        return match mode {
            QuizMode::Retry => Err(SelectionError::Empty),
            QuizMode::Minimal => Ok(Selection::Indices(BTreeSet::new())),
        };
    }

    let values = trimmed
        .split_whitespace()
        .map(|token| {
            token.parse::<i64>().or_else(|e| match e.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(SelectionError::NotANumber(token.to_string())),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut indices = BTreeSet::new();
    for value in values {
        match usize::try_from(value) {
            Ok(idx) if (1..=option_count).contains(&idx) => {
                indices.insert(idx);
            }
            _ => {
                return Err(SelectionError::OutOfRange {
                    value,
                    max: option_count,
                })
            }
        }
    }

    Ok(Selection::Indices(indices))
}

/// Partial statistics reported when the user quits mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStats {
    pub attempted: usize,
    pub incorrect: usize,
    /// Questions never presented, `total - attempted`.
    pub remaining: usize,
    pub score: usize,
}

/// The result of one engine invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// Every question was answered.
    Completed {
        score: usize,
        total: usize,
        /// Questions answered incorrectly, in presentation order.
        incorrect: Vec<Question>,
    },
    /// The user quit in [`QuizMode::Retry`].
    EarlyExit(ExitStats),
    /// The user quit in [`QuizMode::Minimal`].
    Stopped {
        score: usize,
        attempted: usize,
        total: usize,
    },
}

/// Feedback for a single scored answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    /// 1-based, ascending.
    pub correct_indices: Vec<usize>,
}

/// Scoring state of a single run.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    position: usize,
    score: usize,
    attempted: usize,
    incorrect: Vec<Question>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            position: 0,
            score: 0,
            attempted: 0,
            incorrect: Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// 1-based number of the question awaiting an answer.
    pub fn position(&self) -> usize {
        self.position + 1
    }

    pub fn current_mut(&mut self) -> Option<&mut Question> {
        self.questions.get_mut(self.position)
    }

    /// Score `selected` against the current question and move to the next.
    ///
    /// Returns `None` once every question has been answered.
    pub fn answer(&mut self, selected: &BTreeSet<usize>) -> Option<AnswerFeedback> {
        let question = self.questions.get(self.position)?;
        let correct_indices = question.correct_indices();
        let correct = correct_indices.iter().copied().collect::<BTreeSet<_>>() == *selected;

        if correct {
            self.score += 1;
        } else {
            self.incorrect.push(question.clone());
        }
        self.attempted += 1;
        self.position += 1;

        Some(AnswerFeedback {
            correct,
            correct_indices,
        })
    }

    pub fn exit_stats(&self) -> ExitStats {
        ExitStats {
            attempted: self.attempted,
            incorrect: self.incorrect.len(),
            remaining: self.total() - self.attempted,
            score: self.score,
        }
    }

    pub fn finish(self) -> QuizOutcome {
        QuizOutcome::Completed {
            score: self.score,
            total: self.questions.len(),
            incorrect: self.incorrect,
        }
    }
}

/// Runs quizzes over a line-oriented reader and writer.
pub struct QuizEngine<R> {
    config: EngineConfig,
    rng: R,
}

impl<R: Rng> QuizEngine<R> {
    pub fn new(config: EngineConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Present `questions` one by one until all are answered or the user quits.
    ///
    /// The caller is expected to pass only valid questions.
    pub fn run<I, O>(
        &mut self,
        mut questions: Vec<Question>,
        input: &mut I,
        output: &mut O,
    ) -> Result<QuizOutcome, QuizError>
    where
        I: BufRead,
        O: Write,
    {
        if self.config.shuffle_questions {
            questions.shuffle(&mut self.rng);
        }

        let mut session = QuizSession::new(questions);
        let total = session.total();
        let mut line = String::new();

        loop {
            let position = session.position();
            let Some(question) = session.current_mut() else {
                break;
            };
            if self.config.shuffle_answers {
                question.options.shuffle(&mut self.rng);
            }
            present(question, position, total, output)?;
            let option_count = question.options.len();

            let selected = loop {
                write!(output, "{ANSWER_PROMPT}")?;
                output.flush()?;

                line.clear();
                if input.read_line(&mut line)? == 0 {
                    return Err(QuizError::InputClosed);
                }

                match parse_selection(&line, option_count, self.config.mode) {
                    Ok(Selection::Indices(indices)) => break indices,
                    Ok(Selection::Exit) => return self.exit(&session, output),
                    Err(e) => writeln!(output, "Error: {e}")?,
                }
            };

            if let Some(feedback) = session.answer(&selected) {
                if feedback.correct {
                    writeln!(output, "✓ Correct!")?;
                } else {
                    writeln!(output, "✗ Incorrect")?;
                    writeln!(
                        output,
                        "Correct answers: {}",
                        join_indices(&feedback.correct_indices)
                    )?;
                }
            }
        }

        writeln!(output, "\nResult: {} of {total} correct", session.score())?;
        tracing::info!(score = session.score(), total, "quiz completed");
        Ok(session.finish())
    }

    fn exit<O: Write>(
        &self,
        session: &QuizSession,
        output: &mut O,
    ) -> Result<QuizOutcome, QuizError> {
        let stats = session.exit_stats();
        tracing::info!(?stats, "quiz exited early");

        match self.config.mode {
            QuizMode::Retry => Ok(QuizOutcome::EarlyExit(stats)),
            QuizMode::Minimal => {
                writeln!(output, "\nResult: {} of {} correct", stats.score, session.total())?;
                Ok(QuizOutcome::Stopped {
                    score: stats.score,
                    attempted: stats.attempted,
                    total: session.total(),
                })
            }
        }
    }
}

fn present<O: Write>(
    question: &Question,
    position: usize,
    total: usize,
    output: &mut O,
) -> std::io::Result<()> {
    writeln!(output, "\n[{position}/{total}] {}", question.text)?;
    for (idx, option) in question.options.iter().enumerate() {
        writeln!(output, "{}. {}", idx + 1, option.text)?;
    }
    Ok(())
}

fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
