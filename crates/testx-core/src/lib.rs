//! testx-core — question parsing, quiz engine, and settings persistence.
//!
//! This crate holds everything about a quiz that does not depend on the
//! terminal menu: the question file format, the scoring state machine, and
//! the persisted shuffle preferences.

pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod settings;

pub use engine::{EngineConfig, ExitStats, QuizEngine, QuizMode, QuizOutcome, QuizSession};
pub use error::{QuizError, SelectionError, SettingsError};
pub use model::{Question, QuizOption, ValidityIssue};
pub use settings::{Settings, SettingsStore};
