//! The "start quiz" command: pick a file, validate it, run it, offer a retry.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use comfy_table::Table;
use rand::Rng;

use testx_core::engine::ExitStats;
use testx_core::parser;
use testx_core::{EngineConfig, Question, QuizEngine, QuizMode, QuizOutcome, Settings};

use crate::config::TestxConfig;
use crate::console::Console;

const YES_WORDS: &[&str] = &["y", "yes", "д", "да"];

pub fn execute<I, O, R>(
    console: &mut Console<I, O>,
    config: &TestxConfig,
    settings: Settings,
    rng: R,
) -> Result<()>
where
    I: BufRead,
    O: Write,
    R: Rng,
{
    let Some(path) = choose_file(console, &config.texts_dir)? else {
        return Ok(());
    };

    if !path.is_file() {
        writeln!(console.out(), "Error: file not found: {}", path.display())?;
        return Ok(());
    }

    let (questions, warnings) = parser::validate_questions(parser::parse_question_file(&path)?);
    for warning in &warnings {
        writeln!(
            console.out(),
            "Question '{}' skipped ({})",
            warning.question,
            warning.issue
        )?;
    }

    if questions.is_empty() {
        writeln!(console.out(), "No valid questions to run.")?;
        return Ok(());
    }

    writeln!(console.out(), "\nQuestions found: {}", questions.len())?;
    if console.prompt("Press Enter to start... ")?.is_none() {
        return Ok(());
    }

    let mode = QuizMode::from(config.mode);
    let mut engine = QuizEngine::new(EngineConfig::from_settings(settings, mode), rng);

    let outcome = run_round(&mut engine, console, questions)?;
    if let QuizOutcome::Completed { incorrect, .. } = outcome {
        if mode == QuizMode::Retry
            && !incorrect.is_empty()
            && offer_retry(console, incorrect.len())?
        {
            run_round(&mut engine, console, incorrect)?;
        }
    }

    writeln!(console.out(), "\nQuiz finished. Returning to the main menu.")?;
    Ok(())
}

fn run_round<I, O, R>(
    engine: &mut QuizEngine<R>,
    console: &mut Console<I, O>,
    questions: Vec<Question>,
) -> Result<QuizOutcome>
where
    I: BufRead,
    O: Write,
    R: Rng,
{
    let (input, output) = console.split();
    let outcome = engine.run(questions, input, output)?;
    if let QuizOutcome::EarlyExit(stats) = &outcome {
        writeln!(console.out(), "\nQuiz stopped early.\n{}", exit_table(stats))?;
    }
    Ok(outcome)
}

fn offer_retry<I: BufRead, O: Write>(console: &mut Console<I, O>, count: usize) -> Result<bool> {
    let answer = console.prompt(&format!(
        "\nRetry the {count} incorrectly answered question(s)? [y/N]: "
    ))?;
    Ok(answer.is_some_and(|a| YES_WORDS.contains(&a.to_lowercase().as_str())))
}

fn exit_table(stats: &ExitStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Attempted", "Correct", "Incorrect", "Remaining"]);
    table.add_row(vec![
        stats.attempted.to_string(),
        stats.score.to_string(),
        stats.incorrect.to_string(),
        stats.remaining.to_string(),
    ]);
    table
}

/// List the question files in `dir` and let the user pick one, or ask for a
/// path when there are none.
fn choose_file<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
    dir: &Path,
) -> Result<Option<PathBuf>> {
    let files = parser::list_question_files(dir).unwrap_or_else(|e| {
        tracing::debug!("no question directory: {e:#}");
        Vec::new()
    });

    if files.is_empty() {
        writeln!(console.out(), "No question files found in {}.", dir.display())?;
        let path = console.prompt("Enter the path to a question file: ")?;
        return Ok(path.map(PathBuf::from));
    }

    writeln!(console.out(), "\nAvailable files:")?;
    for (idx, file) in files.iter().enumerate() {
        let name = file.file_name().unwrap_or_default().to_string_lossy();
        writeln!(console.out(), "{}. {name}", idx + 1)?;
    }

    loop {
        let Some(choice) = console.prompt("Choose a file number: ")? else {
            return Ok(None);
        };
        match choice.parse::<usize>() {
            Ok(n) if (1..=files.len()).contains(&n) => return Ok(Some(files[n - 1].clone())),
            Ok(_) => writeln!(console.out(), "Invalid choice. Pick one of the listed numbers.")?,
            Err(_) => writeln!(console.out(), "Error: enter a number.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::config::ModeSetting;

    const QUIZ: &str = "#Capital of France?\n+Paris\n-Lyon\n\n\
                        #Even numbers?\n+2\n-3\n+4\n\n\
                        #Broken\n-nothing right\n";

    fn setup(mode: ModeSetting) -> (tempfile::TempDir, TestxConfig) {
        let dir = tempfile::tempdir().unwrap();
        let texts = dir.path().join("Texts");
        std::fs::create_dir(&texts).unwrap();
        std::fs::write(texts.join("geo.txt"), QUIZ).unwrap();
        let config = TestxConfig {
            texts_dir: texts,
            settings_path: dir.path().join("settings.json"),
            mode,
        };
        (dir, config)
    }

    fn run(config: &TestxConfig, input: &str) -> String {
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
        execute(
            &mut console,
            config,
            Settings::default(),
            StdRng::seed_from_u64(1),
        )
        .unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn full_run_reports_invalid_questions() {
        let (_dir, config) = setup(ModeSetting::Retry);
        let out = run(&config, "1\n\n1\n1 3\n");

        assert!(out.contains("1. geo.txt"));
        assert!(out.contains("Question 'Broken' skipped (no correct answers)"));
        assert!(out.contains("Questions found: 2"));
        assert!(out.contains("Result: 2 of 2 correct"));
        assert!(!out.contains("Retry the"));
        assert!(out.contains("Returning to the main menu"));
    }

    #[test]
    fn retry_pass_reruns_only_incorrect() {
        let (_dir, config) = setup(ModeSetting::Retry);
        let out = run(&config, "1\n\n2\n1 3\ny\n1\n");

        assert!(out.contains("Result: 1 of 2 correct"));
        assert!(out.contains("Retry the 1 incorrectly answered question(s)?"));
        assert!(out.contains("[1/1] Capital of France?"));
        assert!(out.contains("Result: 1 of 1 correct"));
    }

    #[test]
    fn declined_retry_returns_to_menu() {
        let (_dir, config) = setup(ModeSetting::Retry);
        let out = run(&config, "1\n\n2\n1 3\nn\n");
        assert!(!out.contains("[1/1]"));
        assert!(out.contains("Returning to the main menu"));
    }

    #[test]
    fn early_exit_prints_statistics() {
        let (_dir, config) = setup(ModeSetting::Retry);
        let out = run(&config, "1\n\n2\nexit\n");

        assert!(out.contains("Quiz stopped early."));
        assert!(out.contains("Remaining"));
        assert!(!out.contains("Retry the"));
    }

    #[test]
    fn minimal_mode_never_offers_retry() {
        let (_dir, config) = setup(ModeSetting::Minimal);
        let out = run(&config, "1\n\n\n\n");
        assert!(out.contains("Result: 0 of 2 correct"));
        assert!(!out.contains("Retry the"));
    }

    #[test]
    fn invalid_file_choice_is_reprompted() {
        let (_dir, config) = setup(ModeSetting::Retry);
        let out = run(&config, "x\n5\n1\n\n1\n1 3\n");
        assert!(out.contains("Error: enter a number."));
        assert!(out.contains("Invalid choice. Pick one of the listed numbers."));
        assert!(out.contains("Result: 2 of 2 correct"));
    }

    #[test]
    fn missing_directory_prompts_for_path() {
        let (dir, mut config) = setup(ModeSetting::Retry);
        config.texts_dir = dir.path().join("absent");
        let quiz_path = dir.path().join("Texts").join("geo.txt");

        let out = run(&config, &format!("{}\n\n1\n1 3\n", quiz_path.display()));
        assert!(out.contains("No question files found"));
        assert!(out.contains("Result: 2 of 2 correct"));
    }

    #[test]
    fn missing_file_is_reported() {
        let (dir, mut config) = setup(ModeSetting::Retry);
        config.texts_dir = dir.path().join("absent");

        let out = run(&config, "no/such/file.txt\n");
        assert!(out.contains("Error: file not found: no/such/file.txt"));
    }

    #[test]
    fn file_with_no_valid_questions() {
        let (dir, config) = setup(ModeSetting::Retry);
        std::fs::write(config.texts_dir.join("geo.txt"), "#Only\n-wrong\n#Empty\n").unwrap();

        let out = run(&config, "1\n");
        assert!(out.contains("Question 'Only' skipped (no correct answers)"));
        assert!(out.contains("Question 'Empty' skipped (no answer options)"));
        assert!(out.contains("No valid questions to run."));
        drop(dir);
    }
}
