use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use common::Config;
use common::logger::init_logger;
use evaluator::{EvaluationJob, FixedRubricJob};
use serde::Deserialize;
use serde::Serialize;
use services::attempt_ledger::InMemoryAttemptLedger;
use services::audit_log::LogAuditLog;
use services::exercise_repository::FileExerciseRepository;
use services::EvaluationService;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use util::fixed_rubric::{FixedRubricFile, FixedRubricRule};
use util::languages::Language;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LanguageArg {
    C,
    #[value(alias = "pseudocodigo")]
    Pseint,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::C => Language::C,
            LanguageArg::Pseint => Language::PSeInt,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Evaluate C and PSeInt exercises")]
struct Args {
    /// Path of the .env file to load
    #[arg(long, default_value = ".env")]
    env: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare a submission with a reference solution
    Practice {
        #[arg(long)]
        student: String,
        #[arg(long)]
        solution: String,
        /// Skip language detection
        #[arg(long, value_enum)]
        language: Option<LanguageArg>,
    },
    /// Score a submission against a rubric.json
    Exam {
        #[arg(long)]
        student: String,
        #[arg(long)]
        rubric: String,
    },
    /// Submit to a stored exercise below STORAGE_ROOT
    Submit {
        #[arg(long)]
        unit: String,
        #[arg(long)]
        exercise: String,
        #[arg(long)]
        user: String,
        #[arg(long)]
        student: String,
    },
}

/// Either a full rubric file or a bare list of rules.
#[derive(Deserialize)]
#[serde(untagged)]
enum RubricInput {
    File(FixedRubricFile),
    Rules(Vec<FixedRubricRule>),
}

fn read(path: &str) -> Result<String> {
    fs::read_to_string(Path::new(path)).with_context(|| format!("Failed to read {path}"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::init(&args.env);
    init_logger(&config.log_level, &config.log_file, config.log_to_console)
        .with_context(|| format!("Failed to open log file {}", config.log_file))?;
    log::debug!("{} starting", config.project_name);

    match args.command {
        Command::Practice {
            student,
            solution,
            language,
        } => {
            let student = read(&student)?;
            let solution = read(&solution)?;
            let mut job = EvaluationJob::new(&student, &solution);
            if let Some(language) = language {
                job = job.with_language(language.into());
            }
            print_json(&job.evaluate()?)
        }
        Command::Exam { student, rubric } => {
            let student = read(&student)?;
            let rules = match serde_json::from_str::<RubricInput>(&read(&rubric)?)
                .with_context(|| format!("Invalid rubric JSON in {rubric}"))?
            {
                RubricInput::File(file) => file.rules,
                RubricInput::Rules(rules) => rules,
            };
            print_json(&FixedRubricJob::new(&student, &rules).score()?)
        }
        Command::Submit {
            unit,
            exercise,
            user,
            student,
        } => {
            let code = read(&student)?;
            let service = EvaluationService::new(
                Arc::new(FileExerciseRepository::new(&config.storage_root)),
                Arc::new(InMemoryAttemptLedger::new()),
                Arc::new(LogAuditLog),
            );
            match service.submit(&user, &unit, &exercise, &code) {
                Ok(result) => print_json(&result),
                Err(err) => bail!("{err}"),
            }
        }
    }
}
