//! Study Plan CLI - Main entry point
//!
//! Collects intake input from the command line, runs the profile calculator
//! and lesson plan synthesizer, and prints or exports the result.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use study_plan::adapters::{render_report, FilePlanExporter, FixedClock, SystemClock};
use study_plan::application::{GenerateStudyPlanCommand, GenerateStudyPlanHandler};
use study_plan::config::{AppConfig, LoggingConfig};
use study_plan::domain::study_plan::{tables, Subject};
use study_plan::domain::user::LearningStyle;
use study_plan::ports::{Clock, ExportFormat, PlanExporter};

/// Command-line arguments for study-plan
#[derive(Parser, Debug)]
#[command(name = "study-plan")]
#[command(about = "Personalized study plans from numerology, astrology and learning style")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a study plan
    Generate {
        /// Full name
        #[arg(long)]
        name: String,

        /// Date of birth, YYYY-MM-DD
        #[arg(long)]
        dob: String,

        /// Learning style (Visual, Auditory, Reading/Writing, Kinesthetic)
        #[arg(long, default_value = "Visual")]
        style: String,

        /// Subject; defaults to the configured default subject
        #[arg(long)]
        subject: Option<String>,

        /// Specific interests or goals
        #[arg(long, default_value = "")]
        interests: String,

        /// Output format (text, json, yaml)
        #[arg(long, default_value = "text")]
        format: ExportFormat,

        /// Write the plan to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compute the personal year for this year instead of the current one
        #[arg(long)]
        year: Option<i32>,
    },

    /// List the available subjects
    Subjects,

    /// List the learning styles and their formats
    Styles,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.logging);

    match args.command {
        Command::Generate {
            name,
            dob,
            style,
            subject,
            interests,
            format,
            output,
            year,
        } => {
            let engine = config
                .engine
                .with_fixed_year(year)
                .context("Invalid --year")?;
            let clock: Arc<dyn Clock> = match engine.fixed_year {
                Some(year) => Arc::new(FixedClock::new(year)),
                None => Arc::new(SystemClock),
            };
            let handler = GenerateStudyPlanHandler::new(clock, &engine);

            let report = handler
                .handle(GenerateStudyPlanCommand {
                    name,
                    date_of_birth: dob,
                    learning_style: style,
                    subject,
                    interests,
                })
                .context("Could not generate study plan")?
                .into_report();

            match output {
                Some(path) => {
                    let written = FilePlanExporter::new(path)
                        .export(&report, format)
                        .context("Failed to export study plan")?;
                    info!("Study plan written to {}", written.display());
                }
                None => {
                    let rendered =
                        render_report(&report, format).context("Failed to render study plan")?;
                    print!("{}", rendered);
                }
            }
        }
        Command::Subjects => {
            for subject in Subject::ALL {
                println!("{}", subject);
            }
        }
        Command::Styles => {
            for style in LearningStyle::ALL {
                let format = tables::learning_format(style);
                println!("{} ({}) - {}", style, style.hint(), format.label);
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the plan.
fn init_tracing(logging: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(logging.env_filter());
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    if logging.use_json() {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer).init();
    }
}
