use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::parse_quiz;
use services::{AppServices, ExportService, PrintMode, QuizService, DEFAULT_CONVERTER};
use ui::{App, UiApp, build_app_context};

const DEFAULT_QUIZ_DIR: &str = "questions";
const DEFAULT_EXPORT_DIR: &str = "exports";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingFile { command: &'static str },
    UnknownArg(String),
    EmptyValue { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingFile { command } => write!(f, "{command} requires a quiz file"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyValue { flag });
    }
    Ok(value)
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        self.services.quizzes()
    }

    fn export_service(&self) -> Arc<ExportService> {
        self.services.exports()
    }

    fn export_dir(&self) -> PathBuf {
        self.services.export_dir().to_path_buf()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui      [options]");
    eprintln!("  cargo run -p app -- list    [options]");
    eprintln!("  cargo run -p app -- inspect <file>");
    eprintln!("  cargo run -p app -- export  <file> [--answers] [--out <path>] [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --quiz-dir <dir>      default: {DEFAULT_QUIZ_DIR}");
    eprintln!("  --export-dir <dir>    default: {DEFAULT_EXPORT_DIR}");
    eprintln!("  --converter <program> default: {DEFAULT_CONVERTER}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DIR, QUIZ_EXPORT_DIR, QUIZ_PDF_CONVERTER, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    List,
    Inspect,
    Export,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "list" => Some(Self::List),
            "inspect" => Some(Self::Inspect),
            "export" => Some(Self::Export),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Ui => "ui",
            Self::List => "list",
            Self::Inspect => "inspect",
            Self::Export => "export",
        }
    }

    fn takes_file(self) -> bool {
        matches!(self, Self::Inspect | Self::Export)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    quiz_dir: PathBuf,
    export_dir: PathBuf,
    converter: String,
    file: Option<PathBuf>,
    answers: bool,
    out: Option<PathBuf>,
}

impl Args {
    fn parse(
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let non_empty = |key: &str| env(key).filter(|value| !value.trim().is_empty());
        let mut parsed = Self {
            quiz_dir: non_empty("QUIZ_DIR").map_or_else(|| DEFAULT_QUIZ_DIR.into(), PathBuf::from),
            export_dir: non_empty("QUIZ_EXPORT_DIR")
                .map_or_else(|| DEFAULT_EXPORT_DIR.into(), PathBuf::from),
            converter: non_empty("QUIZ_PDF_CONVERTER").unwrap_or_else(|| DEFAULT_CONVERTER.into()),
            file: None,
            answers: false,
            out: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--quiz-dir" => parsed.quiz_dir = require_value(args, "--quiz-dir")?.into(),
                "--export-dir" => parsed.export_dir = require_value(args, "--export-dir")?.into(),
                "--converter" => parsed.converter = require_value(args, "--converter")?,
                "--answers" if cmd == Command::Export => parsed.answers = true,
                "--out" if cmd == Command::Export => {
                    parsed.out = Some(require_value(args, "--out")?.into());
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ if cmd.takes_file() && parsed.file.is_none() && !arg.starts_with("--") => {
                    parsed.file = Some(arg.into());
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if cmd.takes_file() && parsed.file.is_none() {
            return Err(ArgsError::MissingFile {
                command: cmd.name(),
            });
        }
        Ok(parsed)
    }

    fn services(&self) -> AppServices {
        AppServices::from_directory(&self.quiz_dir, &self.export_dir, &self.converter)
    }
}

async fn read_quiz_file(
    path: &std::path::Path,
) -> Result<quiz_core::model::QuizDocument, Box<dyn std::error::Error>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| format!("could not read {}: {err}", path.display()))?;
    Ok(parse_quiz(&text))
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    match cmd {
        Command::Ui => {
            let services = parsed.services();
            log::info!(
                "serving quizzes from {} (exports to {})",
                services.quiz_dir().display(),
                services.export_dir().display()
            );
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Quiz")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::List => {
            let entries = parsed.services().quizzes().list_quizzes().await?;
            if entries.is_empty() {
                println!("No quiz files found in the directory.");
            }
            for entry in entries {
                println!("{}", entry.label);
            }
            Ok(())
        }
        Command::Inspect => {
            let Some(file) = parsed.file.as_deref() else {
                return Err(ArgsError::MissingFile { command: "inspect" }.into());
            };
            let doc = read_quiz_file(file).await?;
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
        Command::Export => {
            let Some(file) = parsed.file.as_deref() else {
                return Err(ArgsError::MissingFile { command: "export" }.into());
            };
            let doc = read_quiz_file(file).await?;
            let mode = if parsed.answers {
                PrintMode::AnswerKey
            } else {
                PrintMode::Blank
            };
            let services = parsed.services();
            let printed = services.exports().export(&doc, mode).await?;
            let path = match parsed.out.as_deref() {
                Some(out) => printed.save_as(out).await?,
                None => printed.save_in(services.export_dir()).await?,
            };
            println!("{}", path.display());
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
