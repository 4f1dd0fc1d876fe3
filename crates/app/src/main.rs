use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{CategoryKey, NarrationSettings};
use services::{HttpQuizClient, QuizFlowService, ServerConfig};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidServerUrl { raw: String },
    InvalidCategory { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidServerUrl { raw } => write!(f, "invalid --server value: {raw}"),
            ArgsError::InvalidCategory { raw } => write!(f, "invalid category: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    categories: Vec<CategoryKey>,
    quiz_flow: Arc<QuizFlowService>,
}

impl UiApp for DesktopApp {
    fn categories(&self) -> Vec<CategoryKey> {
        self.categories.clone()
    }

    fn narration(&self) -> NarrationSettings {
        NarrationSettings::default()
    }

    fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }
}

struct Args {
    server: ServerConfig,
    categories: Vec<CategoryKey>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--server <url>] [--categories <key,key,...>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --server http://127.0.0.1:5001");
    eprintln!("  --categories python,java,cpp");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_SERVER_URL, QUIZ_CATEGORIES");
}

const DEFAULT_CATEGORIES: &str = "python,java,cpp";

fn parse_categories(raw: &str) -> Result<Vec<CategoryKey>, ArgsError> {
    let keys = raw
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| {
            CategoryKey::new(part).map_err(|_| ArgsError::InvalidCategory {
                raw: part.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if keys.is_empty() {
        return Err(ArgsError::InvalidCategory {
            raw: raw.to_string(),
        });
    }
    Ok(keys)
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut server = ServerConfig::from_env();
        let mut categories = parse_categories(
            &std::env::var("QUIZ_CATEGORIES").unwrap_or_else(|_| DEFAULT_CATEGORIES.into()),
        )?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--server" => {
                    let value = require_value(args, "--server")?;
                    if value.trim().is_empty() || !value.starts_with("http") {
                        return Err(ArgsError::InvalidServerUrl { raw: value });
                    }
                    server = ServerConfig::new(value);
                }
                "--categories" => {
                    let value = require_value(args, "--categories")?;
                    categories = parse_categories(&value)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { server, categories })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    tracing::info!(server = %parsed.server.base_url, "starting quiz client");

    let client = HttpQuizClient::new(parsed.server);
    let quiz_flow = Arc::new(QuizFlowService::new(Arc::new(client)));

    let app = DesktopApp {
        categories: parsed.categories,
        quiz_flow,
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
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

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
