use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use practice_core::model::SetId;
use services::{AppServices, CatalogService, SessionLoopService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSetId { raw: String },
    InvalidLogFilter { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSetId { raw } => write!(f, "invalid --set value: {raw}"),
            ArgsError::InvalidLogFilter { raw } => write!(f, "invalid --log filter: {raw}"),
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
    initial_set: Option<SetId>,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn initial_set(&self) -> Option<SetId> {
        self.initial_set
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn session_loop(&self) -> Arc<SessionLoopService> {
        self.services.session_loop()
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    set_id: Option<SetId>,
    log_filter: Option<String>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--set <id>] [--log <filter>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --set <id>       open straight into a practice set");
    eprintln!("  --log <filter>   tracing filter, e.g. info or services=debug");
    eprintln!("  -h, --help       show this message");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PRACTICE_SET_ID, RUST_LOG");
}

impl Args {
    /// `--set` wins over `PRACTICE_SET_ID`; a non-empty `RUST_LOG` wins over `--log`.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_set: Option<String>,
        env_log: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            set_id: env_set.map(|raw| parse_set_id(&raw)).transpose()?,
            log_filter: None,
            help: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--set" => {
                    let value = require_value(args, "--set")?;
                    parsed.set_id = Some(parse_set_id(&value)?);
                }
                "--log" => {
                    let value = require_value(args, "--log")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidLogFilter { raw: value });
                    }
                    parsed.log_filter = Some(value);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if let Some(filter) = env_log.filter(|value| !value.trim().is_empty()) {
            parsed.log_filter = Some(filter);
        }
        Ok(parsed)
    }
}

fn parse_set_id(raw: &str) -> Result<SetId, ArgsError> {
    raw.parse::<SetId>().map_err(|_| ArgsError::InvalidSetId {
        raw: raw.to_string(),
    })
}

fn init_tracing(filter: Option<&str>) -> Result<(), ArgsError> {
    let raw = filter.unwrap_or(DEFAULT_LOG_FILTER);
    let env_filter = EnvFilter::try_new(raw).map_err(|_| ArgsError::InvalidLogFilter {
        raw: raw.to_string(),
    })?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(
        &mut argv,
        std::env::var("PRACTICE_SET_ID").ok(),
        std::env::var("RUST_LOG").ok(),
    )
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    if parsed.help {
        print_usage();
        return Ok(());
    }

    init_tracing(parsed.log_filter.as_deref())?;

    // The question bank is compiled in; a bad table or unknown --set stops startup here.
    let services = AppServices::embedded()?;
    if let Some(set_id) = parsed.set_id {
        services.catalog().require_set(set_id)?;
    }
    info!(initial_set = ?parsed.set_id, "starting practice app");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        initial_set: parsed.set_id,
        services,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("ScratchSSLT")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
