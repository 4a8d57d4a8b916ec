use std::fmt;
use std::sync::Arc;

use api::{ApiConfig, HttpApi};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AuthService, BadgeService, CatalogService, ConfirmService, ProgressService, ToastService,
};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api value: {raw}"),
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
    auth: Arc<AuthService>,
    toasts: Arc<ToastService>,
    confirms: Arc<ConfirmService>,
    progress: Arc<ProgressService>,
    catalog: Arc<CatalogService>,
    badges: Arc<BadgeService>,
}

impl UiApp for DesktopApp {
    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    fn toasts(&self) -> Arc<ToastService> {
        Arc::clone(&self.toasts)
    }

    fn confirms(&self) -> Arc<ConfirmService> {
        Arc::clone(&self.confirms)
    }

    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    fn badges(&self) -> Arc<BadgeService> {
        Arc::clone(&self.badges)
    }
}

struct Args {
    api: ApiConfig,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api <base_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api http://localhost:8080/api");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  AULA_API_URL");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api = ApiConfig::from_env();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api" => {
                    let value = require_value(args, "--api")?;
                    if value.trim().is_empty() || !value.starts_with("http") {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    api = ApiConfig::new(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { api })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let backend = Arc::new(HttpApi::new(&parsed.api));

    let auth = Arc::new(AuthService::new(backend.clone()));
    let toasts = ToastService::new();
    let confirms = Arc::new(ConfirmService::new());
    let progress = Arc::new(ProgressService::new(backend.clone()));
    let catalog = Arc::new(CatalogService::new(backend.clone(), backend.clone()));
    let badges = Arc::new(BadgeService::new(backend));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        auth,
        toasts,
        confirms,
        progress,
        catalog,
        badges,
    });
    let context = build_app_context(&app);

    // Always-on-top must stay off: tao has been seen defaulting it on under
    // some macOS dev setups, which makes the window act like a modal.
    let desktop_cfg = DesktopConfig::new()
        .with_window(WindowBuilder::new().with_title("Aula").with_always_on_top(false));

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
