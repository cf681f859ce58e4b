use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use gauntlet_core::runner;
use gauntlet_core::script::ProcessExecutor;
use gauntlet_core::settings::manager::DEFAULT_SETTINGS_FILE;
use gauntlet_core::settings::SettingsManager;
use gauntlet_core::suite::build_plan;

#[derive(Parser, Debug)]
#[command(name = "gauntlet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Test-suite entry point: discovers test modules and runs the entry scripts")]
struct Args {
    /// Test name filters; explicit names bypass discovery and the omit set
    filters: Vec<String>,

    /// Settings file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,

    /// Override the configured tests directory
    #[arg(long, value_name = "PATH")]
    tests_dir: Option<PathBuf>,

    /// Print the resolved suite plan without running any entry script
    #[arg(long)]
    list: bool,

    /// With --list, emit the plan as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    setup_tracing()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let code = runtime.block_on(run_app())?;
    std::process::exit(code)
}

async fn run_app() -> Result<i32> {
    let args = Args::parse();

    info!(
        "CLI startup: config={:?}, filters={:?}, list={}",
        args.config, args.filters, args.list
    );

    let manager = SettingsManager::from_path(args.config)?;
    if let Some(tests_dir) = args.tests_dir {
        manager.update_setting(|settings| settings.tests_dir = tests_dir);
    }
    let settings = manager.settings();

    if args.list {
        let plan = build_plan(&settings, &args.filters)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else {
            for name in &plan.names {
                println!("{name}");
            }
        }
        return Ok(0);
    }

    let executor = ProcessExecutor::new(&settings.interpreter)?;
    let report = runner::run(&settings, &args.filters, &executor).await?;
    Ok(report.exit_code())
}

fn setup_tracing() -> Result<()> {
    use tracing_subscriber::fmt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .init();

    Ok(())
}
