//! Process bootstrap shared by the hub-orders binaries.
//!
//! Services hand [`run`] their [`clap::Args`] type and a body closure; the
//! launcher parses flags, installs logging, builds the Tokio runtime, and
//! exits with status 1 if the body fails.

pub use anyhow;
pub use clap;
pub use tokio;
pub use tracing;

pub mod prelude {
    pub use std::time::Duration;

    pub use anyhow::{anyhow, Context, Result};
    pub use clap::Parser;
    pub use tracing::{debug, error, info, warn};
}

use prelude::*;
use tokio::runtime::{self, Runtime};
use tracing_subscriber::EnvFilter;

/// Static description of a service entrypoint
#[derive(Debug, Clone, Copy)]
pub struct StartConfig {
    pub service_name: &'static str,
}

/// Flags every service accepts in addition to its own
#[derive(Debug, clap::Args)]
pub struct CommonArgs {
    /// Log directive, e.g. `info` or `hub_orders=debug,sea_orm=warn`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

#[derive(Debug, Parser)]
struct Opts<A: clap::Args> {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    args: A,
}

/// Process-scoped resources handed to the service body
pub struct Common {
    pub rt: Runtime,
}

/// Parse arguments, install logging and run `f` on a fresh runtime.
///
/// Never returns an error: a failing body is logged and the process exits
/// with status 1.
pub fn run<A: clap::Args>(config: StartConfig, f: impl FnOnce(Common, A) -> Result<()>) {
    let Opts { common, args } = Opts::<A>::parse();

    if let Err(e) = init_tracing(&common.log_filter) {
        eprintln!("{e:?}");
        std::process::exit(1);
    }

    if let Err(e) = build_runtime(config).and_then(|rt| f(Common { rt }, args)) {
        error!("{e:?}");
        std::process::exit(1);
    }
}

fn init_tracing(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).context("invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("failed to install tracing subscriber")
}

fn build_runtime(config: StartConfig) -> Result<Runtime> {
    let rt = runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name(config.service_name)
        .build()
        .context("failed to build tokio runtime")?;

    info!(service = config.service_name, "starting");

    Ok(rt)
}
