use atlas_core::{CommandContext, GlobalOptions};
use clap::Parser;
use color_eyre::{eyre::eyre, Result};
use tracing_subscriber::EnvFilter;

mod cli;
mod dispatch;
mod output;
mod style;

use cli::AtlasCli;
use dispatch::dispatch_command;
use output::{emit_output, OutputOptions};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = AtlasCli::parse();
    let global = GlobalOptions {
        quiet: cli.quiet,
        verbose: cli.verbose,
        trace: cli.trace,
        no_color: cli.no_color,
    };
    init_tracing(&global);

    let ctx = CommandContext::new(&global).map_err(|err| eyre!("{err:?}"))?;
    let opts = OutputOptions::from(ctx.global);

    let outcome = dispatch_command(&ctx, &opts, &cli.command);
    let code = emit_output(&opts, &outcome);

    if code == 0 {
        Ok(())
    } else {
        std::process::exit(code);
    }
}

fn init_tracing(global: &GlobalOptions) {
    let level = log_level(global);

    // Logs go to stderr; stdout belongs to the notices and to pytest.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("atlas_prep={level},atlas_core={level}")));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!global.no_color && atty::is(atty::Stream::Stderr))
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn log_level(global: &GlobalOptions) -> &'static str {
    if global.trace {
        return "trace";
    }
    match global.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}
