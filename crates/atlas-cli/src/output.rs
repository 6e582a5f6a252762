use atlas_core::{CommandStatus, ConfigProbe, ExecutionOutcome, GlobalOptions, ProcessPlan};
use atty::Stream;

use crate::style::Style;

#[derive(Clone, Copy, Debug)]
pub struct OutputOptions {
    pub quiet: bool,
    pub no_color: bool,
}

impl From<&GlobalOptions> for OutputOptions {
    fn from(global: &GlobalOptions) -> Self {
        Self {
            quiet: global.quiet,
            no_color: global.no_color,
        }
    }
}

/// Progress notices shown before pytest takes over the terminal.
pub fn plan_notices(style: &Style, plan: &ProcessPlan) -> Vec<String> {
    let request = &plan.request;
    let mut lines = vec![
        style.info(&format!(
            "▸ Preprocessing tests for {} ({})",
            request.environment, request.region
        )),
        style.info(&format!("▸ Markers: {}", request.markers)),
    ];
    lines.push(match &plan.config {
        ConfigProbe::Found(path) => style.success(&format!("✔ Loaded config: {}", path.display())),
        ConfigProbe::Missing(path) => style.warning(&format!(
            "⚠ Config not found: {} (using defaults)",
            path.display()
        )),
    });
    if !request.dry_run {
        let command = style.command(&plan.invocation.command_line());
        lines.push(format!("{} {command}", style.info("▸ Running:")));
    }
    lines
}

pub fn announce_plan(opts: &OutputOptions, plan: &ProcessPlan) {
    if opts.quiet {
        return;
    }
    let style = Style::new(opts.no_color, atty::is(Stream::Stdout));
    for line in plan_notices(&style, plan) {
        println!("{line}");
    }
}

/// Renders the final outcome and returns the process exit code.
pub fn emit_output(opts: &OutputOptions, outcome: &ExecutionOutcome) -> i32 {
    let code = outcome.exit_code();
    if outcome.is_passthrough() {
        tracing::debug!(code, message = %outcome.message, "runner output already rendered");
        return code;
    }

    if let CommandStatus::Ok = outcome.status {
        if !opts.quiet {
            let style = Style::new(opts.no_color, atty::is(Stream::Stdout));
            println!("{}", style.status(outcome.status, &outcome.message));
        }
    } else {
        let style = Style::new(opts.no_color, atty::is(Stream::Stderr));
        eprintln!("{}", style.status(outcome.status, &outcome.message));
        if let Some(error) = outcome.detail_str("error") {
            eprintln!("  {error}");
        }
        if let Some(hint) = outcome.detail_str("hint") {
            eprintln!("{}", style.hint(hint));
        }
    }
    code
}
