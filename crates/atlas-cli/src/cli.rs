use clap::{ArgAction, Args, Parser, Subcommand};

use atlas_core::DEFAULT_MARKERS;

#[derive(Parser, Debug)]
#[command(
    name = "atlas-prep",
    author,
    version,
    about = "Pytest preprocessor for environment-specific test execution.",
    long_about = "Publishes the target environment, region, and markers to pytest, checks for \
                  config/<environment>.yaml, then runs pytest and exits with its status.",
    after_help = "Examples:\n  atlas-prep process -e qa -r auto\n  atlas-prep process -e prod -r use1 -m smoke\n  TEST_OPEN_ALLURE=true atlas-prep process -e qa -r auto -- -k login\n",
    disable_help_subcommand = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct AtlasCli {
    #[arg(
        short,
        long,
        help = "Suppress progress notices (errors still print to stderr)",
        global = true
    )]
    pub quiet: bool,
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase logging (-vv reaches trace)",
        global = true
    )]
    pub verbose: u8,
    #[arg(long, help = "Force trace logging regardless of -v", global = true)]
    pub trace: bool,
    #[arg(long, help = "Disable colored human output", global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: CommandGroupCli,
}

#[derive(Subcommand, Debug)]
pub enum CommandGroupCli {
    #[command(
        about = "Process and run pytest with environment-specific configuration.",
        override_usage = "atlas-prep process -e <ENV> -r <REGION> [-m <MARKERS>] [--dry-run] [-- <PYTEST_ARG>...]",
        after_help = "Examples:\n  atlas-prep process -e qa -r auto -m bdd\n  atlas-prep process -e fastly -r usw2 --dry-run\n"
    )]
    Process(ProcessArgs),
}

#[derive(Args, Debug)]
pub struct ProcessArgs {
    #[arg(
        short,
        long,
        value_name = "ENV",
        help = "Target environment (qa, fastly, prod)"
    )]
    pub environment: String,
    #[arg(
        short,
        long,
        value_name = "REGION",
        help = "Target region (auto, use1, usw2, etc.)"
    )]
    pub region: String,
    #[arg(
        short,
        long,
        value_name = "MARKERS",
        default_value = DEFAULT_MARKERS,
        help = "Pytest markers to run"
    )]
    pub markers: String,
    #[arg(long, help = "Print the pytest command without running it")]
    pub dry_run: bool,
    #[arg(last = true, value_name = "PYTEST_ARG")]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        AtlasCli::command().debug_assert();
    }

    #[test]
    fn markers_default_to_bdd() {
        let cli = AtlasCli::try_parse_from(["atlas-prep", "process", "-e", "qa", "-r", "auto"])
            .expect("parse");
        let CommandGroupCli::Process(args) = cli.command;
        assert_eq!(args.environment, "qa");
        assert_eq!(args.region, "auto");
        assert_eq!(args.markers, "bdd");
        assert!(args.args.is_empty());
        assert!(!args.dry_run);
    }

    #[test]
    fn long_flags_and_trailing_pytest_args_parse() {
        let cli = AtlasCli::try_parse_from([
            "atlas-prep",
            "-vv",
            "process",
            "--environment",
            "prod",
            "--region",
            "use1",
            "--markers",
            "smoke and not slow",
            "--",
            "-k",
            "login",
        ])
        .expect("parse");
        assert_eq!(cli.verbose, 2);
        let CommandGroupCli::Process(args) = cli.command;
        assert_eq!(args.markers, "smoke and not slow");
        assert_eq!(args.args, vec!["-k", "login"]);
    }

    #[test]
    fn missing_required_flags_is_a_usage_error() {
        let err = AtlasCli::try_parse_from(["atlas-prep", "process", "-e", "qa"])
            .expect_err("region is required");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }
}
