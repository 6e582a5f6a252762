use atlas_core::{
    execute_plan, prepare_plan, CommandContext, ExecutionOutcome, HostCommandRunner,
    ProcessRequest,
};

use crate::cli::{CommandGroupCli, ProcessArgs};
use crate::output::{announce_plan, OutputOptions};

pub fn dispatch_command(
    ctx: &CommandContext,
    opts: &OutputOptions,
    group: &CommandGroupCli,
) -> ExecutionOutcome {
    match group {
        CommandGroupCli::Process(args) => {
            let request = process_request_from_args(args);
            let plan = match prepare_plan(ctx, request) {
                Ok(plan) => plan,
                Err(outcome) => return outcome,
            };
            announce_plan(opts, &plan);
            execute_plan(&HostCommandRunner, &plan)
        }
    }
}

fn process_request_from_args(args: &ProcessArgs) -> ProcessRequest {
    ProcessRequest {
        environment: args.environment.clone(),
        region: args.region.clone(),
        markers: args.markers.clone(),
        extra_args: args.args.clone(),
        dry_run: args.dry_run,
    }
}
