//! policy-templater's entry point.
//! Parses arguments, runs the substitution and reports the result.

use policy_templater::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    outputs::report_success,
    runner::run,
};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = execute(&args) {
        default_error_handler(err);
    }
}

fn execute(args: &Args) -> Result<()> {
    let inputs = args.inputs()?;
    let summary = run(&inputs)?;
    report_success(&summary, args.github_output.as_deref())
}
