use credit_calculator::{calculate, report, resolve, CreditError};
use log::{info, warn};
use simple_logger::SimpleLogger;
use std::process::ExitCode;

const MIN_ARGS: usize = 4;

fn run(args: &[String]) -> Result<String, CreditError> {
    if args.len() < MIN_ARGS {
        return Err(CreditError::invalid(format!(
            "expected at least {} arguments, got {}",
            MIN_ARGS,
            args.len()
        )));
    }
    let credit = resolve(args)?;
    info!("calculating {:?}", credit.plan);
    let result = calculate(&credit)?;
    Ok(result.to_string())
}

/// Text to print and the exit status for one invocation.
fn render(args: &[String]) -> (String, ExitCode) {
    match run(args) {
        Ok(output) => (output, ExitCode::SUCCESS),
        Err(e) => {
            warn!("{}", e.reason());
            (format!("{}\n{}", e, report::USAGE), ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()
    {
        eprintln!("logger unavailable: {}", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (output, code) = render(&args);
    println!("{}", output);
    code
}
