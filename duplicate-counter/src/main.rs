mod report;
mod util;

use contact_tools::dto::CounterConfig;
use contact_tools::error::ToolError;
use contact_tools::exit::make_exit_code;
use contact_tools::util::init_tracing;
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;

fn main() -> ExitCode {
    init_tracing();
    make_exit_code(count(CounterConfig::default()))
}

fn count(config: CounterConfig) -> Result<(), ToolError> {
    let start = Instant::now();
    let numbers = util::pull_numbers(&config.input)?;
    info!(
        path = %config.input.display(),
        lines = numbers.len(),
        "File read in {:.4} secs",
        start.elapsed().as_secs_f64()
    );
    let start = Instant::now();
    let report = report::DuplicateReport::new(&numbers);
    info!(
        duplicates = report.duplicates.len(),
        "Counted in {:.4} secs",
        start.elapsed().as_secs_f64()
    );
    print!("{}", report);
    Ok(())
}
