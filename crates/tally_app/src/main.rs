mod logging;
mod report;

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use tally_engine::{process_file, CountError};
use tally_logging::{tally_error, tally_info};

fn main() -> ExitCode {
    logging::initialize(logging::LogDestination::File);

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("Usage: tally_app <text-file> [<text-file>...]");
        return ExitCode::from(1);
    }

    for path_arg in &paths {
        let path = Path::new(path_arg);
        tally_info!("Processing {:?}", path);

        let started = Instant::now();
        match process_file(path) {
            Ok(snapshot) => {
                report::print_tally(path, &snapshot, started.elapsed());
            }
            Err(err) => {
                // The first failure stops the batch; later files are skipped.
                tally_error!("Failed processing {:?}: {}", path, err);
                eprintln!("{err}");
                return ExitCode::from(exit_code(&err));
            }
        }
    }

    ExitCode::SUCCESS
}

/// Exit codes kept from the reference: 2 file not found, 5 access denied,
/// 31 general processing failure.
fn exit_code(err: &CountError) -> u8 {
    match err {
        CountError::NotFound(_) => 2,
        CountError::AccessDenied(_) => 5,
        CountError::Io(_) => 31,
    }
}
