use std::process::ExitCode;

#[cfg(feature = "alloc-profiler")]
#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

/// Exit status for fatal setup or report-persistence failures.
const FATAL_EXIT_CODE: u8 = 1;

fn main() -> ExitCode {
    match http_blaster::entry::run() {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(FATAL_EXIT_CODE)
        }
    }
}
