use sitekit_cli::CargoBuilder;

fn main() {
    let code = {
        // Dropped before exit so buffered log lines are flushed.
        let _guard = sitekit_core::logging::init_logging("sitebuild", true);
        sitekit_cli::run(&CargoBuilder::default(), std::env::args_os())
    };
    std::process::exit(code);
}
