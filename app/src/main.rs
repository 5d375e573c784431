//! srsconv CLI shim.

use clap::error::ErrorKind;
use clap::Parser;

fn main() {
    app::tracing_init::init_tracing_once();

    let args = match app::cli::convert::ConvertArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Malformed invocations exit 1; --help/--version stay 0.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = app::cli::convert::run(args) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
