use clap::Parser;

use hopstat::exit_codes::ExitCode;
use hopstat::summarize::{app, cli::Cli};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(v) => v,
        Err(err) => {
            let _ = err.print();
            std::process::exit(ExitCode::from_clap_error(&err).as_i32());
        }
    };

    hopstat::logging::init();

    let code = match app::run(cli) {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::RuntimeError
        }
    };

    std::process::exit(code.as_i32());
}
