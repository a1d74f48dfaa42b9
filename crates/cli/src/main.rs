use std::process::ExitCode;

use bmi_cli::{Cli, CliError, Config, logging};

fn main() -> ExitCode {
    let cli = Cli::parse_checked();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => return fail(&CliError::from(error)),
    };
    logging::init(&config, cli.verbose);

    match bmi_cli::run(&cli, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => fail(&error),
    }
}

fn fail(error: &CliError) -> ExitCode {
    eprintln!("{error}");
    ExitCode::from(error.exit_code())
}
