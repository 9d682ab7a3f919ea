use std::process;
use log::error;

use splyt::commands::{cli, CommandFactory, SplytCommandFactory};
use splyt::utils::Logger;
use splyt::{SplitConfig, SplitError, Splyt};

fn main() {
    let matches = cli().get_matches();

    let log_file = matches.get_one::<String>("log-file").map(String::as_str);
    if let Err(e) = Logger::init_global_logger(log_file, matches.get_flag("verbose")) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let config = match matches.get_one::<String>("config") {
        Some(path) => SplitConfig::from_file(path),
        None => Ok(SplitConfig::default()),
    };
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let splyt = Splyt::new(config);
    let factory = SplytCommandFactory::new(&splyt);

    let command_result = factory.create_command(&matches);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                process::exit(1);
            }
        }
        Err(e @ SplitError::Usage(_)) => {
            let _ = cli().print_help();
            eprintln!();
            error!("{}", e);
            process::exit(1);
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            process::exit(1);
        }
    };
}
