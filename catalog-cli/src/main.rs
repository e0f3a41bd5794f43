mod command;
mod config;
mod demo;
mod paths;
mod render;
mod session;

use std::fs::File;
use std::process::ExitCode;

use catalog_lib::source::HttpRecordSource;
use catalog_lib::source::RecordSource;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::Command;
use crate::config::CliConfig;
use crate::session::{Reply, Session};

/// Sends log output to the cache directory, or the working directory if
/// there is none.
fn init_logging(level: LevelFilter) {
    paths::rotate_logs();
    let path = paths::log_file()
        .filter(|path| path.parent().is_some_and(|dir| std::fs::create_dir_all(dir).is_ok()))
        .unwrap_or_else(|| "catalog.log".into());

    match File::create(&path) {
        Ok(log_file) => {
            if WriteLogger::init(level, Config::default(), log_file).is_err() {
                eprintln!("Logger already initialized");
            }
        }
        Err(e) => eprintln!("Logging disabled: cannot create {}: {}", path.display(), e),
    }
}

fn open_source(config: &CliConfig) -> Result<Box<dyn RecordSource>, catalog_lib::error::Error> {
    match config.source_config() {
        Some(source_config) => {
            info!("Browsing remote catalog at {}", source_config.base_url);
            Ok(Box::new(HttpRecordSource::new(source_config)?))
        }
        None => {
            info!("Browsing demo catalog");
            Ok(Box::new(demo::catalog(config.page_size)))
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    init_logging(config.log_level);

    let source = match open_source(&config) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let mut session = Session::new(source);
    println!("{}", session.go_to(1).await);
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        };

        match line.parse::<Command>() {
            Ok(command) => match session.execute(command).await {
                Reply::Output(text) => println!("{}", text),
                Reply::Quit => break,
            },
            Err(e) => eprintln!("{}", e),
        }
    }

    info!("Exiting with {}", session.table().selected_label());
    ExitCode::SUCCESS
}
