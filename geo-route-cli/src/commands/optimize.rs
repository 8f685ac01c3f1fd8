#[cfg(test)]
#[path = "../../tests/unit/commands/optimize_test.rs"]
mod optimize_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use geo_route_cli::extensions::optimize::config::read_config;
use geo_route_cli::extensions::optimize::formats::{read_request, write_result};
use geo_route_cli::extensions::optimize::optimize_request;
use geo_route_core::prelude::*;
use geo_route_core::utils::Timer;
use std::io::BufReader;
use std::sync::Arc;

const REQUEST_ARG_NAME: &str = "REQUEST";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const MAX_ITERATIONS_ARG_NAME: &str = "max-iterations";
const OPEN_PATH_ARG_NAME: &str = "open-path";
const LOG_ARG_NAME: &str = "log";

pub fn get_optimize_app() -> Command {
    Command::new("optimize")
        .about("Orders waypoints into a short route which begins at the start point")
        .arg(Arg::new(REQUEST_ARG_NAME).help("Sets the routing request file to use").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to optimizer configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_ITERATIONS_ARG_NAME)
                .help("Specifies maximum amount of improvements made by each local search phase")
                .short('n')
                .long(MAX_ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OPEN_PATH_ARG_NAME)
                .help("Specifies how the closed tour is opened at the start point")
                .long(OPEN_PATH_ARG_NAME)
                .value_parser(["fixed-start", "drop-longest-edge"])
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
}

/// Runs route optimization command.
pub fn run_optimize(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), GenericError> {
    let timer = Timer::start();

    // required
    let request_path =
        matches.get_one::<String>(REQUEST_ARG_NAME).ok_or_else(|| GenericError::from("no request file specified"))?;
    let request = read_request(BufReader::new(open_file(request_path, "request")?))?;

    // optional
    let config = get_config(matches)?;
    let environment = Arc::new(if matches.get_flag(LOG_ARG_NAME) {
        Environment::new_with_stderr_logger()
    } else {
        Environment::default()
    });
    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_result = out_result.transpose()?;

    let result = optimize_request(&request, config, environment.clone())?;

    write_result(out_writer_func(out_result), &result)?;

    (environment.logger)(
        format!(
            "route of {} points with total distance {} is written in {}ms",
            result.route.len(),
            result.total_distance_text,
            timer.elapsed_millis()
        )
        .as_str(),
    );

    Ok(())
}

/// Reads config from file, if specified, and overrides it with command line arguments.
fn get_config(matches: &ArgMatches) -> Result<OptimizerConfig, GenericError> {
    let mut config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => OptimizerConfig::default(),
    };

    if let Some(max_iterations) = parse_int_value::<usize>(matches, MAX_ITERATIONS_ARG_NAME, "max iterations")? {
        config.max_iterations = max_iterations;
    }

    if let Some(open_path) = matches.get_one::<String>(OPEN_PATH_ARG_NAME) {
        config.open_path = open_path.parse::<OpenPathPolicy>()?;
    }

    Ok(config)
}
