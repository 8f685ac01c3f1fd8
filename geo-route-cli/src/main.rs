//! A command line interface to geo route optimizer.

mod commands;

mod cli {
    use super::commands::create_write_buffer;
    use super::commands::optimize::{get_optimize_app, run_optimize};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Geo Route Optimizer")
            .version(env!("CARGO_PKG_VERSION"))
            .author("Ilya Builuk <ilya.builuk@gmail.com>")
            .about("A command line interface to order geographic waypoints into a short route")
            .subcommand(get_optimize_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("optimize", optimize_matches)) => run_optimize(optimize_matches, create_write_buffer),
            _ => Err("no subcommand was used. Use -h to print help information.".into()),
        } {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn main() {
    let matches = cli::get_app().get_matches();

    cli::run_subcommand(matches);
}
