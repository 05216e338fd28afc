use clap::Parser;
use scoopbook::adapter::inbound::cli::app;
use scoopbook::adapter::inbound::cli::command::Cli;
use scoopbook::adapter::inbound::cli::output::{self, OutputConfig};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));
    output::set_color_override(cli.color.forced());

    if let Err(err) = app::run(&cli) {
        app::report_error(&cli, &err);
        std::process::exit(1);
    }
}
