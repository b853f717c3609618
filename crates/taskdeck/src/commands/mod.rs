use clap::ArgMatches;
use tracing::error;

use taskdeck_core::events;

pub mod helpers;

mod completions;
mod config;
mod projects;
mod tenants;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("projects", sub_matches)) => match sub_matches.subcommand() {
            Some(("list", list_matches)) => projects::handle_list_command(list_matches),
            Some(("create", create_matches)) => projects::handle_create_command(create_matches),
            _ => unknown_command(),
        },
        Some(("tenants", sub_matches)) => match sub_matches.subcommand() {
            Some(("list", list_matches)) => tenants::handle_list_command(list_matches),
            _ => unknown_command(),
        },
        Some(("config", sub_matches)) => config::handle_config_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => unknown_command(),
    }
}

fn unknown_command() -> Result<(), Box<dyn std::error::Error>> {
    error!(event = "cli.command_unknown");
    Err("Unknown command".into())
}
