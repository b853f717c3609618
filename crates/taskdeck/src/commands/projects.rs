use clap::ArgMatches;
use tracing::{error, info};

use taskdeck_core::notify::TerminalNotifier;
use taskdeck_core::views::projects::LOADING_LABEL;
use taskdeck_core::{
    DraftField, HttpClient, LoadOutcome, ProjectsView, SubmitOutcome, TaskdeckError, events,
};

use super::helpers::{block_on, command_failed, load_config_with_warning, notifier_for};
use crate::render::{format_project_cards, with_loading};

type CliProjectsView = ProjectsView<HttpClient, TerminalNotifier>;

fn mount(matches: &ArgMatches) -> CliProjectsView {
    let config = load_config_with_warning(matches);
    ProjectsView::new(HttpClient::from_config(&config.api), notifier_for(&config))
}

fn print_projects(
    view: &CliProjectsView,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(view.projects())?);
    } else {
        print!("{}", format_project_cards(&view.cards()));
    }
    Ok(())
}

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.projects.list_started", json_output = json_output);

    let mut view = mount(matches);
    let outcome = block_on(with_loading(LOADING_LABEL, !json_output, view.load()))?;

    print_projects(&view, json_output)?;

    match outcome {
        LoadOutcome::Loaded(count) => {
            info!(event = "cli.projects.list_completed", count = count);
            Ok(())
        }
        LoadOutcome::Failed => {
            error!(event = "cli.projects.list_failed");
            Err(command_failed("projects list failed"))
        }
    }
}

pub(crate) fn handle_create_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("name")
        .ok_or("Name argument is required")?;
    let description = matches
        .get_one::<String>("description")
        .map(String::as_str)
        .unwrap_or("");
    let status = matches
        .get_one::<String>("status")
        .map(String::as_str)
        .unwrap_or("active");
    let json_output = matches.get_flag("json");

    info!(
        event = "cli.projects.create_started",
        name = name.as_str(),
        status = status
    );

    let mut view = mount(matches);
    view.open_create();
    fill_field(&mut view, DraftField::Name, name)?;
    fill_field(&mut view, DraftField::Description, description)?;
    fill_field(&mut view, DraftField::Status, status)?;

    match block_on(view.submit())? {
        SubmitOutcome::Created { reload } => {
            print_projects(&view, json_output)?;
            info!(event = "cli.projects.create_completed", name = name.as_str());
            match reload {
                LoadOutcome::Loaded(_) => Ok(()),
                LoadOutcome::Failed => Err(command_failed(
                    "project created but projects list failed",
                )),
            }
        }
        SubmitOutcome::Failed => {
            error!(event = "cli.projects.create_failed", name = name.as_str());
            Err(command_failed("project create failed"))
        }
        SubmitOutcome::MissingName => {
            eprintln!("❌ Project name is required");
            Err(command_failed("project name is required"))
        }
    }
}

fn fill_field(
    view: &mut CliProjectsView,
    field: DraftField,
    value: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    view.update_field(field, value).map_err(|e| {
        eprintln!("❌ {}", e);
        error!(
            event = "cli.projects.draft_rejected",
            error = %e,
            error_code = e.error_code()
        );
        events::log_app_error(&e);
        e.into()
    })
}
