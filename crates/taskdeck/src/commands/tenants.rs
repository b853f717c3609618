use clap::ArgMatches;
use tracing::{error, info};

use taskdeck_core::views::tenants::{LOADING_LABEL, TITLE};
use taskdeck_core::{HttpClient, LoadOutcome, TenantsView};

use super::helpers::{block_on, command_failed, load_config_with_warning, notifier_for};
use crate::render::with_loading;
use crate::table::TableFormatter;

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.tenants.list_started", json_output = json_output);

    let config = load_config_with_warning(matches);
    let mut view = TenantsView::new(
        HttpClient::from_config(&config.api),
        notifier_for(&config),
        &config.tenants,
    );

    let outcome = block_on(with_loading(LOADING_LABEL, !json_output, view.load()))?;

    let rows = view.rows();
    if json_output {
        #[derive(serde::Serialize)]
        struct TenantJson<'a> {
            #[serde(flatten)]
            tenant: &'a taskdeck_core::Tenant,
            login_url: &'a str,
        }

        let enriched: Vec<TenantJson<'_>> = view
            .tenants()
            .iter()
            .zip(rows.iter())
            .map(|(tenant, row)| TenantJson {
                tenant,
                login_url: &row.login_url,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&enriched)?);
    } else if rows.is_empty() {
        println!("{}", TITLE);
        println!("No tenants found.");
    } else {
        println!("{}", TITLE);
        println!("{}", TableFormatter::new(&rows).format_table(&rows));
    }

    match outcome {
        LoadOutcome::Loaded(count) => {
            info!(event = "cli.tenants.list_completed", count = count);
            Ok(())
        }
        LoadOutcome::Failed => {
            error!(event = "cli.tenants.list_failed");
            Err(command_failed("tenants list failed"))
        }
    }
}
