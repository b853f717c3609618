use clap::{Arg, ArgAction, Command, value_parser};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("taskdeck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("List and create projects, browse registered tenants")
        .long_about("taskdeck talks to a multi-tenant project-management API. It lists and creates projects in your organization and, for super admins, lists every registered tenant with its login link.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("API base URL (overrides config and TASKDECK_API_URL)")
                .global(true),
        )
        .arg(
            Arg::new("token")
                .long("token")
                .help("Bearer token for API requests (overrides config and TASKDECK_TOKEN)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("projects")
                .about("Work with projects")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("list")
                        .about("List projects")
                        .arg(json_arg()),
                )
                .subcommand(
                    Command::new("create")
                        .about("Create a project, then list projects again")
                        .arg(
                            Arg::new("name")
                                .long("name")
                                .short('n')
                                .help("Project name")
                                .required(true),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .short('d')
                                .help("Project description")
                                .default_value(""),
                        )
                        .arg(
                            Arg::new("status")
                                .long("status")
                                .short('s')
                                .help("Initial status")
                                .value_parser(["active", "completed", "archived"])
                                .default_value("active"),
                        )
                        .arg(json_arg()),
                ),
        )
        .subcommand(
            Command::new("tenants")
                .about("Work with tenants (super admin only)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("list")
                        .about("List registered organizations")
                        .arg(json_arg()),
                ),
        )
        .subcommand(Command::new("config").about("Print the effective configuration"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(value_parser!(Shell)),
                ),
        )
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}
