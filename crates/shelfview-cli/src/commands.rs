use super::args::{Cli, Commands};
use super::handlers;
use crate::config;
use crate::context::ExecutionContext;
use crate::logging::{self, LogDestination};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        config,
        api_url,
        from_file,
        log_level,
        command,
    } = cli;
    let command = command.unwrap_or(Commands::Browse);

    let destination = match command {
        Commands::Browse => LogDestination::File(config::data_dir().join("shelfview.log")),
        _ => LogDestination::Stderr,
    };
    logging::init(log_level, destination)?;

    let open_context = || ExecutionContext::new(config.as_deref(), api_url, from_file);

    match command {
        Commands::Browse => handlers::browse::handle(open_context()?),

        Commands::List {
            search,
            sort,
            desc,
            page,
            page_size,
            format,
        } => handlers::list::handle(
            &open_context()?,
            handlers::list::ListRequest {
                search,
                sort: sort.map(Into::into),
                descending: desc,
                page,
                page_size,
                format,
            },
        ),

        // no context: init must work even when the existing file does not parse
        Commands::Init { force } => {
            let path = config::resolve_config_path(config.as_deref())?;
            handlers::init::handle(&path, force)
        }
    }
}
