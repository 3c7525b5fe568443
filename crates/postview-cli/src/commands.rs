use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level, cli.log_file.as_deref(), cli.is_interactive())?;

    let ctx = ExecutionContext::new(&cli)?;

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => handlers::browse::handle(&ctx),

        Commands::List { limit } => handlers::list::handle(&ctx, limit),

        Commands::Show { id } => handlers::show::handle(&ctx, id),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
        },
    }
}
