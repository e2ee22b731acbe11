use std::process::ExitCode;

use clap::Parser;
use crossterm::style::Stylize;

use train_tickets::api::TicketClient;
use train_tickets::cli::Cli;
use train_tickets::logging;
use train_tickets::query::{QueryError, QueryPlan, fetch_trains};
use train_tickets::render::render_trains;
use train_tickets::stations::StationDirectory;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli).await {
        Ok(table) => {
            print!("{table}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Query failed");
            if cli.no_color {
                eprintln!("发生错误: {e}");
            } else {
                eprintln!("{}: {e}", "发生错误".dark_red());
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<String, QueryError> {
    let stations = match &cli.stations {
        Some(path) => StationDirectory::load(path)?,
        None => StationDirectory::builtin(),
    };

    let plan = QueryPlan::resolve(
        &stations,
        &cli.from,
        &cli.to,
        &cli.date,
        cli.category_filter(),
        cli.display_mode(),
    )?;

    let client = TicketClient::new(cli.client_config())?;
    let trains = fetch_trains(&client, &plan, &cli.enrich_config()).await?;

    Ok(render_trains(&trains, &cli.render_config()))
}
