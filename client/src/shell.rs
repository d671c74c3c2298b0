//! Interactive shell
//!
//! Reads one command per line from stdin. Workflow commands run as spawned
//! tasks, so switching tabs while a request is in flight neither waits for
//! nor cancels it.

use std::path::PathBuf;
use std::str::FromStr;

use tokio::io::{AsyncBufReadExt, BufReader};

use shared::{BaggageStatus, Workflow, logging};

use crate::client_impl::WarehouseClient;
use crate::error::{ClientError, ClientResult};
use crate::render;
use crate::traits::WarehouseGateway;
use crate::types::ActiveView;

pub const HELP: &str = "\
Commands:
  tab <upload|eligibility|stats>   switch view (stats refreshes counts)
  select <path>                    choose a CSV file to upload
  upload                           upload and process the selected file
  name <passenger name>            set the passenger name
  flight <flight id>               set the flight ID
  baggage <Delivered|Lost|Damaged> set the baggage status
  date <YYYY-MM-DD>                set the flight date
  check                            check insurance eligibility
  refresh                          refresh statistics
  show                             render the active view
  ping                             check the service is reachable
  help                             show this help
  quit                             leave the shell";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Tab(ActiveView),
    Select(PathBuf),
    Upload,
    Name(String),
    Flight(String),
    Baggage(BaggageStatus),
    Date(String),
    Check,
    Refresh,
    Show,
    Ping,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = ClientError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let require = |what: &str| -> ClientResult<String> {
            if rest.is_empty() {
                Err(ClientError::invalid_command(format!("'{verb}' needs {what}")))
            } else {
                Ok(rest.to_string())
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "tab" => Ok(ShellCommand::Tab(require("a view name")?.parse()?)),
            "select" => Ok(ShellCommand::Select(PathBuf::from(require("a file path")?))),
            "upload" => Ok(ShellCommand::Upload),
            "name" => Ok(ShellCommand::Name(require("a passenger name")?)),
            "flight" => Ok(ShellCommand::Flight(require("a flight ID")?)),
            "baggage" => Ok(ShellCommand::Baggage(require("a baggage status")?.parse()?)),
            "date" => Ok(ShellCommand::Date(require("a date")?)),
            "check" => Ok(ShellCommand::Check),
            "refresh" => Ok(ShellCommand::Refresh),
            "show" => Ok(ShellCommand::Show),
            "ping" => Ok(ShellCommand::Ping),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            "" => Err(ClientError::invalid_command("empty line")),
            other => Err(ClientError::invalid_command(format!("unknown command '{other}'"))),
        }
    }
}

/// Run the shell until `quit` or end of input
pub async fn run_shell<G>(client: WarehouseClient<G>) -> ClientResult<()>
where
    G: WarehouseGateway + 'static,
{
    spawn_upload_narrator(&client);

    println!("{}", render::render_view(&client.view_model().await));
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(err) => {
                println!("⚠️ {err}");
                continue;
            }
        };

        if command == ShellCommand::Quit {
            break;
        }
        if let Err(err) = execute(&client, command).await {
            println!("⚠️ {err}");
        }
    }

    Ok(())
}

/// Print upload narration as it changes, whichever view is active
fn spawn_upload_narrator<G>(client: &WarehouseClient<G>)
where
    G: WarehouseGateway + 'static,
{
    let mut updates = client.subscribe_upload();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let status = updates.borrow_and_update().clone();
            println!("📤 {status}");
        }
    });
}

async fn execute<G>(client: &WarehouseClient<G>, command: ShellCommand) -> ClientResult<()>
where
    G: WarehouseGateway + 'static,
{
    match command {
        ShellCommand::Tab(view) => {
            let transition = client.switch_view(view).await;
            println!("{}", render::render_view(&client.view_model().await));
            for effect in transition.effects {
                let client = client.clone();
                tokio::spawn(async move {
                    client.perform(effect).await;
                    if client.active_view().await == ActiveView::Statistics {
                        println!("{}", render::render_statistics(client.statistics().await.as_ref()));
                    }
                });
            }
        }
        ShellCommand::Select(path) => {
            client.select_file_path(&path).await?;
            println!("Selected {}", path.display());
        }
        ShellCommand::Upload => {
            let client = client.clone();
            tokio::spawn(async move {
                // Progress is printed by the narrator
                if let Err(err) = client.submit_upload().await {
                    println!("⚠️ {err}");
                }
            });
        }
        ShellCommand::Name(name) => client.edit_form(|form| form.set_name(name)).await,
        ShellCommand::Flight(flight_id) => client.edit_form(|form| form.set_flight_id(flight_id)).await,
        ShellCommand::Baggage(baggage) => client.edit_form(|form| form.set_baggage(baggage)).await,
        ShellCommand::Date(date) => {
            let mut outcome = Ok(());
            client.edit_form(|form| outcome = form.set_date_str(&date)).await;
            outcome?;
        }
        ShellCommand::Check => {
            let client = client.clone();
            tokio::spawn(async move {
                match client.submit_query().await {
                    Ok(result) => print!("{}", render::render_eligibility_result(&result)),
                    Err(err) => println!("⚠️ {err}"),
                }
            });
        }
        ShellCommand::Refresh => {
            let client = client.clone();
            tokio::spawn(async move {
                let snapshot = client.refresh_statistics().await;
                print!("{}", render::render_statistics(snapshot.as_ref()));
            });
        }
        ShellCommand::Show => println!("{}", render::render_view(&client.view_model().await)),
        ShellCommand::Ping => match client.ping().await {
            Ok(health) => println!("🩺 {} ({})", health.message, health.status),
            Err(err) => logging::log_error(Workflow::View, "Health check", &err),
        },
        ShellCommand::Help => println!("{HELP}"),
        ShellCommand::Quit => {}
    }

    Ok(())
}
