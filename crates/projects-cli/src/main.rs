//! projects - REST API command-line client
//!
//! # Examples
//!
//! ```bash
//! # List all projects
//! projects list --pretty
//!
//! # Create a project
//! projects create --name "Phoenix" --description "Billing rebuild" \
//!     --skills Rust,SQL --members 3
//!
//! # Search by name or description
//! projects search billing
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use projects_cli::{CliClientResult, Client, ClientError};
use projects_core::ProjectDraft;

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let server_url = cli.server.unwrap_or_else(default_server_url);
    let client = Client::new(&server_url);

    let result: CliClientResult<Value> = match cli.command {
        Commands::List => to_value(client.list_projects().await),
        Commands::Get { id } => to_value(client.get_project(&id).await),
        Commands::Create {
            name,
            description,
            skills,
            members,
            inactive,
        } => {
            let draft = ProjectDraft {
                project_name: Some(name),
                project_description: Some(description),
                skill_set: Some(skills),
                no_of_members: Some(members),
                is_active: Some(!inactive),
            };
            to_value(client.create_project(&draft).await)
        }
        Commands::Update {
            id,
            name,
            description,
            skills,
            members,
            active,
        } => {
            let draft = ProjectDraft {
                project_name: name,
                project_description: description,
                skill_set: skills,
                no_of_members: members,
                is_active: active,
            };
            to_value(client.update_project(&id, &draft).await)
        }
        Commands::Delete { id } => to_value(client.delete_project(&id).await),
        Commands::Search { query } => to_value(client.search_projects(&query).await),
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(ClientError::Unreachable { message, .. }) => {
            eprintln!("Error: could not reach the server at {}.", server_url);
            eprintln!();
            eprintln!("  {}", message);
            eprintln!();
            eprintln!("Start the server first:");
            eprintln!("  cargo run -p projects-server");
            eprintln!();
            eprintln!("Or specify a server URL explicitly:");
            eprintln!("  projects --server http://127.0.0.1:3000 <command>");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn to_value<T: Serialize>(result: CliClientResult<T>) -> CliClientResult<Value> {
    let value = serde_json::to_value(result?)?;
    Ok(value)
}

/// The server's well-known local address when no --server flag is given
fn default_server_url() -> String {
    format!(
        "http://{}:{}",
        projects_config::DEFAULT_HOST,
        projects_config::DEFAULT_PORT
    )
}
