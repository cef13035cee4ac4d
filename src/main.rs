use avoma::types::{call, meeting, note, transcription, user};
use avoma::{AvomaClient, Error, ErrorKind};
use chrono::Utc;
use log::{error, info, warn};
use serde::Serialize;
use service::config::{Command, Config};
use service::logging::Logger;

#[tokio::main]
async fn main() {
    let config = Config::new();
    if let Err(e) = Logger::init_logger(&config) {
        eprintln!("Failed to start logger: {e}");
        std::process::exit(1);
    }

    let client = match service::init_client(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build Avoma client: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&client, config.command).await {
        error!("Request failed: {e}");
        if let Some(body) = e.body() {
            error!("Response body: {body}");
        }
        std::process::exit(1);
    }
}

async fn run(client: &AvomaClient, command: Command) -> Result<(), Error> {
    match command {
        Command::Meetings {
            from,
            to,
            page_size,
            is_call,
            follow,
        } => {
            let mut query = meeting::Query::new(from, to).with_follow_pagination(follow);
            if let Some(page_size) = page_size {
                query = query.with_page_size(page_size);
            }
            if let Some(is_call) = is_call {
                query = query.with_is_call(is_call);
            }
            let meetings = client.meetings().list(&query).await?;
            info!(
                "Fetched {} of {} meetings",
                meetings.results.len(),
                meetings.count
            );
            print(&meetings)
        }
        Command::Me => print(&client.users().current().await?),
        Command::Users { follow } => {
            let query = user::Query::default().with_follow_pagination(follow);
            print(&client.users().list(&query).await?)
        }
        Command::Calls {
            from,
            to,
            host,
            status,
            follow,
        } => {
            let mut query = call::Query::new(from, to).with_follow_pagination(follow);
            if let Some(host) = host {
                query = query.with_host(host);
            }
            if let Some(status) = status {
                query = query.with_status(status);
            }
            print(&client.calls().list(&query).await?)
        }
        Command::Notes {
            from,
            to,
            meeting,
            format,
            follow,
        } => {
            let mut query = note::Query::new(from, to)
                .with_output_format(format)
                .with_follow_pagination(follow);
            if let Some(meeting) = meeting {
                query = query.with_meeting(meeting);
            }
            print(&client.notes().list(&query).await?)
        }
        Command::Recording { meeting } => {
            let recording = client.recordings().get_by_meeting(meeting).await?;
            if !recording.is_valid_at(Utc::now()) {
                warn!("Download links for recording {} have expired", recording.uuid);
            }
            print(&recording)
        }
        Command::Transcriptions { from, to, meeting } => {
            let mut query = transcription::Query::new(from, to);
            if let Some(meeting) = meeting {
                query = query.with_meeting(meeting);
            }
            print(&client.transcriptions().list(&query).await?)
        }
        Command::Templates => print(&client.templates().list().await?),
        Command::SmartCategories => print(&client.smart_categories().list().await?),
    }
}

fn print<T: Serialize>(value: &T) -> Result<(), Error> {
    let output = serde_json::to_string_pretty(value).map_err(|err| Error {
        source: Some(Box::new(err)),
        error_kind: ErrorKind::Serialization,
    })?;
    println!("{output}");
    Ok(())
}
