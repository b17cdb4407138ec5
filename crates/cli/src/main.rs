use std::env;
use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lagoon_agents::BanterAgent;
use lagoon_annotate::{Annotator, LexiconAnnotator};
use lagoon_core::{classify, extract_verb_phrase, RandomChoice};
use lagoon_observability::{init_tracing, AppMetrics};
use lagoon_storage::Store;

#[derive(Debug, Parser)]
#[command(name = "lagoon")]
#[command(about = "Blue Lagoon Concierge CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Chat,
    Respond {
        text: String,
    },
    Classify {
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("lagoon_cli");
    let cli = Cli::parse();

    match cli.command {
        Command::Chat => run_chat(build_agent().await?).await?,
        Command::Respond { text } => {
            let agent = build_agent().await?;
            println!("{}", agent.respond(&text)?);
        }
        Command::Classify { text } => {
            let report = LexiconAnnotator
                .annotate(&text)?
                .iter()
                .map(|sentence| {
                    serde_json::json!({
                        "text": sentence.text,
                        "reply_type": classify(sentence),
                        "verb_phrase": extract_verb_phrase(sentence).indices(),
                    })
                })
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

async fn run_chat(agent: BanterAgent<Store>) -> Result<()> {
    let mut booking_id: Option<String> = None;

    println!("Blue Lagoon Concierge chat mode. type '/start' to book a room, 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        if message.eq_ignore_ascii_case("/cancel") {
            booking_id = None;
            println!("\nBooking cancelled.\n");
            continue;
        }

        if message.eq_ignore_ascii_case("/start") {
            let exchange = agent.begin_booking().await?;
            booking_id = Some(exchange.booking_id.clone());
            print_messages(&exchange.messages);
            continue;
        }

        if let Some(id) = booking_id.clone() {
            let exchange = agent.booking_reply(&id, message).await?;
            print_messages(&exchange.messages);
            if exchange.complete {
                booking_id = None;
            }
            continue;
        }

        println!("\n{}\n", agent.respond(message)?);
    }

    Ok(())
}

fn print_messages(messages: &[String]) {
    println!();
    for message in messages {
        println!("{message}");
    }
    println!();
}

async fn build_agent() -> Result<BanterAgent<Store>> {
    let metrics = AppMetrics::shared();

    let store = if let Ok(database_url) = env::var("LAGOON_DATABASE_URL") {
        Store::sqlite(&database_url).await?
    } else {
        Store::memory()
    };

    Ok(BanterAgent::new(
        Arc::new(LexiconAnnotator),
        Arc::new(RandomChoice),
        Arc::new(store),
        metrics,
    ))
}
