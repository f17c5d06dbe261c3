use anyhow::Result;
use clap::{Parser, Subcommand};
use hookctl::client::DashboardClient;
use hookctl::controller::{DashboardController, TestMessage};
use hookctl::{render, shell};
use std::io::Write;
use std::sync::Arc;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the bot dashboard service
    #[clap(long, default_value = "http://127.0.0.1:5000")]
    url: String,

    /// Disable colorized output
    #[clap(long)]
    no_color: bool,

    /// Skip the delete confirmation prompt
    #[clap(long)]
    yes: bool,

    /// Subcommands; without one, an interactive shell starts
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Register the webhook with the messaging platform
    Set,
    /// Show the currently registered webhook
    Info,
    /// Remove the registered webhook
    Delete,
    /// Send a simulated message through the bot
    Test {
        /// Chat id to simulate (blank falls back to the shared test id)
        #[clap(long, default_value = "")]
        chat_id: String,
        /// Preset message to send
        #[clap(long, value_enum, default_value = "start")]
        message: MessagePreset,
        /// Free-form message text (overrides --message)
        #[clap(long)]
        custom: Option<String>,
    },
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum MessagePreset {
    Start,
    Help,
    Hello,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let color = !args.no_color;

    let client = DashboardClient::new(&args.url)?;
    let controller = Arc::new(DashboardController::new(client));

    let Some(command) = args.command else {
        return shell::run(controller, color).await;
    };

    match command {
        Command::Set => {
            controller.set_webhook().await;
        }
        Command::Info => {
            controller.get_webhook_info().await;
        }
        Command::Delete => {
            if !args.yes && !confirm_delete()? {
                println!("Delete cancelled.");
                return Ok(());
            }
            controller.delete_webhook().await;
        }
        Command::Test {
            chat_id,
            message,
            custom,
        } => {
            let message = match custom {
                Some(text) => TestMessage::Custom(text),
                None => match message {
                    MessagePreset::Start => TestMessage::Start,
                    MessagePreset::Help => TestMessage::Help,
                    MessagePreset::Hello => TestMessage::Greeting,
                },
            };
            if let Err(err) = controller.send_test_message(&chat_id, &message).await {
                eprintln!("{err}");
                return Ok(());
            }
        }
    }

    // Server-reported failures render as banners; they are not process
    // errors, so the exit code stays 0.
    if let Some(banner) = controller.status().current() {
        println!("{}", render::paint(&banner, color));
    }
    Ok(())
}

fn confirm_delete() -> Result<bool> {
    print!("Are you sure you want to delete the webhook? [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(shell::confirmed(&answer))
}
