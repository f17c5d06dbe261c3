use crate::controller::{DashboardController, TestMessage};
use crate::render;
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Interactive dashboard mode: fetch the webhook info once on startup, then
/// read commands from stdin. Actions are spawned so the prompt stays live
/// while a request is in flight; a background task repaints the status
/// region whenever any of them publishes.
pub async fn run(controller: Arc<DashboardController>, color: bool) -> Result<()> {
    controller.init().await;
    if let Some(banner) = controller.status().current() {
        println!("{}", render::paint(&banner, color));
    }

    // Subscribing after init marks the startup banner as seen, so this task
    // only repaints banners published by spawned actions.
    let mut region = controller.status().subscribe();
    tokio::spawn(async move {
        while region.changed().await.is_ok() {
            let banner = region.borrow_and_update().clone();
            if let Some(banner) = banner {
                println!("\n{}", render::paint(&banner, color));
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt("hookctl> ")?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "set" => {
                let controller = controller.clone();
                tokio::spawn(async move {
                    controller.set_webhook().await;
                });
            }
            "info" => {
                let controller = controller.clone();
                tokio::spawn(async move {
                    controller.get_webhook_info().await;
                });
            }
            "delete" => {
                prompt("Are you sure you want to delete the webhook? [y/N] ")?;
                let Some(answer) = lines.next_line().await? else {
                    break;
                };
                if confirmed(&answer) {
                    let controller = controller.clone();
                    tokio::spawn(async move {
                        controller.delete_webhook().await;
                    });
                } else {
                    println!("Delete cancelled.");
                }
            }
            "test" => {
                let message = match rest {
                    "" | "start" | "/start" => TestMessage::Start,
                    "help" | "/help" => TestMessage::Help,
                    "hello" => TestMessage::Greeting,
                    custom => TestMessage::Custom(custom.to_string()),
                };
                let controller = controller.clone();
                tokio::spawn(async move {
                    if let Err(err) = controller.send_test_message("", &message).await {
                        eprintln!("{err}");
                    }
                });
            }
            "help" => {
                println!("Commands: set, info, delete, test [text], help, quit");
            }
            "quit" | "exit" => break,
            other => println!("Unknown command: {other} (try 'help')"),
        }
    }
    Ok(())
}

pub fn confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn prompt(text: &str) -> Result<()> {
    print!("{text}");
    std::io::stdout().flush()?;
    Ok(())
}
