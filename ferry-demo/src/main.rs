mod scenario;

use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use ferry::prelude::*;
use scenario::{Scenario, ScenarioError, Step};
use simplelog::{Config, LevelFilter, WriteLogger};

async fn run(path: PathBuf) -> Result<(), ScenarioError> {
    let scenario = Scenario::load(&path)?;
    let host = scenario.host();

    let mut ferry = Ferry::builder(&scenario.scope)
        .host(host.clone())
        .config(scenario.config())
        .locales(scenario.locales()?)
        .containers(scenario.containers.clone())
        .build()?;

    ferry.on_change(|event| match event {
        FerryEvent::Transferred(transfer) => {
            println!(
                "transferred {} item(s) {} -> {} ({:?})",
                transfer.items.len(),
                transfer.source,
                transfer.destination,
                transfer.order
            );
        }
        FerryEvent::ItemsChanged { containers } => {
            println!("items changed in {} container(s)", containers.len());
        }
    });

    log::info!("Playing {} steps from {}", scenario.steps.len(), path.display());
    for step in scenario.steps {
        match step {
            Step::Input(input) => ferry.handle(input),
            Step::Wait(ms) => tokio::time::sleep(Duration::from_millis(ms)).await,
            Step::Mutations(batch) => {
                if let Err(e) = ferry.apply_mutations(batch) {
                    println!("mutation batch rejected: {}", e);
                }
            }
            Step::SelectAll(container) => match ferry.container_id(&container) {
                Some(id) => {
                    ferry.select_all(id);
                }
                None => println!("unknown container '{}'", container),
            },
        }
        ferry.tick();
    }

    // Let the last announcements land.
    while let Some(due) = ferry.next_announcement() {
        tokio::time::sleep_until(due.into()).await;
        ferry.tick();
    }

    print_state(&ferry, &scenario.containers, &host);
    Ok(())
}

fn print_state(ferry: &Ferry, containers: &[ContainerSpec], host: &MemoryHost) {
    println!("locale: {}", ferry.locale_key());
    for spec in containers {
        println!("[{}] {}", spec.key, ferry.item_keys(&spec.key).join(", "));
        for channel in [Channel::Status, Channel::Count] {
            if let Some(text) = host.live_text(&spec.key, channel) {
                println!("  {:?}: {}", channel, text.trim());
            }
        }
    }
    println!("selected: {}", ferry.selected_keys().join(", "));
}

#[tokio::main]
async fn main() {
    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("ferry-demo/scenarios/sample.json"));
    let level = args
        .next()
        .and_then(|level| LevelFilter::from_str(&level).ok())
        .unwrap_or(LevelFilter::Debug);

    let log_file = File::create("ferry-demo.log").expect("Failed to create log file");
    WriteLogger::init(level, Config::default(), log_file).expect("Failed to initialize logger");

    if let Err(e) = run(path).await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
    }
}
