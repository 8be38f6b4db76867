use std::time::Duration;

use clap::Subcommand;
use serde::Serialize;
use studytrack_core::screens::StudyView;
use studytrack_core::{Config, Event, ItemStatus, ItemType, StudyItem, StudyScreen};

use super::print_json;

#[derive(Subcommand)]
pub enum StudyAction {
    /// Print the study screen
    View {
        /// Open the dialog for this item group
        #[arg(long)]
        group: Option<String>,
    },
    /// Change an item's status (the change lasts for this invocation only)
    Status {
        /// Item group, e.g. "task" or "Study Session"
        group: String,
        /// Position within the group, starting at 0
        index: usize,
        /// New status: completed, in_progress or failed
        status: String,
    },
    /// Add an item and print the resulting screen
    Add {
        item_type: String,
        title: String,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        duration: Option<String>,
    },
    /// Run the focus timer, printing one JSON event per line
    Timer {
        /// Session length in seconds (defaults to the configured length)
        #[arg(long)]
        seconds: Option<u64>,
        /// Tick period in milliseconds (defaults to the configured period)
        #[arg(long)]
        tick_millis: Option<u64>,
        /// Pause after this many ticks instead of running to zero
        #[arg(long)]
        ticks: Option<u64>,
    },
}

#[derive(Serialize)]
struct StudyOutput {
    #[serde(flatten)]
    view: StudyView,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    events: Vec<Event>,
}

pub fn run(action: StudyAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match action {
        StudyAction::View { group } => {
            let mut screen = StudyScreen::new(&config);
            if let Some(group) = group {
                screen.show_group(group.parse()?);
            }
            print_json(&StudyOutput {
                view: screen.view(),
                events: Vec::new(),
            })
        }
        StudyAction::Status {
            group,
            index,
            status,
        } => {
            let item_type: ItemType = group.parse()?;
            let status: ItemStatus = status.parse()?;
            let mut screen = StudyScreen::new(&config);
            screen.show_group(item_type);
            screen.select_item(index)?;
            let events: Vec<Event> = screen.choose_status(status).into_iter().collect();
            print_json(&StudyOutput {
                view: screen.view(),
                events,
            })
        }
        StudyAction::Add {
            item_type,
            title,
            subject,
            duration,
        } => {
            let item_type: ItemType = item_type.parse()?;
            let mut item = StudyItem::new(item_type, title);
            if let Some(subject) = subject {
                item = item.subject(subject);
            }
            if let Some(duration) = duration {
                item = item.duration(duration);
            }
            let mut screen = StudyScreen::new(&config);
            let event = screen.add_item(item);
            screen.show_group(item_type);
            print_json(&StudyOutput {
                view: screen.view(),
                events: vec![event],
            })
        }
        StudyAction::Timer {
            seconds,
            tick_millis,
            ticks,
        } => {
            let mut config = config;
            if let Some(seconds) = seconds {
                config.timer.session_length_secs = seconds;
            }
            if let Some(millis) = tick_millis {
                config.timer.tick_millis = millis;
            }
            config.validate()?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()?;
            runtime.block_on(run_timer(&config, ticks))
        }
    }
}

async fn run_timer(config: &Config, limit: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let mut screen = StudyScreen::new(config);
    tracing::info!(
        session_secs = config.timer.session_length_secs,
        period = ?Duration::from_millis(config.timer.tick_millis),
        "running focus timer"
    );

    if let Some(event) = screen.start_timer() {
        print_line(&event)?;
    }

    let mut counted = 0u64;
    while limit.map_or(true, |limit| counted < limit) {
        let Some(event) = screen.next_tick().await else {
            break;
        };
        counted += 1;
        print_line(&event)?;
    }

    if let Some(event) = screen.pause_timer() {
        print_line(&event)?;
    }
    print_line(&screen.timer().controller().snapshot_event())?;
    Ok(())
}

fn print_line(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}
