use clap::Args;
use serde::Serialize;
use studytrack_core::nav::{subjects, NavView, Subject};
use studytrack_core::{Event, ItemType, Navigator, Tab};

use super::print_json;

#[derive(Args)]
pub struct NavArgs {
    /// Tab to switch to (home, study, progress, profile)
    tab: Option<String>,
    /// Open the "New Item" dialog and pick this type
    #[arg(long)]
    new_item: Option<String>,
    /// Only open the "New Item" dialog
    #[arg(long, conflicts_with = "new_item")]
    open_new_item: bool,
    /// List subjects instead
    #[arg(long)]
    subjects: bool,
}

#[derive(Serialize)]
struct NavOutput {
    #[serde(flatten)]
    view: NavView,
    events: Vec<Event>,
}

pub fn run(args: NavArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.subjects {
        let list: Vec<Subject> = subjects();
        return print_json(&list);
    }

    let mut nav = Navigator::new();
    let mut events = Vec::new();

    if let Some(tab) = args.tab {
        let tab: Tab = tab.parse()?;
        events.extend(nav.navigate(tab));
    }
    if args.open_new_item {
        nav.open_new_item();
    }
    if let Some(name) = args.new_item {
        let item_type: ItemType = name.parse()?;
        nav.open_new_item();
        events.extend(nav.choose_new_item(item_type));
    }

    print_json(&NavOutput {
        view: nav.view(),
        events,
    })
}
