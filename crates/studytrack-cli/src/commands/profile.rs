use clap::Args;
use studytrack_core::{Config, ProfileScreen};

use super::print_json;

#[derive(Args)]
pub struct ProfileArgs {
    /// Edit and save the user name
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    dark_mode: Option<bool>,
    #[arg(long)]
    notifications: Option<bool>,
    #[arg(long)]
    language: Option<String>,
    /// Profile picture URI
    #[arg(long)]
    image: Option<String>,
}

pub fn run(args: ProfileArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut profile = ProfileScreen::new(&config.profile);

    if let Some(name) = args.name {
        profile.begin_edit();
        profile.edit_name(name);
        profile.save_name();
    }
    if let Some(on) = args.dark_mode {
        profile.set_dark_mode(on);
    }
    if let Some(on) = args.notifications {
        profile.set_notifications(on);
    }
    if let Some(language) = args.language {
        profile.set_language(language);
    }
    if args.image.is_some() {
        profile.set_profile_image(args.image);
    }

    print_json(&profile.view())
}
