use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{info, spotify, warning};

pub async fn profile() {
    let token = super::session_token().await;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching profile...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let user = spotify::profile::get_current_user(&token).await;
    pb.finish_and_clear();

    match user {
        Ok(user) => {
            let name = user
                .display_name
                .clone()
                .unwrap_or_else(|| user.id.clone());
            info!("Name: {}", name);
            info!("User ID: {}", user.id);
            if let Some(followers) = &user.followers {
                info!("Followers: {}", followers.total);
            }
            if let Some(image) = user.images.as_ref().and_then(|images| images.first()) {
                info!("Avatar: {}", image.url);
            }
        }
        Err(e) => warning!("Failed to load profile. Err: {}", e),
    }
}
