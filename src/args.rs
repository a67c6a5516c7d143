use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "retentee",
    about = "Report D1/D7/D30/D60/D90 user retention for the views, friends and messages datasets",
    version,
    long_about = None
)]
pub struct Args {
    /// CSV file for the views dataset
    #[arg(long, default_value = "data/views.csv")]
    pub views_path: PathBuf,

    /// CSV file for the friends dataset
    #[arg(long, default_value = "data/friends.csv")]
    pub friends_path: PathBuf,

    /// CSV file for the messages dataset
    #[arg(long, default_value = "data/messages.csv")]
    pub messages_path: PathBuf,

    /// Stop at the first dataset that fails instead of reporting the rest
    #[arg(long)]
    pub fail_fast: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
