use std::path::{Path, PathBuf};

use crate::args::Args;

pub const DEFAULT_VIEWS_PATH: &str = "data/views.csv";
pub const DEFAULT_FRIENDS_PATH: &str = "data/friends.csv";
pub const DEFAULT_MESSAGES_PATH: &str = "data/messages.csv";

/// Input locations for a run. Each path can be overridden on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub views_path: PathBuf,
    pub friends_path: PathBuf,
    pub messages_path: PathBuf,
}

/// One dataset to process: short name for logs, label for the table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSpec<'a> {
    pub name: &'static str,
    pub label: &'static str,
    pub path: &'a Path,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            views_path: PathBuf::from(DEFAULT_VIEWS_PATH),
            friends_path: PathBuf::from(DEFAULT_FRIENDS_PATH),
            messages_path: PathBuf::from(DEFAULT_MESSAGES_PATH),
        }
    }
}

impl Config {
    /// Datasets in processing order: views, friends, messages.
    pub fn datasets(&self) -> [DatasetSpec<'_>; 3] {
        [
            DatasetSpec {
                name: "views",
                label: "Views Dataset",
                path: &self.views_path,
            },
            DatasetSpec {
                name: "friends",
                label: "Friends Dataset",
                path: &self.friends_path,
            },
            DatasetSpec {
                name: "messages",
                label: "Messages Dataset",
                path: &self.messages_path,
            },
        ]
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            views_path: args.views_path.clone(),
            friends_path: args.friends_path.clone(),
            messages_path: args.messages_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_live_under_data() {
        let config = Config::from(&Args::parse_from(["retentee"]));
        assert_eq!(config, Config::default());
        assert_eq!(config.views_path, Path::new("data/views.csv"));
    }

    #[test]
    fn paths_override_independently() {
        let args = Args::parse_from(["retentee", "--friends-path", "/tmp/f.csv"]);
        let config = Config::from(&args);

        assert_eq!(config.friends_path, Path::new("/tmp/f.csv"));
        assert_eq!(config.views_path, Path::new(DEFAULT_VIEWS_PATH));
        assert_eq!(config.messages_path, Path::new(DEFAULT_MESSAGES_PATH));
    }

    #[test]
    fn datasets_are_ordered() {
        let config = Config::default();
        let names: Vec<&str> = config.datasets().iter().map(|d| d.name).collect();
        assert_eq!(names, ["views", "friends", "messages"]);
        assert_eq!(config.datasets()[2].label, "Messages Dataset");
    }
}
