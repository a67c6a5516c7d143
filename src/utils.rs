use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so the tables on stdout stay clean. `RUST_LOG` wins
/// over `--verbose` when set.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_writer(std::io::stderr)
        .init();
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    let paths = [
        ("--views-path", &args.views_path),
        ("--friends-path", &args.friends_path),
        ("--messages-path", &args.messages_path),
    ];

    for (flag, path) in paths {
        if path.as_os_str().is_empty() {
            anyhow::bail!("{} must not be empty", flag);
        }
    }

    Ok(())
}
