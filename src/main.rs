use clap::Parser;
use log::error;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;

use greeter::*;

#[derive(Parser)]
#[command(
    version,
    max_term_width = 100,
    about = "Print a greeting line for a name, or for the World when no name is given"
)]
struct Opt {
    /// Sets the name to greet. An empty name greets the World.
    #[arg(default_value = "Alice", conflicts_with = "anonymous")]
    name: String,
    /// Greets without any name.
    #[arg(long)]
    anonymous: bool,
    /// Specifies the output path. Defaults to stdout.
    #[arg(short, long, value_name = "PATH")]
    output_path: Option<PathBuf>,
    /// Set the file where to log (or stderr or stdout). Defaults to 'stderr'.
    #[arg(long, value_name = "LOG", default_value = "stderr")]
    log: PathBuf,
    /// Set the log level (OFF, ERROR, WARN, INFO, DEBUG or TRACE).
    #[arg(long, value_name = "LEVEL", default_value = "ERROR")]
    log_level: LevelFilter,
}

fn init_logger(log: &Path, level: LevelFilter) {
    let stdout = Path::new("stdout");
    let stderr = Path::new("stderr");

    if log == stdout {
        let _ = TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stdout,
            ColorChoice::Auto,
        );
    } else if log == stderr {
        let _ = TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        );
    } else if let Ok(file) = File::create(log) {
        let _ = WriteLogger::init(level, Config::default(), file);
    } else {
        let _ = TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        );
        error!(
            "Unable to create log file: {}. Switch to stderr",
            log.display()
        );
    }
}

fn main() {
    let opt = Opt::parse();

    init_logger(&opt.log, opt.log_level);

    let name = if opt.anonymous {
        None
    } else {
        Some(opt.name.as_str())
    };

    let result = match opt.output_path.as_deref() {
        Some(path) => output_greeting(name, Some(path)).map_err(|e| {
            error!("Unable to write greeting to {}: {}", path.display(), e);
        }),
        None => greet(name).map_err(|e| {
            error!("Unable to write greeting: {}", e);
        }),
    };

    if result.is_err() {
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn clap_debug_assert() {
        Opt::command().debug_assert();
    }

    #[test]
    fn test_default_name() {
        let opt = Opt::try_parse_from(["greeter"]).unwrap();
        assert_eq!(opt.name, "Alice");
        assert!(!opt.anonymous);
        assert_eq!(opt.log_level, LevelFilter::Error);
    }

    #[test]
    fn test_anonymous_conflicts_with_name() {
        assert!(Opt::try_parse_from(["greeter", "--anonymous", "Bob"]).is_err());
        assert!(Opt::try_parse_from(["greeter", "--anonymous"]).is_ok());
    }

    #[test]
    fn test_log_level() {
        let opt = Opt::try_parse_from(["greeter", "--log-level", "DEBUG"]).unwrap();
        assert_eq!(opt.log_level, LevelFilter::Debug);
        assert!(Opt::try_parse_from(["greeter", "--log-level", "LOUD"]).is_err());
    }

    #[test]
    fn test_output_path_flags() {
        let opt = Opt::try_parse_from(["greeter", "-o", "greeting.txt"]).unwrap();
        assert_eq!(opt.output_path, Some(PathBuf::from("greeting.txt")));
        assert!(Opt::try_parse_from(["greeter", "--output-file", "greeting.txt"]).is_err());
    }
}
