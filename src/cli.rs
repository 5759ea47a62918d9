use clap::Parser;
use log::LevelFilter;

/// Prompts for two numbers and an operator, then prints the result.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct CLI {
    /// don't print the banner before the first prompt
    #[arg(short, long)]
    pub quiet: bool,

    /// diagnostic log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(short, long, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_arguments() {
        let cli = CLI::try_parse_from(["promptcalc"]).expect("no arguments should parse");

        assert!(!cli.quiet);
        assert_eq!(cli.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_flags() {
        let cli = CLI::try_parse_from(["promptcalc", "-q", "--log-level", "debug"])
            .expect("flags should parse");

        assert!(cli.quiet);
        assert_eq!(cli.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_log_level() {
        assert!(CLI::try_parse_from(["promptcalc", "--log-level", "loud"]).is_err());
    }
}
