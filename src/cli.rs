use std::ffi::OsString;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "pty-relay",
    version,
    about = "Run a command in a pseudo-terminal, relayed over stdin/stdout",
    after_help = "Environment:\n  PTY_ROWS       terminal rows (default 24)\n  PTY_COLS       terminal columns (default 80)\n  PTY_GRACE_MS   shutdown grace period in ms (default 200)\n  PTY_RELAY_LOG  log filter written to stderr (default warn)"
)]
pub struct Cli {
    /// Command to run, followed by its arguments (passed through verbatim)
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub command: Vec<OsString>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("pty-relay").chain(args.iter().copied()))
    }

    #[test]
    fn definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn collects_command_and_args() {
        let cli = parse(&["sh", "-c", "exit 3"]).unwrap();
        assert_eq!(cli.command, vec!["sh", "-c", "exit 3"]);
    }

    #[test]
    fn child_flags_are_not_consumed() {
        let cli = parse(&["vim", "--help", "-V", "--", "file"]).unwrap();
        assert_eq!(cli.command, vec!["vim", "--help", "-V", "--", "file"]);
    }

    #[test]
    fn missing_command_is_an_error() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
