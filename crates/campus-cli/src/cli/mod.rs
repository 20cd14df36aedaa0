use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `campus` binary.
#[derive(Debug, Parser)]
#[command(
    name = "campus",
    version,
    about = "Campus - admissions catalog, enquiries, and administration"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to auto-detect via .campus)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Act as this profile ID instead of the configured user
    #[arg(long = "as", global = true, value_name = "PROFILE_ID")]
    pub as_user: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
            color: self.color,
            as_user: self.as_user.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::{EnquiryCommands, StreamCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "campus", "--format", "table", "--limit", "10", "--verbose", "whoami",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Whoami));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["campus", "stream", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Stream {
                action: StreamCommands::List
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["campus", "--format", "xml", "whoami"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn as_flag_sets_acting_user() {
        let cli = Cli::try_parse_from(["campus", "--as", "usr-00000001", "overview"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.as_user.as_deref(), Some("usr-00000001"));
    }

    #[test]
    fn menu_accepts_width_or_breakpoint() {
        let cli = Cli::try_parse_from(["campus", "menu", "colleges", "--width", "1100"])
            .expect("cli should parse");
        let Commands::Menu(args) = cli.command else {
            panic!("expected menu command");
        };
        assert_eq!(args.target, "colleges");
        assert_eq!(args.width, Some(1100));

        let parsed = Cli::try_parse_from([
            "campus",
            "menu",
            "courses",
            "--width",
            "1100",
            "--breakpoint",
            "lg",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn certification_enquiry_takes_course_id() {
        let cli = Cli::try_parse_from([
            "campus",
            "enquiry",
            "submit",
            "--name",
            "Asha",
            "--phone",
            "9800000000",
            "--certification",
            "crt-00000001",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Enquiry {
                action: EnquiryCommands::Submit { .. }
            }
        ));
    }

    #[test]
    fn enquiry_submit_accepts_apply_query() {
        let cli = Cli::try_parse_from([
            "campus",
            "enquiry",
            "submit",
            "--name",
            "Asha",
            "--phone",
            "9800000000",
            "--query",
            "?college=uni-2",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Enquiry {
                action: EnquiryCommands::Submit { query, .. },
            } => assert_eq!(query.as_deref(), Some("?college=uni-2")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn certification_conflicts_with_course() {
        let parsed = Cli::try_parse_from([
            "campus",
            "enquiry",
            "submit",
            "--name",
            "Asha",
            "--phone",
            "9800000000",
            "--certification",
            "crt-00000001",
            "--course",
            "crs-00000001",
        ]);
        assert!(parsed.is_err());
    }
}
