//! Command-line argument definitions and parsing

use clap::{Args, Parser, Subcommand, ValueEnum};
use jaxon::DocumentFormat;
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser)]
#[command(
    name = "jaxon",
    version,
    about = "Extract values from JSON documents with dot-notation paths",
    long_about = "jaxon selects values from JSON (or YAML) documents using compact paths \
                  such as `people[*].name` or `config.servers[0].host`, printing scalars \
                  as plain text, arrays one element per line, and objects as sorted, \
                  indented JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the single item a path selects; fails on zero or several
    Get(GetArgs),
    /// Print every item a path selects
    Items(ItemsArgs),
    /// Check path expressions without reading any document
    Check(CheckArgs),
}

/// Where documents come from and how they are decoded
#[derive(Args, Debug, Clone)]
pub struct InputOptions {
    /// Files or directories to query (standard input when omitted)
    pub files: Vec<PathBuf>,

    /// Document format
    #[arg(long, value_enum, default_value = "auto")]
    pub input: InputFormat,

    /// Follow symbolic links when processing directories
    #[arg(long)]
    pub follow_links: bool,

    /// Maximum depth for directory recursion
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Include hidden files (starting with .)
    #[arg(long)]
    pub include_hidden: bool,

    /// Only collect files with these extensions from directories
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,
}

/// Document formats accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum InputFormat {
    /// Pick by file extension (JSON for stdin)
    Auto,
    /// JSON documents
    Json,
    /// YAML documents
    Yaml,
}

impl From<InputFormat> for DocumentFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Auto => DocumentFormat::Auto,
            InputFormat::Json => DocumentFormat::Json,
            InputFormat::Yaml => DocumentFormat::Yaml,
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One item per line
    Lines,
    /// Items encoded as JSON strings
    Json,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Path expression
    #[arg(long, value_name = "PATH", aliases = ["path", "key"])]
    pub query: String,

    #[command(flatten)]
    pub input: InputOptions,

    /// Output format
    #[arg(long, value_enum, default_value = "lines")]
    pub format: OutputFormat,
}

/// Arguments for the items command
#[derive(Args, Debug)]
pub struct ItemsArgs {
    /// Path expression
    #[arg(long, value_name = "PATH", aliases = ["path", "key"])]
    pub query: String,

    #[command(flatten)]
    pub input: InputOptions,

    /// Output format
    #[arg(long, value_enum, default_value = "lines")]
    pub format: OutputFormat,

    /// Print only the number of items
    #[arg(long, conflicts_with = "format")]
    pub count: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path expressions to check
    #[arg(required = true, value_name = "PATH")]
    pub queries: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parsing() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_get_command() {
        let args = vec!["jaxon", "get", "--query", "author.name", "doc.json"];
        let cli = Cli::try_parse_from(args).unwrap();

        if let Commands::Get(get_args) = cli.command {
            assert_eq!(get_args.query, "author.name");
            assert_eq!(get_args.input.files, vec![PathBuf::from("doc.json")]);
            assert_eq!(get_args.format, OutputFormat::Lines);
        } else {
            panic!("Expected Get command");
        }
    }

    #[test]
    fn test_query_aliases_and_stdin() {
        let cli = Cli::try_parse_from(vec!["jaxon", "get", "--path", "a[0]"]).unwrap();

        if let Commands::Get(get_args) = cli.command {
            assert_eq!(get_args.query, "a[0]");
            assert!(get_args.input.files.is_empty());
        } else {
            panic!("Expected Get command");
        }

        assert!(Cli::try_parse_from(vec!["jaxon", "get", "doc.json"]).is_err());
    }

    #[test]
    fn test_items_command() {
        let args = vec![
            "jaxon", "items", "--query", "[*].name", "--format", "json", "a.json", "b.json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        if let Commands::Items(items_args) = cli.command {
            assert_eq!(items_args.query, "[*].name");
            assert_eq!(items_args.format, OutputFormat::Json);
            assert!(!items_args.count);
            assert_eq!(items_args.input.files.len(), 2);
        } else {
            panic!("Expected Items command");
        }
    }

    #[test]
    fn test_items_count() {
        let cli = Cli::try_parse_from(vec!["jaxon", "items", "--query", "a", "--count"]).unwrap();

        if let Commands::Items(items_args) = cli.command {
            assert!(items_args.count);
        } else {
            panic!("Expected Items command");
        }

        let conflicting = vec!["jaxon", "items", "--query", "a", "--count", "--format", "json"];
        assert!(Cli::try_parse_from(conflicting).is_err());
    }

    #[test]
    fn test_check_command() {
        let cli = Cli::try_parse_from(vec!["jaxon", "check", "a.b", "rows[*]"]).unwrap();

        if let Commands::Check(check_args) = cli.command {
            assert_eq!(check_args.queries, vec!["a.b".to_string(), "rows[*]".to_string()]);
        } else {
            panic!("Expected Check command");
        }

        assert!(Cli::try_parse_from(vec!["jaxon", "check"]).is_err());
    }

    #[test]
    fn test_input_format() {
        let cli = Cli::try_parse_from(vec!["jaxon", "get", "--query", "a", "--input", "yaml"])
            .unwrap();

        if let Commands::Get(get_args) = cli.command {
            assert_eq!(
                DocumentFormat::from(get_args.input.input),
                DocumentFormat::Yaml
            );
        } else {
            panic!("Expected Get command");
        }

        let bad = vec!["jaxon", "get", "--query", "a", "--input", "toml"];
        assert!(Cli::try_parse_from(bad).is_err());
    }

    #[test]
    fn test_file_options() {
        let args = vec![
            "jaxon",
            "items",
            "--query",
            "id",
            "--follow-links",
            "--max-depth",
            "3",
            "--include-hidden",
            "--ext",
            "json",
            "--ext",
            "jsonl",
            "-v",
            "data/",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.verbose);

        if let Commands::Items(items_args) = cli.command {
            let input = items_args.input;
            assert!(input.follow_links);
            assert_eq!(input.max_depth, Some(3));
            assert!(input.include_hidden);
            assert_eq!(input.extensions, vec!["json".to_string(), "jsonl".to_string()]);
            assert_eq!(input.files, vec![PathBuf::from("data/")]);
        } else {
            panic!("Expected Items command");
        }
    }
}
