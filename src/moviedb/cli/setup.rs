use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "moviedb", bin_name = "moviedb", version = get_version())]
#[command(
    about = "Personal movie catalog kept in a JSON or CSV file",
    long_about = "Personal movie catalog kept in a JSON or CSV file.\n\n\
                  Run without a command to open the interactive menu."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file (.json or .csv); defaults to `default_file` from config.json
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// List all movies
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Add a movie, fetching its details from OMDb unless given manually
    #[command(display_order = 2)]
    Add {
        /// Release year (manual entry)
        #[arg(long)]
        year: Option<String>,

        /// Rating (manual entry)
        #[arg(long)]
        rating: Option<f64>,

        /// IMDb identifier such as tt0120338 (manual entry)
        #[arg(long, value_name = "ID")]
        imdb_id: Option<String>,

        /// Poster image URL (manual entry)
        #[arg(long, value_name = "URL")]
        poster: Option<String>,

        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// Delete a movie
    #[command(alias = "rm", display_order = 3)]
    Delete {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Set the notes of a movie
    #[command(display_order = 4)]
    Update {
        title: String,
        notes: String,
    },

    /// Rating statistics
    #[command(display_order = 5)]
    Stats,

    /// Pick a random movie
    #[command(display_order = 6)]
    Random,

    /// Search titles (case-insensitive)
    #[command(display_order = 7)]
    Search {
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// List movies sorted by rating, best first
    #[command(display_order = 8)]
    Sort,

    /// Generate the HTML gallery
    #[command(display_order = 9)]
    Website {
        /// Output file (overrides `output_path` from config.json)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Create an empty catalog file if it does not exist
    #[command(display_order = 10)]
    Init,

    /// Open the interactive menu
    #[command(display_order = 11)]
    Menu,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("moviedb").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_command_means_menu() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(cli.file.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = parse(&["ls", "-f", "movies.csv", "-v"]);
        assert_eq!(cli.command, Some(Commands::List));
        assert_eq!(cli.file, Some(PathBuf::from("movies.csv")));
        assert!(cli.verbose);
    }

    #[test]
    fn add_joins_title_words_and_keeps_manual_fields() {
        let cli = parse(&["add", "--year", "1979", "--rating", "8.5", "The", "Thing"]);
        match cli.command {
            Some(Commands::Add {
                title,
                year,
                rating,
                imdb_id,
                poster,
            }) => {
                assert_eq!(title, vec!["The", "Thing"]);
                assert_eq!(year.as_deref(), Some("1979"));
                assert_eq!(rating, Some(8.5));
                assert!(imdb_id.is_none());
                assert!(poster.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn update_takes_title_and_notes() {
        let cli = parse(&["update", "Titanic", "Great film"]);
        assert_eq!(
            cli.command,
            Some(Commands::Update {
                title: "Titanic".into(),
                notes: "Great film".into()
            })
        );
    }

    #[test]
    fn delete_requires_a_title() {
        let result = Cli::try_parse_from(["moviedb", "rm"]);
        assert!(result.is_err());
    }

    #[test]
    fn website_output_override() {
        let cli = parse(&["website", "--output", "out/site.html"]);
        assert_eq!(
            cli.command,
            Some(Commands::Website {
                output: Some(PathBuf::from("out/site.html"))
            })
        );
    }
}
