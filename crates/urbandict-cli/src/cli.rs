use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use urbandict_core::Response;

#[derive(Debug, Parser)]
#[command(name = "udict", version, about = "Look up terms on Urban Dictionary")]
pub struct Cli {
    /// JSON config file; overrides environment settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Define a term
    Define {
        term: String,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Fetch a definition by its id
    Id {
        defid: i64,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Random definitions
    Random {
        #[command(flatten)]
        view: ViewArgs,
    },
}

impl Command {
    pub fn view(&self) -> &ViewArgs {
        match self {
            Command::Define { view, .. } | Command::Id { view, .. } | Command::Random { view } => {
                view
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Most thumbs up first
    Up,
    /// Most thumbs down first
    Down,
}

#[derive(Debug, Args)]
pub struct ViewArgs {
    #[arg(long, value_enum)]
    pub sort: Option<SortOrder>,

    /// Keep only definitions by this author
    #[arg(long)]
    pub author: Option<String>,

    /// Show at most N definitions
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Print the raw response as JSON
    #[arg(long)]
    pub json: bool,
}

impl ViewArgs {
    /// Filter, then sort, then limit
    pub fn apply(&self, response: &mut Response) {
        if let Some(author) = &self.author {
            response.filter_by_author(author);
        }

        match self.sort {
            Some(SortOrder::Up) => response.sort_by_thumbs_up(),
            Some(SortOrder::Down) => response.sort_by_thumbs_down(),
            None => {}
        }

        if let Some(n) = self.limit {
            response.limit(n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_define_with_view_flags() {
        let cli = Cli::try_parse_from([
            "udict", "define", "Chile", "--sort", "up", "--limit", "1", "--author", "bob",
        ])
        .unwrap();

        match &cli.command {
            Command::Define { term, view } => {
                assert_eq!(term, "Chile");
                assert_eq!(view.sort, Some(SortOrder::Up));
                assert_eq!(view.limit, Some(1));
                assert_eq!(view.author.as_deref(), Some("bob"));
                assert!(!view.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_negative_limit_is_rejected() {
        let result = Cli::try_parse_from(["udict", "random", "--limit", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_id_requires_integer() {
        assert!(Cli::try_parse_from(["udict", "id", "abc"]).is_err());
        let cli = Cli::try_parse_from(["udict", "-v", "id", "42", "--json"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Id { defid: 42, .. }));
        assert!(cli.command.view().json);
    }

    #[test]
    fn test_apply_filters_before_limit() {
        let mut response: Response = serde_json::from_str(
            r#"{ "list": [
                { "word": "a", "author": "x", "thumbs_up": 1 },
                { "word": "b", "author": "y", "thumbs_up": 9 },
                { "word": "c", "author": "x", "thumbs_up": 5 }
            ] }"#,
        )
        .unwrap();

        let view = ViewArgs {
            sort: Some(SortOrder::Up),
            author: Some("X".to_string()),
            limit: Some(1),
            json: false,
        };
        view.apply(&mut response);

        assert_eq!(response.len(), 1);
        assert_eq!(response.first().unwrap().word, "c");
    }
}
