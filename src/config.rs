use crate::db::get_db_path;
use crate::db::progress::state_key;
use crate::joke::DEFAULT_JOKE_URL;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "quizzer", version, about = "Multiple-choice quiz in the terminal, with a joke break")]
pub struct Cli {
    /// CSV deck (`question,option1,...,optionN,correct_index` per line);
    /// the built-in JavaScript quiz is used when omitted
    #[arg(short, long, env = "QUIZZER_DECK")]
    pub deck: Option<PathBuf>,

    /// SQLite file that keeps quiz progress between runs
    #[arg(long, env = "QUIZZER_DB")]
    pub db: Option<PathBuf>,

    #[arg(long, env = "QUIZZER_JOKE_URL", default_value = DEFAULT_JOKE_URL)]
    pub joke_url: String,

    /// Keep progress in memory only
    #[arg(long)]
    pub no_persist: bool,

    #[arg(long, env = "QUIZZER_LOG", default_value = "quizzer.log")]
    pub log_file: PathBuf,
}

impl Cli {
    pub fn db_path(&self) -> PathBuf {
        self.db.clone().unwrap_or_else(get_db_path)
    }

    /// Deck name shown in the header; `None` for the built-in quiz.
    pub fn deck_name(&self) -> Option<String> {
        self.deck.as_ref().map(|path| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string())
        })
    }

    pub fn progress_key(&self) -> String {
        state_key(self.deck_name().as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["quizzer"]).unwrap();
        assert_eq!(cli.joke_url, DEFAULT_JOKE_URL);
        assert!(!cli.no_persist);
        assert_eq!(cli.log_file, PathBuf::from("quizzer.log"));
        assert_eq!(cli.progress_key(), "quizzer_state_v1");
        assert_eq!(cli.db_path().file_name().unwrap(), "quizzer.db");
    }

    #[test]
    fn test_deck_changes_key() {
        let cli = Cli::try_parse_from(["quizzer", "--deck", "decks/rust.csv"]).unwrap();
        assert_eq!(cli.deck_name().as_deref(), Some("rust"));
        assert_eq!(cli.progress_key(), "quizzer_state_v1:rust");
    }

    #[test]
    fn test_explicit_db_and_flags() {
        let cli = Cli::try_parse_from([
            "quizzer",
            "--db",
            "/tmp/q.db",
            "--no-persist",
            "--joke-url",
            "http://localhost:9999/joke",
        ])
        .unwrap();
        assert_eq!(cli.db_path(), PathBuf::from("/tmp/q.db"));
        assert!(cli.no_persist);
        assert_eq!(cli.joke_url, "http://localhost:9999/joke");
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
