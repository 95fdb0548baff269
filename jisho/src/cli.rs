//! Command-line arguments

use std::path::PathBuf;

use argh::FromArgs;
use weblio::Profile;

/// Look up Japanese words on weblio.jp and collect the definitions for Anki.
///
/// Besides search terms, the words `clear`, `list` and `cut` empty, print and move the collected
/// definitions to the clipboard.
#[derive(Debug, FromArgs)]
pub struct Opts {
    /// look terms up in Wikipedia instead of 大辞林
    #[argh(switch)]
    pub wiki: bool,
    /// the dictionary to use (daijirin or wikipedia)
    #[argh(option, short = 'd')]
    pub dictionary: Option<Profile>,
    /// path to the config file
    #[argh(option, short = 'c')]
    pub config: Option<PathBuf>,
    /// print definitions without saving them
    #[argh(switch)]
    pub print_only: bool,
    /// search terms and commands
    #[argh(positional)]
    pub terms: Vec<String>,
}

/// A single positional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Empty the definitions file.
    Clear,
    /// Print the definitions file.
    List,
    /// Copy the definitions file to the clipboard and empty it.
    Cut,
    /// Look up a term.
    Term(String),
}

impl Token {
    /// Parses a positional argument, removing any whitespace from it.
    ///
    /// Returns `None` if nothing but whitespace is left.
    ///
    /// ```
    /// use jisho::cli::Token;
    ///
    /// assert_eq!(Token::parse(" 猫 "), Some(Token::Term("猫".to_string())));
    /// assert_eq!(Token::parse("list"), Some(Token::List));
    /// assert_eq!(Token::parse("　"), None);
    /// ```
    #[must_use]
    pub fn parse(arg: &str) -> Option<Token> {
        let term: String = arg.chars().filter(|c| !c.is_whitespace()).collect();

        match term.as_str() {
            "" => None,
            "clear" => Some(Token::Clear),
            "list" => Some(Token::List),
            "cut" => Some(Token::Cut),
            _ => Some(Token::Term(term)),
        }
    }
}

impl Opts {
    /// Returns the positional arguments as tokens, skipping blank ones.
    #[must_use]
    pub fn tokens(&self) -> Vec<Token> {
        self.terms.iter().filter_map(|arg| Token::parse(arg)).collect()
    }

    /// Returns the dictionary to use.
    ///
    /// `--wiki` takes precedence over `--dictionary`, which takes precedence over `default`.
    #[must_use]
    pub fn profile(&self, default: Profile) -> Profile {
        if self.wiki {
            Profile::Wikipedia
        } else {
            self.dictionary.unwrap_or(default)
        }
    }
}
