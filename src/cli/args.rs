//! Command-line argument parsing for the chitchat CLI.

/// List parameters given on the command line. `None` keeps whatever the
/// query state already holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// List posts (default)
    List(ListOptions),
    /// Toggle a like, then list
    Like { id: String, list: ListOptions },
    /// Delete a post, then list
    Delete { id: String, list: ListOptions },
    /// Show a single post
    ShowPost(String),
    /// List the tag catalog
    Tags,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid value {value:?} for {flag}: expected a positive number")]
    InvalidNumber { flag: String, value: String },
    #[error("unknown argument: {0}")]
    Unknown(String),
}

pub const USAGE: &str = "\
Usage: chitchat [OPTIONS]

Options:
  --page N        Page to show (default 1)
  --limit N       Posts per page (default 9)
  --search Q      Search posts instead of paging
  --like ID       Toggle your like on a post, then list
  --delete ID     Delete a post, then list
  --post ID       Show a single post
  --tags          List available tags
  -V, --version   Print version
  -h, --help      Print this help

Environment:
  CHITCHAT_API_URL, CHITCHAT_DEV, CHITCHAT_TOKEN, CHITCHAT_USER_ID,
  CHITCHAT_USER_ROLE, CHITCHAT_TIMEOUT_SECS, CHITCHAT_PUBLIC_FILTER,
  CHITCHAT_LOG
";

/// Parse command-line arguments into a command.
///
/// `--version` and `--help` win wherever they appear.
///
/// ```
/// use chitchat::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["chitchat".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let args: Vec<String> = args.skip(1).collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        return Ok(CliCommand::Version);
    }
    if args.iter().any(|a| a == "--help" || a == "-h") {
        return Ok(CliCommand::Help);
    }

    let mut list = ListOptions::default();
    let mut like = None;
    let mut delete = None;
    let mut post = None;
    let mut tags = false;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--page" => list.page = Some(number(&arg, iter.next())?),
            "--limit" => list.limit = Some(number(&arg, iter.next())?),
            "--search" => list.search = Some(value(&arg, iter.next())?),
            "--like" => like = Some(value(&arg, iter.next())?),
            "--delete" => delete = Some(value(&arg, iter.next())?),
            "--post" => post = Some(value(&arg, iter.next())?),
            "--tags" => tags = true,
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }

    Ok(if tags {
        CliCommand::Tags
    } else if let Some(id) = post {
        CliCommand::ShowPost(id)
    } else if let Some(id) = like {
        CliCommand::Like { id, list }
    } else if let Some(id) = delete {
        CliCommand::Delete { id, list }
    } else {
        CliCommand::List(list)
    })
}

fn value(flag: &str, next: Option<String>) -> Result<String, ArgsError> {
    next.ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}

fn number(flag: &str, next: Option<String>) -> Result<u32, ArgsError> {
    let raw = value(flag, next)?;
    raw.parse::<u32>()
        .ok()
        .filter(|n| *n >= 1)
        .ok_or(ArgsError::InvalidNumber {
            flag: flag.to_string(),
            value: raw,
        })
}
