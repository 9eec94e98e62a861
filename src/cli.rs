use clap::{ArgAction, Parser};

// Values are taken verbatim, even when they start with a hyphen, and each
// short flag is also accepted as a one-letter long flag (`--i Task`) the way
// go-jira templates sometimes spell them.
#[derive(Clone, Debug, Parser)]
#[command(name = "jqlb", author, version, about)]
pub(crate) struct Cli {
    /// Project key to search in.
    ///
    /// Falls back to the JIRA_PROJECT environment variable when the flag is
    /// not given.
    #[clap(
        short,
        long,
        alias = "p",
        env = "JIRA_PROJECT",
        help = "Project to search in",
        value_name = "KEY",
        allow_hyphen_values = true
    )]
    pub project: Option<String>,

    #[clap(
        short = 'i',
        long = "type",
        alias = "i",
        help = "Issue type to search for",
        value_name = "TYPE",
        allow_hyphen_values = true
    )]
    pub issue_type: Option<String>,

    #[clap(
        short,
        long,
        alias = "c",
        help = "Component to search for",
        allow_hyphen_values = true
    )]
    pub component: Option<String>,

    /// Filter on issue status.
    ///
    /// Giving a status of Closed or Resoved also disables the default
    /// exclusion of resolved and closed issues.
    #[clap(
        short = 'S',
        long,
        visible_alias = "state",
        alias = "S",
        help = "Filter on issue status",
        allow_hyphen_values = true
    )]
    pub status: Option<String>,

    #[clap(
        short,
        long,
        alias = "a",
        help = "User assigned the issue",
        value_name = "USER",
        allow_hyphen_values = true
    )]
    pub assignee: Option<String>,

    #[clap(
        short,
        long,
        alias = "r",
        help = "Filter on issue resolution",
        allow_hyphen_values = true
    )]
    pub resolution: Option<String>,

    /// Include resolved and closed issues.
    ///
    /// By default the query appends `status!=Closed AND status!=Resoved`.
    #[clap(
        short = 'E',
        long,
        alias = "E",
        help = "Include resolved and closed issues",
        action = ArgAction::SetTrue,
    )]
    pub enable_resolved_or_closed: bool,
}
