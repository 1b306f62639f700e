//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Fill in the form interactively (default)
    Interactive,
    /// Explain one project: free text wins over --pick
    Explain {
        /// Project name, e.g. "Uniswap"
        name: Option<String>,
        /// Preset to use when no name is given (index or label, see `list`)
        #[arg(short, long, value_name = "PRESET")]
        pick: Option<String>,
    },
    /// Explain a random preset
    Surprise,
    /// Show the preset catalog
    List,
}

/// What the program should do once arguments are parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Interactive,
    Explain { name: String, pick: Option<String> },
    Surprise,
    List,
}

impl Action {
    /// Whether the action talks to the completion service
    pub(crate) fn needs_client(&self) -> bool {
        !matches!(self, Action::List)
    }
}

impl From<Option<Commands>> for Action {
    fn from(cmd: Option<Commands>) -> Self {
        match cmd {
            None | Some(Commands::Interactive) => Action::Interactive,
            Some(Commands::Explain { name, pick }) => Action::Explain {
                name: name.unwrap_or_default(),
                pick,
            },
            Some(Commands::Surprise) => Action::Surprise,
            Some(Commands::List) => Action::List,
        }
    }
}
