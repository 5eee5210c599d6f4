use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign out and clear the stored session
    Logout,

    /// Show the current session
    Whoami,

    /// Open a page by path (e.g. /, /video/3, /profile)
    Open { path: String },

    /// List catalog videos
    Videos {
        /// Newest uploads first
        #[arg(long, conflicts_with = "trending")]
        recent: Option<usize>,

        /// Most viewed first
        #[arg(long)]
        trending: Option<usize>,
    },
}
