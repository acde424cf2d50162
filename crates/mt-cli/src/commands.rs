use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Register a new visitor and sign them in
    Register {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address (must not already be registered)
        #[arg(long)]
        email: String,
    },

    /// Sign in with an existing Trail ID (case-insensitive)
    Login {
        /// Trail ID, e.g. MT-7K3QXZ
        trail_id: String,
    },

    /// Sign out the current visitor
    Logout,

    /// Show the signed-in visitor, or null
    Whoami,

    /// Show the signed-in visitor's dashboard
    Dashboard,

    /// Mark a kiosk activity complete for the signed-in visitor
    Complete {
        /// Kiosk id, e.g. kiosk1-guess-the-era
        kiosk: String,
    },

    /// List every registered visitor
    Users,
}
