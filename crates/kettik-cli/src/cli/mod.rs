/*
[INPUT]:  Command-line arguments
[OUTPUT]: Parsed subcommands
[POS]:    CLI layer - command definitions
[UPDATE]: When adding or changing subcommands
*/

pub mod prompt;

use clap::Subcommand;
use rust_decimal::Decimal;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Sign in with a phone number and a one-time code
    Login {
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        code: Option<String>,
    },
    /// Ask the backend to send a verification code
    RequestCode {
        #[arg(long)]
        phone: String,
    },
    /// Exchange a verification code for a session
    VerifyCode {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        code: String,
    },
    /// Show the signed-in user's profile
    Profile,
    /// Change profile fields; omitted fields are left as they are
    UpdateProfile {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        middle_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        birth_date: Option<String>,
    },
    /// Show the account balance
    Balance,
    /// Add funds, optionally charging a saved card
    TopUp {
        #[arg(long)]
        amount: Decimal,
        /// Saved card id
        #[arg(long = "card")]
        card: Option<i64>,
    },
    /// List saved payment cards
    Cards,
    /// Start enrolling a new card
    AddCard,
    /// Make a saved card the default
    SetDefaultCard { id: i64 },
    /// Remove a saved card
    DeactivateCard {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Forget the stored session
    Logout,
    /// Show where the dashboard currently leads
    Status,
    /// Resolve a path through the route gate
    Open { path: String },
    /// Print the effective configuration as YAML
    Config,
}
