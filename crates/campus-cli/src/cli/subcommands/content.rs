use clap::Subcommand;

/// News commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NewsCommands {
    /// Add a news item.
    Add { content: String },
    /// Replace a news item's text.
    Update { id: String, content: String },
    /// Delete a news item.
    Delete { id: String },
    /// List news, newest first.
    List,
}

/// Newsletter commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NewsletterCommands {
    /// Subscribe an email address.
    Subscribe { email: String },
    /// List subscriptions.
    List,
}
