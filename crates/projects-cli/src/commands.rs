use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List all projects
    List,
    /// Get a project by ID
    Get {
        /// Project ID (UUID)
        id: String,
    },
    /// Create a project
    Create {
        /// Project name
        #[arg(long)]
        name: String,
        /// Project description
        #[arg(long)]
        description: String,
        /// Comma-separated skill list
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,
        /// Team size (1-5)
        #[arg(long)]
        members: i64,
        /// Create the project as inactive
        #[arg(long)]
        inactive: bool,
    },
    /// Update fields on a project (absent flags leave fields untouched)
    Update {
        /// Project ID (UUID)
        id: String,
        /// New project name
        #[arg(long)]
        name: Option<String>,
        /// New project description
        #[arg(long)]
        description: Option<String>,
        /// Replacement comma-separated skill list
        #[arg(long, value_delimiter = ',')]
        skills: Option<Vec<String>>,
        /// New team size (1-5)
        #[arg(long)]
        members: Option<i64>,
        /// New active flag
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a project
    Delete {
        /// Project ID (UUID)
        id: String,
    },
    /// Search projects by name or description
    Search {
        /// Substring to match (case-insensitive); empty returns everything
        query: String,
    },
}
