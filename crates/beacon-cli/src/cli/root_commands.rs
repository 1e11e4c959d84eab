use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List every company in the directory.
    List,
    /// Ask the backend for companies matching a free-text query.
    Search(SearchArgs),
    /// Add a company, then show the refreshed directory.
    Add(AddArgs),
    /// Delete a company by id, then show the refreshed directory.
    Delete(DeleteArgs),
    /// Interactive session: search, list, add and delete from one prompt.
    Shell,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Query words, joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

impl SearchArgs {
    #[must_use]
    pub fn text(&self) -> String {
        self.query.join(" ")
    }
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub industry: String,
    #[arg(long, default_value = "")]
    pub size: String,
    #[arg(long, default_value = "")]
    pub location: String,
}

impl AddArgs {
    #[must_use]
    pub fn draft(&self) -> beacon_core::CompanyDraft {
        beacon_core::CompanyDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            industry: self.industry.clone(),
            size: self.size.clone(),
            location: self.location.clone(),
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    /// Company id as shown by `bcn list`.
    pub id: String,
}
