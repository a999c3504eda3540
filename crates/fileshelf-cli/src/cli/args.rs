use chrono::NaiveDate;
use clap::Args;
use fileshelf_core::NamedFilter;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Temporal filter token (`all`, `today`, `this-week`, `last-month`, ...).
    #[arg(long, default_value = "all")]
    pub filter: NamedFilter,
    /// Free-text search over file title and owner name.
    #[arg(long, default_value = "")]
    pub query: String,
    /// 1-based page of the filtered listing.
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Pin "today" (YYYY-MM-DD) so window resolution is reproducible.
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Pin "today" (YYYY-MM-DD) so window resolution is reproducible.
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}
