use std::sync::Arc;

use anyhow::{Context, Result};
use fileshelf_core::client::{PortalClient, PortalConfig};
use fileshelf_core::session::EnvSession;
use fileshelf_core::view::FileListView;
use fileshelf_core::window::NamedFilter;
use serde::Serialize;

use crate::cli::{Commands, ListArgs};

mod browse;

#[cfg(test)]
mod tests;

pub(crate) fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Ls(args) => run_ls(&args),
        Commands::Filters => {
            let labels: Vec<&str> = NamedFilter::ALL.iter().map(|f| f.label()).collect();
            print_json(&labels)
        }
        Commands::Browse(args) => browse::run(&args),
    }
}

fn run_ls(args: &ListArgs) -> Result<()> {
    let client = portal_client()?;
    let outcome = client
        .fetch_all_files()
        .context("failed to fetch /files/all")?;
    if outcome.skipped_records > 0 {
        eprintln!(
            "warning: skipped {} malformed record(s) in the response",
            outcome.skipped_records
        );
    }

    let mut view = FileListView::mount(Arc::new(EnvSession));
    view.apply_fetch(outcome);
    match args.as_of {
        Some(today) => view.set_filter_as_of(args.filter, today),
        None => view.set_filter(args.filter),
    }
    view.set_query(args.query.clone());
    if args.page > 1 && !view.request_page(args.page) {
        eprintln!("warning: page {} is out of range, showing the nearest valid page", args.page);
    }

    let page = view.page();
    view.unmount();
    print_json(&page)
}

pub(super) fn portal_client() -> Result<PortalClient> {
    PortalClient::new(PortalConfig::from_env(), Arc::new(EnvSession))
        .context("failed to build portal client")
}

pub(super) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
