//! Interactive listing loop: the terminal stand-in for the portal's table
//! view. Free text narrows the listing, slash commands drive filter and
//! pagination, and the prompt shows the live placeholder animation.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use fileshelf_core::highlight::Segment;
use fileshelf_core::models::PageView;
use fileshelf_core::session::EnvSession;
use fileshelf_core::view::FileListView;
use fileshelf_core::window::NamedFilter;

use crate::cli::BrowseArgs;

use super::portal_client;

const HIGHLIGHT_ON: &str = "\x1b[43m";
const HIGHLIGHT_OFF: &str = "\x1b[0m";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum BrowseCommand {
    Quit,
    Help,
    Clear,
    Next,
    Prev,
    Page(usize),
    Filter(NamedFilter),
    Query(String),
    Invalid(String),
}

pub(super) fn run(args: &BrowseArgs) -> Result<()> {
    let client = portal_client()?;
    let mut view = FileListView::mount(Arc::new(EnvSession));

    match client.fetch_all_files() {
        Ok(outcome) => {
            if outcome.skipped_records > 0 {
                eprintln!(
                    "warning: skipped {} malformed record(s) in the response",
                    outcome.skipped_records
                );
            }
            view.apply_fetch(outcome);
        }
        Err(err) => view.fetch_failed(&err),
    }
    if let Some(payload) = view.last_error() {
        eprintln!("fetch failed [{}]: {}", payload.code, payload.message);
    }

    println!("{}", render_page(&view.page(), true));
    println!("type to search; /filter <token>, /page <n>, /next, /prev, /clear, quit");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("search ({})> ", view.placeholder());
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(line.trim()) {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                println!("/filter <token>, /page <n>, /next, /prev, /clear, quit");
                continue;
            }
            BrowseCommand::Clear => view.set_query(""),
            BrowseCommand::Query(query) => view.set_query(query),
            BrowseCommand::Filter(filter) => match args.as_of {
                Some(today) => view.set_filter_as_of(filter, today),
                None => view.set_filter(filter),
            },
            BrowseCommand::Page(page) => {
                if !view.request_page(page) {
                    println!("page {page} is out of range");
                    continue;
                }
            }
            BrowseCommand::Next => {
                let current = view.page().current_page;
                if !view.request_page(current + 1) {
                    println!("already on the last page");
                    continue;
                }
            }
            BrowseCommand::Prev => {
                let current = view.page().current_page;
                if current <= 1 || !view.request_page(current - 1) {
                    println!("already on the first page");
                    continue;
                }
            }
            BrowseCommand::Invalid(message) => {
                println!("{message}");
                continue;
            }
        }

        println!("{}", render_page(&view.page(), true));
    }

    view.unmount();
    Ok(())
}

pub(super) fn parse_command(input: &str) -> BrowseCommand {
    match input {
        "quit" | "exit" => return BrowseCommand::Quit,
        "/help" | "help" => return BrowseCommand::Help,
        "/clear" => return BrowseCommand::Clear,
        "/next" => return BrowseCommand::Next,
        "/prev" => return BrowseCommand::Prev,
        _ => {}
    }
    if let Some(rest) = input.strip_prefix("/filter") {
        return match NamedFilter::from_str(rest.trim()) {
            Ok(filter) => BrowseCommand::Filter(filter),
            Err(err) => BrowseCommand::Invalid(err.to_string()),
        };
    }
    if let Some(rest) = input.strip_prefix("/page") {
        return match rest.trim().parse::<usize>() {
            Ok(page) => BrowseCommand::Page(page),
            Err(_) => BrowseCommand::Invalid(format!("not a page number: {}", rest.trim())),
        };
    }
    BrowseCommand::Query(input.to_string())
}

pub(super) fn render_page(page: &PageView, color: bool) -> String {
    if page.loading {
        return "Loading files...".to_string();
    }
    if page.rows.is_empty() {
        return "No files found.".to_string();
    }

    let mut out = format!(
        "Uploaded Files | page {}/{} | {} record(s)\n",
        page.current_page, page.total_pages, page.filtered_count
    );
    for row in &page.rows {
        out.push_str(&format!(
            "{:>4}. {} | {} | {}\n",
            row.serial,
            render_segments(&row.title, color),
            render_segments(&row.owner, color),
            row.created,
        ));
    }
    let prev = if page.has_prev { "[Prev]" } else { " Prev " };
    let next = if page.has_next { "[Next]" } else { " Next " };
    out.push_str(&format!("{prev} {} {next}", page.current_page));
    out
}

fn render_segments(segments: &[Segment], color: bool) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.is_match && color {
            out.push_str(HIGHLIGHT_ON);
            out.push_str(&segment.content);
            out.push_str(HIGHLIGHT_OFF);
        } else {
            out.push_str(&segment.content);
        }
    }
    out
}
