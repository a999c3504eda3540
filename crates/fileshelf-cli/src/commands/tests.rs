use fileshelf_core::highlight::Segment;
use fileshelf_core::models::{PageView, RecordRow};
use fileshelf_core::window::NamedFilter;

use super::browse::{BrowseCommand, parse_command, render_page};

fn plain(content: &str) -> Segment {
    Segment {
        content: content.to_string(),
        is_match: false,
    }
}

fn matched(content: &str) -> Segment {
    Segment {
        content: content.to_string(),
        is_match: true,
    }
}

fn page_with_rows(rows: Vec<RecordRow>, current: usize, total: usize, count: usize) -> PageView {
    PageView {
        rows,
        current_page: current,
        total_pages: total,
        filtered_count: count,
        has_prev: current > 1,
        has_next: current < total,
        loading: false,
    }
}

#[test]
fn parse_command_recognizes_the_slash_commands() {
    assert_eq!(parse_command("quit"), BrowseCommand::Quit);
    assert_eq!(parse_command("/clear"), BrowseCommand::Clear);
    assert_eq!(parse_command("/next"), BrowseCommand::Next);
    assert_eq!(parse_command("/prev"), BrowseCommand::Prev);
    assert_eq!(parse_command("/page 3"), BrowseCommand::Page(3));
    assert_eq!(
        parse_command("/filter this-week"),
        BrowseCommand::Filter(NamedFilter::ThisWeek)
    );
}

#[test]
fn parse_command_treats_anything_else_as_a_query() {
    assert_eq!(
        parse_command("budget 2023"),
        BrowseCommand::Query("budget 2023".to_string())
    );
}

#[test]
fn parse_command_reports_bad_filter_and_page_arguments() {
    assert!(matches!(parse_command("/filter fortnight"), BrowseCommand::Invalid(_)));
    assert!(matches!(parse_command("/page many"), BrowseCommand::Invalid(_)));
}

#[test]
fn render_page_shows_loading_and_empty_states() {
    let mut page = page_with_rows(Vec::new(), 1, 0, 0);
    page.loading = true;
    assert_eq!(render_page(&page, false), "Loading files...");

    page.loading = false;
    assert_eq!(render_page(&page, false), "No files found.");
}

#[test]
fn render_page_lists_rows_with_serials_and_nav_state() {
    let row = RecordRow {
        id: 10000001,
        serial: 11,
        title: vec![plain("Quarterly "), matched("Bud"), plain("get")],
        owner: vec![plain("Ada Byron")],
        created: "01/06/2024".to_string(),
        file_path: "uploads/10000001".to_string(),
    };
    let rendered = render_page(&page_with_rows(vec![row], 2, 3, 25), false);
    assert!(rendered.contains("page 2/3"));
    assert!(rendered.contains("  11. Quarterly Budget | Ada Byron | 01/06/2024"));
    assert!(rendered.contains("[Prev]"));
    assert!(rendered.contains("[Next]"));
}

#[test]
fn render_page_wraps_matches_in_highlight_codes_when_colored() {
    let row = RecordRow {
        id: 1,
        serial: 1,
        title: vec![matched("Notes")],
        owner: vec![plain("Grace Hopper")],
        created: "N/A".to_string(),
        file_path: "uploads/1".to_string(),
    };
    let rendered = render_page(&page_with_rows(vec![row], 1, 1, 1), true);
    assert!(rendered.contains("\x1b[43mNotes\x1b[0m"));
}
