use crate::application::{App, AppMode};
use crate::domain::MatchTier;
use crate::infrastructure::SlotStorage;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

pub fn render_ui<S: SlotStorage>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_jobs(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);

    if app.mode == AppMode::Help {
        render_help_popup(f);
    }
}

fn render_header<S: SlotStorage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let header = Paragraph::new(format!(
        "HireConnect - Job Opportunities | Applications: {}",
        app.store.applied_count()
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn match_style(tier: MatchTier) -> Style {
    match tier {
        MatchTier::Strong => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        MatchTier::Good => Style::default().fg(Color::Yellow),
        MatchTier::Fair => Style::default(),
    }
}

fn render_jobs<S: SlotStorage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let jobs = app.filtered_jobs();

    let header_row = Row::new(
        ["", "Title", "Company", "Location", "Type", "Salary", "Match", "Status"]
            .map(|title| Cell::from(title).style(Style::default().fg(Color::Yellow))),
    )
    .height(1);

    let mut rows = vec![header_row];
    for (index, job) in jobs.iter().enumerate() {
        let applied = app.store.is_applied(job.id);
        let row_style = if index == app.selected {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };

        rows.push(
            Row::new(vec![
                Cell::from(if job.featured { "*" } else { " " }),
                Cell::from(job.title),
                Cell::from(job.company),
                Cell::from(job.location),
                Cell::from(job.job_type.label()),
                Cell::from(job.salary),
                Cell::from(format!("{}%", job.match_percent)).style(match_style(job.match_tier())),
                Cell::from(if applied { "Applied" } else { "" }).style(Style::default().fg(Color::Green)),
            ])
            .style(row_style)
            .height(1),
        );
    }

    let widths = [
        Constraint::Length(1),
        Constraint::Length(30),
        Constraint::Length(20),
        Constraint::Length(18),
        Constraint::Length(10),
        Constraint::Length(16),
        Constraint::Length(6),
        Constraint::Length(8),
    ];
    let title = format!("{} jobs found", jobs.len());
    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_status_bar<S: SlotStorage>(f: &mut Frame, app: &App<S>, area: Rect) {
    let input_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else if let Some(job) = app.selected_job() {
                format!("{} | Skills: {}", job.description, job.skills.join(", "))
            } else {
                "Enter/a: apply | /: search | ?: help | q: quit".to_string()
            }
        }
        AppMode::Search => format!("Search: {} (Enter to keep, Esc to clear)", app.search_query),
        AppMode::Help => "Esc/q: close help".to_string(),
    };

    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Search => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(input, area);
}

fn render_help_popup(f: &mut Frame) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_widget = Paragraph::new(HELP_TEXT)
        .block(Block::default()
            .borders(Borders::ALL)
            .title("HireConnect Help")
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

const HELP_TEXT: &str = r#"HIRECONNECT JOB BOARD

=== NAVIGATION ===
Up/Down or k/j  Move selection
Enter or a      Apply to the selected job
/               Search by title, company, or skill
?  or F1        Show this help
q               Quit

=== SEARCH ===
Type            Narrow the listing as you type
Backspace       Delete last character
Enter           Keep the filter and return to the listing
Esc             Clear the filter

=== APPLICATIONS ===
Applied jobs are remembered between sessions.
* marks featured postings. Match percentages are shown in green (90%+),
yellow (80%+), or plain."#;
