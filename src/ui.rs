// 🖥 Demo Page - Terminal rendition of the landing page
// Maps the logical pixel space onto terminal cells (8px per column, 20px
// per row, so a 96-column terminal sits exactly at the 768px breakpoint)
// and feeds key/resize input to the controller as page events.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pagemotion::{
    HeaderMode, PageController, PageDocument, PageEvent, Rect, Tuning, Viewport, ACTIVE_CLASS,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect as TermRect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

pub const COL_PX: f64 = 8.0;
pub const ROW_PX: f64 = 20.0;

const SCROLL_STEP: f64 = 40.0;

// ============================================================================
// DEMO PAGE CONTENT
// ============================================================================

/// Build the landing page the script was written for: hero, feature and
/// course cards, a stats strip, resources, contact.
pub fn demo_page(viewport: Viewport) -> PageDocument {
    let mut doc = PageDocument::new(viewport, 60.0);

    doc.add_link("Home", "#home");
    doc.add_link("Features", "#features");
    doc.add_link("Courses", "#courses");
    doc.add_link("Stats", "#stats");
    doc.add_link("Resources", "#resources");
    doc.add_link("Contact", "#contact");

    let home = doc.add_section("home", Rect::new(0.0, 600.0));
    doc.add_hero(
        home,
        "Learn to Code, Build the Future",
        "Interactive courses from first steps to production systems",
        "[ Get Started ]   [ Browse Courses ]",
    );

    let features = doc.add_section("features", Rect::new(600.0, 800.0));
    doc.add_card(features, "Hands-on projects from day one", Rect::new(700.0, 120.0));
    doc.add_card(features, "Mentor feedback on every exercise", Rect::new(880.0, 120.0));
    doc.add_card(features, "A curriculum that tracks real tooling", Rect::new(1060.0, 120.0));

    let courses = doc.add_section("courses", Rect::new(1400.0, 800.0));
    doc.add_card(courses, "Foundations: terminals, git, first programs", Rect::new(1500.0, 120.0));
    doc.add_card(courses, "Backend: services, queues, databases", Rect::new(1680.0, 120.0));
    doc.add_card(courses, "Systems: memory, concurrency, performance", Rect::new(1860.0, 120.0));

    let stats_section = doc.add_section("stats", Rect::new(2200.0, 400.0));
    let stats = doc.add_stats(stats_section, Rect::new(2280.0, 240.0));
    doc.add_counter(stats, "500+");
    doc.add_counter(stats, "12000+");
    doc.add_counter(stats, "95%");
    doc.add_counter(stats, "40+");

    let resources = doc.add_section("resources", Rect::new(2600.0, 600.0));
    doc.add_card(resources, "Cheat sheets and setup guides", Rect::new(2700.0, 120.0));
    doc.add_card(resources, "Community forum and study groups", Rect::new(2880.0, 120.0));

    doc.add_section("contact", Rect::new(3200.0, 400.0));

    doc.set_document_height(3600.0);
    doc
}

// ============================================================================
// EVENT LOOP
// ============================================================================

pub fn run_ui(app: &mut PageController) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut PageController,
) -> io::Result<()> {
    let tick = Duration::from_millis(Tuning::default().counter_period_ms);

    app.handle(PageEvent::ContentReady, Instant::now());
    app.handle(PageEvent::Loaded, Instant::now());

    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui(f, app))?;

        if !event::poll(tick)? {
            continue;
        }

        let now = Instant::now();
        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('m') => {
                    app.handle(PageEvent::Click(app.document().menu_toggle()), now);
                }
                KeyCode::Char('o') => {
                    // Click somewhere on the page body, outside the nav
                    let section = app.document().sections()[0];
                    app.handle(PageEvent::Click(section), now);
                }
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    if let Some(&link) = app.document().link_items().get(index) {
                        app.handle(PageEvent::Click(link), now);
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => scroll_by(app, SCROLL_STEP, now),
                KeyCode::Up | KeyCode::Char('k') => scroll_by(app, -SCROLL_STEP, now),
                KeyCode::PageDown => {
                    scroll_by(app, app.document().viewport.height, now)
                }
                KeyCode::PageUp => {
                    scroll_by(app, -app.document().viewport.height, now)
                }
                KeyCode::Home => app.handle(PageEvent::Scroll(0.0), now),
                KeyCode::End => {
                    app.handle(PageEvent::Scroll(app.document().max_scroll()), now)
                }
                _ => {}
            },
            Event::Resize(cols, rows) => {
                app.handle(
                    PageEvent::Resize {
                        width: cols as f64 * COL_PX,
                        height: rows.saturating_sub(6) as f64 * ROW_PX,
                    },
                    now,
                );
            }
            _ => {}
        }
    }
}

fn scroll_by(app: &mut PageController, delta: f64, now: Instant) {
    // The menu overlay locks page scroll, like body{overflow:hidden}
    if app.document().element(app.document().body()).style.overflow_hidden {
        return;
    }
    let top = (app.document().scroll_top + delta).max(0.0);
    app.handle(PageEvent::Scroll(top), now);
}

// ============================================================================
// RENDERING
// ============================================================================

fn ui(f: &mut Frame, app: &PageController) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Page content
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_content(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);

    if app.menu_is_open() {
        render_menu_overlay(f, chunks[1], app);
    }
}

fn render_header(f: &mut Frame, area: TermRect, app: &PageController) {
    let doc = app.document();
    let elevated = matches!(header_mode_of(doc), HeaderMode::Elevated);

    let mut spans = vec![Span::styled(
        " DevPath ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, &link) in doc.link_items().iter().enumerate() {
        spans.push(Span::raw(if i == 0 { " │ " } else { "  " }));
        let el = doc.element(link);
        let style = if doc.has_class(link, ACTIVE_CLASS) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{}.{}", i + 1, el.text), style));
    }

    let border = if elevated { Color::White } else { Color::DarkGray };
    let title = if elevated { " header: elevated " } else { " header: flat " };

    let header = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title),
    );

    f.render_widget(header, area);
}

/// Header mode read back off the applied inline style, so the demo shows
/// exactly what the tracker wrote.
fn header_mode_of(doc: &PageDocument) -> HeaderMode {
    if doc.element(doc.header()).style.box_shadow.is_some() {
        HeaderMode::Elevated
    } else {
        HeaderMode::Flat
    }
}

fn render_content(f: &mut Frame, area: TermRect, app: &PageController) {
    let doc = app.document();
    let total_rows = (doc.document_height() / ROW_PX).ceil() as usize;
    let mut rows: Vec<Vec<Span>> = vec![Vec::new(); total_rows.max(1)];

    let place = |rows: &mut Vec<Vec<Span>>, top: f64, span: Span<'static>| {
        let row = (top / ROW_PX) as usize;
        if let Some(line) = rows.get_mut(row) {
            if !line.is_empty() {
                line.push(Span::raw("   "));
            }
            line.push(span);
        }
    };

    for &section in doc.sections() {
        let el = doc.element(section);
        if let Some(anchor) = &el.anchor {
            place(
                &mut rows,
                el.rect.top,
                Span::styled(
                    format!("── {} {}", anchor, "─".repeat(40)),
                    Style::default().fg(Color::Cyan),
                ),
            );
        }
    }

    // Hero sub-elements share the section rect; stack them below its top
    let hero = [doc.hero_title(), doc.hero_subtitle(), doc.hero_actions()];
    for (i, id) in hero.into_iter().flatten().enumerate() {
        let el = doc.element(id);
        let offset = (3 + 2 * i) as f64;
        place(
            &mut rows,
            el.rect.top + offset * ROW_PX,
            styled_by_opacity(el.text.clone(), el.style.opacity, Color::White, i == 0),
        );
    }

    for &card in doc.cards() {
        let el = doc.element(card);
        place(
            &mut rows,
            el.rect.top,
            styled_by_opacity(format!("▢ {}", el.text), el.style.opacity, Color::White, false),
        );
    }

    if let Some(stats) = doc.stats() {
        let top = doc.element(stats).rect.top;
        for &counter in doc.counters() {
            place(
                &mut rows,
                top,
                Span::styled(
                    doc.element(counter).text.clone(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            );
        }
    }

    let first = (doc.scroll_top / ROW_PX) as usize;
    let visible = rows
        .into_iter()
        .skip(first)
        .take(area.height.saturating_sub(2) as usize)
        .map(Line::from)
        .collect::<Vec<_>>();

    let content = Paragraph::new(visible).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Page "),
    );
    f.render_widget(content, area);
}

fn styled_by_opacity(text: String, opacity: Option<f64>, color: Color, bold: bool) -> Span<'static> {
    let mut style = match opacity {
        Some(o) if o < 0.5 => Style::default().fg(Color::Black),
        Some(_) => Style::default().fg(color),
        None => Style::default().fg(color),
    };
    if bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    Span::styled(text, style)
}

fn render_menu_overlay(f: &mut Frame, area: TermRect, app: &PageController) {
    let doc = app.document();

    let width = 36.min(area.width);
    let height = (doc.link_items().len() as u16 + 4).min(area.height);
    let overlay = TermRect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let mut lines = vec![Line::from("")];
    for (i, &link) in doc.link_items().iter().enumerate() {
        let el = doc.element(link);
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{}", i + 1),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(". "),
            Span::styled(
                el.text.clone(),
                if doc.has_class(link, ACTIVE_CLASS) {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                },
            ),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Menu (scroll locked) "),
    );

    f.render_widget(Clear, overlay);
    f.render_widget(panel, overlay);
}

fn render_status_bar(f: &mut Frame, area: TermRect, app: &PageController) {
    let doc = app.document();

    let mut spans = vec![Span::styled(
        format!(
            " Scroll: {:.0}/{:.0}px ",
            doc.scroll_top,
            doc.max_scroll()
        ),
        Style::default().fg(Color::Cyan),
    )];

    if app.is_scrolling() {
        spans.push(Span::styled("~ gliding ", Style::default().fg(Color::Green)));
    }

    spans.push(Span::raw("| "));
    spans.push(Span::styled("m", Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(" Menu | "));
    spans.push(Span::styled("1-6", Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(" Links | "));
    spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(" Scroll | "));
    spans.push(Span::styled("PgUp/PgDn", Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(" Fast | "));
    spans.push(Span::styled("o", Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(" Click page | "));
    spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}
