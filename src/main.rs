//! Marquee - a terminal-based film catalogue browser.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use marquee::app::{App, Command};
use marquee::query::SortKey;
use marquee::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "A terminal-based film catalogue browser", long_about = None)]
struct Args {
    /// URL or path of the films JSON document
    #[arg(default_value = "films.json")]
    source: String,

    /// Initial sort order: box_office_desc, box_office_asc, year_desc,
    /// year_asc, title_asc or title_desc
    #[arg(long, default_value = "box_office_desc")]
    sort: String,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Marquee");
    }

    // Validate local sources before touching the terminal
    let is_url = args.source.starts_with("http://") || args.source.starts_with("https://");
    if !is_url && !Path::new(&args.source).exists() {
        eprintln!("Error: Source not found: {}", args.source);
        std::process::exit(1);
    }

    // The dataset is loaded exactly once; a failure is shown in the UI
    // rather than retried.
    let mut app = App::new(args.source, SortKey::parse(&args.sort));
    app.load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Marquee exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Search mode - handle separately
                if app.search.is_editing() {
                    match key.code {
                        KeyCode::Enter => {
                            app.search.submit();
                            app.dispatch(Command::SearchSubmitted);
                        }
                        KeyCode::Esc => app.search.cancel(),
                        KeyCode::Backspace => app.search.backspace(),
                        KeyCode::Char(c) => app.search.input(c),
                        _ => {}
                    }
                    continue;
                }

                // Normal mode
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Search
                    (KeyModifiers::NONE, KeyCode::Char('/')) => {
                        app.search.start();
                    }

                    // Filters
                    (KeyModifiers::NONE, KeyCode::Char('y')) => app.cycle_year(true),
                    (KeyModifiers::SHIFT, KeyCode::Char('Y')) => app.cycle_year(false),
                    (KeyModifiers::NONE, KeyCode::Char('c')) => app.cycle_country(true),
                    (KeyModifiers::SHIFT, KeyCode::Char('C')) => app.cycle_country(false),
                    (KeyModifiers::NONE, KeyCode::Char('s')) => app.cycle_sort(true),
                    (KeyModifiers::SHIFT, KeyCode::Char('S')) => app.cycle_sort(false),
                    (KeyModifiers::NONE, KeyCode::Char('r')) => app.reset_criteria(),

                    // Paging
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l'))
                    | (KeyModifiers::NONE, KeyCode::Char('n')) => {
                        app.dispatch(Command::PageNext);
                    }
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h'))
                    | (KeyModifiers::NONE, KeyCode::Char('p')) => {
                        app.dispatch(Command::PagePrev);
                    }

                    // Theme
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),

                    // Help
                    (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                        app.status = "Help: q=quit, /=search, y/c/s=filters, h/l=page, r=reset, T=theme".to_string();
                    }

                    _ => {}
                }
            }
        }
    }
}
