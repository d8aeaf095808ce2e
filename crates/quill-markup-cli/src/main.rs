mod app;
mod render;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use quill_markup_config::Config;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env,
    fs::OpenOptions,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

use app::App;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <markdown-file>", args[0]);
        process::exit(1);
    }
    let path = PathBuf::from(&args[1]);

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", config_path.display());
            process::exit(1);
        }
    };

    // The terminal is in raw mode, so logs only go to a file.
    if let Some(log_file) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("Failed to open log file {}", log_file.display()))?;
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }

    log::info!("quill-markup starting up!");
    log::info!("Config path: {}", config_path.display());

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut app = App::new(path, &text, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    // Remember the light/dark choice for the next session.
    if app.mode != config.theme {
        let updated = Config {
            theme: app.mode,
            ..config
        };
        match updated.save() {
            Ok(()) => log::info!("Saved {:?} mode to {}", app.mode, config_path.display()),
            Err(e) => log::warn!("Failed to save theme to {}: {e}", config_path.display()),
        }
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                KeyCode::Char('f') => app.fold_at_cursor(),
                KeyCode::Enter => app.activate_cursor(),
                KeyCode::Char('u') => app.unfold_at_cursor(),
                KeyCode::Char('t') => app.toggle_all(),
                KeyCode::Char('m') => app.toggle_mode(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    // Borders take two rows.
    app.set_height(chunks[0].height.saturating_sub(2) as usize);

    let rows = app.rows();
    let decorations = app.view.decorations();
    let content: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(app.height)
        .map(|(i, row)| {
            let line = render::render_row(&app.rope, *row, decorations, &app.styles);
            if i == app.cursor {
                line.patch_style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                line
            }
        })
        .collect();

    let title = format!("{} ({:?})", app.path.display(), app.mode);
    let document =
        Paragraph::new(content).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(document, chunks[0]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("j/k: Move | "),
        Span::raw("f/Enter: Fold | u: Unfold | t: Toggle all | m: Light/Dark"),
        Span::styled(
            if app.status.is_empty() {
                String::new()
            } else {
                format!("  [{}]", app.status)
            },
            Style::default().fg(Color::Yellow),
        ),
    ]);
    f.render_widget(Paragraph::new(help_text), chunks[1]);
}
