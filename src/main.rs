//! Cellgrid Demo Binary
//!
//! Run with: cargo run -- [options]
//!
//! Options:
//!   --theme <path>       Load a JSON theme (default: $CELLGRID_THEME)
//!   --headless <keys>    Run on an in-memory 80x24 screen fed by a JSON key
//!                        script, then print the final screen
//!
//! Logs go to stderr; set RUST_LOG to change the level.

use std::env;
use std::fs;
use std::time::Duration;

use chrono::NaiveDate;
use log::{info, warn};

use cellgrid::config::THEME_ENV;
use cellgrid::{
    AnsiScreen, ColumnHeader, DropDownMenu, Entry, HeaderRow, Key, MemoryScreen, ProgressBar,
    ResponseSet, RowHighlight, Screen, Table, TableRow, Theme, Widget, YesNo,
};

const HEADLESS_SIZE: (u16, u16) = (80, 24);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let mut theme_path = env::var(THEME_ENV).ok();
    let mut headless: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--theme" | "--headless" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: {} requires a path", args[i]);
                    std::process::exit(1);
                }
                if args[i] == "--theme" {
                    theme_path = Some(args[i + 1].clone());
                } else {
                    headless = Some(args[i + 1].clone());
                }
                i += 2;
            }
            "--help" | "-h" => {
                println!("Cellgrid demo v0.1.0");
                println!();
                println!("Usage: cellgrid-demo [options]");
                println!();
                println!("Options:");
                println!("  --theme <path>     Load a JSON theme (default: ${})", THEME_ENV);
                println!("  --headless <keys>  Replay a JSON key script on an in-memory screen");
                println!("  --help, -h         Show this help");
                println!();
                println!("Key script example:");
                println!(r#"  ["down", "enter", "left", "enter", {{"char": "y"}}]"#);
                std::process::exit(0);
            }
            arg => {
                warn!("Ignoring unknown argument {}", arg);
                i += 1;
            }
        }
    }

    let theme = match theme_path {
        Some(path) => Theme::load(path)?,
        None => Theme::default(),
    };
    theme.apply();

    match headless {
        Some(script) => {
            let keys: Vec<Key> = serde_json::from_str(&fs::read_to_string(&script)?)?;
            info!("Replaying {} keys from {}", keys.len(), script);

            let (cols, rows) = HEADLESS_SIZE;
            let mut screen = MemoryScreen::with_keys(cols, rows, keys);
            let outcome = run_demo(&mut screen, &theme);
            for line in screen.lines() {
                println!("{}", line.trim_end());
            }
            outcome?;
        }
        None => {
            crossterm::terminal::enable_raw_mode()?;
            let outcome = run_terminal(&theme);
            crossterm::terminal::disable_raw_mode()?;
            outcome?;
        }
    }

    Ok(())
}

fn run_terminal(theme: &Theme) -> cellgrid::Result<()> {
    let mut screen = AnsiScreen::stdio()?;
    screen.reset_colors()?;
    screen.clear()?;
    screen.show_cursor(false)?;

    let outcome = run_demo(&mut screen, theme);

    screen.reset_colors()?;
    screen.clear()?;
    screen.show_cursor(true)?;
    screen.flush()?;
    outcome
}

fn sample_rows() -> Vec<TableRow> {
    let day = |d| NaiveDate::from_ymd_opt(2024, 3, d).and_then(|d| d.and_hms_opt(9, 30, 0));
    vec![
        TableRow::new(vec![
            "alpha".into(),
            1024i64.into(),
            day(1).into(),
            Duration::from_secs(3_725).into(),
        ]),
        TableRow::new(vec![
            "beta".into(),
            (-7i64).into(),
            day(15).into(),
            Duration::from_millis(90_061_500).into(),
        ]),
        TableRow::new(vec!["gamma".into(), 3.25.into(), Entry::Absent, Entry::Absent]),
    ]
}

/// Table, progress bar, drop-down, message box and a yes/no prompt
fn run_demo(screen: &mut dyn Screen, theme: &Theme) -> cellgrid::Result<()> {
    let header = HeaderRow::new(vec![
        ColumnHeader::new("Name", 10),
        ColumnHeader::new("Size", 8),
        ColumnHeader::new("Modified", 21),
        ColumnHeader::new("Uptime", 16),
    ]);
    let rows = sample_rows();
    let names: Vec<String> = rows.iter().map(|r| r.entries[0].to_string()).collect();

    let mut table = Table::with_headers(2, 1, header, rows);
    table.set_scheme(theme.table_scheme());
    table.set_highlighted_row(Some(RowHighlight::Header))?;
    table.set_highlighted_column(Some(0))?;
    table.draw(screen)?;
    table.set_auto_draw(true);

    let mut bar = ProgressBar::new(0, 4, 2, 7, 30)?.with_auto_draw(true);
    for step in 0..=4 {
        bar.update(screen, |b| {
            b.set_value(step);
            Ok(())
        })?;
    }

    screen.write_at(2, 9, "Highlight row: ")?;
    let picked = DropDownMenu::new(names.iter().cloned()).show(screen)?;
    if let Some(index) = picked {
        table.update(screen, |t| t.set_highlighted_row(Some(RowHighlight::Body(index))))?;
    }

    let message = match picked {
        Some(index) => format!(
            "You picked \"{}\".\n\nKeep the highlight on this row? Cancel leaves the table untouched.",
            names[index]
        ),
        None => "Nothing was picked.".to_string(),
    };
    let answer = theme
        .message_box(ResponseSet::YesNoCancel)
        .with_title("Highlight")
        .show(screen, &message)?;
    info!("Message box answer: {:?}", answer);

    // The dialog painted over the table
    table.draw(screen)?;

    let (_, rows) = screen.size();
    screen.move_to(2, rows.saturating_sub(2))?;
    let again = YesNo::ask(screen, "Show the summary in the log?", Some(true))?;
    if again {
        info!("Picked {:?}, answered {:?}", picked.map(|i| &names[i]), answer);
    }
    Ok(())
}
