//! Terminal front end for the memo list screen and theme picker.
//!
//! # Responsibility
//! - Map subcommands onto the headless screen controllers.
//! - Resolve the database location and bootstrap logging.
//!
//! # Invariants
//! - All persistence goes through `colormemo_core`; no SQL lives here.
//! - Storage errors are reported on stderr with a non-zero exit, never a
//!   panic.

use clap::{Parser, Subcommand};
use colormemo_core::db::open_db;
use colormemo_core::{
    default_log_level, init_logging, ListScreen, MemoService, Navigation, NavigationChrome,
    PickerChoice, SettingsRepository, SqliteMemoRepository, SqliteSettingsRepository, ThemeColor,
    ThemePickerFlow,
};
use directories::ProjectDirs;
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "colormemo", version, about = "Color-themed memo list")]
struct Cli {
    /// Path to the memo database (defaults to the platform data directory).
    #[arg(long)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the memo list.
    List,
    /// Create a new memo.
    Add { text: String },
    /// Print one memo in full.
    Show { row: usize },
    /// Replace the text of an existing memo.
    Edit { row: usize, text: String },
    /// Delete one memo.
    Delete { row: usize },
    /// Apply a theme color, or list the available ones.
    Theme { name: Option<String> },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let dirs = ProjectDirs::from("dev", "colormemo", "ColorMemo")
        .ok_or("could not resolve a platform data directory")?;

    let log_dir = dirs.data_dir().join("logs");
    if let Some(log_dir) = log_dir.to_str() {
        // Logging is best-effort for the CLI; a read-only home must not
        // block memo access.
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let db_path = match cli.db {
        Some(path) => path,
        None => {
            std::fs::create_dir_all(dirs.data_dir())?;
            dirs.data_dir().join("colormemo.db")
        }
    };
    let mut conn = open_db(&db_path)?;
    info!(
        "event=cli_start module=cli status=ok db={}",
        db_path.display()
    );

    match cli.command {
        Command::List => {
            let chrome = {
                let settings = SqliteSettingsRepository::try_new(&conn)?;
                NavigationChrome::startup(settings.load_theme()?)
            };
            let mut screen = ListScreen::new(SqliteMemoRepository::try_new(&mut conn)?);
            screen.on_appear()?;

            println!("ColorMemo [{}] — {} memo(s)", chrome.theme(), screen.row_count());
            for index in 0..screen.row_count() {
                let row = screen.render_row(index)?;
                println!("{index:>3}  {}  {}", row.recorded_at, first_line(&row.text));
            }
        }
        Command::Add { text } => {
            let service = MemoService::new(SqliteMemoRepository::try_new(&mut conn)?);
            let memo = service.create_memo(text)?;
            println!("created {}", memo.id);
        }
        Command::Show { row } => {
            let mut screen = ListScreen::new(SqliteMemoRepository::try_new(&mut conn)?);
            screen.on_appear()?;
            match screen.select_row(row)? {
                Navigation::Detail(memo) => {
                    println!("{}  {}", memo.id, screen.render_row(row)?.recorded_at);
                    println!("{}", memo.text);
                }
                Navigation::Compose => unreachable!("select_row never composes"),
            }
        }
        Command::Edit { row, text } => {
            let id = {
                let mut screen = ListScreen::new(SqliteMemoRepository::try_new(&mut conn)?);
                screen.on_appear()?;
                match screen.select_row(row)? {
                    Navigation::Detail(memo) => memo.id,
                    Navigation::Compose => unreachable!("select_row never composes"),
                }
            };
            let service = MemoService::new(SqliteMemoRepository::try_new(&mut conn)?);
            service.save_memo(id, &text)?;
            println!("saved {id}");
        }
        Command::Delete { row } => {
            let mut screen = ListScreen::new(SqliteMemoRepository::try_new(&mut conn)?);
            screen.on_appear()?;
            screen.delete_row(row)?;
            println!("deleted row {row}; {} memo(s) left", screen.row_count());
        }
        Command::Theme { name } => {
            let settings = SqliteSettingsRepository::try_new(&conn)?;
            let chrome = NavigationChrome::startup(settings.load_theme()?);
            let mut picker = ThemePickerFlow::new(chrome);
            let choices = picker.open();

            let Some(name) = name else {
                println!("current theme: {}", picker.chrome().theme());
                for choice in &choices {
                    if let PickerChoice::Theme(theme) = choice {
                        println!("  {theme}");
                    }
                }
                // No selection made: same outcome as cancel.
                picker.choose(PickerChoice::Cancel);
                return Ok(());
            };

            let theme = ThemeColor::from_name(&name)
                .ok_or_else(|| format!("unknown theme `{name}`; try `colormemo theme`"))?;
            if let Some(applied) = picker.choose(PickerChoice::Theme(theme)) {
                settings.save_theme(applied)?;
                let style = picker.chrome().style();
                println!(
                    "applied {applied}: background #{:02X}{:02X}{:02X}, tint #{:02X}{:02X}{:02X}",
                    style.background.r,
                    style.background.g,
                    style.background.b,
                    style.tint.r,
                    style.tint.g,
                    style.tint.b
                );
            }
        }
    }

    Ok(())
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}
