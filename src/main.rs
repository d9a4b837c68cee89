// unitty: a terminal unit converter with live results

mod convert;
mod ui;

use std::io;
use std::str::FromStr;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use convert::Category;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    let category = match args.get(1) {
        Some(name) => match Category::from_str(name) {
            Ok(category) => category,
            Err(e) => {
                let program_name = args.first().map(|s| s.as_str()).unwrap_or("unitty");
                eprintln!("Error: {}", e);
                eprintln!();
                eprintln!("Usage: {} [category]", program_name);
                eprintln!();
                eprintln!("Categories:");
                for category in Category::ALL {
                    eprintln!("  {:<12} {}", category.name(), category.description());
                }
                std::process::exit(1);
            }
        },
        None => Category::Length,
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(category);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
