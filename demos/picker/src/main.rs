//! Picker - pick values from a list in the terminal
//!
//! 1. Event (keyboard/mouse) -> PickerUi::map_event() -> Actions
//! 2. Selection actions dispatched to the store, reducer updates state
//! 3. Panel-local changes (search, focus) live inside the panel
//! 4. Re-render when either changed
//!
//! # Usage
//!
//! ```sh
//! picker red green blue
//! picker --options fruit.json --json
//! picker --print-config
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use multiselect_core::{
    process_raw_event, spawn_event_poller, LoggingMiddleware, RawEvent, StoreWithMiddleware,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use picker::options::load_options;
use picker::{logging, reducer, PickerAction, PickerConfig, PickerError, PickerState, PickerUi};

/// Exit status when the user cancels
const EXIT_CANCELLED: u8 = 130;

#[derive(Parser, Debug)]
#[command(name = "picker")]
#[command(about = "Pick any number of values from a searchable list")]
struct Args {
    /// Option labels; each label is also its value
    labels: Vec<String>,

    /// JSON file with options: [{"label": "...", "value": "..."}]
    #[arg(long, short)]
    options: Option<PathBuf>,

    /// Config file (default: <config dir>/multiselect-picker/config.json)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Print the selection as a JSON array instead of one value per line
    #[arg(long)]
    json: bool,

    /// Write JSON logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode, PickerError> {
    if let Some(path) = &args.log_file {
        logging::init_logging(path)?;
    }

    let config = PickerConfig::load(args.config.as_deref())?;
    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    let options = load_options(args.options.as_deref(), &args.labels)?;
    info!(count = options.len(), "Starting picker");
    let state = PickerState::new(options, config.panel_config());
    let ui = PickerUi::new(config.keybindings);

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, state, ui).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let Some(selected) = result? else {
        info!("Cancelled");
        return Ok(ExitCode::from(EXIT_CANCELLED));
    };

    info!(count = selected.len(), "Confirmed");
    if args.json {
        println!("{}", serde_json::to_string(&selected)?);
    } else {
        for value in &selected {
            println!("{}", value);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Run until the user confirms (`Some(selection)`) or cancels (`None`)
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: PickerState,
    mut ui: PickerUi,
) -> io::Result<Option<Vec<String>>> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<PickerAction>();

    let mut store = StoreWithMiddleware::new(state, reducer, LoggingMiddleware::new("picker"));

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    let mut should_render = true;
    let mut outcome = None;

    loop {
        if should_render {
            terminal.draw(|frame| ui.render(frame, store.state()))?;
            should_render = false;
        }

        tokio::select! {
            Some(raw_event) = event_rx.recv() => {
                let event = process_raw_event(raw_event);
                let before = ui.panel().state().clone();

                for action in ui.map_event(&event, store.state()) {
                    let _ = action_tx.send(action);
                }
                should_render |= ui.needs_render(&before);
            }

            Some(action) = action_rx.recv() => {
                match action {
                    PickerAction::Confirm => {
                        outcome = Some(store.state().selected_in_catalog_order());
                        break;
                    }
                    PickerAction::Cancel => break,
                    action => should_render |= store.dispatch(action),
                }
            }
        }
    }

    cancel_token.cancel();
    Ok(outcome)
}
