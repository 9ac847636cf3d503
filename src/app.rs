use crate::api::Api;
use crate::config::Config;
use crate::error::AppError;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::state::State;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::sync::Arc;
use tokio::sync::Mutex;
use tui_logger::{init_logger, set_default_level};

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        init_logger(LevelFilter::Trace).map_err(|e| AppError::Logger(e.to_string()))?;
        set_default_level(LevelFilter::Trace);

        info!("Starting application...");
        if let Some(path) = config.file_path() {
            info!("Using configuration at {}", path.display());
        }
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', expected one of: {}.",
                config.theme_name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        });
        let api = Api::new(&config.api_url, config.access_token.as_deref())?;

        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let state = State::new(tx, theme, config.image_directory.as_deref());
        let app = App {
            state: Arc::new(Mutex::new(state)),
        };
        app.start_network(rx, api);
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous state mutations.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver, api: Api) {
        debug!("Creating new thread for asynchronous networking...");
        let cloned_state = Arc::clone(&self.state);
        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to build network runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(async {
                let mut network_event_handler = NetworkEventHandler::new(&cloned_state, &api);
                while let Ok(network_event) = net_receiver.recv() {
                    if let Err(e) = network_event_handler.handle(network_event).await {
                        error!("Failed to handle network event: {}", e);
                    }
                }
            })
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored even when the
    /// loop fails.
    ///
    async fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        self.state.lock().await.refresh_posts();
        let result = self.run(&mut terminal).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    async fn run(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                return Ok(());
            }
        }
    }
}
