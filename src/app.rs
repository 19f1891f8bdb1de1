use crate::backend::Backend;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::generate::handle_generate_click;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{CustomLogger, LogBuffer};
use crate::state::State;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        let log_buffer = LogBuffer::default();
        let logger = CustomLogger::new(config.level_filter()?);
        let sink = log_buffer.clone();
        logger.set_log_callback(Box::new(move |entry| sink.push(entry)));
        logger.init().map_err(AppError::from)?;

        info!("Starting application...");
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let mut app = App {
            state: Arc::new(Mutex::new(State::new(
                tx.clone(),
                config.lessons.clone(),
                log_buffer,
            ))),
            config,
        };
        app.start_network(rx)?;
        app.start_ui(tx).await?;

        // Remember the last lesson input
        {
            let state = app.state.lock().await;
            app.config.lessons = state.get_lessons_input().to_owned();
            if let Err(e) = app.config.save() {
                error!("Failed to save config on exit: {}", e);
            }
        }

        info!("Exiting application...");
        Ok(())
    }

    /// Run a single generate cycle without a terminal UI and write the
    /// rendered lines to stdout. Returns whether the cycle succeeded.
    ///
    pub async fn print(config: Config, lessons: &str) -> AppResult<bool> {
        let logger = CustomLogger::new(config.level_filter()?);
        logger.set_log_callback(Box::new(|entry| eprintln!("{}", entry)));
        logger.init()?;

        let backend = Backend::new(&config.base_url);
        let state = Mutex::new(State::default());
        handle_generate_click(lessons, &backend, &state).await;

        let state = state.into_inner();
        for line in state.result_lines() {
            println!("{}", line);
        }
        Ok(state.get_error().is_empty())
    }

    /// Start a separate thread for asynchronous state mutations.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) -> AppResult<()> {
        debug!("Creating new thread for asynchronous networking...");
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::RuntimeCreation(e.to_string()))?;
        let cloned_state = Arc::clone(&self.state);
        let base_url = self.config.base_url.to_owned();
        std::thread::spawn(move || {
            runtime.block_on(async {
                let backend = Backend::new(&base_url);
                let mut network_event_handler = NetworkEventHandler::new(&cloned_state, &backend);
                while let Ok(network_event) = net_receiver.recv() {
                    match network_event_handler.handle(network_event).await {
                        Ok(_) => (),
                        Err(e) => error!("Failed to handle network event: {}", e),
                    }
                }
            })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&mut self, net_sender: NetworkEventSender) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        net_sender.send(NetworkEvent::HealthCheck)?;

        let terminal_event_handler = TerminalEventHandler::new();
        let outcome = loop {
            let mut state = self.state.lock().await;
            if let Err(e) = terminal.draw(|frame| crate::ui::render(frame, &mut state)) {
                break Err(e.into());
            }
            match terminal_event_handler.handle_next(&mut state) {
                Ok(true) => (),
                Ok(false) => {
                    debug!("Received application exit request.");
                    break Ok(());
                }
                Err(e) => break Err(e),
            }
        };

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        outcome
    }
}
