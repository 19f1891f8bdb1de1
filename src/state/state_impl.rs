use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogBuffer;
use crate::ui::SPINNER_FRAME_COUNT;
use log::*;

use super::error::StateError;
use super::navigation::Focus;
use super::results::{RenderTarget, ResultBlock};

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    log_buffer: LogBuffer,
    spinner_index: usize,
    current_focus: Focus,
    lessons_input: String,
    trigger_enabled: bool,
    loading: bool,
    results: Vec<ResultBlock>,
    results_scroll: u16,
    error_message: String,
    backend_status: Option<String>,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            log_buffer: LogBuffer::default(),
            spinner_index: 0,
            current_focus: Focus::Input,
            lessons_input: String::new(),
            trigger_enabled: true,
            loading: false,
            results: vec![],
            results_scroll: 0,
            error_message: String::new(),
            backend_status: None,
        }
    }
}

impl State {
    pub fn new(net_sender: NetworkEventSender, lessons: String, log_buffer: LogBuffer) -> Self {
        State {
            net_sender: Some(net_sender),
            log_buffer,
            lessons_input: lessons,
            ..State::default()
        }
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    /// Return the current focus.
    ///
    pub fn current_focus(&self) -> &Focus {
        &self.current_focus
    }

    /// Switch focus between the lesson input and the results pane.
    ///
    pub fn toggle_focus(&mut self) -> &mut Self {
        self.current_focus = self.current_focus.toggled();
        self
    }

    /// Return the raw lesson count text.
    ///
    pub fn get_lessons_input(&self) -> &str {
        &self.lessons_input
    }

    /// Append a character to the lesson input. Any character is accepted;
    /// the backend validates the value.
    ///
    pub fn add_lessons_char(&mut self, c: char) -> &mut Self {
        self.lessons_input.push(c);
        self
    }

    /// Remove the last character from the lesson input.
    ///
    pub fn remove_lessons_char(&mut self) -> &mut Self {
        self.lessons_input.pop();
        self
    }

    pub fn is_trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn get_results(&self) -> &[ResultBlock] {
        &self.results
    }

    /// Return the error container text, empty when there is no error.
    ///
    pub fn get_error(&self) -> &str {
        &self.error_message
    }

    pub fn get_results_scroll(&self) -> u16 {
        self.results_scroll
    }

    pub fn scroll_results_down(&mut self) -> &mut Self {
        self.results_scroll = self.results_scroll.saturating_add(1);
        self
    }

    pub fn scroll_results_up(&mut self) -> &mut Self {
        self.results_scroll = self.results_scroll.saturating_sub(1);
        self
    }

    /// Record the outcome of the startup health check.
    ///
    pub fn set_backend_status(&mut self, status: String) -> &mut Self {
        self.backend_status = Some(status);
        self
    }

    pub fn get_backend_status(&self) -> Option<&str> {
        self.backend_status.as_deref()
    }

    /// Return a snapshot of captured log entries.
    ///
    pub fn get_log_entries(&self) -> Vec<String> {
        self.log_buffer.entries()
    }

    /// Ask the network worker to generate exercises for the current lesson
    /// input. Rejected while the trigger control is disabled. The trigger
    /// stays disabled until the worker finishes the request.
    ///
    pub fn request_generate(&mut self) -> Result<(), StateError> {
        if !self.trigger_enabled {
            return Err(StateError::TriggerDisabled);
        }
        let sender = self
            .net_sender
            .as_ref()
            .ok_or(StateError::NetworkChannelNotSet)?;
        debug!("Requesting exercises for lesson input {:?}...", self.lessons_input);
        sender
            .send(NetworkEvent::GenerateExercises {
                lessons: self.lessons_input.clone(),
            })
            .map_err(|_| StateError::NetworkChannelClosed)?;
        self.set_trigger_enabled(false);
        self.set_loading(true);
        Ok(())
    }

    /// Plain text rendition of the results or the error line.
    ///
    pub fn result_lines(&self) -> Vec<String> {
        if !self.error_message.is_empty() {
            return vec![self.error_message.clone()];
        }
        self.results.iter().flat_map(ResultBlock::lines).collect()
    }
}

impl RenderTarget for State {
    fn clear_results(&mut self) {
        self.results.clear();
        self.results_scroll = 0;
    }

    fn clear_error(&mut self) {
        self.error_message.clear();
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_enabled = enabled;
    }

    fn append_result(&mut self, block: ResultBlock) {
        self.results.push(block);
    }

    fn show_error(&mut self, message: String) {
        self.error_message = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn advance_spinner_index() {
        let mut state = State::default();
        state.advance_spinner_index();
        assert_eq!(state.spinner_index, 1);
        for _ in 0..SPINNER_FRAME_COUNT {
            state.advance_spinner_index();
        }
        assert_eq!(state.spinner_index, 1);
    }

    #[test]
    fn toggle_focus() {
        let mut state = State::default();
        assert_eq!(*state.current_focus(), Focus::Input);
        state.toggle_focus();
        assert_eq!(*state.current_focus(), Focus::Results);
        state.toggle_focus();
        assert_eq!(*state.current_focus(), Focus::Input);
    }

    #[test]
    fn edit_lessons_input_accepts_any_char() {
        let mut state = State::default();
        state.add_lessons_char('-').add_lessons_char('x').add_lessons_char('3');
        assert_eq!(state.get_lessons_input(), "-x3");
        state.remove_lessons_char();
        assert_eq!(state.get_lessons_input(), "-x");
        state.remove_lessons_char().remove_lessons_char().remove_lessons_char();
        assert_eq!(state.get_lessons_input(), "");
    }

    #[test]
    fn scroll_results_saturates() {
        let mut state = State::default();
        state.scroll_results_up();
        assert_eq!(state.get_results_scroll(), 0);
        state.scroll_results_down().scroll_results_down();
        assert_eq!(state.get_results_scroll(), 2);
        state.clear_results();
        assert_eq!(state.get_results_scroll(), 0);
    }

    #[test]
    fn request_generate_sends_raw_input() {
        let (tx, rx) = mpsc::channel();
        let mut state = State::new(tx, "abc".to_string(), LogBuffer::default());
        state.request_generate().unwrap();
        match rx.try_recv().unwrap() {
            NetworkEvent::GenerateExercises { lessons } => assert_eq!(lessons, "abc"),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn request_generate_disables_trigger_until_finished() {
        let (tx, rx) = mpsc::channel();
        let mut state = State::new(tx, "4".to_string(), LogBuffer::default());
        state.request_generate().unwrap();
        assert!(!state.is_trigger_enabled());
        assert!(state.is_loading());
        assert!(matches!(
            state.request_generate(),
            Err(StateError::TriggerDisabled)
        ));
        assert_eq!(rx.try_iter().count(), 1);

        state.set_loading(false);
        state.set_trigger_enabled(true);
        state.request_generate().unwrap();
        assert_eq!(rx.try_iter().count(), 1);
    }

    #[test]
    fn request_generate_rejected_while_disabled() {
        let (tx, rx) = mpsc::channel();
        let mut state = State::new(tx, "1".to_string(), LogBuffer::default());
        state.set_trigger_enabled(false);
        assert!(matches!(
            state.request_generate(),
            Err(StateError::TriggerDisabled)
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn request_generate_without_channel() {
        let mut state = State::default();
        assert!(matches!(
            state.request_generate(),
            Err(StateError::NetworkChannelNotSet)
        ));

        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut state = State::new(tx, "1".to_string(), LogBuffer::default());
        assert!(matches!(
            state.request_generate(),
            Err(StateError::NetworkChannelClosed)
        ));
    }

    #[test]
    fn result_lines_prefer_error() {
        let mut state = State::default();
        state.append_result(ResultBlock::Heading("Generadas".to_string()));
        assert_eq!(state.result_lines(), vec!["Generadas"]);
        state.show_error("Error al generar ejercicios: boom".to_string());
        assert_eq!(state.result_lines(), vec!["Error al generar ejercicios: boom"]);
        state.clear_error();
        assert_eq!(state.get_error(), "");
    }
}
