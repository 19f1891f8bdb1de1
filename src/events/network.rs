use crate::backend::Backend;
use crate::events::generate::handle_generate_click;
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    HealthCheck,
    GenerateExercises { lessons: String },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    backend: &'a Backend,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, backend: &'a Backend) -> Self {
        Handler { state, backend }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::HealthCheck => self.health_check().await,
            Event::GenerateExercises { lessons } => {
                handle_generate_click(&lessons, self.backend, self.state.as_ref()).await
            }
        }
        Ok(())
    }

    /// Update state with whether the backend answers on its root route.
    ///
    async fn health_check(&mut self) {
        info!("Checking backend at {}...", self.backend.base_url());
        let status = match self.backend.health().await {
            Ok(greeting) => {
                info!("Backend is reachable: {}", greeting.trim());
                format!("online ({})", self.backend.base_url())
            }
            Err(e) => {
                warn!("Backend at {} is not reachable: {}", self.backend.base_url(), e);
                format!("unreachable ({})", self.backend.base_url())
            }
        };
        let mut state = self.state.lock().await;
        state.set_backend_status(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use serde_json::json;

    #[tokio::test]
    async fn health_check_sets_status() -> Result<()> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/");
                then.status(200).body("¡Hola! Backend is running.");
            })
            .await;

        let backend = Backend::new(&server.base_url());
        let state = Arc::new(Mutex::new(State::default()));
        Handler::new(&state, &backend)
            .handle(Event::HealthCheck)
            .await?;

        let state = state.lock().await;
        assert!(state.get_backend_status().unwrap().starts_with("online"));
        Ok(())
    }

    #[tokio::test]
    async fn health_check_unreachable() -> Result<()> {
        let backend = Backend::new("http://127.0.0.1:9");
        let state = Arc::new(Mutex::new(State::default()));
        Handler::new(&state, &backend)
            .handle(Event::HealthCheck)
            .await?;

        let state = state.lock().await;
        assert!(state.get_backend_status().unwrap().starts_with("unreachable"));
        Ok(())
    }

    #[tokio::test]
    async fn generate_exercises_updates_state() -> Result<()> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/generate-exercises")
                    .query_param("lessons", "");
                then.status(200).json_body(json!({ "exercises": [] }));
            })
            .await;

        let backend = Backend::new(&server.base_url());
        let state = Arc::new(Mutex::new(State::default()));
        Handler::new(&state, &backend)
            .handle(Event::GenerateExercises {
                lessons: String::new(),
            })
            .await?;

        let state = state.lock().await;
        assert_eq!(state.get_results().len(), 1);
        assert!(!state.is_loading());
        assert!(state.is_trigger_enabled());
        assert_eq!(state.get_error(), "");
        Ok(())
    }
}
