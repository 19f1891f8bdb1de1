//! Request-render handler for the generate action.

use crate::backend::Backend;
use crate::state::{result_blocks, RenderTarget, ERROR_PREFIX};
use log::*;
use tokio::sync::Mutex;

/// Run one generate cycle: reset the target, request exercises for the raw
/// `lessons` text and render either the result blocks or an error line.
///
/// The target lock is released while the request is in flight. Loading is
/// hidden and the trigger re-enabled exactly once on every exit path.
///
pub async fn handle_generate_click<T: RenderTarget>(
    lessons: &str,
    backend: &Backend,
    target: &Mutex<T>,
) {
    {
        let mut target = target.lock().await;
        target.clear_results();
        target.clear_error();
        target.set_loading(true);
        target.set_trigger_enabled(false);
    }

    let outcome = backend.generate_exercises(lessons).await;

    let mut target = target.lock().await;
    match outcome {
        Ok(response) => {
            let blocks = result_blocks(&response);
            info!("Rendering {} result blocks.", blocks.len());
            for block in blocks {
                target.append_result(block);
            }
        }
        Err(e) => {
            error!("Error processing backend response: {}", e);
            target.clear_results();
            target.show_error(format!("{}{}", ERROR_PREFIX, e));
        }
    }
    target.set_loading(false);
    target.set_trigger_enabled(true);
}
