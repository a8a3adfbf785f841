//! Survey execution

use std::io;

use tokio::task;
use tracing::debug;

use super::{form, SurveyResult};
use crate::errors::SurveyError;
use crate::shutdown::ShutdownToken;

/// Run the survey to completion and return the collected answers
///
/// Checks cancellation up front (fails immediately on an already-cancelled
/// token), then executes the form on a blocking task raced against the
/// shutdown token. `accessible` selects the line-based rendering mode over
/// stdin/stdout instead of the full interactive widgets.
pub async fn run_survey(
    shutdown: &ShutdownToken,
    accessible: bool,
) -> Result<SurveyResult, SurveyError> {
    if shutdown.is_cancelled() {
        return Err(SurveyError::Cancelled);
    }

    debug!("running survey (accessible: {accessible})");

    let mut form_task = task::spawn_blocking(move || {
        if accessible {
            form::run_accessible(io::stdin().lock(), io::stdout())
        } else {
            form::run_interactive()
        }
    });

    // On cancellation the blocking task is abandoned; it ends with the
    // process shortly after.
    tokio::select! {
        _ = shutdown.cancelled() => Err(SurveyError::Cancelled),
        joined = &mut form_task => joined
            .map_err(|e| SurveyError::Execution(e.to_string()))
            .and_then(|result| result),
    }
}
