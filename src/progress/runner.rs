//! Progress bar runner for the simulated workload

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle, TermLike};
use tracing::debug;

use super::config::ProgressConfig;
use super::steps::build_steps;
use crate::constants::progress as style;
use crate::errors::{ProgressError, ProgressResult};
use crate::shutdown::ShutdownToken;

/// Render a progress bar for the simulated workload into the given sink
///
/// Validates the configuration, plans the steps, then advances the bar one
/// step at a time with `config.delay` between steps. The delay races the
/// shutdown token, so cancellation takes effect at the next iteration
/// boundary, never mid-increment. A `None` sink renders nowhere and every
/// operation succeeds silently.
///
/// On normal completion the bar is finished and one trailing line
/// terminator is written to the sink.
pub async fn run<W>(
    shutdown: &ShutdownToken,
    sink: Option<W>,
    config: ProgressConfig,
) -> ProgressResult<()>
where
    W: Write + Send + 'static,
{
    config.validate()?;

    let steps = build_steps(config.total, config.chunk);
    debug!(
        "progress run: {} units in {} steps of <= {}",
        config.total,
        steps.len(),
        config.chunk
    );

    let sink = sink.map(SinkTerm::new);
    let target = match &sink {
        Some(term) => ProgressDrawTarget::term_like(Box::new(term.clone())),
        None => ProgressDrawTarget::hidden(),
    };

    let bar = ProgressBar::with_draw_target(Some(config.total), target);
    bar.set_style(
        ProgressStyle::with_template(style::BAR_TEMPLATE)
            .unwrap()
            .progress_chars(style::BAR_PROGRESS_CHARS),
    );
    bar.set_message(style::BAR_MESSAGE);

    for step in steps {
        if shutdown.is_cancelled() {
            return Err(ProgressError::Cancelled);
        }

        bar.inc(step);

        if config.delay.is_zero() {
            continue;
        }

        tokio::select! {
            _ = shutdown.cancelled() => return Err(ProgressError::Cancelled),
            _ = tokio::time::sleep(config.delay) => {}
        }
    }

    bar.finish();

    if let Some(term) = sink {
        term.write_line("")?;
    }

    Ok(())
}

/// [`TermLike`] adapter that renders bar frames into a plain byte sink
///
/// Cursor movement is meaningless on a byte sink, so redraw frames are
/// separated with carriage returns instead.
struct SinkTerm<W> {
    inner: Arc<Mutex<W>>,
}

impl<W: Write> SinkTerm<W> {
    fn new(sink: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sink)),
        }
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, W>> {
        self.inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "progress sink poisoned"))
    }
}

impl<W> Clone for SinkTerm<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W> fmt::Debug for SinkTerm<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SinkTerm")
    }
}

impl<W: Write + Send + 'static> TermLike for SinkTerm<W> {
    fn width(&self) -> u16 {
        80
    }

    fn move_cursor_up(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn move_cursor_down(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn move_cursor_right(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn move_cursor_left(&self, _n: usize) -> io::Result<()> {
        Ok(())
    }

    fn write_line(&self, s: &str) -> io::Result<()> {
        let mut sink = self.lock()?;
        sink.write_all(s.as_bytes())?;
        sink.write_all(b"\n")
    }

    fn write_str(&self, s: &str) -> io::Result<()> {
        self.lock()?.write_all(s.as_bytes())
    }

    fn clear_line(&self) -> io::Result<()> {
        self.lock()?.write_all(b"\r")
    }

    fn flush(&self) -> io::Result<()> {
        self.lock()?.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    /// In-memory sink that stays readable after the runner consumes a clone
    #[derive(Clone, Debug, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Test validation ordering
    ///
    /// An invalid total must fail before anything is rendered to the sink.
    #[tokio::test]
    async fn test_validation_error_before_output() {
        let buf = SharedBuf::default();
        let config = ProgressConfig {
            total: 0,
            chunk: 1,
            delay: Duration::ZERO,
        };

        let result = run(&ShutdownToken::new(), Some(buf.clone()), config).await;

        assert!(matches!(result, Err(ProgressError::InvalidTotal)));
        assert!(buf.contents().is_empty());
    }

    /// Test pre-cancelled token
    ///
    /// A run on an already-cancelled token fails with the cancellation
    /// reason before advancing the bar.
    #[tokio::test]
    async fn test_already_cancelled() {
        let token = ShutdownToken::new();
        token.cancel();

        let config = ProgressConfig {
            total: 5,
            chunk: 2,
            delay: Duration::ZERO,
        };

        let result = run(&token, None::<io::Sink>, config).await;
        assert!(matches!(result, Err(ProgressError::Cancelled)));
    }

    /// Test normal completion
    ///
    /// A zero-delay run completes, renders the final position, and leaves a
    /// trailing line terminator in the sink.
    #[tokio::test]
    async fn test_completes_with_trailing_newline() {
        let buf = SharedBuf::default();
        let config = ProgressConfig {
            total: 4,
            chunk: 2,
            delay: Duration::ZERO,
        };

        let result = run(&ShutdownToken::new(), Some(buf.clone()), config).await;
        assert!(result.is_ok(), "run failed: {result:?}");

        let out = buf.contents();
        assert!(out.ends_with('\n'), "missing trailing newline: {out:?}");
        assert!(out.contains("4/4"), "final position not rendered: {out:?}");
    }

    /// Test missing sink
    ///
    /// A `None` sink discards rendering; the run still completes.
    #[tokio::test]
    async fn test_missing_sink_discards() {
        let config = ProgressConfig {
            total: 3,
            chunk: 3,
            delay: Duration::ZERO,
        };

        let result = run(&ShutdownToken::new(), None::<io::Sink>, config).await;
        assert!(result.is_ok());
    }

    /// Test cancellation during the delay wait
    ///
    /// Cancelling while the runner sleeps between steps aborts the run
    /// promptly with the cancellation reason.
    #[tokio::test]
    async fn test_cancel_during_delay() {
        let token = ShutdownToken::new();
        let canceller = token.clone();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let config = ProgressConfig {
            total: 4,
            chunk: 2,
            delay: Duration::from_secs(30),
        };

        let result = timeout(
            Duration::from_secs(2),
            run(&token, None::<io::Sink>, config),
        )
        .await
        .expect("run did not observe cancellation in time");

        assert!(matches!(result, Err(ProgressError::Cancelled)));
    }
}
