//! Long-lived event subscription loop.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::dev::EventSource;
use crate::error::{Result, RfkillError};
use crate::types::Event;

/// Poll `source` for events until cancelled, invoking `handler` for each
/// record. Never returns `Ok`.
///
/// Cancellation is checked before every read and wins over pending data.
/// The handler runs synchronously on the loop's task, so a slow handler
/// delays subsequent reads. Unknown op codes are passed through for the
/// handler to ignore, unlike the strict classification in the list
/// builder.
pub(crate) async fn pump_events<S, F>(
    source: &mut S,
    cancel: &CancellationToken,
    poll_interval: Duration,
    handler: &mut F,
) -> Result<()>
where
    S: EventSource,
    F: FnMut(Event),
{
    loop {
        if cancel.is_cancelled() {
            return Err(RfkillError::Cancelled);
        }

        match source.next_event()? {
            Some(raw) => {
                let event = Event::from(raw);
                trace!(id = event.id, %event.op, "delivering rfkill event");
                handler(event);
            }
            None => {
                // Idle until more data may be pending or the caller gives
                // up, whichever fires first. The select is unbiased.
                tokio::select! {
                    _ = cancel.cancelled() => return Err(RfkillError::Cancelled),
                    _ = tokio::time::sleep(poll_interval) => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::tests::ScriptedSource;
    use crate::types::EventOp;
    use crate::wire::RawEvent;

    const POLL: Duration = Duration::from_millis(100);

    #[tokio::test]
    async fn test_already_cancelled_returns_without_reading() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let mut source = ScriptedSource::events(vec![RawEvent::default()]);
        let mut seen = Vec::new();
        let err = pump_events(&mut source, &cancel, POLL, &mut |ev| seen.push(ev))
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
        assert!(seen.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_mid_poll_wait() {
        let cancel = CancellationToken::new();
        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(150)).await;
            canceller.cancel();
        });

        let mut source = ScriptedSource::empty();
        let started = tokio::time::Instant::now();
        let err = pump_events(&mut source, &cancel, POLL, &mut |_| {})
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
        // Cancellation must surface within one poll interval of firing.
        assert!(started.elapsed() <= Duration::from_millis(150) + POLL);
    }

    #[tokio::test]
    async fn test_events_delivered_in_order_then_cancel() {
        let cancel = CancellationToken::new();
        let first = RawEvent {
            id: 1,
            op: EventOp::Add.as_raw(),
            ..RawEvent::default()
        };
        let second = RawEvent {
            id: 1,
            op: EventOp::Change.as_raw(),
            soft: 1,
            ..RawEvent::default()
        };
        let mut source = ScriptedSource::events(vec![first, second]);

        let mut seen = Vec::new();
        let canceller = cancel.clone();
        let err = pump_events(&mut source, &cancel, POLL, &mut |ev| {
            seen.push(ev);
            if seen.len() == 2 {
                canceller.cancel();
            }
        })
        .await
        .unwrap_err();

        assert!(err.is_cancelled());
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].op, EventOp::Add);
        assert_eq!(seen[1].op, EventOp::Change);
        assert!(seen[1].soft_blocked);
    }

    #[tokio::test]
    async fn test_unknown_op_passed_through() {
        let cancel = CancellationToken::new();
        let bogus = RawEvent {
            id: 2,
            op: 11,
            ..RawEvent::default()
        };
        let mut source = ScriptedSource::events(vec![bogus]);

        let mut seen = Vec::new();
        let canceller = cancel.clone();
        let err = pump_events(&mut source, &cancel, POLL, &mut |ev| {
            seen.push(ev);
            canceller.cancel();
        })
        .await
        .unwrap_err();

        assert!(err.is_cancelled());
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].op, EventOp::Other(11));
    }

    #[tokio::test]
    async fn test_read_error_is_fatal() {
        let cancel = CancellationToken::new();
        let mut source = ScriptedSource::new(vec![Err(RfkillError::Read(
            std::io::Error::from(std::io::ErrorKind::BrokenPipe),
        ))]);

        let err = pump_events(&mut source, &cancel, POLL, &mut |_| {})
            .await
            .unwrap_err();
        assert!(matches!(err, RfkillError::Read(_)));
    }
}
