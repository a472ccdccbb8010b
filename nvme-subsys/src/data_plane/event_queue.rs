//! Non-blocking queue carrying asynchronous events from a subsystem to a host.

use crate::controller::AsyncEvent;
use crate::observability::events;
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::warn;

const COMPONENT: &str = "event_queue";

/// Creates a linked sender/receiver pair labelled for logging.
pub fn event_queue(label: &str) -> (EventSender, EventReceiver) {
    let (sender, receiver) = unbounded_channel();
    (
        EventSender {
            label: Arc::from(label),
            sender,
        },
        EventReceiver { receiver },
    )
}

#[derive(Clone, Debug)]
pub struct EventSender {
    label: Arc<str>,
    sender: UnboundedSender<AsyncEvent>,
}

impl EventSender {
    /// Fire-and-forget; a closed queue drops the event with a warning.
    pub fn enqueue(&self, notice: AsyncEvent) {
        if let Err(err) = self.sender.send(notice) {
            warn!(
                event = events::EVENT_QUEUE_CLOSED,
                component = COMPONENT,
                label = &*self.label,
                notice = %err.0,
                "receiver gone, dropping asynchronous event"
            );
        }
    }
}

#[derive(Debug)]
pub struct EventReceiver {
    receiver: UnboundedReceiver<AsyncEvent>,
}

impl EventReceiver {
    /// Waits for the next event; `None` once every sender is dropped.
    pub async fn recv(&mut self) -> Option<AsyncEvent> {
        self.receiver.recv().await
    }

    pub fn try_recv(&mut self) -> Option<AsyncEvent> {
        self.receiver.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::event_queue;
    use crate::controller::AsyncEvent;

    #[tokio::test]
    async fn enqueued_events_arrive_in_order() {
        let (sender, mut receiver) = event_queue("ctrl-0");

        sender.enqueue(AsyncEvent::AnaChange);
        sender.clone().enqueue(AsyncEvent::AnaChange);
        drop(sender);

        assert_eq!(receiver.recv().await, Some(AsyncEvent::AnaChange));
        assert_eq!(receiver.recv().await, Some(AsyncEvent::AnaChange));
        assert_eq!(receiver.recv().await, None);
    }

    #[test]
    fn enqueue_after_receiver_drop_does_not_panic() {
        let (sender, receiver) = event_queue("ctrl-1");
        drop(receiver);

        sender.enqueue(AsyncEvent::AnaChange);
    }

    #[test]
    fn try_recv_on_empty_queue_is_none() {
        let (_sender, mut receiver) = event_queue("ctrl-2");
        assert_eq!(receiver.try_recv(), None);
    }
}
