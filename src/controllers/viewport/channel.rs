use std::sync::mpsc;

use thiserror::Error;

use crate::core::viewport::events::ViewportEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventChannelError {
    #[error("viewport controller is no longer receiving events")]
    Disconnected,
}

/// Gesture-source half of the hand-off; never blocks.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<ViewportEvent>,
}

impl EventSender {
    pub fn send(&self, event: ViewportEvent) -> Result<(), EventChannelError> {
        self.sender
            .send(event)
            .map_err(|_| EventChannelError::Disconnected)
    }
}

/// Tick-loop half; drained once per frame.
#[derive(Debug)]
pub struct EventReceiver {
    receiver: mpsc::Receiver<ViewportEvent>,
}

impl EventReceiver {
    pub fn drain(&self) -> impl Iterator<Item = ViewportEvent> + '_ {
        self.receiver.try_iter()
    }
}

#[must_use]
pub fn event_channel() -> (EventSender, EventReceiver) {
    let (sender, receiver) = mpsc::channel();
    (EventSender { sender }, EventReceiver { receiver })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_returns_pending_events_in_order_without_blocking() {
        let (sender, receiver) = event_channel();

        sender.send(ViewportEvent::PointerUp).unwrap();
        sender.send(ViewportEvent::TouchEnd).unwrap();

        let drained: Vec<_> = receiver.drain().collect();
        assert_eq!(drained, vec![ViewportEvent::PointerUp, ViewportEvent::TouchEnd]);
        assert_eq!(receiver.drain().count(), 0);
    }

    #[test]
    fn send_after_receiver_dropped_reports_disconnect() {
        let (sender, receiver) = event_channel();
        drop(receiver);

        assert_eq!(
            sender.send(ViewportEvent::PointerUp),
            Err(EventChannelError::Disconnected)
        );
    }

    #[test]
    fn senders_can_be_moved_to_other_threads() {
        let (sender, receiver) = event_channel();
        let remote = sender.clone();

        std::thread::spawn(move || remote.send(ViewportEvent::TouchEnd).unwrap())
            .join()
            .unwrap();

        assert_eq!(receiver.drain().count(), 1);
    }
}
