use std::time::Duration;

use futures::channel::mpsc;

use crate::app::Message;

/// Frame pulses for transitions and the Home sketch. The worker thread exits
/// as soon as the subscription drops its receiver.
pub(crate) fn frame_stream(ms: &u64) -> mpsc::UnboundedReceiver<Message> {
    pulse(*ms, || Message::Frame)
}

/// Spinner ticks while a placeholder is loading.
pub(crate) fn spinner_stream(ms: &u64) -> mpsc::UnboundedReceiver<Message> {
    pulse(*ms, || Message::SpinnerTick)
}

fn pulse(ms: u64, make: fn() -> Message) -> mpsc::UnboundedReceiver<Message> {
    let (tx, rx) = mpsc::unbounded();
    std::thread::spawn(move || loop {
        std::thread::sleep(Duration::from_millis(ms));
        if tx.unbounded_send(make()).is_err() {
            break;
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use futures::executor::block_on;

    #[test]
    fn frame_stream_pulses() {
        let mut rx = frame_stream(&1);
        assert!(matches!(block_on(rx.next()), Some(Message::Frame)));
        assert!(matches!(block_on(rx.next()), Some(Message::Frame)));
    }

    #[test]
    fn spinner_stream_ticks() {
        let mut rx = spinner_stream(&1);
        assert!(matches!(block_on(rx.next()), Some(Message::SpinnerTick)));
    }
}
