use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// The single event pump driving the UI thread.
///
/// All state transitions run to completion inside one handler invocation
/// before the next event is read, so two rapid operations are always applied
/// in dispatch order; no interleaving of partial updates is possible.
///
/// The handler is called with `Some(event)` for input and `None` when the
/// poll interval elapses idle (the repaint tick).
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(None)? {
                break;
            }

            if self.driver.poll(self.poll_interval)? {
                // Drain the queue so bursts (key repeat, resize storms) don't
                // leave rendering behind the input stream.
                loop {
                    let event = self.driver.read()?;
                    if let ControlFlow::Quit = handler(Some(event))? {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    struct Feed {
        events: Vec<Event>,
    }

    impl InputDriver for Feed {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(!self.events.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            Ok(self.events.remove(0))
        }
    }

    #[test]
    fn events_arrive_in_dispatch_order_then_quit() {
        let feed = Feed {
            events: vec![
                Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)),
                Event::Key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE)),
            ],
        };
        let mut seen = Vec::new();
        let mut pump = EventLoop::new(feed, Duration::from_millis(1));
        pump
            .run(|event| {
                if let Some(Event::Key(k)) = event {
                    seen.push(k.code);
                    if k.code == KeyCode::Char('b') {
                        return Ok(ControlFlow::Quit);
                    }
                }
                Ok(ControlFlow::Continue)
            })
            .unwrap();
        assert_eq!(seen, vec![KeyCode::Char('a'), KeyCode::Char('b')]);
    }
}
