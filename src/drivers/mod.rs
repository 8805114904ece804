pub mod console;

use std::io;
use std::time::Duration;

use crossterm::event::Event;

/// Source of raw terminal events. Abstracted so tests and benchmarks can
/// feed scripted input instead of a live tty.
pub trait InputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        (**self).read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    struct Scripted(Vec<Event>);

    impl InputDriver for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(!self.0.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            self.0
                .pop()
                .ok_or_else(|| io::Error::other("script exhausted"))
        }
    }

    #[test]
    fn blanket_impl_for_mut_ref_works() {
        let mut d = Scripted(vec![Event::Key(KeyEvent::new(
            KeyCode::Char('x'),
            KeyModifiers::NONE,
        ))]);
        let mut r = &mut d;
        assert!(r.poll(Duration::from_millis(0)).unwrap());
        let ev = r.read().unwrap();
        assert!(matches!(ev, Event::Key(k) if k.code == KeyCode::Char('x')));
    }
}
