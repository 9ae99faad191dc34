//! Shell input that stops as soon as the shell is interrupted.

use sift_core::CancelFlag;
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Lines read on a background thread.
///
/// Iteration ends at end of input or once `interrupt` is raised, even while the reader
/// thread is still blocked waiting for the next line.
pub struct InterruptibleLines {
    lines: Receiver<io::Result<String>>,
    interrupt: CancelFlag,
}

/// Starts reading `input` line by line on a dedicated thread.
pub fn spawn_reader<R>(input: R, interrupt: CancelFlag) -> io::Result<InterruptibleLines>
where
    R: BufRead + Send + 'static,
{
    let (tx, lines) = mpsc::channel();
    thread::Builder::new()
        .name("sift-input".into())
        .spawn(move || {
            for line in input.lines() {
                if tx.send(line).is_err() {
                    break;
                }
            }
        })?;
    Ok(InterruptibleLines { lines, interrupt })
}

impl Iterator for InterruptibleLines {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.interrupt.is_cancelled() {
                return None;
            }
            match self.lines.recv_timeout(POLL_INTERVAL) {
                Ok(line) => return Some(line),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_until_end_of_input() {
        let lines = spawn_reader(Cursor::new("\\list\n\\q\n"), CancelFlag::new()).unwrap();
        let lines: Vec<String> = lines.map(Result::unwrap).collect();
        assert_eq!(lines, vec!["\\list".to_string(), "\\q".to_string()]);
    }

    #[test]
    fn test_interrupt_ends_iteration() {
        let interrupt = CancelFlag::new();
        interrupt.cancel();
        let mut lines = spawn_reader(Cursor::new("\\list\n"), interrupt).unwrap();
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_interrupt_while_waiting_for_input() {
        let (_keep_open, reader) = blocking_input();
        let interrupt = CancelFlag::new();
        let mut lines = spawn_reader(reader, interrupt.clone()).unwrap();

        let raiser = interrupt.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(100));
            raiser.cancel();
        });
        assert!(lines.next().is_none());
        handle.join().unwrap();
    }

    /// A reader that blocks until its sender is dropped.
    fn blocking_input() -> (mpsc::Sender<Vec<u8>>, io::BufReader<ChannelReader>) {
        let (tx, rx) = mpsc::channel();
        (tx, io::BufReader::new(ChannelReader(rx)))
    }

    struct ChannelReader(Receiver<Vec<u8>>);

    impl io::Read for ChannelReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.0.recv() {
                Ok(bytes) => {
                    let n = bytes.len().min(buf.len());
                    buf[..n].copy_from_slice(&bytes[..n]);
                    Ok(n)
                }
                Err(_) => Ok(0),
            }
        }
    }
}
