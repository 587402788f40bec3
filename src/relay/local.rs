use tokio::sync::mpsc;

use crate::engine::Letter;

use super::error::RelayError;
use super::{GuessHandler, GuessSink};

const LOCAL_BUFFER: usize = 64;

/// In-process relay: both ends live in the same program.
pub struct LocalRelay;

impl LocalRelay {
    pub fn pair() -> (LocalSink, mpsc::Receiver<Letter>) {
        let (sender, receiver) = mpsc::channel(LOCAL_BUFFER);
        (LocalSink { sender }, receiver)
    }
}

#[derive(Clone)]
pub struct LocalSink {
    sender: mpsc::Sender<Letter>,
}

impl GuessSink for LocalSink {
    async fn send(&self, letter: Letter) -> Result<(), RelayError> {
        self.sender.send(letter).await.map_err(|_| RelayError::Closed)
    }
}

impl GuessHandler for mpsc::UnboundedSender<Letter> {
    fn on_receive(&self, letter: Letter) -> bool {
        self.send(letter).is_ok()
    }
}
