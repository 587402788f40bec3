//! Wire format: one JSON object per line.
//!
//! ```text
//! {"channel":"demo","letter":"Q"}\n
//! ```

use serde::{Deserialize, Serialize};

use crate::engine::Letter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayMessage {
    pub channel: String,
    /// Kept as a string on the wire; validated on receipt.
    pub letter: String,
}

impl RelayMessage {
    pub fn new(channel: &str, letter: Letter) -> Self {
        Self {
            channel: channel.to_string(),
            letter: letter.to_string(),
        }
    }

    /// Serialize with the trailing newline.
    pub fn encode_line(&self) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}

/// Why an incoming line was not delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejected {
    Malformed,
    OtherChannel(String),
    InvalidLetter(String),
}

/// Decode one received line and check it belongs to `channel`.
pub fn accept_line(line: &str, channel: &str) -> Result<Letter, Rejected> {
    let message: RelayMessage =
        serde_json::from_str(line.trim()).map_err(|_| Rejected::Malformed)?;
    if message.channel != channel {
        return Err(Rejected::OtherChannel(message.channel));
    }
    message
        .letter
        .parse::<Letter>()
        .map_err(|_| Rejected::InvalidLetter(message.letter))
}
