//! Transient banner shown after saves and absorbed store errors.
//!
//! Each message gets a sequence number. A scheduled dismissal only clears the
//! banner if no newer message has replaced it in the meantime.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

/// Auto-dismiss delay for the banner.
pub const FLASH_DISMISS_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlashTone {
    #[default]
    Success,
    Warning,
}

impl FlashTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "flash flash--success",
            Self::Warning => "flash flash--warning",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlashState {
    pub message: Option<String>,
    pub tone: FlashTone,
    pub seq: u64,
}

impl FlashState {
    /// Replace the banner text and return the new sequence number.
    pub fn show(&mut self, message: impl Into<String>, tone: FlashTone) -> u64 {
        self.seq += 1;
        self.message = Some(message.into());
        self.tone = tone;
        self.seq
    }

    /// Clear the banner if `seq` is still the latest message.
    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.message = None;
        }
    }
}
