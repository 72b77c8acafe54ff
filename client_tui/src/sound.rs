use std::io::{self, Write};

use game_core::SoundTrigger;

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell for each paddle hit
pub struct Bell<W: Write> {
    out: W,
    muted: bool,
}

impl Bell<io::Stdout> {
    pub fn stdout(muted: bool) -> Self {
        Self::new(io::stdout(), muted)
    }
}

impl<W: Write> Bell<W> {
    pub fn new(out: W, muted: bool) -> Self {
        Self { out, muted }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    fn ring(&mut self) -> io::Result<()> {
        self.out.write_all(BEL)?;
        self.out.flush()
    }
}

impl<W: Write> SoundTrigger for Bell<W> {
    fn play(&mut self) {
        if self.muted {
            return;
        }
        // Fire-and-forget: failures are only logged
        if let Err(e) = self.ring() {
            log::warn!("Bell failed: {e}");
        }
    }
}
