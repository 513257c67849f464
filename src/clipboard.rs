use log::debug;

/// Destination for copied screen text.
pub trait ClipboardSink {
    /// Place `text` on the clipboard. Never fails from the caller's
    /// point of view.
    fn copy(&mut self, text: &str);
}

/// The system clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, arboard::Error> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) {
        if let Err(e) = self.inner.set_text(text.to_owned()) {
            debug!("clipboard write failed: {e}");
        }
    }
}
