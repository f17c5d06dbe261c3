use crate::render::Banner;
use tokio::sync::watch;

/// The shared status region: a single last-writer-wins slot that every action
/// publishes its outcome into. There is deliberately no mutual exclusion
/// across actions; whichever completion handler publishes last owns the
/// visible display, exactly like the shared alert area it replaces.
#[derive(Clone)]
pub struct StatusRegion {
    tx: watch::Sender<Option<Banner>>,
}

impl StatusRegion {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Replace the region's content unconditionally. No merge, no history.
    pub fn publish(&self, banner: Banner) {
        self.tx.send_replace(Some(banner));
    }

    pub fn current(&self) -> Option<Banner> {
        self.tx.borrow().clone()
    }

    /// Watch for updates; readers only ever observe the latest banner.
    pub fn subscribe(&self) -> watch::Receiver<Option<Banner>> {
        self.tx.subscribe()
    }
}

impl Default for StatusRegion {
    fn default() -> Self {
        Self::new()
    }
}
