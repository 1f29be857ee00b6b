// File: crates/rankchart-fetch/src/region.rs
// Summary: Page region that receives the detail content.

use std::sync::{Arc, Mutex};

/// Target of the detail injection. Each call replaces any previous content.
pub trait DetailRegion {
    fn replace(&mut self, content: String);
    fn content(&self) -> Option<String>;
}

/// In-memory region; clones share the same slot so a host can keep a handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegion {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryRegion {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DetailRegion for MemoryRegion {
    fn replace(&mut self, content: String) {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(content);
    }

    fn content(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
