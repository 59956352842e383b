use tokio::sync::Mutex;

/// Transient "copied" feedback: at most one field is lit at a time.
///
/// Every mark bumps a generation counter; the delayed clear task only
/// clears if its generation is still current, so a newer copy implicitly
/// abandons the older timer instead of racing it.
pub struct CopiedIndicator {
    slot: Mutex<Slot>,
}

#[derive(Default)]
struct Slot {
    field_key: Option<String>,
    generation: u64,
}

impl CopiedIndicator {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot::default()),
        }
    }

    /// Light the indicator for `field_key` and return the generation the
    /// matching delayed clear must present.
    pub async fn mark(&self, field_key: &str) -> u64 {
        let mut slot = self.slot.lock().await;
        slot.generation += 1;
        slot.field_key = Some(field_key.to_string());
        slot.generation
    }

    /// Clear the indicator if `generation` is still the latest mark.
    /// Returns whether anything was cleared.
    pub async fn clear_if_current(&self, generation: u64) -> bool {
        let mut slot = self.slot.lock().await;
        if slot.generation == generation && slot.field_key.is_some() {
            slot.field_key = None;
            true
        } else {
            false
        }
    }

    /// The field currently showing "copied", if any.
    pub async fn current(&self) -> Option<String> {
        self.slot.lock().await.field_key.clone()
    }
}

impl Default for CopiedIndicator {
    fn default() -> Self {
        Self::new()
    }
}
