use std::collections::HashMap;

use log::debug;

const KEY_CURRENT_LEVEL: &str = "current_level";
const KEY_HIGHEST_UNLOCKED: &str = "highest_unlocked";

/// Somewhere to keep the two progress counters between runs.
pub trait ProgressStore {
    /// The value saved under `key`, if any.
    fn load(&self, key: &str) -> Option<u32>;
    /// Save `value` under `key`, replacing what was there.
    fn save(&mut self, key: &str, value: u32);
}

/// A [`ProgressStore`] that forgets everything when dropped.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, u32>,
}

impl ProgressStore for MemoryStore {
    fn load(&self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }

    fn save(&mut self, key: &str, value: u32) {
        self.values.insert(key.to_owned(), value);
    }
}

/// Which level the player is on and how far they have unlocked, over `total_levels` levels.
///
/// Both counters start at 1 and are written through to the store whenever they change.
pub struct Progress<S: ProgressStore> {
    store: S,
    total_levels: u32,
    current_level: u32,
    highest_unlocked: u32,
}

impl<S: ProgressStore> Progress<S> {
    /// Read both counters from `store`, clamping them into `1..=total_levels`.
    pub fn load(store: S, total_levels: u32) -> Self {
        let total_levels = total_levels.max(1);
        let clamp = |value: Option<u32>| value.unwrap_or(1).clamp(1, total_levels);

        Self {
            current_level: clamp(store.load(KEY_CURRENT_LEVEL)),
            highest_unlocked: clamp(store.load(KEY_HIGHEST_UNLOCKED)),
            store,
            total_levels,
        }
    }

    /// The level the player is on.
    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    /// The highest level the player may open.
    pub fn highest_unlocked(&self) -> u32 {
        self.highest_unlocked
    }

    /// Whether level `number` may be opened.
    pub fn is_level_unlocked(&self, number: u32) -> bool {
        number <= self.highest_unlocked
    }

    /// Whether level `number` has been beaten.
    pub fn is_level_completed(&self, number: u32) -> bool {
        number < self.highest_unlocked
    }

    /// Record that level `number` was solved, unlocking the next one if `number` is the frontier.
    ///
    /// Never unlocks past the last level.
    pub fn complete_level(&mut self, number: u32) {
        if number != self.highest_unlocked {
            return;
        }

        self.highest_unlocked = (self.highest_unlocked + 1).min(self.total_levels);
        self.store.save(KEY_HIGHEST_UNLOCKED, self.highest_unlocked);
        debug!("Highest unlocked level is now {}", self.highest_unlocked);
    }

    /// Switch to level `number` if it exists and is unlocked; otherwise do nothing.
    pub fn update_current_level(&mut self, number: u32) {
        if (1..=self.total_levels).contains(&number) && self.is_level_unlocked(number) {
            self.current_level = number;
            self.store.save(KEY_CURRENT_LEVEL, number);
        }
    }

    /// Give back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}
