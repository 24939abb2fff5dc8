//! Generation-checked handle table for buffers owned by the library.
//!
//! C callers hold a `u64` handle instead of a pointer. A destroyed handle
//! carries a stale generation and resolves to `None`, so use-after-free
//! and double-destroy become [`ArrStatus::InvalidHandle`] rather than UB.
//!
//! [`ArrStatus::InvalidHandle`]: crate::status::ArrStatus::InvalidHandle

/// Decoded handle: slot index in the upper 32 bits, generation in the lower.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Handle {
    index: u32,
    generation: u32,
}

impl Handle {
    fn from_raw(raw: u64) -> Self {
        Self {
            index: (raw >> 32) as u32,
            generation: raw as u32,
        }
    }

    fn into_raw(self) -> u64 {
        (u64::from(self.index) << 32) | u64::from(self.generation)
    }
}

struct Entry<T> {
    generation: u32,
    value: Option<T>,
}

/// Owned values addressed by `u64` handles.
pub(crate) struct HandleTable<T> {
    entries: Vec<Entry<T>>,
    vacant: Vec<u32>,
}

impl<T> HandleTable<T> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
            vacant: Vec::new(),
        }
    }

    /// Store `value`, reusing a vacant slot when one exists.
    pub(crate) fn insert(&mut self, value: T) -> u64 {
        let index = match self.vacant.pop() {
            Some(index) => {
                self.entries[index as usize].value = Some(value);
                index
            }
            None => {
                let index = self.entries.len() as u32;
                self.entries.push(Entry {
                    generation: 0,
                    value: Some(value),
                });
                index
            }
        };
        Handle {
            index,
            generation: self.entries[index as usize].generation,
        }
        .into_raw()
    }

    fn entry(&self, raw: u64) -> Option<&Entry<T>> {
        let h = Handle::from_raw(raw);
        self.entries
            .get(h.index as usize)
            .filter(|e| e.generation == h.generation)
    }

    pub(crate) fn get(&self, raw: u64) -> Option<&T> {
        self.entry(raw)?.value.as_ref()
    }

    pub(crate) fn get_mut(&mut self, raw: u64) -> Option<&mut T> {
        let h = Handle::from_raw(raw);
        let entry = self.entries.get_mut(h.index as usize)?;
        if entry.generation != h.generation {
            return None;
        }
        entry.value.as_mut()
    }

    /// Take the value out and invalidate every copy of the handle.
    ///
    /// A slot whose generation wraps to 0 is retired for good, so a handle
    /// from its first life can never match again.
    pub(crate) fn remove(&mut self, raw: u64) -> Option<T> {
        let h = Handle::from_raw(raw);
        let entry = self.entries.get_mut(h.index as usize)?;
        if entry.generation != h.generation {
            return None;
        }
        let value = entry.value.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        if entry.generation != 0 {
            self.vacant.push(h.index);
        }
        Some(value)
    }

    #[cfg(test)]
    fn live(&self) -> usize {
        self.entries.iter().filter(|e| e.value.is_some()).count()
    }
}
