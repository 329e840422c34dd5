//! Generational slab with free-list slot reuse.
//!
//! [`Slab`] stores values in a `Vec` of slots. Removing a value pushes its
//! slot onto a free list and bumps the slot's generation; the next insert
//! reuses the most recently freed slot. Lookups compare the caller's
//! generation against the slot's, so a handle from before the removal
//! resolves to nothing. A slot whose generation counter is exhausted is
//! retired instead of reused, so no handle ever resolves twice.

use crate::error::ArenaError;

/// One slot: the current generation and the value, if occupied.
#[derive(Clone, Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
    /// Generation exhausted; never reused.
    retired: bool,
}

impl<T> Slot<T> {
    /// Move to the next generation, or retire the slot if there is none.
    /// Returns whether the slot can be reused.
    fn advance(&mut self) -> bool {
        match self.generation.checked_add(1) {
            Some(next) => {
                self.generation = next;
                true
            }
            None => {
                self.retired = true;
                false
            }
        }
    }
}

/// Slot storage addressed by `(index, generation)` pairs.
#[derive(Clone, Debug)]
pub struct Slab<T> {
    slots: Vec<Slot<T>>,
    /// Indices of vacant slots available for reuse.
    free_list: Vec<u32>,
    len: usize,
    max_slots: u32,
    /// Name used in errors and log lines.
    pool: &'static str,
}

impl<T> Slab<T> {
    /// Create an empty slab that reserves `capacity` slots and never grows
    /// past `max_slots`.
    pub fn new(pool: &'static str, capacity: usize, max_slots: u32) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            len: 0,
            max_slots,
            pool,
        }
    }

    /// Insert the value built by `make`, which receives the `(index,
    /// generation)` the value will live at.
    ///
    /// Returns `Err(ArenaError::CapacityExceeded)` when every slot up to
    /// `max_slots` is occupied.
    pub fn insert_with(&mut self, make: impl FnOnce(u32, u32) -> T) -> Result<(u32, u32), ArenaError> {
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(make(index, slot.generation));
            self.len += 1;
            return Ok((index, slot.generation));
        }

        if self.slots.len() >= self.max_slots as usize {
            log::warn!("{} slab full at {} slots", self.pool, self.max_slots);
            return Err(ArenaError::CapacityExceeded {
                pool: self.pool,
                capacity: self.max_slots,
            });
        }
        if self.slots.len() == self.slots.capacity() {
            log::debug!("{} slab growing past {} slots", self.pool, self.slots.len());
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            value: Some(make(index, 0)),
            retired: false,
        });
        self.len += 1;
        Ok((index, 0))
    }

    /// Insert `value`. See [`insert_with`](Self::insert_with).
    pub fn insert(&mut self, value: T) -> Result<(u32, u32), ArenaError> {
        self.insert_with(|_, _| value)
    }

    /// The value at `index` if the slot is occupied at `generation`.
    pub fn get(&self, index: u32, generation: u32) -> Option<&T> {
        self.slots
            .get(index as usize)
            .filter(|slot| slot.generation == generation)
            .and_then(|slot| slot.value.as_ref())
    }

    /// Mutable access to the value at `index` if occupied at `generation`.
    pub fn get_mut(&mut self, index: u32, generation: u32) -> Option<&mut T> {
        self.slots
            .get_mut(index as usize)
            .filter(|slot| slot.generation == generation)
            .and_then(|slot| slot.value.as_mut())
    }

    /// Take the value out of its slot and retire the slot's generation.
    ///
    /// Returns `Err(ArenaError::StaleHandle)` if the slot is vacant or has
    /// moved on to a later generation.
    pub fn remove(&mut self, index: u32, generation: u32) -> Result<T, ArenaError> {
        let stale = ArenaError::StaleHandle { index, generation };
        let slot = self.slots.get_mut(index as usize).ok_or(stale.clone())?;
        if slot.generation != generation {
            return Err(stale);
        }
        let value = slot.value.take().ok_or(stale)?;
        if slot.advance() {
            self.free_list.push(index);
        } else {
            log::warn!("{} slot {index} retired: generation exhausted", self.pool);
        }
        self.len -= 1;
        Ok(value)
    }

    /// Whether `(index, generation)` names an occupied slot.
    pub fn contains(&self, index: u32, generation: u32) -> bool {
        self.get(index, generation).is_some()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total slots (occupied, vacant and retired).
    pub fn total_slots(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots retired with an exhausted generation.
    pub fn retired_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.retired).count()
    }

    /// Number of vacant slots waiting for reuse.
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Iterate over occupied slots as `(index, generation, &value)`.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &T)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.value
                .as_ref()
                .map(|value| (index as u32, slot.generation, value))
        })
    }

    /// Drop every value and move every occupied slot to its next generation.
    pub fn clear(&mut self) {
        self.free_list.clear();
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if slot.value.take().is_some() {
                slot.advance();
            }
            if !slot.retired {
                self.free_list.push(index as u32);
            }
        }
        self.len = 0;
    }
}
