//! Slot arena with typed indices and slot reuse.
//!
//! Elements live in a `Vec` of slots and are referenced by [`ArenaId`]s.
//! Releasing an element hands its value back immediately and puts the slot
//! on a free list, so the next allocation reuses it instead of growing the
//! backing storage.

use std::fmt;
use std::marker::PhantomData;

/// A typed index into an [`Arena`].
pub struct ArenaId<T> {
    index: usize,
    _marker: PhantomData<T>,
}

// manual impls so that `T` need not be Clone/Copy/Eq
impl<T> Clone for ArenaId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArenaId<T> {}

impl<T> PartialEq for ArenaId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for ArenaId<T> {}

impl<T> fmt::Debug for ArenaId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArenaId({})", self.index)
    }
}

impl<T> ArenaId<T> {
    /// The raw slot index.
    pub fn index(self) -> usize {
        self.index
    }
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<usize> },
}

/// Arena of `T` with a free list of released slots.
#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    live: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Arena::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Arena<T> {
        Arena {
            slots: Vec::new(),
            free: None,
            live: 0,
        }
    }

    /// Number of live (allocated, not yet released) elements.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Total slots, live or free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Store a value, reusing a released slot when one is available.
    pub fn alloc(&mut self, value: T) -> ArenaId<T> {
        let index = match self.free {
            Some(index) => {
                self.free = match self.slots[index] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => panic!("arena free list points at live slot {}", index),
                };
                self.slots[index] = Slot::Occupied(value);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(value));
                self.slots.len() - 1
            }
        };
        self.live += 1;
        ArenaId {
            index,
            _marker: PhantomData,
        }
    }

    /// Release an element and return its value.
    ///
    /// # Panics
    ///
    /// Panics if `id` was already released.
    pub fn release(&mut self, id: ArenaId<T>) -> T {
        let slot = std::mem::replace(
            &mut self.slots[id.index],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        match slot {
            Slot::Occupied(value) => {
                self.free = Some(id.index);
                self.live -= 1;
                value
            }
            Slot::Vacant { .. } => panic!("double release of arena slot {}", id.index),
        }
    }

    /// Get the element for an ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` has been released.
    pub fn get(&self, id: ArenaId<T>) -> &T {
        match &self.slots[id.index] {
            Slot::Occupied(value) => value,
            Slot::Vacant { .. } => panic!("stale arena id {}", id.index),
        }
    }

    /// Get the element for an ID mutably.
    ///
    /// # Panics
    ///
    /// Panics if `id` has been released.
    pub fn get_mut(&mut self, id: ArenaId<T>) -> &mut T {
        match &mut self.slots[id.index] {
            Slot::Occupied(value) => value,
            Slot::Vacant { .. } => panic!("stale arena id {}", id.index),
        }
    }

    /// Drop every element and forget all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.live = 0;
    }
}

#[test]
fn test_alloc_get() {
    let mut arena = Arena::new();
    let a = arena.alloc("a");
    let b = arena.alloc("b");
    assert_ne!(a, b);
    assert_eq!(arena.get(a), &"a");
    *arena.get_mut(b) = "c";
    assert_eq!(arena.get(b), &"c");
    assert_eq!(arena.len(), 2);
}

#[test]
fn test_release_reuses_slot() {
    let mut arena = Arena::new();
    let a = arena.alloc(1);
    let _b = arena.alloc(2);
    assert_eq!(arena.release(a), 1);
    assert_eq!(arena.len(), 1);

    let c = arena.alloc(3);
    assert_eq!(c.index(), a.index());
    assert_eq!(arena.capacity(), 2);
    assert_eq!(arena.get(c), &3);
}

#[test]
fn test_release_drops_value() {
    use std::rc::Rc;

    let shared = Rc::new(());
    let mut arena = Arena::new();
    let id = arena.alloc(Rc::clone(&shared));
    assert_eq!(Rc::strong_count(&shared), 2);
    drop(arena.release(id));
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
#[should_panic]
fn test_double_release() {
    let mut arena = Arena::new();
    let id = arena.alloc(0);
    arena.release(id);
    arena.release(id);
}
