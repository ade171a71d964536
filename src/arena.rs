//! Slot arena backing the linked hash table's cells.
//!
//! Cells are addressed by integer [`Ptr`] handles instead of references, so
//! unlinking is an O(1) index operation and freed slots are pooled for
//! reuse through an intrusive free list.  A fresh allocation may reuse a
//! freed slot's index; the map's modification counter is what keeps stale
//! handles from ever being followed.

use crate::key::KeyKind;

/// Index handle for a cell slot.  `Ptr::NULL` terminates the linked list
/// and the free list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ptr(u32);

impl Ptr {
    pub(crate) const NULL: Ptr = Ptr(u32::MAX);

    fn new(index: usize) -> Ptr {
        debug_assert!(index < u32::MAX as usize, "arena slot index overflow");
        Ptr(index as u32)
    }

    pub(crate) fn is_null(self) -> bool {
        self == Ptr::NULL
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One present key-value pair, doubly linked into the global insertion
/// order.  `kind` is the bucket tag captured at insertion time; `hash` is
/// cached so tables can rehash without consulting the key again.
pub(crate) struct Cell<K, V> {
    pub key: K,
    pub value: V,
    pub hash: u64,
    pub kind: KeyKind,
    pub prev: Ptr,
    pub next: Ptr,
}

enum Slot<K, V> {
    Occupied(Cell<K, V>),
    Vacant { next_free: Ptr },
}

/// Growable slot table with free-list reuse.
pub(crate) struct Arena<K, V> {
    slots: Vec<Slot<K, V>>,
    free_head: Ptr,
    live: usize,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: Ptr::NULL,
            live: 0,
        }
    }

    /// Number of occupied cells.
    pub(crate) fn len(&self) -> usize {
        self.live
    }

    /// Stores a cell, reusing a freed slot when one is available.
    pub(crate) fn alloc(&mut self, cell: Cell<K, V>) -> Ptr {
        self.live += 1;
        if self.free_head.is_null() {
            let ptr = Ptr::new(self.slots.len());
            self.slots.push(Slot::Occupied(cell));
            ptr
        } else {
            let ptr = self.free_head;
            match std::mem::replace(&mut self.slots[ptr.index()], Slot::Occupied(cell)) {
                Slot::Vacant { next_free } => self.free_head = next_free,
                Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
            }
            ptr
        }
    }

    /// Vacates a slot, returning its cell and pushing the slot onto the
    /// free list.
    pub(crate) fn free(&mut self, ptr: Ptr) -> Cell<K, V> {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[ptr.index()], vacant) {
            Slot::Occupied(cell) => {
                self.free_head = ptr;
                self.live -= 1;
                cell
            }
            Slot::Vacant { .. } => unreachable!("double free of a cell slot"),
        }
    }

    pub(crate) fn cell(&self, ptr: Ptr) -> &Cell<K, V> {
        match &self.slots[ptr.index()] {
            Slot::Occupied(cell) => cell,
            Slot::Vacant { .. } => unreachable!("dangling cell pointer"),
        }
    }

    pub(crate) fn cell_mut(&mut self, ptr: Ptr) -> &mut Cell<K, V> {
        match &mut self.slots[ptr.index()] {
            Slot::Occupied(cell) => cell,
            Slot::Vacant { .. } => unreachable!("dangling cell pointer"),
        }
    }

    /// Drops every cell and resets the free list.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = Ptr::NULL;
        self.live = 0;
    }
}
