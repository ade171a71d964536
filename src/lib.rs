//! # Linked Collections
//!
//! Insertion-ordered collections with reference semantics and an explicit
//! `move_next`/`current` cursor protocol, modeled on the core collection
//! behavior of managed-runtime languages.
//!
//! This crate provides `List`, `LinkedHashMap`, and `LinkedHashSet`, plus a
//! family of lazy sequence views (`map`, `filter`, `expand`, `take`, `skip`,
//! ...) defined over the [`Sequence`] trait.
//!
//! ## Key Features
//!
//! * **Reference Semantics:** Handles are cheap to clone and cloning
//!   aliases the same collection; every alias observes mutations made
//!   through any other. Identity is exposed via `ptr_eq`.
//! * **Insertion Order:** Maps and sets iterate in insertion order.
//!   Overwriting a value keeps the key's position; removing and
//!   re-inserting moves it to the end.
//! * **Fail-Fast Cursors:** Structural mutation during iteration is
//!   detected and reported as `ConcurrentModification` instead of
//!   producing silently corrupt walks.
//! * **Partitioned Hashing:** String and integer keys hash over raw bytes
//!   or bit patterns with `FnvHasher`; everything else goes through the
//!   key's own `Hash` impl or a caller-supplied [`Equality`].
//! * **Lazy Views:** Sequence combinators build descriptors, not data;
//!   work happens at `move_next`, once per produced element per pass.
//!
//! ## Examples
//!
//! ### List
//!
//! ```rust
//! use linked_collections::{List, Sequence};
//!
//! let list = List::new();
//! list.push(3).unwrap();
//! list.push(1).unwrap();
//! list.push(2).unwrap();
//!
//! list.sort().unwrap();
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//!
//! // Clones alias the same list.
//! let alias = list.clone();
//! alias.push(4).unwrap();
//! assert_eq!(list.len(), 4);
//!
//! // Lazy views re-evaluate against the live list.
//! let doubled = list.clone().map(|x| x * 2);
//! assert_eq!(doubled.to_list().unwrap().to_vec(), vec![2, 4, 6, 8]);
//! ```
//!
//! ### LinkedHashMap
//!
//! ```rust
//! use linked_collections::{LinkedHashMap, Sequence};
//!
//! let map = LinkedHashMap::new();
//! map.insert("b".to_string(), 2);
//! map.insert("a".to_string(), 1);
//!
//! // Iterates in insertion order, not key order.
//! let keys = map.keys().to_list().unwrap();
//! assert_eq!(keys.to_vec(), vec!["b".to_string(), "a".to_string()]);
//!
//! // Overwriting keeps the position.
//! map.insert("b".to_string(), 20);
//! assert_eq!(map.values().to_list().unwrap().to_vec(), vec![20, 1]);
//! ```
//!
//! ### LinkedHashSet
//!
//! ```rust
//! use linked_collections::{LinkedHashSet, Sequence};
//!
//! let set = LinkedHashSet::new();
//! assert!(set.add(2i64));
//! assert!(set.add(1));
//! assert!(!set.add(2)); // already present
//!
//! assert_eq!(set.to_list().unwrap().to_vec(), vec![2, 1]);
//! ```

// --- Module Declarations ---

mod arena;

pub mod cursor;
pub mod error;
pub mod key;
pub mod lazy;
pub mod list;
pub mod map;
pub mod set;

// --- Re-exports ---

pub use cursor::{Cursor, Sequence};
pub use error::{CollectionError, Result};
pub use key::{Equality, KeyKind, MapKey};
pub use lazy::ItemsSeq;
pub use list::{List, ListKind};
pub use map::LinkedHashMap;
pub use set::LinkedHashSet;
