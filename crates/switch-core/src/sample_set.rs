//! Unordered set with constant time insertion, removal and uniform sampling.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;
use rand::Rng;

use crate::errors::{ErrorInfo, SwitchError};

/// Collection of unique items supporting O(1) add, remove, replace and choice.
///
/// Items live in a dense sequence paired with a hash index from item to
/// position; both sides are owned by a single [`IndexSet`] and are never
/// exposed independently, so they cannot drift apart. Removal swaps the last
/// item into the vacated slot, hence iteration order is unspecified once the
/// set has been mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSet<T: Hash + Eq> {
    items: IndexSet<T>,
}

impl<T: Hash + Eq> Default for SampleSet<T> {
    fn default() -> Self {
        Self {
            items: IndexSet::new(),
        }
    }
}

impl<T: Hash + Eq + Debug> SampleSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: IndexSet::with_capacity(capacity),
        }
    }

    /// Builds a set from unique items, rejecting the first duplicate.
    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Result<Self, SwitchError> {
        let iter = items.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        for item in iter {
            set.add(item)?;
        }
        Ok(set)
    }

    /// Inserts a new item.
    pub fn add(&mut self, item: T) -> Result<(), SwitchError> {
        if self.items.contains(&item) {
            return Err(duplicate(&item));
        }
        self.items.insert(item);
        Ok(())
    }

    /// Removes an item by swapping the last item into its slot.
    pub fn remove(&mut self, item: &T) -> Result<(), SwitchError> {
        if self.items.swap_remove(item) {
            Ok(())
        } else {
            Err(missing(item))
        }
    }

    /// Substitutes `new` for `old` at `old`'s current position.
    ///
    /// With `check` set, `new` is looked up before anything else and a collision
    /// is reported as [`SwitchError::DuplicateItem`]. Callers that already know
    /// `new` is absent (the switch moves, after their own membership tests) pass
    /// `check = false` to skip the lookup; a collision is still refused without
    /// mutating the set.
    pub fn replace(&mut self, old: &T, new: T, check: bool) -> Result<(), SwitchError> {
        if check && self.items.contains(&new) {
            return Err(duplicate(&new));
        }
        let position = self.items.get_index_of(old).ok_or_else(|| missing(old))?;
        let (_, inserted) = self.items.insert_full(new);
        if !inserted {
            return Err(SwitchError::DuplicateItem(
                ErrorInfo::new("duplicate-item", "replacement is already present")
                    .with_context("old", format!("{old:?}")),
            ));
        }
        // the appended replacement is swapped into the vacated position
        self.items.swap_remove_index(position);
        Ok(())
    }

    /// Returns an item drawn uniformly at random.
    pub fn choice<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T, SwitchError> {
        if self.items.is_empty() {
            return Err(SwitchError::EmptyCollection(ErrorInfo::new(
                "empty-sample-set",
                "cannot sample from an empty set",
            )));
        }
        let index = rng.gen_range(0..self.items.len());
        self.items.get_index(index).ok_or_else(|| {
            SwitchError::NotFound(
                ErrorInfo::new("missing-index", "sampled index is out of range")
                    .with_context("index", index.to_string()),
            )
        })
    }

    /// Returns the item currently stored at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get_index(index)
    }

    /// Returns whether the item is present.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the set holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items in storage order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl<'a, T: Hash + Eq> IntoIterator for &'a SampleSet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn duplicate<T: Debug>(item: &T) -> SwitchError {
    SwitchError::DuplicateItem(
        ErrorInfo::new("duplicate-item", "item is already present")
            .with_context("item", format!("{item:?}")),
    )
}

fn missing<T: Debug>(item: &T) -> SwitchError {
    SwitchError::NotFound(
        ErrorInfo::new("missing-item", "item is not present")
            .with_context("item", format!("{item:?}")),
    )
}
