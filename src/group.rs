//! Stone groups (chains) and the arena that owns them.
//!
//! Every occupied cell of a [`Board`](crate::board::Board) stores the
//! [`GroupId`] of the chain it belongs to. The chains themselves live in a
//! [`GroupArena`], so many cells can refer to one group without shared
//! mutable pointers. Merging rewrites the absorbed cells to the surviving id
//! and frees the absorbed slot.

use std::collections::BTreeSet;

use crate::square::Square;

/// A connected set of same-colored stones and its liberties.
///
/// `liberties` is kept equal to the set of empty points adjacent to `stones`
/// by incremental updates from the board; it is never recomputed by scanning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoneGroup {
    stones: BTreeSet<Square>,
    liberties: BTreeSet<Square>,
    last_liberty: Square,
}

impl StoneGroup {
    /// A group holding a single stone and no liberties yet.
    pub fn new(sq: Square) -> Self {
        Self {
            stones: BTreeSet::from([sq]),
            liberties: BTreeSet::new(),
            last_liberty: Square::EMPTY,
        }
    }

    /// Number of stones.
    #[inline]
    pub fn count(&self) -> usize {
        self.stones.len()
    }

    /// Number of liberties.
    #[inline]
    pub fn lib_count(&self) -> usize {
        self.liberties.len()
    }

    pub fn stones(&self) -> impl Iterator<Item = Square> + '_ {
        self.stones.iter().copied()
    }

    pub fn liberties(&self) -> impl Iterator<Item = Square> + '_ {
        self.liberties.iter().copied()
    }

    pub fn contains(&self, sq: Square) -> bool {
        self.stones.contains(&sq)
    }

    pub fn has_liberty(&self, sq: Square) -> bool {
        self.liberties.contains(&sq)
    }

    /// The most recently inserted liberty.
    ///
    /// Updated on every insertion, and by [`merge`](Self::merge) when a single
    /// liberty remains. It names the sole liberty only while `lib_count() == 1`
    /// holds right after such an update.
    #[inline]
    pub fn last_liberty(&self) -> Square {
        self.last_liberty
    }

    /// Record `sq` as a liberty. Passes and known liberties are ignored.
    pub fn add_lib(&mut self, sq: Square) {
        if sq.is_pass() {
            return;
        }
        if self.liberties.insert(sq) {
            self.last_liberty = sq;
        }
    }

    /// Forget `sq` as a liberty, if it was one.
    pub fn remove_lib(&mut self, sq: Square) {
        if sq.is_pass() {
            return;
        }
        self.liberties.remove(&sq);
    }

    /// Add a stone without touching liberties.
    pub(crate) fn add_stone(&mut self, sq: Square) {
        self.stones.insert(sq);
    }

    /// Absorb `other` into this group.
    ///
    /// Liberties occupied by either group's stones are dropped.
    pub fn merge(&mut self, other: &StoneGroup) {
        self.stones.extend(other.stones.iter().copied());

        let stones = &self.stones;
        let mut liberties = std::mem::take(&mut self.liberties);
        liberties.extend(other.liberties.iter().copied());
        liberties.retain(|sq| !stones.contains(sq));
        self.liberties = liberties;

        if self.liberties.len() == 1 {
            if let Some(&only) = self.liberties.first() {
                self.last_liberty = only;
            }
        }
    }
}

/// Handle to a group stored in a [`GroupArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(u32);

/// Slot map owning all groups of one board.
///
/// Cloning the arena together with the per-cell ids keeps the sharing of
/// groups between cells intact.
#[derive(Clone, Debug, Default)]
pub struct GroupArena {
    slots: Vec<Option<StoneGroup>>,
    free: Vec<GroupId>,
}

impl GroupArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a group, reusing a freed slot when one exists.
    pub fn insert(&mut self, group: StoneGroup) -> GroupId {
        if let Some(id) = self.free.pop() {
            self.slots[id.0 as usize] = Some(group);
            return id;
        }
        let id = GroupId(self.slots.len() as u32);
        self.slots.push(Some(group));
        id
    }

    /// Take a group out and free its slot.
    pub fn remove(&mut self, id: GroupId) -> Option<StoneGroup> {
        let group = self.slots.get_mut(id.0 as usize)?.take()?;
        self.free.push(id);
        Some(group)
    }

    pub fn get(&self, id: GroupId) -> Option<&StoneGroup> {
        self.slots.get(id.0 as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, id: GroupId) -> Option<&mut StoneGroup> {
        self.slots.get_mut(id.0 as usize)?.as_mut()
    }

    /// Number of live groups.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live groups in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (GroupId, &StoneGroup)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|g| (GroupId(i as u32), g)))
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
