//! Dense id-keyed storage shared by every entity kind.

/// Entity that can be stored inside a [`Registry`].
pub(crate) trait Keyed {
    /// Identifier type, allocated in increasing order.
    type Id: Copy + Ord;

    /// Identifier of the entity.
    fn id(&self) -> Self::Id;
}

/// Entities kept sorted by identifier.
///
/// Identifiers are allocated monotonically so insertion is an append in
/// practice; removal keeps the remaining entries in order.
#[derive(Clone, Debug)]
pub(crate) struct Registry<T> {
    entries: Vec<T>,
}

impl<T: Keyed> Registry<T> {
    /// Creates an empty registry.
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Stores an entity, keeping identifier order.
    pub(crate) fn insert(&mut self, entity: T) {
        let id = entity.id();
        match self.entries.last() {
            Some(last) if last.id() > id => {
                let index = self.entries.partition_point(|entry| entry.id() < id);
                self.entries.insert(index, entity);
            }
            _ => self.entries.push(entity),
        }
    }

    fn index_of(&self, id: T::Id) -> Option<usize> {
        self.entries.binary_search_by_key(&id, Keyed::id).ok()
    }

    pub(crate) fn get(&self, id: T::Id) -> Option<&T> {
        self.index_of(id).map(|index| &self.entries[index])
    }

    pub(crate) fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.index_of(id).map(move |index| &mut self.entries[index])
    }

    pub(crate) fn contains(&self, id: T::Id) -> bool {
        self.index_of(id).is_some()
    }

    /// Removes and returns the entity with the given identifier.
    pub(crate) fn remove(&mut self, id: T::Id) -> Option<T> {
        self.index_of(id).map(|index| self.entries.remove(index))
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Identifiers matching `filter`, captured before any mutation.
    pub(crate) fn ids_where(&self, mut filter: impl FnMut(&T) -> bool) -> Vec<T::Id> {
        self.entries
            .iter()
            .filter(|entry| filter(*entry))
            .map(Keyed::id)
            .collect()
    }
}
