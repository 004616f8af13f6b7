use crate::RecordType;

/// Records grouped by query type, in first-seen order of the types.
///
/// Group counts per lookup are tiny, so a linear scan beats hashing here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QtypeGroups<T> {
    groups: Vec<(RecordType, Vec<T>)>,
}

impl<T> QtypeGroups<T> {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Appends `item` to the group for `qtype`, opening the group if it is new.
    pub fn push(&mut self, qtype: RecordType, item: T) {
        match self.groups.iter_mut().find(|(rt, _)| *rt == qtype) {
            Some((_, items)) => items.push(item),
            None => self.groups.push((qtype, vec![item])),
        }
    }

    pub fn get(&self, qtype: RecordType) -> Option<&[T]> {
        self.groups
            .iter()
            .find(|(rt, _)| *rt == qtype)
            .map(|(_, items)| items.as_slice())
    }

    pub fn qtypes(&self) -> impl Iterator<Item = RecordType> + '_ {
        self.groups.iter().map(|(rt, _)| *rt)
    }
}

impl<T> Default for QtypeGroups<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for QtypeGroups<T> {
    type Item = (RecordType, Vec<T>);
    type IntoIter = std::vec::IntoIter<(RecordType, Vec<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
