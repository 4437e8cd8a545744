//! Contiguous list change between two versions of a sequence.

/// One replaced run: `removed` (old) was replaced by `added` (new), both
/// starting at index `from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListChange<T> {
    pub from: usize,
    pub removed: Vec<T>,
    pub added: Vec<T>,
}

impl<T: PartialEq + Clone> ListChange<T> {
    /// Minimal single run turning `old` into `new`, found by trimming the
    /// common prefix and suffix. `None` when the sequences are equal.
    pub fn between(old: &[T], new: &[T]) -> Option<Self> {
        let prefix = old
            .iter()
            .zip(new.iter())
            .take_while(|(a, b)| a == b)
            .count();
        if prefix == old.len() && prefix == new.len() {
            return None;
        }

        let max_suffix = old.len().min(new.len()) - prefix;
        let suffix = old
            .iter()
            .rev()
            .zip(new.iter().rev())
            .take(max_suffix)
            .take_while(|(a, b)| a == b)
            .count();

        Some(Self {
            from: prefix,
            removed: old[prefix..old.len() - suffix].to_vec(),
            added: new[prefix..new.len() - suffix].to_vec(),
        })
    }
}

impl<T> ListChange<T> {
    /// Equal-sized non-empty runs: the "edit in place" shape.
    pub fn is_replacement(&self) -> bool {
        !self.removed.is_empty() && self.removed.len() == self.added.len()
    }
}
