//! Versioned store collections and the derived lists cached from them.

/// A value tagged with the number of times it has been replaced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Versioned<T> {
    version: u64,
    value: T,
}

impl<T> Versioned<T> {
    pub fn new(value: T) -> Self {
        Self { version: 0, value }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value and bumps the version, even when the new value is equal.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.version += 1;
    }
}

/// When a [`DerivedList`] is recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillPolicy {
    /// Computed from the first non-empty source and never again.
    Once,
    /// Recomputed whenever the source version moves.
    Track,
}

/// A list cached from a [`Versioned`] source.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedList<T> {
    items: Vec<T>,
    computed_from: Option<u64>,
    policy: FillPolicy,
}

impl<T> DerivedList<T> {
    pub fn new(policy: FillPolicy) -> Self {
        Self {
            items: Vec::new(),
            computed_from: None,
            policy,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn policy(&self) -> FillPolicy {
        self.policy
    }

    /// Version of the source the current items were computed from.
    pub fn computed_from(&self) -> Option<u64> {
        self.computed_from
    }

    pub fn needs_refresh(&self, source_version: u64) -> bool {
        match (self.policy, self.computed_from) {
            (_, None) => true,
            (FillPolicy::Once, Some(_)) => false,
            (FillPolicy::Track, Some(version)) => version != source_version,
        }
    }

    /// Stores `mapped` if the list is out of date with respect to `source_version`.
    ///
    /// `None` means the source was empty: the list keeps its items and is not
    /// marked as computed. Returns whether the items were replaced.
    pub fn refresh(&mut self, source_version: u64, mapped: impl FnOnce() -> Option<Vec<T>>) -> bool {
        if !self.needs_refresh(source_version) {
            return false;
        }
        match mapped() {
            Some(items) => {
                self.items = items;
                self.computed_from = Some(source_version);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versioned_set_bumps_version() {
        let mut source = Versioned::new(vec![1]);
        assert_eq!(source.version(), 0);

        source.set(vec![1]);
        source.set(vec![2]);

        assert_eq!(source.version(), 2);
        assert_eq!(source.get(), &vec![2]);
    }

    #[test]
    fn fresh_list_needs_refresh() {
        let once = DerivedList::<u32>::new(FillPolicy::Once);
        let track = DerivedList::<u32>::new(FillPolicy::Track);

        assert!(once.needs_refresh(0));
        assert!(track.needs_refresh(0));
        assert_eq!(once.computed_from(), None);
    }

    #[test]
    fn once_list_ignores_later_versions() {
        let mut list = DerivedList::new(FillPolicy::Once);

        assert!(list.refresh(1, || Some(vec!["a"])));
        assert!(!list.refresh(2, || Some(vec!["b"])));

        assert_eq!(list.items(), &["a"]);
        assert_eq!(list.computed_from(), Some(1));
    }

    #[test]
    fn track_list_follows_versions() {
        let mut list = DerivedList::new(FillPolicy::Track);

        assert!(list.refresh(1, || Some(vec!["a"])));
        assert!(!list.refresh(1, || Some(vec!["ignored"])));
        assert!(list.refresh(2, || Some(vec!["b"])));

        assert_eq!(list.items(), &["b"]);
    }

    #[test]
    fn empty_source_leaves_items_untouched() {
        let mut list = DerivedList::new(FillPolicy::Track);
        list.refresh(1, || Some(vec!["a"]));

        assert!(!list.refresh(2, || None));

        assert_eq!(list.items(), &["a"]);
        assert_eq!(list.computed_from(), Some(1));
    }

    #[test]
    fn once_list_fills_after_empty_source() {
        let mut list = DerivedList::new(FillPolicy::Once);

        assert!(!list.refresh(1, || None));
        assert!(list.is_empty());
        assert!(list.needs_refresh(1));

        assert!(list.refresh(2, || Some(vec!["a"])));
        assert_eq!(list.items(), &["a"]);
    }

    #[test]
    fn mapper_not_called_when_up_to_date() {
        let mut list = DerivedList::new(FillPolicy::Once);
        list.refresh(1, || Some(vec![1]));

        let refreshed = list.refresh(2, || panic!("should not map"));

        assert!(!refreshed);
    }
}
