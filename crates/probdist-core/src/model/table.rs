use crate::model::label::Label;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Mapping from outcome keys to probability values.
///
/// Every distribution kind stores exactly one table; the container accessors
/// (iteration, length, lookup, key listing) live here once and the kinds only
/// differ in how they render. Keys are kept in sorted order, so iteration and
/// `keys()` both follow the key ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbabilityTable<K, V = Label> {
    p: BTreeMap<K, V>,
}

impl<K: Ord, V> ProbabilityTable<K, V> {
    pub fn new() -> Self {
        Self { p: BTreeMap::new() }
    }

    pub fn from_map(p: BTreeMap<K, V>) -> Self {
        Self { p }
    }

    pub fn len(&self) -> usize {
        self.p.len()
    }

    pub fn is_empty(&self) -> bool {
        self.p.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.p.get(key)
    }

    /// Stored value for `key`, or the zero value when the key is absent.
    pub fn get_or_zero(&self, key: &K) -> V
    where
        V: Clone + Default,
    {
        self.p.get(key).cloned().unwrap_or_default()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, K, V> {
        self.p.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, K, V> {
        self.p.keys()
    }
}

impl<K: Ord, V> Default for ProbabilityTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for ProbabilityTable<K, V> {
    fn from(p: BTreeMap<K, V>) -> Self {
        Self::from_map(p)
    }
}

impl<K, V, KI, VI> FromIterator<(KI, VI)> for ProbabilityTable<K, V>
where
    K: Ord,
    KI: Into<K>,
    VI: Into<V>,
{
    fn from_iter<I: IntoIterator<Item = (KI, VI)>>(iter: I) -> Self {
        Self {
            p: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a ProbabilityTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = btree_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.p.iter()
    }
}

impl<K, V> IntoIterator for ProbabilityTable<K, V> {
    type Item = (K, V);
    type IntoIter = btree_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.p.into_iter()
    }
}
