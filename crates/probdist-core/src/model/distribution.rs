use crate::model::kind::DistributionKind;
use crate::model::label::Label;
use crate::model::outcome::{GivenOutcome, Outcome, OutcomeTuple};
use crate::model::table::ProbabilityTable;
use core::fmt;
use std::collections::btree_map;

/// A marginal, joint, partial or conditional distribution.
///
/// Each kind wraps a single table `p`. Container behavior is shared by every
/// kind and forwards to the table; only the rendering differs per kind (see
/// the `Display` impl).
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution<V = Label> {
    Marginal { p: ProbabilityTable<Outcome, V> },
    Joint { p: ProbabilityTable<OutcomeTuple, V> },
    Partial { p: ProbabilityTable<GivenOutcome, V> },
    Conditional { p: ProbabilityTable<GivenOutcome, V> },
}

/// Key of any distribution kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutcomeKey {
    Single(Outcome),
    Tuple(OutcomeTuple),
    Given(GivenOutcome),
}

impl From<Outcome> for OutcomeKey {
    fn from(outcome: Outcome) -> Self {
        OutcomeKey::Single(outcome)
    }
}

impl From<&str> for OutcomeKey {
    fn from(outcome: &str) -> Self {
        OutcomeKey::Single(Outcome::new(outcome))
    }
}

impl From<OutcomeTuple> for OutcomeKey {
    fn from(tuple: OutcomeTuple) -> Self {
        OutcomeKey::Tuple(tuple)
    }
}

impl From<GivenOutcome> for OutcomeKey {
    fn from(given: GivenOutcome) -> Self {
        OutcomeKey::Given(given)
    }
}

impl fmt::Display for OutcomeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeKey::Single(outcome) => write!(f, "{outcome}"),
            OutcomeKey::Tuple(tuple) => write!(f, "{tuple}"),
            OutcomeKey::Given(given) => write!(f, "{given}"),
        }
    }
}

impl<V> Distribution<V> {
    pub fn marginal(p: impl Into<ProbabilityTable<Outcome, V>>) -> Self {
        Distribution::Marginal { p: p.into() }
    }

    pub fn joint(p: impl Into<ProbabilityTable<OutcomeTuple, V>>) -> Self {
        Distribution::Joint { p: p.into() }
    }

    pub fn partial(p: impl Into<ProbabilityTable<GivenOutcome, V>>) -> Self {
        Distribution::Partial { p: p.into() }
    }

    pub fn conditional(p: impl Into<ProbabilityTable<GivenOutcome, V>>) -> Self {
        Distribution::Conditional { p: p.into() }
    }

    pub fn empty(kind: DistributionKind) -> Self {
        match kind {
            DistributionKind::Marginal => Distribution::Marginal {
                p: ProbabilityTable::new(),
            },
            DistributionKind::Joint => Distribution::Joint {
                p: ProbabilityTable::new(),
            },
            DistributionKind::Partial => Distribution::Partial {
                p: ProbabilityTable::new(),
            },
            DistributionKind::Conditional => Distribution::Conditional {
                p: ProbabilityTable::new(),
            },
        }
    }

    pub const fn kind(&self) -> DistributionKind {
        match self {
            Distribution::Marginal { .. } => DistributionKind::Marginal,
            Distribution::Joint { .. } => DistributionKind::Joint,
            Distribution::Partial { .. } => DistributionKind::Partial,
            Distribution::Conditional { .. } => DistributionKind::Conditional,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Distribution::Marginal { p } => p.len(),
            Distribution::Joint { p } => p.len(),
            Distribution::Partial { p } | Distribution::Conditional { p } => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Iter<'_, V> {
        match self {
            Distribution::Marginal { p } => Iter::Single(p.iter()),
            Distribution::Joint { p } => Iter::Tuple(p.iter()),
            Distribution::Partial { p } | Distribution::Conditional { p } => Iter::Given(p.iter()),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = OutcomeKey> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Stored value for `key`. Keys of another kind's shape are never present.
    pub fn get(&self, key: &OutcomeKey) -> Option<&V> {
        match (self, key) {
            (Distribution::Marginal { p }, OutcomeKey::Single(outcome)) => p.get(outcome),
            (Distribution::Joint { p }, OutcomeKey::Tuple(tuple)) => p.get(tuple),
            (
                Distribution::Partial { p } | Distribution::Conditional { p },
                OutcomeKey::Given(given),
            ) => p.get(given),
            _ => None,
        }
    }

    /// Stored value for `key`, or the zero value when it is absent.
    pub fn lookup(&self, key: &OutcomeKey) -> V
    where
        V: Clone + Default,
    {
        self.get(key).cloned().unwrap_or_default()
    }

    pub fn contains_key(&self, key: &OutcomeKey) -> bool {
        self.get(key).is_some()
    }

    pub fn as_marginal(&self) -> Option<&ProbabilityTable<Outcome, V>> {
        match self {
            Distribution::Marginal { p } => Some(p),
            _ => None,
        }
    }

    pub fn as_joint(&self) -> Option<&ProbabilityTable<OutcomeTuple, V>> {
        match self {
            Distribution::Joint { p } => Some(p),
            _ => None,
        }
    }

    /// Table of a partial or conditional distribution.
    pub fn as_given(&self) -> Option<&ProbabilityTable<GivenOutcome, V>> {
        match self {
            Distribution::Partial { p } | Distribution::Conditional { p } => Some(p),
            _ => None,
        }
    }
}

/// Iterator over `(key, value)` pairs of a [`Distribution`] in key order.
pub enum Iter<'a, V> {
    Single(btree_map::Iter<'a, Outcome, V>),
    Tuple(btree_map::Iter<'a, OutcomeTuple, V>),
    Given(btree_map::Iter<'a, GivenOutcome, V>),
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (OutcomeKey, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Iter::Single(inner) => inner
                .next()
                .map(|(key, value)| (OutcomeKey::Single(key.clone()), value)),
            Iter::Tuple(inner) => inner
                .next()
                .map(|(key, value)| (OutcomeKey::Tuple(key.clone()), value)),
            Iter::Given(inner) => inner
                .next()
                .map(|(key, value)| (OutcomeKey::Given(key.clone()), value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Iter::Single(inner) => inner.size_hint(),
            Iter::Tuple(inner) => inner.size_hint(),
            Iter::Given(inner) => inner.size_hint(),
        }
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a Distribution<V> {
    type Item = (OutcomeKey, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Distribution, OutcomeKey};
    use crate::model::kind::DistributionKind;
    use crate::model::label::Label;
    use crate::model::outcome::{GivenOutcome, Outcome, OutcomeTuple};
    use crate::model::table::ProbabilityTable;
    use std::collections::BTreeSet;

    fn coin() -> Distribution {
        Distribution::marginal(
            [("heads", "θ1"), ("tails", "θ2")]
                .into_iter()
                .collect::<ProbabilityTable<Outcome>>(),
        )
    }

    #[test]
    fn lookup_returns_stored_label_or_zero() {
        let dist = coin();
        assert_eq!(dist.lookup(&"heads".into()), Label::new("θ1"));
        assert!(dist.lookup(&"edge".into()).is_zero());
    }

    #[test]
    fn lookup_with_mismatched_key_shape_returns_zero() {
        let dist = coin();
        let tuple_key = OutcomeKey::from(OutcomeTuple::from(["heads"]));
        assert!(!dist.contains_key(&tuple_key));
        assert!(dist.lookup(&tuple_key).is_zero());
    }

    #[test]
    fn keys_match_constructed_keys() {
        let joint: Distribution = Distribution::joint(
            [
                (OutcomeTuple::from(["a1", "b1"]), "θ11"),
                (OutcomeTuple::from(["a1", "b2"]), "θ12"),
                (OutcomeTuple::from(["a2", "b1"]), "θ21"),
            ]
            .into_iter()
            .collect::<ProbabilityTable<OutcomeTuple>>(),
        );
        let keys: BTreeSet<_> = joint.keys().collect();
        let expected: BTreeSet<_> = [["a1", "b1"], ["a1", "b2"], ["a2", "b1"]]
            .into_iter()
            .map(|pair| OutcomeKey::Tuple(OutcomeTuple::from(pair)))
            .collect();
        assert_eq!(keys, expected);
        assert_eq!(joint.len(), 3);
    }

    #[test]
    fn iteration_yields_each_pair_once() {
        let table: ProbabilityTable<GivenOutcome> = [
            (GivenOutcome::new(["a1"], ["b1"]), "θ1|1"),
            (GivenOutcome::new(["a2"], ["b1"]), "θ2|1"),
        ]
        .into_iter()
        .collect();
        let dist = Distribution::conditional(table.clone());
        let pairs: Vec<_> = dist.iter().collect();
        assert_eq!(pairs.len(), table.len());
        for (key, value) in table.iter() {
            let wrapped = OutcomeKey::Given(key.clone());
            assert_eq!(pairs.iter().filter(|(k, _)| k == &wrapped).count(), 1);
            assert_eq!(dist.get(&wrapped), Some(value));
        }
        assert_eq!(dist.iter().len(), 2);
    }

    #[test]
    fn partial_and_conditional_share_accessors() {
        let table: ProbabilityTable<GivenOutcome> =
            [(GivenOutcome::new(["a1"], ["b1"]), "θ")].into_iter().collect();
        let partial = Distribution::partial(table.clone());
        let conditional = Distribution::conditional(table);
        assert_eq!(partial.kind(), DistributionKind::Partial);
        assert_eq!(conditional.kind(), DistributionKind::Conditional);
        assert_eq!(partial.as_given(), conditional.as_given());
        assert_ne!(partial, conditional);
    }

    #[test]
    fn empty_distribution_has_nothing() {
        for kind in DistributionKind::ALL {
            let dist: Distribution = Distribution::empty(kind);
            assert_eq!(dist.kind(), kind);
            assert_eq!(dist.len(), 0);
            assert!(dist.is_empty());
            assert_eq!(dist.keys().count(), 0);
            assert!(dist.lookup(&"anything".into()).is_zero());
        }
    }

    #[test]
    fn typed_accessors_only_match_their_kind() {
        let dist = coin();
        assert!(dist.as_marginal().is_some());
        assert!(dist.as_joint().is_none());
        assert!(dist.as_given().is_none());
    }
}
