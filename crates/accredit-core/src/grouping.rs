//! Order-preserving grouping of flat record lists.
//!
//! Buckets appear in the order their first member appears in the input, and
//! members keep their relative order. No sorting ever happens here.

use std::borrow::Borrow;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::models::assessment_item::AssessmentItem;

/// Keyed buckets in first-appearance order.
#[derive(Debug, Clone)]
pub struct Groups<K, V> {
    buckets: IndexMap<K, V>,
}

/// standard → evaluation element → items.
pub type ItemGroups<'a> = Groups<&'a str, Groups<&'a str, Vec<&'a AssessmentItem>>>;

impl<K, V> Default for Groups<K, V> {
    fn default() -> Self {
        Self {
            buckets: IndexMap::new(),
        }
    }
}

impl<K, V> Groups<K, V> {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.buckets.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets.iter()
    }
}

impl<K: Hash + Eq, V> Groups<K, V> {
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets.get(key)
    }
}

impl<K: Hash + Eq, V: Default> Groups<K, V> {
    /// Bucket for `key`, appended at the end if this is its first appearance.
    pub fn entry(&mut self, key: K) -> &mut V {
        self.buckets.entry(key).or_default()
    }
}

// Bucket order is part of equality.
impl<K: PartialEq, V: PartialEq> PartialEq for Groups<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.buckets.len() == other.buckets.len() && self.buckets.iter().eq(other.buckets.iter())
    }
}

impl<K: Eq, V: Eq> Eq for Groups<K, V> {}

impl<K, V> IntoIterator for Groups<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

/// Stable partition of `items` by `key`.
pub fn group_by<'a, T, K, F>(items: impl IntoIterator<Item = &'a T>, key: F) -> Groups<K, Vec<&'a T>>
where
    T: 'a,
    K: Hash + Eq,
    F: Fn(&'a T) -> K,
{
    let mut groups: Groups<K, Vec<&'a T>> = Groups::default();
    for item in items {
        groups.entry(key(item)).push(item);
    }
    groups
}

/// Group assessment items by standard, then by evaluation element.
pub fn group_items(items: &[AssessmentItem]) -> ItemGroups<'_> {
    let mut groups: ItemGroups<'_> = Groups::default();
    for item in items {
        groups
            .entry(item.standard.as_str())
            .entry(item.evaluation_element.as_str())
            .push(item);
    }
    groups
}

/// Concatenate every inner bucket in iteration order.
pub fn flatten<'a>(groups: &ItemGroups<'a>) -> Vec<&'a AssessmentItem> {
    groups
        .iter()
        .flat_map(|(_, elements)| elements.iter())
        .flat_map(|(_, items)| items.iter().copied())
        .collect()
}
