//! Fixed-size tables indexed by a closed key enum.
//!
//! Replaces string-keyed field lookup: `table[Attribute::Arc]` cannot name a
//! stat that does not exist, and every table always holds one slot per key.

use core::marker::PhantomData;
use core::ops::{Index, IndexMut};

/// A closed enum usable as a [`Table`] index.
pub trait TableKey: Copy + Eq + Ord + core::fmt::Debug + 'static {
    /// Every key, in declaration order.
    const ALL: &'static [Self];

    /// Position of this key inside [`Self::ALL`].
    fn index(self) -> usize;
}

/// One `T` per key of `K`, stored inline.
///
/// Serialized as a map keyed by the enum's name; absent keys deserialize to
/// `T::default()`.
pub struct Table<K: TableKey, T, const N: usize> {
    values: [T; N],
    _key: PhantomData<K>,
}

impl<K: TableKey, T, const N: usize> Table<K, T, N> {
    /// Build a table from raw values in key declaration order.
    pub const fn from_array(values: [T; N]) -> Self {
        Self {
            values,
            _key: PhantomData,
        }
    }

    /// Build a table by evaluating `f` for every key.
    pub fn from_fn(mut f: impl FnMut(K) -> T) -> Self {
        Self::from_array(core::array::from_fn(|i| f(K::ALL[i])))
    }

    /// Iterate `(key, &value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> {
        K::ALL.iter().copied().zip(self.values.iter())
    }

    /// Iterate `(key, &mut value)` pairs in declaration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (K, &mut T)> {
        K::ALL.iter().copied().zip(self.values.iter_mut())
    }

    /// Values in declaration order.
    pub fn values(&self) -> &[T; N] {
        &self.values
    }

    /// Apply `f` to every value, keeping keys.
    pub fn map<U>(&self, mut f: impl FnMut(K, &T) -> U) -> Table<K, U, N> {
        Table::from_fn(|key| f(key, &self[key]))
    }
}

impl<K: TableKey, T: Copy + core::iter::Sum<T>, const N: usize> Table<K, T, N> {
    /// Sum of all values.
    pub fn sum(&self) -> T {
        self.values.iter().copied().sum()
    }
}

impl<K: TableKey, T, const N: usize> Index<K> for Table<K, T, N> {
    type Output = T;

    fn index(&self, key: K) -> &T {
        &self.values[key.index()]
    }
}

impl<K: TableKey, T, const N: usize> IndexMut<K> for Table<K, T, N> {
    fn index_mut(&mut self, key: K) -> &mut T {
        &mut self.values[key.index()]
    }
}

impl<K: TableKey, T: Default, const N: usize> Default for Table<K, T, N> {
    fn default() -> Self {
        Self::from_array(core::array::from_fn(|_| T::default()))
    }
}

impl<K: TableKey, T: Clone, const N: usize> Clone for Table<K, T, N> {
    fn clone(&self) -> Self {
        Self::from_array(self.values.clone())
    }
}

impl<K: TableKey, T: Copy, const N: usize> Copy for Table<K, T, N> {}

impl<K: TableKey, T: PartialEq, const N: usize> PartialEq for Table<K, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<K: TableKey, T: core::fmt::Debug, const N: usize> core::fmt::Debug for Table<K, T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl<K, T, const N: usize> serde::Serialize for Table<K, T, N>
where
    K: TableKey + serde::Serialize,
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(N))?;
        for (key, value) in self.iter() {
            map.serialize_entry(&key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, K, T, const N: usize> serde::Deserialize<'de> for Table<K, T, N>
where
    K: TableKey + serde::Deserialize<'de>,
    T: Default + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut entries: std::collections::BTreeMap<K, T> =
            std::collections::BTreeMap::deserialize(deserializer)?;
        Ok(Self::from_fn(|key| entries.remove(&key).unwrap_or_default()))
    }
}
