//! Clue to suspect association table.

use std::collections::BTreeSet;

use tracing::debug;

/// Bucket count used by [`SuspectIndex::new`]. Prime to spread djb2 output.
pub const DEFAULT_BUCKETS: usize = 101;

/// Errors raised while configuring a [`SuspectIndex`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    #[error("a suspect index needs at least one bucket")]
    ZeroBuckets,
}

/// djb2 string hash: seed 5381, `hash * 33 + byte` for every byte.
pub fn hash(key: &str) -> u64 {
    key.bytes().fold(5381_u64, |hash, byte| {
        (hash << 5).wrapping_add(hash).wrapping_add(u64::from(byte))
    })
}

type Chain = Option<Box<ChainEntry>>;

#[derive(Debug)]
struct ChainEntry {
    clue: String,
    suspect: String,
    next: Chain,
}

/// Hash map from clue text to suspect name with chained buckets.
///
/// Each bucket holds a singly-linked chain in which clue texts are unique.
/// Writing an existing clue replaces its suspect in place.
#[derive(Debug)]
pub struct SuspectIndex {
    buckets: Vec<Chain>,
    len: usize,
}

impl Default for SuspectIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SuspectIndex {
    pub fn new() -> Self {
        Self::empty(DEFAULT_BUCKETS)
    }

    /// Build an index with a custom number of buckets.
    pub fn with_buckets(buckets: usize) -> Result<Self, IndexError> {
        if buckets == 0 {
            return Err(IndexError::ZeroBuckets);
        }
        Ok(Self::empty(buckets))
    }

    fn empty(buckets: usize) -> Self {
        let mut chains = Vec::with_capacity(buckets);
        chains.resize_with(buckets, || None);
        Self {
            buckets: chains,
            len: 0,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket a key lands in. Insertion and lookup both go through here.
    pub fn bucket_of(&self, key: &str) -> usize {
        (hash(key) % self.buckets.len() as u64) as usize
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Associate `clue` with `suspect`, returning the suspect it replaced.
    ///
    /// An empty clue is ignored.
    pub fn put(&mut self, clue: &str, suspect: &str) -> Option<String> {
        if clue.is_empty() {
            return None;
        }

        let bucket = self.bucket_of(clue);
        let mut link = &mut self.buckets[bucket];
        while let Some(entry) = link {
            if entry.clue == clue {
                debug!(clue, suspect, bucket, "Suspect association overwritten");
                return Some(std::mem::replace(&mut entry.suspect, suspect.to_string()));
            }
            link = &mut entry.next;
        }

        let chain = &mut self.buckets[bucket];
        let next = chain.take();
        *chain = Some(Box::new(ChainEntry {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
            next,
        }));
        self.len += 1;
        None
    }

    /// Suspect associated with `clue`, if any.
    pub fn get(&self, clue: &str) -> Option<&str> {
        if clue.is_empty() {
            return None;
        }
        self.chain(self.bucket_of(clue))
            .find(|entry| entry.clue == clue)
            .map(|entry| entry.suspect.as_str())
    }

    /// All `(clue, suspect)` pairs, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        (0..self.buckets.len())
            .flat_map(move |bucket| self.chain(bucket))
            .map(|entry| (entry.clue.as_str(), entry.suspect.as_str()))
    }

    /// Distinct suspect names in ascending order.
    pub fn suspects(&self) -> Vec<&str> {
        self.iter()
            .map(|(_, suspect)| suspect)
            .filter(|suspect| !suspect.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn chain(&self, bucket: usize) -> impl Iterator<Item = &ChainEntry> + '_ {
        std::iter::successors(self.buckets[bucket].as_deref(), |entry| {
            entry.next.as_deref()
        })
    }
}

impl Drop for SuspectIndex {
    fn drop(&mut self) {
        for bucket in &mut self.buckets {
            let mut link = bucket.take();
            while let Some(mut entry) = link {
                link = entry.next.take();
            }
        }
    }
}

impl<C, S> Extend<(C, S)> for SuspectIndex
where
    C: AsRef<str>,
    S: AsRef<str>,
{
    fn extend<T: IntoIterator<Item = (C, S)>>(&mut self, iter: T) {
        for (clue, suspect) in iter {
            self.put(clue.as_ref(), suspect.as_ref());
        }
    }
}

impl<C, S> FromIterator<(C, S)> for SuspectIndex
where
    C: AsRef<str>,
    S: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = (C, S)>>(iter: T) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn djb2_matches_reference_values() {
        assert_eq!(hash(""), 5381);
        assert_eq!(hash("a"), 5381 * 33 + 97);
        assert_eq!(hash("ab"), (5381 * 33 + 97) * 33 + 98);
    }

    #[test]
    fn zero_buckets_are_rejected() {
        assert_eq!(
            SuspectIndex::with_buckets(0).unwrap_err(),
            IndexError::ZeroBuckets
        );
    }

    #[test]
    fn get_after_put_survives_unrelated_puts() {
        let mut index = SuspectIndex::new();
        index.put("Um colar quebrado", "Sra. Rosa");
        for n in 0..500 {
            index.put(&format!("pista {n}"), "Sr. Cinza");
        }
        assert_eq!(index.get("Um colar quebrado"), Some("Sra. Rosa"));
        assert_eq!(index.get("pista 250"), Some("Sr. Cinza"));
        assert_eq!(index.len(), 501);
    }

    #[test]
    fn overwrite_keeps_a_single_entry() {
        let mut index = SuspectIndex::new();
        assert_eq!(index.put("Luva de couro encontrada", "Sr. Cinza"), None);
        assert_eq!(
            index.put("Luva de couro encontrada", "Sra. Rosa"),
            Some("Sr. Cinza".to_string())
        );
        assert_eq!(index.get("Luva de couro encontrada"), Some("Sra. Rosa"));
        assert_eq!(index.len(), 1);
        assert_eq!(
            index
                .iter()
                .filter(|(clue, _)| *clue == "Luva de couro encontrada")
                .count(),
            1
        );
    }

    #[test]
    fn missing_and_empty_keys_are_not_found() {
        let mut index = SuspectIndex::new();
        index.put("", "Ninguém");
        assert!(index.is_empty());
        assert_eq!(index.get(""), None);
        assert_eq!(index.get("Pegadas misteriosas no tapete"), None);
    }

    #[test]
    fn single_bucket_resolves_collisions_by_chaining() {
        let mut index = SuspectIndex::with_buckets(1).unwrap();
        index.put("a", "Sr. Branco");
        index.put("b", "Sra. Rosa");
        index.put("c", "Prof. Verde");
        index.put("b", "Sr. Cinza");

        assert_eq!(index.bucket_of("a"), index.bucket_of("c"));
        assert_eq!(index.get("a"), Some("Sr. Branco"));
        assert_eq!(index.get("b"), Some("Sr. Cinza"));
        assert_eq!(index.get("c"), Some("Prof. Verde"));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn suspects_are_distinct_and_sorted() {
        let index: SuspectIndex = [
            ("Pegadas misteriosas no tapete", "Sr. Branco"),
            ("Um colar quebrado", "Sra. Rosa"),
            ("Faca com marcas de sangue", "Sr. Branco"),
            ("Livro com páginas arrancadas", "Prof. Verde"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            index.suspects(),
            vec!["Prof. Verde", "Sr. Branco", "Sra. Rosa"]
        );
    }
}
