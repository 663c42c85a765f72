use rustc_hash::FxHashMap;

///
/// Frequency table over borrowed string keys that remembers the order in which
/// each distinct key was first seen.
///
#[derive(Default)]
pub struct Tally<'a> {
    /// Position of each key in `entries`
    index: FxHashMap<&'a str, usize>,
    /// (key, count) in first-encounter order
    entries: Vec<(&'a str, usize)>,
}

impl<'a> Tally<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &'a str) {
        match self.index.get(key) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Number of distinct keys.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    ///
    /// Entries sorted by count, highest first. The sort is stable, so keys with
    /// equal counts stay in first-encounter order.
    ///
    pub fn most_common(&self) -> Vec<(&'a str, usize)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

impl<'a> FromIterator<&'a str> for Tally<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}
