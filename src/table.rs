use std::cmp::min;
use std::ops::Index;

use crate::utils::MyHash;

#[derive(Clone)]
struct Entry<T> {
    value: T,
    next: usize,
}

/// Append-only hash-consing table.
///
/// Values are stored once; [`Table::put`] returns the index of the existing
/// copy when an equal value is already present. Index 0 is a sentry and is
/// never returned, so `0` doubles as the end-of-chain marker.
pub struct Table<T> {
    data: Vec<Option<Entry<T>>>,

    buckets: Vec<usize>,
    bitmask: u64,
}

impl<T> Table<T> {
    /// Create a new table with `2^bits` buckets (at most `2^16`).
    pub fn new(bits: usize) -> Self {
        assert!(bits <= 31, "Storage bits should be in the range 0..=31");

        let buckets_bits = min(bits, 16);
        let buckets_size = 1 << buckets_bits;
        let buckets = vec![0; buckets_size];
        let bitmask = (buckets_size - 1) as u64;

        let mut data = Vec::with_capacity(1 << min(bits, 20));
        data.push(None); // sentry

        Self {
            data,
            buckets,
            bitmask,
        }
    }

    /// Get the number of stored values.
    pub fn size(&self) -> usize {
        self.data.len() - 1
    }

    /// Get the number of buckets.
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Get the reference to the value at the given index.
    pub fn value(&self, index: usize) -> &T {
        assert_ne!(index, 0, "Index is 0");
        match &self.data[index] {
            Some(entry) => &entry.value,
            None => unreachable!("only the sentry is empty"),
        }
    }

    /// Get the index of the next cell in the same bucket.
    pub fn next(&self, index: usize) -> usize {
        assert_ne!(index, 0, "Index is 0");
        self.data[index].as_ref().map_or(0, |entry| entry.next)
    }

    fn set_next(&mut self, index: usize, next: usize) {
        if let Some(entry) = self.data[index].as_mut() {
            entry.next = next;
        }
    }

    fn add(&mut self, value: T) -> usize {
        let index = self.data.len();
        assert!(index < u32::MAX as usize, "Storage is full");
        self.data.push(Some(Entry { value, next: 0 }));
        index
    }
}

impl<T> Table<T>
where
    T: MyHash + Eq,
{
    fn bucket_index(&self, value: &T) -> usize {
        (value.hash() & self.bitmask) as usize
    }

    /// Find the index of a value equal to `value`, if present.
    pub fn find(&self, value: &T) -> Option<usize> {
        let mut index = self.buckets[self.bucket_index(value)];
        while index != 0 {
            if value == self.value(index) {
                return Some(index);
            }
            index = self.next(index);
        }
        None
    }

    /// Put a new value into the table and return its index.
    pub fn put(&mut self, value: T) -> usize {
        let bucket_index = self.bucket_index(&value);
        let mut index = self.buckets[bucket_index];

        if index == 0 {
            // Create new node and put it into the bucket.
            let i = self.add(value);
            self.buckets[bucket_index] = i;
            return i;
        }

        loop {
            if &value == self.value(index) {
                // The node already exists.
                return index;
            }

            let next = self.next(index);

            if next == 0 {
                // Create new node and append it to the bucket.
                let i = self.add(value);
                self.set_next(index, i);
                return i;
            } else {
                index = next;
            }
        }
    }
}

impl<T> Index<usize> for Table<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.value(index)
    }
}
