//! A simple example showing the use of a Bloom filter.
use bloomfield::{BloomFilter, Comparison};

fn main() -> Result<(), bloomfield::Error> {
    let mut bf = BloomFilter::from_collection(["foo", "bar"]);

    bf.contains("foo"); // true
    bf.contains("bar"); // true
    bf.contains("baz"); // false

    bf.count(); // 2

    let other = BloomFilter::from_collection(["baz", "qux"]);
    let before = bf.clone();
    bf.union(&other)?;

    assert_eq!(bf.compare(&before), Comparison::Larger);

    let bytes = bf.to_bytes();
    let restored = BloomFilter::from_bytes(&bytes)?;
    assert_eq!(restored, bf);

    Ok(())
}
