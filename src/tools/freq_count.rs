use rustc_hash::FxHashMap;

use super::symbol_map::Symbol;

/// Symbol to occurrence count. Only symbols that occur are present.
pub type FreqTable<S> = FxHashMap<S, usize>;

/// Returns a frequency count of the input symbols.
pub fn freqs<S: Symbol>(data: &[S]) -> FreqTable<S> {
    let mut freqs = FreqTable::default();
    data.iter().for_each(|&el| *freqs.entry(el).or_insert(0) += 1);
    freqs
}

#[test]
fn freqs_test() {
    let f = freqs("abcdaba".as_bytes());
    assert_eq!(f.len(), 4);
    assert_eq!(f[&b'a'], 3);
    assert_eq!(f[&b'b'], 2);
    assert_eq!(f[&b'c'], 1);
    assert_eq!(f[&b'd'], 1);
}

#[test]
fn freqs_empty_test() {
    assert!(freqs::<u8>(&[]).is_empty());
}
