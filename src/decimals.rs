/// Sorts `(key, value)` entries by the fractional part of their value.
///
/// Entries behave like a map: a repeated key keeps the position of its first
/// occurrence and the value of its last one. The sort is stable, so entries with
/// equal fractional parts keep that order. Negative values use floor semantics:
/// `-1.25` has a fractional part of `0.75`.
///
/// # Example
/// ```
/// use recursive_sequences::decimals::get_sorted_dict_by_decimals;
///
/// let sorted = get_sorted_dict_by_decimals(vec![(2, 2.1), (3, 3.3), (1, 1.4), (4, 4.2)]);
/// let keys: Vec<i32> = sorted.iter().map(|(k, _)| *k).collect();
/// assert_eq!(keys, vec![2, 4, 3, 1]);
/// ```
pub fn get_sorted_dict_by_decimals<K: PartialEq>(
    entries: impl IntoIterator<Item = (K, f64)>,
) -> Vec<(K, f64)> {
    let mut sorted: Vec<(K, f64)> = Vec::new();
    for (key, value) in entries {
        match sorted.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => sorted.push((key, value)),
        }
    }
    sorted.sort_by(|(_, a), (_, b)| fractional_part(*a).total_cmp(&fractional_part(*b)));
    sorted
}

pub fn fractional_part(value: f64) -> f64 {
    value.rem_euclid(1.0)
}
