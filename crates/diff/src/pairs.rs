/// Iterate over every 2-combination of `items` by position.
///
/// Pairs come out with the first index varying slowest: `(0, 1), (0, 2), ..,
/// (1, 2), ..`. Equal items at different positions still form a pair.
pub fn pairs<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> + '_ {
    items
        .iter()
        .enumerate()
        .flat_map(move |(i, first)| items[i + 1..].iter().map(move |second| (first, second)))
}

/// Get the number of pairs `pairs` yields for `n` items
pub fn pair_count(n: usize) -> usize {
    let m = n.saturating_sub(1);
    // One of n and n - 1 is even; halve it before multiplying
    if n % 2 == 0 {
        (n / 2) * m
    } else {
        n * (m / 2)
    }
}
