//! Order-preserving selection over integer sequences.

/// Keep the elements of `sequence` for which `predicate` holds, in their
/// original order. The input is only borrowed.
pub fn select<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: Copy,
    P: FnMut(&T) -> bool,
{
    sequence.iter().copied().filter(|v| predicate(v)).collect()
}

/// Select the strictly negative elements of `sequence`.
///
/// Zero is `T::default()`, which holds for every primitive integer type.
/// The result is always an order-preserving subsequence of the input, so
/// applying it twice gives the same result as applying it once.
pub fn negatives<T>(sequence: &[T]) -> Vec<T>
where
    T: Copy + PartialOrd + Default,
{
    let zero = T::default();
    select(sequence, |v| *v < zero)
}
