//! The move primitive shared by group and item reordering.
//!
//! `array_move(seq, from, to)` removes the element at `from` and reinserts it
//! at `to`, where both indices are positions in the sequence *before* the
//! removal. The moved element therefore always ends up at index `to`:
//!
//! ```text
//! [A, B, C, D]  move A -> index of C (2)  =>  [B, C, A, D]
//! [A, B, C, D]  move D -> index of B (1)  =>  [A, D, B, C]
//! ```

/// Return a copy of `seq` with the element at `from` moved to index `to`.
///
/// Out-of-range indices leave the sequence unchanged.
pub fn array_move<T: Clone>(seq: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = seq.to_vec();
    if from >= out.len() || to >= out.len() || from == to {
        return out;
    }
    let moved = out.remove(from);
    out.insert(to, moved);
    out
}

/// Move the element matching `source` to the position held by the element
/// matching `target`.
///
/// Returns `None` when either key is missing or both keys name the same
/// element, so callers can tell a no-op from a move.
pub fn move_by_key<T, K, F>(seq: &[T], source: &K, target: &K, key: F) -> Option<Vec<T>>
where
    T: Clone,
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    if source == target {
        return None;
    }
    let from = seq.iter().position(|e| key(e) == source)?;
    let to = seq.iter().position(|e| key(e) == target)?;
    Some(array_move(seq, from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::source_before_target(0, 2, "BCAD")]
    #[case::source_after_target(3, 1, "ADBC")]
    #[case::adjacent_forward(1, 2, "ACBD")]
    #[case::adjacent_backward(2, 1, "ACBD")]
    #[case::to_end(0, 3, "BCDA")]
    #[case::to_front(3, 0, "DABC")]
    #[case::same_index(2, 2, "ABCD")]
    #[case::out_of_range(5, 0, "ABCD")]
    fn test_array_move(#[case] from: usize, #[case] to: usize, #[case] expected: &str) {
        let seq: Vec<char> = "ABCD".chars().collect();
        let moved: String = array_move(&seq, from, to).into_iter().collect();
        assert_eq!(moved, expected);
    }

    #[test]
    fn test_move_by_key_missing() {
        let seq = vec!["a", "b"];
        assert!(move_by_key(&seq, "a", "z", |s| *s).is_none());
        assert!(move_by_key(&seq, "z", "a", |s| *s).is_none());
    }

    #[test]
    fn test_move_by_key_same() {
        let seq = vec!["a", "b"];
        assert!(move_by_key(&seq, "a", "a", |s| *s).is_none());
    }

    #[test]
    fn test_move_by_key() {
        let seq = vec!["a", "b", "c", "d"];
        assert_eq!(
            move_by_key(&seq, "d", "b", |s| *s).unwrap(),
            vec!["a", "d", "b", "c"]
        );
    }
}
