//! Lexicographic k-combination enumeration over seat slices.
//!
//! Shared by Propose child generation (every candidate team) and exact
//! hypothesis enumeration (every candidate spy set). Counts stay small at
//! supported table sizes; the worst case is 10-choose-5 = 252.

use crate::core::{Seat, SeatSet};

/// All k-element combinations of `pool`, in lexicographic index order.
///
/// Returns an empty vec when `k > pool.len()`; a single empty set when
/// `k == 0`.
pub(crate) fn seat_combinations(pool: &[Seat], k: usize) -> Vec<SeatSet> {
    let n = pool.len();
    let mut out = Vec::new();

    if k > n {
        return out;
    }
    if k == 0 {
        out.push(SeatSet::new());
        return out;
    }

    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        out.push(idx.iter().map(|&i| pool[i]).collect::<SeatSet>());

        // Rightmost position with room to advance.
        let mut advance = None;
        for i in (0..k).rev() {
            if idx[i] < i + n - k {
                advance = Some(i);
                break;
            }
        }
        let Some(i) = advance else {
            return out;
        };

        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(n: usize) -> Vec<Seat> {
        Seat::all(n).collect()
    }

    fn choose(n: u64, k: u64) -> u64 {
        if k > n {
            return 0;
        }
        (1..=k).fold(1, |acc, i| acc * (n - k + i) / i)
    }

    #[test]
    fn test_counts() {
        assert_eq!(seat_combinations(&pool(5), 2).len(), 10);
        assert_eq!(seat_combinations(&pool(7), 3).len(), 35);
        assert_eq!(seat_combinations(&pool(10), 5).len(), 252);

        for n in 5..=10usize {
            for k in 0..=n {
                assert_eq!(
                    seat_combinations(&pool(n), k).len() as u64,
                    choose(n as u64, k as u64)
                );
            }
        }
    }

    #[test]
    fn test_lexicographic_order() {
        let combos = seat_combinations(&pool(4), 2);

        let expected: Vec<Vec<usize>> =
            vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]];
        let actual: Vec<Vec<usize>> = combos
            .iter()
            .map(|c| c.iter().map(|s| s.index()).collect())
            .collect();

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_members_are_distinct() {
        for combo in seat_combinations(&pool(6), 3) {
            let mut indices: Vec<usize> = combo.iter().map(|s| s.index()).collect();
            indices.sort_unstable();
            indices.dedup();
            assert_eq!(indices.len(), 3);
        }
    }

    #[test]
    fn test_degenerate_sizes() {
        assert!(seat_combinations(&pool(3), 4).is_empty());
        assert_eq!(seat_combinations(&pool(3), 0).len(), 1);
        assert_eq!(seat_combinations(&pool(3), 3).len(), 1);
    }
}
