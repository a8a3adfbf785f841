//! Step planning for the progress simulation

/// Split a total amount of work into bounded increments
///
/// Every increment is at most `chunk` and the increments sum to `total`.
/// Returns an empty vector when either input is zero; the empty result is
/// the contract, not an error.
pub fn build_steps(total: u64, chunk: u64) -> Vec<u64> {
    if total == 0 || chunk == 0 {
        return Vec::new();
    }

    let mut steps = Vec::with_capacity(total.div_ceil(chunk) as usize);
    let mut remaining = total;

    while remaining > 0 {
        let step = chunk.min(remaining);
        steps.push(step);
        remaining -= step;
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test step planning
    ///
    /// Covers the degenerate inputs and the documented example splits.
    #[test]
    fn test_build_steps() {
        let cases: [(u64, u64, &[u64]); 5] = [
            (0, 1, &[]),
            (10, 0, &[]),
            (6, 3, &[3, 3]),
            (7, 3, &[3, 3, 1]),
            (4, 10, &[4]),
        ];

        for (total, chunk, want) in cases {
            assert_eq!(
                build_steps(total, chunk),
                want,
                "build_steps({total}, {chunk})"
            );
        }
    }

    /// Test planner invariants
    ///
    /// For a spread of positive inputs: the steps sum to the total, no step
    /// exceeds the chunk, and the count is ceil(total / chunk).
    #[test]
    fn test_step_invariants() {
        for total in 1..=50u64 {
            for chunk in 1..=12u64 {
                let steps = build_steps(total, chunk);

                assert_eq!(steps.iter().sum::<u64>(), total);
                assert!(steps.iter().all(|&s| s <= chunk));
                assert_eq!(steps.len() as u64, total.div_ceil(chunk));
            }
        }
    }
}
