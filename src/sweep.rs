//! Size Sweep
//!
//! Fixed policy for the input sizes fed to the benchmark: dense linear
//! coverage of small sizes, then geometric coverage (powers of two and three
//! times powers of two) up to 2^27, for log-scale sweeps.

/// Sizes below this threshold are dropped from the sweep.
pub const MIN_SIZE: u64 = 45;

/// Build the sweep: sorted, deduplicated, and filtered to `>= MIN_SIZE`.
///
/// The result is strictly ascending and built once per invocation.
pub fn sizes() -> Vec<u64> {
    let mut ns: Vec<u64> = (2..=16).collect();
    ns.extend((20..100).step_by(4));
    ns.extend([100, 128, 160, 196, 256, 512, 1024]);
    ns.extend((11..28).map(|i| 1u64 << i));
    ns.extend((7..27).map(|i| 3u64 << i));
    ns.sort_unstable();
    ns.dedup();
    ns.retain(|&n| n >= MIN_SIZE);
    ns
}
