#![forbid(unsafe_code)]

//! Scale-unit tables and digit grouping.
//!
//! A [`ScaleTable`] lists the named powers of ten of one numbering
//! convention, smallest first. Index 0 is always the hundred, index 1 the
//! thousand; the last entry is the ceiling: magnitudes at or above it have
//! no name and degrade to "infinity".
//!
//! # Invariants
//!
//! 1. Exponents are strictly increasing.
//! 2. The ceiling exponent is at most 38, so `10^ceiling` fits in `u128`.
//! 3. [`split_groups`] yields the least significant group first and no
//!    groups for zero.

/// Named powers of ten for one numbering convention.
#[derive(Debug, Clone, Copy)]
pub struct ScaleTable {
    entries: &'static [(u32, &'static str)],
}

impl ScaleTable {
    /// Wrap a static `(exponent, name)` list.
    #[must_use]
    pub const fn new(entries: &'static [(u32, &'static str)]) -> Self {
        Self { entries }
    }

    /// Exponent of the largest named magnitude.
    #[must_use]
    pub fn ceiling_exponent(&self) -> u32 {
        self.entries.last().map_or(0, |&(exp, _)| exp)
    }

    /// The largest named magnitude, `10^ceiling_exponent`.
    #[must_use]
    pub fn ceiling(&self) -> u128 {
        pow10(self.ceiling_exponent())
    }

    /// Name at `index` (0 = hundred, 1 = thousand, ...).
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).map(|&(_, name)| name)
    }

    /// Name of `n` when it is exactly one of the listed powers of ten
    /// below the ceiling.
    #[must_use]
    pub fn exact_power(&self, n: u128) -> Option<&'static str> {
        let ceiling = self.ceiling();
        self.entries
            .iter()
            .map(|&(exp, name)| (pow10(exp), name))
            .find(|&(value, _)| value == n && value < ceiling)
            .map(|(_, name)| name)
    }

    /// All `(exponent, name)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (u32, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

/// `10^exp` as `u128`. Saturates above `10^38`.
#[must_use]
pub fn pow10(exp: u32) -> u128 {
    10u128.checked_pow(exp).unwrap_or(u128::MAX)
}

/// Split `n` into base-`base` groups, least significant first.
#[must_use]
pub fn split_groups(mut n: u128, base: u128) -> Vec<u128> {
    let mut groups = Vec::new();
    if base < 2 {
        return groups;
    }
    while n > 0 {
        groups.push(n % base);
        n /= base;
    }
    groups
}

/// Render the nonzero base-`base` groups of `n` and join them most
/// significant first.
///
/// `render` receives the group index (0 = least significant) and the
/// group value.
pub(crate) fn join_groups<F>(n: u128, base: u128, separator: &str, mut render: F) -> String
where
    F: FnMut(usize, u128) -> String,
{
    let rendered: Vec<String> = split_groups(n, base)
        .into_iter()
        .enumerate()
        .filter(|&(_, group)| group != 0)
        .map(|(index, group)| render(index, group))
        .collect();
    let mut out = String::new();
    for (i, part) in rendered.iter().rev().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: ScaleTable = ScaleTable::new(&[
        (2, "hundred"),
        (3, "thousand"),
        (6, "million"),
        (9, "billion"),
    ]);

    #[test]
    fn ceiling_is_last_entry() {
        assert_eq!(TABLE.ceiling_exponent(), 9);
        assert_eq!(TABLE.ceiling(), 1_000_000_000);
    }

    #[test]
    fn names_by_index() {
        assert_eq!(TABLE.name(0), Some("hundred"));
        assert_eq!(TABLE.name(1), Some("thousand"));
        assert_eq!(TABLE.name(2), Some("million"));
        assert_eq!(TABLE.name(9), None);
    }

    #[test]
    fn exact_power_excludes_ceiling() {
        assert_eq!(TABLE.exact_power(100), Some("hundred"));
        assert_eq!(TABLE.exact_power(1_000_000), Some("million"));
        assert_eq!(TABLE.exact_power(1_000_000_000), None);
        assert_eq!(TABLE.exact_power(2_000), None);
    }

    #[test]
    fn split_least_significant_first() {
        assert_eq!(split_groups(1_234_567, 1000), vec![567, 234, 1]);
        assert_eq!(split_groups(1_000_000, 1000), vec![0, 0, 1]);
        assert!(split_groups(0, 1000).is_empty());
        assert!(split_groups(5, 1).is_empty());
    }

    #[test]
    fn join_skips_zero_groups() {
        let joined = join_groups(1_000_042, 1000, ", ", |i, g| format!("{g}#{i}"));
        assert_eq!(joined, "1#2, 42#0");
    }

    #[test]
    fn pow10_saturates() {
        assert_eq!(pow10(0), 1);
        assert_eq!(pow10(36), 1_000_000_000_000_000_000_000_000_000_000_000_000);
        assert_eq!(pow10(39), u128::MAX);
    }
}
