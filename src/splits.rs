//! Split key generation.
//!
//! Split keys are fixed-width, zero-padded decimal numerals. Because every key
//! has the same width, byte order and numeric order agree, so the keys come out
//! strictly increasing and `n` keys carve a table into `n + 1` regions.

use serde::Serialize;

use crate::errors::{Error, Result, SplitKeyError};

/// Width of every split key, in ASCII digits.
pub const SPLIT_PREFIX_LENGTH: usize = 6;

/// Exclusive upper bound on the split count (10^SPLIT_PREFIX_LENGTH).
pub const MAX_SPLIT_COUNT: i64 = 10_i64.pow(SPLIT_PREFIX_LENGTH as u32);

/// Check that `split_count` can be encoded in `SPLIT_PREFIX_LENGTH` digits.
pub fn validate_split_count(split_count: i64) -> Result<()> {
    if split_count <= 0 {
        return Err(Error::invalid_argument("Split count must be greater than 0"));
    }
    if split_count >= MAX_SPLIT_COUNT {
        return Err(Error::invalid_argument(format!(
            "Split count must be less than {} (got {})",
            MAX_SPLIT_COUNT, split_count
        )));
    }
    Ok(())
}

/// Generate `split_count` split keys: `000001`, `000002`, ... up to `split_count`.
///
/// # Errors
///
/// `InvalidArgument` if `split_count <= 0` or `split_count >= MAX_SPLIT_COUNT`.
pub fn generate_split_keys(split_count: i64) -> Result<Vec<Vec<u8>>> {
    validate_split_count(split_count)?;

    let keys = (1..=split_count)
        .map(|i| format!("{:0width$}", i, width = SPLIT_PREFIX_LENGTH).into_bytes())
        .collect();
    Ok(keys)
}

/// Key range of one region. `None` means unbounded on that side.
///
/// `start` is inclusive, `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionBounds {
    pub start: Option<Vec<u8>>,
    pub end: Option<Vec<u8>>,
}

impl RegionBounds {
    /// Whether `key` falls inside this region.
    pub fn contains(&self, key: &[u8]) -> bool {
        let after_start = self.start.as_deref().is_none_or(|s| key >= s);
        let before_end = self.end.as_deref().is_none_or(|e| key < e);
        after_start && before_end
    }
}

/// Check that `split_keys` is usable as a set of region boundaries:
/// no empty key, strictly increasing in byte order.
pub fn validate_split_keys(split_keys: &[Vec<u8>]) -> std::result::Result<(), SplitKeyError> {
    if let Some(position) = split_keys.iter().position(|k| k.is_empty()) {
        return Err(SplitKeyError::EmptyKey { position });
    }
    if let Some(previous) = split_keys.windows(2).position(|w| w[0] >= w[1]) {
        return Err(SplitKeyError::NotIncreasing {
            previous,
            position: previous + 1,
        });
    }
    Ok(())
}

/// The `split_keys.len() + 1` contiguous regions implied by `split_keys`.
///
/// Assumes `split_keys` already passed `validate_split_keys`.
pub fn region_bounds(split_keys: &[Vec<u8>]) -> Vec<RegionBounds> {
    let mut regions = Vec::with_capacity(split_keys.len() + 1);
    let mut start: Option<Vec<u8>> = None;
    for key in split_keys {
        regions.push(RegionBounds {
            start: start.take(),
            end: Some(key.clone()),
        });
        start = Some(key.clone());
    }
    regions.push(RegionBounds { start, end: None });
    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_three_keys() {
        let keys = generate_split_keys(3).unwrap();
        assert_eq!(
            keys,
            vec![b"000001".to_vec(), b"000002".to_vec(), b"000003".to_vec()]
        );
    }

    #[test]
    fn test_keys_are_fixed_width_and_strictly_increasing() {
        for split_count in [1, 2, 9, 10, 11, 99, 100, 1_000, 12_345] {
            let keys = generate_split_keys(split_count).unwrap();
            assert_eq!(keys.len(), split_count as usize);
            assert!(keys.iter().all(|k| k.len() == SPLIT_PREFIX_LENGTH));
            assert!(keys.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_key_matches_index() {
        let keys = generate_split_keys(1_234).unwrap();
        assert_eq!(keys[0], b"000001");
        assert_eq!(keys[9], b"000010");
        assert_eq!(keys[99], b"000100");
        assert_eq!(keys[1_233], b"001234");
    }

    #[test]
    fn test_largest_allowed_split_count() {
        let keys = generate_split_keys(MAX_SPLIT_COUNT - 1).unwrap();
        assert_eq!(keys.len(), 999_999);
        assert_eq!(keys.last().unwrap(), b"999999");
    }

    #[test]
    fn test_rejects_non_positive_split_count() {
        for split_count in [0, -1, i64::MIN] {
            let err = generate_split_keys(split_count).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn test_rejects_split_count_past_key_width() {
        for split_count in [MAX_SPLIT_COUNT, MAX_SPLIT_COUNT + 1, i64::MAX] {
            let err = generate_split_keys(split_count).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(
            generate_split_keys(500).unwrap(),
            generate_split_keys(500).unwrap()
        );
    }

    #[test]
    fn test_region_bounds_are_contiguous() {
        let keys = generate_split_keys(3).unwrap();
        let regions = region_bounds(&keys);

        assert_eq!(regions.len(), 4);
        assert_eq!(regions[0].start, None);
        assert_eq!(regions[0].end.as_deref(), Some(&b"000001"[..]));
        assert_eq!(regions[3].start.as_deref(), Some(&b"000003"[..]));
        assert_eq!(regions[3].end, None);
        for pair in regions.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_region_bounds_without_keys() {
        let regions = region_bounds(&[]);
        assert_eq!(
            regions,
            vec![RegionBounds {
                start: None,
                end: None
            }]
        );
    }

    #[test]
    fn test_every_key_lands_in_exactly_one_region() {
        let keys = generate_split_keys(5).unwrap();
        let regions = region_bounds(&keys);

        let probes: [&[u8]; 6] = [b"", b"000000", b"000001", b"0000025", b"000005", b"zzz"];
        for probe in probes {
            let hits = regions.iter().filter(|r| r.contains(probe)).count();
            assert_eq!(hits, 1, "probe {:?}", String::from_utf8_lossy(probe));
        }
        assert!(regions[1].contains(b"000001"));
        assert!(!regions[0].contains(b"000001"));
    }

    #[test]
    fn test_validate_split_keys() {
        assert!(validate_split_keys(&generate_split_keys(10).unwrap()).is_ok());
        assert!(validate_split_keys(&[]).is_ok());
        assert_eq!(
            validate_split_keys(&[b"a".to_vec(), b"c".to_vec(), b"b".to_vec()]),
            Err(SplitKeyError::NotIncreasing {
                previous: 1,
                position: 2
            })
        );
        assert_eq!(
            validate_split_keys(&[b"a".to_vec(), b"a".to_vec()]),
            Err(SplitKeyError::NotIncreasing {
                previous: 0,
                position: 1
            })
        );
        assert_eq!(
            validate_split_keys(&[b"a".to_vec(), Vec::new()]),
            Err(SplitKeyError::EmptyKey { position: 1 })
        );
    }
}
