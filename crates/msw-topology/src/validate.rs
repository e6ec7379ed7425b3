//! Segment-set validation logic.

use std::collections::HashSet;

use msw_core::{BranchId, SegmentNumber};

use crate::error::{TopologyError, TopologyResult};
use crate::indexing::SegmentIndex;
use crate::segment::Segment;

/// Validate numbering, outlet references and the top segment.
///
/// Expects `segments` sorted by segment number.
pub(crate) fn validate_structure(well: &str, segments: &[Segment]) -> TopologyResult<()> {
    // Segment numbers must be unique
    let mut numbers: HashSet<SegmentNumber> = HashSet::new();
    for segment in segments {
        if !numbers.insert(segment.number) {
            return Err(TopologyError::DuplicateSegment {
                well: well.to_string(),
                segment: segment.number,
            });
        }
    }

    // Every outlet must exist
    for segment in segments {
        if let Some(outlet) = segment.outlet {
            if !numbers.contains(&outlet) {
                return Err(TopologyError::UnknownOutlet {
                    well: well.to_string(),
                    segment: segment.number,
                    outlet,
                });
            }
        }
    }

    // Exactly one top segment: segment 1 on branch 1
    let tops: Vec<&Segment> = segments.iter().filter(|s| s.is_top()).collect();
    match tops.as_slice() {
        [] => {
            return Err(TopologyError::MissingTopSegment {
                well: well.to_string(),
            });
        }
        [top] => {
            if top.number != SegmentNumber::TOP {
                return Err(TopologyError::TopSegmentNotFirst {
                    well: well.to_string(),
                    segment: top.number,
                });
            }
            if top.branch != BranchId::MAIN {
                return Err(TopologyError::TopSegmentNotOnMainBranch {
                    well: well.to_string(),
                    branch: top.branch,
                });
            }
        }
        many => {
            return Err(TopologyError::MultipleTopSegments {
                well: well.to_string(),
                count: many.len(),
            });
        }
    }

    Ok(())
}

/// Check that every segment drains to the top segment.
///
/// Each segment has a single outlet, so the structure is a tree exactly when
/// no outlet chain is longer than the number of segments.
pub(crate) fn validate_reachability(
    well: &str,
    segments: &[Segment],
    index: &SegmentIndex,
) -> TopologyResult<()> {
    let mut reaches_top = vec![false; segments.len()];

    for start in 0..segments.len() {
        let mut chain = Vec::new();
        let mut current = start;
        loop {
            if reaches_top[current] {
                break;
            }
            if chain.len() > segments.len() {
                return Err(TopologyError::Unreachable {
                    well: well.to_string(),
                    segment: segments[start].number,
                });
            }
            chain.push(current);
            match segments[current].outlet.and_then(|o| index.index_of(o)) {
                Some(next) => current = next,
                None => break,
            }
        }

        for visited in chain {
            reaches_top[visited] = true;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Device;
    use crate::segment::SegmentGeometry;

    fn segment(n: u32, branch: u32, outlet: u32) -> Segment {
        Segment {
            number: SegmentNumber::new(n).unwrap(),
            branch: BranchId::new(branch).unwrap(),
            outlet: SegmentNumber::new(outlet),
            geometry: SegmentGeometry::default(),
            device: Device::Regular,
            inlets: Vec::new(),
        }
    }

    #[test]
    fn validate_empty_well() {
        let result = validate_structure("W", &[]);
        assert!(matches!(result, Err(TopologyError::MissingTopSegment { .. })));
    }

    #[test]
    fn validate_duplicate_number() {
        let segments = vec![segment(1, 1, 0), segment(2, 1, 1), segment(2, 1, 1)];
        let result = validate_structure("W", &segments);
        assert!(matches!(result, Err(TopologyError::DuplicateSegment { .. })));
    }

    #[test]
    fn validate_dangling_outlet() {
        let segments = vec![segment(1, 1, 0), segment(2, 1, 7)];
        let result = validate_structure("W", &segments);
        assert!(matches!(result, Err(TopologyError::UnknownOutlet { .. })));
    }

    #[test]
    fn validate_top_segment_rules() {
        let two_tops = vec![segment(1, 1, 0), segment(2, 1, 0)];
        assert!(matches!(
            validate_structure("W", &two_tops),
            Err(TopologyError::MultipleTopSegments { count: 2, .. })
        ));

        let wrong_number = vec![segment(2, 1, 0), segment(3, 1, 2)];
        assert!(matches!(
            validate_structure("W", &wrong_number),
            Err(TopologyError::TopSegmentNotFirst { .. })
        ));

        let wrong_branch = vec![segment(1, 2, 0)];
        assert!(matches!(
            validate_structure("W", &wrong_branch),
            Err(TopologyError::TopSegmentNotOnMainBranch { .. })
        ));
    }

    #[test]
    fn validate_cycle_is_unreachable() {
        // 2 -> 3 -> 2 never reaches segment 1
        let segments = vec![segment(1, 1, 0), segment(2, 1, 3), segment(3, 1, 2)];
        validate_structure("W", &segments).unwrap();
        let index = SegmentIndex::new(segments.iter().map(|s| s.number).collect());
        let result = validate_reachability("W", &segments, &index);
        assert!(matches!(result, Err(TopologyError::Unreachable { .. })));
    }
}
