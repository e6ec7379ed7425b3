//! Integration tests for msw-topology.

use msw_core::{BranchId, MswError, SegmentNumber, m, m3};
use msw_topology::{
    Device, DiscoveryVisitor, KickOffPoint, Segment, SegmentGeometry, WellSegments,
    WellSegmentsBuilder, discover, segment_order, segment_positions,
};
use proptest::prelude::*;

fn seg(n: u32) -> SegmentNumber {
    SegmentNumber::new(n).unwrap()
}

fn branch(b: u32) -> BranchId {
    BranchId::new(b).unwrap()
}

/// Build a well from `(segment, branch, outlet)` triples (outlet 0 = top).
fn build_well(name: &str, layout: &[(u32, u32, u32)]) -> Result<WellSegments, MswError> {
    let mut builder = WellSegmentsBuilder::new(name);
    builder.top_reference(m(1000.0), m(1000.0), m3(0.1));
    for &(number, br, outlet) in layout {
        let geometry = SegmentGeometry {
            total_length: m(1000.0 + 10.0 * number as f64),
            depth: m(1000.0 + 5.0 * number as f64),
            ..SegmentGeometry::default()
        };
        builder.add_segment(
            seg(number),
            branch(br),
            SegmentNumber::new(outlet),
            geometry,
            Device::Regular,
        );
    }
    Ok(builder.build()?)
}

/// Six-branch well:
///
/// - branch 1: 1..6
/// - branch 2: 11..16, kicks off from segment 3
/// - branch 3: 7..10, kicks off from segment 5
/// - branch 4: 17..19, kicks off from segment 10
/// - branch 5: 20, 22, 23, 24, kicks off from segment 14
/// - branch 6: 21, kicks off from segment 15
fn six_branch_layout() -> Vec<(u32, u32, u32)> {
    vec![
        (1, 1, 0),
        (2, 1, 1),
        (3, 1, 2),
        (4, 1, 3),
        (5, 1, 4),
        (6, 1, 5),
        (7, 3, 5),
        (8, 3, 7),
        (9, 3, 8),
        (10, 3, 9),
        (11, 2, 3),
        (12, 2, 11),
        (13, 2, 12),
        (14, 2, 13),
        (15, 2, 14),
        (16, 2, 15),
        (17, 4, 10),
        (18, 4, 17),
        (19, 4, 18),
        (20, 5, 14),
        (21, 6, 15),
        (22, 5, 20),
        (23, 5, 22),
        (24, 5, 23),
    ]
}

fn numbers(v: &[u32]) -> Vec<SegmentNumber> {
    v.iter().map(|&n| seg(n)).collect()
}

#[test]
fn six_branch_visiting_order() {
    let well = build_well("MSW", &six_branch_layout()).unwrap();
    let found = discover(&well).unwrap();

    assert_eq!(
        found.visiting_order,
        numbers(&[
            1, 2, 3, 4, 5, 6, 11, 12, 13, 14, 15, 16, 7, 8, 9, 10, 17, 18, 19, 20, 22, 23, 24, 21
        ])
    );

    let branch_ids: Vec<u32> = found.branches.iter().map(|k| k.branch.get()).collect();
    assert_eq!(branch_ids, vec![2, 3, 4, 5, 6]);

    assert_eq!(
        found.branches[0],
        KickOffPoint {
            segment: seg(11),
            outlet: Some(seg(3)),
            branch: branch(2),
        }
    );
    assert_eq!(found.branches[4].segment, seg(21));
    assert_eq!(found.branches[4].outlet, Some(seg(15)));
}

#[test]
fn six_branch_toe_to_heel_order() {
    let well = build_well("MSW", &six_branch_layout()).unwrap();
    let order = segment_order(&well).unwrap();
    let order_numbers: Vec<u32> = order.iter().map(|&i| well.at(i).number.get()).collect();

    assert_eq!(
        order_numbers,
        vec![24, 23, 22, 20, 21, 16, 15, 14, 13, 12, 11, 19, 18, 17, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1]
    );

    // Every inlet comes before its outlet
    let positions = segment_positions(&order);
    for (index, segment) in well.iter().enumerate() {
        for &inlet in segment.inlet_segments() {
            let inlet_index = well.index_of(inlet).unwrap();
            assert!(positions[inlet_index] < positions[index]);
        }
    }
}

#[test]
fn sparse_unordered_input() {
    // Segment numbers with gaps, supplied out of order
    let well = build_well("SPARSE", &[(9, 2, 5), (5, 1, 1), (1, 1, 0), (30, 1, 5)]).unwrap();
    let found = discover(&well).unwrap();
    assert_eq!(found.visiting_order, numbers(&[1, 5, 30, 9]));
    assert_eq!(found.branches.len(), 1);
    assert_eq!(found.branches[0].outlet, Some(seg(5)));
}

#[test]
fn siblings_on_common_outlet_by_branch_id() {
    let well = build_well(
        "FORK",
        &[(1, 1, 0), (2, 1, 1), (3, 4, 2), (4, 3, 2), (5, 2, 2)],
    )
    .unwrap();
    let found = discover(&well).unwrap();
    assert_eq!(found.visiting_order, numbers(&[1, 2, 5, 4, 3]));
}

#[test]
fn two_same_branch_inlets_rejected() {
    let well = build_well("BAD", &[(1, 1, 0), (2, 1, 1), (3, 1, 2), (4, 1, 2)]).unwrap();
    let err = discover(&well).unwrap_err();
    assert!(matches!(
        err,
        MswError::NonUniqueSameBranchInlet { segment, count: 2, .. } if segment == seg(2)
    ));

    let err = segment_order(&well).unwrap_err();
    assert!(matches!(err, MswError::NonUniqueSameBranchInlet { .. }));
}

#[test]
fn cycle_rejected_at_build() {
    let err = build_well("CYCLE", &[(1, 1, 0), (2, 1, 3), (3, 1, 2)]).unwrap_err();
    assert!(matches!(err, MswError::InvalidTopology { .. }));
}

/// Visitor that stops at a given segment.
struct StopAt(SegmentNumber, Vec<SegmentNumber>);

impl DiscoveryVisitor for StopAt {
    fn new_segment(&mut self, segment: &Segment) -> msw_core::MswResult<()> {
        self.1.push(segment.number);
        if segment.number == self.0 {
            return Err(MswError::UnsupportedLoopedBranch {
                well: "W".into(),
                branch: segment.branch,
            });
        }
        Ok(())
    }

    fn new_branch(&mut self, _well: &str, _kick_off: &KickOffPoint) -> msw_core::MswResult<()> {
        Ok(())
    }
}

#[test]
fn visitor_error_stops_traversal() {
    let well = build_well("MSW", &six_branch_layout()).unwrap();
    let mut visitor = StopAt(seg(12), Vec::new());
    let result = msw_topology::Topology::new(&well).traverse(&mut visitor);
    assert!(result.is_err());
    assert_eq!(visitor.1, numbers(&[1, 2, 3, 4, 5, 6, 11, 12]));
}

/// Random tree: segment n (n >= 2) drains into an earlier segment and either
/// continues its outlet's branch (if that branch has no same-branch inlet
/// yet) or starts a new branch.
fn random_tree() -> impl Strategy<Value = Vec<(u32, u32, u32)>> {
    prop::collection::vec((any::<prop::sample::Index>(), any::<bool>()), 0..40).prop_map(|picks| {
        let mut layout = vec![(1_u32, 1_u32, 0_u32)];
        let mut has_same_branch_child = vec![false];
        let mut next_branch = 2;
        for (pick, continue_branch) in picks {
            let outlet_idx = pick.index(layout.len());
            let (outlet, outlet_branch, _) = layout[outlet_idx];
            let number = layout.len() as u32 + 1;
            let br = if continue_branch && !has_same_branch_child[outlet_idx] {
                has_same_branch_child[outlet_idx] = true;
                outlet_branch
            } else {
                next_branch += 1;
                next_branch - 1
            };
            layout.push((number, br, outlet));
            has_same_branch_child.push(false);
        }
        layout
    })
}

proptest! {
    #[test]
    fn every_segment_visited_once(layout in random_tree()) {
        let well = build_well("PROP", &layout).unwrap();
        let found = discover(&well).unwrap();

        let mut visited: Vec<u32> = found.visiting_order.iter().map(|s| s.get()).collect();
        visited.sort_unstable();
        let expected: Vec<u32> = (1..=layout.len() as u32).collect();
        prop_assert_eq!(visited, expected);

        let mut ordered = segment_order(&well).unwrap();
        prop_assert_eq!(ordered.last().copied(), Some(0));
        ordered.sort_unstable();
        prop_assert_eq!(ordered, (0..layout.len()).collect::<Vec<_>>());
    }
}
