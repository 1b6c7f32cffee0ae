//! End-to-end roster scenarios against the default 1200x600 board.

use hive_roster::{
    execute, sample_roster, BoardConfig, Canvas, Field, Member, MemberDraft, MemberId, MemberPatch,
    Outcome, Position, Role, RosterError, RosterStore, SizeTier,
};
use proptest::prelude::*;

fn default_store() -> RosterStore {
    RosterStore::new(BoardConfig::default()).unwrap()
}

fn filler(count: u64) -> Vec<Member> {
    (1..=count)
        .map(|id| Member::new(id, format!("Member {id}"), 10, Role::Member))
        .collect()
}

#[test]
fn first_member_on_empty_board() {
    let mut store = default_store();
    assert!(store.engine().compute_positions(0).unwrap().is_empty());

    let alpha = store.add(&MemberDraft::new("Alpha", 5, "member")).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(alpha.id, MemberId(1));
    assert_eq!(store.positions(), &[Position::new(0, 80.0, 80.0)]);
    assert_eq!(store.tier(), SizeTier::new(80.0, 1.8));
    assert!(store.connectors().unwrap().is_empty());
}

#[test]
fn removing_from_the_middle_keeps_order() {
    let mut store = RosterStore::with_members(BoardConfig::default(), sample_roster()).unwrap();
    assert_eq!(store.tier(), SizeTier::new(70.0, 1.6));

    store.remove(MemberId(3)).unwrap();

    let ids: Vec<u64> = store.members().iter().map(|m| m.id.value()).collect();
    assert_eq!(ids, vec![1, 2, 4, 5]);
    assert_eq!(store.positions().len(), 4);
    assert_eq!(store.tier(), SizeTier::new(70.0, 1.6));
    assert_eq!(store.positions(), &store.engine().compute_positions(4).unwrap()[..]);
}

#[test]
fn out_of_range_level_update_is_rejected() {
    let mut store = RosterStore::with_members(BoardConfig::default(), sample_roster()).unwrap();
    let before = store.members().to_vec();

    let err = store
        .update(MemberId(2), &MemberPatch::default().level(31))
        .unwrap_err();

    assert_eq!(err.field(), Some(Field::Level));
    assert!(matches!(err, RosterError::ValidationFailed { field: Field::Level, .. }));
    assert_eq!(store.get(MemberId(2)).unwrap().level, 22);
    assert_eq!(store.members(), &before[..]);
}

#[test]
fn full_board_rejects_the_next_member() {
    let mut store = RosterStore::with_members(BoardConfig::default(), filler(90)).unwrap();
    let members_before = store.members().to_vec();
    let positions_before = store.positions().to_vec();
    let tier_before = store.tier();

    let err = store
        .add(&MemberDraft::new("Newcomer", 12, "member"))
        .unwrap_err();

    assert!(matches!(
        err,
        RosterError::CapacityExceeded { requested: 91, canvas_height } if canvas_height == 600.0
    ));
    assert_eq!(store.len(), 90);
    assert_eq!(store.members(), &members_before[..]);
    assert_eq!(store.positions(), &positions_before[..]);
    assert_eq!(store.tier(), tier_before);
}

#[test]
fn default_board_fills_at_twenty_four() {
    let mut store = default_store();
    for i in 0..24 {
        store
            .add(&MemberDraft::new(format!("Member {i}"), 10, "member"))
            .unwrap();
    }
    assert!(matches!(
        store.add(&MemberDraft::new("One Too Many", 10, "member")),
        Err(RosterError::CapacityExceeded { requested: 25, .. })
    ));
    assert_eq!(store.len(), 24);
}

#[test]
fn taller_canvas_holds_more() {
    let config = BoardConfig {
        canvas: Canvas::new(1200.0, 2400.0).unwrap(),
        ..BoardConfig::default()
    };
    let mut store = RosterStore::new(config).unwrap();
    for i in 0..60 {
        store
            .add(&MemberDraft::new(format!("Member {i}"), 10, "member"))
            .unwrap();
    }
    assert_eq!(store.len(), 60);
    assert_eq!(store.tier(), SizeTier::new(40.0, 1.3));
}

#[test]
fn scripted_session() {
    let mut store = RosterStore::with_members(BoardConfig::default(), sample_roster()).unwrap();
    let script = [
        "add 12 officer Foxtrot Guard",
        "update 6 level=13",
        "remove 1",
        "update 1 level=2",
    ];

    let results: Vec<_> = script
        .iter()
        .map(|line| execute(&mut store, line.parse().unwrap()))
        .collect();

    assert!(matches!(&results[0], Ok(Outcome::Added(m)) if m.id == MemberId(6)));
    assert!(matches!(&results[1], Ok(Outcome::Updated(m)) if m.level == 13));
    assert!(matches!(&results[2], Ok(Outcome::Removed(MemberId(1)))));
    assert_eq!(results[3], Err(RosterError::NotFound(MemberId(1))));

    let view = store.view().unwrap();
    assert_eq!(view.node_count(), 5);
    assert_eq!(view.role_counts.leader, 0);
    assert_eq!(view.role_counts.officer, 2);
}

#[derive(Debug, Clone)]
enum Op {
    Add,
    Remove(usize),
    Update(usize, i64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        2 => (0usize..40).prop_map(Op::Remove),
        1 => (0usize..40, -5i64..40).prop_map(|(i, level)| Op::Update(i, level)),
    ]
}

proptest! {
    #[test]
    fn ids_only_grow_and_layout_tracks_roster(ops in prop::collection::vec(op(), 1..80)) {
        let mut store = default_store();
        let mut highest = 0u64;

        for op in ops {
            let before = store.members().to_vec();
            match op {
                Op::Add => match store.add(&MemberDraft::new("Member", 10, "member")) {
                    Ok(member) => {
                        prop_assert!(member.id.value() > highest);
                        highest = member.id.value();
                    }
                    Err(RosterError::CapacityExceeded { .. }) => {
                        prop_assert_eq!(store.members(), &before[..]);
                    }
                    Err(e) => prop_assert!(false, "unexpected error {:?}", e),
                },
                Op::Remove(i) => {
                    if let Some(id) = store.members().get(i).map(|m| m.id) {
                        store.remove(id).unwrap();
                        prop_assert!(store.get(id).is_none());
                    }
                }
                Op::Update(i, level) => {
                    if let Some(id) = store.members().get(i).map(|m| m.id) {
                        let result = store.update(id, &MemberPatch::default().level(level));
                        prop_assert_eq!(result.is_ok(), (1..=30).contains(&level));
                        prop_assert_eq!(store.len(), before.len());
                    }
                }
            }

            prop_assert_eq!(store.positions().len(), store.members().len());
            prop_assert_eq!(store.positions(), &store.engine().compute_positions(store.len()).unwrap()[..]);
            prop_assert_eq!(store.tier(), store.engine().select_size_tier(store.len()));
        }
    }
}
