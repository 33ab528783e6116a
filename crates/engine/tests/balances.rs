use std::collections::HashMap;

use proptest::prelude::*;
use rstest::rstest;
use uuid::Uuid;

use engine::{
    Currency, EPSILON_MINOR, Group, NewExpense, Standing, Transfer, balance_overview,
    compute_balances, minimal_transfers,
};

fn group_with_members(names: &[&str]) -> (Group, Vec<Uuid>) {
    let mut group = Group::new("Trip", Currency::Eur).unwrap();
    let ids = names
        .iter()
        .map(|name| group.add_member(name).unwrap())
        .collect();
    (group, ids)
}

fn record(group: &mut Group, amount_minor: i64, paid_by: Uuid, split_between: Vec<Uuid>) -> Uuid {
    group
        .add_expense(NewExpense {
            amount_minor,
            paid_by,
            split_between,
            ..Default::default()
        })
        .unwrap()
}

fn apply_transfers(balances: &HashMap<Uuid, i64>, transfers: &[Transfer]) -> HashMap<Uuid, i64> {
    let mut balances = balances.clone();
    for transfer in transfers {
        *balances.entry(transfer.from).or_insert(0) += transfer.amount_minor;
        *balances.entry(transfer.to).or_insert(0) -= transfer.amount_minor;
    }
    balances
}

#[test]
fn two_member_expense_splits_down_the_middle() {
    let (mut group, ids) = group_with_members(&["A", "B"]);
    record(&mut group, 10_000, ids[0], vec![ids[0], ids[1]]);

    let balances = compute_balances(&group);
    assert_eq!(balances[&ids[0]], 5_000);
    assert_eq!(balances[&ids[1]], -5_000);

    assert_eq!(
        minimal_transfers(&group),
        vec![Transfer {
            from: ids[1],
            to: ids[0],
            amount_minor: 5_000,
        }]
    );
}

#[test]
fn settling_the_only_debtor_zeroes_the_group() {
    let (mut group, ids) = group_with_members(&["A", "B"]);
    let expense_id = record(&mut group, 10_000, ids[0], vec![ids[0], ids[1]]);
    group.toggle_settled(expense_id, ids[1]).unwrap();

    let balances = compute_balances(&group);
    assert_eq!(balances[&ids[0]], 0);
    assert_eq!(balances[&ids[1]], 0);
    assert!(minimal_transfers(&group).is_empty());
}

#[test]
fn three_member_expense_fans_in_to_the_payer() {
    let (mut group, ids) = group_with_members(&["A", "B", "C"]);
    record(&mut group, 9_000, ids[0], vec![ids[0], ids[1], ids[2]]);

    let balances = compute_balances(&group);
    assert_eq!(balances[&ids[0]], 6_000);
    assert_eq!(balances[&ids[1]], -3_000);
    assert_eq!(balances[&ids[2]], -3_000);

    let plan = minimal_transfers(&group);
    assert_eq!(plan.len(), 2);
    assert!(plan.iter().all(|t| t.to == ids[0] && t.amount_minor <= 3_000));
    assert_eq!(plan.iter().map(|t| t.amount_minor).sum::<i64>(), 6_000);
}

#[test]
fn payer_in_own_settled_set_is_a_no_op() {
    let (mut group, ids) = group_with_members(&["A", "B"]);
    let expense_id = record(&mut group, 10_000, ids[0], vec![ids[0], ids[1]]);

    let before = compute_balances(&group);
    group.toggle_settled(expense_id, ids[0]).unwrap();
    let after = compute_balances(&group);

    assert_eq!(before, after);
}

#[test]
fn full_settlement_empties_the_plan() {
    let (mut group, ids) = group_with_members(&["A", "B", "C"]);
    let first = record(&mut group, 9_000, ids[0], vec![ids[0], ids[1], ids[2]]);
    let second = record(&mut group, 4_000, ids[1], vec![ids[1], ids[2]]);

    group.settle_all(first).unwrap();
    group.settle_all(second).unwrap();

    let balances = compute_balances(&group);
    assert!(balances.values().all(|b| b.abs() <= EPSILON_MINOR));
    assert!(minimal_transfers(&group).is_empty());
}

#[test]
fn members_without_expenses_stay_settled() {
    let (mut group, ids) = group_with_members(&["A", "B", "C"]);
    record(&mut group, 10_000, ids[0], vec![ids[0], ids[1]]);

    let overview = balance_overview(&group);
    assert_eq!(overview.len(), 3);
    assert_eq!(overview[0].name, "A");
    assert_eq!(overview[0].standing, Standing::Owed);
    assert_eq!(overview[1].standing, Standing::Owes);
    assert_eq!(overview[2].balance_minor, 0);
    assert_eq!(overview[2].standing, Standing::Settled);
}

#[rstest]
#[case::uneven_remainder(10_0, 3)]
#[case::exact_division(9_000, 3)]
#[case::single_participant(7_77, 1)]
fn conservation_holds_per_expense(#[case] amount_minor: i64, #[case] participants: usize) {
    let names = ["A", "B", "C", "D"];
    let (mut group, ids) = group_with_members(&names[..participants.max(2)]);
    record(
        &mut group,
        amount_minor,
        ids[0],
        ids[..participants].to_vec(),
    );

    let balances = compute_balances(&group);
    assert_eq!(balances.values().sum::<i64>(), 0);
}

/// Strategy: up to 8 expenses over a fixed 4-member roster, each with a
/// random payer, a random non-empty participant subset and a random settled
/// subset of those participants.
fn arb_expenses() -> impl Strategy<Value = Vec<(i64, usize, Vec<bool>, Vec<bool>)>> {
    prop::collection::vec(
        (
            1i64..=50_000,
            0usize..4,
            prop::collection::vec(any::<bool>(), 4),
            prop::collection::vec(any::<bool>(), 4),
        ),
        0..8,
    )
}

proptest! {
    #[test]
    fn balances_always_conserve_money(expenses in arb_expenses()) {
        let (mut group, ids) = group_with_members(&["A", "B", "C", "D"]);

        for (amount_minor, payer_idx, participation, settled) in expenses {
            let split: Vec<Uuid> = ids
                .iter()
                .zip(&participation)
                .filter_map(|(id, take)| take.then_some(*id))
                .collect();
            if split.is_empty() {
                continue;
            }
            let expense_id = record(&mut group, amount_minor, ids[payer_idx], split.clone());
            for (id, settle) in ids.iter().zip(&settled) {
                if *settle && split.contains(id) {
                    group.toggle_settled(expense_id, *id).unwrap();
                }
            }
        }

        let balances = compute_balances(&group);
        prop_assert_eq!(balances.values().sum::<i64>(), 0);
    }

    #[test]
    fn applying_the_plan_settles_everyone(expenses in arb_expenses()) {
        let (mut group, ids) = group_with_members(&["A", "B", "C", "D"]);

        for (amount_minor, payer_idx, participation, _) in expenses {
            let split: Vec<Uuid> = ids
                .iter()
                .zip(&participation)
                .filter_map(|(id, take)| take.then_some(*id))
                .collect();
            if split.is_empty() {
                continue;
            }
            record(&mut group, amount_minor, ids[payer_idx], split);
        }

        let balances = compute_balances(&group);
        let plan = minimal_transfers(&group);

        let nonzero = balances.values().filter(|b| **b != 0).count();
        prop_assert!(plan.len() <= nonzero.saturating_sub(1));

        for transfer in &plan {
            prop_assert!(transfer.amount_minor > 0);
            prop_assert_ne!(transfer.from, transfer.to);
        }

        let settled = apply_transfers(&balances, &plan);
        for balance in settled.values() {
            prop_assert_eq!(*balance, 0, "residual balance {}", balance);
        }
    }
}
