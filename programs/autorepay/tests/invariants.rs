mod common;

use anchor_lang::prelude::*;
use autorepay::state::{LoanStatus, ReservePool, SupporterPosition};
use common::*;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    DepositYield(u64),
    Harvest(i64),
    Repay(u64, i64),
    Revalue(u64),
    Liquidate(u64, i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u64..20 * UNIT).prop_map(Op::DepositYield),
        (0i64..60 * DAY).prop_map(Op::Harvest),
        (0u64..30 * UNIT, 0i64..60 * DAY).prop_map(|(amount, dt)| Op::Repay(amount, dt)),
        (0u64..200 * UNIT).prop_map(Op::Revalue),
        (0u64..60 * UNIT, 0i64..60 * DAY).prop_map(|(amount, dt)| Op::Liquidate(amount, dt)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_loan_lifecycle_invariants(
        amount in UNIT..=40 * UNIT,
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let mut h = Harness::new();
        let borrower = Pubkey::new_unique();
        let liquidator = Pubkey::new_unique();
        let mut pledge = h.issue(borrower, 1_000, 100 * UNIT);
        let mut loan = h.borrow(borrower, &mut pledge, amount, T0).unwrap();
        let disbursed = loan.outcome.disbursed;

        let mut now = T0;
        let mut deposited = 0u64;
        let mut last_index = h.reserve.global_index;
        let mut last_accrual = loan.record.last_accrual_time;

        for op in ops {
            let vault_before = h.vault.clone();
            let record_before = loan.record.clone();
            let position_before = pledge.position.clone();
            let reserve_before = h.reserve.clone();

            let result = match op {
                Op::DepositYield(value) => {
                    deposited += value;
                    h.reserve.deposit_yield(value).map(|_| ())
                }
                Op::Harvest(dt) => {
                    now += dt;
                    h.vault
                        .harvest_loan(&mut loan.record, &mut pledge.position, &mut h.reserve, now)
                        .map(|_| ())
                }
                Op::Repay(value, dt) => {
                    now += dt;
                    h.vault.repay_loan(&mut loan.record, value, now).map(|_| ())
                }
                Op::Revalue(total_principal) => {
                    h.scope.total_principal = total_principal;
                    Ok(())
                }
                Op::Liquidate(value, dt) => {
                    now += dt;
                    h.vault
                        .liquidate_loan(
                            &mut loan.record,
                            &mut pledge.position,
                            &h.scope,
                            liquidator,
                            value,
                            now,
                        )
                        .map(|_| ())
                }
            };

            if result.is_err() {
                prop_assert_eq!(&h.vault, &vault_before);
                prop_assert_eq!(&loan.record, &record_before);
                prop_assert_eq!(&pledge.position, &position_before);
                prop_assert_eq!(&h.reserve, &reserve_before);
            }

            // Monotonic clocks and index
            prop_assert!(h.reserve.global_index >= last_index);
            prop_assert!(loan.record.last_accrual_time >= last_accrual);
            last_index = h.reserve.global_index;
            last_accrual = loan.record.last_accrual_time;

            // Never repay past what is due
            prop_assert!(loan.record.amount_repaid <= loan.record.total_due().unwrap());

            let active = u64::from(loan.record.status == LoanStatus::Active);
            prop_assert_eq!(h.vault.active_loan_count, active);

            // Custody follows status
            match loan.record.status {
                LoanStatus::Active | LoanStatus::Repaid => {
                    prop_assert_eq!(pledge.position.holder, h.vault_key);
                }
                LoanStatus::Liquidated => {
                    prop_assert_eq!(pledge.position.holder, liquidator);
                }
            }

            // Every token the vault token account received is on a ledger
            prop_assert_eq!(
                h.vault.total_backing().unwrap(),
                INITIAL_LIQUIDITY - disbursed + h.vault.total_repaid
            );
            prop_assert_eq!(h.reserve.balance + h.reserve.total_distributed, deposited);
        }
    }

    #[test]
    fn prop_claims_never_exceed_deposits(
        shares in prop::collection::vec(1u128..1_000_000, 1..6),
        steps in prop::collection::vec((1u64..1_000 * UNIT, any::<bool>()), 1..30),
    ) {
        let mut pool = ReservePool {
            scope: Pubkey::new_unique(),
            ..ReservePool::default()
        };
        let mut positions: Vec<SupporterPosition> = shares
            .iter()
            .map(|&s| {
                pool.register_shares(s).unwrap();
                SupporterPosition {
                    scope: pool.scope,
                    shares: s,
                    claim_cursor: pool.global_index,
                    ..SupporterPosition::default()
                }
            })
            .collect();

        let mut deposited = 0u64;
        let mut claimed = 0u64;
        for (i, (amount, claim)) in steps.into_iter().enumerate() {
            pool.deposit_yield(amount).unwrap();
            deposited += amount;
            if claim {
                let position = &mut positions[i % shares.len()];
                let amount = pool.claim(position).unwrap();
                if amount > 0 {
                    prop_assert_eq!(position.claim_cursor, pool.global_index);
                }
                claimed += amount;
            }
        }
        for position in positions.iter_mut() {
            claimed += pool.claim(position).unwrap();
        }

        prop_assert!(claimed <= deposited);
        prop_assert_eq!(pool.balance, deposited - claimed);
        prop_assert_eq!(pool.total_distributed, claimed);
    }
}
