use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use anchor_lang::{Discriminator, InstructionData, ToAccountMetas};
use autorepay::constants::*;

fn sighash(name: &str) -> Vec<u8> {
    hash(format!("global:{}", name).as_bytes()).to_bytes()[..8].to_vec()
}

fn meta(metas: &[AccountMeta], key: Pubkey) -> &AccountMeta {
    metas.iter().find(|m| m.pubkey == key).unwrap()
}

#[test]
fn test_instruction_data_layout() {
    let data = autorepay::instruction::Repay { max_payment: 5 }.data();
    assert_eq!(data[..8], sighash("repay")[..]);
    assert_eq!(data[8..], 5u64.to_le_bytes());

    let data = autorepay::instruction::Borrow { amount: 40 * 1_000_000_000 }.data();
    assert_eq!(data[..8], sighash("borrow")[..]);
    assert_eq!(data.len(), 16);

    assert_eq!(
        autorepay::instruction::HarvestAndRepay::DISCRIMINATOR,
        &sighash("harvest_and_repay")[..]
    );
    assert_eq!(
        autorepay::instruction::WithdrawCollateral::DISCRIMINATOR,
        &sighash("withdraw_collateral")[..]
    );
}

#[test]
fn test_loan_and_receipt_addresses_are_distinct() {
    let id = 3u64.to_le_bytes();
    let (loan, _) = Pubkey::find_program_address(&[LOAN_RECORD_SEED, &id], &autorepay::ID);
    let (receipt, _) = Pubkey::find_program_address(&[LOAN_RECEIPT_SEED, &id], &autorepay::ID);
    let (next_loan, _) =
        Pubkey::find_program_address(&[LOAN_RECORD_SEED, &4u64.to_le_bytes()], &autorepay::ID);
    assert_ne!(loan, receipt);
    assert_ne!(loan, next_loan);
}

#[test]
fn test_borrow_account_metas() {
    let borrower = Pubkey::new_unique();
    let (loan_vault, _) = Pubkey::find_program_address(&[LOAN_VAULT_SEED], &autorepay::ID);
    let scope = Pubkey::new_unique();
    let position = Pubkey::new_unique();
    let loan_record = Pubkey::new_unique();
    let metas = autorepay::accounts::Borrow {
        borrower,
        loan_vault,
        scope,
        position,
        loan_record,
        loan_receipt: Pubkey::new_unique(),
        vault_token_account: Pubkey::new_unique(),
        borrower_token_account: Pubkey::new_unique(),
        token_program: anchor_spl::token::ID,
        system_program: anchor_lang::system_program::ID,
    }
    .to_account_metas(None);

    assert!(meta(&metas, borrower).is_signer);
    assert!(meta(&metas, borrower).is_writable);
    assert!(meta(&metas, loan_vault).is_writable);
    assert!(!meta(&metas, scope).is_writable);
    assert!(meta(&metas, position).is_writable);
    assert!(meta(&metas, loan_record).is_writable);
}

#[test]
fn test_harvest_runs_without_borrower_account() {
    let keeper = Pubkey::new_unique();
    let metas = autorepay::accounts::HarvestAndRepay {
        keeper,
        loan_vault: Pubkey::new_unique(),
        loan_record: Pubkey::new_unique(),
        position: Pubkey::new_unique(),
        reserve_pool: Pubkey::new_unique(),
        reserve_token_account: Pubkey::new_unique(),
        vault_token_account: Pubkey::new_unique(),
        keeper_token_account: Pubkey::new_unique(),
        borrower_token_account: None,
        token_program: anchor_spl::token::ID,
    }
    .to_account_metas(None);

    assert!(meta(&metas, keeper).is_signer);
    // An omitted optional account is passed as the program id placeholder
    let placeholder = meta(&metas, autorepay::ID);
    assert!(!placeholder.is_writable);
    assert!(!placeholder.is_signer);
}

#[test]
fn test_withdraw_collateral_closes_to_holder() {
    let holder = Pubkey::new_unique();
    let loan_record = Pubkey::new_unique();
    let loan_receipt = Pubkey::new_unique();
    let metas = autorepay::accounts::WithdrawCollateral {
        holder,
        loan_record,
        loan_receipt,
        position: Pubkey::new_unique(),
    }
    .to_account_metas(None);

    // Rent from both closed accounts lands on the holder
    assert!(meta(&metas, holder).is_signer);
    assert!(meta(&metas, holder).is_writable);
    assert!(meta(&metas, loan_record).is_writable);
    assert!(meta(&metas, loan_receipt).is_writable);
}
