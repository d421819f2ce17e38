use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // General (6000-6006)
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Math underflow")]
    MathUnderflow,
    #[msg("Division by zero")]
    DivisionByZero,
    #[msg("Invalid amount: must be greater than zero")]
    ZeroAmount,
    #[msg("Unauthorized signer")]
    Unauthorized,
    #[msg("Invalid parameter")]
    InvalidParameter,
    #[msg("Loan configuration out of range")]
    InvalidConfig,

    // Vault (6007-6010)
    #[msg("Loan vault is paused for new borrowing")]
    VaultPaused,
    #[msg("Loan amount is below the configured minimum")]
    BelowMinimumLoan,
    #[msg("Insufficient lending liquidity")]
    InsufficientLiquidity,
    #[msg("Insufficient reserve balance for withdrawal")]
    InsufficientReserve,

    // Loans (6011-6017)
    #[msg("Loan amount exceeds maximum loan-to-value")]
    ExceedsMaxLtv,
    #[msg("Collateral position has zero value")]
    ZeroCollateralValue,
    #[msg("Loan is not active")]
    LoanNotActive,
    #[msg("Loan has not been repaid")]
    LoanNotRepaid,
    #[msg("Signer does not hold this position or receipt")]
    NotAuthorizedHolder,
    #[msg("Loan is still healthy")]
    LoanStillHealthy,
    #[msg("Payment does not cover the outstanding balance")]
    InsufficientPayment,

    // Reward pool (6018-6019)
    #[msg("Position does not belong to this scope")]
    ScopeMismatch,
    #[msg("Reward pool balance cannot cover the claim")]
    InsufficientYieldBalance,

    // Harvest (6020)
    #[msg("Harvest excess needs the borrower's token account")]
    MissingExcessRecipient,
}
