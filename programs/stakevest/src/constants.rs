// constants.rs
//
// Policy tables for the staking platform. These are the compile-time
// defaults; they are copied into the PlatformConfig account at
// initialization so the calculators always read an explicit config value.

// ============================================================================
// PLAN CONFIGURATION
// ============================================================================

/// Number of plan tiers
pub const PLAN_COUNT: usize = 4;

/// Monthly base rates per plan, in hundredths of a percent (17%/month = 1700)
pub const PLAN_RATES: [u16; PLAN_COUNT] = [1400, 1700, 2000, 2200];

/// Minimum principal per plan, in cents
pub const PLAN_MIN_AMOUNTS: [u64; PLAN_COUNT] = [
    10_000,  // $100  - Starter
    100_000, // $1000 - Advanced
    300_000, // $3000 - Pro
    600_000, // $6000 - Elite
];

/// Maximum principal per plan, in cents
pub const PLAN_MAX_AMOUNTS: [u64; PLAN_COUNT] = [
    99_999,     // $999.99    - Starter
    299_999,    // $2999.99   - Advanced
    599_999,    // $5999.99   - Pro
    10_000_000, // $100000.00 - Elite
];

// ============================================================================
// DURATION POLICY
// ============================================================================

/// Allowed plan durations in months
pub const ALLOWED_DURATIONS: [u8; 3] = [3, 6, 12];

/// Monthly-rate bonus per duration, in hundredths of a percent.
/// Indexed alongside ALLOWED_DURATIONS: 3 months -> 0, 6 -> +1.5%, 12 -> +3%.
pub const DURATION_RATE_BONUSES: [u16; 3] = [0, 150, 300];

/// One-time duration cash bonus thresholds (cents). A 3-month plan never
/// carries a cash bonus; 6 and 12 months pay by principal-at-creation tier.
pub const CASH_BONUS_SMALL_THRESHOLD: u64 = 50_000; // $500
pub const CASH_BONUS_SMALL: u64 = 20_000; // $200
pub const CASH_BONUS_LARGE_THRESHOLD: u64 = 100_000; // $1000
pub const CASH_BONUS_LARGE: u64 = 50_000; // $500

/// Bonus-claim amount matching tolerance, in cents. Strictly-less-than,
/// so integer cent amounts must match exactly.
pub const BONUS_AMOUNT_TOLERANCE: u64 = 1;

// ============================================================================
// REFERRAL POLICY
// ============================================================================

/// Level-1 commission in basis points, tiered by the referral's ordinal
/// rank among the referrer's direct referrals:
/// rank 1 -> 3%, 2-3 -> 4%, 4-5 -> 5%, 6-9 -> 6%, 10+ -> 7%.
pub const REFERRAL_TIER_BPS: [u16; 5] = [300, 400, 500, 600, 700];

/// Level-2 commission, flat
pub const LEVEL2_COMMISSION_BPS: u16 = 300;

/// Days before a referral earning becomes withdrawable, counted from the
/// referred investment's creation date
pub const REFERRAL_LOCK_DAYS: u64 = 31;

// ============================================================================
// TIME & RATE ARITHMETIC
// ============================================================================

pub const SECONDS_PER_DAY: i64 = 86_400;

/// One plan month is a fixed 30 days
pub const DAYS_PER_MONTH: u64 = 30;

/// Divisor turning (principal * rate-in-hundredths-of-percent * days / 30)
/// into cents: /100 for the percent and /100 for the rate scale
pub const RATE_SCALE: u64 = 10_000;

/// Basis-points divisor for referral commissions
pub const BASIS_POINTS: u64 = 10_000;

/// Early withdrawal is allowed only within this many days of activation
pub const EARLY_WITHDRAWAL_WINDOW_DAYS: u64 = 30;

// ============================================================================
// PDA SEEDS
// ============================================================================

pub const PLATFORM_CONFIG_SEED: &[u8] = b"platform_config";
pub const PLATFORM_STATE_SEED: &[u8] = b"platform_state";
pub const INVESTOR_SEED: &[u8] = b"investor";
pub const INVESTMENT_SEED: &[u8] = b"investment";
pub const UPGRADE_SEED: &[u8] = b"upgrade";
pub const PARTIAL_WITHDRAWAL_SEED: &[u8] = b"partial_withdrawal";
pub const EARLY_WITHDRAWAL_SEED: &[u8] = b"early_withdrawal";
pub const FULL_WITHDRAWAL_SEED: &[u8] = b"full_withdrawal";
pub const REFERRAL_EARNING_SEED: &[u8] = b"referral_earning";
