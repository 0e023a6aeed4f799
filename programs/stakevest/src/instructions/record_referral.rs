// instructions/record_referral.rs
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::state::*;
use crate::utils::*;

/// Credit the level-1 commission for an activated investment. The earning
/// PDA is derived from (referrer, investment), so crediting the same pair
/// twice fails at account creation: double-crediting is structurally
/// impossible.
pub fn record_level1(ctx: Context<RecordLevel1Commission>) -> Result<()> {
    let investment = &ctx.accounts.investment;
    let investor = &ctx.accounts.investor;
    let referrer = &mut ctx.accounts.referrer;

    if investment.status != InvestmentStatus::Active {
        return Err(StakevestError::InvestmentNotActive.into());
    }
    if investor.referrer != Some(referrer.owner) {
        return Err(StakevestError::InvalidReferrer.into());
    }

    // rate locked to the rank the referral was registered at
    let rate_bps = referral_tier_bps(investor.referral_rank);
    let amount = referral_commission(investment.principal, rate_bps)?;

    let earning = &mut ctx.accounts.referral_earning;
    **earning = ReferralEarning::new(
        referrer.owner,
        investor.owner,
        investment.key(),
        1,
        rate_bps,
        amount,
        investment.created_at,
        ctx.bumps.referral_earning,
    );

    referrer.credit_referral_earning(amount)?;

    msg!(
        "Level 1 commission: referral #{} at {} bps = {} cents",
        investor.referral_rank,
        rate_bps,
        amount
    );

    Ok(())
}

/// Credit the flat level-2 commission to the referrer's own referrer.
pub fn record_level2(ctx: Context<RecordLevel2Commission>) -> Result<()> {
    let investment = &ctx.accounts.investment;
    let investor = &ctx.accounts.investor;
    let direct_referrer = &ctx.accounts.direct_referrer;
    let level2_referrer = &mut ctx.accounts.level2_referrer;

    if investment.status != InvestmentStatus::Active {
        return Err(StakevestError::InvestmentNotActive.into());
    }
    if investor.referrer != Some(direct_referrer.owner) {
        return Err(StakevestError::InvalidReferrer.into());
    }
    if direct_referrer.referrer != Some(level2_referrer.owner) {
        return Err(StakevestError::InvalidReferrer.into());
    }

    let rate_bps = ctx.accounts.platform_config.level2_commission_bps;
    let amount = referral_commission(investment.principal, rate_bps)?;

    let earning = &mut ctx.accounts.referral_earning;
    **earning = ReferralEarning::new(
        level2_referrer.owner,
        investor.owner,
        investment.key(),
        2,
        rate_bps,
        amount,
        investment.created_at,
        ctx.bumps.referral_earning,
    );

    level2_referrer.credit_referral_earning(amount)?;

    msg!("Level 2 commission: {} bps = {} cents", rate_bps, amount);

    Ok(())
}

#[derive(Accounts)]
pub struct RecordLevel1Commission<'info> {
    /// Admin authority; commissions are credited when the deposit settles
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump,
        constraint = platform_config.authority == authority.key() @ StakevestError::UnauthorizedAdmin
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    /// The referred user's activated investment
    pub investment: Account<'info, Investment>,

    /// The referred user
    #[account(constraint = investor.owner == investment.owner)]
    pub investor: Account<'info, Investor>,

    /// The direct referrer being credited
    #[account(mut)]
    pub referrer: Account<'info, Investor>,

    #[account(
        init,
        payer = authority,
        space = ReferralEarning::SIZE,
        seeds = [
            REFERRAL_EARNING_SEED,
            referrer.owner.as_ref(),
            investment.key().as_ref()
        ],
        bump
    )]
    pub referral_earning: Account<'info, ReferralEarning>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct RecordLevel2Commission<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump,
        constraint = platform_config.authority == authority.key() @ StakevestError::UnauthorizedAdmin
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    pub investment: Account<'info, Investment>,

    #[account(constraint = investor.owner == investment.owner)]
    pub investor: Account<'info, Investor>,

    /// The referred user's direct referrer (the chain's middle link)
    pub direct_referrer: Account<'info, Investor>,

    /// The level-2 referrer being credited
    #[account(mut)]
    pub level2_referrer: Account<'info, Investor>,

    #[account(
        init,
        payer = authority,
        space = ReferralEarning::SIZE,
        seeds = [
            REFERRAL_EARNING_SEED,
            level2_referrer.owner.as_ref(),
            investment.key().as_ref()
        ],
        bump
    )]
    pub referral_earning: Account<'info, ReferralEarning>,

    pub system_program: Program<'info, System>,
}
