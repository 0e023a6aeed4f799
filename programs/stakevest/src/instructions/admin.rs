// instructions/admin.rs
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::state::*;

/// Flip the platform-wide pause switch. While paused, new investments and
/// withdrawal requests are refused; processing of already-created requests
/// stays available to the admin.
pub fn toggle_pause(ctx: Context<AdminAction>) -> Result<()> {
    let state = &mut ctx.accounts.platform_state;
    state.toggle_pause();

    msg!("Platform paused: {}", state.is_paused);

    Ok(())
}

pub fn update_treasury_wallet(ctx: Context<AdminAction>, new_treasury: Pubkey) -> Result<()> {
    let state = &mut ctx.accounts.platform_state;
    let old = state.treasury_wallet;
    state.treasury_wallet = new_treasury;

    msg!("Treasury wallet: {} -> {}", old, new_treasury);

    Ok(())
}

#[derive(Accounts)]
pub struct AdminAction<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump,
        constraint = platform_config.authority == authority.key() @ StakevestError::UnauthorizedAdmin
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(
        mut,
        seeds = [PLATFORM_STATE_SEED],
        bump = platform_state.bump
    )]
    pub platform_state: Account<'info, PlatformState>,
}
