//! Ledger command handlers

use anyhow::Result;

use lib_feed::ChallengeProgress;
use lib_ledger::{ClaimableReward, TokenBalance};
use lib_storage::keys;
use lib_types::Amount;

use crate::session::Session;

// ============================================================================
// PURE FORMATTING
// ============================================================================

/// Format the status block
pub fn format_status(
    wallet: &str,
    balance: TokenBalance,
    staked: Amount,
    claimable: &[ClaimableReward],
) -> String {
    let mut out = format!(
        "Wallet:     {wallet}\nBalance:    {} VEG / {} SPROUT\nStaked:     {} VEG\n",
        balance.primary, balance.secondary, staked
    );
    if claimable.is_empty() {
        out.push_str("Claimable:  none\n");
    } else {
        out.push_str("Claimable:\n");
        for reward in claimable {
            out.push_str(&format!(
                "  {:20} {:>5} VEG  {}\n",
                reward.id, reward.amount, reward.description
            ));
        }
    }
    out
}

/// Format one catalog line
pub fn format_reward_line(reward: &ClaimableReward) -> String {
    let state = if reward.claimed {
        "claimed"
    } else if reward.unlocked {
        "claimable"
    } else {
        "locked"
    };
    format!(
        "{:20} {:>5} VEG  [{}]  {}",
        reward.id, reward.amount, state, reward.description
    )
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Store the display name used for feed attribution
pub async fn handle_onboard(session: &Session, username: &str) -> Result<()> {
    session.store.put(keys::USERNAME, username).await?;
    println!("👋 Welcome, {username}! Your feed activity will use this name.");
    Ok(())
}

/// Show wallet, balances, and claimable rewards
pub async fn handle_status(session: &Session) -> Result<()> {
    let balance = session.ledger.balance().await;
    let staked = session.ledger.staked().await;
    let claimable = session.ledger.claimable_rewards().await;
    println!("🌱 VEG21 session status\n");
    print!(
        "{}",
        format_status(session.ledger.wallet_address(), balance, staked, &claimable)
    );
    Ok(())
}

/// List the full reward catalog
pub async fn handle_rewards(session: &Session) -> Result<()> {
    println!("🏆 Reward catalog\n");
    for reward in session.ledger.all_rewards().await {
        println!("  {}", format_reward_line(&reward));
    }
    Ok(())
}

/// Claim an unlocked reward
pub async fn handle_claim(session: &Session, reward_id: &str) -> Result<()> {
    let tx = session.ledger.claim_reward(reward_id).await?;
    println!(
        "🏆 Claimed {reward_id} for {} VEG (tx {})",
        tx.amount, tx.tx_hash
    );
    println!(
        "   Balance is now {} VEG",
        session.ledger.balance().await.primary
    );
    Ok(())
}

/// Unlock a reward whose milestone was reached
pub async fn handle_unlock(session: &Session, reward_id: &str) -> Result<()> {
    if session.ledger.unlock_reward(reward_id).await? {
        println!("🔓 Unlocked {reward_id}");
    } else {
        println!("🔓 {reward_id} was already unlocked or claimed");
    }
    Ok(())
}

/// Contribute tokens to a charity
pub async fn handle_contribute(session: &Session, charity_id: &str, amount: Amount) -> Result<()> {
    let tx = session.ledger.contribute(charity_id, amount).await?;
    println!(
        "💚 Contributed {amount} VEG to {charity_id} (tx {})",
        tx.tx_hash
    );
    Ok(())
}

/// Record today's check-in: credit the ledger bonus and advance the
/// persisted challenge progress.
pub async fn handle_check_in(session: &Session, day: u32) -> Result<()> {
    let tx = session.ledger.record_check_in(day).await?;

    let mut progress = ChallengeProgress::load(session.store.as_ref())
        .await
        .unwrap_or_default();
    if !progress.completed_days.contains(&day) {
        progress.completed_days.push(day);
        progress.completed_days.sort_unstable();
    }
    progress.last_check_in_date = Some(today());
    session
        .store
        .put(keys::CHALLENGE_PROGRESS, &serde_json::to_string(&progress)?)
        .await?;

    println!("🌱 Day {day} checked in, +{} VEG", tx.amount);
    println!(
        "   {} of 21 days complete",
        progress.completed_days.len().min(21)
    );
    Ok(())
}

/// Send tokens to another address
pub async fn handle_transfer(session: &Session, to: &str, amount: Amount) -> Result<()> {
    let tx = session.ledger.transfer(to, amount).await?;
    println!("📤 Sent {amount} VEG to {to} (tx {})", tx.tx_hash);
    Ok(())
}

/// Stake tokens
pub async fn handle_stake(session: &Session, amount: Amount) -> Result<()> {
    session.ledger.stake(amount).await?;
    println!(
        "🔒 Staked {amount} VEG ({} VEG now staked)",
        session.ledger.staked().await
    );
    Ok(())
}

/// Unstake tokens
pub async fn handle_unstake(session: &Session, amount: Amount) -> Result<()> {
    session.ledger.unstake(amount).await?;
    println!(
        "🔓 Unstaked {amount} VEG ({} VEG still staked)",
        session.ledger.staked().await
    );
    Ok(())
}

/// Reset the session to its seed state
pub async fn handle_reset(session: &Session) -> Result<()> {
    session.ledger.reset().await?;
    session.store.delete(keys::CHALLENGE_PROGRESS).await?;
    println!(
        "♻️  Session reset: balance back to {} VEG, history cleared",
        session.ledger.balance().await.primary
    );
    Ok(())
}

/// Today's calendar date as YYYY-MM-DD.
fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_status_lists_claimable() {
        let claimable = vec![ClaimableReward {
            id: "first-steps".to_string(),
            description: "Complete your first daily check-in".to_string(),
            amount: 10,
            unlocked: true,
            claimed: false,
        }];
        let out = format_status("0xabc", TokenBalance::new(100, 0), 25, &claimable);
        assert!(out.contains("0xabc"));
        assert!(out.contains("100 VEG"));
        assert!(out.contains("25 VEG"));
        assert!(out.contains("first-steps"));
    }

    #[test]
    fn test_format_status_empty_claimable() {
        let out = format_status("0xabc", TokenBalance::new(0, 0), 0, &[]);
        assert!(out.contains("Claimable:  none"));
    }

    #[test]
    fn test_format_reward_line_states() {
        let mut reward = ClaimableReward {
            id: "week-one".to_string(),
            description: "Seven days".to_string(),
            amount: 50,
            unlocked: false,
            claimed: false,
        };
        assert!(format_reward_line(&reward).contains("[locked]"));
        reward.unlocked = true;
        assert!(format_reward_line(&reward).contains("[claimable]"));
        reward.claimed = true;
        assert!(format_reward_line(&reward).contains("[claimed]"));
    }

    #[test]
    fn test_today_shape() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert_eq!(date.as_bytes()[4], b'-');
        assert_eq!(date.as_bytes()[7], b'-');
    }
}
