//! Feed and history command handlers

use anyhow::Result;

use lib_feed::{transaction_history, ActivityKind, CommunityActivity, HistoryRow};

use crate::session::Session;

// ============================================================================
// PURE FORMATTING
// ============================================================================

/// Icon per activity kind
pub fn activity_icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::CheckIn => "🌱",
        ActivityKind::Validation => "✅",
        ActivityKind::RewardClaim => "🏆",
        ActivityKind::Donation => "💚",
        ActivityKind::ChallengeComplete => "🎉",
    }
}

/// Format one feed row
pub fn format_activity_line(activity: &CommunityActivity) -> String {
    let amount = activity
        .amount
        .map(|a| format!("  ({a} VEG)"))
        .unwrap_or_default();
    format!(
        "{} {} {}{}",
        activity_icon(activity.kind),
        activity.user,
        activity.message,
        amount
    )
}

/// Format one history row
pub fn format_history_line(row: &HistoryRow) -> String {
    format!(
        "{} {:22} {}{} VEG   {}",
        row.icon,
        row.label,
        row.sign.glyph(),
        row.transaction.amount,
        row.transaction.tx_hash
    )
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Show the community activity feed
pub async fn handle_feed(session: &Session) -> Result<()> {
    let rows = session.feed().build().await;
    println!("📣 Community activity ({} entries)\n", rows.len());
    if rows.is_empty() {
        println!("  Nothing yet. Check in to get things moving.");
    }
    for row in &rows {
        println!("  {}", format_activity_line(row));
    }
    Ok(())
}

/// Show the transaction history
pub async fn handle_history(session: &Session) -> Result<()> {
    let rows = transaction_history(&session.ledger).await;
    println!("🧾 Transaction history ({} entries)\n", rows.len());
    if rows.is_empty() {
        println!("  No transactions recorded in this session.");
    }
    for row in &rows {
        println!("  {}", format_history_line(row));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_activity_line_with_amount() {
        let row = CommunityActivity {
            id: "tx-1".to_string(),
            kind: ActivityKind::Donation,
            user: "ada".to_string(),
            message: "donated to rescue-farm".to_string(),
            amount: Some(20),
            timestamp: 0,
        };
        let line = format_activity_line(&row);
        assert!(line.contains("💚"));
        assert!(line.contains("ada"));
        assert!(line.contains("(20 VEG)"));
    }

    #[test]
    fn test_format_activity_line_without_amount() {
        let row = CommunityActivity {
            id: "checkin-1".to_string(),
            kind: ActivityKind::CheckIn,
            user: "ada".to_string(),
            message: "checked in for day 3".to_string(),
            amount: None,
            timestamp: 0,
        };
        let line = format_activity_line(&row);
        assert!(!line.contains("VEG"));
        assert!(line.ends_with("checked in for day 3"));
    }

    #[test]
    fn test_every_activity_kind_has_an_icon() {
        for kind in [
            ActivityKind::CheckIn,
            ActivityKind::Validation,
            ActivityKind::RewardClaim,
            ActivityKind::Donation,
            ActivityKind::ChallengeComplete,
        ] {
            assert!(!activity_icon(kind).is_empty());
        }
    }
}
