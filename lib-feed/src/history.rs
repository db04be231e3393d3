//! Transaction history projection
//!
//! Simpler than the activity feed: every ledger transaction, newest first,
//! decorated with per-kind presentation data from fixed lookup tables. No
//! merging with check-ins, no cap.

use serde::Serialize;

use lib_ledger::{LedgerService, LedgerTransaction, TxKind};

/// Whether a row credits, debits, or leaves the balance alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Credit,
    Debit,
    Neutral,
}

impl Sign {
    /// Prefix glyph for rendering amounts
    pub fn glyph(&self) -> &'static str {
        match self {
            Sign::Credit => "+",
            Sign::Debit => "-",
            Sign::Neutral => "",
        }
    }
}

/// One rendered history row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub transaction: LedgerTransaction,
    pub label: &'static str,
    pub icon: &'static str,
    pub sign: Sign,
    pub color: &'static str,
}

/// Human label per transaction kind
pub fn label(kind: TxKind) -> &'static str {
    match kind {
        TxKind::ClaimReward => "Reward claimed",
        TxKind::Contribute => "Charity contribution",
        TxKind::Transfer => "Tokens sent",
        TxKind::Receive => "Tokens received",
        TxKind::StakeTokens => "Tokens staked",
        TxKind::UnstakeTokens => "Tokens unstaked",
        TxKind::CheckIn => "Daily check-in",
        TxKind::Validation => "Check-in validated",
    }
}

/// Icon per transaction kind
pub fn icon(kind: TxKind) -> &'static str {
    match kind {
        TxKind::ClaimReward => "🏆",
        TxKind::Contribute => "💚",
        TxKind::Transfer => "📤",
        TxKind::Receive => "📥",
        TxKind::StakeTokens => "🔒",
        TxKind::UnstakeTokens => "🔓",
        TxKind::CheckIn => "🌱",
        TxKind::Validation => "✅",
    }
}

/// Balance direction per transaction kind
pub fn sign(kind: TxKind) -> Sign {
    match kind {
        TxKind::ClaimReward | TxKind::Receive | TxKind::UnstakeTokens | TxKind::CheckIn => {
            Sign::Credit
        }
        TxKind::Contribute | TxKind::Transfer | TxKind::StakeTokens => Sign::Debit,
        TxKind::Validation => Sign::Neutral,
    }
}

/// Render color token per transaction kind
pub fn color(kind: TxKind) -> &'static str {
    match sign(kind) {
        Sign::Credit => "green",
        Sign::Debit => "red",
        Sign::Neutral => "slate",
    }
}

/// Project the full transaction log, newest first with stable ties.
pub async fn transaction_history(ledger: &LedgerService) -> Vec<HistoryRow> {
    let mut transactions = ledger.transactions().await;
    transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    transactions
        .into_iter()
        .map(|tx| HistoryRow {
            label: label(tx.kind),
            icon: icon(tx.kind),
            sign: sign(tx.kind),
            color: color(tx.kind),
            transaction: tx,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_storage::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_history_sorted_newest_first() {
        let ledger = LedgerService::initialize(Arc::new(MemoryStore::new()), "0xwallet")
            .await
            .unwrap();
        ledger.record_check_in(1).await.unwrap();
        ledger.claim_reward("first-steps").await.unwrap();
        ledger.contribute("rescue-farm", 10).await.unwrap();

        let rows = transaction_history(&ledger).await;
        assert_eq!(rows.len(), 3);
        for pair in rows.windows(2) {
            assert!(pair[0].transaction.timestamp >= pair[1].transaction.timestamp);
        }
    }

    #[test]
    fn test_decoration_tables_are_consistent() {
        for kind in [
            TxKind::ClaimReward,
            TxKind::Contribute,
            TxKind::Transfer,
            TxKind::Receive,
            TxKind::StakeTokens,
            TxKind::UnstakeTokens,
            TxKind::CheckIn,
            TxKind::Validation,
        ] {
            assert!(!label(kind).is_empty());
            assert!(!icon(kind).is_empty());
            match sign(kind) {
                Sign::Credit => assert_eq!(color(kind), "green"),
                Sign::Debit => assert_eq!(color(kind), "red"),
                Sign::Neutral => assert_eq!(color(kind), "slate"),
            }
        }
    }

    #[test]
    fn test_sign_glyphs() {
        assert_eq!(Sign::Credit.glyph(), "+");
        assert_eq!(Sign::Debit.glyph(), "-");
        assert_eq!(Sign::Neutral.glyph(), "");
    }
}
