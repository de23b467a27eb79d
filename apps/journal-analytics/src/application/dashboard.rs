//! Dashboard service: every rollup over one filtered snapshot.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use crate::domain::analytics::{
    DEFAULT_PARALLEL_THRESHOLD, EquityBucketing, EquityPoint, GroupSummarizer, GroupSummary,
    KpiSummary, TagPerformance, equity_curve, max_drawdown, performance_by_tag, summarize_kpis,
};
use crate::domain::journal::{Account, Strategy};
use crate::domain::shared::Money;

use super::filters::TradeFilter;
use super::snapshot::JournalSnapshot;

/// All dashboard views for one set of trades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Headline KPIs.
    pub kpis: KpiSummary,
    /// Cumulative PnL curve.
    pub equity_curve: Vec<EquityPoint>,
    /// Largest peak-to-trough drop of the equity curve.
    pub max_drawdown: Money,
    /// Per-tag performance, ordered by tag name.
    pub performance_by_tag: Vec<TagPerformance>,
    /// Per-strategy summaries, ordered by strategy id.
    pub strategies: Vec<GroupSummary>,
    /// Per-account summaries, ordered by account id.
    pub accounts: Vec<GroupSummary>,
}

/// Builds [`DashboardReport`]s.
#[derive(Debug, Clone, Copy)]
pub struct DashboardService {
    bucketing: EquityBucketing,
    summarizer: GroupSummarizer,
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new(EquityBucketing::default(), DEFAULT_PARALLEL_THRESHOLD)
    }
}

impl DashboardService {
    /// Create a new DashboardService.
    #[must_use]
    pub const fn new(bucketing: EquityBucketing, parallel_threshold: usize) -> Self {
        Self {
            bucketing,
            summarizer: GroupSummarizer::new(parallel_threshold),
        }
    }

    /// Build the report over the trades matching `filter`.
    ///
    /// Accounts without a supplied `current_balance` get their projected
    /// balance, computed over the whole snapshot so filtering never changes
    /// a balance. A strategy or account filter also narrows the reference
    /// rows listed in the summaries.
    #[must_use]
    pub fn build(&self, snapshot: &JournalSnapshot, filter: &TradeFilter) -> DashboardReport {
        let span = info_span!(
            "dashboard.build",
            snapshot_trades = snapshot.trades.len(),
            filtered = !filter.is_empty()
        );
        let _guard = span.enter();

        let trades = filter.apply(&snapshot.trades);
        debug!(trades = trades.len(), "Trades selected");

        let kpis = summarize_kpis(&trades);
        debug!(
            total = kpis.total_trades,
            winning = kpis.winning_trades,
            losing = kpis.losing_trades,
            "KPI summary computed"
        );

        let equity_curve = equity_curve(&trades, self.bucketing);
        let max_drawdown = max_drawdown(&equity_curve);
        debug!(points = equity_curve.len(), %max_drawdown, "Equity curve computed");

        let performance_by_tag = performance_by_tag(&trades);
        debug!(tags = performance_by_tag.len(), "Tag performance computed");

        let strategies: Vec<Strategy> = snapshot
            .strategies
            .iter()
            .filter(|s| filter.strategy_id.as_ref().is_none_or(|id| *id == s.id))
            .cloned()
            .collect();
        let strategy_summaries = self.summarizer.by_strategy(&trades, &strategies);

        let accounts: Vec<Account> = snapshot
            .accounts
            .iter()
            .filter(|a| filter.account_id.as_ref().is_none_or(|id| *id == a.id))
            .map(|account| Account {
                current_balance: Some(account.balance_or_projected(&snapshot.trades)),
                ..account.clone()
            })
            .collect();
        let account_summaries = self.summarizer.by_account(&trades, &accounts);
        debug!(
            strategies = strategy_summaries.len(),
            accounts = account_summaries.len(),
            "Group summaries computed"
        );

        info!(
            trades = trades.len(),
            total_pnl = %kpis.total_pnl,
            "Dashboard built"
        );

        DashboardReport {
            kpis,
            equity_curve,
            max_drawdown,
            performance_by_tag,
            strategies: strategy_summaries,
            accounts: account_summaries,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::journal::fixtures::trade_with_pnl;
    use crate::domain::journal::{AccountType, Direction, PreferredDirection, TagSet};
    use crate::domain::shared::{AccountId, RatioValue, StrategyId};

    fn snapshot() -> JournalSnapshot {
        let mut t2 = trade_with_pnl("t2", dec!(-50), 2, 10);
        t2.account_id = AccountId::new("acc-2");
        t2.direction = Direction::Short;
        t2.exit_price = dec!(150);
        let mut t3 = trade_with_pnl("t3", dec!(200), 3, 10);
        t3.tags = ["breakout"].into_iter().collect::<TagSet>();
        let t4 = trade_with_pnl("t4", dec!(-25), 4, 10);

        JournalSnapshot {
            trades: vec![trade_with_pnl("t1", dec!(100), 1, 10), t2, t3, t4],
            strategies: vec![
                Strategy {
                    id: StrategyId::new("str-1"),
                    name: "Open Drive".to_string(),
                    category: None,
                    preferred_direction: PreferredDirection::Both,
                    timeframes: Vec::new(),
                    entry_criteria: None,
                    exit_criteria: None,
                },
                Strategy {
                    id: StrategyId::new("str-idle"),
                    name: "Idle".to_string(),
                    category: None,
                    preferred_direction: PreferredDirection::Both,
                    timeframes: Vec::new(),
                    entry_criteria: None,
                    exit_criteria: None,
                },
            ],
            accounts: vec![
                Account {
                    id: AccountId::new("acc-1"),
                    name: "Main".to_string(),
                    account_type: AccountType::Live,
                    broker_platform: None,
                    initial_balance: Money::new(dec!(1000)),
                    current_balance: None,
                },
                Account {
                    id: AccountId::new("acc-2"),
                    name: "Eval".to_string(),
                    account_type: AccountType::Evaluation,
                    broker_platform: None,
                    initial_balance: Money::new(dec!(50000)),
                    current_balance: Some(Money::new(dec!(49000))),
                },
            ],
        }
    }

    #[test]
    fn full_report() {
        let report = DashboardService::default().build(&snapshot(), &TradeFilter::all());

        assert_eq!(report.kpis.total_trades, 4);
        assert_eq!(report.kpis.win_rate, dec!(0.5));
        assert_eq!(report.kpis.total_pnl, Money::new(dec!(225)));
        assert_eq!(report.kpis.profit_factor, RatioValue::Finite(dec!(4)));
        assert_eq!(report.equity_curve.len(), 4);
        assert_eq!(
            report.equity_curve.last().map(|p| p.cumulative_pnl),
            Some(report.kpis.total_pnl)
        );
        assert_eq!(report.max_drawdown, Money::new(dec!(50)));
        assert_eq!(report.performance_by_tag.len(), 1);

        let keys: Vec<&str> = report.strategies.iter().map(|s| s.group_key.as_str()).collect();
        assert_eq!(keys, vec!["str-1", "str-idle"]);
        assert_eq!(report.strategies[1].trades, 0);
        assert_eq!(report.strategies[1].profit_factor, RatioValue::NoData);

        // acc-1: 1000 + 100 + 200 - 25; acc-2 keeps its supplied balance.
        assert_eq!(report.accounts[0].current_balance, Some(Money::new(dec!(1275))));
        assert_eq!(report.accounts[1].current_balance, Some(Money::new(dec!(49000))));
    }

    #[test]
    fn filter_narrows_trades_but_not_balances() {
        let filter = TradeFilter::all().with_account(AccountId::new("acc-1"));
        let report = DashboardService::default().build(&snapshot(), &filter);

        assert_eq!(report.kpis.total_trades, 3);
        assert_eq!(report.accounts.len(), 1);
        assert_eq!(report.accounts[0].current_balance, Some(Money::new(dec!(1275))));
        assert_eq!(report.accounts[0].total_pnl, Money::new(dec!(275)));
    }

    #[test]
    fn empty_snapshot_yields_empty_report() {
        let report = DashboardService::default().build(&JournalSnapshot::default(), &TradeFilter::all());

        assert_eq!(report.kpis.total_trades, 0);
        assert_eq!(report.kpis.win_rate, Decimal::ZERO);
        assert!(report.equity_curve.is_empty());
        assert_eq!(report.max_drawdown, Money::ZERO);
        assert!(report.strategies.is_empty());
    }

    #[test]
    fn daily_bucketing_is_configurable() {
        let mut snapshot = snapshot();
        for trade in &mut snapshot.trades {
            trade.exit_timestamp = snapshot_exit();
            trade.entry_timestamp = snapshot_exit() - chrono::Duration::minutes(5);
        }

        let report = DashboardService::new(EquityBucketing::Daily, 0)
            .build(&snapshot, &TradeFilter::all());
        assert_eq!(report.equity_curve.len(), 1);
        assert_eq!(report.equity_curve[0].cumulative_pnl, Money::new(dec!(225)));
    }

    fn snapshot_exit() -> chrono::DateTime<chrono::Utc> {
        trade_with_pnl("x", dec!(0), 10, 12).exit_timestamp
    }
}
