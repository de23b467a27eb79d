//! Grouped rollups: by tag, by strategy, by account.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::domain::journal::{Account, Strategy, Trade, tag_key};
use crate::domain::shared::Money;

use super::stats::TradeStats;
use super::types::{GroupSummary, TagPerformance};

/// Trade count at which strategy/account groups are summarized on the
/// rayon pool instead of the calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

/// Performance of every tag carried by the trades.
///
/// A trade with N tags counts toward N groups. Tags are grouped
/// case-insensitively; the group takes the lexicographically smallest
/// spelling seen and groups are ordered by case-folded name.
#[must_use]
pub fn performance_by_tag(trades: &[Trade]) -> Vec<TagPerformance> {
    let mut groups: BTreeMap<String, (String, TradeStats)> = BTreeMap::new();

    for trade in trades {
        if trade.tags.is_empty() {
            continue;
        }
        let metrics = trade.metrics();
        for tag in trade.tags.iter() {
            let (name, stats) = groups
                .entry(tag_key(tag))
                .or_insert_with(|| (tag.to_string(), TradeStats::default()));
            if tag < name.as_str() {
                *name = tag.to_string();
            }
            stats.record(&metrics);
        }
    }

    groups
        .into_values()
        .map(|(tag_name, stats)| TagPerformance {
            tag_name,
            total_pnl: stats.total_pnl,
            win_rate: stats.win_rate(),
            trade_count: stats.trades as u64,
        })
        .collect()
}

/// Strategy summaries with the default parallel threshold.
#[must_use]
pub fn strategy_summaries(trades: &[Trade], strategies: &[Strategy]) -> Vec<GroupSummary> {
    GroupSummarizer::default().by_strategy(trades, strategies)
}

/// Account summaries with the default parallel threshold.
#[must_use]
pub fn account_summaries(trades: &[Trade], accounts: &[Account]) -> Vec<GroupSummary> {
    GroupSummarizer::default().by_account(trades, accounts)
}

/// Trades collected under one group key, plus its reference data.
#[derive(Default)]
struct Group<'a> {
    name: Option<String>,
    current_balance: Option<Money>,
    trades: Vec<&'a Trade>,
}

/// Builds strategy and account summaries.
///
/// Every supplied strategy/account gets a summary, including those with no
/// trades. Trades pointing at ids missing from the reference data still
/// form a group, without a name. Output is sorted by group key.
#[derive(Debug, Clone, Copy)]
pub struct GroupSummarizer {
    parallel_threshold: usize,
}

impl Default for GroupSummarizer {
    fn default() -> Self {
        Self::new(DEFAULT_PARALLEL_THRESHOLD)
    }
}

impl GroupSummarizer {
    /// Create a summarizer that goes parallel at `parallel_threshold` trades.
    #[must_use]
    pub const fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// One summary per strategy.
    #[must_use]
    pub fn by_strategy(&self, trades: &[Trade], strategies: &[Strategy]) -> Vec<GroupSummary> {
        let mut groups: BTreeMap<String, Group<'_>> = strategies
            .iter()
            .map(|strategy| {
                let group = Group {
                    name: Some(strategy.name.clone()),
                    ..Group::default()
                };
                (strategy.id.to_string(), group)
            })
            .collect();

        for trade in trades {
            groups
                .entry(trade.strategy_id.to_string())
                .or_default()
                .trades
                .push(trade);
        }

        self.summarize(groups, trades.len())
    }

    /// One summary per account, passing the supplied `current_balance`
    /// through unchanged.
    #[must_use]
    pub fn by_account(&self, trades: &[Trade], accounts: &[Account]) -> Vec<GroupSummary> {
        let mut groups: BTreeMap<String, Group<'_>> = accounts
            .iter()
            .map(|account| {
                let group = Group {
                    name: Some(account.name.clone()),
                    current_balance: account.current_balance,
                    trades: Vec::new(),
                };
                (account.id.to_string(), group)
            })
            .collect();

        for trade in trades {
            groups
                .entry(trade.account_id.to_string())
                .or_default()
                .trades
                .push(trade);
        }

        self.summarize(groups, trades.len())
    }

    fn summarize(&self, groups: BTreeMap<String, Group<'_>>, trade_count: usize) -> Vec<GroupSummary> {
        let groups: Vec<(String, Group<'_>)> = groups.into_iter().collect();

        if trade_count >= self.parallel_threshold {
            groups
                .into_par_iter()
                .map(|(key, group)| summarize_group(key, group))
                .collect()
        } else {
            groups
                .into_iter()
                .map(|(key, group)| summarize_group(key, group))
                .collect()
        }
    }
}

fn summarize_group(group_key: String, group: Group<'_>) -> GroupSummary {
    let mut stats = TradeStats::default();
    for trade in &group.trades {
        stats.record(&trade.metrics());
    }
    let average_r = stats.average_r();

    GroupSummary {
        group_key,
        name: group.name,
        trades: stats.trades as u64,
        win_rate: stats.win_rate(),
        total_pnl: stats.total_pnl,
        total_r: stats.total_r,
        average_r,
        expectancy_r: average_r,
        profit_factor: stats.profit_factor(),
        current_balance: group.current_balance,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::journal::fixtures::trade_with_pnl;
    use crate::domain::journal::{AccountType, PreferredDirection, TagSet};
    use crate::domain::shared::{AccountId, RatioValue, StrategyId};

    fn strategy(id: &str, name: &str) -> Strategy {
        Strategy {
            id: StrategyId::new(id),
            name: name.to_string(),
            category: None,
            preferred_direction: PreferredDirection::Both,
            timeframes: Vec::new(),
            entry_criteria: None,
            exit_criteria: None,
        }
    }

    fn account(id: &str, balance: Option<Decimal>) -> Account {
        Account {
            id: AccountId::new(id),
            name: format!("Account {id}"),
            account_type: AccountType::Live,
            broker_platform: None,
            initial_balance: Money::new(dec!(10000)),
            current_balance: balance.map(Money::new),
        }
    }

    fn tagged(id: &str, pnl: Decimal, day: u32, tags: &[&str]) -> Trade {
        let mut trade = trade_with_pnl(id, pnl, day, 10);
        trade.tags = tags.iter().collect::<TagSet>();
        trade
    }

    /// Trade with a 5 point stop so R = pnl / 5.
    fn with_stop(id: &str, pnl: Decimal, day: u32, strategy_id: &str) -> Trade {
        let mut trade = trade_with_pnl(id, pnl, day, 10);
        trade.stop_loss_planned = Some(dec!(95));
        trade.strategy_id = StrategyId::new(strategy_id);
        trade
    }

    #[test]
    fn trade_counts_once_per_tag() {
        let trades = vec![
            tagged("t1", dec!(100), 1, &["breakout", "A+"]),
            tagged("t2", dec!(-40), 2, &["breakout"]),
            tagged("t3", dec!(20), 3, &[]),
        ];

        let tags = performance_by_tag(&trades);

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].tag_name, "A+");
        assert_eq!(tags[0].trade_count, 1);
        assert_eq!(tags[0].win_rate, Decimal::ONE);
        assert_eq!(tags[1].tag_name, "breakout");
        assert_eq!(tags[1].trade_count, 2);
        assert_eq!(tags[1].total_pnl, Money::new(dec!(60)));
        assert_eq!(tags[1].win_rate, dec!(0.5));
    }

    #[test]
    fn tags_group_case_insensitively() {
        let trades = vec![
            tagged("t1", dec!(10), 1, &["news"]),
            tagged("t2", dec!(10), 2, &["News"]),
        ];

        let tags = performance_by_tag(&trades);

        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].tag_name, "News");
        assert_eq!(tags[0].trade_count, 2);
    }

    #[test]
    fn non_ascii_spellings_count_trade_once() {
        let trades = vec![tagged("t1", dec!(10), 1, &["Ärger", "ärger"])];

        let tags = performance_by_tag(&trades);

        let [tag] = tags.as_slice() else {
            panic!("expected one tag, got {tags:?}");
        };
        assert_eq!(tag.tag_name, "Ärger");
        assert_eq!(tag.trade_count, 1);
        assert_eq!(tag.total_pnl, Money::new(dec!(10)));
    }

    #[test]
    fn strategy_summary_r_statistics() {
        let mut no_stop = trade_with_pnl("t3", dec!(30), 3, 10);
        no_stop.strategy_id = StrategyId::new("s1");
        let trades = vec![
            with_stop("t1", dec!(10), 1, "s1"),
            with_stop("t2", dec!(-5), 2, "s1"),
            no_stop,
        ];

        let summaries = strategy_summaries(&trades, &[strategy("s1", "Sweep")]);

        let [summary] = summaries.as_slice() else {
            panic!("expected one summary, got {summaries:?}");
        };
        assert_eq!(summary.group_key, "s1");
        assert_eq!(summary.name.as_deref(), Some("Sweep"));
        assert_eq!(summary.trades, 3);
        assert_eq!(summary.total_pnl, Money::new(dec!(35)));
        assert_eq!(summary.total_r, dec!(1));
        assert_eq!(summary.average_r, Some(dec!(0.5)));
        assert_eq!(summary.expectancy_r, summary.average_r);
        assert_eq!(summary.profit_factor, RatioValue::Finite(dec!(8)));
        assert_eq!(summary.current_balance, None);
    }

    #[test]
    fn empty_group_degrades_to_sentinels() {
        let summaries = strategy_summaries(&[], &[strategy("s1", "Unused")]);

        let [summary] = summaries.as_slice() else {
            panic!("expected one summary, got {summaries:?}");
        };
        assert_eq!(summary.trades, 0);
        assert_eq!(summary.win_rate, Decimal::ZERO);
        assert_eq!(summary.total_pnl, Money::ZERO);
        assert_eq!(summary.profit_factor, RatioValue::NoData);
        assert_eq!(summary.average_r, None);
    }

    #[test]
    fn unknown_strategy_still_grouped() {
        let trades = vec![with_stop("t1", dec!(10), 1, "orphan")];

        let summaries = strategy_summaries(&trades, &[strategy("s1", "Known")]);

        let keys: Vec<&str> = summaries.iter().map(|s| s.group_key.as_str()).collect();
        assert_eq!(keys, vec!["orphan", "s1"]);
        assert_eq!(summaries[0].name, None);
        assert_eq!(summaries[0].trades, 1);
    }

    #[test]
    fn account_balance_passes_through() {
        let mut other = trade_with_pnl("t2", dec!(-20), 2, 10);
        other.account_id = AccountId::new("acc-2");
        let trades = vec![trade_with_pnl("t1", dec!(50), 1, 10), other];

        let summaries = account_summaries(
            &trades,
            &[account("acc-1", Some(dec!(12500))), account("acc-2", None)],
        );

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].current_balance, Some(Money::new(dec!(12500))));
        assert_eq!(summaries[0].total_pnl, Money::new(dec!(50)));
        assert_eq!(summaries[1].current_balance, None);
        assert_eq!(summaries[1].profit_factor, RatioValue::Finite(Decimal::ZERO));
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let trades: Vec<Trade> = (0..60)
            .map(|i| {
                let pnl = Decimal::from(i % 7) - Decimal::from(3);
                with_stop(&format!("t{i:02}"), pnl, 1 + (i % 28), &format!("s{}", i % 5))
            })
            .collect();
        let strategies = vec![strategy("s0", "Zero"), strategy("s9", "Idle")];

        let sequential = GroupSummarizer::new(usize::MAX).by_strategy(&trades, &strategies);
        let parallel = GroupSummarizer::new(0).by_strategy(&trades, &strategies);

        assert_eq!(sequential, parallel);
        assert_eq!(sequential.len(), 6);
    }
}
