//! Plain-text rendering of a dashboard report.

use std::fmt::Write;

use crate::domain::analytics::{
    GroupSummary, format_decimal, format_money, format_pct, format_r, format_ratio,
};

use super::dashboard::DashboardReport;

/// Render the report as aligned text tables, ratios at `decimal_places`.
#[must_use]
pub fn render_text(report: &DashboardReport, decimal_places: u32) -> String {
    let mut out = String::new();
    let kpis = &report.kpis;

    let _ = writeln!(out, "KPIs");
    let _ = writeln!(out, "  Trades         {}", kpis.total_trades);
    let _ = writeln!(
        out,
        "  Win rate       {} ({}W / {}L)",
        format_pct(kpis.win_rate),
        kpis.winning_trades,
        kpis.losing_trades
    );
    let _ = writeln!(out, "  Total PnL      {}", kpis.total_pnl);
    let _ = writeln!(out, "  Average win    {}", kpis.average_win);
    let _ = writeln!(out, "  Average loss   {}", kpis.average_loss);
    let _ = writeln!(
        out,
        "  Profit factor  {}",
        format_ratio(kpis.profit_factor, decimal_places)
    );
    let _ = writeln!(out, "  Max drawdown   {}", report.max_drawdown);

    let _ = writeln!(out, "\nEquity curve");
    if report.equity_curve.is_empty() {
        let _ = writeln!(out, "  (no trades)");
    }
    for point in &report.equity_curve {
        let _ = writeln!(out, "  {}  {:>14}", point.date, point.cumulative_pnl.to_string());
    }

    let _ = writeln!(out, "\nTags");
    for tag in &report.performance_by_tag {
        let _ = writeln!(
            out,
            "  {:<24} {:>6} trades  {:>8}  {:>14}",
            tag.tag_name,
            tag.trade_count,
            format_pct(tag.win_rate),
            tag.total_pnl.to_string()
        );
    }

    render_groups(&mut out, "Strategies", &report.strategies, decimal_places);
    render_groups(&mut out, "Accounts", &report.accounts, decimal_places);

    out
}

fn render_groups(out: &mut String, title: &str, groups: &[GroupSummary], decimal_places: u32) {
    let _ = writeln!(out, "\n{title}");
    for group in groups {
        let label = group.name.as_deref().unwrap_or(&group.group_key);
        let _ = write!(
            out,
            "  {:<24} {:>6} trades  {:>8}  {:>14}  PF {:>8}  total {:>8}  exp {:>8}",
            label,
            group.trades,
            format_pct(group.win_rate),
            group.total_pnl.to_string(),
            format_ratio(group.profit_factor, decimal_places),
            format_decimal(group.total_r, decimal_places),
            format_r(group.expectancy_r),
        );
        if group.current_balance.is_some() {
            let _ = write!(out, "  balance {}", format_money(group.current_balance));
        }
        let _ = writeln!(out);
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::application::{DashboardService, JournalSnapshot, TradeFilter};
    use crate::domain::journal::fixtures::trade_with_pnl;

    #[test]
    fn renders_sections_and_sentinels() {
        let snapshot = JournalSnapshot {
            trades: vec![
                trade_with_pnl("t1", dec!(10), 1, 10),
                trade_with_pnl("t2", dec!(20), 2, 10),
            ],
            ..JournalSnapshot::default()
        };
        let report = DashboardService::default().build(&snapshot, &TradeFilter::all());

        let text = render_text(&report, 2);

        assert!(text.contains("Win rate       100.00% (2W / 0L)"));
        assert!(text.contains("Profit factor  ∞"));
        assert!(text.contains("2024-01-02"));
        assert!(text.contains("$30.00"));
        assert!(text.contains("str-1"));
        assert!(text.contains("exp        —"));
    }

    #[test]
    fn empty_report_renders() {
        let report = DashboardService::default().build(&JournalSnapshot::default(), &TradeFilter::all());
        let text = render_text(&report, 2);
        assert!(text.contains("Profit factor  —"));
        assert!(text.contains("(no trades)"));
    }
}
