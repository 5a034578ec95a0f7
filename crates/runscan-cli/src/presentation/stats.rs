use runscan_engine::analysis::{DailySummary, LogNormalFit, OddsReport, SplitOdds};
use runscan_types::{Milestone, format_mmss};

pub fn print_daily(daily: &DailySummary) {
    println!("{}: {} {}", daily.date, daily.runs, if daily.runs == 1 { "run" } else { "runs" });

    let counts: Vec<String> = Milestone::ALL
        .into_iter()
        .map(|m| format!("{} {}", m, daily.count(m)))
        .chain(std::iter::once(format!("deaths {}", daily.deaths)))
        .collect();
    println!("  {}", counts.join("  "));

    println!();
    println!("  {:<12} {:>7} {:>8} {:>7}", "split", "day", "overall", "pace");
    for avg in &daily.averages {
        println!(
            "  {:<12} {:>7} {:>8} {:>7}",
            avg.kind.label(),
            clock(avg.day),
            clock(avg.overall),
            avg.pace().map(pace).unwrap_or_else(|| "-".to_string()),
        );
    }
}

pub fn print_odds(odds: &OddsReport) {
    println!(
        "Odds over {} {} ({} runs, {:.1} runs/day)",
        odds.days,
        if odds.days == 1 { "day" } else { "days" },
        odds.total_runs,
        odds.average_runs_per_day
    );
    println!(
        "  {:<12} {:>6} {:>8} {:>8} {:>7}",
        "split", "count", "per run", "per day", "median"
    );
    for split in &odds.splits {
        println!(
            "  {:<12} {:>6} {:>8} {:>8} {:>7}",
            split.kind.label(),
            split.count,
            percent(split.chance_per_run),
            percent(split.chance_per_day),
            clock(split.fit.map(|f| f.quantile(0.5))),
        );
    }
}

pub fn print_chance(
    split: &SplitOdds,
    fit: &LogNormalFit,
    cutoff_secs: u32,
    days: u32,
    chance: f64,
    runs_per_day: f64,
) {
    let cutoff = format_mmss(f64::from(cutoff_secs));
    println!(
        "{} under {} within {} {}: {}",
        split.kind.label(),
        cutoff,
        days,
        if days == 1 { "day" } else { "days" },
        percent(chance)
    );
    println!(
        "  {} of runs reach {}, {} of those under {}; {:.1} runs/day",
        percent(split.chance_per_run),
        split.kind.label(),
        percent(fit.cdf(f64::from(cutoff_secs))),
        cutoff,
        runs_per_day
    );
}

fn clock(seconds: Option<f64>) -> String {
    seconds.map(format_mmss).unwrap_or_else(|| "-".to_string())
}

/// Signed MM:SS, negative when ahead of the average.
fn pace(delta: f64) -> String {
    let sign = if delta.round() < 0.0 { "-" } else { "+" };
    format!("{}{}", sign, format_mmss(delta.abs()))
}

fn percent(p: f64) -> String {
    format!("{:.2}%", p * 100.0)
}
