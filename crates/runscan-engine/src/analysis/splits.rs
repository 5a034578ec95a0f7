use runscan_types::{Milestone, StrippedRun};
use serde::Serialize;

/// Progress stages used for pacing, independent of structure order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitKind {
    /// Earlier of bastion and fort
    FirstStructure,
    /// Later of bastion and fort, once both are done
    SecondStructure,
    Blind,
    Stronghold,
}

impl SplitKind {
    pub const ALL: [SplitKind; 4] = [
        SplitKind::FirstStructure,
        SplitKind::SecondStructure,
        SplitKind::Blind,
        SplitKind::Stronghold,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SplitKind::FirstStructure => "Struct 1",
            SplitKind::SecondStructure => "Struct 2",
            SplitKind::Blind => "Blind",
            SplitKind::Stronghold => "Stronghold",
        }
    }
}

/// Pacing splits of a single run.
///
/// Each stage is only credited when the previous one was, so a blind without
/// both structures never counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSplits {
    pub first_structure: Option<u32>,
    pub second_structure: Option<u32>,
    pub blind: Option<u32>,
    pub stronghold: Option<u32>,
}

impl RunSplits {
    /// A zero-second split is a timer misread at the start of the run and is
    /// treated as not reached.
    pub fn of(run: &StrippedRun) -> Self {
        let reached = |split: Option<u32>| split.filter(|&s| s > 0);
        let (bastion, fort) = (reached(run.bastion), reached(run.fort));

        let first_structure = match (bastion, fort) {
            (Some(b), Some(f)) => Some(b.min(f)),
            (Some(t), None) | (None, Some(t)) => Some(t),
            (None, None) => None,
        };
        let second_structure = bastion.zip(fort).map(|(b, f)| b.max(f));
        let blind = second_structure.and(reached(run.blind));
        let stronghold = blind.and(reached(run.stronghold));

        Self {
            first_structure,
            second_structure,
            blind,
            stronghold,
        }
    }

    pub fn get(&self, kind: SplitKind) -> Option<u32> {
        match kind {
            SplitKind::FirstStructure => self.first_structure,
            SplitKind::SecondStructure => self.second_structure,
            SplitKind::Blind => self.blind,
            SplitKind::Stronghold => self.stronghold,
        }
    }
}

/// Split samples of one date.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DaySplits {
    pub date: String,
    pub runs: usize,
    pub first_structure: Vec<u32>,
    pub second_structure: Vec<u32>,
    pub blind: Vec<u32>,
    pub stronghold: Vec<u32>,
}

impl DaySplits {
    pub fn samples(&self, kind: SplitKind) -> &[u32] {
        match kind {
            SplitKind::FirstStructure => &self.first_structure,
            SplitKind::SecondStructure => &self.second_structure,
            SplitKind::Blind => &self.blind,
            SplitKind::Stronghold => &self.stronghold,
        }
    }

    fn push(&mut self, splits: RunSplits) {
        self.runs += 1;
        for kind in SplitKind::ALL {
            if let Some(value) = splits.get(kind) {
                let samples = match kind {
                    SplitKind::FirstStructure => &mut self.first_structure,
                    SplitKind::SecondStructure => &mut self.second_structure,
                    SplitKind::Blind => &mut self.blind,
                    SplitKind::Stronghold => &mut self.stronghold,
                };
                samples.push(value);
            }
        }
    }
}

/// Split samples grouped by date, dates in order of first appearance.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SplitTable {
    pub days: Vec<DaySplits>,
}

impl SplitTable {
    pub fn total_runs(&self) -> usize {
        self.days.iter().map(|d| d.runs).sum()
    }

    pub fn count(&self, kind: SplitKind) -> usize {
        self.days.iter().map(|d| d.samples(kind).len()).sum()
    }

    pub fn all_samples(&self, kind: SplitKind) -> Vec<u32> {
        self.days
            .iter()
            .flat_map(|d| d.samples(kind).iter().copied())
            .collect()
    }

    pub fn average_runs_per_day(&self) -> f64 {
        if self.days.is_empty() {
            return 0.0;
        }
        self.total_runs() as f64 / self.days.len() as f64
    }

    pub fn day(&self, date: &str) -> Option<&DaySplits> {
        self.days.iter().find(|d| d.date == date)
    }
}

pub fn collect_splits(runs: &[StrippedRun]) -> SplitTable {
    let mut table = SplitTable::default();

    for run in runs {
        let index = match table.days.iter().position(|d| d.date == run.date) {
            Some(i) => i,
            None => {
                table.days.push(DaySplits {
                    date: run.date.clone(),
                    ..Default::default()
                });
                table.days.len() - 1
            }
        };
        table.days[index].push(RunSplits::of(run));
    }

    table
}

/// Average of one split on a given day against all days.
#[derive(Debug, Clone, Serialize)]
pub struct SplitAverage {
    pub kind: SplitKind,
    pub day: Option<f64>,
    pub overall: Option<f64>,
}

impl SplitAverage {
    /// Seconds ahead (negative) or behind (positive) the overall average.
    pub fn pace(&self) -> Option<f64> {
        Some(self.day? - self.overall?)
    }
}

/// Counts and pacing for one date.
#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    pub date: String,
    pub runs: usize,
    pub nethers: usize,
    pub bastions: usize,
    pub forts: usize,
    pub blinds: usize,
    pub strongholds: usize,
    pub deaths: usize,
    pub averages: Vec<SplitAverage>,
}

impl DailySummary {
    pub fn count(&self, milestone: Milestone) -> usize {
        match milestone {
            Milestone::Nether => self.nethers,
            Milestone::Bastion => self.bastions,
            Milestone::Fort => self.forts,
            Milestone::Blind => self.blinds,
            Milestone::Stronghold => self.strongholds,
        }
    }
}

fn mean(samples: &[u32]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().map(|&s| f64::from(s)).sum::<f64>() / samples.len() as f64)
}

/// Summary for `date`, or `None` when no run carries that date.
pub fn daily_summary(runs: &[StrippedRun], table: &SplitTable, date: &str) -> Option<DailySummary> {
    let day = table.day(date)?;
    let day_runs: Vec<&StrippedRun> = runs.iter().filter(|r| r.date == date).collect();
    let count = |m: Milestone| day_runs.iter().filter(|r| r.split(m).is_some()).count();

    let averages = SplitKind::ALL
        .into_iter()
        .map(|kind| SplitAverage {
            kind,
            day: mean(day.samples(kind)),
            overall: mean(&table.all_samples(kind)),
        })
        .collect();

    Some(DailySummary {
        date: date.to_string(),
        runs: day_runs.len(),
        nethers: count(Milestone::Nether),
        bastions: count(Milestone::Bastion),
        forts: count(Milestone::Fort),
        blinds: count(Milestone::Blind),
        strongholds: count(Milestone::Stronghold),
        deaths: day_runs.iter().filter(|r| r.death.is_some()).count(),
        averages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(date: &str, splits: &[(Milestone, u32)]) -> StrippedRun {
        let mut run = StrippedRun {
            date: date.to_string(),
            vod: None,
            run_time: "10.00.000".to_string(),
            nether: None,
            bastion: None,
            fort: None,
            blind: None,
            stronghold: None,
            death: None,
            timestamps: Vec::new(),
        };
        for (m, s) in splits {
            run.set_split(*m, *s);
        }
        run
    }

    #[test]
    fn test_run_splits_gating() {
        use Milestone::*;

        let only_fort = RunSplits::of(&run("d", &[(Fort, 200), (Blind, 400)]));
        assert_eq!(only_fort.first_structure, Some(200));
        assert_eq!(only_fort.second_structure, None);
        assert_eq!(only_fort.blind, None);

        let both = RunSplits::of(&run("d", &[(Bastion, 250), (Fort, 180), (Blind, 400)]));
        assert_eq!(both.first_structure, Some(180));
        assert_eq!(both.second_structure, Some(250));
        assert_eq!(both.blind, Some(400));
        assert_eq!(both.stronghold, None);
    }

    #[test]
    fn test_zero_second_splits_are_not_samples() {
        use Milestone::*;

        let misread = RunSplits::of(&run("d", &[(Bastion, 0), (Fort, 300), (Blind, 500)]));
        assert_eq!(misread.first_structure, Some(300));
        assert_eq!(misread.second_structure, None);
        assert_eq!(misread.blind, None);

        let zero_blind = RunSplits::of(&run("d", &[(Bastion, 200), (Fort, 300), (Blind, 0)]));
        assert_eq!(zero_blind.second_structure, Some(300));
        assert_eq!(zero_blind.blind, None);

        let runs: Vec<StrippedRun> = [0, 100, 150, 200]
            .into_iter()
            .map(|b| run("d", &[(Bastion, b)]))
            .collect();
        let table = collect_splits(&runs);
        assert_eq!(table.total_runs(), 4);
        assert_eq!(table.all_samples(SplitKind::FirstStructure), vec![100, 150, 200]);

        let report = crate::analysis::odds::odds(&table);
        let first = report.split(SplitKind::FirstStructure).unwrap();
        assert_eq!(first.count, 3);
        assert!(first.fit.is_some());
    }

    #[test]
    fn test_collect_and_summarize() {
        use Milestone::*;

        let mut died = run("Feb 03", &[(Nether, 90)]);
        died.death = Some("LUL".to_string());
        let runs = vec![
            run("Feb 03", &[(Nether, 100), (Bastion, 200), (Fort, 300)]),
            died,
            run("Feb 04", &[(Nether, 80), (Bastion, 160)]),
            run("Feb 04", &[]),
        ];

        let table = collect_splits(&runs);
        assert_eq!(table.days.len(), 2);
        assert_eq!(table.total_runs(), 4);
        assert_eq!(table.count(SplitKind::FirstStructure), 2);
        assert_eq!(table.count(SplitKind::SecondStructure), 1);
        assert!((table.average_runs_per_day() - 2.0).abs() < 1e-9);

        let summary = daily_summary(&runs, &table, "Feb 03").unwrap();
        assert_eq!(summary.runs, 2);
        assert_eq!(summary.nethers, 2);
        assert_eq!(summary.count(Bastion), 1);
        assert_eq!(summary.deaths, 1);

        let first = &summary.averages[0];
        assert_eq!(first.kind, SplitKind::FirstStructure);
        assert_eq!(first.day, Some(200.0));
        assert_eq!(first.overall, Some(180.0));
        assert_eq!(first.pace(), Some(20.0));

        assert!(daily_summary(&runs, &table, "Mar 01").is_none());
    }
}
