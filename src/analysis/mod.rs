//////////////////////////////
//! Author: David Walker
//! Name:   analysis
//! Purpose:
//!     Entry points the demo-parsing executable calls into, plus the
//!     round-level aggregation built on top of the tick analysis.
//!
//! When analysing the data from a demo, we primarily want to look at the
//! data from rounds. As such, this is the hierarchy of analysis:
//!     DEMO ANALYSIS
//!     \-  ROUND ANALYSIS
//!         \- TICK ANALYSIS
//////////////////////////////

use std::cmp::Reverse;
use std::path::PathBuf;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::types::demo::{DemoData, TickData};
use crate::types::game::{Round, Team};
use crate::types::game::entities::Player;

pub mod grouping;
pub mod data;

use grouping::GroupingType;
use data::{TickAnalysis, TickTeamAnalysis};

/// Analyze a single tick. Called once per tick during a scan.
pub fn analyze_tick(tick: &TickData) -> TickAnalysis<'_> {
    log::debug!("Analyzing tick {}", tick.tick);
    TickAnalysis::from(tick)
}

/// How one team spent a round, aggregated over its ticks.
#[derive(Debug, Clone, Default)]
pub struct TeamRoundSummary {
    pub team: Team,

    /// Mean medic distance over every player-tick where the team had a
    /// medic. `None` if it never did.
    pub avg_dist_from_medic: Option<f32>,

    /// How many groupings of each type were observed across the round.
    pub isolated_count: u32,
    pub combo_count: u32,
    pub flank_count: u32,
}

impl TeamRoundSummary {
    fn accumulate(&mut self, analysis: &TickTeamAnalysis<'_>, dist_sum: &mut f64, dist_samples: &mut u64) {
        for pd in &analysis.player_data {
            if let Some(dist) = pd.dist_from_medic {
                *dist_sum += dist as f64;
                *dist_samples += 1;
            }
        }

        for group in &analysis.groupings {
            match group.group_type {
                GroupingType::Isolated => self.isolated_count += 1,
                GroupingType::Combo => self.combo_count += 1,
                GroupingType::Flank => self.flank_count += 1,
                GroupingType::None => {}
            }
        }
    }
}

/// One round's aggregated analysis.
#[derive(Debug, Clone)]
pub struct RoundAnalysis {
    pub round: Round,
    pub ticks_analyzed: usize,
    pub redteam: TeamRoundSummary,
    pub bluteam: TeamRoundSummary,
}

impl RoundAnalysis {
    pub fn new(data: &DemoData, round: &Round) -> Self {
        log::debug!("Analyzing round {} - {}", round.start_tick, round.end_tick);

        let mut redteam = TeamRoundSummary { team: Team::Red, ..TeamRoundSummary::default() };
        let mut bluteam = TeamRoundSummary { team: Team::Blue, ..TeamRoundSummary::default() };
        let (mut red_sum, mut red_n) = (0f64, 0u64);
        let (mut blu_sum, mut blu_n) = (0f64, 0u64);

        let ticks = data.round_ticks(round);
        for tick in &ticks {
            let analysis = analyze_tick(tick);
            redteam.accumulate(&analysis.redteam, &mut red_sum, &mut red_n);
            bluteam.accumulate(&analysis.bluteam, &mut blu_sum, &mut blu_n);
        }

        if red_n > 0 {
            redteam.avg_dist_from_medic = Some((red_sum / red_n as f64) as f32);
        }
        if blu_n > 0 {
            bluteam.avg_dist_from_medic = Some((blu_sum / blu_n as f64) as f32);
        }

        RoundAnalysis {
            round: *round,
            ticks_analyzed: ticks.len(),
            redteam,
            bluteam,
        }
    }
}

/// The whole demo's analysis, one entry per round.
#[derive(Debug, Clone, Default)]
pub struct DemoAnalysis {
    pub demo_filename: PathBuf,
    pub rounds: Vec<RoundAnalysis>,
}

/// Analyze a whole loaded demo. Called once per demofile by the executable.
pub fn analyze_demo(data: &DemoData) -> DemoAnalysis {
    log::info!("Analyzing demo: {:?}", data.demo_filename);

    DemoAnalysis {
        demo_filename: data.demo_filename.clone(),
        rounds: data.rounds.iter()
            .map(|round| RoundAnalysis::new(data, round))
            .collect_vec(),
    }
}

/// How grouped-up `player` is with everyone else on the field.
///
/// Returns (teammates, enemies), each ranked by descending closeness.
/// Closeness is `1 / (1 + d)` where `d` is the XY distance, so a player
/// standing on top of `player` scores 1.0 and the score falls off toward 0.
/// The sort is stable; equally close players stay in roster order. `player`
/// itself is skipped if it appears in `teammates`.
pub fn generate_grouping<'a>(
    player: &Player,
    teammates: &'a [Player],
    enemies: &'a [Player],
) -> (Vec<(&'a Player, f32)>, Vec<(&'a Player, f32)>) {
    let rank = |list: &'a [Player]| {
        list.iter()
            .filter(|p| p.entity != player.entity)
            .map(|p| (p, 1.0 / (1.0 + player.distance_from_xy(p))))
            .sorted_by_key(|(_, score)| Reverse(OrderedFloat(*score)))
            .collect_vec()
    };

    (rank(teammates), rank(enemies))
}
