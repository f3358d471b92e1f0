//! Per-tick analysis data: team partitions, medic references, and the
//! per-player spatial features derived from them.

use itertools::Itertools;

use crate::types::game::Team;
use crate::types::game::entities::Player;
use crate::types::demo::TickData;
use crate::types::math::Vector;

use super::grouping::{build_groupings, get_avg_pos, Grouping, GROUPING_THRESHOLD};

/// Spatial features for one player during a single tick.
///
/// `dist_from_medic` is `None` when the player's team had no medic that tick;
/// consumers must handle the absence rather than read a sentinel.
#[derive(Debug, Clone)]
pub struct PlayerTickData<'a> {
    pub player: &'a Player,
    pub dist_from_medic: Option<f32>,
    pub dist_from_team_avg: f32,
    pub dist_from_group_avg: f32,
}

/// One team's slice of a tick analysis.
#[derive(Debug, Clone, Default)]
pub struct TickTeamAnalysis<'a> {
    pub team: Team,

    /// The team's players, in roster order.
    pub players: Vec<&'a Player>,

    /// The team's medic. A team may have none; if it somehow has several,
    /// the first in roster order is the canonical one.
    pub medic: Option<&'a Player>,

    /// Average position of the team's living players.
    pub avg_position: Vector,

    /// Spatial clusters of the team, each classified.
    pub groupings: Vec<Grouping<'a>>,

    /// One entry per player, in the same order as `players`.
    pub player_data: Vec<PlayerTickData<'a>>,
}

impl<'a> TickTeamAnalysis<'a> {
    /// Analyze one team's players for a tick.
    ///
    /// An empty player list is fine and produces an all-empty analysis.
    pub fn new(team: Team, players: Vec<&'a Player>) -> Self {
        let medic = players.iter().copied().find(|p| p.is_medic());
        let avg_position = get_avg_pos(&players);
        let groupings = build_groupings(&players, GROUPING_THRESHOLD);

        let player_data = players.iter()
            .map(|player| PlayerTickData {
                player,
                // planar distance; height doesn't keep a medic from healing
                dist_from_medic: medic.map(|m| player.distance_from_xy(m)),
                dist_from_team_avg: player.position.dist_to(&avg_position),
                dist_from_group_avg: groupings.iter()
                    .find(|g| g.contains(player))
                    .map_or(0.0, |g| player.position.dist_to(&g.avg_position)),
            })
            .collect_vec();

        TickTeamAnalysis {
            team,
            players,
            medic,
            avg_position,
            groupings,
            player_data,
        }
    }
}

/// The full analysis of one tick: both teams' partitions and features.
#[derive(Debug, Clone)]
pub struct TickAnalysis<'a> {
    pub tickdata: &'a TickData,
    pub redteam: TickTeamAnalysis<'a>,
    pub bluteam: TickTeamAnalysis<'a>,
}

impl<'a> From<&'a TickData> for TickAnalysis<'a> {
    fn from(value: &'a TickData) -> Self {
        let red = value.players.iter().filter(|p| p.team == Team::Red).collect_vec();
        let blu = value.players.iter().filter(|p| p.team == Team::Blue).collect_vec();

        TickAnalysis {
            tickdata: value,
            redteam: TickTeamAnalysis::new(Team::Red, red),
            bluteam: TickTeamAnalysis::new(Team::Blue, blu),
        }
    }
}
