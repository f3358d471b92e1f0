//! Grouping classification: deciding whether a cluster of players is an
//! isolated player, a flank, or a combo.

use itertools::Itertools;

use crate::types::game::entities::{Player, PlayerState};
use crate::types::math::Vector;

/// Two players closer than this (in hammer units) are considered grouped.
pub const GROUPING_THRESHOLD: f32 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum GroupingType {
    #[default]
    None = 0,       // Not valid. Empty input; callers must reject this.
	Isolated = 1,   // (1)  Only one player.
	Combo = 2,      // (2+) Contains the medic.
	Flank = 3,      // (2+) Does not contain the medic.
}

impl GroupingType {
    /// Classify a cluster of players by size and medic presence.
    ///
    /// Pure function of the input: empty sets map to [`GroupingType::None`],
    /// which callers must treat as an error rather than a group shape.
    pub fn classify(players: &[&Player]) -> Self {
        match players.len() {
            0 => GroupingType::None,
            1 => GroupingType::Isolated,
            _ => {
                if players.iter().any(|p| p.is_medic()) {
                    GroupingType::Combo
                } else {
                    GroupingType::Flank
                }
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != GroupingType::None
    }
}

impl From<&[&Player]> for GroupingType {
    fn from(val: &[&Player]) -> Self {
        GroupingType::classify(val)
    }
}

/// Average position of the living players in the list. Zero if none live.
pub(crate) fn get_avg_pos(players: &[&Player]) -> Vector {
    players.iter().copied()
                  .filter(|p| p.state == PlayerState::Alive)
                  .map(|p| p.position)
                  .zip(1..)
                  .fold(Vector::default(),
                    |acc, x| acc + Vector{
                        x: (x.0.x - acc.x) / x.1 as f32,
                        y: (x.0.y - acc.y) / x.1 as f32,
                        z: (x.0.z - acc.z) / x.1 as f32
                  })
}

/// A cluster of players and its classification.
#[derive(Debug, Clone, Default)]
pub struct Grouping<'a> {
    pub group_type: GroupingType,
    pub players: Vec<&'a Player>,
    pub avg_position: Vector,
}

impl<'a> Grouping<'a> {
    pub fn new(players: Vec<&'a Player>) -> Self {
        let group_type = GroupingType::classify(&players);
        let avg_position = get_avg_pos(&players);
        Grouping { group_type, players, avg_position }
    }

    pub fn contains(&self, player: &Player) -> bool {
        self.players.iter().any(|p| p.entity == player.entity)
    }
}

/// Partition a team's players into spatial clusters.
///
/// Greedy, seeded in roster order: each not-yet-grouped player starts a
/// cluster and pulls in every later ungrouped player within
/// `grouping_threshold` of it (XY distance; height doesn't break a group).
pub fn build_groupings<'a>(players: &[&'a Player], grouping_threshold: f32) -> Vec<Grouping<'a>> {
    let mut close = Vec::<Vec<&Player>>::new();
    let mut grouped = vec![false; players.len()];

    for i in 0..players.len() {
        if grouped[i] { continue; }
        grouped[i] = true;
        let mut group = vec![players[i]];

        for j in (i + 1)..players.len() {
            if grouped[j] { continue; }

            if players[i].distance_from_xy(players[j]) < grouping_threshold {
                grouped[j] = true;
                group.push(players[j]);
            }
        }

        close.push(group);
    }

    close.into_iter().map(Grouping::new).collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::game::Class;

    fn player(entity: u32, class: Class, x: f32, y: f32) -> Player {
        Player {
            entity,
            class,
            position: Vector::new(x, y, 0.0),
            ..Player::default()
        }
    }

    #[test]
    fn empty_set_is_none() {
        assert_eq!(GroupingType::classify(&[]), GroupingType::None);
        assert!(!GroupingType::classify(&[]).is_valid());
    }

    #[test]
    fn single_player_is_isolated() {
        let a = player(1, Class::Scout, 0.0, 0.0);
        assert_eq!(GroupingType::classify(&[&a]), GroupingType::Isolated);
        // even a lone medic is just isolated
        let m = player(2, Class::Medic, 0.0, 0.0);
        assert_eq!(GroupingType::classify(&[&m]), GroupingType::Isolated);
    }

    #[test]
    fn pair_without_medic_is_flank() {
        let a = player(1, Class::Scout, 0.0, 0.0);
        let b = player(2, Class::Soldier, 0.0, 0.0);
        assert_eq!(GroupingType::classify(&[&a, &b]), GroupingType::Flank);
    }

    #[test]
    fn pair_with_medic_is_combo() {
        let a = player(1, Class::Medic, 0.0, 0.0);
        let b = player(2, Class::Soldier, 0.0, 0.0);
        assert_eq!(GroupingType::classify(&[&a, &b]), GroupingType::Combo);
    }

    #[test]
    fn larger_sets_follow_medic_presence() {
        let a = player(1, Class::Scout, 0.0, 0.0);
        let b = player(2, Class::Soldier, 0.0, 0.0);
        let c = player(3, Class::Demoman, 0.0, 0.0);
        let m = player(4, Class::Medic, 0.0, 0.0);
        assert_eq!(GroupingType::classify(&[&a, &b, &c]), GroupingType::Flank);
        assert_eq!(GroupingType::classify(&[&a, &b, &m]), GroupingType::Combo);
    }

    #[test]
    fn build_groupings_splits_far_players() {
        // a and b stand together, c is off alone
        let a = player(1, Class::Medic, 0.0, 0.0);
        let b = player(2, Class::Soldier, 100.0, 0.0);
        let c = player(3, Class::Scout, 5000.0, 0.0);

        let groups = build_groupings(&[&a, &b, &c], GROUPING_THRESHOLD);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].group_type, GroupingType::Combo);
        assert_eq!(groups[0].players.len(), 2);
        assert_eq!(groups[1].group_type, GroupingType::Isolated);
        assert!(groups[1].contains(&c));
    }

    #[test]
    fn build_groupings_never_yields_invalid_groups() {
        assert!(build_groupings(&[], GROUPING_THRESHOLD).is_empty());

        let a = player(1, Class::Scout, 0.0, 0.0);
        let b = player(2, Class::Sniper, 200.0, 0.0);
        for group in build_groupings(&[&a, &b], GROUPING_THRESHOLD) {
            assert!(group.group_type.is_valid());
        }
    }

    #[test]
    fn avg_pos_ignores_dead_players() {
        let a = player(1, Class::Scout, 0.0, 0.0);
        let b = player(2, Class::Soldier, 10.0, 0.0);
        let mut dead = player(3, Class::Heavy, 9000.0, 9000.0);
        dead.state = PlayerState::Death;

        let avg = get_avg_pos(&[&a, &b, &dead]);
        assert!((avg.x - 5.0).abs() < 0.001);
        assert!(avg.y.abs() < 0.001);
    }
}
