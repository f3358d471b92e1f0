/// entities.rs
///
/// The entities the parser reconstructs from the demofile, reduced to what
/// the analysis reads: players, their identity, and where they are.

use num_enum::{TryFromPrimitive, IntoPrimitive};
use ordered_float::OrderedFloat;

use super::{Class, Team};
use super::super::math::Vector;

/////////////////////////////////////////////
/// PLAYER
/// /////////////////////////////////////////

/// Identity information for a player, as recorded in the demo header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub name: String,
    pub user_id: u16,
    pub steam_id: String,
    pub entity_id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, TryFromPrimitive, IntoPrimitive, Default)]
#[repr(u8)]
pub enum PlayerState {
    #[default]
    Alive = 0,
    Dying = 1,
    Death = 2,
    Respawnable = 3,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Player {
    pub entity: u32,
    pub position: Vector,
    pub health: u16,
    pub max_health: u16,
    pub class: Class,
    pub team: Team,
    pub view_angle: f32,
    pub state: PlayerState,
    pub info: Option<UserInfo>,
}

impl Player {
    /// The player in `player_list` nearest to this one on the XY plane,
    /// skipping this player itself if it appears in the list.
    pub fn closest_to_xy<'a>(&self, player_list: &[&'a Player]) -> Option<&'a Player> {
        player_list.iter().min_by_key(|p| {
            if self.entity == p.entity {
                OrderedFloat(f32::MAX)
            } else {
                OrderedFloat(self.distance_from_xy(p))
            }
        }).copied()
    }

    pub fn distance_from(&self, other: &Player) -> f32 {
        self.position.dist_to(&other.position)
    }

    pub fn distance_from_xy(&self, other: &Player) -> f32 {
        self.position.xy().dist_to(&other.position.xy())
    }

    pub fn height_diff(&self, other: &Player) -> f32 {
        self.position.z - other.position.z
    }

    pub fn is_alive(&self) -> bool {
        self.state == PlayerState::Alive
    }

    pub fn is_medic(&self) -> bool {
        self.class == Class::Medic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(entity: u32, x: f32, y: f32, z: f32) -> Player {
        Player {
            entity,
            position: Vector::new(x, y, z),
            ..Player::default()
        }
    }

    #[test]
    fn distance_ignores_height_on_xy() {
        let a = player_at(1, 0.0, 0.0, 0.0);
        let b = player_at(2, 3.0, 4.0, 100.0);
        assert!((a.distance_from_xy(&b) - 5.0).abs() < 0.001);
        assert!(a.distance_from(&b) > 100.0);
        assert!((a.height_diff(&b) + 100.0).abs() < 0.001);
    }

    #[test]
    fn closest_to_xy_skips_self() {
        let me = player_at(1, 0.0, 0.0, 0.0);
        let near = player_at(2, 1.0, 0.0, 0.0);
        let far = player_at(3, 50.0, 0.0, 0.0);
        let found = me.closest_to_xy(&[&me, &far, &near]).unwrap();
        assert_eq!(found.entity, 2);
    }

    #[test]
    fn closest_to_xy_of_empty_list_is_none() {
        let me = player_at(1, 0.0, 0.0, 0.0);
        assert!(me.closest_to_xy(&[]).is_none());
    }
}
