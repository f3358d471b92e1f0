
use num_enum::TryFromPrimitive;
use num_enum::IntoPrimitive;

pub mod entities;

/////////////////////////////////////////////
/// Class
/// /////////////////////////////////////////

/// Representation of each class in the game as an enum.
///
/// [`Class::Medic`] is the support class; whether a cluster of players has one
/// is what drives grouping classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Default)]
#[repr(u8)]
pub enum Class {
    #[default]
    Other = 0,
    Scout = 1,
    Sniper = 2,
    Soldier = 3,
    Demoman = 4,
    Medic = 5,
    Heavy = 6,
    Pyro = 7,
    Spy = 8,
    Engineer = 9,
}

impl Class {
    pub fn new<U>(number: U) -> Self
    where
        u8: TryFrom<U>,
    {
        Class::try_from(u8::try_from(number).unwrap_or_default()).unwrap_or_default()
    }
}

/////////////////////////////////////////////
/// Team
/// /////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Default)]
#[repr(u8)]
pub enum Team {
    #[default]
    Other = 0,
    Spectator = 1,
    Red = 2,
    Blue = 3,
}

impl Team {
    pub fn new<U>(number: U) -> Self
    where
        u8: TryFrom<U>,
    {
        Team::try_from(u8::try_from(number).unwrap_or_default()).unwrap_or_default()
    }

    pub fn is_player(&self) -> bool {
        *self == Team::Red || *self == Team::Blue
    }
}

/////////////////////////////////////////////
/// Round
/// /////////////////////////////////////////

/// One play segment of the demo, bounded by its first and last tick.
///
/// Rounds inside a [`super::demo::DemoData`] have non-overlapping tick ranges
/// and are ordered by `start_tick`; the parser guarantees this.
#[derive(Debug, Default, Clone, Copy)]
pub struct Round {
    pub start_tick: u32,
    pub end_tick: u32,
    pub winner: Team,
}

impl Round {
    pub fn contains(&self, tick: u32) -> bool {
        tick >= self.start_tick && tick <= self.end_tick
    }

    pub fn is_tie(&self) -> bool {
        match self.winner {
            Team::Blue | Team::Red => false,
            _ => true
        }
    }
}
