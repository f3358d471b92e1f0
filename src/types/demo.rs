
use std::collections::HashMap;
use std::path::PathBuf;

use itertools::Itertools;

use super::game::Round;
use super::game::entities::Player;

/// Everything the parser decoded for one simulation tick.
#[derive(Default, Debug, Clone)]
pub struct TickData {
    /// Every player present this tick, in roster order.
    pub players: Vec<Player>,

    pub tick: u32,

    /// The amount of time (in seconds) that passed after the previous tick.
    pub tick_delta: f32,
}

impl TickData {
    pub fn get_player_by_userid(&self, user_id: u16) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.info.as_ref().is_some_and(|i| i.user_id == user_id))
    }

    pub fn get_player_by_entityid(&self, entity_id: u32) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.entity == entity_id)
    }
}

/// Everything the parser decoded for one demofile.
#[derive(Default, Debug, Clone)]
pub struct DemoData {
    /// The path to the demofile that this data is for.
    pub demo_filename: PathBuf,

    /// The name of the map. Should end in .bsp.
    pub map_name: String,

    /// Duration of the recording, in seconds.
    pub duration: f32,

    /// Basic information for each round that occurred, ordered by start tick.
    pub rounds: Vec<Round>,

    /// Tick data. Key: tick number.
    pub tick_states: HashMap<u32, TickData>,
}

impl DemoData {
    /// The ticks that fall inside `round`, in tick order.
    ///
    /// `tick_states` is a hash map, so this sorts; don't call it per tick.
    pub fn round_ticks(&self, round: &Round) -> Vec<&TickData> {
        self.tick_states
            .iter()
            .filter(|(tick, _)| round.contains(**tick))
            .sorted_by_key(|(tick, _)| **tick)
            .map(|(_, state)| state)
            .collect_vec()
    }
}
