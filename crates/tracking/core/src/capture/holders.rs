use crate::model::{BlockChangeFlag, Player};

/// Single-player capture slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturePlayer {
    player: Option<Player>,
}

impl CapturePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(player: Option<Player>) -> Self {
        Self { player }
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Records the player, replacing any previously captured one.
    pub fn add_player(&mut self, player: Player) {
        self.player = Some(player);
    }

    pub fn take_player(&mut self) -> Option<Player> {
        self.player.take()
    }
}

/// Block change flag captured for a phase that replays block changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CaptureFlag {
    flag: Option<BlockChangeFlag>,
}

impl CaptureFlag {
    pub fn new(flag: Option<BlockChangeFlag>) -> Self {
        Self { flag }
    }

    pub fn flag(&self) -> Option<BlockChangeFlag> {
        self.flag
    }

    pub fn add_flag(&mut self, flag: BlockChangeFlag) {
        self.flag = Some(flag);
    }
}
