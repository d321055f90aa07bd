/// Side length of the square board.
pub const BOARD_SIZE: u8 = 10;
/// Number of contiguous same-player stones that wins a game.
pub const WIN_LENGTH: usize = 5;
/// Per-turn time budget in seconds.
pub const TURN_SECONDS: u64 = 30;
