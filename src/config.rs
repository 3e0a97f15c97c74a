/// Side length of the square grid.
pub const BOARD_SIZE: usize = 6;

/// Vessel lengths of the standard fleet, placed in this order.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Number of vessels a side must lose to lose the match.
pub const FLEET_SIZE: usize = FLEET.len();

/// Random placement attempts allowed per board before it is discarded.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Fresh boards tried per side before setup gives up.
pub const MAX_BOARD_RESTARTS: usize = 1000;
