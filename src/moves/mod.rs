pub mod move_gen;
pub mod move_info;
#[cfg(test)]
mod tests;

/// Step deltas over the top-left-origin square indexing, so "north"
/// (toward rank 8) is negative. First 4 are orthogonal, rest diagonal.
pub struct Direction;
impl Direction {
    pub const NORTH: i8 = -8;
    pub const SOUTH: i8 = 8;
    pub const WEST: i8 = -1;
    pub const EAST: i8 = 1;
    pub const NORTHWEST: i8 = -9;
    pub const NORTHEAST: i8 = -7;
    pub const SOUTHWEST: i8 = 7;
    pub const SOUTHEAST: i8 = 9;

    pub const ORTHO: [i8; 4] = [Self::NORTH, Self::SOUTH, Self::WEST, Self::EAST];
    pub const DIAG: [i8; 4] = [
        Self::NORTHEAST,
        Self::SOUTHEAST,
        Self::SOUTHWEST,
        Self::NORTHWEST,
    ];
    pub const ALL: [i8; 8] = [
        Self::NORTH,
        Self::SOUTH,
        Self::WEST,
        Self::EAST,
        Self::NORTHEAST,
        Self::SOUTHEAST,
        Self::SOUTHWEST,
        Self::NORTHWEST,
    ];

    /// Whether the delta drifts toward the h-file, used for wrap guards.
    pub const fn is_eastward(delta: i8) -> bool {
        matches!(delta, Self::EAST | Self::NORTHEAST | Self::SOUTHEAST)
    }

    /// Whether the delta drifts toward the a-file.
    pub const fn is_westward(delta: i8) -> bool {
        matches!(delta, Self::WEST | Self::NORTHWEST | Self::SOUTHWEST)
    }
}
