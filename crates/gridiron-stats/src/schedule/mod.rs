// Game schedules: completed results, upcoming fixtures, perspective views and
// opponent-adjusted splits.

pub mod games;
pub mod normalize;
pub mod splits;
