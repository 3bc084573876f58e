pub mod assembler;
pub mod classifier;
pub mod clock;
pub mod expander;

pub use assembler::{ActivityBlock, DaySchedule, WeeklyGrid, build_weekly_grid};
pub use classifier::{classify, classify_week};
pub use clock::{ClockMarker, ClockSegment, clock_markers, clock_segments, hour_ticks};
pub use expander::{ActivitySequence, EMPTY, expand};
