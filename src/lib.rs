pub mod network;
pub mod shared;
pub mod ztm;

pub mod prelude {
    pub use crate::network::{Network, Stop};
    pub use crate::shared::{Coordinate, Duration, Time};
    pub use crate::ztm::{Config, Timetable, Ztm, simplify};
}
