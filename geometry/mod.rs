pub mod coordinate;
pub mod distance;
pub mod rectangle;

pub use coordinate::{Coordinate, COORD_FACTOR};
pub use distance::haversine_distance;
pub use rectangle::{Bounds, Rectangle};
