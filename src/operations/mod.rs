mod attach_part;
mod move_part;
mod place_part;
mod resize_part;
mod stretch_limits;

pub use attach_part::AttachPart;
pub use move_part::MovePart;
pub use place_part::PlacePart;
pub use resize_part::ResizePart;
pub use stretch_limits::{Stretch, StretchLimits};
