mod area;
mod length;

pub use area::surface_area;
pub use length::arc_length;
