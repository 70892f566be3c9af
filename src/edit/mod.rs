pub mod combine;
pub mod volume;

pub use combine::combine;
pub use volume::multiply_volume;
