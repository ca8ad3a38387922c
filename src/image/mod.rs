pub mod io;
pub mod rgb;

pub use self::rgb::{Channel, Rgb, RgbImage};
