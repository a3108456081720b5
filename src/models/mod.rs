mod feature;
mod palette;
mod theme;

pub use feature::{features, FeatureDescriptor, FEATURES};
pub use palette::{resolve_palette, ActionStyle, Palette, RegionStyle};
pub use theme::{Theme, ThemeParseError};
