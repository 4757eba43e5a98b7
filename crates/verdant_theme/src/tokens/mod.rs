//! Design tokens for theming
//!
//! A token is a named design value stored under a dotted path such as
//! `colors.primary.600` or `spacing.4`. Every value carries a tag derived
//! from the top-level category of its path:
//! - Colors (palette ramps and semantic aliases)
//! - Lengths (spacing, radii, font sizes)
//! - Shadows
//! - Animations and keyframes
//! - Font stacks and weights
//! - Filters

mod category;
mod keyframes;
mod value;

pub use category::*;
pub use keyframes::*;
pub use value::*;
