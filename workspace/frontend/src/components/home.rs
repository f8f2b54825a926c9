mod features;
mod hero;

pub use features::Features;
pub use hero::Hero;
