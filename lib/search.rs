mod engine;
mod eval;
mod options;
mod score;

pub use engine::*;
pub use eval::*;
pub use options::*;
pub use score::*;
