mod check;
mod eval;
mod init;

pub use check::*;
pub use eval::*;
pub use init::*;
