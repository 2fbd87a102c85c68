mod decision;
mod evaluate;
mod request;


pub use decision::*;
pub use evaluate::*;
pub use request::*;
