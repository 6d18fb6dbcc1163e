pub mod ids;
pub mod order;
pub mod product;
pub mod view;

pub use order::*;
pub use product::*;
pub use view::*;
