pub mod coingecko;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod storage;
pub mod store;
pub mod view;

// Re-export commonly used items
pub use coingecko::*;
pub use di::*;
pub use entity::*;
pub use interactor::*;
pub use presenter::*;
pub use router::*;
pub use storage::*;
pub use store::*;
pub use view::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
