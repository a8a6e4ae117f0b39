mod allocator;
mod handle;
mod raw_mode;
mod session;
mod spawn_config;

pub use allocator::PtyAllocator;
pub use handle::MasterHandle;
pub use raw_mode::{enter_raw_mode, get_attrs, make_raw};
pub use session::PtySession;
pub use spawn_config::PtySpawnConfig;
