pub mod error;
pub mod repositories;
pub mod storage;

pub use error::{Result, StoreError};
pub use repositories::session_repository::SessionRepository;
pub use repositories::user_repository::UserRepository;
pub use storage::file_slot_storage::FileSlotStorage;
pub use storage::memory_slot_storage::MemorySlotStorage;
pub use storage::{CURRENT_USER_SLOT, KIOSK_USER_SLOT, SlotStorage, USERS_SLOT};
