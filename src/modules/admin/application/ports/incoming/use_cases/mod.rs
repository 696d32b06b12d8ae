mod unlock_admin_use_case;

pub use unlock_admin_use_case::{
    UnlockAdminCommand, UnlockAdminCommandError, UnlockAdminError, UnlockAdminUseCase,
};
