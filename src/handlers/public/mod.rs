// Public handlers - reachable without the auth cookie.
pub mod login;

pub use login::{login, login_page};
