// handlers/public/mod.rs - Pages and endpoints reachable without a session.
//
// `/login` is auth-only: the edge gate and the login handlers both send
// signed-in users home.

pub mod auth;
pub mod home;

pub use auth::{login_get, login_post, signout_post};
pub use home::{health, home};
