pub mod blog;
pub mod user_role;
