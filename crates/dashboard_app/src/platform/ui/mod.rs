pub mod constants;
mod gauge;
pub mod layout;
mod render;
