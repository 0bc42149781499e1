pub mod duration;
pub mod secret_str;
