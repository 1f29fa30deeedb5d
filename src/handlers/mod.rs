pub mod check;
pub mod home;
