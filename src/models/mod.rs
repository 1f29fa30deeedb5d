pub mod ban;
pub mod player;
pub mod response;
