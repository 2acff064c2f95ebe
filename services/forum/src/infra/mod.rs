pub mod db;
pub mod google;
pub mod session;
