pub mod cities;
pub mod system;
pub mod weather;
