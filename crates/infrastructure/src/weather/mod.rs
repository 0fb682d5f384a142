pub mod openweather;
pub mod payload;

pub use openweather::OpenWeatherClient;
pub use payload::CurrentWeatherResponse;
