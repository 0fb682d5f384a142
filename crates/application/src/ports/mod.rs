pub mod city_list;
pub mod clock;
pub mod weather_provider;

pub use city_list::CityListProvider;
pub use clock::Clock;
pub use weather_provider::WeatherProvider;
