mod fetch_all;

pub use fetch_all::FetchWeatherUseCase;
