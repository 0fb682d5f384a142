pub mod json_city_list;

pub use json_city_list::JsonCityListProvider;
