mod home;
pub use home::Home;

mod horse_search;
pub use horse_search::HorseSearch;

mod horse_detail;
pub use horse_detail::HorseDetail;

mod augments;
pub use augments::Augments;

mod stable_search;
pub use stable_search::StableSearch;

mod stable_detail;
pub use stable_detail::StableDetail;
