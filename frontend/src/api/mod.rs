pub mod identity;
pub mod services;
pub mod space_ratings;
pub mod timeout;
