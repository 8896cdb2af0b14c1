mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod valid_email;
pub use valid_email::ValidEmail;

mod send_validation_email;
pub use send_validation_email::SendValidationEmail;

mod hotel_detail;
pub use hotel_detail::HotelDetail;

mod bookings;
pub use bookings::Bookings;

mod account;
pub use account::Account;

mod admin;
pub use admin::AdminDashboard;

mod not_found;
pub use not_found::NotFound;
