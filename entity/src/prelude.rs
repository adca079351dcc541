pub use super::booking::Entity as Booking;
pub use super::class_schedule::Entity as ClassSchedule;
pub use super::user::Entity as User;
