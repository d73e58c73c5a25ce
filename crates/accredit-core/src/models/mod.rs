pub mod assessment_item;
pub mod assignment;
pub mod event;
pub mod evidence;
pub mod room;
pub mod score;
pub mod user;
