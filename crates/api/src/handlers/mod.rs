pub mod course;
pub mod lesson;
pub mod media;
pub mod skill;
pub mod unit;
