pub mod browse;
pub mod certification;
pub mod course;
pub mod dispatch;
pub mod enquiry;
pub mod init;
pub mod menu;
pub mod news;
pub mod newsletter;
pub mod offering;
pub mod overview;
pub mod shared;
pub mod stream;
pub mod student;
pub mod university;
pub mod whoami;
