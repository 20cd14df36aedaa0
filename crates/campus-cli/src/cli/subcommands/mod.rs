mod catalog;
mod content;
mod people;

pub use catalog::{
    CategoryCommands, CertificationCommands, CourseCommands, OfferingCommands, StreamCommands,
    UniversityCommands,
};
pub use content::{NewsCommands, NewsletterCommands};
pub use people::{EnquiryCommands, StudentCommands};
