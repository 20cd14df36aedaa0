use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    CertificationCommands, CourseCommands, EnquiryCommands, NewsCommands, NewsletterCommands,
    OfferingCommands, StreamCommands, StudentCommands, UniversityCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the project directory and database.
    Init(InitArgs),
    /// Streams (top-level course categories).
    Stream {
        #[command(subcommand)]
        action: StreamCommands,
    },
    /// Degree courses.
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },
    /// Universities and colleges.
    University {
        #[command(subcommand)]
        action: UniversityCommands,
    },
    /// Which universities offer which courses.
    Offering {
        #[command(subcommand)]
        action: OfferingCommands,
    },
    /// Certification categories and courses.
    Certification {
        #[command(subcommand)]
        action: CertificationCommands,
    },
    /// Admission enquiries.
    Enquiry {
        #[command(subcommand)]
        action: EnquiryCommands,
    },
    /// Student profiles.
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// Homepage news ticker.
    News {
        #[command(subcommand)]
        action: NewsCommands,
    },
    /// Newsletter subscriptions.
    Newsletter {
        #[command(subcommand)]
        action: NewsletterCommands,
    },
    /// Compose a header mega-menu.
    Menu(MenuArgs),
    /// Filter a listing page.
    Browse(BrowseArgs),
    /// Administrator dashboard counts.
    Overview(OverviewArgs),
    /// Show who the CLI is acting as.
    Whoami,
}

/// Arguments for `campus init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Create the first administrator with this name.
    #[arg(long, requires = "admin_email")]
    pub admin_name: Option<String>,
    /// Email for the first administrator.
    #[arg(long, requires = "admin_name")]
    pub admin_email: Option<String>,
}

/// Arguments for `campus menu`.
#[derive(Clone, Debug, Args)]
pub struct MenuArgs {
    /// courses, colleges, or certifications
    pub target: String,
    /// Stream or certification category under the pointer.
    #[arg(long)]
    pub active: Option<String>,
    /// Breakpoint: sm, md, lg, xl, 2xl
    #[arg(long, conflicts_with = "width")]
    pub breakpoint: Option<String>,
    /// Viewport width in pixels, classified into a breakpoint.
    #[arg(long)]
    pub width: Option<u32>,
}

/// Arguments for `campus browse`.
#[derive(Clone, Debug, Args)]
pub struct BrowseArgs {
    /// courses, colleges, or certifications
    pub target: String,
    /// Stream IDs to include (courses, colleges).
    #[arg(long)]
    pub stream: Vec<String>,
    /// Locations to include (colleges).
    #[arg(long)]
    pub location: Vec<String>,
    /// Certification category IDs to include.
    #[arg(long)]
    pub category: Vec<String>,
    /// Page query string seeding the selection, e.g. `?stream=str-1`.
    #[arg(long)]
    pub query: Option<String>,
}

/// Arguments for `campus overview`.
#[derive(Clone, Debug, Args)]
pub struct OverviewArgs {
    /// Reference day (YYYY-MM-DD, UTC). Defaults to today.
    #[arg(long)]
    pub date: Option<String>,
}
