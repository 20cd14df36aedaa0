use clap::Subcommand;

/// Enquiry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EnquiryCommands {
    /// Submit an enquiry about a course/college or a certification course.
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long = "class")]
        current_class: Option<String>,
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        college: Option<String>,
        #[arg(long, conflicts_with_all = ["course", "college"])]
        certification: Option<String>,
        /// Apply-page query string pre-filling the form,
        /// e.g. `?course=crs-1&college=uni-2`.
        #[arg(long)]
        query: Option<String>,
    },
    /// List enquiries with resolved names, newest first.
    List {
        /// course or certification
        #[arg(long, default_value = "course")]
        kind: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Mark an enquiry as called (or not, with --unset).
    Called {
        id: String,
        #[arg(long)]
        unset: bool,
    },
    /// Replace an enquiry's remark.
    Remark { id: String, text: String },
    /// Write enquiries to an .xlsx file.
    Export {
        /// course or certification
        #[arg(long, default_value = "course")]
        kind: String,
        #[arg(long)]
        output: Option<String>,
    },
}

/// Student profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// Create a student profile (sign-up).
    Register {
        /// Auth provider user ID; generated when omitted.
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long = "class")]
        current_class: Option<String>,
    },
    /// Edit your own profile. An empty string clears phone or class.
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long = "class")]
        current_class: Option<String>,
    },
    /// List registered students, newest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show a profile.
    Get { id: String },
    /// Set the administrator remark. An empty string clears it.
    Remark { id: String, text: String },
    /// Change a profile's role (admin or student).
    Role { id: String, role: String },
    /// Write all profiles to an .xlsx file.
    Export {
        #[arg(long)]
        output: Option<String>,
    },
}
