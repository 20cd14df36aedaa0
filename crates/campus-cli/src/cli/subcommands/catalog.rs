use clap::Subcommand;

/// Stream commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StreamCommands {
    /// Create a stream.
    Create { name: String },
    /// List streams.
    List,
    /// Delete a stream. Its courses are kept without a stream.
    Delete { id: String },
}

/// Course commands.
///
/// `--syllabus` and `--jobs-info` take JSON text. An empty string clears
/// the document on update.
#[derive(Clone, Debug, Subcommand)]
pub enum CourseCommands {
    /// Create a course.
    Create {
        name: String,
        #[arg(long)]
        stream: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        duration: Option<String>,
        #[arg(long)]
        syllabus: Option<String>,
        #[arg(long)]
        jobs_info: Option<String>,
    },
    /// Update a course.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        stream: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        duration: Option<String>,
        #[arg(long)]
        syllabus: Option<String>,
        #[arg(long)]
        jobs_info: Option<String>,
    },
    /// List courses.
    List {
        #[arg(long)]
        stream: Option<String>,
    },
    /// Course detail with syllabus, jobs, and offering universities.
    Get { id: String },
    /// Delete a course and its offerings.
    Delete { id: String },
}

/// University commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UniversityCommands {
    /// Create a university.
    Create {
        name: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        logo_url: Option<String>,
        #[arg(long)]
        package: Option<String>,
        #[arg(long)]
        accreditation: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        about: Option<String>,
        #[arg(long)]
        website: Option<String>,
    },
    /// Update a university. An empty string clears an optional field.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        logo_url: Option<String>,
        #[arg(long)]
        package: Option<String>,
        #[arg(long)]
        accreditation: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        about: Option<String>,
        #[arg(long)]
        website: Option<String>,
    },
    /// List universities.
    List,
    /// University detail with offered courses.
    Get { id: String },
    /// Delete a university and its offerings.
    Delete { id: String },
}

/// Course offering commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OfferingCommands {
    /// Offer a course at one or more universities.
    Assign {
        #[arg(long)]
        course: String,
        #[arg(long = "university", required = true)]
        universities: Vec<String>,
    },
    /// Stop offering a course at a university.
    Unassign {
        #[arg(long)]
        course: String,
        #[arg(long)]
        university: String,
    },
    /// List all offerings.
    List,
}

/// Certification commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CertificationCommands {
    /// Certification categories.
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Create a certification course.
    Create {
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        overview: Option<String>,
        #[arg(long)]
        duration: Option<String>,
    },
    /// Update a certification course.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        overview: Option<String>,
        #[arg(long)]
        duration: Option<String>,
    },
    /// List certification courses.
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Certification course detail.
    Get { id: String },
    /// Delete a certification course.
    Delete { id: String },
}

/// Certification category commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CategoryCommands {
    Create { name: String },
    List,
    Delete { id: String },
}
