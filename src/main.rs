use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eduplatform_client::api::{ApiClient, ApiError};
use eduplatform_client::config::Config;
use eduplatform_client::models::course::NewCourse;
use eduplatform_client::models::enrollment::StudentAffordance;
use eduplatform_client::models::user::RegisterRequest;
use eduplatform_client::routing::{gate, Gate, Route};
use eduplatform_client::services::auth::AuthService;
use eduplatform_client::services::courses::CourseService;
use eduplatform_client::services::enrollment::EnrollmentService;
use eduplatform_client::services::progress::ProgressService;
use eduplatform_client::session::store::CredentialStore;
use eduplatform_client::session::{self, SessionState};
use eduplatform_client::views::catalog::CatalogView;
use eduplatform_client::views::course_detail::CourseDetailView;
use eduplatform_client::views::dashboard::DashboardView;

#[derive(Parser)]
#[command(name = "eduplatform", about = "EduPlatform course marketplace client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and land on your role's start view
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account (admin accounts need the admin secret)
    Register(RegisterArgs),
    /// Clear the stored session
    Logout,
    /// Show the resolved session
    Whoami,
    /// Browse the course catalog (students)
    Courses,
    /// Show one course with its contents and your enrollment state
    Course { id: i64 },
    /// Request enrollment in a course
    Enroll { course_id: i64 },
    /// Mark a content item completed
    Complete { course_id: i64, content_id: i64 },
    /// Administrator operations
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Args)]
struct RegisterArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    date_of_birth: String,
    #[arg(long)]
    address: String,
    /// Registers an admin account when provided
    #[arg(long)]
    admin_secret: Option<String>,
}

#[derive(Subcommand)]
enum AdminCommand {
    /// Your courses plus the pending enrollment queue
    Dashboard,
    /// Only the pending enrollment queue
    Pending,
    /// Approve a pending enrollment
    Approve { enrollment_id: i64 },
    /// Reject a pending enrollment
    Reject { enrollment_id: i64 },
    /// Create a new course
    CreateCourse {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        start_date: String,
        #[arg(long)]
        end_date: String,
    },
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        match e.downcast_ref::<ApiError>() {
            Some(ApiError::Unauthorized) => {
                eprintln!("{e}");
                eprintln!("Run `eduplatform login` to start a new session.");
            }
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    let store = CredentialStore::new(config.session_file.clone());
    let api = ApiClient::new(&config, store.clone())?;

    // Every command is a navigation boundary: the session is re-resolved from
    // the store before anything else happens.
    let state = session::resolve(&store);

    match cli.command {
        Command::Login { email, password } => {
            let (state, route) = AuthService::login(&api, &email, &password).await?;
            greet(&state);
            render(&api, route).await
        }
        Command::Register(args) => {
            let request = RegisterRequest {
                email: args.email,
                password: args.password,
                first_name: args.first_name,
                last_name: args.last_name,
                phone: args.phone,
                date_of_birth: args.date_of_birth,
                address: args.address,
                admin_secret: args.admin_secret,
            };
            let (state, route) = AuthService::register(&api, request).await?;
            greet(&state);
            render(&api, route).await
        }
        Command::Logout => {
            AuthService::logout(&store)?;
            println!("Logged out.");
            Ok(())
        }
        Command::Whoami => {
            print_whoami(&state);
            Ok(())
        }
        Command::Courses => visit(&api, &state, Route::CourseBrowse).await,
        Command::Course { id } => visit(&api, &state, Route::CourseDetail(id)).await,
        Command::Enroll { course_id } => {
            match gate(Route::CourseBrowse, &state) {
                Gate::Allow => {
                    EnrollmentService::request(&api, &state, course_id).await?;
                    println!(
                        "Enrollment requested for course {course_id} — waiting for approval."
                    );
                    Ok(())
                }
                Gate::Redirect(dest) => redirect(&api, dest).await,
            }
        }
        Command::Complete {
            course_id,
            content_id,
        } => match gate(Route::CourseDetail(course_id), &state) {
            Gate::Allow => {
                ProgressService::mark_completed(&api, course_id, content_id).await?;
                println!("Content {content_id} marked as completed.");
                Ok(())
            }
            Gate::Redirect(dest) => redirect(&api, dest).await,
        },
        Command::Admin(cmd) => match gate(Route::AdminDashboard, &state) {
            Gate::Redirect(dest) => redirect(&api, dest).await,
            Gate::Allow => match cmd {
                AdminCommand::Dashboard => render(&api, Route::AdminDashboard).await,
                AdminCommand::Pending => {
                    let pending = EnrollmentService::pending(&api).await?;
                    print_pending(&pending);
                    Ok(())
                }
                AdminCommand::Approve { enrollment_id } => {
                    EnrollmentService::approve(&api, enrollment_id).await?;
                    println!("Enrollment {enrollment_id} approved.");
                    Ok(())
                }
                AdminCommand::Reject { enrollment_id } => {
                    EnrollmentService::reject(&api, enrollment_id).await?;
                    println!("Enrollment {enrollment_id} rejected.");
                    Ok(())
                }
                AdminCommand::CreateCourse {
                    title,
                    description,
                    start_date,
                    end_date,
                } => {
                    CourseService::create(
                        &api,
                        NewCourse {
                            title,
                            description,
                            start_date,
                            end_date,
                            is_active: true,
                        },
                    )
                    .await?;
                    println!("Course created.");
                    Ok(())
                }
            },
        },
    }
}

/// Gate a direct navigation, then render either the view or its redirect
/// destination.
async fn visit(api: &ApiClient, state: &SessionState, target: Route) -> Result<()> {
    match gate(target, state) {
        Gate::Allow => render(api, target).await,
        Gate::Redirect(dest) => redirect(api, dest).await,
    }
}

async fn redirect(api: &ApiClient, dest: Route) -> Result<()> {
    match dest {
        Route::Login => {
            println!("Please log in first: eduplatform login --email … --password …");
            Ok(())
        }
        other => {
            println!("Redirecting to {}.", other.describe());
            render(api, other).await
        }
    }
}

async fn render(api: &ApiClient, route: Route) -> Result<()> {
    match route {
        Route::Home => {
            println!("Welcome to EduPlatform. Try `eduplatform courses` or `eduplatform login`.");
            Ok(())
        }
        Route::Login => {
            println!("Log in with: eduplatform login --email … --password …");
            Ok(())
        }
        Route::Register => {
            println!("Register with: eduplatform register --email … --password … …");
            Ok(())
        }
        Route::CourseBrowse => {
            eprintln!("Loading course catalog…");
            let view = CourseService::browse(api).await?;
            print_catalog(&view);
            Ok(())
        }
        Route::CourseDetail(id) => {
            eprintln!("Loading course {id}…");
            let view = CourseService::detail(api, id).await?;
            print_course_detail(&view);
            Ok(())
        }
        Route::AdminDashboard => {
            eprintln!("Loading admin dashboard…");
            let view = CourseService::dashboard(api).await?;
            print_dashboard(&view);
            Ok(())
        }
    }
}

fn greet(state: &SessionState) {
    match state {
        SessionState::Student(p) => println!("Logged in as {} (student).", p.display_name()),
        SessionState::Admin(p) => println!("Logged in as {} (admin).", p.display_name()),
        SessionState::UnknownRole => {
            println!("Logged in, but the server sent no recognizable role.")
        }
        SessionState::Unauthenticated => println!("Not logged in."),
    }
}

fn print_whoami(state: &SessionState) {
    match state {
        SessionState::Unauthenticated => println!("Not logged in."),
        SessionState::Student(p) => println!("{} — student", p.display_name()),
        SessionState::Admin(p) => println!("{} — admin", p.display_name()),
        SessionState::UnknownRole => {
            println!("Logged in, but the stored profile carries no recognized role.")
        }
    }
}

fn print_catalog(view: &CatalogView) {
    if view.entries.is_empty() {
        println!("No courses available.");
        return;
    }
    println!("Available courses:");
    for entry in &view.entries {
        let c = &entry.course;
        let instructor = c.instructor_name.as_deref().unwrap_or("Unknown Instructor");
        println!("  #{} {} — {}", c.id, c.title, instructor);
        if let (Some(start), Some(end)) = (c.start_date, c.end_date) {
            println!("      {start} → {end}");
        }
        match entry.affordance() {
            StudentAffordance::Enroll => {
                println!("      enroll: eduplatform enroll {}", c.id)
            }
            StudentAffordance::WaitingForApproval => println!("      waiting for approval"),
            StudentAffordance::AccessCourse => {
                println!("      enrolled — open: eduplatform course {}", c.id)
            }
            StudentAffordance::RejectedNotice => println!("      enrollment rejected"),
        }
    }
}

fn print_course_detail(view: &CourseDetailView) {
    match view {
        CourseDetailView::NotFound => println!("Course not found."),
        CourseDetailView::NotEnrolled { course } => {
            println!("{}", course.title);
            println!("You are not enrolled in this course.");
            println!("Request enrollment with: eduplatform enroll {}", course.id);
        }
        CourseDetailView::Pending { course } => {
            println!("{}", course.title);
            println!("Waiting for approval — your enrollment request is pending");
            println!("instructor approval. You'll get access once approved.");
        }
        CourseDetailView::Rejected { course } => {
            println!("{}", course.title);
            println!("Enrollment rejected — your request was not approved.");
            println!("Contact the instructor for more information.");
        }
        CourseDetailView::Enrolled {
            course, contents, ..
        } => {
            println!("{}", course.title);
            if !course.description.is_empty() {
                println!("{}", course.description);
            }
            let (done, total) = view.completed_items();
            println!(
                "Progress: {:.0}% ({done} of {total} items completed)",
                view.completion_percentage()
            );
            if contents.is_empty() {
                println!("No content available yet.");
            } else {
                println!("Course content:");
                for item in contents {
                    println!("  #{} {} {}", item.id, item.content_type.marker(), item.title);
                    if let Some(file) = &item.content_file {
                        println!("      file: {file}");
                    }
                }
                println!(
                    "Mark an item done with: eduplatform complete {} <content-id>",
                    course.id
                );
            }
        }
    }
}

fn print_dashboard(view: &DashboardView) {
    println!("My courses:");
    if view.courses.is_empty() {
        println!("  No courses yet.");
    }
    for c in &view.courses {
        println!("  #{} {}", c.id, c.title);
    }
    print_pending(&view.pending);
}

fn print_pending(pending: &[eduplatform_client::models::enrollment::PendingApproval]) {
    println!("Pending enrollments:");
    if pending.is_empty() {
        println!("  No pending requests.");
        return;
    }
    for p in pending {
        println!(
            "  #{} {} → {}",
            p.id,
            p.student_name.as_deref().unwrap_or("(unknown student)"),
            p.course_title.as_deref().unwrap_or("(unknown course)"),
        );
        println!(
            "      approve: eduplatform admin approve {0} | reject: eduplatform admin reject {0}",
            p.id
        );
    }
}
