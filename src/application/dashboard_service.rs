// Dashboard service - Resolves what each role gets to see
use crate::domain::dashboard::Dashboard;
use crate::domain::navigation::{self, NavigationEntry};
use crate::domain::role::Role;
use crate::domain::stats::{Activity, StatCard, Trend, TrendPoint};
use crate::domain::user::User;
use serde::Serialize;

/// Navigation plus dashboard content for a single role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleView {
    pub role: Role,
    pub navigation: Vec<NavigationEntry>,
    pub dashboard: Dashboard,
}

/// Which screen the client should render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AppView {
    Login,
    Dashboard { user: User, view: RoleView },
}

#[derive(Debug, Clone, Default)]
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    pub fn navigation_for(&self, role: Role, current_path: &str) -> Vec<NavigationEntry> {
        navigation::for_role(role, current_path)
    }

    pub fn dashboard_for(&self, role: Role) -> Dashboard {
        match role {
            Role::Admin => ADMIN_DASHBOARD,
            Role::School => SCHOOL_DASHBOARD,
            Role::Parent => PARENT_DASHBOARD,
            Role::Student => STUDENT_DASHBOARD,
        }
    }

    pub fn resolve(&self, role: Role, current_path: &str) -> RoleView {
        RoleView {
            role,
            navigation: self.navigation_for(role, current_path),
            dashboard: self.dashboard_for(role),
        }
    }

    /// Login gate: no session means the login screen.
    pub fn current_view(&self, session: Option<User>, current_path: &str) -> AppView {
        match session {
            None => AppView::Login,
            Some(user) => {
                let view = self.resolve(user.role, current_path);
                AppView::Dashboard { user, view }
            }
        }
    }
}

const ADMIN_STATS: &[StatCard] = &[
    StatCard::new("Total Schools", "42", "school", Trend::up(15)),
    StatCard::new("Total Students", "12,456", "users", Trend::up(8)),
    StatCard::new("Average Performance", "78%", "trophy", Trend::up(5)),
];

const ADMIN_PERFORMANCE: &[TrendPoint] = &[
    TrendPoint::new("Jan", 72.0),
    TrendPoint::new("Feb", 75.0),
    TrendPoint::new("Mar", 78.0),
    TrendPoint::new("Apr", 74.0),
    TrendPoint::new("May", 80.0),
    TrendPoint::new("Jun", 82.0),
];

const ADMIN_ACTIVITY: &[Activity] = &[
    Activity::new(1, "New School Onboarded", "Lincoln High School joined the platform", "1h ago"),
    Activity::new(2, "Performance Report", "Monthly performance report generated", "3h ago"),
    Activity::new(3, "System Update", "New features deployed successfully", "1d ago"),
];

const ADMIN_DASHBOARD: Dashboard = Dashboard::new(
    "System Overview",
    "Overall System Performance",
    ADMIN_STATS,
    ADMIN_PERFORMANCE,
    ADMIN_ACTIVITY,
);

const SCHOOL_STATS: &[StatCard] = &[
    StatCard::new("Total Students", "1,234", "users", Trend::up(12)),
    StatCard::new("Active Classes", "42", "graduation-cap", Trend::up(8)),
    StatCard::new("Average Score", "87%", "book-open", Trend::up(3)),
];

const SCHOOL_PERFORMANCE: &[TrendPoint] = &[
    TrendPoint::new("Jan", 65.0),
    TrendPoint::new("Feb", 72.0),
    TrendPoint::new("Mar", 68.0),
    TrendPoint::new("Apr", 75.0),
    TrendPoint::new("May", 82.0),
    TrendPoint::new("Jun", 87.0),
];

const SCHOOL_ACTIVITY: &[Activity] = &[
    Activity::new(1, "New Student Enrolled", "Sarah Johnson joined Class 10A", "2h ago"),
    Activity::new(2, "Assignment Submitted", "Math homework submitted by 15 students", "3h ago"),
    Activity::new(3, "Exam Results Published", "Science mid-term results are now available", "5h ago"),
];

const SCHOOL_DASHBOARD: Dashboard = Dashboard::new(
    "School Dashboard",
    "School Performance Trend",
    SCHOOL_STATS,
    SCHOOL_PERFORMANCE,
    SCHOOL_ACTIVITY,
);

const PARENT_STATS: &[StatCard] = &[
    StatCard::new("Assignments", "8", "book-open", Trend::up(2)),
    StatCard::new("Attendance", "95%", "user-check", Trend::up(1)),
    StatCard::new("Average Grade", "A-", "trophy", Trend::up(4)),
];

const PARENT_PERFORMANCE: &[TrendPoint] = &[
    TrendPoint::new("Jan", 78.0),
    TrendPoint::new("Feb", 82.0),
    TrendPoint::new("Mar", 81.0),
    TrendPoint::new("Apr", 85.0),
    TrendPoint::new("May", 88.0),
    TrendPoint::new("Jun", 90.0),
];

const PARENT_ACTIVITY: &[Activity] = &[
    Activity::new(1, "Math Test", "Scored 92% in Advanced Algebra", "2d ago"),
    Activity::new(2, "Parent Meeting", "Scheduled for next Tuesday", "1d ago"),
    Activity::new(3, "Project Submission", "Science project due in 3 days", "12h ago"),
];

const PARENT_DASHBOARD: Dashboard = Dashboard::new(
    "Student Progress",
    "Student Performance History",
    PARENT_STATS,
    PARENT_PERFORMANCE,
    PARENT_ACTIVITY,
);

const STUDENT_STATS: &[StatCard] = &[
    StatCard::new("Current Grade", "A-", "trophy", Trend::up(5)),
    StatCard::new("Completed Tasks", "45", "book-open", Trend::up(12)),
    StatCard::new("Attendance", "92%", "user-check", Trend::down(2)),
];

const STUDENT_PERFORMANCE: &[TrendPoint] = &[
    TrendPoint::new("Jan", 70.0),
    TrendPoint::new("Feb", 75.0),
    TrendPoint::new("Mar", 85.0),
    TrendPoint::new("Apr", 82.0),
    TrendPoint::new("May", 88.0),
    TrendPoint::new("Jun", 92.0),
];

const STUDENT_ACTIVITY: &[Activity] = &[
    Activity::new(1, "Assignment Due", "History essay deadline tomorrow", "1h ago"),
    Activity::new(2, "Quiz Result", "Scored 95% in Biology quiz", "1d ago"),
    Activity::new(3, "New Course Material", "Physics chapter 5 notes available", "2h ago"),
];

const STUDENT_DASHBOARD: Dashboard = Dashboard::new(
    "My Dashboard",
    "My Performance Trend",
    STUDENT_STATS,
    STUDENT_PERFORMANCE,
    STUDENT_ACTIVITY,
);
