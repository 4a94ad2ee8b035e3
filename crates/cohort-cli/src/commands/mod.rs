pub mod correlate;
pub mod dispatch;
pub mod insights;
pub mod personas;
pub mod schema;
pub mod shared;
pub mod student;
pub mod students;
pub mod top;
