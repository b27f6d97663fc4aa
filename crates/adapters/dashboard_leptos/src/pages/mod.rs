mod live;
mod manage;
mod not_found;

pub use live::LiveDashboard;
pub use manage::Manage;
pub use not_found::NotFound;
