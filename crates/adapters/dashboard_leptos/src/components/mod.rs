mod camera;
mod clock;
mod dashboard_list;
mod detections_table;
mod forms;
mod loading;
mod nav;
mod risk_modal;
mod risk_panel;
mod toast;

pub use camera::{CameraFeed, CameraSelect, CameraStatusLine};
pub use clock::HeaderClock;
pub use dashboard_list::DashboardList;
pub use detections_table::DetectionsTable;
pub use forms::{AddCameraForm, CreateDashboardForm};
pub use loading::Loading;
pub use nav::Nav;
pub use risk_modal::RiskModal;
pub use risk_panel::RiskCard;
pub use toast::{ToastContainer, ToastProvider, use_toasts};
