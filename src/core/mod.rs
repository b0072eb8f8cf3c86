pub mod data_bounds;
pub mod pane;
pub mod primitives;
pub mod record;
pub mod study;
pub mod types;

pub use data_bounds::{DataBounds, DataBoundsConfig};
pub use pane::{PaneDescriptor, PaneId};
pub use primitives::{CROSSHAIR_DATE_FORMAT, format_fixed, format_timestamp_millis};
pub use record::Record;
pub use study::{StudyDescriptor, StudyKind, StudyRegistry};
pub use types::{ContentArea, ContentInsets, Point, Viewport, ViewportGeometry, canvas_point};
