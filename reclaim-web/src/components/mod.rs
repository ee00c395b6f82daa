pub(crate) mod loading;
pub(crate) mod pie_chart;
pub(crate) mod toast;

// Re-export components for convenience
pub use loading::Loading;
pub use pie_chart::{PieChart, StreamSlice, palette_color, stream_series};
pub use toast::{Toast, ToastKind, ToastMessage};
