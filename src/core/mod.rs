pub mod category;
pub mod mapper;
pub mod record;
pub mod scale;
pub mod types;

pub use category::{CategorySet, OrdinalColorScale, TABLEAU10, UNCATEGORIZED_COLOR};
pub use mapper::{CoordinateMapper, FieldSelectors, NICE_TICK_COUNT, PointGeometry};
pub use record::{CategoryKey, Dataset, FieldValue, Record};
pub use scale::{LinearScale, SqrtScale, format_tick};
pub use types::{PlotArea, Viewport};
