use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::category::{CategorySet, OrdinalColorScale, UNCATEGORIZED_COLOR};
use crate::core::record::{CategoryKey, Dataset, Record};
use crate::core::scale::{LinearScale, SqrtScale};
use crate::core::types::PlotArea;
use crate::error::{ScatterError, ScatterResult};
use crate::render::Color;

/// Tick count used when rounding x/y domains.
pub const NICE_TICK_COUNT: usize = 10;

/// Domain used when a field has no representable values at all.
const FALLBACK_DOMAIN: (f64, f64) = (0.0, 1.0);

/// Names of the record fields that drive position, size and color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelectors {
    pub x: String,
    pub y: String,
    pub radius: String,
    pub color: String,
}

impl FieldSelectors {
    #[must_use]
    pub fn new(
        x: impl Into<String>,
        y: impl Into<String>,
        radius: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            radius: radius.into(),
            color: color.into(),
        }
    }
}

/// Pixel-space geometry of one record, relative to the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointGeometry {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Color,
}

impl PointGeometry {
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        let dx = x - self.cx;
        let dy = y - self.cy;
        dx * dx + dy * dy <= self.r * self.r
    }
}

/// Maps raw record values to pixel positions, radii and fills.
///
/// Extents come from the whole dataset once, at construction. Nothing here is
/// recomputed afterwards, so positions stay stable while selection changes.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMapper {
    fields: FieldSelectors,
    x: LinearScale,
    y: LinearScale,
    radius: SqrtScale,
    color: OrdinalColorScale,
}

impl CoordinateMapper {
    pub fn new(
        dataset: &Dataset,
        fields: FieldSelectors,
        area: PlotArea,
        radius_range: (f64, f64),
    ) -> ScatterResult<Self> {
        if !area.is_valid() {
            return Err(ScatterError::InvalidData(
                "plot area must be finite and non-empty".to_owned(),
            ));
        }

        let x_extent = dataset.extent(&fields.x).unwrap_or(FALLBACK_DOMAIN);
        let y_extent = dataset.extent(&fields.y).unwrap_or(FALLBACK_DOMAIN);
        let r_extent = dataset.extent(&fields.radius).unwrap_or(FALLBACK_DOMAIN);

        let x = LinearScale::new(x_extent, (0.0, area.width))?.nice(NICE_TICK_COUNT);
        let y = LinearScale::new(y_extent, (area.height, 0.0))?.nice(NICE_TICK_COUNT);
        let radius = SqrtScale::new(r_extent, radius_range)?;
        let color = OrdinalColorScale::new(CategorySet::from_dataset(dataset, &fields.color));

        let unrepresentable = dataset
            .records()
            .iter()
            .filter(|record| !is_representable(record, &fields))
            .count();
        if unrepresentable > 0 {
            warn!(
                unrepresentable,
                total = dataset.len(),
                "records with missing numeric fields will not be plotted"
            );
        }
        debug!(
            records = dataset.len(),
            x_domain = ?x.domain(),
            y_domain = ?y.domain(),
            radius_domain = ?radius.domain(),
            categories = color.categories().len(),
            "coordinate mapper built"
        );

        Ok(Self {
            fields,
            x,
            y,
            radius,
            color,
        })
    }

    #[must_use]
    pub fn fields(&self) -> &FieldSelectors {
        &self.fields
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y
    }

    #[must_use]
    pub fn radius_scale(&self) -> SqrtScale {
        self.radius
    }

    #[must_use]
    pub fn color_scale(&self) -> &OrdinalColorScale {
        &self.color
    }

    #[must_use]
    pub fn categories(&self) -> &CategorySet {
        self.color.categories()
    }

    /// Projected `(cx, cy)` or `None` when x or y is not representable.
    #[must_use]
    pub fn position(&self, record: &Record) -> Option<(f64, f64)> {
        let x = record.number(&self.fields.x)?;
        let y = record.number(&self.fields.y)?;
        Some((self.x.map(x), self.y.map(y)))
    }

    #[must_use]
    pub fn radius(&self, record: &Record) -> Option<f64> {
        record
            .number(&self.fields.radius)
            .map(|value| self.radius.map(value))
    }

    #[must_use]
    pub fn category(&self, record: &Record) -> Option<CategoryKey> {
        record.category(&self.fields.color)
    }

    #[must_use]
    pub fn fill(&self, record: &Record) -> Color {
        self.category(record)
            .map_or(UNCATEGORIZED_COLOR, |category| self.color.color(&category))
    }

    #[must_use]
    pub fn project(&self, record: &Record) -> Option<PointGeometry> {
        let (cx, cy) = self.position(record)?;
        let r = self.radius(record)?;
        Some(PointGeometry {
            cx,
            cy,
            r,
            fill: self.fill(record),
        })
    }

    /// Projects every record in dataset order.
    #[must_use]
    pub fn project_all(&self, dataset: &Dataset) -> Vec<Option<PointGeometry>> {
        #[cfg(feature = "parallel-projection")]
        {
            use rayon::prelude::*;
            dataset
                .records()
                .par_iter()
                .map(|record| self.project(record))
                .collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            dataset
                .records()
                .iter()
                .map(|record| self.project(record))
                .collect()
        }
    }
}

fn is_representable(record: &Record, fields: &FieldSelectors) -> bool {
    record.number(&fields.x).is_some()
        && record.number(&fields.y).is_some()
        && record.number(&fields.radius).is_some()
}
