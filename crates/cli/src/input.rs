//! Load point streams from CSV or Parquet tables.

use anyhow::{bail, Context, Result};
use plr::{point, Point};
use polars::prelude::*;
use std::path::Path;

/// Read two numeric columns as points, in file order.
pub fn read_points(path: &Path, x_col: &str, y_col: &str) -> Result<Vec<Point>> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("opening {}", path.display()))?,
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("opening {}", path.display()))?,
        _ => bail!("unsupported input {} (expected .csv or .parquet)", path.display()),
    };
    let df = lf
        .select([
            col(x_col).cast(DataType::Float64),
            col(y_col).cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns {x_col:?}, {y_col:?}"))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_shape");

    let xs = df.column(x_col)?.f64()?;
    let ys = df.column(y_col)?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(point(x, y)),
            _ => bail!("row {row}: missing {x_col} or {y_col}"),
        })
        .collect()
}

/// The segmenter assumes strictly increasing x; report the first violation.
pub fn check_ordered(points: &[Point]) -> Result<()> {
    if let Some((i, w)) = points.windows(2).enumerate().find(|(_, w)| w[1].x <= w[0].x) {
        bail!(
            "x must be strictly increasing: row {} has x = {} after x = {}",
            i + 1,
            w[1].x,
            w[0].x
        );
    }
    Ok(())
}
