use crate::signal::Series;

/// Common error type for the CSV ingest path.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("input table must contain a `{0}` column")]
    Schema(String),
    #[error("row {row}: cannot parse {column} value `{value}`")]
    Parse {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("reading input: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed table: {0}")]
    Csv(#[from] csv::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Trait describing the pure stages chained by the analysis driver.
///
/// Stages never mutate their input; every invocation derives a fresh output
/// from the series and the stage parameters.
pub trait PipelineStage {
    type Output;

    fn execute(&self, series: &Series) -> Self::Output;
}
