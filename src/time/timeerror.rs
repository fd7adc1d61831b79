use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimeError {
    #[error("unable to parse {input:?} as an ISO 8601 time: {source}")]
    Parse {
        input: String,
        #[source]
        source: chrono::ParseError
    }
}
