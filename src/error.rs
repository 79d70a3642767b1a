use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthError {
    #[error("Missing required columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("Invalid renewal date '{value}' for {customer}: {source}")]
    InvalidDate {
        customer: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Customer '{name}' not found")]
    CustomerNotFound { name: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type HealthResult<T> = Result<T, HealthError>;
