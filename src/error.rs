use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum IntakeError {
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),
    #[error("Order already submitted")]
    AlreadySubmitted,
    #[error("Order store error: {0}")]
    Store(#[from] OrderError),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdminError {
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),
    #[error("Price is not a non-negative number: {0:?}")]
    InvalidPrice(String),
    #[error("No product image selected")]
    MissingImage,
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
