use petal_common::PetalError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("No binding declares a simple identifier pattern")]
    NoIdentifierPattern,
    #[error("No binding carries an accessor block")]
    NoAccessorBlock,
    #[error("Accessor list has no getter that could be replaced")]
    NoGetterToReplace,
    #[error("Declaration with name {ident} already existed")]
    IdentifierAlreadyExists { ident: String },
}

pub type EditResult<T> = Result<T, PetalError<EditError>>;
