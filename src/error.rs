use std::borrow::Cow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The payload of an [`Optional::None`](crate::Optional::None) was
    /// requested through a checked accessor.
    InvalidState {
        /// Short name of the payload type
        type_name: Cow<'static, str>,
    },
}

impl Error {
    pub(crate) fn invalid_state<T>() -> Self {
        Error::InvalidState {
            type_name: crate::value::type_name::<T>(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidState { type_name } => {
                write!(f, "no value present in None<{type_name}>()")
            }
        }
    }
}

impl std::error::Error for Error {}
