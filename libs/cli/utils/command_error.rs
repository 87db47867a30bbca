use taxdoc_core::CoreError;

use crate::utils::exit_code::ExitCode;

pub enum Error {
    ExitWithError(ExitCode, eyre::Report),
}

pub type Result<T> = std::result::Result<T, Error>;

impl<E> From<E> for Error
where
    E: Into<eyre::Report>,
{
    #[track_caller]
    fn from(error: E) -> Self {
        let r: eyre::Report = error.into();
        let code = if r.downcast_ref::<CoreError>().is_some() {
            ExitCode::DataError
        } else {
            ExitCode::Error
        };
        Self::ExitWithError(code, r)
    }
}
