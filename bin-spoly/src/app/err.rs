// Errors raised by the driver itself. Parse errors coming from `spoly` are
// passed through unchanged.

#[derive(Debug, derive_more::Display)]
#[display("{msg}")]
pub struct CliError {
    msg: String
}

impl CliError {
    pub fn new(msg: String) -> Self {
        Self { msg }
    }
}

impl std::error::Error for CliError {}

pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

macro_rules! bail {
    ($($arg:tt)*) => {{
        let e = crate::app::err::CliError::new(format!($($arg)*));
        return Err(e.into())
    }}
}

macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {{
        if !$cond {
            bail!($($arg)*);
        }
    }}
}

pub(crate) use {bail, ensure};
