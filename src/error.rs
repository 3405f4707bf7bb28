use std::{fmt, io};

#[derive(Debug)]
pub enum AppError {
    Bind { addr: String, source: io::Error },
    Serve(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Bind { addr, source } => write!(f, "failed to bind {}: {}", addr, source),
            AppError::Serve(e) => write!(f, "server error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Bind { source, .. } => Some(source),
            AppError::Serve(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn bind_error_keeps_source() {
        let err = AppError::Bind {
            addr: "127.0.0.1:5000".to_string(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(err.to_string(), "failed to bind 127.0.0.1:5000: address in use");
        assert!(err.source().is_some());
    }
}
