use super::{Error, ErrorKind};

/// A failure reported by the client library behind a [`Driver`].
///
/// [`Driver`]: crate::Driver
#[derive(Debug)]
pub(super) struct DriverOperationFailed {
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverOperationFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl core::fmt::Display for DriverOperationFailed {
    /// Renders the client error followed by its own source chain, so the
    /// message survives drivers that nest their errors.
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let first: &(dyn std::error::Error + 'static) = self.source.as_ref();
        let mut sep = "";
        for err in std::iter::successors(Some(first), |err| err.source()) {
            write!(f, "{sep}{err}")?;
            sep = ": ";
        }
        Ok(())
    }
}

impl Error {
    /// Wraps an error raised by a driver's client library, such as a
    /// connection or RPC failure.
    pub fn driver_operation_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(ErrorKind::DriverOperationFailed(DriverOperationFailed {
            source: Box::new(err),
        }))
    }

    pub fn is_driver_operation_failed(&self) -> bool {
        matches!(self.kind(), ErrorKind::DriverOperationFailed(_))
    }
}
