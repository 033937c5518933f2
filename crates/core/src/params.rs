use thiserror::Error;

/// An error returned when a model quantity is outside its domain.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum ParamError {
    #[error("expected blocking_prob={0} to be strictly between 0 and 1")]
    BlockingProb(f64),

    #[error("expected n_servers={0} to be a positive integer")]
    Servers(u64),

    #[error("expected n_sources={n_sources} to be an integer greater than {n_servers}")]
    Sources { n_sources: u64, n_servers: u64 },

    #[error("expected total_traffic={0} to be positive")]
    Traffic(f64),

    #[error("expected {name}={value} to be a non-negative integer")]
    NotACount { name: &'static str, value: f64 },
}

/// A blocking probability in the open interval `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BlockingProb(f64);

impl BlockingProb {
    /// Creates a `BlockingProb` if `0 < value < 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::BlockingProb`] for values outside `(0, 1)`,
    /// including `NaN`.
    pub fn new(value: f64) -> Result<Self, ParamError> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(ParamError::BlockingProb(value))
        }
    }

    /// Returns the inner `f64`.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Total offered traffic from all sources, in Erlangs.
///
/// Satisfies `total_traffic = n_sources * per_source_traffic`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Traffic(f64);

impl Traffic {
    /// Creates a `Traffic` if `value` is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::Traffic`] otherwise.
    pub fn new(value: f64) -> Result<Self, ParamError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(ParamError::Traffic(value))
        }
    }

    /// Returns the inner `f64`.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

/// A positive number of servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Servers(u64);

impl Servers {
    /// A single server.
    pub const ONE: Self = Self(1);

    /// Creates a `Servers` count if `value >= 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::Servers`] for zero.
    pub fn new(value: u64) -> Result<Self, ParamError> {
        if value == 0 {
            return Err(ParamError::Servers(value));
        }
        Ok(Self(value))
    }

    /// Returns the inner count.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A number of sources strictly greater than the number of servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sources(u64);

impl Sources {
    /// Creates a `Sources` count if `value > servers`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::Sources`] otherwise.
    pub fn new(value: u64, servers: Servers) -> Result<Self, ParamError> {
        if value <= servers.get() {
            return Err(ParamError::Sources {
                n_sources: value,
                n_servers: servers.get(),
            });
        }
        Ok(Self(value))
    }

    /// Returns the inner count.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A fully specified Engset system.
///
/// # Examples
///
/// ```
/// use engset_core::ModelParams;
///
/// let params = ModelParams::new(5, 10, 2.0).unwrap();
/// assert_eq!(params.n_servers(), 5);
/// assert_eq!(params.traffic_per_source(), 0.2);
///
/// assert!(ModelParams::new(5, 5, 2.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    servers: Servers,
    sources: Sources,
    traffic: Traffic,
}

impl ModelParams {
    /// Validates and bundles the three model quantities.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParamError`] found, checking servers, then sources,
    /// then traffic.
    pub fn new(n_servers: u64, n_sources: u64, total_traffic: f64) -> Result<Self, ParamError> {
        let servers = Servers::new(n_servers)?;
        let sources = Sources::new(n_sources, servers)?;
        let traffic = Traffic::new(total_traffic)?;
        Ok(Self {
            servers,
            sources,
            traffic,
        })
    }

    /// Returns the number of servers.
    #[must_use]
    pub fn n_servers(&self) -> u64 {
        self.servers.get()
    }

    /// Returns the number of sources.
    #[must_use]
    pub fn n_sources(&self) -> u64 {
        self.sources.get()
    }

    /// Returns the total offered traffic in Erlangs.
    #[must_use]
    pub fn total_traffic(&self) -> f64 {
        self.traffic.get()
    }

    /// Returns the offered traffic per source in Erlangs.
    ///
    /// Values above one are mathematically valid but lose the usual physical
    /// reading of a source that is busy at most all of the time.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn traffic_per_source(&self) -> f64 {
        self.traffic.get() / self.sources.get() as f64
    }
}

/// Converts a float-typed count into an exact integer.
///
/// # Errors
///
/// Returns [`ParamError::NotACount`] if `value` is negative, fractional,
/// non-finite, or too large for a `u64`.
///
/// # Examples
///
/// ```
/// use engset_core::count_from_f64;
///
/// assert_eq!(count_from_f64("n_servers", 5.0), Ok(5));
/// assert!(count_from_f64("n_servers", 5.5).is_err());
/// assert!(count_from_f64("n_servers", -1.0).is_err());
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn count_from_f64(name: &'static str, value: f64) -> Result<u64, ParamError> {
    // 2^64 is the first float that no longer fits.
    const LIMIT: f64 = 18_446_744_073_709_551_616.0;

    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < LIMIT {
        Ok(value as u64)
    } else {
        Err(ParamError::NotACount { name, value })
    }
}
