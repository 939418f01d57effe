use crate::errors::{HooError, Result};
use linfa::ParamGuard;
use ndarray::{Array2, ArrayBase, Data, Ix2};
use xabox_partition::Split;

/// Default smoothness scale
pub const DEFAULT_NU: f64 = 1.;
/// Default smoothness decay
pub const DEFAULT_RHO: f64 = 0.5;
/// Default horizon
pub const DEFAULT_ROUNDS: usize = 1000;

pub(crate) const MISSING_DOMAIN: &str = "Parameter space is not given";
pub(crate) const MISSING_PARTITION: &str = "Partition of the parameter space is not given";

/// A set of validated T-HOO parameters.
#[derive(Clone, Debug)]
pub struct ThooValidParams<Sp: Split> {
    /// Smoothness scale, `nu > 0`
    pub(crate) nu: f64,
    /// Smoothness decay with depth, `0 < rho < 1`
    pub(crate) rho: f64,
    /// Planning horizon, used by the confidence width and the truncation depth
    pub(crate) rounds: usize,
    /// Search space as a (nx, 2) matrix \[\[lower bound, upper bound\], ...\]
    pub(crate) xlimits: Option<Array2<f64>>,
    /// Splitting strategy of the partition
    pub(crate) split: Option<Sp>,
}

impl<Sp: Split> Default for ThooValidParams<Sp> {
    fn default() -> Self {
        ThooValidParams {
            nu: DEFAULT_NU,
            rho: DEFAULT_RHO,
            rounds: DEFAULT_ROUNDS,
            xlimits: None,
            split: None,
        }
    }
}

impl<Sp: Split> ThooValidParams<Sp> {
    /// Get smoothness scale
    pub fn nu(&self) -> f64 {
        self.nu
    }

    /// Get smoothness decay
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Get horizon
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Get search space
    pub fn xlimits(&self) -> Option<&Array2<f64>> {
        self.xlimits.as_ref()
    }

    /// Get split strategy
    pub fn split(&self) -> Option<&Sp> {
        self.split.as_ref()
    }
}

/// T-HOO parameters builder
///
/// ```
/// use xabox_hoo::ThooParams;
/// use xabox_partition::BinarySplit;
/// use linfa::ParamGuard;
/// use ndarray::arr2;
///
/// let params = ThooParams::new()
///     .nu(1.)
///     .rho(0.5)
///     .rounds(100)
///     .domain(&arr2(&[[0., 1.]]))
///     .partition(BinarySplit);
/// assert!(params.check_ref().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct ThooParams<Sp: Split>(pub(crate) ThooValidParams<Sp>);

impl<Sp: Split> Default for ThooParams<Sp> {
    fn default() -> Self {
        ThooParams(ThooValidParams::default())
    }
}

impl<Sp: Split> ThooParams<Sp> {
    /// A constructor for T-HOO parameters with default hyperparameters,
    /// neither search space nor partition strategy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set smoothness scale `nu`
    pub fn nu(mut self, nu: f64) -> Self {
        self.0.nu = nu;
        self
    }

    /// Set smoothness decay `rho`
    pub fn rho(mut self, rho: f64) -> Self {
        self.0.rho = rho;
        self
    }

    /// Set horizon, the total number of rounds planned
    pub fn rounds(mut self, rounds: usize) -> Self {
        self.0.rounds = rounds;
        self
    }

    /// Set search space as a (nx, 2) matrix \[\[lower bound, upper bound\], ...\]
    pub fn domain(mut self, xlimits: &ArrayBase<impl Data<Elem = f64>, Ix2>) -> Self {
        self.0.xlimits = Some(xlimits.to_owned());
        self
    }

    /// Set strategy used to split a region into children
    pub fn partition(mut self, split: Sp) -> Self {
        self.0.split = Some(split);
        self
    }
}

impl<Sp: Split> ParamGuard for ThooParams<Sp> {
    type Checked = ThooValidParams<Sp>;
    type Error = HooError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        let params = &self.0;
        let xlimits = params
            .xlimits
            .as_ref()
            .ok_or_else(|| HooError::InvalidConfigError(MISSING_DOMAIN.to_string()))?;
        if params.split.is_none() {
            return Err(HooError::InvalidConfigError(MISSING_PARTITION.to_string()));
        }
        if xlimits.ncols() != 2 || xlimits.nrows() == 0 {
            return Err(HooError::InvalidConfigError(format!(
                "Parameter space should be a (nx, 2) matrix with nx > 0, got {:?}",
                xlimits.shape()
            )));
        }
        for (i, row) in xlimits.rows().into_iter().enumerate() {
            if !(row[0].is_finite() && row[1].is_finite() && row[0] <= row[1]) {
                return Err(HooError::InvalidConfigError(format!(
                    "Invalid bounds [{}, {}] for component {i}",
                    row[0], row[1]
                )));
            }
        }
        if !(params.nu.is_finite() && params.nu > 0.) {
            return Err(HooError::InvalidConfigError(format!(
                "`nu` should be strictly positive, got {}",
                params.nu
            )));
        }
        if !(params.rho > 0. && params.rho < 1.) {
            return Err(HooError::InvalidConfigError(format!(
                "`rho` should be in (0, 1), got {}",
                params.rho
            )));
        }
        if params.rounds < 1 {
            return Err(HooError::InvalidConfigError(
                "`rounds` should be at least 1".to_string(),
            ));
        }
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
