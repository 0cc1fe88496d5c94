use thiserror::Error;

/// Everything in here is a build misconfiguration. None of it can happen because of what the microphone hears.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeterError {
    #[error("meter was already initialized")]
    AlreadyInitialized,
    #[error("window table has {actual} coefficients but the block length is {expected}")]
    WindowLength { expected: usize, actual: usize },
    #[error("weighting table has {actual} coefficients but the meter has {expected} bins")]
    WeightingLength { expected: usize, actual: usize },
    #[error("tables were generated for {actual} samples per block, not {expected}")]
    TableBlockLength { expected: usize, actual: usize },
    #[error("tables were generated for {actual} Hz, not {expected} Hz")]
    TableSampleRate { expected: u32, actual: u32 },
    #[error("smoothing alpha must be in (0, 1]")]
    InvalidSmoothing,
    #[error("adc full scale must be non-zero")]
    InvalidAdcScale,
    #[error("adc reference voltage must be positive")]
    InvalidReferenceVoltage,
    #[error("microphone sensitivity must be positive")]
    InvalidSensitivity,
    #[error("sample rate must be non-zero")]
    InvalidSampleRate,
}

pub type MeterResult<T> = Result<T, MeterError>;
