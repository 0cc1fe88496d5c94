#[cfg(feature = "log")]
pub use log::{debug, error, info, trace, warn};

#[cfg(all(feature = "defmt", not(feature = "log")))]
pub use defmt::{debug, error, info, trace, warn};

#[cfg(not(any(feature = "log", feature = "defmt")))]
compile_error!("enable the `log` or the `defmt` feature");
