pub mod error;
pub mod fetcher;
pub mod gate;
pub mod model;
pub mod transform;

pub use error::{LookupError, LookupResult};
pub use fetcher::{DictionaryLookup, Fetcher};
pub use gate::{Admission, Clock, RateGate, SystemClock};
pub use model::{Definition, Response};
